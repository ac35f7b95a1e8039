//! Board utilities: coordinates and the generic occupancy grid
//!
//! The [`Grid`] knows nothing about chess. It owns a `rows × columns` array of
//! optional occupants, enforces bounds, and keeps each occupant's recorded
//! coordinate in step with the cell holding it through the [`Occupant`]
//! trait.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ChessError, ChessResult};

/// A (row, column) pair on a grid. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    row: usize,
    column: usize,
}

impl Coordinate {
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    #[inline]
    pub const fn column(self) -> usize {
        self.column
    }

    /// Shift by a signed step. `None` when the result would be negative;
    /// the upper bound is the grid's business (see [`Grid::exists`]).
    #[inline]
    pub fn offset(self, d_row: i32, d_column: i32) -> Option<Coordinate> {
        let row = self.row.checked_add_signed(d_row as isize)?;
        let column = self.column.checked_add_signed(d_column as isize)?;
        Some(Coordinate::new(row, column))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Something that can sit on a [`Grid`] and remembers where it sits.
pub trait Occupant {
    fn coordinate(&self) -> Option<Coordinate>;

    fn set_coordinate(&mut self, coordinate: Option<Coordinate>);
}

/// Fixed-size grid with at most one occupant per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    columns: usize,
    cells: Vec<Option<T>>,
}

impl<T: Occupant> Grid<T> {
    /// Create an empty grid; both dimensions must be at least 1.
    pub fn new(rows: usize, columns: usize) -> ChessResult<Self> {
        if rows < 1 || columns < 1 {
            return Err(ChessError::Configuration { rows, columns });
        }
        let mut cells = Vec::with_capacity(rows * columns);
        cells.resize_with(rows * columns, || None);
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Pure boundary check, never fails.
    #[inline]
    pub fn exists(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.rows && coordinate.column < self.columns
    }

    fn index(&self, coordinate: Coordinate) -> ChessResult<usize> {
        if !self.exists(coordinate) {
            return Err(ChessError::OutOfBounds {
                row: coordinate.row,
                column: coordinate.column,
            });
        }
        Ok(coordinate.row * self.columns + coordinate.column)
    }

    pub fn occupant(&self, coordinate: Coordinate) -> ChessResult<Option<&T>> {
        let index = self.index(coordinate)?;
        Ok(self.cells[index].as_ref())
    }

    pub fn occupant_at(&self, row: usize, column: usize) -> ChessResult<Option<&T>> {
        self.occupant(Coordinate::new(row, column))
    }

    /// Lenient lookup for move generation: `None` for empty and off-board cells alike.
    #[inline]
    pub fn get(&self, coordinate: Coordinate) -> Option<&T> {
        self.occupant(coordinate).ok().flatten()
    }

    pub fn has_occupant(&self, coordinate: Coordinate) -> ChessResult<bool> {
        Ok(self.occupant(coordinate)?.is_some())
    }

    /// Store `occupant` at `coordinate` and stamp its recorded coordinate.
    pub fn place(&mut self, mut occupant: T, coordinate: Coordinate) -> ChessResult<()> {
        let index = self.index(coordinate)?;
        if self.cells[index].is_some() {
            return Err(ChessError::Occupied {
                row: coordinate.row,
                column: coordinate.column,
            });
        }
        occupant.set_coordinate(Some(coordinate));
        self.cells[index] = Some(occupant);
        Ok(())
    }

    /// Take the occupant out of `coordinate`, clearing its recorded coordinate.
    ///
    /// An empty cell yields `Ok(None)`: callers probe speculatively.
    pub fn remove(&mut self, coordinate: Coordinate) -> ChessResult<Option<T>> {
        let index = self.index(coordinate)?;
        let mut removed = self.cells[index].take();
        if let Some(occupant) = removed.as_mut() {
            occupant.set_coordinate(None);
        }
        Ok(removed)
    }

    /// All occupants in row-major order.
    pub fn occupants(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter().filter_map(Option::as_ref)
    }

    /// Snapshot of every cell, row by row.
    pub fn map_cells<U>(&self, mut f: impl FnMut(&T) -> U) -> Vec<Vec<Option<U>>> {
        self.cells
            .chunks(self.columns)
            .map(|row| row.iter().map(|cell| cell.as_ref().map(&mut f)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Token {
        name: &'static str,
        at: Option<Coordinate>,
    }

    impl Token {
        fn new(name: &'static str) -> Self {
            Self { name, at: None }
        }
    }

    impl Occupant for Token {
        fn coordinate(&self) -> Option<Coordinate> {
            self.at
        }

        fn set_coordinate(&mut self, coordinate: Option<Coordinate>) {
            self.at = coordinate;
        }
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            Grid::<Token>::new(0, 8).unwrap_err(),
            ChessError::Configuration { rows: 0, columns: 8 }
        );
        assert_eq!(
            Grid::<Token>::new(8, 0).unwrap_err(),
            ChessError::Configuration { rows: 8, columns: 0 }
        );
        assert!(Grid::<Token>::new(1, 1).is_ok());
    }

    #[test]
    fn place_stamps_and_remove_clears_coordinate() {
        let mut grid = Grid::new(3, 4).unwrap();
        let at = Coordinate::new(2, 3);
        grid.place(Token::new("a"), at).unwrap();

        let placed = grid.occupant(at).unwrap().unwrap();
        assert_eq!(placed.coordinate(), Some(at));
        assert!(grid.has_occupant(at).unwrap());

        let removed = grid.remove(at).unwrap().unwrap();
        assert_eq!(removed.name, "a");
        assert_eq!(removed.coordinate(), None);
        assert!(!grid.has_occupant(at).unwrap());
    }

    #[test]
    fn one_occupant_per_cell() {
        let mut grid = Grid::new(2, 2).unwrap();
        let at = Coordinate::new(1, 1);
        grid.place(Token::new("a"), at).unwrap();
        assert_eq!(
            grid.place(Token::new("b"), at).unwrap_err(),
            ChessError::Occupied { row: 1, column: 1 }
        );
        assert_eq!(grid.occupant(at).unwrap().unwrap().name, "a");
    }

    #[test]
    fn removing_from_empty_cell_is_not_an_error() {
        let mut grid: Grid<Token> = Grid::new(2, 2).unwrap();
        assert_eq!(grid.remove(Coordinate::new(0, 0)).unwrap(), None);
    }

    #[test]
    fn bounds_are_enforced() {
        let mut grid: Grid<Token> = Grid::new(2, 3).unwrap();
        let outside = Coordinate::new(2, 0);

        assert!(!grid.exists(outside));
        assert!(grid.exists(Coordinate::new(1, 2)));
        assert_eq!(
            grid.occupant(outside).unwrap_err(),
            ChessError::OutOfBounds { row: 2, column: 0 }
        );
        assert!(grid.has_occupant(Coordinate::new(0, 3)).is_err());
        assert!(grid.remove(outside).is_err());
        assert!(grid.place(Token::new("x"), outside).is_err());
        assert_eq!(grid.get(outside), None);
    }

    #[test]
    fn offset_never_goes_negative() {
        let origin = Coordinate::new(0, 0);
        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(origin.offset(0, -1), None);
        assert_eq!(origin.offset(2, 1), Some(Coordinate::new(2, 1)));
    }

    #[test]
    fn map_cells_is_row_major() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.place(Token::new("x"), Coordinate::new(1, 2)).unwrap();
        let names = grid.map_cells(|t| t.name);
        assert_eq!(names.len(), 2);
        assert_eq!(names[0], vec![None, None, None]);
        assert_eq!(names[1], vec![None, None, Some("x")]);
        assert_eq!(grid.occupants().count(), 1);
    }
}
