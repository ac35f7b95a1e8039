//! Move generation: reachability matrices per piece kind
//!
//! [`reachability`] marks every square a piece could move to by its movement
//! pattern, captures included. Whether the move would leave the mover's own
//! king attacked is decided later by the match, not here.
//!
//! One generator per kind lives in a submodule; sliding pieces share
//! [`sliding::generate_sliding_moves`] and the queen is the union of the rook
//! and bishop scans.

pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;
pub mod sliding;


use crate::board::{Coordinate, Grid, Occupant};
use crate::constants::Offset;
use crate::types::{Color, Piece, PieceKind};

/// Boolean `rows × columns` matrix of reachable squares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reachability {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl Reachability {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![false; rows * columns],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub(crate) fn mark(&mut self, coordinate: Coordinate) {
        if let Some(index) = self.index(coordinate) {
            self.cells[index] = true;
        }
    }

    #[inline]
    fn index(&self, coordinate: Coordinate) -> Option<usize> {
        (coordinate.row() < self.rows && coordinate.column() < self.columns)
            .then(|| coordinate.row() * self.columns + coordinate.column())
    }

    /// `false` for anything off the matrix.
    #[inline]
    pub fn get(&self, coordinate: Coordinate) -> bool {
        self.index(coordinate).map_or(false, |index| self.cells[index])
    }

    /// At least one reachable square.
    pub fn has_any_move(&self) -> bool {
        self.cells.iter().any(|&cell| cell)
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Reachable squares in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell)
            .map(move |(index, _)| Coordinate::new(index / columns, index % columns))
    }

    pub fn to_matrix(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.columns)
            .map(<[bool]>::to_vec)
            .collect()
    }
}

/// Reachability matrix for `piece` on `grid`.
///
/// A piece that is not on the board (captured) reaches nothing.
pub fn reachability(piece: &Piece, grid: &Grid<Piece>) -> Reachability {
    let mut moves = Reachability::new(grid.rows(), grid.columns());
    let Some(from) = piece.coordinate() else {
        return moves;
    };
    let color = piece.color();

    match piece.kind() {
        PieceKind::Rook => rook::generate_rook_moves(grid, from, color, &mut moves),
        PieceKind::Bishop => bishop::generate_bishop_moves(grid, from, color, &mut moves),
        PieceKind::Queen => queen::generate_queen_moves(grid, from, color, &mut moves),
        PieceKind::King => king::generate_king_moves(grid, from, color, &mut moves),
        PieceKind::Knight => knight::generate_knight_moves(grid, from, color, &mut moves),
        PieceKind::Pawn => pawn::generate_pawn_moves(grid, from, color, &mut moves),
    }

    moves
}

/// True iff `coordinate` holds a piece of the opposite color.
#[inline]
pub fn is_opponent_piece(grid: &Grid<Piece>, coordinate: Coordinate, color: Color) -> bool {
    grid.get(coordinate)
        .map_or(false, |piece| piece.color() != color)
}

/// On the board and either empty or holding an opponent.
#[inline]
pub(crate) fn can_land_on(grid: &Grid<Piece>, coordinate: Coordinate, color: Color) -> bool {
    grid.exists(coordinate) && grid.get(coordinate).map_or(true, |p| p.color() != color)
}

/// Mark each single-step destination; shared by knights and kings.
pub(crate) fn generate_step_moves(
    grid: &Grid<Piece>,
    from: Coordinate,
    color: Color,
    offsets: &[Offset],
    moves: &mut Reachability,
) {
    for &(d_row, d_column) in offsets {
        if let Some(to) = from.offset(d_row, d_column) {
            if can_land_on(grid, to, color) {
                moves.mark(to);
            }
        }
    }
}
