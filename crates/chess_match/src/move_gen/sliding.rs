//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces move any number of squares along a direction until blocked.
//!
//! ## Algorithm
//!
//! For each direction, step outward one square at a time:
//! 1. Empty square: reachable, keep going
//! 2. Opponent piece: reachable (capture), stop
//! 3. Own piece: not reachable, stop
//! 4. Board edge: stop

use crate::board::{Coordinate, Grid};
use crate::constants::Offset;
use crate::move_gen::Reachability;
use crate::types::{Color, Piece};

/// Mark every square reachable along `dirs` from `from`.
pub fn generate_sliding_moves(
    grid: &Grid<Piece>,
    from: Coordinate,
    color: Color,
    dirs: &[Offset],
    moves: &mut Reachability,
) {
    for &(d_row, d_column) in dirs {
        let mut current = from.offset(d_row, d_column);

        while let Some(square) = current.filter(|c| grid.exists(*c)) {
            match grid.get(square) {
                None => {
                    moves.mark(square);
                    current = square.offset(d_row, d_column);
                }
                Some(blocker) => {
                    if blocker.color() != color {
                        moves.mark(square);
                    }
                    break;
                }
            }
        }
    }
}
