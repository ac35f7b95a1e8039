//! Queen move generation
//!
//! Queens combine the movement patterns of bishops and rooks.

use super::bishop;
use super::rook;
use crate::board::{Coordinate, Grid};
use crate::move_gen::Reachability;
use crate::types::{Color, Piece};

/// Generate queen moves from `from`
///
/// Both scans mark into the same matrix, so the result is their union.
pub fn generate_queen_moves(grid: &Grid<Piece>, from: Coordinate, color: Color, moves: &mut Reachability) {
    bishop::generate_bishop_moves(grid, from, color, moves);
    rook::generate_rook_moves(grid, from, color, moves);
}
