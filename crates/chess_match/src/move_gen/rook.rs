//! Rook move generation
//!
//! Rooks slide along ranks and files until blocked by another piece or the
//! board edge, capturing an opponent on the blocking square.

use super::sliding;
use crate::board::{Coordinate, Grid};
use crate::constants::ROOK_DIRS;
use crate::move_gen::Reachability;
use crate::types::{Color, Piece};

/// Generate rook moves from `from`
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Reachability::new(8, 8);
/// generate_rook_moves(&grid, Coordinate::new(7, 0), Color::Light, &mut moves);
/// // On an empty board: 7 squares along rank 1, 7 along file a
/// ```
pub fn generate_rook_moves(grid: &Grid<Piece>, from: Coordinate, color: Color, moves: &mut Reachability) {
    sliding::generate_sliding_moves(grid, from, color, &ROOK_DIRS, moves);
}
