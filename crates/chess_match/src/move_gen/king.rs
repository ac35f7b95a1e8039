//! King move generation
//!
//! Kings move one square in any direction. Squares held by own pieces are
//! excluded; whether the destination is attacked is the match's concern.
//! Castling is not supported.

use super::generate_step_moves;
use crate::board::{Coordinate, Grid};
use crate::constants::KING_OFFSETS;
use crate::move_gen::Reachability;
use crate::types::{Color, Piece};

pub fn generate_king_moves(grid: &Grid<Piece>, from: Coordinate, color: Color, moves: &mut Reachability) {
    generate_step_moves(grid, from, color, &KING_OFFSETS, moves);
}
