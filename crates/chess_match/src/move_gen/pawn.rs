//! Pawn move generation
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent, only onto an empty square
//! - **Captures**: one square diagonally forward, only onto an opponent piece
//!
//! Light pawns advance toward rank 8 (decreasing grid row), Dark pawns toward
//! rank 1. Double pushes, en passant and promotion are not part of this engine.

use super::is_opponent_piece;
use crate::board::{Coordinate, Grid};
use crate::move_gen::Reachability;
use crate::types::{Color, Piece};

/// Row step a pawn of `color` takes when advancing.
#[inline]
pub fn forward_step(color: Color) -> i32 {
    match color {
        Color::Light => -1,
        Color::Dark => 1,
    }
}

pub fn generate_pawn_moves(grid: &Grid<Piece>, from: Coordinate, color: Color, moves: &mut Reachability) {
    let forward = forward_step(color);

    if let Some(ahead) = from.offset(forward, 0) {
        if grid.exists(ahead) && grid.get(ahead).is_none() {
            moves.mark(ahead);
        }
    }

    for side in [-1, 1] {
        if let Some(diagonal) = from.offset(forward, side) {
            if is_opponent_piece(grid, diagonal, color) {
                moves.mark(diagonal);
            }
        }
    }
}
