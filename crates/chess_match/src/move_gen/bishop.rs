//! Bishop move generation
//!
//! Bishops slide along the four diagonals until blocked.

use super::sliding;
use crate::board::{Coordinate, Grid};
use crate::constants::BISHOP_DIRS;
use crate::move_gen::Reachability;
use crate::types::{Color, Piece};

pub fn generate_bishop_moves(grid: &Grid<Piece>, from: Coordinate, color: Color, moves: &mut Reachability) {
    sliding::generate_sliding_moves(grid, from, color, &BISHOP_DIRS, moves);
}
