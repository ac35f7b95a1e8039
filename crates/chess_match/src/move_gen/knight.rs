//! Knight move generation
//!
//! Knights jump in an L-shape (2+1 or 1+2 squares) over any pieces in
//! between. Up to 8 destinations, fewer near the edges.

use super::generate_step_moves;
use crate::board::{Coordinate, Grid};
use crate::constants::KNIGHT_OFFSETS;
use crate::move_gen::Reachability;
use crate::types::{Color, Piece};

pub fn generate_knight_moves(grid: &Grid<Piece>, from: Coordinate, color: Color, moves: &mut Reachability) {
    generate_step_moves(grid, from, color, &KNIGHT_OFFSETS, moves);
}
