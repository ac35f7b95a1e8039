//! # Chess Match Constants - Board Size & Movement Offsets
//!
//! ## Overview
//!
//! Movement is encoded as `(d_row, d_column)` offsets on the grid. Because grid
//! row 0 holds rank 8, **north** (toward rank 8) is a negative row step:
//!
//! - **North (N)**: `(-1, 0)`
//! - **South (S)**: `(1, 0)`
//! - **East (E)**: `(0, 1)` (toward file h)
//! - **West (W)**: `(0, -1)` (toward file a)
//! - **Diagonals**: combinations (NE, SE, NW, SW)
//!
//! Sliding pieces repeat one of these unit steps until blocked; knights and
//! kings apply each offset exactly once.

use crate::types::PieceKind;

pub const BOARD_SIZE: usize = 8;

/// A `(d_row, d_column)` step.
pub type Offset = (i32, i32);

pub const N: Offset = (-1, 0);
pub const S: Offset = (1, 0);
pub const E: Offset = (0, 1);
pub const W: Offset = (0, -1);
pub const NE: Offset = (-1, 1);
pub const SE: Offset = (1, 1);
pub const NW: Offset = (-1, -1);
pub const SW: Offset = (1, -1);

pub const ROOK_DIRS: [Offset; 4] = [N, W, E, S];
pub const BISHOP_DIRS: [Offset; 4] = [NW, NE, SE, SW];
pub const KING_OFFSETS: [Offset; 8] = [N, S, W, E, NW, NE, SW, SE];
pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (-1, -2), (-2, -1), (-2, 1), (-1, 2),
    (1, 2), (2, 1), (2, -1), (1, -2),
];

/// Back rank from file a to file h.
pub const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const FILES: [char; BOARD_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
