//! # Chess Match Core Types
//!
//! ## Overview
//!
//! - [`Piece`]: a tagged variant ([`PieceKind`]) carrying the fields every
//!   piece shares: identity, color, move count and current coordinate. Movement
//!   rules live in [`crate::move_gen`], one function per kind, and read the
//!   board through a borrowed [`Grid`] handed in at call time.
//! - [`Match`]: the complete state of one game. The grid stores the pieces
//!   themselves, so "pieces on the board" and grid occupancy cannot disagree.
//!   Captured pieces move to `captured` and back only through
//!   [`crate::make_unmake`].
//! - [`PieceSnapshot`] / [`MatchPhase`]: plain values handed to renderers.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Coordinate, Grid, Occupant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => f.write_str("Light"),
            Color::Dark => f.write_str("Dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Rook,
    Bishop,
    Queen,
    King,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Single-letter symbol, as used on printed boards.
    pub fn symbol(self) -> char {
        match self {
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Identity of a piece within one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) u16);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    color: Color,
    move_count: u32,
    coordinate: Option<Coordinate>,
}

impl Piece {
    pub(crate) fn new(id: PieceId, kind: PieceKind, color: Color) -> Self {
        Self {
            id,
            kind,
            color,
            move_count: 0,
            coordinate: None,
        }
    }

    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Number of completed moves; undone moves do not count.
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn snapshot(&self) -> PieceSnapshot {
        PieceSnapshot {
            kind: self.kind,
            color: self.color,
        }
    }

    pub(crate) fn increase_move_count(&mut self) {
        self.move_count += 1;
    }

    pub(crate) fn decrease_move_count(&mut self) {
        self.move_count = self.move_count.saturating_sub(1);
    }
}

impl Occupant for Piece {
    fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    fn set_coordinate(&mut self, coordinate: Option<Coordinate>) {
        self.coordinate = coordinate;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// Variant and color of a piece, detached from the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub color: Color,
}

impl PieceSnapshot {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// Where the match stands between two moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatchPhase {
    Idle { turn: u32, color: Color },
    Check { turn: u32, color: Color },
    /// Terminal. `winner` delivered the mate on `turn`.
    Checkmate { turn: u32, winner: Color },
}

/// State of one chess match
///
/// Owns the grid (and with it every piece in play), the captured pieces in
/// capture order, the turn counter and the check flags. All mutation goes
/// through `&mut self`; probes made while searching for checkmate are undone
/// before the call that made them returns.
#[derive(Debug, Clone)]
pub struct Match {
    pub(crate) grid: Grid<Piece>,
    pub(crate) captured: Vec<Piece>,
    pub(crate) turn: u32,
    pub(crate) active_color: Color,
    pub(crate) check: bool,
    pub(crate) checkmate: bool,
}
