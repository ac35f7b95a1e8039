//! Initial piece layouts
//!
//! A layout is an ordered list of (kind, color, position) triples. Pieces get
//! their identities in list order when a match is set up.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{BACK_RANK, FILES};
use crate::position::ChessPosition;
use crate::types::{Color, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    pub kind: PieceKind,
    pub color: Color,
    pub position: ChessPosition,
}

impl Placement {
    pub fn new(kind: PieceKind, color: Color, position: ChessPosition) -> Self {
        Self {
            kind,
            color,
            position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceLayout {
    placements: Vec<Placement>,
}

impl PieceLayout {
    /// The usual 32 pieces: Light on ranks 1-2, Dark on ranks 7-8.
    pub fn standard() -> Self {
        let mut placements = Vec::with_capacity(32);
        for (color, back, front) in [(Color::Light, 1, 2), (Color::Dark, 8, 7)] {
            for (file, kind) in FILES.iter().zip(BACK_RANK) {
                placements.push(Placement::new(
                    kind,
                    color,
                    ChessPosition::new_unchecked(*file, back),
                ));
            }
            for file in FILES {
                placements.push(Placement::new(
                    PieceKind::Pawn,
                    color,
                    ChessPosition::new_unchecked(file, front),
                ));
            }
        }
        Self { placements }
    }

    /// Kings guarded by rooks only; handy for exercising check and checkmate.
    pub fn kings_and_rooks() -> Self {
        let light = [('c', 1), ('c', 2), ('d', 2), ('e', 2), ('e', 1)];
        let dark = [('c', 7), ('c', 8), ('d', 7), ('e', 7), ('e', 8)];

        let mut placements = Vec::with_capacity(12);
        for (color, rooks, king) in [
            (Color::Light, light, ('d', 1)),
            (Color::Dark, dark, ('d', 8)),
        ] {
            for (file, rank) in rooks {
                placements.push(Placement::new(
                    PieceKind::Rook,
                    color,
                    ChessPosition::new_unchecked(file, rank),
                ));
            }
            placements.push(Placement::new(
                PieceKind::King,
                color,
                ChessPosition::new_unchecked(king.0, king.1),
            ));
        }
        Self { placements }
    }

    pub fn custom(placements: Vec<Placement>) -> Self {
        Self { placements }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

impl Default for PieceLayout {
    fn default() -> Self {
        Self::standard()
    }
}
