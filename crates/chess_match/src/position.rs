//! Algebraic chess positions (`a1`..`h8`) and their grid mapping
//!
//! Rank 8 is grid row 0 and rank 1 is grid row 7; file `a` is column 0:
//!
//! - to grid: `row = 8 - rank`, `column = file - 'a'`
//! - from grid: `rank = 8 - row`, `file = 'a' + column`

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Coordinate;
use crate::constants::BOARD_SIZE;
use crate::error::{ChessError, ChessResult};

/// A square in algebraic notation. Always within `a1..=h8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPosition"))]
pub struct ChessPosition {
    file: char,
    rank: u8,
}

/// Unvalidated wire form; deserialization goes through [`ChessPosition::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPosition {
    file: char,
    rank: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPosition> for ChessPosition {
    type Error = ChessError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        ChessPosition::new(raw.file, raw.rank)
    }
}

impl ChessPosition {
    /// Validate and build a position.
    ///
    /// `rank` is taken as `i32` so that any integer read from text or the wire
    /// (`a0`, `a-3`, `a300`) is reported as [`ChessError::Range`] with the value
    /// the caller gave, instead of wrapping or failing a narrowing conversion
    /// first. Once validated the rank is stored as `u8`.
    pub fn new(file: char, rank: i32) -> ChessResult<Self> {
        if !('a'..='h').contains(&file) || !(1..=8).contains(&rank) {
            return Err(ChessError::Range { file, rank });
        }
        Ok(Self {
            file,
            rank: rank as u8,
        })
    }

    /// Only for compile-time layouts whose squares are known to be valid.
    pub(crate) const fn new_unchecked(file: char, rank: u8) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub fn file(self) -> char {
        self.file
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    pub fn to_coordinate(self) -> Coordinate {
        Coordinate::new(
            BOARD_SIZE - self.rank as usize,
            (self.file as u8 - b'a') as usize,
        )
    }

    pub fn from_coordinate(coordinate: Coordinate) -> ChessResult<Self> {
        if coordinate.row() >= BOARD_SIZE || coordinate.column() >= BOARD_SIZE {
            return Err(ChessError::OutOfBounds {
                row: coordinate.row(),
                column: coordinate.column(),
            });
        }
        Ok(Self {
            file: (b'a' + coordinate.column() as u8) as char,
            rank: (BOARD_SIZE - coordinate.row()) as u8,
        })
    }
}

impl fmt::Display for ChessPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl FromStr for ChessPosition {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let parse_error = || ChessError::Parse {
            input: s.to_string(),
        };

        let mut chars = text.chars();
        let file = chars.next().ok_or_else(parse_error)?;
        let rank: i32 = chars.as_str().parse().map_err(|_| parse_error())?;
        ChessPosition::new(file, rank)
    }
}

impl TryFrom<Coordinate> for ChessPosition {
    type Error = ChessError;

    fn try_from(coordinate: Coordinate) -> Result<Self, Self::Error> {
        ChessPosition::from_coordinate(coordinate)
    }
}

impl From<ChessPosition> for Coordinate {
    fn from(position: ChessPosition) -> Self {
        position.to_coordinate()
    }
}
