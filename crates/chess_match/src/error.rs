//! Error types for the chess match engine
//!
//! Provides custom error types for board construction, coordinate lookups,
//! algebraic position parsing and move validation.
//!
//! Every error returned from a move request leaves the match exactly as it
//! was before the call: validation runs before any mutation, and a move that
//! would expose the mover's own king is rolled back before `SelfCheck` is
//! reported.

use thiserror::Error;

/// Errors that can occur in the chess match engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Invalid board dimensions at construction time
    #[error("Error creating board: there must be at least 1 row and 1 column (got {rows}x{columns})")]
    Configuration { rows: usize, columns: usize },

    /// Coordinate outside the grid
    #[error("Position ({row}, {column}) not on the board")]
    OutOfBounds { row: usize, column: usize },

    /// Attempted to place onto a non-empty cell
    #[error("There is already a piece on position ({row}, {column})")]
    Occupied { row: usize, column: usize },

    /// File or rank outside the chess range
    #[error("Error instantiating chess position {file}{rank}: valid values are from a1 to h8")]
    Range { file: char, rank: i32 },

    /// Text that does not look like an algebraic position at all
    #[error("Error reading chess position {input:?}: expected a file letter followed by a rank, e.g. e4")]
    Parse { input: String },

    /// Move violates source or target legality
    #[error("Illegal move: {message}")]
    IllegalMove { message: String },

    /// Move would leave the mover's own king attacked
    #[error("You can't put yourself in check")]
    SelfCheck,

    /// Move requested after the match ended in checkmate
    #[error("The match is over: no moves are accepted after checkmate")]
    MatchFinished,

    /// Internal inconsistency, e.g. a missing king
    #[error("Match invariant violated: {message}")]
    InvariantViolation { message: String },
}

impl ChessError {
    pub(crate) fn illegal_move(message: impl Into<String>) -> Self {
        ChessError::IllegalMove {
            message: message.into(),
        }
    }

    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        ChessError::InvariantViolation {
            message: message.into(),
        }
    }

    /// Whether the caller may simply re-prompt for input.
    ///
    /// Configuration errors, out-of-board lookups, occupancy clashes,
    /// finished matches and invariant violations all mean the session cannot
    /// continue as-is.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ChessError::Range { .. }
                | ChessError::Parse { .. }
                | ChessError::IllegalMove { .. }
                | ChessError::SelfCheck
        )
    }
}

/// Result type alias for chess match operations
pub type ChessResult<T> = Result<T, ChessError>;
