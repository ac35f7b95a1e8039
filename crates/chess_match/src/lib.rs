//! Chess match rules engine
//!
//! Keeps an 8×8 board of pieces, computes where each piece can move, plays and
//! takes back moves, and decides check and checkmate. Rendering, text input
//! and the game loop belong to the caller, which talks to this crate through
//! [`ChessPosition`]s, board snapshots and captured-piece lists.
//!
//! ```rust,ignore
//! use chess_match::{new_match, ChessPosition};
//!
//! let mut game = new_match()?;
//! let captured = game.perform_move("e2".parse()?, "e3".parse()?)?;
//! assert!(captured.is_none());
//! assert_eq!(game.turn(), 2);
//! ```

pub mod api;
pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
mod make_unmake;
pub mod move_gen;
pub mod position;
pub mod types;

pub use api::new_match;
pub use board::{Coordinate, Grid, Occupant};
pub use config::MatchConfig;
pub use error::{ChessError, ChessResult};
pub use layout::{PieceLayout, Placement};
pub use move_gen::{reachability, Reachability};
pub use position::ChessPosition;
pub use types::{Color, Match, MatchPhase, Piece, PieceId, PieceKind, PieceSnapshot};
