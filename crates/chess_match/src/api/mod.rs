//! Public API for the chess match engine
//!
//! ## Module Organization
//!
//! - `game` - Match setup and read-only queries for renderers (new_match, current_layout)
//! - `moves` - Move validation and execution (possible_moves, perform_move)
//! - `state` - Check and checkmate decision procedure (test_check, test_checkmate)

mod game;
mod moves;
mod state;

pub use game::new_match;
