//! Match lifecycle and queries
//!
//! Functions for creating a match and reading its state.

use tracing::{debug, info};

use crate::board::{Coordinate, Grid};
use crate::config::MatchConfig;
use crate::error::{ChessError, ChessResult};
use crate::position::ChessPosition;
use crate::types::{Color, Match, MatchPhase, Piece, PieceId, PieceKind, PieceSnapshot};

/// Create a new match on an 8×8 board with the standard layout
pub fn new_match() -> ChessResult<Match> {
    Match::new(MatchConfig::default())
}

impl Match {
    /// Build a match from `config`.
    ///
    /// # Errors
    ///
    /// - [`ChessError::Configuration`] for a board with no rows or columns
    /// - [`ChessError::OutOfBounds`] / [`ChessError::Occupied`] for a layout that
    ///   does not fit the board
    /// - [`ChessError::InvariantViolation`] unless each color has exactly one king,
    ///   or when the king of the side not to move is already attacked
    pub fn new(config: MatchConfig) -> ChessResult<Self> {
        let mut grid = Grid::new(config.rows, config.columns)?;

        for (index, placement) in config.layout.placements().iter().enumerate() {
            let id = u16::try_from(index)
                .map(PieceId)
                .map_err(|_| ChessError::invariant("too many pieces in layout"))?;
            let piece = Piece::new(id, placement.kind, placement.color);
            grid.place(piece, placement.position.to_coordinate())?;
        }

        let mut chess_match = Match {
            grid,
            captured: Vec::new(),
            turn: 1,
            active_color: Color::Light,
            check: false,
            checkmate: false,
        };

        for color in [Color::Light, Color::Dark] {
            let kings = chess_match
                .pieces_of(color)
                .filter(|p| p.kind() == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(ChessError::invariant(format!(
                    "{color} must have exactly one king, layout has {kings}"
                )));
            }
        }
        let active = chess_match.active_color;
        if chess_match.test_check(active.opponent())? {
            return Err(ChessError::invariant(format!(
                "{} king is already attacked with {active} to move",
                active.opponent()
            )));
        }
        let (check, checkmate) = chess_match.check_status(active)?;
        chess_match.check = check;
        if checkmate {
            // Same shape as a match ended by a mating move: the winner stays active.
            chess_match.checkmate = true;
            chess_match.active_color = active.opponent();
            info!(winner = %chess_match.active_color, "initial position is checkmate");
        }

        info!(
            rows = config.rows,
            columns = config.columns,
            pieces = config.layout.len(),
            "match created"
        );
        debug!(check = chess_match.check, "initial position");
        Ok(chess_match)
    }

    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[inline]
    pub fn active_color(&self) -> Color {
        self.active_color
    }

    #[inline]
    pub fn is_check(&self) -> bool {
        self.check
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    pub fn phase(&self) -> MatchPhase {
        if self.checkmate {
            MatchPhase::Checkmate {
                turn: self.turn,
                winner: self.active_color,
            }
        } else if self.check {
            MatchPhase::Check {
                turn: self.turn,
                color: self.active_color,
            }
        } else {
            MatchPhase::Idle {
                turn: self.turn,
                color: self.active_color,
            }
        }
    }

    /// Read-only view of the board.
    pub fn grid(&self) -> &Grid<Piece> {
        &self.grid
    }

    /// Board snapshot, row 0 (rank 8) first.
    pub fn current_layout(&self) -> Vec<Vec<Option<PieceSnapshot>>> {
        self.grid.map_cells(Piece::snapshot)
    }

    /// Captured pieces in capture order.
    pub fn captured_pieces(&self) -> Vec<PieceSnapshot> {
        self.captured.iter().map(Piece::snapshot).collect()
    }

    pub fn pieces_on_board(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.grid.occupants()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.grid.occupants().filter(move |p| p.color() == color)
    }

    pub fn piece_at(&self, coordinate: Coordinate) -> ChessResult<Option<&Piece>> {
        self.grid.occupant(coordinate)
    }

    pub fn piece_on(&self, position: ChessPosition) -> ChessResult<Option<&Piece>> {
        self.piece_at(position.to_coordinate())
    }

    pub(crate) fn next_turn(&mut self) {
        self.turn += 1;
        self.active_color = self.active_color.opponent();
        info!(turn = self.turn, color = %self.active_color, "turn advanced");
    }
}
