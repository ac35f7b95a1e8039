//! Move validation and execution
//!
//! A move request runs through:
//! 1. source validation (occupied, owned by the side to move, can move at all)
//! 2. target validation (inside the piece's reachability matrix)
//! 3. execution, capturing whatever stands on the target
//! 4. self-check test; a move exposing the mover's king is rolled back
//! 5. check and checkmate tests for the opponent
//! 6. turn advance, unless the move delivered mate

use tracing::{debug, info, warn};

use crate::board::Coordinate;
use crate::error::{ChessError, ChessResult};
use crate::move_gen::{reachability, Reachability};
use crate::position::ChessPosition;
use crate::types::{Match, Piece, PieceSnapshot};

impl Match {
    /// Reachability matrix of the piece on `source`.
    ///
    /// The source is validated exactly as for a move, so renderers can call
    /// this to highlight targets right after the player picks a piece.
    pub fn possible_moves(&self, source: ChessPosition) -> ChessResult<Reachability> {
        let source = source.to_coordinate();
        self.validate_source(source)?;
        let piece = self.require_piece(source)?;
        Ok(reachability(piece, &self.grid))
    }

    /// Play `source` → `target` for the side to move.
    ///
    /// # Returns
    ///
    /// The captured piece, if any.
    ///
    /// # Errors
    ///
    /// - [`ChessError::MatchFinished`] once checkmate has been reached
    /// - [`ChessError::IllegalMove`] when source or target validation fails
    /// - [`ChessError::SelfCheck`] when the move would leave the mover in check
    ///
    /// On every error the match is unchanged.
    pub fn perform_move(
        &mut self,
        source: ChessPosition,
        target: ChessPosition,
    ) -> ChessResult<Option<PieceSnapshot>> {
        if self.checkmate {
            warn!(%source, %target, "move requested after checkmate");
            return Err(ChessError::MatchFinished);
        }

        let from = source.to_coordinate();
        let to = target.to_coordinate();
        self.validate_source(from)?;
        self.validate_target(from, to)?;

        let mover = self.active_color;
        let undo = self.make_move(from, to)?;

        let exposes_king = match self.test_check(mover) {
            Ok(exposed) => exposed,
            Err(err) => {
                self.unmake_move(undo)?;
                return Err(err);
            }
        };
        if exposes_king {
            self.unmake_move(undo)?;
            warn!(%source, %target, color = %mover, "move rejected: would leave own king in check");
            return Err(ChessError::SelfCheck);
        }

        let opponent = mover.opponent();
        let (check, checkmate) = match self.check_status(opponent) {
            Ok(status) => status,
            Err(err) => {
                self.unmake_move(undo)?;
                return Err(err);
            }
        };

        let captured = undo
            .captured
            .and_then(|id| self.captured.iter().find(|p| p.id() == id))
            .map(|p| p.snapshot());
        debug!(%source, %target, color = %mover, captured = ?captured, "move performed");

        self.check = check;
        if checkmate {
            self.checkmate = true;
            info!(turn = self.turn, winner = %mover, "checkmate");
        } else {
            if check {
                info!(color = %opponent, "check");
            }
            self.next_turn();
        }

        Ok(captured)
    }

    /// The piece on `source` may be moved by the side to move.
    pub fn validate_source(&self, source: Coordinate) -> ChessResult<()> {
        let Some(piece) = self.grid.occupant(source)? else {
            debug!(%source, "no piece on source");
            return Err(ChessError::illegal_move("There is no piece on source position"));
        };
        if piece.color() != self.active_color {
            debug!(%source, "source piece belongs to the opponent");
            return Err(ChessError::illegal_move("The chosen piece is not yours"));
        }
        if !reachability(piece, &self.grid).has_any_move() {
            debug!(%source, "source piece cannot move");
            return Err(ChessError::illegal_move(
                "There is no possible moves for the chosen piece",
            ));
        }
        Ok(())
    }

    /// `target` lies in the reachability matrix of the piece on `source`.
    pub fn validate_target(&self, source: Coordinate, target: Coordinate) -> ChessResult<()> {
        let piece = self.require_piece(source)?;
        if !self.grid.exists(target) {
            return Err(ChessError::OutOfBounds {
                row: target.row(),
                column: target.column(),
            });
        }
        if !reachability(piece, &self.grid).get(target) {
            debug!(%source, %target, "target not reachable");
            return Err(ChessError::illegal_move(
                "The chosen piece can't move to target position",
            ));
        }
        Ok(())
    }

    fn require_piece(&self, source: Coordinate) -> ChessResult<&Piece> {
        self.grid
            .occupant(source)?
            .ok_or_else(|| ChessError::illegal_move("There is no piece on source position"))
    }
}
