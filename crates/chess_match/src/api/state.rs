//! Check and checkmate decision procedure

use tracing::trace;

use crate::board::{Coordinate, Occupant};
use crate::error::{ChessError, ChessResult};
use crate::move_gen::reachability;
use crate::types::{Color, Match, Piece, PieceKind};

impl Match {
    /// The king of `color`.
    ///
    /// # Errors
    ///
    /// [`ChessError::InvariantViolation`] if the king is missing, which a
    /// match built through [`Match::new`] never allows.
    pub fn king(&self, color: Color) -> ChessResult<&Piece> {
        self.pieces_of(color)
            .find(|p| p.kind() == PieceKind::King)
            .ok_or_else(|| ChessError::invariant(format!("There is no {color} king on the board")))
    }

    /// Is the king of `color` attacked by any opponent piece?
    pub fn test_check(&self, color: Color) -> ChessResult<bool> {
        let king_at = self
            .king(color)?
            .coordinate()
            .ok_or_else(|| ChessError::invariant(format!("{color} king has no coordinate")))?;

        Ok(self
            .pieces_of(color.opponent())
            .any(|attacker| reachability(attacker, &self.grid).get(king_at)))
    }

    /// `(check, checkmate)` for `color` in the current position.
    pub(crate) fn check_status(&mut self, color: Color) -> ChessResult<(bool, bool)> {
        let check = self.test_check(color)?;
        Ok((check, check && self.test_checkmate(color)?))
    }

    /// Is `color` checkmated?
    ///
    /// Tries every reachable square of every piece of `color` and asks whether
    /// the king is still attacked afterwards. Each try is rolled back before
    /// the next, so the match is unchanged when this returns.
    pub fn test_checkmate(&mut self, color: Color) -> ChessResult<bool> {
        if !self.test_check(color)? {
            return Ok(false);
        }

        let candidates: Vec<(Coordinate, Vec<Coordinate>)> = self
            .pieces_of(color)
            .filter_map(|piece| {
                let from = piece.coordinate()?;
                Some((from, reachability(piece, &self.grid).iter().collect()))
            })
            .collect();

        for (source, targets) in candidates {
            for target in targets {
                let still_in_check = self.probe(source, target, |probed| probed.test_check(color))?;
                if !still_in_check {
                    trace!(%source, %target, %color, "escape found");
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }
}
