//! Move making and unmaking
//!
//! The only place where pieces change cells or move between the board and the
//! captured list. [`Match::unmake_move`] is the exact inverse of
//! [`Match::make_move`]; [`Match::probe`] pairs them so a speculative move is
//! always rolled back.

use tracing::trace;

use crate::board::{Coordinate, Occupant};
use crate::error::{ChessError, ChessResult};
use crate::types::{Match, PieceId};

/// Information needed to undo a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UndoInfo {
    pub source: Coordinate,
    pub target: Coordinate,
    pub captured: Option<PieceId>,
}

impl Match {
    /// Move the piece on `source` to `target`, capturing whatever stands there.
    ///
    /// Both squares are checked before anything is touched, so an error leaves
    /// the board as it was.
    pub(crate) fn make_move(&mut self, source: Coordinate, target: Coordinate) -> ChessResult<UndoInfo> {
        if !self.grid.exists(target) {
            return Err(ChessError::OutOfBounds {
                row: target.row(),
                column: target.column(),
            });
        }
        let Some(mut mover) = self.grid.remove(source)? else {
            return Err(ChessError::invariant(format!("no piece to move at {source}")));
        };
        mover.increase_move_count();
        let captured = self.grid.remove(target)?;
        self.grid.place(mover, target)?;

        let captured = captured.map(|piece| {
            let id = piece.id();
            self.captured.push(piece);
            id
        });

        trace!(%source, %target, captured = captured.is_some(), "made move");
        Ok(UndoInfo {
            source,
            target,
            captured,
        })
    }

    /// Exact inverse of [`Match::make_move`].
    pub(crate) fn unmake_move(&mut self, undo: UndoInfo) -> ChessResult<()> {
        let Some(mut mover) = self.grid.remove(undo.target)? else {
            return Err(ChessError::invariant(format!(
                "no piece to take back at {}",
                undo.target
            )));
        };
        mover.decrease_move_count();
        self.grid.place(mover, undo.source)?;

        if let Some(id) = undo.captured {
            let index = self
                .captured
                .iter()
                .rposition(|piece| piece.id() == id)
                .ok_or_else(|| ChessError::invariant("captured piece missing on undo"))?;
            let piece = self.captured.remove(index);
            debug_assert!(piece.coordinate().is_none());
            self.grid.place(piece, undo.target)?;
        }

        trace!(source = %undo.source, target = %undo.target, "unmade move");
        Ok(())
    }

    /// Apply a move, evaluate `test` on the resulting position, roll back.
    ///
    /// The rollback runs whatever `test` returns, and `test` only gets a
    /// shared borrow, so it cannot leave the board modified.
    pub(crate) fn probe<R>(
        &mut self,
        source: Coordinate,
        target: Coordinate,
        test: impl FnOnce(&Match) -> ChessResult<R>,
    ) -> ChessResult<R> {
        let undo = self.make_move(source, target)?;
        let outcome = test(self);
        self.unmake_move(undo)?;
        outcome
    }
}
