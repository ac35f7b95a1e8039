//! Match configuration
//!
//! Board dimensions and the starting layout. Validation happens when the
//! match is built ([`crate::Match::new`]), not here, so a config can be
//! assembled freely and rejected in one place.

use crate::constants::BOARD_SIZE;
use crate::layout::PieceLayout;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub rows: usize,
    pub columns: usize,
    pub layout: PieceLayout,
}

impl MatchConfig {
    pub fn new(rows: usize, columns: usize, layout: PieceLayout) -> Self {
        Self {
            rows,
            columns,
            layout,
        }
    }

    pub fn with_dimensions(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    pub fn with_layout(mut self, layout: PieceLayout) -> Self {
        self.layout = layout;
        self
    }
}

impl Default for MatchConfig {
    /// 8×8 board with the standard layout
    fn default() -> Self {
        Self::new(BOARD_SIZE, BOARD_SIZE, PieceLayout::standard())
    }
}
