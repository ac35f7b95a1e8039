//! Text rendering of a match for the console

use std::fmt::Write as _;

use chess_match::{Color, Coordinate, Match, MatchPhase, PieceSnapshot, Reachability};

/// Board letter: uppercase for Light, lowercase for Dark.
pub fn piece_glyph(piece: PieceSnapshot) -> char {
    let symbol = piece.kind.symbol();
    match piece.color {
        Color::Light => symbol,
        Color::Dark => symbol.to_ascii_lowercase(),
    }
}

/// Render a board snapshot with rank labels on the left and file labels below.
///
/// Reachable squares from `highlights` are shown with a `*` marker next to
/// the cell (or in place of `-` when empty).
pub fn render_board(
    layout: &[Vec<Option<PieceSnapshot>>],
    highlights: Option<&Reachability>,
) -> String {
    let rows = layout.len();
    let columns = layout.first().map_or(0, Vec::len);
    let mut out = String::new();

    for (row, cells) in layout.iter().enumerate() {
        let _ = write!(out, "{:>2} ", rows - row);
        for (column, cell) in cells.iter().enumerate() {
            let highlighted =
                highlights.is_some_and(|moves| moves.get(Coordinate::new(row, column)));
            let glyph = cell.map_or('-', piece_glyph);
            match (highlighted, cell) {
                (true, None) => out.push_str(" *"),
                (true, Some(_)) => {
                    out.push('*');
                    out.push(glyph);
                }
                (false, _) => {
                    out.push(' ');
                    out.push(glyph);
                }
            }
        }
        out.push('\n');
    }

    out.push_str("   ");
    for file in (b'a'..).take(columns) {
        out.push(' ');
        out.push(file as char);
    }
    out.push('\n');
    out
}

pub fn render_captured(captured: &[PieceSnapshot]) -> String {
    let mut out = String::from("Captured pieces:\n");
    for color in [Color::Light, Color::Dark] {
        let glyphs: Vec<String> = captured
            .iter()
            .filter(|piece| piece.color == color)
            .map(|piece| piece_glyph(*piece).to_string())
            .collect();
        let _ = writeln!(out, "  {color}: [{}]", glyphs.join(", "));
    }
    out
}

pub fn render_status(phase: MatchPhase) -> String {
    match phase {
        MatchPhase::Idle { turn, color } => {
            format!("Turn: {turn}\nWaiting player: {color}")
        }
        MatchPhase::Check { turn, color } => {
            format!("Turn: {turn}\nWaiting player: {color}\nCHECK!")
        }
        MatchPhase::Checkmate { turn, winner } => {
            format!("Turn: {turn}\nCHECKMATE!\nWinner: {winner}")
        }
    }
}

/// Full screen: board, captured pieces and status.
pub fn render_match(chess_match: &Match, highlights: Option<&Reachability>) -> String {
    let mut out = render_board(&chess_match.current_layout(), highlights);
    out.push('\n');
    out.push_str(&render_captured(&chess_match.captured_pieces()));
    out.push('\n');
    out.push_str(&render_status(chess_match.phase()));
    out.push('\n');
    out
}
