//! Match Flow Integration Tests
//!
//! Tests for full match flows including:
//! - Turn alternation from the standard layout
//! - Source/target validation and the no-partial-mutation guarantee
//! - Self-check rejection and rollback
//! - Check, checkmate and the terminal state

use chess_match::{
    new_match, ChessError, ChessPosition, Color, Match, MatchConfig, MatchPhase, PieceKind,
    PieceLayout, PieceSnapshot, Placement,
};

fn pos(text: &str) -> ChessPosition {
    text.parse().unwrap()
}

/// Match from a list of `(kind, color, square)` triples
fn custom_match(pieces: &[(PieceKind, Color, &str)]) -> Match {
    let placements = pieces
        .iter()
        .map(|&(kind, color, square)| Placement::new(kind, color, pos(square)))
        .collect();
    Match::new(MatchConfig::default().with_layout(PieceLayout::custom(placements))).unwrap()
}

/// Everything a rejected move must leave untouched
fn fingerprint(m: &Match) -> (Vec<Vec<Option<PieceSnapshot>>>, u32, Color, bool, Vec<PieceSnapshot>) {
    (
        m.current_layout(),
        m.turn(),
        m.active_color(),
        m.is_check(),
        m.captured_pieces(),
    )
}

fn play(m: &mut Match, source: &str, target: &str) -> Result<Option<PieceSnapshot>, ChessError> {
    m.perform_move(pos(source), pos(target))
}

// ============================================================================
// Setup Tests
// ============================================================================

#[test]
fn test_new_match_starts_with_light_on_turn_one() {
    let m = new_match().unwrap();

    assert_eq!(m.turn(), 1);
    assert_eq!(m.active_color(), Color::Light);
    assert!(!m.is_check());
    assert!(!m.is_checkmate());
    assert_eq!(m.phase(), MatchPhase::Idle { turn: 1, color: Color::Light });
    assert_eq!(m.pieces_on_board().count(), 32);
    assert!(m.captured_pieces().is_empty());
}

#[test]
fn test_standard_layout_snapshot() {
    let m = new_match().unwrap();
    let layout = m.current_layout();

    assert_eq!(layout.len(), 8);
    assert_eq!(layout[7][4], Some(PieceSnapshot::new(PieceKind::King, Color::Light)));
    assert_eq!(layout[0][3], Some(PieceSnapshot::new(PieceKind::Queen, Color::Dark)));
    assert_eq!(layout[6][0], Some(PieceSnapshot::new(PieceKind::Pawn, Color::Light)));
    assert!(layout[3].iter().all(Option::is_none));
}

#[test]
fn test_zero_dimensions_are_rejected() {
    let no_rows = Match::new(MatchConfig::default().with_dimensions(0, 8));
    assert!(matches!(no_rows, Err(ChessError::Configuration { rows: 0, columns: 8 })));

    let no_columns = Match::new(MatchConfig::default().with_dimensions(8, 0));
    assert!(matches!(no_columns, Err(ChessError::Configuration { .. })));
}

#[test]
fn test_layout_without_king_is_an_invariant_violation() {
    let placements = vec![
        Placement::new(PieceKind::King, Color::Light, pos("e1")),
        Placement::new(PieceKind::Rook, Color::Dark, pos("a8")),
    ];
    let result = Match::new(MatchConfig::default().with_layout(PieceLayout::custom(placements)));
    assert!(matches!(result, Err(ChessError::InvariantViolation { .. })));
}

#[test]
fn test_overlapping_layout_is_rejected() {
    let placements = vec![
        Placement::new(PieceKind::King, Color::Light, pos("e1")),
        Placement::new(PieceKind::King, Color::Dark, pos("e1")),
    ];
    let result = Match::new(MatchConfig::default().with_layout(PieceLayout::custom(placements)));
    assert!(matches!(result, Err(ChessError::Occupied { row: 7, column: 4 })));
}

#[test]
fn test_layout_with_opponent_king_attacked_is_rejected() {
    let placements = [
        (PieceKind::King, Color::Light, "a1"),
        (PieceKind::Rook, Color::Light, "e1"),
        (PieceKind::King, Color::Dark, "e8"),
    ]
    .iter()
    .map(|&(kind, color, square)| Placement::new(kind, color, pos(square)))
    .collect();

    let result = Match::new(MatchConfig::default().with_layout(PieceLayout::custom(placements)));

    assert!(
        matches!(result, Err(ChessError::InvariantViolation { .. })),
        "Light to move must not be able to take the Dark king, got {result:?}"
    );
}

#[test]
fn test_layout_starting_in_checkmate_is_finished() {
    let mut m = custom_match(&[
        (PieceKind::King, Color::Light, "h1"),
        (PieceKind::Pawn, Color::Light, "g2"),
        (PieceKind::Pawn, Color::Light, "h2"),
        (PieceKind::King, Color::Dark, "a8"),
        (PieceKind::Rook, Color::Dark, "b1"),
    ]);

    assert!(m.is_check());
    assert!(m.is_checkmate(), "Light has no way out of the back-rank check");
    assert_eq!(m.phase(), MatchPhase::Checkmate { turn: 1, winner: Color::Dark });

    let before = fingerprint(&m);
    assert_eq!(play(&mut m, "g2", "g3").unwrap_err(), ChessError::MatchFinished);
    assert_eq!(fingerprint(&m), before);
}

// ============================================================================
// Turn Alternation Tests
// ============================================================================

#[test]
fn test_first_pawn_move_advances_turn() {
    let mut m = new_match().unwrap();

    let captured = play(&mut m, "e2", "e3").unwrap();

    assert_eq!(captured, None);
    assert_eq!(m.turn(), 2);
    assert_eq!(m.active_color(), Color::Dark);
    let moved = m.piece_on(pos("e3")).unwrap().unwrap();
    assert_eq!(moved.kind(), PieceKind::Pawn);
    assert_eq!(moved.move_count(), 1);
    assert!(m.piece_on(pos("e2")).unwrap().is_none());
}

#[test]
fn test_colors_alternate() {
    let mut m = new_match().unwrap();

    play(&mut m, "b1", "c3").unwrap();
    play(&mut m, "g8", "f6").unwrap();
    play(&mut m, "d2", "d3").unwrap();

    assert_eq!(m.turn(), 4);
    assert_eq!(m.active_color(), Color::Dark);
}

#[test]
fn test_possible_moves_for_opening_knight() {
    let m = new_match().unwrap();

    let moves = m.possible_moves(pos("g1")).unwrap();
    let targets: Vec<String> = moves
        .iter()
        .map(|c| ChessPosition::from_coordinate(c).unwrap().to_string())
        .collect();

    assert_eq!(targets, vec!["f3", "h3"]);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_rejected_moves_leave_match_unchanged() {
    let mut m = new_match().unwrap();
    let before = fingerprint(&m);

    let attempts = [
        ("e4", "e5"), // empty source
        ("e7", "e6"), // opponent's piece
        ("a1", "a3"), // rook boxed in at the start
        ("e2", "e4"), // no double step
        ("e2", "d3"), // diagonal without capture
        ("g1", "g3"), // not a knight move
    ];
    for (source, target) in attempts {
        let err = play(&mut m, source, target).unwrap_err();
        assert!(
            matches!(err, ChessError::IllegalMove { .. }),
            "{source}-{target} gave {err:?}"
        );
        assert!(err.is_recoverable());
        assert_eq!(fingerprint(&m), before, "{source}-{target} mutated the match");
    }
}

#[test]
fn test_possible_moves_validates_source() {
    let m = new_match().unwrap();

    assert!(matches!(m.possible_moves(pos("d4")), Err(ChessError::IllegalMove { .. })));
    assert!(matches!(m.possible_moves(pos("d7")), Err(ChessError::IllegalMove { .. })));
    assert!(matches!(m.possible_moves(pos("h1")), Err(ChessError::IllegalMove { .. })));
}

// ============================================================================
// Capture Tests
// ============================================================================

#[test]
fn test_capture_is_returned_and_recorded() {
    let mut m = custom_match(&[
        (PieceKind::King, Color::Light, "e1"),
        (PieceKind::Rook, Color::Light, "a1"),
        (PieceKind::King, Color::Dark, "h8"),
        (PieceKind::Bishop, Color::Dark, "a6"),
    ]);

    let captured = play(&mut m, "a1", "a6").unwrap();

    assert_eq!(captured, Some(PieceSnapshot::new(PieceKind::Bishop, Color::Dark)));
    assert_eq!(m.captured_pieces(), vec![PieceSnapshot::new(PieceKind::Bishop, Color::Dark)]);
    assert_eq!(m.pieces_on_board().count(), 3);
    assert_eq!(m.pieces_of(Color::Dark).count(), 1);
}

// ============================================================================
// Self-Check Tests
// ============================================================================

#[test]
fn test_pinned_piece_cannot_expose_king() {
    let mut m = custom_match(&[
        (PieceKind::King, Color::Light, "e1"),
        (PieceKind::Bishop, Color::Light, "e2"),
        (PieceKind::King, Color::Dark, "a8"),
        (PieceKind::Rook, Color::Dark, "e8"),
    ]);
    let before = fingerprint(&m);

    let err = play(&mut m, "e2", "d3").unwrap_err();

    assert_eq!(err, ChessError::SelfCheck);
    assert!(err.is_recoverable());
    assert_eq!(fingerprint(&m), before);
    assert_eq!(m.piece_on(pos("e2")).unwrap().unwrap().move_count(), 0);
}

#[test]
fn test_king_cannot_step_into_attack() {
    let mut m = custom_match(&[
        (PieceKind::King, Color::Light, "e1"),
        (PieceKind::King, Color::Dark, "a8"),
        (PieceKind::Rook, Color::Dark, "d8"),
    ]);

    assert_eq!(play(&mut m, "e1", "d1").unwrap_err(), ChessError::SelfCheck);
    assert!(play(&mut m, "e1", "f1").is_ok());
}

#[test]
fn test_self_check_capture_is_rolled_back() {
    let mut m = custom_match(&[
        (PieceKind::King, Color::Light, "e1"),
        (PieceKind::Knight, Color::Light, "e2"),
        (PieceKind::King, Color::Dark, "h8"),
        (PieceKind::Rook, Color::Dark, "e7"),
        (PieceKind::Pawn, Color::Dark, "c3"),
    ]);
    let before = fingerprint(&m);

    assert_eq!(play(&mut m, "e2", "c3").unwrap_err(), ChessError::SelfCheck);
    assert_eq!(fingerprint(&m), before);
    assert!(m.captured_pieces().is_empty());
}

// ============================================================================
// Check and Checkmate Tests
// ============================================================================

#[test]
fn test_check_is_reported_for_opponent() {
    let mut m = custom_match(&[
        (PieceKind::King, Color::Light, "e1"),
        (PieceKind::Rook, Color::Light, "a2"),
        (PieceKind::King, Color::Dark, "e8"),
        (PieceKind::Pawn, Color::Dark, "a7"),
    ]);

    play(&mut m, "a2", "e2").unwrap();

    assert!(m.is_check());
    assert!(!m.is_checkmate());
    assert_eq!(m.phase(), MatchPhase::Check { turn: 2, color: Color::Dark });
    assert!(m.test_check(Color::Dark).unwrap());
    assert!(!m.test_check(Color::Light).unwrap());
}

#[test]
fn test_ignoring_check_is_self_check() {
    let mut m = custom_match(&[
        (PieceKind::King, Color::Light, "e1"),
        (PieceKind::Rook, Color::Light, "a2"),
        (PieceKind::King, Color::Dark, "e8"),
        (PieceKind::Pawn, Color::Dark, "a7"),
    ]);
    play(&mut m, "a2", "e2").unwrap();
    let before = fingerprint(&m);

    assert_eq!(play(&mut m, "a7", "a6").unwrap_err(), ChessError::SelfCheck);
    assert_eq!(fingerprint(&m), before);

    play(&mut m, "e8", "d8").unwrap();
    assert!(!m.is_check());
    assert_eq!(m.active_color(), Color::Light);
}

#[test]
fn test_back_rank_mate_ends_the_match() {
    let mut m = custom_match(&[
        (PieceKind::King, Color::Light, "a1"),
        (PieceKind::Rook, Color::Light, "b2"),
        (PieceKind::King, Color::Dark, "h8"),
        (PieceKind::Pawn, Color::Dark, "g7"),
        (PieceKind::Pawn, Color::Dark, "h7"),
    ]);

    let captured = play(&mut m, "b2", "b8").unwrap();

    assert_eq!(captured, None);
    assert!(m.is_check());
    assert!(m.is_checkmate());
    assert_eq!(m.turn(), 1, "turn does not advance on mate");
    assert_eq!(m.active_color(), Color::Light);
    assert_eq!(m.phase(), MatchPhase::Checkmate { turn: 1, winner: Color::Light });

    let before = fingerprint(&m);
    assert_eq!(play(&mut m, "g7", "g6").unwrap_err(), ChessError::MatchFinished);
    assert_eq!(play(&mut m, "a1", "a2").unwrap_err(), ChessError::MatchFinished);
    assert!(!ChessError::MatchFinished.is_recoverable());
    assert_eq!(fingerprint(&m), before);
}

#[test]
fn test_check_with_capture_escape_is_not_mate() {
    let mut m = custom_match(&[
        (PieceKind::King, Color::Light, "a1"),
        (PieceKind::Rook, Color::Light, "b2"),
        (PieceKind::King, Color::Dark, "h8"),
        (PieceKind::Pawn, Color::Dark, "g7"),
        (PieceKind::Pawn, Color::Dark, "h7"),
        (PieceKind::Knight, Color::Dark, "c6"),
    ]);
    let board_before = m.current_layout();

    play(&mut m, "b2", "b8").unwrap();

    assert!(m.is_check());
    assert!(!m.is_checkmate(), "the knight on c6 can take the rook");
    assert_eq!(m.active_color(), Color::Dark);

    let captured = play(&mut m, "c6", "b8").unwrap();
    assert_eq!(captured, Some(PieceSnapshot::new(PieceKind::Rook, Color::Light)));
    assert!(!m.is_check());
    assert_ne!(m.current_layout(), board_before);
}

#[test]
fn test_checkmate_search_leaves_board_untouched() {
    let mut m = custom_match(&[
        (PieceKind::King, Color::Light, "h1"),
        (PieceKind::Pawn, Color::Light, "g2"),
        (PieceKind::Pawn, Color::Light, "h2"),
        (PieceKind::Queen, Color::Light, "d4"),
        (PieceKind::King, Color::Dark, "a8"),
        (PieceKind::Rook, Color::Dark, "b1"),
    ]);
    let before = fingerprint(&m);

    assert!(m.is_check(), "the rook on b1 attacks h1 from the start");
    assert!(!m.is_checkmate());
    assert!(!m.test_checkmate(Color::Light).unwrap(), "the queen can block on d1");
    assert!(!m.test_checkmate(Color::Dark).unwrap(), "Dark is not even in check");
    assert_eq!(fingerprint(&m), before);
}

#[test]
fn test_kings_and_rooks_preset_plays() {
    let layout = PieceLayout::kings_and_rooks();
    let mut m = Match::new(MatchConfig::default().with_layout(layout)).unwrap();

    assert_eq!(m.king(Color::Light).unwrap().kind(), PieceKind::King);
    assert!(matches!(
        play(&mut m, "d1", "d2"),
        Err(ChessError::IllegalMove { .. })
    ));
    play(&mut m, "e2", "h2").unwrap();
    play(&mut m, "e7", "h7").unwrap();
    assert_eq!(m.turn(), 3);
}
