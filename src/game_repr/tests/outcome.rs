use super::*;

/// White to move with both kings on the board and no destination anywhere:
/// every white piece is walled in by friends, the duck or blocked pushes.
const BOXED_IN_WHITE: &str = "7k/8/8/8/p1p5/PdPp4/PP1P4/KN6 w - - 0 1";

#[test]
fn test_start_position_is_undecided() {
    let pos = Position::default();
    assert_eq!(pos.outcome(), None);
    assert!(!pos.is_end());
    assert!(!pos.is_king_captured());
    assert!(!pos.is_stalemate());
}

#[test]
fn test_stalemate_wins_for_the_stuck_side() {
    let position = pos(BOXED_IN_WHITE);
    assert!(!position.has_dests());
    assert!(position.is_stalemate());
    assert!(position.is_end());
    // the variant inverts orthodox chess: no moves is a win, not a draw
    assert_eq!(position.outcome(), Some(Outcome { winner: Color::White }));
}

#[test]
fn test_boxed_in_side_really_has_no_moves() {
    let position = pos(BOXED_IN_WHITE);
    for (from, dests) in position.all_dests() {
        assert!(
            dests.is_empty(),
            "{} unexpectedly has destinations",
            make_square_name(from)
        );
    }
}

#[test]
fn test_king_capture_wins_immediately() {
    let mut position = pos("4k3/8/8/8/8/8/8/4RK2 w - - 0 1");
    position.play(&mv("e1", "e8", "e4"));
    assert!(position.is_king_captured());
    assert!(!position.is_stalemate(), "a captured king is not stalemate");
    assert_eq!(position.outcome(), Some(Outcome { winner: Color::White }));
}

#[test]
fn test_one_king_setup_reports_its_owner() {
    // black's king is already gone, black to move
    let position = pos("8/8/8/8/8/8/8/4K3 b - - 0 1");
    assert_eq!(position.outcome(), Some(Outcome { winner: Color::White }));
}
