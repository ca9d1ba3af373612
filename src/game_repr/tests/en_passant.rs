use super::*;

fn position_after_double_step() -> Position {
    let mut position = Position::default();
    position.play(&mv("e2", "e4", "a3"));
    position.play(&mv("h7", "h6", "a6"));
    position.play(&mv("e4", "e5", "b3"));
    position.play(&mv("d7", "d5", "b6"));
    position
}

#[test]
fn test_double_step_offers_en_passant() {
    let position = position_after_double_step();
    assert_eq!(position.ep_square(), Some(sq("d6")));
    assert!(position.dests(sq("e5")).has(sq("d6")));
}

#[test]
fn test_en_passant_capture_removes_victim() {
    let mut position = position_after_double_step();
    let zeroing = position.play(&mv("e5", "d6", "c3"));
    assert!(zeroing, "an en passant capture zeroes the clock");
    assert_eq!(
        position.board().get(sq("d6")),
        Some(Piece { color: Color::White, role: Role::Pawn })
    );
    assert!(position.board().get(sq("d5")).is_none(), "the victim is gone");
    assert_eq!(position.halfmoves(), 0);
}

#[test]
fn test_en_passant_expires_after_one_move() {
    let mut position = position_after_double_step();
    position.play(&mv("b1", "c3", "c6"));
    position.play(&mv("g8", "f6", "f3"));
    assert_eq!(position.ep_square(), None);
    assert!(!position.dests(sq("e5")).has(sq("d6")));
}

#[test]
fn test_no_en_passant_from_the_wrong_file() {
    let position = position_after_double_step();
    // the h-file pawn is nowhere near d6
    assert!(!position.dests(sq("h2")).has(sq("d6")));
}

#[test]
fn test_setup_drops_phantom_ep_square() {
    // ep target with no double-stepped pawn behind it
    let position = pos("4k3/8/8/8/8/8/8/4K3 w - d6 0 1");
    assert_eq!(position.ep_square(), None);
}

#[test]
fn test_setup_keeps_real_ep_square() {
    let position = pos("4k3/8/8/3p4/8/8/8/4K3 w - d6 0 1");
    assert_eq!(position.ep_square(), Some(sq("d6")));
}

#[test]
fn test_snapshot_recomputes_ep_square() {
    // a real double step happened, but no black pawn can capture on e3
    let mut position = Position::default();
    position.play(&mv("e2", "e4", "a3"));
    let setup = position.to_setup();
    assert_eq!(setup.ep_square, None, "target exists but is not capturable");
}
