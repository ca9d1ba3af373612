use super::*;

#[test]
fn test_single_and_double_push_from_start() {
    let pos = Position::default();
    assert_eq!(names(pos.dests(sq("e2"))), vec!["e3", "e4"]);
    assert_eq!(names(pos.dests(sq("a2"))), vec!["a3", "a4"]);
}

#[test]
fn test_push_blocked_by_piece() {
    // white pawn e2, black knight e3
    let pos = pos("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
    assert!(pos.dests(sq("e2")).is_empty());
}

#[test]
fn test_double_push_blocked_behind() {
    // blocker on e4 leaves only the single step
    let pos = pos("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
    assert_eq!(names(pos.dests(sq("e2"))), vec!["e3"]);
}

#[test]
fn test_duck_blocks_push_like_a_piece() {
    let mut position = Position::default();
    position.play(&mv("e2", "e4", "e6"));
    // the duck sits on e6, so the e7 pawn cannot move at all
    assert!(position.dests(sq("e7")).is_empty());
}

#[test]
fn test_duck_blocks_double_push_only() {
    let mut position = Position::default();
    position.play(&mv("g1", "f3", "d5"));
    // duck on d5: the d7 pawn keeps its single step
    assert_eq!(names(position.dests(sq("d7"))), vec!["d6"]);
}

#[test]
fn test_captures_enemy_only() {
    // white pawn e4; black pawn d5, white knight f5
    let pos = pos("4k3/8/8/3p1N2/4P3/8/8/4K3 w - - 0 1");
    let dests = pos.dests(sq("e4"));
    assert!(dests.has(sq("d5")), "captures the enemy pawn");
    assert!(!dests.has(sq("f5")), "never captures a friend");
    assert!(dests.has(sq("e5")));
}

#[test]
fn test_pawn_cannot_capture_duck() {
    // duck on d5 diagonal to the e4 pawn
    let pos = pos("4k3/8/8/3d4/4P3/8/8/4K3 w - - 0 1");
    let dests = pos.dests(sq("e4"));
    assert!(!dests.has(sq("d5")));
    assert_eq!(names(dests), vec!["e5"]);
}

#[test]
fn test_black_pawns_move_down() {
    let pos = pos("4k3/4p3/8/8/8/8/8/4K3 b - - 0 1");
    assert_eq!(names(pos.dests(sq("e7"))), vec!["e5", "e6"]);
}

#[test]
fn test_no_dests_for_wrong_side() {
    let pos = Position::default();
    assert!(pos.dests(sq("e7")).is_empty(), "black piece, white to move");
    assert!(pos.dests(sq("e4")).is_empty(), "empty square");
}

#[test]
fn test_dests_is_pure() {
    let pos = Position::default();
    assert_eq!(pos.dests(sq("b1")), pos.dests(sq("b1")));
}
