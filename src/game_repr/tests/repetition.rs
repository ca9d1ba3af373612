use super::*;

/// Four plies that put every piece back and return the duck to e5:
/// knights out and back, duck shuttling between e4 and e5.
fn shuffle(history: &mut PositionHistory) {
    history.append(&mv("g1", "f3", "e4"));
    history.append(&mv("g8", "f6", "e5"));
    history.append(&mv("f3", "g1", "e4"));
    history.append(&mv("f6", "g8", "e5"));
}

#[test]
fn test_history_starts_undecided() {
    let history = PositionHistory::new(Position::default());
    assert_eq!(history.compute_game_result(), GameResult::Undecided);
    assert_eq!(history.repetition(), 0);
    assert_eq!(history.cycle_length(), 0);
}

#[test]
fn test_append_tracks_plies_and_positions() {
    let mut history = PositionHistory::new(Position::default());
    history.append(&mv("e2", "e4", "e3"));
    assert_eq!(history.len(), 2);
    assert_eq!(history.ply(), 1);
    assert_eq!(history.last().turn(), Color::Black);
    assert_eq!(history.duck(), Some(sq("e3")));
}

#[test]
fn test_threefold_repetition_is_a_draw() {
    let mut history = PositionHistory::new(Position::default());

    // first occurrence of the shuffled-home board
    shuffle(&mut history);
    assert_eq!(history.repetition(), 0);
    assert_eq!(history.compute_game_result(), GameResult::Undecided);

    // second occurrence
    shuffle(&mut history);
    assert_eq!(history.repetition(), 1);
    assert_eq!(history.cycle_length(), 4);
    assert_eq!(history.compute_game_result(), GameResult::Undecided);

    // third occurrence
    shuffle(&mut history);
    assert_eq!(history.repetition(), 2);
    assert_eq!(history.compute_game_result(), GameResult::Draw);
}

#[test]
fn test_zeroing_move_cuts_the_chain() {
    let mut history = PositionHistory::new(Position::default());
    shuffle(&mut history);
    shuffle(&mut history);
    // a pawn move resets the bookkeeping
    history.append(&mv("e2", "e4", "e3"));
    assert_eq!(history.last().halfmoves(), 0);
    assert_eq!(history.repetition(), 0);
    assert_eq!(history.compute_game_result(), GameResult::Undecided);
}

#[test]
fn test_duck_square_is_part_of_the_board() {
    let mut history = PositionHistory::new(Position::default());
    // same piece shuffle, but the duck comes back to a different square
    history.append(&mv("g1", "f3", "e4"));
    history.append(&mv("g8", "f6", "e5"));
    history.append(&mv("f3", "g1", "e4"));
    history.append(&mv("f6", "g8", "h5"));
    assert_eq!(history.repetition(), 0, "duck on h5 instead of e5");
}

#[test]
fn test_fifty_move_rule_draw() {
    let mut history = PositionHistory::new(Position::default());
    let board = *history.last().board();
    // restart the clock two plies short of the limit
    history.reset(board, 98, 0).expect("legal root");
    history.append(&mv("g1", "f3", "e4"));
    assert_eq!(history.compute_game_result(), GameResult::Undecided);
    history.append(&mv("g8", "f6", "e5"));
    assert_eq!(history.last().halfmoves(), 100);
    assert_eq!(history.compute_game_result(), GameResult::Draw);
}

#[test]
fn test_outcome_beats_the_counters() {
    let mut history = PositionHistory::new(pos("4k3/8/8/8/8/8/8/4RK2 w - - 99 80"));
    history.append(&mv("e1", "e8", "e4"));
    assert_eq!(history.compute_game_result(), GameResult::WhiteWins);
}

#[test]
fn test_reset_replaces_the_history() {
    let mut history = PositionHistory::new(Position::default());
    shuffle(&mut history);
    history.reset(*history.last().board(), 0, 4).expect("legal root");
    assert_eq!(history.len(), 1);
    assert_eq!(history.repetition(), 0);
    assert_eq!(history.ply(), 4);
    assert_eq!(history.last().turn(), Color::White);
}
