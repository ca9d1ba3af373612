use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Builds a position straight from a FEN string; panics on bad input, which
/// is what a test wants.
pub fn pos(fen: &str) -> Position {
    let setup = parse_fen(fen).expect("parseable fen");
    Position::from_setup(&setup).expect("legal setup")
}

/// Square by coordinate name.
pub fn sq(name: &str) -> Square {
    parse_square_name(name).expect("valid square name")
}

/// A move without promotion.
pub fn mv(from: &str, to: &str, duck: &str) -> Move {
    Move::new(sq(from), sq(to), sq(duck))
}

/// Coordinate names of a set, ascending.
pub fn names(set: SquareSet) -> Vec<String> {
    set.into_iter().map(make_square_name).collect()
}

/// The FEN of a live position.
pub fn fen_of(pos: &Position) -> String {
    make_fen(&pos.to_setup())
}

// ==================== TEST MODULES ====================

mod en_passant;
mod outcome;
mod pawn_movement;
mod repetition;
