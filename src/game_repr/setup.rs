use thiserror::Error;

use super::bitboards::SquareSet;
use super::board::Board;
use super::piece::Color;
use super::square::Square;

/// Why a setup cannot become a [`Position`](super::Position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("board has no pieces")]
    Empty,
    #[error("bad king material")]
    Kings,
    #[error("pawn on a backrank")]
    PawnsOnBackrank,
}

/// A not necessarily legal Duck Chess position, as read from external
/// notation or snapshotted from a live position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setup {
    pub board: Board,
    pub turn: Color,
    pub castling_rights: SquareSet,
    pub ep_square: Option<Square>,
    pub halfmoves: u32,
    pub fullmoves: u32,
}

impl Default for Setup {
    /// The standard starting arrangement.
    fn default() -> Setup {
        Setup {
            board: Board::default(),
            turn: Color::White,
            castling_rights: SquareSet::corners(),
            ep_square: None,
            halfmoves: 0,
            fullmoves: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_setup() {
        let setup = Setup::default();
        assert_eq!(setup.turn, Color::White);
        assert_eq!(setup.castling_rights, SquareSet::corners());
        assert_eq!(setup.ep_square, None);
        assert_eq!(setup.halfmoves, 0);
        assert_eq!(setup.fullmoves, 1);
    }

    #[test]
    fn test_setup_equality() {
        let a = Setup::default();
        let mut b = Setup::default();
        assert_eq!(a, b);
        b.board.set_duck(Some(20));
        assert_ne!(a, b);
    }
}
