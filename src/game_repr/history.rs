use super::bitboards::SquareSet;
use super::board::Board;
use super::moves::Move;
use super::piece::{Color, Role};
use super::position::Position;
use super::setup::{PositionError, Setup};
use super::square::Square;

/// Four-way game result derived from a history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
    Undecided,
}

#[derive(Debug, Clone)]
struct Snapshot {
    position: Position,
    ply: u32,
    /// Half-move distance back to the most recent identical board with the
    /// same side to move; 0 when there is none.
    cycle_length: u32,
    /// How many earlier snapshots in the current chain show this board.
    repetition: u32,
}

/// An append-only sequence of positions rooted at an initial board, with the
/// 50-move and repetition counters maintained incrementally.
///
/// Always holds at least the root snapshot.
#[derive(Debug, Clone)]
pub struct PositionHistory {
    snapshots: Vec<Snapshot>,
}

impl PositionHistory {
    pub fn new(root: Position) -> PositionHistory {
        let ply = (root.fullmoves().saturating_sub(1)) * 2
            + if root.turn() == Color::Black { 1 } else { 0 };
        PositionHistory {
            snapshots: vec![Snapshot { position: root, ply, cycle_length: 0, repetition: 0 }],
        }
    }

    /// Replaces the history with a single root derived from a raw board.
    /// The side to move follows ply parity (even plies are white's).
    pub fn reset(
        &mut self,
        board: Board,
        halfmove_clock: u32,
        ply: u32,
    ) -> Result<(), PositionError> {
        let turn = if ply % 2 == 0 { Color::White } else { Color::Black };
        let setup = Setup {
            board,
            turn,
            castling_rights: board.by_role(Role::Rook).intersect(SquareSet::corners()),
            ep_square: None,
            halfmoves: halfmove_clock,
            fullmoves: ply / 2 + 1,
        };
        let position = Position::from_setup(&setup)?;
        log::debug!("history reset at ply {ply}, clock {halfmove_clock}");
        self.snapshots.clear();
        self.snapshots
            .push(Snapshot { position, ply, cycle_length: 0, repetition: 0 });
        Ok(())
    }

    /// Derives the next snapshot from the last one and back-fills its
    /// repetition bookkeeping.
    pub fn append(&mut self, m: &Move) {
        let Some(last) = self.snapshots.last() else {
            return;
        };
        let mut position = last.position.clone();
        let zeroing = position.play(m);
        let ply = last.ply + 1;
        let (cycle_length, repetition) = self.find_cycle(&position);
        log::trace!("append {m}: zeroing {zeroing}, repetition {repetition}");
        self.snapshots
            .push(Snapshot { position, ply, cycle_length, repetition });
    }

    /// Bounded backward scan for the most recent identical board with the
    /// same side to move. Strides two plies at a time and gives up at the
    /// first snapshot on the far side of a zeroing move, since a pawn move
    /// or capture can never be repeated across.
    fn find_cycle(&self, position: &Position) -> (u32, u32) {
        let clock = position.halfmoves() as usize;
        let mut distance = 2;
        while distance <= self.snapshots.len() && distance <= clock {
            let candidate = &self.snapshots[self.snapshots.len() - distance];
            if candidate.position.board() == position.board() {
                return (distance as u32, candidate.repetition + 1);
            }
            if candidate.position.halfmoves() < 2 {
                break;
            }
            distance += 2;
        }
        (0, 0)
    }

    /// The current (most recent) position.
    pub fn last(&self) -> &Position {
        &self.snapshots[self.snapshots.len() - 1].position
    }

    /// Half-move distance to the previous occurrence of the current board,
    /// 0 when it has not occurred before.
    pub fn cycle_length(&self) -> u32 {
        self.snapshots[self.snapshots.len() - 1].cycle_length
    }

    /// How many times the current board has occurred before in the current
    /// no-zeroing chain.
    pub fn repetition(&self) -> u32 {
        self.snapshots[self.snapshots.len() - 1].repetition
    }

    pub fn ply(&self) -> u32 {
        self.snapshots[self.snapshots.len() - 1].ply
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Positions from root to current.
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.snapshots.iter().map(|snapshot| &snapshot.position)
    }

    /// The game's result so far. Decided positions (king captured, or the
    /// stalemate-rule win) take precedence, then the 50-move rule at 100
    /// half-moves, then the third occurrence of the same board.
    pub fn compute_game_result(&self) -> GameResult {
        let snapshot = &self.snapshots[self.snapshots.len() - 1];
        let position = &snapshot.position;
        if let Some(outcome) = position.outcome() {
            return match outcome.winner {
                Color::White => GameResult::WhiteWins,
                Color::Black => GameResult::BlackWins,
            };
        }
        if position.halfmoves() >= 100 {
            return GameResult::Draw;
        }
        if snapshot.repetition >= 2 {
            return GameResult::Draw;
        }
        GameResult::Undecided
    }

    /// The duck's current square, convenience for front ends.
    pub fn duck(&self) -> Option<Square> {
        self.last().board().duck()
    }
}
