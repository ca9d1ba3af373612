use rayon::prelude::*;
use smallvec::SmallVec;

use super::attacks::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks,
};
use super::bitboards::SquareSet;
use super::board::Board;
use super::castling::{Castles, CastlingSide};
use super::moves::Move;
use super::piece::{Color, Role};
use super::setup::{PositionError, Setup};
use super::square::{square_rank, Square};

/*
 * MODULE IS RESPONSIBLE FOR
 * THE POSITION STATE MACHINE: LEGALITY, MOVE APPLICATION, OUTCOME
 */

/// A decided game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub winner: Color,
}

/// Destination sets for every square the side to move occupies. Empty sets
/// are included; consumers filter.
pub type AllDests = SmallVec<[(Square, SquareSet); 16]>;

/// The authoritative game state: turn, placement, castling rights,
/// en-passant target and move counters.
///
/// Duck Chess has no check: any destination that is not a friendly square is
/// playable and the king can be captured. `Clone` produces a fully
/// independent copy (every field is a value), which speculative exploration
/// such as [`perft`](Position::perft) relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    turn: Color,
    castles: Castles,
    ep_square: Option<Square>,
    halfmoves: u32,
    fullmoves: u32,
}

impl Default for Position {
    fn default() -> Position {
        Position {
            board: Board::default(),
            turn: Color::White,
            castles: Castles::default(),
            ep_square: None,
            halfmoves: 0,
            fullmoves: 1,
        }
    }
}

impl Position {
    /// Builds a position from a setup, validating it first.
    pub fn from_setup(setup: &Setup) -> Result<Position, PositionError> {
        let mut pos = Position {
            board: setup.board,
            turn: setup.turn,
            castles: Castles::from_setup(setup),
            ep_square: None,
            halfmoves: setup.halfmoves,
            fullmoves: setup.fullmoves,
        };
        pos.ep_square = pos.valid_ep_square(setup.ep_square);
        if let Err(err) = pos.validate() {
            log::debug!("rejected setup: {err}");
            return Err(err);
        }
        Ok(pos)
    }

    fn validate(&self) -> Result<(), PositionError> {
        if self.board.occupied().is_empty() {
            return Err(PositionError::Empty);
        }
        // One king per side is the full complement; a single king total is a
        // legal mid-game state, the other one has been captured.
        let kings = self.board.by_role(Role::King);
        if kings.is_empty()
            || self.board.pieces(Color::White, Role::King).size() > 1
            || self.board.pieces(Color::Black, Role::King).size() > 1
        {
            return Err(PositionError::Kings);
        }
        if SquareSet::backranks().intersects(self.board.by_role(Role::Pawn)) {
            return Err(PositionError::PawnsOnBackrank);
        }
        Ok(())
    }

    /// Keeps a stored en-passant target only if the double step it implies
    /// actually just happened.
    fn valid_ep_square(&self, square: Option<Square>) -> Option<Square> {
        let square = square?;
        let (ep_rank, forward) = match self.turn {
            Color::White => (5, 8i32),
            Color::Black => (2, -8i32),
        };
        if square_rank(square) != ep_rank {
            return None;
        }
        if self.board.occupied().has((square as i32 + forward) as Square) {
            return None;
        }
        let pawn = (square as i32 - forward) as Square;
        if !self.board.by_role(Role::Pawn).has(pawn)
            || !self.board.by_color(self.turn.opposite()).has(pawn)
        {
            return None;
        }
        Some(square)
    }

    /// An en-passant target that is actually capturable right now, for
    /// snapshotting.
    fn legal_ep_square(&self) -> Option<Square> {
        let ep_square = self.ep_square?;
        let candidates = self
            .board
            .pieces(self.turn, Role::Pawn)
            .intersect(pawn_attacks(self.turn.opposite(), ep_square));
        for candidate in candidates {
            if self.dests(candidate).has(ep_square) {
                return Some(ep_square);
            }
        }
        None
    }

    /// Snapshots the position as a setup record. The en-passant square is
    /// recomputed to a capturable one and the counters are clamped.
    pub fn to_setup(&self) -> Setup {
        Setup {
            board: self.board,
            turn: self.turn,
            castling_rights: self.castles.castling_rights(),
            ep_square: self.legal_ep_square(),
            halfmoves: self.halfmoves.min(150),
            fullmoves: self.fullmoves.clamp(1, 9999),
        }
    }

    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline(always)]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline(always)]
    pub fn castles(&self) -> &Castles {
        &self.castles
    }

    #[inline(always)]
    pub fn ep_square(&self) -> Option<Square> {
        self.ep_square
    }

    #[inline(always)]
    pub fn halfmoves(&self) -> u32 {
        self.halfmoves
    }

    #[inline(always)]
    pub fn fullmoves(&self) -> u32 {
        self.fullmoves
    }

    /// Squares the piece on `square` may move to this move, duck placement
    /// not included. Empty unless a piece of the side to move stands there.
    pub fn dests(&self, square: Square) -> SquareSet {
        let piece = match self.board.get(square) {
            Some(piece) if piece.color == self.turn => piece,
            _ => return SquareSet::EMPTY,
        };

        let occupied = self.board.occupied_with_duck();
        let mut pseudo = match piece.role {
            Role::Pawn => {
                let mut moves = pawn_attacks(self.turn, square)
                    .intersect(self.board.by_color(self.turn.opposite()));
                let delta = match self.turn {
                    Color::White => 8i32,
                    Color::Black => -8i32,
                };
                let step = square as i32 + delta;
                if (0..64).contains(&step) && !occupied.has(step as Square) {
                    moves = moves.with(step as Square);
                    // the first two ranks, so constructed setups behave too
                    let can_double = match self.turn {
                        Color::White => square < 16,
                        Color::Black => square >= 48,
                    };
                    let double = step + delta;
                    if can_double && !occupied.has(double as Square) {
                        moves = moves.with(double as Square);
                    }
                }
                moves
            }
            Role::Knight => knight_attacks(square),
            Role::Bishop => bishop_attacks(square, occupied),
            Role::Rook => rook_attacks(square, occupied),
            Role::Queen => queen_attacks(square, occupied),
            Role::King => king_attacks(square),
        };

        pseudo = pseudo.diff(self.board.by_color(self.turn));

        if piece.role == Role::Pawn {
            if let Some(ep_square) = self.ep_square {
                if pawn_attacks(self.turn, square).has(ep_square) {
                    pseudo = pseudo.with(ep_square);
                }
            }
        }

        pseudo
    }

    /// Squares eligible to receive the duck once the piece move `from -> to`
    /// completes: everything empty after the move, except the duck's current
    /// square (the duck must relocate).
    pub fn duck_dests(&self, from: Square, to: Square) -> SquareSet {
        let mut blocked = self.board.occupied().without(from).with(to);
        if let Some(duck) = self.board.duck() {
            blocked = blocked.with(duck);
        }
        blocked.complement()
    }

    /// Destination sets for every friendly occupied square.
    pub fn all_dests(&self) -> AllDests {
        self.board
            .by_color(self.turn)
            .into_iter()
            .map(|square| (square, self.dests(square)))
            .collect()
    }

    /// Whether the side to move has any destination at all.
    pub fn has_dests(&self) -> bool {
        self.board
            .by_color(self.turn)
            .into_iter()
            .any(|square| self.dests(square).non_empty())
    }

    /// Which wing a king move castles to, if it is a castling move: either
    /// the king moves two squares or it "captures" its own rook.
    fn castling_side(&self, m: &Move) -> Option<CastlingSide> {
        let delta = m.to as i32 - m.from as i32;
        if delta.abs() != 2 && !self.board.by_color(self.turn).has(m.to) {
            return None;
        }
        if !self.board.by_role(Role::King).has(m.from) {
            return None;
        }
        Some(if delta > 0 { CastlingSide::H } else { CastlingSide::A })
    }

    /// Rewrites a castling move to the king-takes-rook form; other moves
    /// pass through unchanged.
    pub fn normalize_move(&self, m: &Move) -> Move {
        match self.castling_side(m) {
            Some(side) => Move {
                from: m.from,
                to: self.castles.rook_of(self.turn, side).unwrap_or(m.to),
                promotion: m.promotion,
                duck: m.duck,
            },
            None => *m,
        }
    }

    /// Full legality check for an externally supplied move.
    pub fn is_legal(&self, m: &Move) -> bool {
        if matches!(m.promotion, Some(Role::Pawn) | Some(Role::King)) {
            return false;
        }
        let must_promote = self.board.by_role(Role::Pawn).has(m.from)
            && SquareSet::backranks().has(m.to);
        if m.promotion.is_some() != must_promote {
            return false;
        }
        let dests = self.dests(m.from);
        dests.has(m.to) || dests.has(self.normalize_move(m).to)
    }

    /// Applies a move in place and reports whether it zeroed the half-move
    /// clock (pawn move or capture), which resets draw bookkeeping.
    ///
    /// Callers are expected to pass only moves vetted by
    /// [`is_legal`](Position::is_legal); a move whose `from` square is empty
    /// leaves the board alone and reports not zeroing.
    pub fn play(&mut self, m: &Move) -> bool {
        let turn = self.turn;
        let ep_square = self.ep_square;
        let castling = self.castling_side(m);

        self.ep_square = None;
        self.halfmoves += 1;
        if turn == Color::Black {
            self.fullmoves += 1;
        }
        self.turn = turn.opposite();

        let Some(mut piece) = self.board.take(m.from) else {
            return false;
        };
        let mut zeroing = false;

        self.board.set_duck(Some(m.duck));

        let mut ep_capture = None;
        match piece.role {
            Role::Pawn => {
                self.halfmoves = 0;
                zeroing = true;
                if Some(m.to) == ep_square {
                    let victim = match turn {
                        Color::White => m.to - 8,
                        Color::Black => m.to + 8,
                    };
                    ep_capture = self.board.take(victim);
                }
                let delta = m.from as i32 - m.to as i32;
                if delta.abs() == 16 && (8..=55).contains(&m.from) {
                    self.ep_square = Some((m.from + m.to) / 2);
                }
                if let Some(promotion) = m.promotion {
                    piece.role = promotion;
                }
            }
            Role::Rook => self.castles.discard_rook(m.from),
            Role::King => {
                if let Some(side) = castling {
                    if let Some(rook_from) = self.castles.rook_of(turn, side) {
                        let rook = self.board.take(rook_from);
                        self.board.set(side.king_to(turn), piece);
                        if let Some(rook) = rook {
                            self.board.set(side.rook_to(turn), rook);
                        }
                    }
                }
                self.castles.discard_color(turn);
            }
            _ => {}
        }

        if castling.is_none() {
            let captured = self.board.set(m.to, piece).or(ep_capture);
            if let Some(captured) = captured {
                self.halfmoves = 0;
                zeroing = true;
                if captured.role == Role::Rook {
                    self.castles.discard_rook(m.to);
                }
            }
        }

        zeroing
    }

    /// No legal destination for the side to move.
    pub fn is_end(&self) -> bool {
        !self.has_dests()
    }

    /// A king has been captured; only one remains.
    pub fn is_king_captured(&self) -> bool {
        self.board.by_role(Role::King).size() == 1
    }

    /// Both kings on the board, but the side to move cannot move.
    pub fn is_stalemate(&self) -> bool {
        !self.is_king_captured() && !self.has_dests()
    }

    /// The variant's outcome rules. Capturing the king wins. Having no move
    /// wins too: the stalemated player is the winner, not the opponent and
    /// not a draw.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_king_captured() {
            let winner = if self.board.pieces(Color::White, Role::King).non_empty() {
                Color::White
            } else {
                Color::Black
            };
            Some(Outcome { winner })
        } else if self.is_stalemate() {
            Some(Outcome { winner: self.turn })
        } else {
            None
        }
    }

    /// Counts leaf nodes of the full move tree (piece move, duck placement
    /// and promotion choices all branch) to the given depth. Clones per
    /// branch; used to validate move generation.
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let mut nodes = 0;
        for (from, dests) in self.all_dests() {
            let promotions = self.promotion_choices(from);
            for to in dests {
                let ducks = self.duck_dests(from, to);
                if depth == 1 {
                    nodes += (ducks.size() * promotions.len()) as u64;
                    continue;
                }
                for duck in ducks {
                    for &promotion in promotions {
                        let mut child = self.clone();
                        child.play(&Move { from, to, promotion, duck });
                        nodes += child.perft(depth - 1);
                    }
                }
            }
        }
        nodes
    }

    /// `perft` with the root moves split across threads. Every branch works
    /// on its own clone, so there is no shared mutable state.
    pub fn perft_parallel(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let mut roots = Vec::new();
        for (from, dests) in self.all_dests() {
            let promotions = self.promotion_choices(from);
            for to in dests {
                for duck in self.duck_dests(from, to) {
                    for &promotion in promotions {
                        roots.push(Move { from, to, promotion, duck });
                    }
                }
            }
        }
        roots
            .par_iter()
            .map(|m| {
                let mut child = self.clone();
                child.play(m);
                child.perft(depth - 1)
            })
            .sum()
    }

    fn promotion_choices(&self, from: Square) -> &'static [Option<Role>] {
        const CHOICES: [Option<Role>; 4] = [
            Some(Role::Queen),
            Some(Role::Knight),
            Some(Role::Rook),
            Some(Role::Bishop),
        ];
        const NO_PROMOTION: [Option<Role>; 1] = [None];
        let pre_backrank = match self.turn {
            Color::White => 6,
            Color::Black => 1,
        };
        if square_rank(from) == pre_backrank && self.board.by_role(Role::Pawn).has(from) {
            &CHOICES
        } else {
            &NO_PROMOTION
        }
    }
}
