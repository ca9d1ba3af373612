use super::bitboards::SquareSet;
use super::piece::{Color, Piece, Role, COLORS, ROLES};
use super::square::Square;

// Starting-arrangement masks, white on ranks 1-2
const START_WHITE: u64 = 0x0000_0000_0000_ffff;
const START_BLACK: u64 = 0xffff_0000_0000_0000;
const START_PAWNS: u64 = 0x00ff_0000_0000_ff00;
const START_KNIGHTS: u64 = 0x4200_0000_0000_0042;
const START_BISHOPS: u64 = 0x2400_0000_0000_0024;
const START_ROOKS: u64 = 0x8100_0000_0000_0081;
const START_QUEENS: u64 = 0x0800_0000_0000_0008;
const START_KINGS: u64 = 0x1000_0000_0000_0010;

/// Piece placement: one square set per color, one per piece kind, a derived
/// occupancy union, and the duck.
///
/// Invariants: the color sets are disjoint and union to `occupied`, the kind
/// sets are disjoint and union to `occupied`, and the duck never shares a
/// square with a piece. `set`/`take` keep all of this in step; the duck is
/// the caller's responsibility (place it only on squares that
/// `Position::duck_dests` offers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    by_color: [SquareSet; 2],
    by_role: [SquareSet; 6],
    occupied: SquareSet,
    duck: Option<Square>,
}

impl Default for Board {
    fn default() -> Board {
        let mut board = Board::empty();
        board.reset();
        board
    }
}

impl Board {
    pub fn empty() -> Board {
        Board {
            by_color: [SquareSet::EMPTY; 2],
            by_role: [SquareSet::EMPTY; 6],
            occupied: SquareSet::EMPTY,
            duck: None,
        }
    }

    /// Standard chess starting arrangement, duck unset.
    pub fn reset(&mut self) {
        self.duck = None;
        self.occupied = SquareSet::from_bits(START_WHITE | START_BLACK);
        self.by_color = [
            SquareSet::from_bits(START_WHITE),
            SquareSet::from_bits(START_BLACK),
        ];
        self.by_role = [
            SquareSet::from_bits(START_PAWNS),
            SquareSet::from_bits(START_KNIGHTS),
            SquareSet::from_bits(START_BISHOPS),
            SquareSet::from_bits(START_ROOKS),
            SquareSet::from_bits(START_QUEENS),
            SquareSet::from_bits(START_KINGS),
        ];
    }

    pub fn clear(&mut self) {
        *self = Board::empty();
    }

    #[inline(always)]
    pub fn occupied(&self) -> SquareSet {
        self.occupied
    }

    #[inline(always)]
    pub fn by_color(&self, color: Color) -> SquareSet {
        self.by_color[color.index()]
    }

    #[inline(always)]
    pub fn by_role(&self, role: Role) -> SquareSet {
        self.by_role[role.index()]
    }

    #[inline(always)]
    pub fn duck(&self) -> Option<Square> {
        self.duck
    }

    pub fn set_duck(&mut self, square: Option<Square>) {
        self.duck = square;
    }

    /// Occupancy with the duck counted as a blocker; movement always goes
    /// through this view.
    #[inline]
    pub fn occupied_with_duck(&self) -> SquareSet {
        match self.duck {
            Some(duck) => self.occupied.with(duck),
            None => self.occupied,
        }
    }

    pub fn get_color(&self, square: Square) -> Option<Color> {
        COLORS.into_iter().find(|color| self.by_color(*color).has(square))
    }

    pub fn get_role(&self, square: Square) -> Option<Role> {
        ROLES.into_iter().find(|role| self.by_role(*role).has(square))
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        let color = self.get_color(square)?;
        let role = self.get_role(square)?;
        Some(Piece { color, role })
    }

    #[inline]
    pub fn has(&self, square: Square) -> bool {
        self.occupied.has(square)
    }

    /// Removes and returns the occupant of `square`, if any.
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        let piece = self.get(square)?;
        self.occupied = self.occupied.without(square);
        self.by_color[piece.color.index()] = self.by_color[piece.color.index()].without(square);
        self.by_role[piece.role.index()] = self.by_role[piece.role.index()].without(square);
        Some(piece)
    }

    /// Puts `piece` on `square`, returning whatever it displaced.
    pub fn set(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        let old = self.take(square);
        self.occupied = self.occupied.with(square);
        self.by_color[piece.color.index()] = self.by_color[piece.color.index()].with(square);
        self.by_role[piece.role.index()] = self.by_role[piece.role.index()].with(square);
        old
    }

    /// All pieces of one color and kind.
    #[inline]
    pub fn pieces(&self, color: Color, role: Role) -> SquareSet {
        self.by_color(color).intersect(self.by_role(role))
    }

    /// The unique king of `color`. `None` when that color has no king (it
    /// was captured) or, on a corrupt setup, more than one.
    pub fn king_of(&self, color: Color) -> Option<Square> {
        self.pieces(color, Role::King).single_square()
    }

    pub fn rooks_and_queens(&self) -> SquareSet {
        self.by_role(Role::Rook).union(self.by_role(Role::Queen))
    }

    pub fn bishops_and_queens(&self) -> SquareSet {
        self.by_role(Role::Bishop).union(self.by_role(Role::Queen))
    }

    /// Iterates occupied squares and their pieces in square order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied
            .into_iter()
            .filter_map(|square| self.get(square).map(|piece| (square, piece)))
    }
}
