use super::attacks::between;
use super::bitboards::SquareSet;
use super::piece::{Color, Role, COLORS};
use super::setup::Setup;
use super::square::Square;

/// The two castling wings, named after the rook's home file side. Supports
/// non-standard (Chess960-style) rook placement, so the actual rook file is
/// tracked per position in [`Castles`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    A,
    H,
}

pub const CASTLING_SIDES: [CastlingSide; 2] = [CastlingSide::A, CastlingSide::H];

impl CastlingSide {
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::H => 1,
        }
    }

    /// Where the king lands when castling to this side.
    pub const fn king_to(self, color: Color) -> Square {
        let file = match self {
            Self::A => 2,
            Self::H => 6,
        };
        match color {
            Color::White => file,
            Color::Black => file + 56,
        }
    }

    /// Where the rook lands when castling to this side.
    pub const fn rook_to(self, color: Color) -> Square {
        let file = match self {
            Self::A => 3,
            Self::H => 5,
        };
        match color {
            Color::White => file,
            Color::Black => file + 56,
        }
    }
}

/// Castling bookkeeping: which rook-origin squares still carry rights, and
/// per color and wing the rook's origin plus the squares that must be vacant
/// for the castle. Derived once from a setup, then only ever invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Castles {
    castling_rights: SquareSet,
    rook: [[Option<Square>; 2]; 2],
    path: [[SquareSet; 2]; 2],
}

impl Default for Castles {
    /// Both sides' corner rooks, standard king files.
    fn default() -> Castles {
        let mut castles = Castles::empty();
        castles.add(Color::White, CastlingSide::A, 4, 0);
        castles.add(Color::White, CastlingSide::H, 4, 7);
        castles.add(Color::Black, CastlingSide::A, 60, 56);
        castles.add(Color::Black, CastlingSide::H, 60, 63);
        castles
    }
}

impl Castles {
    pub fn empty() -> Castles {
        Castles {
            castling_rights: SquareSet::EMPTY,
            rook: [[None; 2]; 2],
            path: [[SquareSet::EMPTY; 2]; 2],
        }
    }

    fn add(&mut self, color: Color, side: CastlingSide, king: Square, rook: Square) {
        let king_to = side.king_to(color);
        let rook_to = side.rook_to(color);
        self.castling_rights = self.castling_rights.with(rook);
        self.rook[color.index()][side.index()] = Some(rook);
        self.path[color.index()][side.index()] = between(rook, rook_to)
            .with(rook_to)
            .union(between(king, king_to).with(king_to))
            .without(king)
            .without(rook);
    }

    /// Reads rights off a setup. A color only gets rights if its king stands
    /// on its backrank; of that color's rights-bearing backrank rooks, the
    /// one left of the king is the a-side rook and the one right of it the
    /// h-side rook.
    pub fn from_setup(setup: &Setup) -> Castles {
        let mut castles = Castles::empty();
        let rooks = setup.castling_rights.intersect(setup.board.by_role(Role::Rook));
        for color in COLORS {
            let backrank = SquareSet::backrank(color);
            let king = match setup.board.king_of(color) {
                Some(king) if backrank.has(king) => king,
                _ => continue,
            };
            let candidates = rooks
                .intersect(setup.board.by_color(color))
                .intersect(backrank);
            if let Some(a_side) = candidates.first() {
                if a_side < king {
                    castles.add(color, CastlingSide::A, king, a_side);
                }
            }
            if let Some(h_side) = candidates.last() {
                if king < h_side {
                    castles.add(color, CastlingSide::H, king, h_side);
                }
            }
        }
        castles
    }

    /// Drops the right carried by `square`, if any. Called when a rook moves
    /// off its origin or is captured there.
    pub fn discard_rook(&mut self, square: Square) {
        if !self.castling_rights.has(square) {
            return;
        }
        self.castling_rights = self.castling_rights.without(square);
        for color in COLORS {
            for side in CASTLING_SIDES {
                if self.rook[color.index()][side.index()] == Some(square) {
                    self.rook[color.index()][side.index()] = None;
                }
            }
        }
    }

    /// Drops both of a color's rights. Rights only live on backrank rooks,
    /// so stripping the whole backrank from the rights set suffices.
    pub fn discard_color(&mut self, color: Color) {
        self.castling_rights = self.castling_rights.diff(SquareSet::backrank(color));
        self.rook[color.index()] = [None; 2];
    }

    #[inline]
    pub fn castling_rights(&self) -> SquareSet {
        self.castling_rights
    }

    #[inline]
    pub fn rook_of(&self, color: Color, side: CastlingSide) -> Option<Square> {
        self.rook[color.index()][side.index()]
    }

    /// Squares between king and rook (destinations included, origins
    /// excluded) that must be free of pieces for the castle.
    #[inline]
    pub fn path(&self, color: Color, side: CastlingSide) -> SquareSet {
        self.path[color.index()][side.index()]
    }
}
