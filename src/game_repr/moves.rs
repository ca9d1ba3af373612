use std::fmt;

use super::piece::Role;
use super::square::{make_square_name, parse_square_name, Square};

/// A fully specified Duck Chess move: the ordinary piece move plus the
/// mandatory duck placement that completes it.
///
/// Castling is encoded either as the king moving two squares or as the king
/// moving onto its own rook; `Position` accepts both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
    pub duck: Square,
}

impl Move {
    pub fn new(from: Square, to: Square, duck: Square) -> Move {
        Move { from, to, promotion: None, duck }
    }

    pub fn promoting(from: Square, to: Square, promotion: Role, duck: Square) -> Move {
        Move { from, to, promotion: Some(promotion), duck }
    }

    /// Parses the wire form produced by `Display`, e.g. `e3@e2e4` or
    /// `h3@g7h8q`.
    pub fn from_text(text: &str) -> Option<Move> {
        if !text.is_ascii() {
            return None;
        }
        let (duck, rest) = text.split_once('@')?;
        let duck = parse_square_name(duck)?;
        if rest.len() < 4 {
            return None;
        }
        let from = parse_square_name(&rest[..2])?;
        let to = parse_square_name(&rest[2..4])?;
        let promotion = match &rest[4..] {
            "" => None,
            tail => {
                let mut chars = tail.chars();
                let role = Role::from_char(chars.next()?)?;
                if chars.next().is_some() {
                    return None;
                }
                Some(role)
            }
        };
        Some(Move { from, to, promotion, duck })
    }
}

/// UCI-style text with the duck placement up front: `<duck>@<from><to>[promo]`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}{}",
            make_square_name(self.duck),
            make_square_name(self.from),
            make_square_name(self.to),
        )?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.to_char())?;
        }
        Ok(())
    }
}
