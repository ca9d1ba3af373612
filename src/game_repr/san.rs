//! Duck-SAN: standard algebraic notation with the duck placement prefixed,
//! `<duck-square>@<san>`, e.g. `e3@e4`, `d4@Nf3`, `f6@O-O`.

use super::attacks::{bishop_attacks, king_attacks, knight_attacks, queen_attacks, rook_attacks};
use super::bitboards::SquareSet;
use super::castling::CastlingSide;
use super::moves::Move;
use super::piece::Role;
use super::position::Position;
use super::square::{
    make_square_name, parse_square_name, square_file, square_rank, FILE_NAMES, RANK_NAMES,
};

fn make_san_without_suffix(pos: &Position, m: &Move) -> String {
    let mut san = format!("{}@", make_square_name(m.duck));
    let Some(role) = pos.board().get_role(m.from) else {
        return "--".to_string();
    };

    let is_castle = role == Role::King
        && (pos.board().by_color(pos.turn()).has(m.to)
            || (m.to as i32 - m.from as i32).abs() == 2);
    if is_castle {
        san.push_str(if m.to > m.from { "O-O" } else { "O-O-O" });
        return san;
    }

    let capture = pos.board().occupied().has(m.to)
        || (role == Role::Pawn && square_file(m.from) != square_file(m.to));

    if role != Role::Pawn {
        san.push(role.to_char().to_ascii_uppercase());

        // Disambiguation: other pieces of the same kind that also reach the
        // destination.
        let mut others = match role {
            Role::King => king_attacks(m.to).intersect(pos.board().by_role(Role::King)),
            Role::Queen => queen_attacks(m.to, pos.board().occupied())
                .intersect(pos.board().by_role(Role::Queen)),
            Role::Rook => rook_attacks(m.to, pos.board().occupied())
                .intersect(pos.board().by_role(Role::Rook)),
            Role::Bishop => bishop_attacks(m.to, pos.board().occupied())
                .intersect(pos.board().by_role(Role::Bishop)),
            _ => knight_attacks(m.to).intersect(pos.board().by_role(Role::Knight)),
        };
        others = others.intersect(pos.board().by_color(pos.turn())).without(m.from);
        if others.non_empty() {
            for from in others {
                if !pos.dests(from).has(m.to) {
                    others = others.without(from);
                }
            }
            if others.non_empty() {
                let mut row = false;
                let mut column = others.intersects(SquareSet::from_rank(square_rank(m.from)));
                if others.intersects(SquareSet::from_file(square_file(m.from))) {
                    row = true;
                } else {
                    column = true;
                }
                if column {
                    san.push(FILE_NAMES[square_file(m.from)]);
                }
                if row {
                    san.push(RANK_NAMES[square_rank(m.from)]);
                }
            }
        }
    } else if capture {
        san.push(FILE_NAMES[square_file(m.from)]);
    }

    if capture {
        san.push('x');
    }
    san.push_str(&make_square_name(m.to));
    if let Some(promotion) = m.promotion {
        san.push('=');
        san.push(promotion.to_char().to_ascii_uppercase());
    }
    san
}

/// Renders the move and plays it, appending `#` when it decides the game.
pub fn make_san_and_play(pos: &mut Position, m: &Move) -> String {
    let san = make_san_without_suffix(pos, m);
    pos.play(m);
    if pos.outcome().is_some() {
        return san + "#";
    }
    san
}

/// Renders the move against a throwaway copy of the position.
pub fn make_san(pos: &Position, m: &Move) -> String {
    make_san_and_play(&mut pos.clone(), m)
}

/// Parses duck-SAN. Returns `None` for unreadable or ambiguous input; the
/// result still has to pass [`Position::is_legal`].
pub fn parse_san(pos: &Position, dsan: &str) -> Option<Move> {
    if !dsan.is_ascii() {
        return None;
    }
    let (duck_part, san) = dsan.split_once('@')?;
    let duck = parse_square_name(duck_part)?;
    let san = san.trim_end_matches(['+', '#']);
    let turn = pos.turn();

    if san == "O-O" || san == "O-O-O" {
        let side = if san == "O-O" { CastlingSide::H } else { CastlingSide::A };
        let king = pos.board().king_of(turn)?;
        let rook = pos.castles().rook_of(turn, side)?;
        return Some(Move::new(king, rook, duck));
    }

    // promotion tail, either "=Q" or a bare trailing letter after the square
    let mut body = san;
    let mut promotion = None;
    if let Some(last) = body.chars().last() {
        if last.is_ascii_alphabetic() && body.len() >= 3 {
            if let Some(role) = Role::from_char(last) {
                let stem = &body[..body.len() - 1];
                let stem = stem.strip_suffix('=').unwrap_or(stem);
                if stem.ends_with(|c: char| c.is_ascii_digit()) {
                    promotion = Some(role);
                    body = stem;
                }
            }
        }
    }

    if body.len() < 2 {
        return None;
    }
    let to = parse_square_name(&body[body.len() - 2..])?;
    let mut rest = &body[..body.len() - 2];
    if rest.ends_with('x') || rest.ends_with('-') {
        rest = &rest[..rest.len() - 1];
    }

    let mut chars = rest.chars().peekable();
    let role = match chars.peek() {
        Some(c) if c.is_ascii_uppercase() => {
            let role = Role::from_char(*c)?;
            chars.next();
            role
        }
        _ => Role::Pawn,
    };
    let mut file_hint = None;
    let mut rank_hint = None;
    if let Some(c) = chars.peek().copied() {
        if ('a'..='h').contains(&c) {
            file_hint = Some((c as u8 - b'a') as usize);
            chars.next();
        }
    }
    if let Some(c) = chars.peek().copied() {
        if ('1'..='8').contains(&c) {
            rank_hint = Some((c as u8 - b'1') as usize);
            chars.next();
        }
    }
    if chars.next().is_some() {
        return None;
    }

    let mut candidates = pos.board().pieces(turn, role);
    if role == Role::Pawn && file_hint.is_none() {
        // an unadorned pawn move stays on its file
        candidates = candidates.intersect(SquareSet::from_file(square_file(to)));
    } else if let Some(file) = file_hint {
        candidates = candidates.intersect(SquareSet::from_file(file));
    }
    if let Some(rank) = rank_hint {
        candidates = candidates.intersect(SquareSet::from_rank(rank));
    }

    let mut from = None;
    for candidate in candidates {
        if pos.dests(candidate).has(to) {
            if from.is_some() {
                return None; // ambiguous
            }
            from = Some(candidate);
        }
    }
    Some(Move { from: from?, to, promotion, duck })
}
