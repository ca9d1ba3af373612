//! Duck-FEN: ordinary FEN with the duck written as `d` in the board field.
//! Castling uses letter or file notation (Shredder style for non-corner
//! rooks), so Chess960-style setups survive a round trip.

use thiserror::Error;

use super::bitboards::SquareSet;
use super::board::Board;
use super::piece::{Color, Piece, Role, COLORS};
use super::setup::Setup;
use super::square::{
    make_square_name, parse_square_name, square_file, square_from_coords, FILE_NAMES,
};

pub const INITIAL_BOARD_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
pub const INITIAL_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
pub const EMPTY_BOARD_FEN: &str = "8/8/8/8/8/8/8/8";
pub const EMPTY_FEN: &str = "8/8/8/8/8/8/8/8 w - - 0 1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("invalid fen")]
    Fen,
    #[error("invalid board part")]
    Board,
    #[error("invalid turn part")]
    Turn,
    #[error("invalid castling part")]
    Castling,
    #[error("invalid en passant part")]
    EpSquare,
    #[error("invalid halfmove part")]
    Halfmoves,
    #[error("invalid fullmove part")]
    Fullmoves,
}

fn parse_small_uint(part: &str) -> Option<u32> {
    if part.is_empty() || part.len() > 4 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Parses the board field, rank 8 first.
pub fn parse_board_fen(board_part: &str) -> Result<Board, FenError> {
    let mut board = Board::empty();
    let mut rank = 7i32;
    let mut file = 0usize;
    for c in board_part.chars() {
        if c == '/' && file == 8 {
            file = 0;
            rank -= 1;
        } else if let Some(step) = c.to_digit(10).filter(|step| *step > 0) {
            file += step as usize;
        } else {
            if file >= 8 || rank < 0 {
                return Err(FenError::Board);
            }
            let square = file + rank as usize * 8;
            if c == 'd' {
                board.set_duck(Some(square));
            } else {
                let piece = Piece::from_char(c).ok_or(FenError::Board)?;
                board.set(square, piece);
            }
            file += 1;
        }
    }
    if rank != 0 || file != 8 {
        return Err(FenError::Board);
    }
    Ok(board)
}

/// Parses the castling field against a board: `K`/`Q` pick the outermost
/// rook on the side of the king, a file letter names the rook directly.
pub fn parse_castling_fen(board: &Board, castling_part: &str) -> Result<SquareSet, FenError> {
    let mut castling_rights = SquareSet::EMPTY;
    if castling_part == "-" {
        return Ok(castling_rights);
    }
    for c in castling_part.chars() {
        let lower = c.to_ascii_lowercase();
        let color = if c == lower { Color::Black } else { Color::White };
        let rank = match color {
            Color::White => 0,
            Color::Black => 7,
        };
        if ('a'..='h').contains(&lower) {
            let file = (lower as u8 - b'a') as usize;
            let square = square_from_coords(file, rank).ok_or(FenError::Castling)?;
            castling_rights = castling_rights.with(square);
        } else if lower == 'k' || lower == 'q' {
            let rooks_and_kings = board
                .by_color(color)
                .intersect(SquareSet::backrank(color))
                .intersect(board.by_role(Role::Rook).union(board.by_role(Role::King)));
            let candidate = if lower == 'k' {
                rooks_and_kings.last()
            } else {
                rooks_and_kings.first()
            };
            let square = match candidate {
                Some(square) if board.by_role(Role::Rook).has(square) => square,
                _ => {
                    let fallback_file = if lower == 'k' { 7 } else { 0 };
                    square_from_coords(fallback_file, rank).ok_or(FenError::Castling)?
                }
            };
            castling_rights = castling_rights.with(square);
        } else {
            return Err(FenError::Castling);
        }
    }
    for color in COLORS {
        if SquareSet::backrank(color).intersect(castling_rights).size() > 2 {
            return Err(FenError::Castling);
        }
    }
    Ok(castling_rights)
}

/// Parses a full FEN into a setup. Trailing fields may be omitted; they
/// default to white to move, no rights, no en passant, clocks `0 1`.
pub fn parse_fen(fen: &str) -> Result<Setup, FenError> {
    let mut parts = fen.split(|c: char| c.is_whitespace() || c == '_').filter(|p| !p.is_empty());

    let board_part = parts.next().ok_or(FenError::Fen)?;
    let board = parse_board_fen(board_part)?;

    let turn = match parts.next() {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(_) => return Err(FenError::Turn),
    };

    let castling_rights = match parts.next() {
        Some(castling_part) => parse_castling_fen(&board, castling_part)?,
        None => SquareSet::EMPTY,
    };

    let ep_square = match parts.next() {
        None | Some("-") => None,
        Some(ep_part) => Some(parse_square_name(ep_part).ok_or(FenError::EpSquare)?),
    };

    let halfmoves = match parts.next() {
        Some(halfmove_part) => parse_small_uint(halfmove_part).ok_or(FenError::Halfmoves)?,
        None => 0,
    };

    let fullmoves = match parts.next() {
        Some(fullmove_part) => parse_small_uint(fullmove_part).ok_or(FenError::Fullmoves)?,
        None => 1,
    };

    if parts.next().is_some() {
        return Err(FenError::Fen);
    }

    Ok(Setup {
        board,
        turn,
        castling_rights,
        ep_square,
        halfmoves,
        fullmoves: fullmoves.max(1),
    })
}

/// Renders the board field, duck as `d`.
pub fn make_board_fen(board: &Board) -> String {
    let mut fen = String::new();
    for rank in (0..8).rev() {
        let mut empty = 0;
        for file in 0..8 {
            let square = file + rank * 8;
            let piece = board.get(square);
            let duck = board.duck() == Some(square);

            if piece.is_none() && !duck {
                empty += 1;
            } else {
                if empty > 0 {
                    fen.push_str(&empty.to_string());
                    empty = 0;
                }
                match piece {
                    Some(piece) => fen.push(piece.to_char()),
                    None => fen.push('d'),
                }
            }
        }
        if empty > 0 {
            fen.push_str(&empty.to_string());
        }
        if rank > 0 {
            fen.push('/');
        }
    }
    fen
}

/// Renders the castling field: `K`/`Q` for the outermost rooks, file letters
/// for inner ones.
pub fn make_castling_fen(board: &Board, castling_rights: SquareSet) -> String {
    let mut fen = String::new();
    for color in COLORS {
        let backrank = SquareSet::backrank(color);
        let king = board
            .king_of(color)
            .filter(|king| backrank.has(*king));
        let candidates = board.pieces(color, Role::Rook).intersect(backrank);
        for rook in castling_rights.intersect(backrank).reversed() {
            let c = if Some(rook) == candidates.first() && king.is_some_and(|king| rook < king) {
                'q'
            } else if Some(rook) == candidates.last() && king.is_some_and(|king| king < rook) {
                'k'
            } else {
                FILE_NAMES[square_file(rook)]
            };
            match color {
                Color::White => fen.push(c.to_ascii_uppercase()),
                Color::Black => fen.push(c),
            }
        }
    }
    if fen.is_empty() {
        fen.push('-');
    }
    fen
}

/// Renders a setup as a full FEN string.
pub fn make_fen(setup: &Setup) -> String {
    format!(
        "{} {} {} {} {} {}",
        make_board_fen(&setup.board),
        match setup.turn {
            Color::White => 'w',
            Color::Black => 'b',
        },
        make_castling_fen(&setup.board, setup.castling_rights),
        match setup.ep_square {
            Some(ep_square) => make_square_name(ep_square),
            None => "-".to_string(),
        },
        setup.halfmoves.min(9999),
        setup.fullmoves.clamp(1, 9999),
    )
}
