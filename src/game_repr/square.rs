/// Board square index in `[0, 64)`, laid out as `file + 8 * rank` with
/// rank 0 being white's first rank. `a1 = 0`, `h1 = 7`, `a8 = 56`, `h8 = 63`.
pub type Square = usize;

pub const FILE_NAMES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
pub const RANK_NAMES: [char; 8] = ['1', '2', '3', '4', '5', '6', '7', '8'];

#[inline(always)]
pub const fn square_file(square: Square) -> usize {
    square % 8
}

#[inline(always)]
pub const fn square_rank(square: Square) -> usize {
    square / 8
}

/// Builds a square from file and rank, or `None` when either is off the board.
pub const fn square_from_coords(file: usize, rank: usize) -> Option<Square> {
    if file < 8 && rank < 8 {
        Some(file + 8 * rank)
    } else {
        None
    }
}

/// Renders a square as its coordinate name, e.g. `28` -> `"e4"`.
pub fn make_square_name(square: Square) -> String {
    let mut name = String::with_capacity(2);
    name.push(FILE_NAMES[square_file(square)]);
    name.push(RANK_NAMES[square_rank(square)]);
    name
}

/// Parses a coordinate name like `"e4"`. Returns `None` for anything else.
pub fn parse_square_name(name: &str) -> Option<Square> {
    let mut chars = name.chars();
    let file = chars.next()?;
    let rank = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if !file.is_ascii_lowercase() || !rank.is_ascii_digit() {
        return None;
    }
    let file = (file as u8).checked_sub(b'a')? as usize;
    let rank = (rank as u8).checked_sub(b'1')? as usize;
    square_from_coords(file, rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_roundtrip() {
        assert_eq!(parse_square_name("a1"), Some(0));
        assert_eq!(parse_square_name("h8"), Some(63));
        assert_eq!(parse_square_name("e4"), Some(28));
        assert_eq!(make_square_name(28), "e4");
        assert_eq!(parse_square_name("i1"), None);
        assert_eq!(parse_square_name("a9"), None);
        assert_eq!(parse_square_name("a10"), None);
    }

    #[test]
    fn test_file_rank() {
        assert_eq!(square_file(28), 4);
        assert_eq!(square_rank(28), 3);
        assert_eq!(square_from_coords(4, 3), Some(28));
        assert_eq!(square_from_coords(8, 0), None);
    }
}
