//! Grid renderings for test diagnostics, rank 8 at the top.

use super::bitboards::SquareSet;
use super::board::Board;

/// `1` for members, `.` for the rest.
pub fn square_set(set: SquareSet) -> String {
    let mut out = String::new();
    for rank in (0..8).rev() {
        for file in 0..8 {
            out.push(if set.has(file + rank * 8) { '1' } else { '.' });
            out.push(if file < 7 { ' ' } else { '\n' });
        }
    }
    out
}

/// FEN-style piece letters, `d` for the duck.
pub fn board(board: &Board) -> String {
    let mut out = String::new();
    for rank in (0..8).rev() {
        for file in 0..8 {
            let square = file + rank * 8;
            let c = match board.get(square) {
                Some(piece) => piece.to_char(),
                None if board.duck() == Some(square) => 'd',
                None => '.',
            };
            out.push(c);
            out.push(if file < 7 { ' ' } else { '\n' });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_set_grid() {
        let grid = square_set(SquareSet::from_square(0).with(63));
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], ". . . . . . . 1");
        assert_eq!(lines[7], "1 . . . . . . .");
    }

    #[test]
    fn test_board_grid_shows_duck() {
        let mut b = Board::default();
        b.set_duck(Some(20));
        let grid = board(&b);
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines[0], "r n b q k b n r");
        assert_eq!(lines[5], ". . . . d . . .");
        assert_eq!(lines[7], "R N B Q K B N R");
    }
}
