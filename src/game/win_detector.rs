use super::board::Board;
use super::types::{Mark, WinningLine};

/// The 8 winning triplets: 3 rows, 3 columns, 2 diagonals.
const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for cells in WIN_LINES {
        let mark = board.cell(cells[0]);
        if mark != Mark::Empty && mark == board.cell(cells[1]) && mark == board.cell(cells[2]) {
            return Some(WinningLine { mark, cells });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: [Mark; 9]) -> Board {
        Board::from_cells(marks)
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(check_win(&Board::new()), None);
    }

    #[test]
    fn test_detects_row_win() {
        use Mark::{Empty as E, O, X};
        let board = board_from([X, X, X, O, O, E, E, E, E]);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.cells, [0, 1, 2]);
    }

    #[test]
    fn test_detects_column_win() {
        use Mark::{Empty as E, O, X};
        let board = board_from([X, O, E, X, O, E, E, O, X]);
        assert_eq!(check_win(&board), Some(Mark::O));
    }

    #[test]
    fn test_detects_diagonal_win() {
        use Mark::{Empty as E, O, X};
        let board = board_from([X, O, E, O, X, E, E, E, X]);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.cells, [0, 4, 8]);
    }

    #[test]
    fn test_full_board_without_triplet_has_no_winner() {
        use Mark::{O, X};
        // X O X / X O O / O X X
        let board = board_from([X, O, X, X, O, O, O, X, X]);
        assert_eq!(check_win(&board), None);
        assert!(board.is_full());
    }
}
