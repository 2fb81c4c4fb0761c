//! Win and draw detection for tic-tac-toe.

use crate::tic_tac_toe_board::{BoardPosition, TicTacToeBoard};
use crate::TicTacToePiece;

/// Every row, column and diagonal, as cell indices.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// True if `piece` holds all three cells of any line.
pub fn check_win(board: &TicTacToeBoard, piece: TicTacToePiece) -> bool {
    let holds = |index: usize| board.get_piece(BoardPosition::from_index(index)) == Some(piece);

    WIN_LINES.iter().any(|line| line.iter().all(|&i| holds(i)))
}

pub fn is_full(board: &TicTacToeBoard) -> bool {
    board.empty_cells().next().is_none()
}

/// The piece holding a complete line, if any.
pub fn winner(board: &TicTacToeBoard) -> Option<TicTacToePiece> {
    [TicTacToePiece::X, TicTacToePiece::O]
        .iter()
        .copied()
        .find(|&piece| check_win(board, piece))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn top_row_wins() {
        let board = TicTacToeBoard::from_marks("XXX______");

        assert!(check_win(&board, TicTacToePiece::X));
        assert!(!check_win(&board, TicTacToePiece::O));
        assert_eq!(Some(TicTacToePiece::X), winner(&board));
    }

    #[test]
    fn full_board_without_line_is_not_a_win() {
        let board = TicTacToeBoard::from_marks("XOXOXOOXO");

        assert!(!check_win(&board, TicTacToePiece::X));
        assert!(!check_win(&board, TicTacToePiece::O));
        assert!(is_full(&board));
        assert_eq!(None, winner(&board));
    }

    #[test]
    fn columns_and_diagonals_win() {
        let won = |marks, piece| check_win(&TicTacToeBoard::from_marks(marks), piece);

        assert!(won("_O__O__O_", TicTacToePiece::O));
        assert!(won("X___X___X", TicTacToePiece::X));
        assert!(won("__O_O_O__", TicTacToePiece::O));
    }

    #[test]
    fn empty_board_is_neither_won_nor_full() {
        let board = TicTacToeBoard::empty();

        assert_eq!(None, winner(&board));
        assert!(!is_full(&board));
    }

    fn piece_strategy() -> impl Strategy<Value = Option<TicTacToePiece>> {
        prop_oneof![
            Just(None),
            Just(Some(TicTacToePiece::X)),
            Just(Some(TicTacToePiece::O)),
        ]
    }

    proptest! {
        #[test]
        fn win_means_some_line_is_all_one_piece(cells in prop::array::uniform9(piece_strategy())) {
            let mut board = TicTacToeBoard::empty();
            for (index, piece) in cells.iter().enumerate() {
                board.set_piece(BoardPosition::from_index(index), *piece);
            }

            for &piece in [TicTacToePiece::X, TicTacToePiece::O].iter() {
                let expected = WIN_LINES
                    .iter()
                    .any(|line| line.iter().all(|&i| cells[i] == Some(piece)));

                prop_assert_eq!(expected, check_win(&board, piece));
            }

            prop_assert_eq!(cells.iter().all(|c| c.is_some()), is_full(&board));
        }
    }
}
