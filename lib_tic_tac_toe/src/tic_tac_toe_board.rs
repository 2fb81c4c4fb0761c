use crate::{TicTacToePiece, BOARD_SIZE};
use std::fmt;

/// Number of cells on the board; cells are indexed 0..CELL_COUNT in row-major order.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct BoardPosition {
    row: usize,
    col: usize,
}

impl BoardPosition {
    pub const fn new(row: usize, col: usize) -> Self {
        BoardPosition { row, col }
    }

    pub const fn from_index(index: usize) -> Self {
        BoardPosition::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index, 0 (top left) to 8 (bottom right).
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    pub fn within_board_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for BoardPosition {
    /// The 1-9 number a player types for this cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

/// The nine cells. Only storage; the rules live in `rules`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct TicTacToeBoard {
    cells: [Option<TicTacToePiece>; CELL_COUNT],
}

impl TicTacToeBoard {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The piece at the position, or None if it is empty or off the board.
    pub fn get_piece(&self, position: BoardPosition) -> Option<TicTacToePiece> {
        if !position.within_board_bounds() {
            return None;
        }

        self.cells[position.index()]
    }

    /// The position must be on the board.
    pub fn set_piece(&mut self, position: BoardPosition, piece: Option<TicTacToePiece>) {
        self.cells[position.index()] = piece;
    }

    /// Indices of the empty cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(None))
    }

    pub fn count(&self, piece: TicTacToePiece) -> usize {
        self.cells.iter().filter(|&&c| c == Some(piece)).count()
    }

    /// Builds a board from nine characters: 'X', 'O', anything else empty.
    #[cfg(test)]
    pub(crate) fn from_marks(marks: &str) -> Self {
        let mut board = Self::empty();

        for (index, c) in marks.chars().enumerate().take(CELL_COUNT) {
            let piece = match c {
                'X' => Some(TicTacToePiece::X),
                'O' => Some(TicTacToePiece::O),
                _ => None,
            };

            board.set_piece(BoardPosition::from_index(index), piece);
        }

        board
    }
}
