use lib_boardgame::PlayerColor;
use std::fmt;

/// The size of the board.
/// E.x., if this is 8, the Reversi board is 8x8 spaces large.
pub const BOARD_SIZE: usize = 8;

/// When traversing pieces on the board,
/// a positive direction indicates increasing values for col or row,
/// a negative direction indicates decreasing values for col or row,
/// and a 'same' direction indicates no movement for col or row.
/// Row 0 is the top of the board, so 'row: positive' walks downward.
pub(crate) mod board_directions {
    pub type Direction = i32;
    pub const POSITIVE: Direction = 1;
    pub const NEGATIVE: Direction = -1;
    pub const SAME: Direction = 0;
}

use board_directions::{NEGATIVE, POSITIVE, SAME};

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Directions {
    pub row_dir: board_directions::Direction,
    pub col_dir: board_directions::Direction,
}

impl Directions {
    const fn new(
        row_dir: board_directions::Direction,
        col_dir: board_directions::Direction,
    ) -> Self {
        Self { row_dir, col_dir }
    }
}

/// The eight directions a capture can run in, in the order captures are collected.
pub(crate) const DIRECTIONS: [Directions; 8] = [
    Directions::new(NEGATIVE, NEGATIVE),
    Directions::new(NEGATIVE, SAME),
    Directions::new(NEGATIVE, POSITIVE),
    Directions::new(SAME, NEGATIVE),
    Directions::new(SAME, POSITIVE),
    Directions::new(POSITIVE, NEGATIVE),
    Directions::new(POSITIVE, SAME),
    Directions::new(POSITIVE, POSITIVE),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReversiPiece {
    Black,
    White,
}

impl From<PlayerColor> for ReversiPiece {
    fn from(color: PlayerColor) -> ReversiPiece {
        match color {
            PlayerColor::Black => ReversiPiece::Black,
            PlayerColor::White => ReversiPiece::White,
        }
    }
}

/// A (row, col) coordinate. Row 0 is the top row ('1' on the printed board),
/// col 0 the leftmost column ('a').
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct BoardPosition {
    pub(crate) row: usize,
    pub(crate) col: usize,
}

impl BoardPosition {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    pub fn within_board_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    pub fn is_corner(self) -> bool {
        let edge = BOARD_SIZE - 1;
        (self.row == 0 || self.row == edge) && (self.col == 0 || self.col == edge)
    }

    /// Every position on the board, in row-major order.
    pub fn all() -> impl Iterator<Item = BoardPosition> {
        (0..(BOARD_SIZE * BOARD_SIZE))
            .map(|i| BoardPosition::new(i / BOARD_SIZE, i % BOARD_SIZE))
    }
}

impl fmt::Display for BoardPosition {
    /// Formats as the printed board labels it, e.g. "d3".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col_letter = (b'a' + self.col as u8) as char;
        write!(f, "{}{}", col_letter, self.row + 1)
    }
}

/// The 8x8 grid of pieces. Only storage; the rules live in `rules`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ReversiBoard {
    cells: [[Option<ReversiPiece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for ReversiBoard {
    fn default() -> Self {
        Self::standard()
    }
}

impl ReversiBoard {
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The standard opening layout: two white discs on the main diagonal
    /// of the center square, two black discs on the other.
    pub fn standard() -> Self {
        let mut board = Self::empty();

        board.set_piece(BoardPosition::new(3, 3), Some(ReversiPiece::White));
        board.set_piece(BoardPosition::new(4, 4), Some(ReversiPiece::White));
        board.set_piece(BoardPosition::new(3, 4), Some(ReversiPiece::Black));
        board.set_piece(BoardPosition::new(4, 3), Some(ReversiPiece::Black));

        board
    }

    /// The piece at the position, or None if it is empty or off the board.
    pub fn get_piece(&self, position: BoardPosition) -> Option<ReversiPiece> {
        self.cells
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .copied()
            .flatten()
    }

    /// Set the piece at the coordinates to the given piece.
    /// The position must be on the board.
    pub fn set_piece(&mut self, position: BoardPosition, piece: Option<ReversiPiece>) {
        self.cells[position.row][position.col] = piece;
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() == BOARD_SIZE * BOARD_SIZE
    }

    /// Builds a board from eight rows of 'X' (black), 'O' (white) and '.' (empty).
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Self::empty();

        for (row, line) in rows.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                let piece = match c {
                    'X' => Some(ReversiPiece::Black),
                    'O' => Some(ReversiPiece::White),
                    _ => None,
                };

                board.set_piece(BoardPosition::new(row, col), piece);
            }
        }

        board
    }
}
