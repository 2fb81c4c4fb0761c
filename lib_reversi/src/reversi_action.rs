use crate::reversi_board::{BoardPosition, BOARD_SIZE};
use lib_boardgame::{GameMove, ParseMoveError};
use std::fmt;
use std::str::FromStr;

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum ReversiPlayerAction {
    PassTurn,
    Move { position: BoardPosition },
}

impl GameMove for ReversiPlayerAction {
    fn is_forced_pass(self) -> bool {
        matches!(self, ReversiPlayerAction::PassTurn)
    }
}

impl From<BoardPosition> for ReversiPlayerAction {
    fn from(position: BoardPosition) -> Self {
        ReversiPlayerAction::Move { position }
    }
}

impl fmt::Debug for ReversiPlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReversiPlayerAction::PassTurn => write!(f, "(player passes turn)"),
            ReversiPlayerAction::Move { position } => write!(
                f,
                "{} (row {}, col {})",
                position,
                position.row(),
                position.col()
            ),
        }
    }
}

impl fmt::Display for ReversiPlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReversiPlayerAction::PassTurn => write!(f, "pass"),
            ReversiPlayerAction::Move { position } => write!(f, "{}", position),
        }
    }
}

impl FromStr for ReversiPlayerAction {
    type Err = ParseMoveError;

    /// Accepts "pass", or a column letter and a row digit in either order:
    /// "d3", "D3" and "3d" are all column d, row 3.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        if input.eq_ignore_ascii_case("pass") {
            return Ok(ReversiPlayerAction::PassTurn);
        }

        let malformed = || ParseMoveError::Malformed {
            input: input.to_owned(),
        };

        let chars: Vec<char> = input.chars().collect();
        let (letter, digit) = match chars.as_slice() {
            [a, b] if a.is_ascii_alphabetic() && b.is_ascii_digit() => (*a, *b),
            [a, b] if a.is_ascii_digit() && b.is_ascii_alphabetic() => (*b, *a),
            _ => return Err(malformed()),
        };

        let col = (letter.to_ascii_lowercase() as u8 - b'a') as usize;
        let row = digit.to_digit(10).map(|d| d as usize).ok_or_else(malformed)?;

        if row == 0 || row > BOARD_SIZE || col >= BOARD_SIZE {
            return Err(ParseMoveError::OutOfRange {
                input: input.to_owned(),
            });
        }

        Ok(BoardPosition::new(row - 1, col).into())
    }
}
