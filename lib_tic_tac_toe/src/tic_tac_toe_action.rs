use crate::tic_tac_toe_board::{BoardPosition, CELL_COUNT};
use lib_boardgame::{GameMove, ParseMoveError};
use std::fmt;
use std::str::FromStr;

/// Placing the mover's mark at a position. Tic-tac-toe has no pass.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TicTacToeAction(pub BoardPosition);

impl TicTacToeAction {
    pub fn position(self) -> BoardPosition {
        self.0
    }
}

impl GameMove for TicTacToeAction {}

impl From<BoardPosition> for TicTacToeAction {
    fn from(position: BoardPosition) -> Self {
        TicTacToeAction(position)
    }
}

impl fmt::Display for TicTacToeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TicTacToeAction {
    type Err = ParseMoveError;

    /// A single cell number, 1 (top left) through 9 (bottom right).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        let number: usize = input.parse().map_err(|_| ParseMoveError::Malformed {
            input: input.to_owned(),
        })?;

        if number == 0 || number > CELL_COUNT {
            return Err(ParseMoveError::OutOfRange {
                input: input.to_owned(),
            });
        }

        Ok(BoardPosition::from_index(number - 1).into())
    }
}
