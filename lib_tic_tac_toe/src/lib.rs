pub mod agents;
pub mod rules;
mod tic_tac_toe_action;
mod tic_tac_toe_board;
mod tic_tac_toe_gamestate;

pub use agents::TicTacToeHeuristicAgent;
pub use tic_tac_toe_action::TicTacToeAction;
pub use tic_tac_toe_board::{BoardPosition, TicTacToeBoard, CELL_COUNT};
pub use tic_tac_toe_gamestate::{TicTacToeState, TicTacToeStatus};

use lib_boardgame::PlayerColor;

/// The size of the board.  E.x. if 3, the board is a 3x3 grid.
pub const BOARD_SIZE: usize = 3;

/// X always moves first, so it plays as Black.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TicTacToePiece {
    X,
    O,
}

impl TicTacToePiece {
    pub fn opposite(self) -> Self {
        match self {
            TicTacToePiece::X => TicTacToePiece::O,
            TicTacToePiece::O => TicTacToePiece::X,
        }
    }
}

impl From<PlayerColor> for TicTacToePiece {
    fn from(color: PlayerColor) -> Self {
        match color {
            PlayerColor::Black => TicTacToePiece::X,
            PlayerColor::White => TicTacToePiece::O,
        }
    }
}
