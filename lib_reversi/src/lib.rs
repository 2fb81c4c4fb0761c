pub mod agents;
mod reversi_action;
mod reversi_board;
mod reversi_gamestate;
pub mod rules;
mod util;

pub use agents::ReversiHeuristicAgent;
pub use reversi_action::ReversiPlayerAction;
pub use reversi_board::{BoardPosition, ReversiBoard, ReversiPiece, BOARD_SIZE};
pub use reversi_gamestate::{ReversiPhase, ReversiState};
