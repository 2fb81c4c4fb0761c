use crate::rules;
use crate::tic_tac_toe_action::TicTacToeAction;
use crate::tic_tac_toe_board::{BoardPosition, TicTacToeBoard};
use crate::tic_tac_toe_gamestate::TicTacToeState;
use crate::TicTacToePiece;
use lib_boardgame::{AgentError, GameAgent, GameState};
use tracing::debug;

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// A fixed-priority opponent: win, block, center, corner, then anything.
/// Every rule scans cells in ascending index order.
pub struct TicTacToeHeuristicAgent;

impl TicTacToeHeuristicAgent {
    /// The cell index `piece` should play on `board`, or None on a full board.
    pub fn select_move(board: &TicTacToeBoard, piece: TicTacToePiece) -> Option<usize> {
        if let Some(index) = Self::completing_cell(board, piece) {
            debug!(?piece, index, "taking the win");
            return Some(index);
        }

        if let Some(index) = Self::completing_cell(board, piece.opposite()) {
            debug!(?piece, index, "blocking");
            return Some(index);
        }

        if board.is_empty_at(CENTER) {
            return Some(CENTER);
        }

        if let Some(&corner) = CORNERS.iter().find(|&&i| board.is_empty_at(i)) {
            return Some(corner);
        }

        board.empty_cells().next()
    }

    /// The first empty cell where `piece` would complete a line, tried on a copy of the board.
    fn completing_cell(board: &TicTacToeBoard, piece: TicTacToePiece) -> Option<usize> {
        board.empty_cells().find(|&index| {
            let mut scratch = *board;
            scratch.set_piece(BoardPosition::from_index(index), Some(piece));

            rules::check_win(&scratch, piece)
        })
    }
}

impl GameAgent<TicTacToeState> for TicTacToeHeuristicAgent {
    fn pick_move(
        &self,
        state: &TicTacToeState,
        _legal_moves: &[TicTacToeAction],
    ) -> Result<TicTacToeAction, AgentError> {
        if state.is_game_over() {
            return Err(AgentError::NoLegalMoves);
        }

        let piece = TicTacToePiece::from(state.current_player_turn());

        Self::select_move(state.board(), piece)
            .map(|index| BoardPosition::from_index(index).into())
            .ok_or(AgentError::NoLegalMoves)
    }
}
