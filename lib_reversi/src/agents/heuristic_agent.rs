use crate::reversi_action::ReversiPlayerAction;
use crate::reversi_board::{BoardPosition, ReversiBoard, BOARD_SIZE};
use crate::reversi_gamestate::ReversiState;
use crate::rules;
use lib_boardgame::{AgentError, GameAgent, GameState, PlayerColor};
use tracing::{debug, trace};

/// Static value of holding each square. Corners are worth the most;
/// the squares that give corners away are worth the least.
pub const POSITION_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [120, -20, 20, 5, 5, 20, -20, 120],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [120, -20, 20, 5, 5, 20, -20, 120],
];

const CAPTURE_WEIGHT: i32 = 10;
const OPPONENT_MOBILITY_WEIGHT: i32 = 2;

/// A greedy, deterministic opponent that looks one move ahead.
///
/// Takes any corner it can (the first in row-major order). Otherwise it plays the move with
/// the best `score_move`, keeping the earliest one on ties.
pub struct ReversiHeuristicAgent;

impl ReversiHeuristicAgent {
    /// Chooses a move for `player` on `board`, or PassTurn when there is nothing to place.
    pub fn select_move(board: &ReversiBoard, player: PlayerColor) -> ReversiPlayerAction {
        let candidates = rules::legal_moves(board, player);

        if let Some(&corner) = candidates.iter().find(|p| p.is_corner()) {
            debug!(?player, %corner, "taking corner");
            return corner.into();
        }

        let mut best: Option<(BoardPosition, i32)> = None;

        for &position in candidates.iter() {
            let score = Self::score_move(board, player, position);
            trace!(?player, %position, score, "scored candidate");

            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((position, score)),
            }
        }

        match best {
            Some((position, score)) => {
                debug!(?player, %position, score, "picked highest scoring move");
                position.into()
            }
            None => ReversiPlayerAction::PassTurn,
        }
    }

    /// `10 x captures + square weight - 2 x opponent replies`.
    ///
    /// The opponent's replies are counted on a copy of the board with this move played;
    /// `board` itself is left alone.
    pub fn score_move(board: &ReversiBoard, player: PlayerColor, position: BoardPosition) -> i32 {
        let mut scratch = *board;
        let captured = rules::apply_move(&mut scratch, player, position);
        let opponent_mobility = rules::legal_moves(&scratch, player.opponent()).len();

        CAPTURE_WEIGHT * captured.len() as i32
            + POSITION_WEIGHTS[position.row()][position.col()]
            - OPPONENT_MOBILITY_WEIGHT * opponent_mobility as i32
    }
}

impl GameAgent<ReversiState> for ReversiHeuristicAgent {
    fn pick_move(
        &self,
        state: &ReversiState,
        _legal_moves: &[ReversiPlayerAction],
    ) -> Result<ReversiPlayerAction, AgentError> {
        if state.is_game_over() {
            return Err(AgentError::NoLegalMoves);
        }

        let player = state.current_player_turn();
        Ok(Self::select_move(state.board(), player))
    }
}
