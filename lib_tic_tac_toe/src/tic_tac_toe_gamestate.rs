use crate::rules;
use crate::tic_tac_toe_action::TicTacToeAction;
use crate::tic_tac_toe_board::{BoardPosition, TicTacToeBoard};
use crate::{TicTacToePiece, BOARD_SIZE};
use lib_boardgame::{GameResult, GameState, MoveError, PlayerColor};
use std::fmt;
use tracing::debug;

/// Where a game of tic-tac-toe stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TicTacToeStatus {
    XToMove,
    OToMove,
    XWins,
    OWins,
    Draw,
}

impl TicTacToeStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, TicTacToeStatus::XToMove | TicTacToeStatus::OToMove)
    }

    fn to_move(piece: TicTacToePiece) -> Self {
        match piece {
            TicTacToePiece::X => TicTacToeStatus::XToMove,
            TicTacToePiece::O => TicTacToeStatus::OToMove,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TicTacToeState {
    board: TicTacToeBoard,
    current_player_turn: PlayerColor,
    status: TicTacToeStatus,
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeState {
    /// An empty board, X to move.
    pub fn new() -> Self {
        Self::from_board(TicTacToeBoard::empty(), PlayerColor::Black)
    }

    /// Starts play from an arbitrary board with the given player to move.
    /// A board that already holds a line or is full starts out finished.
    pub fn from_board(board: TicTacToeBoard, to_move: PlayerColor) -> Self {
        let status = match rules::winner(&board) {
            Some(TicTacToePiece::X) => TicTacToeStatus::XWins,
            Some(TicTacToePiece::O) => TicTacToeStatus::OWins,
            None if rules::is_full(&board) => TicTacToeStatus::Draw,
            None => TicTacToeStatus::to_move(to_move.into()),
        };

        TicTacToeState {
            board,
            current_player_turn: to_move,
            status,
        }
    }

    pub fn board(&self) -> &TicTacToeBoard {
        &self.board
    }

    pub fn status(&self) -> TicTacToeStatus {
        self.status
    }

    /// Every row is " a | b | c " and rows are split by "---+---+---",
    /// with a newline before and after the whole grid.
    const fn friendly_print_size() -> usize {
        (2 * BOARD_SIZE - 1) * (4 * BOARD_SIZE) + 1
    }
}

impl GameState for TicTacToeState {
    type Move = TicTacToeAction;

    /// Marks are drawn as 'X' and 'O'; empty cells show the number that selects them.
    fn human_friendly(&self) -> String {
        let mut result = String::with_capacity(TicTacToeState::friendly_print_size());

        result.push('\n');

        for row in 0..BOARD_SIZE {
            if row != 0 {
                result.push_str("---+---+---\n");
            }

            for col in 0..BOARD_SIZE {
                let position = BoardPosition::new(row, col);

                let cell = match self.board.get_piece(position) {
                    Some(TicTacToePiece::X) => 'X',
                    Some(TicTacToePiece::O) => 'O',
                    None => (b'1' + position.index() as u8) as char,
                };

                result.push(' ');
                result.push(cell);
                result.push(' ');
                if col != BOARD_SIZE - 1 {
                    result.push('|');
                }
            }

            result.push('\n');
        }

        result
    }

    fn initialize_board(&mut self) {
        *self = TicTacToeState::new();
    }

    fn initial_state() -> Self {
        Self::new()
    }

    /// Empty cells in ascending index order, for whichever player asks.
    fn legal_moves(&self, _player: PlayerColor) -> Vec<Self::Move> {
        if self.status.is_terminal() {
            return Vec::new();
        }

        self.board
            .empty_cells()
            .map(|index| BoardPosition::from_index(index).into())
            .collect()
    }

    fn validate_move(&self, action: Self::Move) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let position = action.position();
        let (row, col) = (position.row(), position.col());

        if !position.within_board_bounds() {
            return Err(MoveError::OutOfBounds { row, col });
        }

        if self.board.get_piece(position).is_some() {
            return Err(MoveError::CellOccupied { row, col });
        }

        Ok(())
    }

    /// Places the mover's mark, then settles a win, a draw, or the next turn, in that order.
    fn apply_move(&mut self, action: Self::Move) {
        let player = self.current_player_turn;
        let piece = TicTacToePiece::from(player);
        let position = action.position();

        self.board.set_piece(position, Some(piece));
        debug!(?player, %position, "placed mark");

        self.status = if rules::check_win(&self.board, piece) {
            match piece {
                TicTacToePiece::X => TicTacToeStatus::XWins,
                TicTacToePiece::O => TicTacToeStatus::OWins,
            }
        } else if rules::is_full(&self.board) {
            TicTacToeStatus::Draw
        } else {
            self.current_player_turn = player.opponent();
            TicTacToeStatus::to_move(piece.opposite())
        };

        if self.status.is_terminal() {
            debug!(status = ?self.status, "game over");
        }
    }

    fn current_player_turn(&self) -> PlayerColor {
        self.current_player_turn
    }

    /// Marks the player has on the board.
    fn player_score(&self, player: PlayerColor) -> usize {
        self.board.count(player.into())
    }

    fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Decided by who completed a line, not by who has more marks.
    fn game_result(&self) -> Option<GameResult> {
        match self.status {
            TicTacToeStatus::XWins => Some(GameResult::BlackWins),
            TicTacToeStatus::OWins => Some(GameResult::WhiteWins),
            TicTacToeStatus::Draw => Some(GameResult::Tie),
            TicTacToeStatus::XToMove | TicTacToeStatus::OToMove => None,
        }
    }
}

impl fmt::Display for TicTacToeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.human_friendly())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_agents::FirstMoveAgent;
    use lib_boardgame::test_impls::conformance;
    use lib_boardgame::GameAgent;

    fn at(index: usize) -> TicTacToeAction {
        BoardPosition::from_index(index).into()
    }

    #[test]
    fn human_friendly_reserves_correct_size() {
        let state = TicTacToeState::new();

        assert_eq!(
            TicTacToeState::friendly_print_size(),
            state.human_friendly().len()
        );
    }

    #[test]
    fn human_friendly_numbers_empty_cells() {
        let mut state = TicTacToeState::new();
        state.apply_move(at(4));
        state.apply_move(at(0));

        let printed = state.human_friendly();
        let lines: Vec<_> = printed.lines().collect();

        assert_eq!(" O | 2 | 3 ", lines[1]);
        assert_eq!("---+---+---", lines[2]);
        assert_eq!(" 4 | X | 6 ", lines[3]);
        assert_eq!(" 7 | 8 | 9 ", lines[5]);
    }

    #[test]
    fn new_game_is_x_to_move_with_every_cell_open() {
        let state = TicTacToeState::initial_state();

        assert_eq!(TicTacToeStatus::XToMove, state.status());
        assert_eq!(PlayerColor::Black, state.current_player_turn());
        assert_eq!(
            (0..9).map(at).collect::<Vec<_>>(),
            state.legal_moves(PlayerColor::Black)
        );
    }

    #[test]
    fn turns_alternate() {
        let mut state = TicTacToeState::new();

        assert_eq!(Ok(()), state.try_apply_move(at(4)));
        assert_eq!(TicTacToeStatus::OToMove, state.status());
        assert_eq!(PlayerColor::White, state.current_player_turn());

        assert_eq!(Ok(()), state.try_apply_move(at(0)));
        assert_eq!(TicTacToeStatus::XToMove, state.status());
        assert_eq!(1, state.player_score(PlayerColor::Black));
        assert_eq!(1, state.player_score(PlayerColor::White));
    }

    #[test]
    fn validate_move_reports_each_rejection() {
        let mut state = TicTacToeState::new();
        state.apply_move(at(4));

        assert_eq!(
            Err(MoveError::CellOccupied { row: 1, col: 1 }),
            state.validate_move(at(4))
        );
        assert_eq!(
            Err(MoveError::OutOfBounds { row: 3, col: 0 }),
            state.validate_move(TicTacToeAction(BoardPosition::new(3, 0)))
        );
    }

    #[test]
    fn rejected_move_leaves_state_untouched() {
        let mut state = TicTacToeState::new();
        state.apply_move(at(4));
        let before = *state.board();

        assert!(state.try_apply_move(at(4)).is_err());

        assert_eq!(&before, state.board());
        assert_eq!(TicTacToeStatus::OToMove, state.status());
    }

    #[test]
    fn completing_a_line_wins() {
        let board = TicTacToeBoard::from_marks("XX_OO____");
        let mut state = TicTacToeState::from_board(board, PlayerColor::Black);

        state.apply_move(at(2));

        assert_eq!(TicTacToeStatus::XWins, state.status());
        assert_eq!(Some(GameResult::BlackWins), state.game_result());
        // the winner keeps the turn; nothing moves after a win
        assert_eq!(PlayerColor::Black, state.current_player_turn());
        conformance::assert_game_over_is_final(&state);
        assert_eq!(Err(MoveError::GameOver), state.validate_move(at(5)));
    }

    #[test]
    fn result_follows_the_line_not_the_mark_count() {
        let board = TicTacToeBoard::from_marks("XX_OOOX__");
        let state = TicTacToeState::from_board(board, PlayerColor::Black);

        assert_eq!(TicTacToeStatus::OWins, state.status());
        assert_eq!(Some(GameResult::WhiteWins), state.game_result());
    }

    #[test]
    fn filling_the_board_without_a_line_draws() {
        let board = TicTacToeBoard::from_marks("XOXOXOOX_");
        let mut state = TicTacToeState::from_board(board, PlayerColor::White);

        assert_eq!(Ok(()), state.try_apply_move(at(8)));

        assert_eq!(TicTacToeStatus::Draw, state.status());
        assert_eq!(Some(GameResult::Tie), state.game_result());
    }

    #[test]
    fn win_on_the_last_cell_is_not_a_draw() {
        let board = TicTacToeBoard::from_marks("XOXOXOOX_");
        let mut state = TicTacToeState::from_board(board, PlayerColor::Black);

        state.apply_move(at(8));

        assert_eq!(TicTacToeStatus::XWins, state.status());
    }

    #[test]
    fn reset_clears_the_board() {
        let mut state = TicTacToeState::new();
        state.apply_move(at(0));
        state.apply_move(at(1));

        state.initialize_board();

        assert_eq!(&TicTacToeBoard::empty(), state.board());
        assert_eq!(TicTacToeStatus::XToMove, state.status());
    }

    #[test]
    fn positions_pass_conformance() {
        conformance::assert_legal_moves_are_pure(&TicTacToeState::new());
        conformance::assert_legal_moves_apply_to_copies(&TicTacToeState::new());

        let midgame = TicTacToeState::from_board(
            TicTacToeBoard::from_marks("X___O___X"),
            PlayerColor::White,
        );
        conformance::assert_legal_moves_are_pure(&midgame);
        conformance::assert_legal_moves_apply_to_copies(&midgame);
    }

    #[test]
    fn first_move_self_play_ends_in_x_win() {
        let mut state = TicTacToeState::new();
        let agent = FirstMoveAgent;

        let (result, turns) = conformance::play_out(&mut state, 9, |s, moves| {
            GameAgent::<TicTacToeState>::pick_move(&agent, s, moves)
        });

        // X fills 1, 3, 5, 7 and completes the 3-5-7 diagonal.
        assert_eq!(GameResult::BlackWins, result);
        assert_eq!(7, turns);
        assert_eq!(&TicTacToeBoard::from_marks("XOXOXOX__"), state.board());
    }
}
