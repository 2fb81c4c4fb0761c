use crate::reversi_action::ReversiPlayerAction;
use crate::reversi_board::{BoardPosition, ReversiBoard, ReversiPiece, BOARD_SIZE};
use crate::rules;
use lib_boardgame::{GameState, MoveError, PlayerColor};
use std::fmt;
use tracing::debug;

/// Where a game of Reversi stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReversiPhase {
    BlackToMove,
    WhiteToMove,
    GameOver,
}

/// A game in progress: the board plus whose turn it is and how many
/// passes in a row have just happened.
#[derive(Clone, Debug)]
pub struct ReversiState {
    /// The underlying grid of board pieces.
    board: ReversiBoard,

    /// The player whose turn it currently is.
    current_player_turn: PlayerColor,

    /// Turns in a row that ended in a pass. Two ends the game.
    consecutive_passes: u8,

    /// Placements available to the current player, in row-major order.
    cur_state_legal_moves: Vec<BoardPosition>,

    is_game_over: bool,
}

impl Default for ReversiState {
    fn default() -> Self {
        Self::new()
    }
}

impl ReversiState {
    /// A new game from the standard opening, black to move.
    pub fn new() -> Self {
        Self::from_board(ReversiBoard::standard(), PlayerColor::Black)
    }

    /// Starts play from an arbitrary board with the given player to move.
    pub fn from_board(board: ReversiBoard, to_move: PlayerColor) -> Self {
        let mut state = ReversiState {
            board,
            current_player_turn: to_move,
            consecutive_passes: 0,
            cur_state_legal_moves: Vec::new(),
            is_game_over: false,
        };

        state.update_stored_state_values();

        state
    }

    pub fn board(&self) -> &ReversiBoard {
        &self.board
    }

    /// Where the current player may place a piece, for highlighting.
    /// Empty when they must pass or the game is over.
    pub fn legal_positions(&self) -> &[BoardPosition] {
        &self.cur_state_legal_moves
    }

    pub fn phase(&self) -> ReversiPhase {
        if self.is_game_over {
            return ReversiPhase::GameOver;
        }

        match self.current_player_turn {
            PlayerColor::Black => ReversiPhase::BlackToMove,
            PlayerColor::White => ReversiPhase::WhiteToMove,
        }
    }

    /// (black, white) disc counts.
    pub fn disc_counts(&self) -> (usize, usize) {
        rules::count_discs(&self.board)
    }

    /// Since the human-friendly output is always the same size,
    /// might as well pre-compute it so we can reserve the space ahead of time.
    /// (A test exists to confirm this is accurate.)
    const fn friendly_print_size() -> usize {
        2 + 18 + BOARD_SIZE * 19
    }

    /// The game ends on a full board or after both players pass in a row.
    fn calc_is_game_over(&self) -> bool {
        self.board.is_full() || self.consecutive_passes >= 2
    }

    fn update_stored_state_values(&mut self) {
        self.is_game_over = self.calc_is_game_over();

        self.cur_state_legal_moves = if self.is_game_over {
            Vec::new()
        } else {
            rules::legal_moves(&self.board, self.current_player_turn)
        };
    }
}

impl GameState for ReversiState {
    type Move = ReversiPlayerAction;

    /// Returns a human-friendly string for representing the state.
    /// Legal placements for the player to move are marked with '*'.
    fn human_friendly(&self) -> String {
        const BLACK_PIECE: char = 'X';
        const WHITE_PIECE: char = 'O';
        const EMPTY_SPACE: char = '.';
        const LEGAL_SPACE: char = '*';

        let mut result = String::with_capacity(ReversiState::friendly_print_size());

        result.push('\n');
        result.push_str("   a b c d e f g h");

        for row in 0..BOARD_SIZE {
            result.push('\n');
            result.push_str(&format!("{}  ", row + 1));

            for col in 0..BOARD_SIZE {
                let position = BoardPosition::new(row, col);

                let piece_char = match self.board.get_piece(position) {
                    Some(ReversiPiece::White) => WHITE_PIECE,
                    Some(ReversiPiece::Black) => BLACK_PIECE,
                    None if self.cur_state_legal_moves.contains(&position) => LEGAL_SPACE,
                    None => EMPTY_SPACE,
                };

                result.push(piece_char);
                if col != BOARD_SIZE - 1 {
                    result.push(' ');
                }
            }
        }

        result.push('\n');

        result
    }

    /// Puts the standard opening back on the board, black to move.
    fn initialize_board(&mut self) {
        *self = ReversiState::new();
    }

    fn initial_state() -> Self {
        Self::new()
    }

    /// The placements open to `player`, or a lone PassTurn when there are none.
    fn legal_moves(&self, player: PlayerColor) -> Vec<Self::Move> {
        if self.is_game_over {
            return Vec::new();
        }

        let positions = if player == self.current_player_turn {
            self.cur_state_legal_moves.clone()
        } else {
            rules::legal_moves(&self.board, player)
        };

        if positions.is_empty() {
            // There's always at least one legal choice: pass the turn
            return vec![ReversiPlayerAction::PassTurn];
        }

        positions.into_iter().map(Into::into).collect()
    }

    fn validate_move(&self, action: Self::Move) -> Result<(), MoveError> {
        if self.is_game_over {
            return Err(MoveError::GameOver);
        }

        let position = match action {
            ReversiPlayerAction::PassTurn if self.cur_state_legal_moves.is_empty() => {
                return Ok(())
            }
            ReversiPlayerAction::PassTurn => return Err(MoveError::IllegalPass),
            ReversiPlayerAction::Move { position } => position,
        };

        let (row, col) = (position.row(), position.col());

        if !position.within_board_bounds() {
            return Err(MoveError::OutOfBounds { row, col });
        }

        if self.board.get_piece(position).is_some() {
            return Err(MoveError::CellOccupied { row, col });
        }

        if !rules::is_legal(&self.board, self.current_player_turn, position) {
            return Err(MoveError::NoCaptureAvailable { row, col });
        }

        Ok(())
    }

    /// Apply the given move (or 'action') to this state, mutating this state
    /// and advancing it to the resulting state.
    /// In the game of Reversi, this places the piece at the given position,
    /// and flips all opponent pieces in any direction that terminates with another
    /// one of our pieces.
    fn apply_move(&mut self, action: Self::Move) {
        let player = self.current_player_turn;

        match action {
            ReversiPlayerAction::PassTurn => {
                // Passing only hands control to the other player.
                self.consecutive_passes = self.consecutive_passes.saturating_add(1);
                debug!(?player, passes = self.consecutive_passes, "player passed");
            }
            ReversiPlayerAction::Move { position } => {
                let flipped = rules::apply_move(&mut self.board, player, position);
                self.consecutive_passes = 0;
                debug!(?player, %position, flipped = flipped.len(), "placed piece");
            }
        }

        // advance the player turn to the next player
        self.current_player_turn = player.opponent();
        self.update_stored_state_values();

        if self.is_game_over {
            let (black, white) = self.disc_counts();
            debug!(black, white, "game over");
        }
    }

    /// Returns the current player whose turn it currently is.
    fn current_player_turn(&self) -> PlayerColor {
        self.current_player_turn
    }

    /// Returns the score of the given player in this state.
    fn player_score(&self, player: PlayerColor) -> usize {
        let (black, white) = self.disc_counts();

        match player {
            PlayerColor::White => white,
            PlayerColor::Black => black,
        }
    }

    /// True if the the game has ended, either by filling the board
    /// or by both players passing in a row.
    fn is_game_over(&self) -> bool {
        self.is_game_over
    }
}

impl fmt::Display for ReversiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (black, white) = self.disc_counts();

        write!(
            f,
            "{}X (black): {}  O (white): {}",
            self.human_friendly(),
            black,
            white
        )
    }
}
