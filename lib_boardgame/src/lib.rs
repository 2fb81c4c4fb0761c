mod errors;
mod game_runner;
pub mod test_impls;

pub use errors::{AgentError, MoveError, ParseMoveError, PlayError};
pub use game_runner::{GameRunner, GeneralGameRunner};

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlayerColor {
    Black,
    White,
}

impl PlayerColor {
    pub fn opponent(self) -> Self {
        match self {
            PlayerColor::Black => PlayerColor::White,
            PlayerColor::White => PlayerColor::Black,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    Tie,
    WhiteWins,
    BlackWins,
}

impl GameResult {
    pub fn is_win_for_player(self, player_color: PlayerColor) -> bool {
        self.winner() == Some(player_color)
    }

    /// The winning player, or None for a tie.
    pub fn winner(self) -> Option<PlayerColor> {
        match self {
            GameResult::BlackWins => Some(PlayerColor::Black),
            GameResult::WhiteWins => Some(PlayerColor::White),
            GameResult::Tie => None,
        }
    }

    /// Decides a result by comparing the two players' scores.
    pub fn from_scores(black_score: usize, white_score: usize) -> Self {
        if white_score > black_score {
            GameResult::WhiteWins
        } else if black_score > white_score {
            GameResult::BlackWins
        } else {
            GameResult::Tie
        }
    }
}

/// Describes a move a player can make in a game.
/// I.e., in Reversi, a move could be at position (3,7).
pub trait GameMove: Copy + fmt::Debug + PartialEq {
    /// True if this move is the only thing a player with no options may do:
    /// give up their turn.
    fn is_forced_pass(self) -> bool {
        false
    }
}

/// Describes a complete state of some Game,
/// such as the board position, the current player's turn,
/// or any other relevant info.
pub trait GameState: Clone {
    type Move: GameMove;

    /// Returns a human-friendly string for representing the state.
    fn human_friendly(&self) -> String;

    /// Puts the board back to the starting layout of a new game.
    fn initialize_board(&mut self);

    /// Returns a fresh, ready-to-play game state for this game.
    fn initial_state() -> Self;

    /// Returns the possible moves the given player can make for the current state,
    /// in row-major board order. Empty once the game is over.
    fn legal_moves(&self, player: PlayerColor) -> Vec<Self::Move>;

    /// Checks whether the current player may make the given move,
    /// without changing anything.
    fn validate_move(&self, action: Self::Move) -> Result<(), MoveError>;

    /// Apply the given move (or 'action') to this state, mutating this state
    /// and advancing it to the resulting state.
    /// The move must already be known to be legal; see `try_apply_move`.
    fn apply_move(&mut self, action: Self::Move);

    /// Returns the current player whose turn it currently is.
    fn current_player_turn(&self) -> PlayerColor;

    /// Returns the score of the given player in this state.
    fn player_score(&self, player: PlayerColor) -> usize;

    /// True if the game is over (i.e. the win condition has been met, or neither player
    /// can take any further action).
    fn is_game_over(&self) -> bool;

    fn is_legal_move(&self, action: Self::Move) -> bool {
        self.validate_move(action).is_ok()
    }

    /// Validates the move, then applies it.
    /// On error the state is left untouched.
    fn try_apply_move(&mut self, action: Self::Move) -> Result<(), MoveError> {
        self.validate_move(action)?;
        self.apply_move(action);

        Ok(())
    }

    /// Given a legal move (or 'action'), return the resulting state of applying the action
    /// to this state (does not mutate this state).
    fn next_state(&self, action: Self::Move) -> Self {
        let mut cloned = self.clone();
        cloned.apply_move(action);

        cloned
    }

    /// The GameResult, or None if the game is not yet over.
    fn game_result(&self) -> Option<GameResult> {
        if !self.is_game_over() {
            return None;
        }

        Some(GameResult::from_scores(
            self.player_score(PlayerColor::Black),
            self.player_score(PlayerColor::White),
        ))
    }
}

/// A trait representing the functionality of a GameAgent.
/// Specifically, given a GameState, a GameAgent must be able to decide a GameMove.
pub trait GameAgent<TState: GameState> {
    /// Picks one of `legal_moves`, or says why it can't.
    fn pick_move(
        &self,
        state: &TState,
        legal_moves: &[TState::Move],
    ) -> Result<TState::Move, AgentError>;
}
