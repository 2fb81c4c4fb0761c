use crate::*;
use std::str::FromStr;

/// A tiny take-away game: players alternately remove one or two counters,
/// and whoever removes the last counter wins.
/// Small enough to exercise runners and harnesses without a real board.
#[derive(Clone, Debug)]
pub struct CountdownState {
    remaining: usize,
    current_player_turn: PlayerColor,
    last_mover: Option<PlayerColor>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TakeAction(pub usize);

impl GameMove for TakeAction {}

impl FromStr for TakeAction {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(TakeAction)
            .map_err(|_| ParseMoveError::Malformed {
                input: s.trim().to_owned(),
            })
    }
}

impl CountdownState {
    const STARTING_COUNTERS: usize = 5;
    const MAX_TAKE: usize = 2;

    pub fn with_remaining(remaining: usize) -> Self {
        Self {
            remaining,
            current_player_turn: PlayerColor::Black,
            last_mover: None,
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl GameState for CountdownState {
    type Move = TakeAction;

    fn human_friendly(&self) -> String {
        format!(
            "{} remaining, {:?} to move",
            self.remaining, self.current_player_turn
        )
    }

    fn initialize_board(&mut self) {
        *self = Self::with_remaining(Self::STARTING_COUNTERS);
    }

    fn initial_state() -> Self {
        Self::with_remaining(Self::STARTING_COUNTERS)
    }

    fn legal_moves(&self, _player: PlayerColor) -> Vec<Self::Move> {
        (1..=Self::MAX_TAKE.min(self.remaining))
            .map(TakeAction)
            .collect()
    }

    fn validate_move(&self, action: Self::Move) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }

        let TakeAction(count) = action;
        if count == 0 || count > Self::MAX_TAKE || count > self.remaining {
            return Err(MoveError::OutOfBounds { row: 0, col: count });
        }

        Ok(())
    }

    fn apply_move(&mut self, action: Self::Move) {
        self.remaining -= action.0;
        self.last_mover = Some(self.current_player_turn);
        self.current_player_turn = self.current_player_turn.opponent();
    }

    fn current_player_turn(&self) -> PlayerColor {
        self.current_player_turn
    }

    /// The player who took the last counter scores one point.
    fn player_score(&self, player: PlayerColor) -> usize {
        if self.is_game_over() && self.last_mover == Some(player) {
            1
        } else {
            0
        }
    }

    fn is_game_over(&self) -> bool {
        self.remaining == 0
    }
}
