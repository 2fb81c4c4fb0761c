use crate::util::random_pick;
use lib_boardgame::{AgentError, GameAgent, GameState};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use std::cell::RefCell;

/// Picks uniformly among the legal moves.
pub struct RandomAgent {
    rng: RefCell<XorShiftRng>,
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomAgent {
    /// A new agent seeded from the thread rng.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// A new agent whose choices are reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: RefCell::new(XorShiftRng::seed_from_u64(seed)),
        }
    }
}

impl<TState: GameState> GameAgent<TState> for RandomAgent {
    fn pick_move(
        &self,
        _state: &TState,
        legal_moves: &[TState::Move],
    ) -> Result<TState::Move, AgentError> {
        random_pick(legal_moves, &mut *self.rng.borrow_mut())
            .copied()
            .ok_or(AgentError::NoLegalMoves)
    }
}
