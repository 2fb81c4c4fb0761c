use lib_boardgame::{AgentError, GameAgent, GameState};

/// Always plays the first legal move offered, i.e. the earliest in board order.
/// Handy as a fully predictable opponent.
pub struct FirstMoveAgent;

impl<TState: GameState> GameAgent<TState> for FirstMoveAgent {
    fn pick_move(
        &self,
        _state: &TState,
        legal_moves: &[TState::Move],
    ) -> Result<TState::Move, AgentError> {
        legal_moves.first().copied().ok_or(AgentError::NoLegalMoves)
    }
}
