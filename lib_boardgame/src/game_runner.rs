use crate::{AgentError, GameAgent, GameMove, GameResult, GameState, PlayError, PlayerColor};
use lib_printer::out;
use tracing::{debug, info};

/// A trait that describes a game runner.
pub trait GameRunner<T: GameState> {
    fn play_to_end(
        black_agent: &dyn GameAgent<T>,
        white_agent: &dyn GameAgent<T>,
    ) -> Result<GameResult, PlayError>;
}

/// A trivial, general-purpose implementation of a GameRunner.
/// Probably all you need to run most games.
pub struct GeneralGameRunner;

impl GeneralGameRunner {
    /// Plays the given state forward until the game ends.
    /// Agents are consulted in turn; a move an agent proposes is validated
    /// before it touches the state. A rejected move, or an agent that gives no move,
    /// ends the run with the reason and leaves the state as it was.
    pub fn play_from<T: GameState>(
        game_state: &mut T,
        black_agent: &dyn GameAgent<T>,
        white_agent: &dyn GameAgent<T>,
    ) -> Result<GameResult, PlayError> {
        loop {
            out!("{}", game_state.human_friendly());

            if let Some(result) = game_state.game_result() {
                info!(?result, "game over");
                return Ok(result);
            }

            let cur_player_color = game_state.current_player_turn();

            let agent_to_play = match cur_player_color {
                PlayerColor::Black => black_agent,
                PlayerColor::White => white_agent,
            };

            let selected_action =
                player_take_turn(&*game_state, agent_to_play, cur_player_color)?;

            out!(
                "Player {:?} picked move {:?}",
                cur_player_color,
                selected_action
            );
            debug!(player = ?cur_player_color, action = ?selected_action, "applying move");

            game_state.try_apply_move(selected_action)?;
        }
    }
}

fn player_take_turn<S>(
    game_state: &S,
    agent: &dyn GameAgent<S>,
    player_color: PlayerColor,
) -> Result<S::Move, AgentError>
where
    S: GameState,
{
    let legal_moves = game_state.legal_moves(player_color);

    if legal_moves.len() == 1 && legal_moves[0].is_forced_pass() {
        out!(
            "Player {:?} has no options, so they pass their turn.",
            player_color
        );
    }

    agent.pick_move(game_state, &legal_moves)
}

impl<T> GameRunner<T> for GeneralGameRunner
where
    T: GameState,
{
    fn play_to_end(
        black_agent: &dyn GameAgent<T>,
        white_agent: &dyn GameAgent<T>,
    ) -> Result<GameResult, PlayError> {
        let mut game_state = T::initial_state();
        info!("board initialized");

        Self::play_from(&mut game_state, black_agent, white_agent)
    }
}
