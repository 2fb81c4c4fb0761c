//! Checks every `GameState` implementation must pass.
//! Each game's tests call these against its own positions.

use crate::{AgentError, GameResult, GameState};

/// Asking for legal moves twice, or asking whether each is legal,
/// must give the same answer and must not change the state.
pub fn assert_legal_moves_are_pure<S: GameState>(state: &S) {
    let before = state.human_friendly();
    let player = state.current_player_turn();

    let first = state.legal_moves(player);
    let second = state.legal_moves(player);
    assert_eq!(first, second, "legal_moves must be repeatable");

    for action in first.iter() {
        assert!(
            state.is_legal_move(*action),
            "{:?} was listed as legal but failed validation",
            action
        );
    }

    assert_eq!(
        before,
        state.human_friendly(),
        "queries must not mutate the state"
    );
}

/// Every listed move must apply cleanly to a copy, leaving the original untouched
/// and handing the turn to someone.
pub fn assert_legal_moves_apply_to_copies<S: GameState>(state: &S) {
    let before = state.human_friendly();

    for action in state.legal_moves(state.current_player_turn()) {
        let mut scratch = state.clone();
        let applied = scratch.try_apply_move(action);

        assert_eq!(Ok(()), applied, "{:?} was listed as legal", action);
        assert_eq!(
            state.next_state(action).human_friendly(),
            scratch.human_friendly(),
            "next_state must agree with try_apply_move"
        );
    }

    assert_eq!(
        before,
        state.human_friendly(),
        "copies must not alias the original"
    );
}

/// A finished game has a result, offers no moves and rejects further play.
pub fn assert_game_over_is_final<S: GameState>(state: &S) {
    assert!(state.is_game_over());
    assert!(state.game_result().is_some());
    let player = state.current_player_turn();
    assert!(state.legal_moves(player).is_empty());
    assert!(state.legal_moves(player.opponent()).is_empty());
}

/// Plays a game forward with `pick` choosing each move, running the purity
/// checks before every turn. Panics if `pick` gives no move or the game
/// outlasts `max_turns`.
/// Returns the result and the number of turns taken.
pub fn play_out<S, F>(state: &mut S, max_turns: usize, mut pick: F) -> (GameResult, usize)
where
    S: GameState,
    F: FnMut(&S, &[S::Move]) -> Result<S::Move, AgentError>,
{
    for turn in 0..=max_turns {
        if let Some(result) = state.game_result() {
            assert_game_over_is_final(state);
            return (result, turn);
        }

        assert_legal_moves_are_pure(state);

        let legal_moves = state.legal_moves(state.current_player_turn());
        let action = match pick(state, &legal_moves) {
            Ok(action) => action,
            Err(e) => panic!("no move picked on turn {}: {}", turn, e),
        };

        if let Err(e) = state.try_apply_move(action) {
            panic!("picked move {:?} was rejected: {}", action, e);
        }
    }

    panic!("game did not finish within {} turns", max_turns);
}
