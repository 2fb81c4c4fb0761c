mod config;

use anyhow::Result;
use clap::Parser;
use config::{AgentKind, Config, GameKind};
use lib_agents::{FirstMoveAgent, HumanAgent, RandomAgent};
use lib_boardgame::{
    AgentError, GameAgent, GameResult, GameState, GeneralGameRunner, PlayError, PlayerColor,
};
use lib_printer::{init_logging, out};
use lib_reversi::{ReversiHeuristicAgent, ReversiState};
use lib_tic_tac_toe::{TicTacToeHeuristicAgent, TicTacToeState};
use std::fmt::Display;
use std::str::FromStr;
use tracing::info;

const REVERSI_PROMPT: &str = "Enter a move (e.g. d3), 'pass' or 'q' to quit:";
const TIC_TAC_TOE_PROMPT: &str = "Enter a cell (1-9) or 'q' to quit:";

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(config.verbose);
    info!(?config, "starting");

    let tally = match config.game {
        GameKind::Reversi => play_series(&config, REVERSI_PROMPT, reversi_heuristic)?,
        GameKind::TicTacToe => play_series(&config, TIC_TAC_TOE_PROMPT, tic_tac_toe_heuristic)?,
    };

    if config.games > 1 {
        out!("{}", tally);
    }

    Ok(())
}

fn reversi_heuristic() -> Box<dyn GameAgent<ReversiState>> {
    Box::new(ReversiHeuristicAgent)
}

fn tic_tac_toe_heuristic() -> Box<dyn GameAgent<TicTacToeState>> {
    Box::new(TicTacToeHeuristicAgent)
}

/// Plays `config.games` games with the agents `config` asks for.
fn play_series<S>(
    config: &Config,
    prompt: &str,
    heuristic: fn() -> Box<dyn GameAgent<S>>,
) -> Result<Tally>
where
    S: GameState + 'static,
    S::Move: FromStr,
    <S::Move as FromStr>::Err: Display,
{
    let black = build_agent(config, PlayerColor::Black, prompt, heuristic);
    let white = build_agent(config, PlayerColor::White, prompt, heuristic);

    run_games(config.games, &*black, &*white)
}

/// Plays up to `games` games on one state, resetting the board in between.
/// A player quitting ends the series early with the games finished so far;
/// any other failure is returned.
fn run_games<S: GameState>(
    games: u32,
    black: &dyn GameAgent<S>,
    white: &dyn GameAgent<S>,
) -> Result<Tally> {
    let mut state = S::initial_state();
    let mut tally = Tally::default();

    for game in 1..=games {
        if game > 1 {
            state.initialize_board();
        }

        info!(game, "game started");
        let result = match GeneralGameRunner::play_from(&mut state, black, white) {
            Ok(result) => result,
            Err(PlayError::Agent(AgentError::Quit)) => {
                info!(game, "player quit");
                out!("Quitting.");
                break;
            }
            Err(e) => return Err(e.into()),
        };

        out!(
            "Final score: X (black) {}, O (white) {}",
            state.player_score(PlayerColor::Black),
            state.player_score(PlayerColor::White)
        );
        out!("{}", describe(result));

        tally.record(result);
    }

    Ok(tally)
}

fn build_agent<S>(
    config: &Config,
    color: PlayerColor,
    prompt: &str,
    heuristic: fn() -> Box<dyn GameAgent<S>>,
) -> Box<dyn GameAgent<S>>
where
    S: GameState + 'static,
    S::Move: FromStr,
    <S::Move as FromStr>::Err: Display,
{
    let kind = match color {
        PlayerColor::Black => config.black,
        PlayerColor::White => config.white,
    };

    match kind {
        AgentKind::Human => Box::new(HumanAgent::<S>::new(format!("{:?}: {}", color, prompt))),
        AgentKind::Heuristic => heuristic(),
        AgentKind::First => Box::new(FirstMoveAgent),
        AgentKind::Random => match config.seed {
            // Two seeded random players shouldn't mirror each other.
            Some(seed) if color == PlayerColor::White => {
                Box::new(RandomAgent::with_seed(seed.wrapping_add(1)))
            }
            Some(seed) => Box::new(RandomAgent::with_seed(seed)),
            None => Box::new(RandomAgent::new()),
        },
    }
}

fn describe(result: GameResult) -> &'static str {
    match result {
        GameResult::BlackWins => "Black (X) wins!",
        GameResult::WhiteWins => "White (O) wins!",
        GameResult::Tie => "It's a draw.",
    }
}

/// Wins and draws across a series of games.
#[derive(Debug, Default, PartialEq, Eq)]
struct Tally {
    black_wins: u32,
    white_wins: u32,
    draws: u32,
}

impl Tally {
    fn record(&mut self, result: GameResult) {
        match result {
            GameResult::BlackWins => self.black_wins += 1,
            GameResult::WhiteWins => self.white_wins += 1,
            GameResult::Tie => self.draws += 1,
        }
    }
}

impl Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Black wins: {}  White wins: {}  Draws: {}",
            self.black_wins, self.white_wins, self.draws
        )
    }
}
