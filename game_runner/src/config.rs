//! Command-line options for the console shell.

use clap::{Parser, ValueEnum};

/// Play Reversi or Tic-Tac-Toe at the console, against a person or a built-in agent.
#[derive(Parser, Debug)]
#[command(name = "game_runner")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Which game to play
    #[arg(long, value_enum, default_value_t = GameKind::Reversi)]
    pub game: GameKind,

    /// Who plays black (X in tic-tac-toe), which moves first
    #[arg(long, value_enum, default_value_t = AgentKind::Human)]
    pub black: AgentKind,

    /// Who plays white (O in tic-tac-toe)
    #[arg(long, value_enum, default_value_t = AgentKind::Heuristic)]
    pub white: AgentKind,

    /// Number of games to play back to back
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub games: u32,

    /// Seed for random agents; omitted means a fresh seed every run
    #[arg(long)]
    pub seed: Option<u64>,

    /// More output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKind {
    Reversi,
    TicTacToe,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentKind {
    /// Moves typed at the keyboard
    Human,
    /// The game's built-in deterministic opponent
    Heuristic,
    /// A uniformly random legal move
    Random,
    /// The first legal move in board order
    First,
}
