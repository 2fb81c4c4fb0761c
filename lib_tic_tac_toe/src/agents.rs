mod heuristic_agent;

pub use heuristic_agent::TicTacToeHeuristicAgent;
