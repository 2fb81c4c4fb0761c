mod heuristic_agent;

pub use heuristic_agent::{ReversiHeuristicAgent, POSITION_WEIGHTS};
