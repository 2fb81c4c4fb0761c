mod first_move_agent;
mod human_agent;
mod random_agent;
mod util;

pub use first_move_agent::FirstMoveAgent;
pub use human_agent::HumanAgent;
pub use random_agent::RandomAgent;
