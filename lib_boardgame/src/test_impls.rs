//! Helpers shared by the tests of every game crate.

pub mod conformance;
mod game_state_test_impl;

pub use game_state_test_impl::{CountdownState, TakeAction};
