//! Forward model contract and the runner that drives it.
//!
//! Games implement `ForwardModel` to define:
//! - The initial state
//! - Legal actions for each state
//! - How actions modify state and what happens after
//! - Win/loss conditions
//!
//! The runner and any search code call into `ForwardModel` but never
//! interpret game-specific concepts directly.

pub mod engine;
pub mod runner;

pub use engine::{ForwardModel, GameResult, PlayerResult, StepEvents, TurnStatus};
pub use runner::GameRunner;
