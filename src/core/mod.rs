//! Core engine types: players, RNG, errors.
//!
//! Nothing in here knows about goods, markets or tokens; the Jaipur rules in
//! [`crate::games::jaipur`] are built on top of these pieces.

pub mod error;
pub mod player;
pub mod rng;

pub use error::{ConfigError, EngineError};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
