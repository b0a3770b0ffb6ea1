//! # rust-jaipur
//!
//! A deterministic, deep-copyable forward model for the card game Jaipur,
//! built for search and simulation agents.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness comes from the seeded RNG owned by
//!    the state. Same seed plus same actions gives byte-identical states.
//!
//! 2. **Cheap Copies**: `Clone` is a true deep copy, made O(1) by `im-rs`
//!    persistent structures, so rollouts can branch freely.
//!
//! 3. **Configuration Over Convention**: Every rule constant lives in
//!    validated `JaipurParameters`; nothing is global.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, errors
//! - `components`: Bounded counters and visibility-aware decks
//! - `rules`: `ForwardModel` trait and the `GameRunner` driver
//! - `events`: Observer event stream
//! - `games`: The Jaipur rules

pub mod components;
pub mod core;
pub mod events;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{ConfigError, EngineError, GameRng, GameRngState, PlayerId, PlayerMap};

pub use crate::components::{Counter, Deck, VisibilityMode};

pub use crate::rules::{ForwardModel, GameResult, GameRunner, PlayerResult, TurnStatus};

pub use crate::events::{EventKind, EventListener, EventLog, GameEvent, GameSummary, RoundSummary};

pub use crate::games::jaipur::{
    GoodCounts, GoodType, JaipurAction, JaipurForwardModel, JaipurGameState, JaipurParameters,
};
