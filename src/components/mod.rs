//! Game-agnostic containers: bounded counters and visibility-aware decks.

pub mod counter;
pub mod deck;

pub use counter::Counter;
pub use deck::{Deck, VisibilityMode, VisibilityRow};
