//! Read-only event stream for observers.
//!
//! Every `ForwardModel::apply` call returns the events it produced:
//! - `ActionApplied` for the executed action
//! - `RoundEnded` when the round was scored
//! - `GameEnded` when a player reached the win condition
//!
//! Listeners are attached to a [`crate::rules::GameRunner`]; the engine has
//! no dependency on them.

pub mod event;
pub mod listener;

pub use event::{EventKind, GameEvent, GameSummary, RoundSummary};
pub use listener::{EventListener, EventLog};
