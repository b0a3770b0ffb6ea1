//! Error types.
//!
//! Two families, kept apart because they surface at different times:
//!
//! - [`ConfigError`]: rejected parameter sets, raised before any state exists.
//! - [`EngineError`]: an action that cannot be applied to the given state.
//!
//! Broken engine invariants (an empty action set on a live state, counters
//! going out of sync) are bugs and panic instead.

use thiserror::Error;

use super::player::PlayerId;

/// Invalid game parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be at least {min}, got {value}")]
    TooSmall {
        field: &'static str,
        min: i64,
        value: i64,
    },

    #[error("{field} ({value}) exceeds {limit_name} ({limit})")]
    ExceedsLimit {
        field: &'static str,
        value: i64,
        limit_name: &'static str,
        limit: i64,
    },

    #[error("deck holds {available} non-market cards but setup needs {required}")]
    DeckTooSmall { available: i64, required: i64 },

    #[error(
        "hand limit {hand_limit} cannot guarantee a legal sale (needs more than {unsellable} cards)"
    )]
    HandLimitTooSmall { hand_limit: i64, unsellable: i64 },
}

/// An action rejected by the forward model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("game is over; no further actions can be applied")]
    GameOver,

    #[error("{actor} acted but it is {current}'s turn")]
    NotPlayersTurn { actor: PlayerId, current: PlayerId },

    #[error("illegal action {action}: {reason}")]
    IllegalAction { action: String, reason: String },

    #[error("an action chain is in progress; expected its follow-up")]
    ActionInProgress,

    #[error("no action chain is in progress")]
    NoActionInProgress,

    #[error("state snapshot failed: {0}")]
    Snapshot(String),
}

impl EngineError {
    /// Shorthand for [`EngineError::IllegalAction`].
    pub fn illegal(action: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        EngineError::IllegalAction {
            action: action.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::ExceedsLimit {
            field: "initial_camels_in_market",
            value: 12,
            limit_name: "camel count",
            limit: 11,
        };
        assert_eq!(
            err.to_string(),
            "initial_camels_in_market (12) exceeds camel count (11)"
        );
    }

    #[test]
    fn test_engine_error_messages() {
        let err = EngineError::NotPlayersTurn {
            actor: PlayerId::new(1),
            current: PlayerId::new(0),
        };
        assert_eq!(err.to_string(), "Player 1 acted but it is Player 0's turn");

        let err = EngineError::illegal("Sell 3 Gold", "hand holds 2");
        assert_eq!(err.to_string(), "illegal action Sell 3 Gold: hand holds 2");
    }
}
