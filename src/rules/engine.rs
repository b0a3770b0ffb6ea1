//! Forward model trait for game implementations.
//!
//! A forward model owns the rules of one game:
//! - Building the initial state
//! - What actions are legal
//! - How actions modify state, and what happens after
//! - Win/loss conditions
//!
//! Search code is written against this trait and never inspects
//! game-specific state directly.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{EngineError, PlayerId};
use crate::events::GameEvent;

/// Whether an executed action finished the acting player's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnStatus {
    /// Turn bookkeeping (round end checks, next player) runs.
    Complete,
    /// The action started a chain; a follow-up action is required before
    /// the turn can end.
    InProgress,
}

/// Per-player outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerResult {
    #[default]
    Undecided,
    Win,
    Lose,
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players reached the win condition on the same round end.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }

    fn from_winners(winners: &[PlayerId]) -> Option<Self> {
        match winners {
            [] => None,
            [single] => Some(GameResult::Winner(*single)),
            many => Some(GameResult::Winners(many.to_vec())),
        }
    }
}

/// Events produced by a single `apply` call.
pub type StepEvents<A> = SmallVec<[GameEvent<A>; 3]>;

/// Forward model trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: complete and duplicate-free; never empty while
///   `is_terminal` is false
/// - `apply`: deterministic, mutates the state in place and runs the
///   post-action lifecycle unless the action left a chain in progress
/// - States must deep-copy on `Clone` so branches never alias
pub trait ForwardModel {
    type State: Clone;
    type Action: Clone + std::fmt::Debug + PartialEq;

    /// Build the initial state from the model's parameters.
    fn setup(&self) -> Self::State;

    /// Player expected to act next.
    fn current_player(&self, state: &Self::State) -> PlayerId;

    /// Every legal action for the current player, in a stable order.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Apply an action, returning the events it produced.
    fn apply(
        &self,
        state: &mut Self::State,
        action: &Self::Action,
    ) -> Result<StepEvents<Self::Action>, EngineError>;

    /// Whether the game is over.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Players marked as winners. Empty while the game continues.
    fn winners(&self, state: &Self::State) -> SmallVec<[PlayerId; 2]>;

    // === Convenience Methods ===

    /// Returns `Some(result)` once the game has ended, `None` otherwise.
    fn result(&self, state: &Self::State) -> Option<GameResult> {
        if !self.is_terminal(state) {
            return None;
        }
        GameResult::from_winners(&self.winners(state))
    }
}
