//! Jaipur: a 2-player trading and set-collection card game.
//!
//! Players take goods from a shared market, trade multisets of cards with
//! it, and sell sets from their hand for value-decreasing good tokens (plus
//! a bonus token for selling three or more at once). A round ends when the
//! market can no longer be refilled or when enough token stacks are sold
//! out; the largest camel herd earns a bonus, the best score wins the round,
//! and the first player to win the configured number of rounds wins the
//! game.
//!
//! ## Example
//!
//! ```
//! use rust_jaipur::games::jaipur::{JaipurForwardModel, JaipurParameters};
//! use rust_jaipur::rules::ForwardModel;
//!
//! let model = JaipurForwardModel::new(JaipurParameters::with_seed(1));
//! let state = model.setup();
//!
//! let mut branch = state.clone();
//! let action = model.legal_actions(&branch)[0].clone();
//! model.apply(&mut branch, &action).unwrap();
//!
//! assert_ne!(branch, state);
//! ```

mod actions;
mod forward_model;
mod goods;
mod legal;
mod params;
mod state;

pub use actions::{JaipurAction, PeekOrder};
pub use forward_model::JaipurForwardModel;
pub use goods::{GoodCounts, GoodMap, GoodType};
pub use legal::{legal_actions, sub_multisets};
pub use params::{
    FirstPlayerRule, JaipurParameters, JaipurParametersBuilder, RoundEndTrigger, MAX_PEEK,
};
pub use state::{JaipurGameState, JaipurPhase, PendingPeek, PlayerArea};
