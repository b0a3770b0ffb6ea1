//! Game event types.
//!
//! The forward model returns these from every `apply` call. Observers
//! (metrics, logging, replay recorders) consume them; the engine itself never
//! reads them back.
//!
//! Each event carries enough of a snapshot to compute round- and game-level
//! statistics without holding on to the state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayerId, PlayerMap};
use crate::rules::{PlayerResult, TurnStatus};

/// Discriminant of a [`GameEvent`], for filtering and counting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    ActionApplied,
    RoundEnded,
    GameEnded,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventKind::ActionApplied => "ActionApplied",
            EventKind::RoundEnded => "RoundEnded",
            EventKind::GameEnded => "GameEnded",
        };
        f.write_str(name)
    }
}

/// Scores and standings at the moment a round ended, after the camel bonus.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// 1-based round number.
    pub round: u32,
    /// Player who opened the round.
    pub first_player: PlayerId,
    pub scores: PlayerMap<i32>,
    pub herds: PlayerMap<i32>,
    /// Strict herd-majority holder, if any.
    pub camel_bonus: Option<PlayerId>,
    /// Players ranked first this round.
    pub round_winners: SmallVec<[PlayerId; 2]>,
    /// Rounds won so far, including this one.
    pub rounds_won: PlayerMap<u32>,
}

/// Final outcome of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub rounds_played: u32,
    pub winners: SmallVec<[PlayerId; 2]>,
    pub results: PlayerMap<PlayerResult>,
    pub scores: PlayerMap<i32>,
}

/// Something that happened during `apply`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent<A> {
    /// An action was executed.
    ActionApplied {
        round: u32,
        turn: u32,
        player: PlayerId,
        action: A,
        status: TurnStatus,
    },
    /// A round finished and was scored.
    RoundEnded(RoundSummary),
    /// The game finished. Always preceded by the final `RoundEnded`.
    GameEnded(GameSummary),
}

impl<A> GameEvent<A> {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::ActionApplied { .. } => EventKind::ActionApplied,
            GameEvent::RoundEnded(_) => EventKind::RoundEnded,
            GameEvent::GameEnded(_) => EventKind::GameEnded,
        }
    }

    /// The acting player for `ActionApplied`, `None` otherwise.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::ActionApplied { player, .. } => Some(*player),
            _ => None,
        }
    }
}
