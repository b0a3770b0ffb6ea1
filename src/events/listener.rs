//! Observer side of the event stream.

use rustc_hash::FxHashMap;

use super::event::{EventKind, GameEvent, GameSummary, RoundSummary};

/// Receives events as a [`crate::rules::GameRunner`] produces them.
pub trait EventListener<A> {
    fn on_event(&mut self, event: &GameEvent<A>);
}

impl<A, F> EventListener<A> for F
where
    F: FnMut(&GameEvent<A>),
{
    fn on_event(&mut self, event: &GameEvent<A>) {
        self(event)
    }
}

/// Listener that records every event it sees.
#[derive(Clone, Debug)]
pub struct EventLog<A> {
    events: Vec<GameEvent<A>>,
    counts: FxHashMap<EventKind, usize>,
}

impl<A> Default for EventLog<A> {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            counts: FxHashMap::default(),
        }
    }
}

impl<A> EventLog<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event.
    pub fn push(&mut self, event: GameEvent<A>) {
        *self.counts.entry(event.kind()).or_default() += 1;
        self.events.push(event);
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent<A>] {
        &self.events
    }

    /// How many events of `kind` were recorded.
    #[must_use]
    pub fn count(&self, kind: EventKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Summaries of every finished round, in order.
    pub fn rounds(&self) -> impl Iterator<Item = &RoundSummary> {
        self.events.iter().filter_map(|e| match e {
            GameEvent::RoundEnded(summary) => Some(summary),
            _ => None,
        })
    }

    /// The game summary, once the game has ended.
    #[must_use]
    pub fn game(&self) -> Option<&GameSummary> {
        self.events.iter().rev().find_map(|e| match e {
            GameEvent::GameEnded(summary) => Some(summary),
            _ => None,
        })
    }
}

impl<A: Clone> EventListener<A> for EventLog<A> {
    fn on_event(&mut self, event: &GameEvent<A>) {
        self.push(event.clone());
    }
}
