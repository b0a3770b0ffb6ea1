//! Drives a forward model and fans its events out to listeners.
//!
//! The runner is the seam between the deterministic core and its observers:
//! `apply` returns events, the runner hands each one to every listener. Agents
//! choose actions through a policy closure, so the runner contains no
//! decision logic of its own.

use tracing::{debug, warn};

use super::engine::{ForwardModel, GameResult};
use crate::core::EngineError;
use crate::events::EventListener;

/// Owns a model, its live state and the attached listeners.
pub struct GameRunner<M: ForwardModel> {
    model: M,
    state: M::State,
    listeners: Vec<Box<dyn EventListener<M::Action>>>,
    steps: u64,
}

impl<M: ForwardModel> GameRunner<M> {
    /// Set up a fresh game.
    pub fn new(model: M) -> Self {
        let state = model.setup();
        Self {
            model,
            state,
            listeners: Vec::new(),
            steps: 0,
        }
    }

    /// Attach a listener (builder pattern).
    #[must_use]
    pub fn with_listener(mut self, listener: impl EventListener<M::Action> + 'static) -> Self {
        self.listeners.push(Box::new(listener));
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn state(&self) -> &M::State {
        &self.state
    }

    /// Actions applied so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn legal_actions(&self) -> Vec<M::Action> {
        self.model.legal_actions(&self.state)
    }

    /// Apply one action and notify every listener of the resulting events.
    pub fn step(&mut self, action: &M::Action) -> Result<(), EngineError> {
        let events = self.model.apply(&mut self.state, action).map_err(|err| {
            warn!(?action, %err, "action rejected");
            err
        })?;
        self.steps += 1;
        for event in &events {
            for listener in &mut self.listeners {
                listener.on_event(event);
            }
        }
        Ok(())
    }

    /// Play until the game ends or `max_steps` actions were applied.
    ///
    /// `policy` receives the state and the legal actions and returns the
    /// index of the chosen action. Returns the result if the game ended.
    pub fn run<P>(
        &mut self,
        mut policy: P,
        max_steps: u64,
    ) -> Result<Option<GameResult>, EngineError>
    where
        P: FnMut(&M::State, &[M::Action]) -> usize,
    {
        while !self.model.is_terminal(&self.state) && self.steps < max_steps {
            let actions = self.legal_actions();
            let choice = policy(&self.state, &actions);
            let action = actions.get(choice).cloned().ok_or_else(|| {
                EngineError::illegal(
                    format!("choice #{}", choice),
                    format!("only {} legal actions", actions.len()),
                )
            })?;
            self.step(&action)?;
        }
        debug!(steps = self.steps, terminal = self.model.is_terminal(&self.state), "run finished");
        Ok(self.model.result(&self.state))
    }

    /// Consume the runner, returning the final state.
    pub fn into_state(self) -> M::State {
        self.state
    }
}
