//! Serial driver that feeds events to a dispatcher.

use crate::core::{Event, State, StateHistory, StateTransition};
use crate::dispatch::dispatcher::Dispatcher;
use crate::dispatch::error::TransitionError;
use chrono::Utc;

/// A single machine instance: the latest state plus the path that led to it.
///
/// The dispatcher stays stateless; `Machine` is the caller that holds the
/// current state and applies events one after another.
///
/// History is unbounded by default. Long-running machines should cap it with
/// [`with_history_limit`](Self::with_history_limit) or turn it off with
/// [`without_history`](Self::without_history).
pub struct Machine<'d, S: State, E: Event> {
    dispatcher: &'d Dispatcher<S, E>,
    current: S,
    history: StateHistory<S, E>,
    history_limit: Option<usize>,
}

impl<'d, S: State, E: Event> Machine<'d, S, E> {
    /// Create a machine in the initial state
    pub fn new(dispatcher: &'d Dispatcher<S, E>, initial: S) -> Self {
        Self {
            dispatcher,
            current: initial,
            history: StateHistory::new(),
            history_limit: None,
        }
    }

    /// Keep only the newest `limit` transitions.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history.truncate_oldest(limit);
        self.history_limit = Some(limit);
        self
    }

    /// Record nothing.
    pub fn without_history(self) -> Self {
        self.with_history_limit(0)
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<S, E> {
        &self.history
    }

    /// Check if the current state accepts this event (pure)
    pub fn accepts(&self, event: &E) -> bool {
        self.dispatcher.can_handle(&self.current, event)
    }

    /// Apply one event.
    /// On error the current state and history are left untouched.
    pub fn fire(&mut self, event: &E) -> Result<&S, TransitionError> {
        self.step(event)?;
        Ok(&self.current)
    }

    /// Apply events in order, stopping at the first error.
    pub fn run<'e, I>(&mut self, events: I) -> Result<&S, TransitionError>
    where
        I: IntoIterator<Item = &'e E>,
        E: 'e,
    {
        for event in events {
            self.step(event)?;
        }
        Ok(&self.current)
    }

    /// Consume the machine, returning the latest state.
    pub fn into_state(self) -> S {
        self.current
    }

    fn step(&mut self, event: &E) -> Result<(), TransitionError> {
        let next = self.dispatcher.transition(&self.current, event)?;
        let from = std::mem::replace(&mut self.current, next);
        if self.history_limit == Some(0) {
            return Ok(());
        }
        self.history.push(
            StateTransition {
                from,
                to: self.current.clone(),
                event: event.clone(),
                timestamp: Utc::now(),
            },
            self.history_limit,
        );
        Ok(())
    }
}
