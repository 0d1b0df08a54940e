//! Transition table entries.

use crate::core::{Event, Kind, State};
use crate::dispatch::error::HandlerError;
use std::fmt;
use std::sync::Arc;

/// Type alias for transition handler functions.
/// A handler computes the next state from the current state and the event.
pub type Handler<S, E> = Arc<dyn Fn(&S, &E) -> Result<S, HandlerError> + Send + Sync>;

/// A handler registered for one (state-kind, event-kind) pair.
///
/// `targets` optionally lists the state-kinds the handler may produce. When
/// non-empty, the dispatcher rejects any other result.
pub struct Transition<S: State, E: Event> {
    pub from: S::Kind,
    pub on: E::Kind,
    pub targets: Vec<S::Kind>,
    pub handler: Handler<S, E>,
}

impl<S: State, E: Event> Transition<S, E> {
    /// Create an undeclared-target transition from a handler.
    pub fn new(from: S::Kind, on: E::Kind, handler: Handler<S, E>) -> Self {
        Self {
            from,
            on,
            targets: Vec::new(),
            handler,
        }
    }

    /// Check if this transition is keyed by the given pair (pure)
    pub fn matches(&self, state: S::Kind, event: E::Kind) -> bool {
        self.from == state && self.on == event
    }

    /// Check if the handler may produce this state-kind (pure)
    pub fn allows(&self, produced: S::Kind) -> bool {
        self.targets.is_empty() || self.targets.contains(&produced)
    }
}

impl<S: State, E: Event> Clone for Transition<S, E> {
    fn clone(&self) -> Self {
        Self {
            from: self.from,
            on: self.on,
            targets: self.targets.clone(),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<S: State, E: Event> fmt::Debug for Transition<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from.name())
            .field("on", &self.on.name())
            .field(
                "targets",
                &self.targets.iter().map(|k| k.name()).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}
