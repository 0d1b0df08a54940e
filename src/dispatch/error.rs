//! Dispatch errors.

use thiserror::Error;

/// Failure raised by a transition handler.
///
/// Passed through [`TransitionError::Handler`] unchanged, so callers can
/// downcast it back to the handler's own error type.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur during a transition
#[derive(Debug, Error)]
pub enum TransitionError {
    /// No handler is registered for this (state-kind, event-kind) pair.
    #[error("No handler for event '{event}' in state '{state}'")]
    Unhandled {
        state: &'static str,
        event: &'static str,
    },

    /// The handler returned a state-kind its transition did not declare.
    #[error("Transition from '{state}' on '{event}' produced undeclared state '{produced}'")]
    UnexpectedTarget {
        state: &'static str,
        event: &'static str,
        produced: &'static str,
    },

    #[error("Transition handler failed: {0}")]
    Handler(#[source] HandlerError),
}

impl TransitionError {
    /// True for the unhandled-transition condition.
    pub fn is_unhandled(&self) -> bool {
        matches!(self, Self::Unhandled { .. })
    }
}
