//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Event, State};
use crate::dispatch::{Handler, HandlerError, Transition};
use std::sync::Arc;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: State, E: Event> {
    from: Option<S::Kind>,
    on: Option<E::Kind>,
    targets: Vec<S::Kind>,
    handler: Option<Handler<S, E>>,
}

impl<S: State + 'static, E: Event + 'static> TransitionBuilder<S, E> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            on: None,
            targets: Vec::new(),
            handler: None,
        }
    }

    /// Set the source state-kind (required).
    pub fn from(mut self, kind: S::Kind) -> Self {
        self.from = Some(kind);
        self
    }

    /// Set the triggering event-kind (required).
    pub fn on(mut self, kind: E::Kind) -> Self {
        self.on = Some(kind);
        self
    }

    /// Declare a state-kind the handler may produce (optional, repeatable).
    /// Once any target is declared, other results are rejected at dispatch.
    pub fn to(mut self, kind: S::Kind) -> Self {
        if !self.targets.contains(&kind) {
            self.targets.push(kind);
        }
        self
    }

    /// Set an infallible handler.
    pub fn handle<F>(mut self, f: F) -> Self
    where
        F: Fn(&S, &E) -> S + Send + Sync + 'static,
    {
        let handler: Handler<S, E> =
            Arc::new(move |state: &S, event: &E| -> Result<S, HandlerError> {
                Ok(f(state, event))
            });
        self.handler = Some(handler);
        self
    }

    /// Set a handler that may fail. Its error reaches the caller unchanged.
    pub fn try_handle<F, X>(mut self, f: F) -> Self
    where
        F: Fn(&S, &E) -> Result<S, X> + Send + Sync + 'static,
        X: Into<HandlerError> + 'static,
    {
        let handler: Handler<S, E> =
            Arc::new(move |state: &S, event: &E| -> Result<S, HandlerError> {
                f(state, event).map_err(Into::into)
            });
        self.handler = Some(handler);
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, E>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromKind)?;
        let on = self.on.ok_or(BuildError::MissingEventKind)?;
        let handler = self.handler.ok_or(BuildError::MissingHandler)?;

        Ok(Transition {
            from,
            on,
            targets: self.targets,
            handler,
        })
    }
}

impl<S: State + 'static, E: Event + 'static> Default for TransitionBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
