//! Dispatcher that routes (state, event) pairs to their handler.

use crate::core::{Event, Kind, State};
use crate::dispatch::error::TransitionError;
use crate::dispatch::table::TransitionTable;
use tracing::{debug, trace, warn};

/// Stateless dispatcher over an immutable transition table.
///
/// All state lives in the values passed to and returned from
/// [`transition`](Self::transition). The dispatcher only reads its table, so
/// a single instance can be shared across threads.
///
/// # Example
///
/// ```rust
/// use switchyard::builder::{handler, TableBuilder};
/// use switchyard::core::{Event, State};
/// use switchyard::dispatch::Dispatcher;
/// use switchyard::kind_enum;
/// use serde::{Deserialize, Serialize};
///
/// kind_enum! {
///     pub enum SwitchKind { Off, On }
/// }
///
/// kind_enum! {
///     pub enum ToggleKind { Toggle }
/// }
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Switch { Off, On }
///
/// impl State for Switch {
///     type Kind = SwitchKind;
///     fn kind(&self) -> SwitchKind {
///         match self {
///             Self::Off => SwitchKind::Off,
///             Self::On => SwitchKind::On,
///         }
///     }
/// }
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Toggle;
///
/// impl Event for Toggle {
///     type Kind = ToggleKind;
///     fn kind(&self) -> ToggleKind {
///         ToggleKind::Toggle
///     }
/// }
///
/// let table = TableBuilder::<Switch, Toggle>::new()
///     .add_transition(handler(SwitchKind::Off, ToggleKind::Toggle, |_, _| Switch::On))
///     .build()
///     .unwrap();
///
/// let dispatcher = Dispatcher::new(table);
/// assert_eq!(dispatcher.transition(&Switch::Off, &Toggle).unwrap(), Switch::On);
/// assert!(dispatcher.transition(&Switch::On, &Toggle).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Dispatcher<S: State, E: Event> {
    table: TransitionTable<S, E>,
}

impl<S: State, E: Event> Dispatcher<S, E> {
    /// Create a dispatcher that owns the given table.
    pub fn new(table: TransitionTable<S, E>) -> Self {
        Self { table }
    }

    /// Apply `event` to `state`, returning the handler's result.
    ///
    /// Fails with [`TransitionError::Unhandled`] when no handler is registered
    /// for the pair. A failing handler surfaces as
    /// [`TransitionError::Handler`] with its original error. When the
    /// transition declared targets, a result outside them is rejected with
    /// [`TransitionError::UnexpectedTarget`].
    pub fn transition(&self, state: &S, event: &E) -> Result<S, TransitionError> {
        let state_kind = state.kind();
        let event_kind = event.kind();
        trace!(
            state = state_kind.name(),
            event = event_kind.name(),
            "dispatching transition"
        );

        let Some(transition) = self.table.get(state_kind, event_kind) else {
            warn!(
                state = state_kind.name(),
                event = event_kind.name(),
                "unhandled transition"
            );
            return Err(TransitionError::Unhandled {
                state: state_kind.name(),
                event: event_kind.name(),
            });
        };

        let next = (transition.handler)(state, event).map_err(TransitionError::Handler)?;

        let produced = next.kind();
        if !transition.allows(produced) {
            warn!(
                state = state_kind.name(),
                event = event_kind.name(),
                produced = produced.name(),
                "transition produced undeclared state"
            );
            return Err(TransitionError::UnexpectedTarget {
                state: state_kind.name(),
                event: event_kind.name(),
                produced: produced.name(),
            });
        }

        if produced != state_kind {
            debug!(
                from = state_kind.name(),
                to = produced.name(),
                event = event_kind.name(),
                "state changed"
            );
        }

        Ok(next)
    }

    /// Check if a handler exists for this (state, event) pair (pure)
    pub fn can_handle(&self, state: &S, event: &E) -> bool {
        self.table.contains(state.kind(), event.kind())
    }

    /// Event-kinds accepted in the given state-kind (pure)
    pub fn events_for(&self, state: S::Kind) -> Vec<E::Kind> {
        self.table.events_for(state)
    }

    pub fn table(&self) -> &TransitionTable<S, E> {
        &self.table
    }
}

impl<S: State, E: Event> From<TransitionTable<S, E>> for Dispatcher<S, E> {
    fn from(table: TransitionTable<S, E>) -> Self {
        Self::new(table)
    }
}
