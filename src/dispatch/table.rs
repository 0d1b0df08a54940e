//! Transition table: state-kind -> event-kind -> handler.

use crate::builder::BuildError;
use crate::core::{Event, Kind, State};
use crate::dispatch::transition::Transition;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Nested mapping from state-kind to event-kind to transition.
///
/// Holds at most one transition per (state-kind, event-kind) pair. There is
/// no removal API; once handed to a [`Dispatcher`](crate::dispatch::Dispatcher)
/// the table is read-only.
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State, E: Event> {
    transitions: HashMap<S::Kind, HashMap<E::Kind, Transition<S, E>>>,
}

impl<S: State, E: Event> TransitionTable<S, E> {
    pub fn new() -> Self {
        Self {
            transitions: HashMap::new(),
        }
    }

    /// Register a transition.
    ///
    /// Fails with [`BuildError::DuplicateHandler`] if the pair is already
    /// taken; the existing handler is kept.
    pub fn insert(&mut self, transition: Transition<S, E>) -> Result<(), BuildError> {
        let events = self.transitions.entry(transition.from).or_default();
        match events.entry(transition.on) {
            Entry::Occupied(_) => Err(BuildError::DuplicateHandler {
                state: transition.from.name(),
                event: transition.on.name(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(transition);
                Ok(())
            }
        }
    }

    /// Look up the transition for a pair.
    pub fn get(&self, state: S::Kind, event: E::Kind) -> Option<&Transition<S, E>> {
        self.transitions.get(&state)?.get(&event)
    }

    pub fn contains(&self, state: S::Kind, event: E::Kind) -> bool {
        self.get(state, event).is_some()
    }

    /// Event-kinds with a handler in the given state, ordered by id.
    pub fn events_for(&self, state: S::Kind) -> Vec<E::Kind> {
        let mut events: Vec<E::Kind> = self
            .transitions
            .get(&state)
            .map(|events| events.keys().copied().collect())
            .unwrap_or_default();
        events.sort_by_key(|kind| kind.id());
        events
    }

    /// State-kinds with at least one handler, ordered by id.
    pub fn state_kinds(&self) -> Vec<S::Kind> {
        let mut states: Vec<S::Kind> = self
            .transitions
            .iter()
            .filter(|(_, events)| !events.is_empty())
            .map(|(state, _)| *state)
            .collect();
        states.sort_by_key(|kind| kind.id());
        states
    }

    /// Total number of registered transitions.
    pub fn len(&self) -> usize {
        self.transitions.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: State, E: Event> Default for TransitionTable<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
