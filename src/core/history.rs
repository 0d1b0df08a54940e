//! State transition history tracking.
//!
//! Provides immutable tracking of applied transitions over time,
//! following functional programming principles.

use super::state::{Event, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
///
/// Transitions are immutable values: the state before, the event that
/// fired, the state produced, and when it happened.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, E: Event> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The event that triggered the transition
    pub event: E,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// History is immutable - the `record` method returns a new history
/// with the transition added.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, E: Event> {
    transitions: Vec<StateTransition<S, E>>,
}

impl<S: State, E: Event> Default for StateHistory<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> StateHistory<S, E> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the transition added.
    pub fn record(&self, transition: StateTransition<S, E>) -> Self {
        let mut history = self.clone();
        history.push(transition, None);
        history
    }

    /// Append in place, dropping the oldest entries beyond `limit`.
    pub(crate) fn push(&mut self, transition: StateTransition<S, E>, limit: Option<usize>) {
        self.transitions.push(transition);
        if let Some(limit) = limit {
            self.truncate_oldest(limit);
        }
    }

    /// Keep only the newest `limit` transitions.
    pub(crate) fn truncate_oldest(&mut self, limit: usize) {
        if self.transitions.len() > limit {
            let excess = self.transitions.len() - limit;
            self.transitions.drain(..excess);
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: initial state, then
    /// the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Events in the order they were applied.
    pub fn events(&self) -> Vec<&E> {
        self.transitions.iter().map(|t| &t.event).collect()
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions. A wall clock that stepped
    /// backwards between the two entries yields zero.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            Some(duration.to_std().unwrap_or(Duration::ZERO))
        } else {
            None
        }
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S, E>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::kind_enum! {
        enum StepKind {
            Initial,
            Processing,
            Complete,
        }
    }

    crate::kind_enum! {
        enum TickKind {
            Tick,
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Step {
        Initial,
        Processing,
        Complete,
    }

    impl State for Step {
        type Kind = StepKind;

        fn kind(&self) -> StepKind {
            match self {
                Self::Initial => StepKind::Initial,
                Self::Processing => StepKind::Processing,
                Self::Complete => StepKind::Complete,
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Tick;

    impl Event for Tick {
        type Kind = TickKind;

        fn kind(&self) -> TickKind {
            TickKind::Tick
        }
    }

    fn step(from: Step, to: Step) -> StateTransition<Step, Tick> {
        StateTransition {
            from,
            to,
            event: Tick,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Step, Tick> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(step(Step::Initial, Step::Processing));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(step(Step::Initial, Step::Processing))
            .record(step(Step::Processing, Step::Complete));

        let path = history.get_path();
        assert_eq!(path, vec![&Step::Initial, &Step::Processing, &Step::Complete]);
        assert_eq!(history.events(), vec![&Tick, &Tick]);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let history = StateHistory::new().record(step(Step::Initial, Step::Processing));

        std::thread::sleep(std::time::Duration::from_millis(10));

        let history = history.record(step(Step::Processing, Step::Complete));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new().record(step(Step::Initial, Step::Processing));
        assert_eq!(history.duration(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn backwards_clock_clamps_duration_to_zero() {
        let later = step(Step::Initial, Step::Processing);
        let mut earlier = step(Step::Processing, Step::Complete);
        earlier.timestamp = later.timestamp - chrono::Duration::seconds(5);

        let history = StateHistory::new().record(later).record(earlier);
        assert_eq!(history.duration(), Some(Duration::ZERO));
    }

    #[test]
    fn push_drops_oldest_beyond_limit() {
        let mut history = StateHistory::new();
        history.push(step(Step::Initial, Step::Processing), Some(2));
        history.push(step(Step::Processing, Step::Complete), Some(2));
        history.push(step(Step::Complete, Step::Initial), Some(2));

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.get_path(),
            vec![&Step::Processing, &Step::Complete, &Step::Initial]
        );
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(step(Step::Initial, Step::Processing));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<Step, Tick> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.transitions()[0].to, Step::Processing);
    }
}
