//! Builder for constructing transition tables.

use crate::builder::error::{BuildError, BuildErrors};
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, Kind, State};
use crate::dispatch::{Transition, TransitionTable};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing transition tables with a fluent API.
///
/// Registrations are only checked in [`build`](Self::build), which reports
/// every duplicate (state-kind, event-kind) pair at once rather than stopping
/// at the first.
pub struct TableBuilder<S: State + 'static, E: Event + 'static> {
    transitions: Vec<Transition<S, E>>,
}

impl<S: State + 'static, E: Event + 'static> TableBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, E>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S, E>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Check every registration, accumulating ALL duplicate pairs.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        let mut seen: HashSet<(S::Kind, E::Kind)> = HashSet::new();
        let mut checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = Vec::new();

        for transition in &self.transitions {
            let check = if seen.insert((transition.from, transition.on)) {
                Validation::success(())
            } else {
                Validation::fail(BuildError::DuplicateHandler {
                    state: transition.from.name(),
                    event: transition.on.name(),
                })
            };
            checks.push(check);
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the table.
    /// Returns every duplicate registration if any pair is taken twice.
    pub fn build(self) -> Result<TransitionTable<S, E>, BuildErrors> {
        if let Validation::Failure(errors) = self.validate() {
            return Err(BuildErrors(errors.iter().cloned().collect()));
        }

        let mut table = TransitionTable::new();
        for transition in self.transitions {
            table.insert(transition)?;
        }

        Ok(table)
    }
}

impl<S: State + 'static, E: Event + 'static> Default for TableBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::handler;
    use serde::{Deserialize, Serialize};

    crate::kind_enum! {
        enum TestKind {
            Initial,
            Processing,
            Complete,
        }
    }

    crate::kind_enum! {
        enum TestEventKind {
            Advance,
            Reset,
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    impl State for TestState {
        type Kind = TestKind;

        fn kind(&self) -> TestKind {
            match self {
                Self::Initial => TestKind::Initial,
                Self::Processing => TestKind::Processing,
                Self::Complete => TestKind::Complete,
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Advance,
        Reset,
    }

    impl Event for TestEvent {
        type Kind = TestEventKind;

        fn kind(&self) -> TestEventKind {
            match self {
                Self::Advance => TestEventKind::Advance,
                Self::Reset => TestEventKind::Reset,
            }
        }
    }

    fn advance(from: TestKind, to: TestState) -> Transition<TestState, TestEvent> {
        handler(from, TestEventKind::Advance, move |_, _| to.clone())
    }

    #[test]
    fn empty_builder_builds_empty_table() {
        let table = TableBuilder::<TestState, TestEvent>::new().build().unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn fluent_api_builds_table() {
        let table = TableBuilder::new()
            .add_transition(advance(TestKind::Initial, TestState::Processing))
            .add_transition(advance(TestKind::Processing, TestState::Complete))
            .build()
            .unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.contains(TestKind::Initial, TestEventKind::Advance));
        assert!(table.contains(TestKind::Processing, TestEventKind::Advance));
    }

    #[test]
    fn add_multiple_transitions() {
        let table = TableBuilder::new()
            .transitions(vec![
                advance(TestKind::Initial, TestState::Processing),
                advance(TestKind::Processing, TestState::Complete),
                handler(TestKind::Complete, TestEventKind::Reset, |_, _| {
                    TestState::Initial
                }),
            ])
            .build()
            .unwrap();

        assert_eq!(table.len(), 3);
    }

    #[test]
    fn transition_builder_errors_surface_immediately() {
        let result = TableBuilder::<TestState, TestEvent>::new()
            .transition(TransitionBuilder::<TestState, TestEvent>::new().from(TestKind::Initial));

        assert!(matches!(result, Err(BuildError::MissingEventKind)));
    }

    #[test]
    fn build_accumulates_all_duplicates() {
        let result = TableBuilder::new()
            .add_transition(advance(TestKind::Initial, TestState::Processing))
            .add_transition(advance(TestKind::Initial, TestState::Complete))
            .add_transition(advance(TestKind::Processing, TestState::Complete))
            .add_transition(advance(TestKind::Processing, TestState::Initial))
            .build();

        let errors = result.unwrap_err();
        assert_eq!(
            errors.errors(),
            &[
                BuildError::DuplicateHandler {
                    state: "Initial",
                    event: "Advance",
                },
                BuildError::DuplicateHandler {
                    state: "Processing",
                    event: "Advance",
                },
            ]
        );
    }

    #[test]
    fn validate_succeeds_without_duplicates() {
        let builder = TableBuilder::new()
            .add_transition(advance(TestKind::Initial, TestState::Processing))
            .add_transition(handler(TestKind::Initial, TestEventKind::Reset, |_, _| {
                TestState::Initial
            }));

        assert!(builder.validate().is_success());
    }
}
