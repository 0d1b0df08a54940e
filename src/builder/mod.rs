//! Builder API for ergonomic transition table construction.
//!
//! This module provides fluent builders and macros for declaring kinds,
//! transitions, and tables with minimal boilerplate.

pub mod error;
pub mod macros;
pub mod table;
pub mod transition;

pub use error::{BuildError, BuildErrors};
pub use table::TableBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Event, State};
use crate::dispatch::{Handler, HandlerError, Transition};
use std::sync::Arc;

/// Create an infallible transition for one (state-kind, event-kind) pair.
///
/// # Example
///
/// ```
/// use switchyard::builder::handler;
/// use switchyard::core::{Event, State};
/// use switchyard::dispatch::Transition;
/// use switchyard::kind_enum;
/// use serde::{Deserialize, Serialize};
///
/// kind_enum! {
///     enum PageKind { Draft, Live }
/// }
///
/// kind_enum! {
///     enum ReviewKind { Approve }
/// }
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Page { Draft, Live }
///
/// impl State for Page {
///     type Kind = PageKind;
///     fn kind(&self) -> PageKind {
///         match self {
///             Self::Draft => PageKind::Draft,
///             Self::Live => PageKind::Live,
///         }
///     }
/// }
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Approve;
///
/// impl Event for Approve {
///     type Kind = ReviewKind;
///     fn kind(&self) -> ReviewKind {
///         ReviewKind::Approve
///     }
/// }
///
/// let publish: Transition<Page, Approve> =
///     handler(PageKind::Draft, ReviewKind::Approve, |_, _| Page::Live);
/// assert!(publish.matches(PageKind::Draft, ReviewKind::Approve));
/// ```
pub fn handler<S, E, F>(from: S::Kind, on: E::Kind, f: F) -> Transition<S, E>
where
    S: State + 'static,
    E: Event + 'static,
    F: Fn(&S, &E) -> S + Send + Sync + 'static,
{
    let handler: Handler<S, E> = Arc::new(move |state: &S, event: &E| -> Result<S, HandlerError> {
        Ok(f(state, event))
    });
    Transition::new(from, on, handler)
}
