//! Core value types for dispatchable state machines.
//!
//! This module contains the pure data side of the dispatcher:
//! - Kinds via the `Kind` trait
//! - Tagged states and events via the `State` and `Event` traits
//! - Immutable history tracking
//!
//! Nothing in this module performs a transition; see [`crate::dispatch`].

mod history;
mod kind;
mod state;

pub use history::{StateHistory, StateTransition};
pub use kind::Kind;
pub use state::{Event, State};
