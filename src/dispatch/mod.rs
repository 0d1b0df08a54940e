//! Runtime dispatch of (state, event) pairs.
//!
//! # Key Concepts
//!
//! - **Transition table**: state-kind -> event-kind -> handler, one handler per pair
//! - **Dispatcher**: stateless lookup and invocation over an immutable table
//! - **Machine**: a caller that holds the latest state and applies events serially
//!
//! A pair missing from the table is a construction defect in the calling
//! program. It surfaces as [`TransitionError::Unhandled`]; there is no
//! fallback transition.

mod dispatcher;
mod error;
mod machine;
mod table;
mod transition;

pub use dispatcher::Dispatcher;
pub use error::{HandlerError, TransitionError};
pub use machine::Machine;
pub use table::TransitionTable;
pub use transition::{Handler, Transition};
