//! Switchyard: a table-driven state machine dispatcher
//!
//! A machine is described by a transition table keyed by (state-kind,
//! event-kind). Dispatching looks up the single handler for the pair and
//! returns the state it produces. The dispatcher holds no state of its own;
//! callers keep the latest state and feed events in order.
//!
//! # Core Concepts
//!
//! - **Kinds**: closed discriminant sets via the `Kind` trait and `kind_enum!`
//! - **States and Events**: tagged values exposing their kind
//! - **Transition table**: at most one handler per pair, fixed once built
//! - **Dispatcher**: `transition(state, event)` or `TransitionError::Unhandled`
//!
//! # Example
//!
//! ```rust
//! use switchyard::builder::{handler, TableBuilder};
//! use switchyard::core::{Event, State};
//! use switchyard::dispatch::{Dispatcher, TransitionError};
//! use switchyard::kind_enum;
//! use serde::{Deserialize, Serialize};
//!
//! kind_enum! {
//!     pub enum TicketKind {
//!         Open = 0,
//!         Closed = 1,
//!     }
//! }
//!
//! kind_enum! {
//!     pub enum TicketEventKind {
//!         Resolve = 0,
//!         Reopen = 1,
//!     }
//! }
//!
//! #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
//! enum Ticket {
//!     Open { assignee: String },
//!     Closed { resolution: String },
//! }
//!
//! impl State for Ticket {
//!     type Kind = TicketKind;
//!
//!     fn kind(&self) -> TicketKind {
//!         match self {
//!             Self::Open { .. } => TicketKind::Open,
//!             Self::Closed { .. } => TicketKind::Closed,
//!         }
//!     }
//! }
//!
//! #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
//! enum TicketEvent {
//!     Resolve { note: String },
//!     Reopen,
//! }
//!
//! impl Event for TicketEvent {
//!     type Kind = TicketEventKind;
//!
//!     fn kind(&self) -> TicketEventKind {
//!         match self {
//!             Self::Resolve { .. } => TicketEventKind::Resolve,
//!             Self::Reopen => TicketEventKind::Reopen,
//!         }
//!     }
//! }
//!
//! let table = TableBuilder::<Ticket, TicketEvent>::new()
//!     .add_transition(handler(
//!         TicketKind::Open,
//!         TicketEventKind::Resolve,
//!         |_: &Ticket, event: &TicketEvent| match event {
//!             TicketEvent::Resolve { note } => Ticket::Closed { resolution: note.clone() },
//!             TicketEvent::Reopen => Ticket::Open { assignee: String::new() },
//!         },
//!     ))
//!     .build()
//!     .unwrap();
//!
//! let dispatcher = Dispatcher::new(table);
//!
//! let open = Ticket::Open { assignee: "sam".to_string() };
//! let closed = dispatcher
//!     .transition(&open, &TicketEvent::Resolve { note: "fixed".to_string() })
//!     .unwrap();
//! assert_eq!(closed, Ticket::Closed { resolution: "fixed".to_string() });
//!
//! let err = dispatcher.transition(&closed, &TicketEvent::Reopen).unwrap_err();
//! assert!(matches!(err, TransitionError::Unhandled { .. }));
//! ```

pub mod builder;
pub mod core;
pub mod dispatch;

// Re-export commonly used types
pub use builder::{handler, BuildError, BuildErrors, TableBuilder, TransitionBuilder};
pub use crate::core::{Event, Kind, State, StateHistory, StateTransition};
pub use dispatch::{Dispatcher, Machine, Transition, TransitionError, TransitionTable};
