//! State and Event traits for dispatchable values.
//!
//! Both are tagged records: a discriminant ([`Kind`]) plus variant-specific
//! payload. The dispatcher only ever looks at the tag.

use super::kind::Kind;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// A state value is an immutable snapshot. Transitions produce new values
/// and never modify the one they were given.
///
/// # Required Traits
///
/// - `Clone`: States are recorded in history alongside the live state
/// - `PartialEq`: States must be comparable in tests and history
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States are plain data
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
/// use switchyard::kind_enum;
/// use serde::{Deserialize, Serialize};
///
/// kind_enum! {
///     pub enum DoorKind {
///         Open,
///         Closed,
///     }
/// }
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed { locked: bool },
/// }
///
/// impl State for Door {
///     type Kind = DoorKind;
///
///     fn kind(&self) -> DoorKind {
///         match self {
///             Self::Open => DoorKind::Open,
///             Self::Closed { .. } => DoorKind::Closed,
///         }
///     }
/// }
///
/// assert_eq!(Door::Closed { locked: true }.name(), "Closed");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Discriminant type for this state's variants.
    type Kind: Kind;

    /// The variant this value belongs to.
    fn kind(&self) -> Self::Kind;

    /// Get the state's name for display/logging.
    fn name(&self) -> &'static str {
        self.kind().name()
    }
}

/// Trait for events that drive transitions.
///
/// Same shape as [`State`]: a kind plus payload. Events are consumed by
/// reference and never retained by the dispatcher.
pub trait Event:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Discriminant type for this event's variants.
    type Kind: Kind;

    /// The variant this value belongs to.
    fn kind(&self) -> Self::Kind;

    /// Get the event's name for display/logging.
    fn name(&self) -> &'static str {
        self.kind().name()
    }
}
