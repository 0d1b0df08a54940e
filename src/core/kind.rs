//! Discriminants for state and event variants.
//!
//! A kind identifies *which* variant a value is, independent of its payload.
//! Kinds are the keys of a transition table, so they must be cheap to copy,
//! hashable, and drawn from a closed set.

use std::fmt::Debug;
use std::hash::Hash;

/// A member of a finite, closed set of discriminants.
///
/// Kinds are normally generated with [`kind_enum!`](crate::kind_enum), which
/// assigns each variant a small non-negative integer id.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Kind;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Phase {
///     Draft,
///     Published,
/// }
///
/// impl Kind for Phase {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Draft => "Draft",
///             Self::Published => "Published",
///         }
///     }
///
///     fn id(&self) -> u8 {
///         *self as u8
///     }
/// }
///
/// assert_eq!(Phase::Published.name(), "Published");
/// assert_eq!(Phase::Published.id(), 1);
/// ```
pub trait Kind: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Human-readable name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Small non-negative integer identifying the kind.
    fn id(&self) -> u8;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestKind {
        Low = 3,
        High = 7,
    }

    impl Kind for TestKind {
        fn name(&self) -> &'static str {
            match self {
                Self::Low => "Low",
                Self::High => "High",
            }
        }

        fn id(&self) -> u8 {
            *self as u8
        }
    }

    #[test]
    fn id_reflects_discriminant() {
        assert_eq!(TestKind::Low.id(), 3);
        assert_eq!(TestKind::High.id(), 7);
    }

    #[test]
    fn kinds_are_usable_as_keys() {
        let set: HashSet<TestKind> = [TestKind::Low, TestKind::High, TestKind::Low]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }
}
