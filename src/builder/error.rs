//! Build errors for transition and table builders.

use std::fmt;
use thiserror::Error;

/// Errors that can occur when building transitions and tables.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("Transition source kind not specified. Call .from(kind)")]
    MissingFromKind,

    #[error("Transition event kind not specified. Call .on(kind)")]
    MissingEventKind,

    #[error("Transition handler not specified. Call .handle(f) or .try_handle(f)")]
    MissingHandler,

    #[error("Duplicate handler for event '{event}' in state '{state}'")]
    DuplicateHandler {
        state: &'static str,
        event: &'static str,
    },
}

/// Every problem found while building a table, in registration order.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildErrors(pub Vec<BuildError>);

impl BuildErrors {
    pub fn errors(&self) -> &[BuildError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for BuildErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error(s) building transition table", self.0.len())?;
        for error in &self.0 {
            write!(f, "; {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for BuildErrors {}

impl From<BuildError> for BuildErrors {
    fn from(error: BuildError) -> Self {
        Self(vec![error])
    }
}
