//! Errors for semantic queries over a statechart.

use crate::core::StateLabel;
use thiserror::Error;

/// Errors returned by relation queries and the configuration algebra.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SemanticsError {
    /// A referenced label does not exist in the state tree. Never
    /// silently defaulted; always propagated to the caller.
    #[error("state '{0}' not found")]
    NotFound(StateLabel),

    /// An OR-state has no child flagged as initial. Cannot occur after
    /// validation, but queries check defensively since callers may
    /// bypass it.
    #[error("no default state found for '{0}'")]
    NoDefault(StateLabel),

    /// A state set failed the consistency algebra; the two labels name
    /// an offending pair. Never auto-repaired.
    #[error("inconsistent state set: '{0}' and '{1}' cannot coexist")]
    Inconsistent(StateLabel, StateLabel),
}
