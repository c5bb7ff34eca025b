//! Build errors for statechart and transition builders.

use crate::semantics::ValidationError;
use thiserror::Error;

/// Errors that can occur when building statecharts and transitions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Transition event not specified. Call .on(event)")]
    MissingEvent,

    #[error("Transition source states not specified. Call .from(states)")]
    MissingFromState,

    #[error("Transition target states not specified. Call .to(states)")]
    MissingToState,

    #[error("No states defined. Add at least one top-level state")]
    NoStates,

    #[error("Built statechart failed validation: {0}")]
    Validation(#[from] ValidationError),
}
