//! Step errors and the external-evaluator error type.

use crate::core::MachineStatus;
use crate::semantics::SemanticsError;
use thiserror::Error;

/// Failure reported by an external guard evaluator or action executor.
///
/// The engine treats the collaborators as opaque; whatever they report
/// is carried verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EvalError {
    pub message: String,
}

impl EvalError {
    pub fn new(message: impl Into<String>) -> Self {
        EvalError {
            message: message.into(),
        }
    }
}

/// Errors surfaced by a single step.
///
/// A transition that fires and an event that matches nothing are both
/// non-error outcomes; these variants cover structural problems and
/// collaborator failures. Guard evaluation errors are never read as
/// "guard rejected": swallowing them would mask nondeterministic
/// transition selection.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StepError {
    /// The machine is not in the `Running` lifecycle state.
    #[error("machine is not running (status is {0:?})")]
    NotRunning(MachineStatus),

    /// The machine has no active states; a caller bug, not retried.
    #[error("machine has an empty configuration")]
    EmptyConfiguration,

    /// The guard evaluator failed on an expression.
    #[error("guard '{expression}' failed to evaluate: {source}")]
    Guard {
        expression: String,
        source: EvalError,
    },

    /// The action executor failed on an action label.
    #[error("action '{action}' failed: {source}")]
    Action { action: String, source: EvalError },

    /// A semantic query failed while deriving the target configuration.
    #[error(transparent)]
    Semantics(#[from] SemanticsError),
}
