//! Single-event stepping of machine instances.
//!
//! The stepper applies one named event to one machine: it scans the
//! statechart's transitions in declared order, fires the first one
//! whose event, source, and guard all match, re-derives the
//! configuration through default completion, and executes the
//! transition's actions against the machine context.
//!
//! Guards and actions are external collaborators behind the
//! [`GuardEvaluator`] and [`ActionExecutor`] traits; the engine calls
//! them synchronously and defines no timeout or retry policy for them.

mod error;

pub use error::{EvalError, StepError};

use crate::core::{Context, Machine, MachineStatus, StepRecord};
use chrono::Utc;
use tracing::{debug, trace};

/// External predicate deciding whether a guard expression holds for a
/// machine context. Expressions are opaque to the engine.
pub trait GuardEvaluator {
    fn evaluate(&self, expression: &str, context: &Context) -> Result<bool, EvalError>;
}

/// External executor applying an opaque action label to a machine
/// context, mutating it in place.
pub trait ActionExecutor {
    fn apply(&self, action: &str, context: &mut Context) -> Result<(), EvalError>;
}

impl<F> GuardEvaluator for F
where
    F: Fn(&str, &Context) -> Result<bool, EvalError>,
{
    fn evaluate(&self, expression: &str, context: &Context) -> Result<bool, EvalError> {
        self(expression, context)
    }
}

impl<F> ActionExecutor for F
where
    F: Fn(&str, &mut Context) -> Result<(), EvalError>,
{
    fn apply(&self, action: &str, context: &mut Context) -> Result<(), EvalError> {
        self(action, context)
    }
}

/// Guard evaluator and action executor for charts that declare neither:
/// any guard expression or action label reaching it is an error.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCollaborators;

impl GuardEvaluator for NoCollaborators {
    fn evaluate(&self, expression: &str, _context: &Context) -> Result<bool, EvalError> {
        Err(EvalError::new(format!(
            "no guard evaluator installed for expression '{expression}'"
        )))
    }
}

impl ActionExecutor for NoCollaborators {
    fn apply(&self, action: &str, _context: &mut Context) -> Result<(), EvalError> {
        Err(EvalError::new(format!(
            "no action executor installed for action '{action}'"
        )))
    }
}

/// Applies events to machines through a pair of external collaborators.
///
/// The stepper itself is stateless and reusable across machines; all
/// mutation lands on the machine passed to [`Stepper::step`]. Callers
/// must serialize steps per machine instance.
///
/// # Example
///
/// ```rust
/// use harel::builder::{state, StatechartBuilder, TransitionBuilder};
/// use harel::core::Machine;
/// use harel::step::{NoCollaborators, Stepper};
/// use std::sync::Arc;
///
/// let chart = StatechartBuilder::new()
///     .state(state("Off").initial())
///     .state(state("On"))
///     .transition(
///         TransitionBuilder::new().on("TURN_ON").from(["Off"]).to(["On"]),
///     )
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let mut machine = Machine::new(Arc::new(chart)).unwrap();
/// let stepper = Stepper::new(NoCollaborators, NoCollaborators);
///
/// assert!(stepper.step(&mut machine, "TURN_ON").unwrap());
/// assert_eq!(machine.configuration().primary().unwrap().as_str(), "On");
/// assert!(!stepper.step(&mut machine, "TURN_ON").unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct Stepper<G, A> {
    guards: G,
    actions: A,
}

impl Default for Stepper<NoCollaborators, NoCollaborators> {
    fn default() -> Self {
        Stepper::new(NoCollaborators, NoCollaborators)
    }
}

impl<G: GuardEvaluator, A: ActionExecutor> Stepper<G, A> {
    pub fn new(guards: G, actions: A) -> Self {
        Stepper { guards, actions }
    }

    /// Apply a single event to the machine.
    ///
    /// Returns `Ok(true)` if a transition fired and `Ok(false)` if no
    /// transition matched; both append a [`StepRecord`] to the machine
    /// history. Transition order encodes priority: the first candidate
    /// whose event and source match and whose guard passes wins. A
    /// rejecting guard skips to the next candidate; a guard that fails
    /// to evaluate aborts the step.
    pub fn step(&self, machine: &mut Machine, event: &str) -> Result<bool, StepError> {
        if machine.status() != MachineStatus::Running {
            return Err(StepError::NotRunning(machine.status()));
        }
        let Some(primary) = machine.configuration().primary().cloned() else {
            return Err(StepError::EmptyConfiguration);
        };

        let chart = machine.chart().clone();
        for transition in &chart.definition().transitions {
            if transition.event != event || !transition.from.contains(&primary) {
                continue;
            }
            if let Some(guard) = &transition.guard {
                let passed = self
                    .guards
                    .evaluate(&guard.expression, machine.context())
                    .map_err(|source| StepError::Guard {
                        expression: guard.expression.clone(),
                        source,
                    })?;
                if !passed {
                    trace!(
                        transition = %transition.label,
                        guard = %guard.expression,
                        "guard rejected, trying next candidate"
                    );
                    continue;
                }
            }

            // Re-derive the full configuration from the targets so
            // compound targets stay valid.
            let next = chart.default_completion(&transition.to)?;
            machine.set_configuration(next);
            for action in &transition.actions {
                self.actions
                    .apply(&action.label, machine.context_mut())
                    .map_err(|source| StepError::Action {
                        action: action.label.clone(),
                        source,
                    })?;
            }

            debug!(
                machine = %machine.id(),
                event,
                transition = %transition.label,
                "transition fired"
            );
            machine.record_step(StepRecord {
                event: event.to_string(),
                fired: true,
                transition: Some(transition.label.clone()),
                timestamp: Utc::now(),
            });
            return Ok(true);
        }

        trace!(machine = %machine.id(), event, "no matching transition");
        machine.record_step(StepRecord {
            event: event.to_string(),
            fired: false,
            transition: None,
            timestamp: Utc::now(),
        });
        Ok(false)
    }
}
