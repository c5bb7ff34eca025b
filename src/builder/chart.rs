//! Top-level builder producing validated charts.

use crate::builder::{BuildError, StateBuilder, TransitionBuilder};
use crate::core::{Event, State, StateLabel, Statechart, Transition};
use crate::semantics::Chart;

/// Fluent builder for a complete statechart.
///
/// Top-level states become children of an implicit root OR-state.
/// Transitions are finalized as they are added, so incomplete
/// definitions surface at the call site rather than at [`build`].
///
/// # Example
///
/// ```rust
/// use harel::builder::{state, StatechartBuilder, TransitionBuilder};
///
/// let chart = StatechartBuilder::new()
///     .state(state("Off").initial())
///     .state(state("On"))
///     .transition(
///         TransitionBuilder::new().on("TURN_ON").from(["Off"]).to(["On"]),
///     )
///     .unwrap()
///     .event("TURN_ON")
///     .build()
///     .unwrap();
///
/// assert!(chart.contains("Off"));
/// ```
///
/// [`build`]: StatechartBuilder::build
#[derive(Clone, Debug, Default)]
pub struct StatechartBuilder {
    states: Vec<StateBuilder>,
    transitions: Vec<Transition>,
    events: Vec<Event>,
}

impl StatechartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level state subtree.
    pub fn state(mut self, state: StateBuilder) -> Self {
        self.states.push(state);
        self
    }

    /// Add a transition; rejects incomplete definitions immediately.
    pub fn transition(mut self, transition: TransitionBuilder) -> Result<Self, BuildError> {
        self.transitions.push(transition.build()?);
        Ok(self)
    }

    /// Declare an event label in the chart's alphabet.
    pub fn event(mut self, label: impl Into<String>) -> Self {
        self.events.push(Event::new(label));
        self
    }

    /// Assemble the tree under the reserved root label, then normalize,
    /// validate, and index it.
    pub fn build(self) -> Result<Chart, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }
        let root = State {
            label: StateLabel::root(),
            children: self.states.into_iter().map(StateBuilder::build).collect(),
            ..State::default()
        };
        let chart = Chart::new(Statechart {
            root,
            transitions: self.transitions,
            events: self.events,
        })?;
        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::state;
    use crate::core::StateType;
    use crate::semantics::ValidationError;

    #[test]
    fn builds_and_validates_a_chart() {
        let chart = StatechartBuilder::new()
            .state(state("Off").initial())
            .state(
                state("On")
                    .parallel()
                    .child(state("Control").child(state("Idle").initial()))
                    .child(state("Display").child(state("Dark").initial())),
            )
            .transition(TransitionBuilder::new().on("TURN_ON").from(["Off"]).to(["On"]))
            .unwrap()
            .event("TURN_ON")
            .build()
            .unwrap();

        assert!(chart.contains("Off"));
        assert!(chart.contains("Idle"));
        assert_eq!(chart.definition().transitions.len(), 1);
        assert_eq!(chart.definition().events.len(), 1);
    }

    #[test]
    fn no_states_is_rejected() {
        let err = StatechartBuilder::new().build().unwrap_err();
        assert_eq!(err, BuildError::NoStates);
    }

    #[test]
    fn top_level_states_hang_off_the_reserved_root() {
        let chart = StatechartBuilder::new()
            .state(state("Solo").initial())
            .build()
            .unwrap();
        let root = &chart.definition().root;
        assert!(root.label.is_root());
        assert_eq!(root.kind, StateType::Normal);
        assert_eq!(root.children[0].label.as_str(), "Solo");
    }

    #[test]
    fn incomplete_transition_fails_at_the_call_site() {
        let err = StatechartBuilder::new()
            .state(state("Off").initial())
            .transition(TransitionBuilder::new().from(["Off"]).to(["On"]))
            .unwrap_err();
        assert_eq!(err, BuildError::MissingEvent);
    }

    #[test]
    fn structural_violations_surface_as_validation_errors() {
        let err = StatechartBuilder::new()
            .state(state("A").initial())
            .state(state("A"))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::Validation(ValidationError::DuplicateLabel(_))
        ));
    }
}
