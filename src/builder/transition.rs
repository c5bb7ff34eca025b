//! Builder for labelled transitions.

use crate::builder::BuildError;
use crate::core::{Action, Guard, StateLabel, Transition};

/// Builder for a single transition.
///
/// A transition needs an event and at least one source and one target
/// state; everything else is optional.
///
/// # Example
///
/// ```rust
/// use harel::builder::TransitionBuilder;
///
/// let transition = TransitionBuilder::new()
///     .label("unblock")
///     .on("CARD")
///     .from(["Blocked"])
///     .to(["Unblocked"])
///     .guard("card_valid")
///     .action("open_gate")
///     .build()
///     .unwrap();
/// assert_eq!(transition.event, "CARD");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransitionBuilder {
    label: String,
    from: Vec<StateLabel>,
    to: Vec<StateLabel>,
    event: Option<String>,
    guard: Option<Guard>,
    actions: Vec<Action>,
}

impl TransitionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Human-readable name, recorded in step history when fired.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// The event this transition reacts to.
    pub fn on(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Source states; the first one is matched against the
    /// configuration primary.
    pub fn from<I, T>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<StateLabel>,
    {
        self.from = states.into_iter().map(Into::into).collect();
        self
    }

    /// Target states, seeds for default completion.
    pub fn to<I, T>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<StateLabel>,
    {
        self.to = states.into_iter().map(Into::into).collect();
        self
    }

    /// Guard expression handed to the guard evaluator.
    pub fn guard(mut self, expression: impl Into<String>) -> Self {
        self.guard = Some(Guard::new(expression));
        self
    }

    /// Append an action, executed in call order after the transition fires.
    pub fn action(mut self, label: impl Into<String>) -> Self {
        self.actions.push(Action::new(label));
        self
    }

    /// Assemble the transition, rejecting incomplete definitions.
    pub fn build(self) -> Result<Transition, BuildError> {
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        if self.from.is_empty() {
            return Err(BuildError::MissingFromState);
        }
        if self.to.is_empty() {
            return Err(BuildError::MissingToState);
        }
        Ok(Transition {
            label: self.label,
            from: self.from,
            to: self.to,
            event,
            guard: self.guard,
            actions: self.actions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_complete_transition() {
        let transition = TransitionBuilder::new()
            .label("turn on")
            .on("TURN_ON")
            .from(["Off"])
            .to(["On"])
            .guard("powered")
            .action("log")
            .action("notify")
            .build()
            .unwrap();

        assert_eq!(transition.label, "turn on");
        assert_eq!(transition.event, "TURN_ON");
        assert_eq!(transition.from, vec![StateLabel::from("Off")]);
        assert_eq!(transition.to, vec![StateLabel::from("On")]);
        assert_eq!(transition.guard, Some(Guard::new("powered")));
        assert_eq!(
            transition.actions,
            vec![Action::new("log"), Action::new("notify")]
        );
    }

    #[test]
    fn missing_event_is_rejected() {
        let err = TransitionBuilder::new()
            .from(["Off"])
            .to(["On"])
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::MissingEvent);
    }

    #[test]
    fn missing_from_is_rejected() {
        let err = TransitionBuilder::new()
            .on("GO")
            .to(["On"])
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::MissingFromState);
    }

    #[test]
    fn missing_to_is_rejected() {
        let err = TransitionBuilder::new()
            .on("GO")
            .from(["Off"])
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::MissingToState);
    }
}
