//! Transition, guard, action, and event types.
//!
//! Transitions are data owned by the statechart and immutable at
//! runtime. Guard expressions and action labels are opaque to the
//! engine; they are interpreted by external collaborators (see the
//! `step` module's evaluator traits).

use super::label::StateLabel;
use serde::{Deserialize, Serialize};

/// A declared event in the statechart's alphabet.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Event {
    /// Event name as matched against `Transition::event`.
    pub label: String,
}

impl Event {
    pub fn new(label: impl Into<String>) -> Self {
        Event {
            label: label.into(),
        }
    }
}

/// An opaque guard expression attached to a transition.
///
/// The engine never parses the expression; it is handed verbatim to the
/// external guard evaluator together with the machine context.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Guard {
    pub expression: String,
}

impl Guard {
    pub fn new(expression: impl Into<String>) -> Self {
        Guard {
            expression: expression.into(),
        }
    }
}

/// An opaque action label executed when a transition fires.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Action {
    pub label: String,
}

impl Action {
    pub fn new(label: impl Into<String>) -> Self {
        Action {
            label: label.into(),
        }
    }
}

/// A transition between state sets, triggered by a named event.
///
/// Multi-source transitions are modeled (`from` is a set) though the
/// typical case is a single source. Declared order across the
/// statechart's transition list encodes priority: the stepper fires the
/// first matching transition.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Transition {
    /// Human-readable transition name.
    #[serde(default)]
    pub label: String,
    /// Source state labels.
    pub from: Vec<StateLabel>,
    /// Target state labels.
    pub to: Vec<StateLabel>,
    /// Triggering event name.
    pub event: String,
    /// Optional guard; absent means the transition is unconditional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guard: Option<Guard>,
    /// Actions executed in order when the transition fires.
    #[serde(default)]
    pub actions: Vec<Action>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::labels;

    #[test]
    fn transition_roundtrip_serialization() {
        let transition = Transition {
            label: "Turn on".to_string(),
            from: labels(["Off"]),
            to: labels(["On"]),
            event: "TURN_ON".to_string(),
            guard: Some(Guard::new("power_available")),
            actions: vec![Action::new("record_power_on")],
        };
        let json = serde_json::to_string(&transition).unwrap();
        let back: Transition = serde_json::from_str(&json).unwrap();
        assert_eq!(transition, back);
    }

    #[test]
    fn guard_is_omitted_from_json_when_absent() {
        let transition = Transition {
            from: labels(["A"]),
            to: labels(["B"]),
            event: "GO".to_string(),
            ..Transition::default()
        };
        let json = serde_json::to_string(&transition).unwrap();
        assert!(!json.contains("guard"));
    }

    #[test]
    fn multi_source_transitions_are_modeled() {
        let transition = Transition {
            from: labels(["Playing", "Paused"]),
            to: labels(["Stopped"]),
            event: "STOP".to_string(),
            ..Transition::default()
        };
        assert_eq!(transition.from.len(), 2);
    }
}
