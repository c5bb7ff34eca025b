//! State tree types: state kinds, states, and the statechart itself.
//!
//! A statechart is a tree of states composed with OR (exactly one child
//! active) and AND (all children active) rules, plus a flat list of
//! transitions. The tree is immutable input: it is normalized and
//! validated once, then only read.

use super::label::StateLabel;
use super::transition::{Event, Transition};
use serde::{Deserialize, Serialize};

/// Composition kind of a state.
///
/// `Orthogonal` is a pure synonym for `Parallel`; both denote
/// AND-composition. There is exactly one AND tag internally; the
/// academic spelling is accepted at the serialization boundary and as
/// the [`StateType::ORTHOGONAL`] constant.
///
/// # Example
///
/// ```rust
/// use harel::core::StateType;
///
/// assert_eq!(StateType::ORTHOGONAL, StateType::Parallel);
/// let parsed: StateType = serde_json::from_str("\"orthogonal\"").unwrap();
/// assert_eq!(parsed, StateType::Parallel);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateType {
    /// Kind not yet derived; resolved by normalization.
    #[default]
    Unspecified,
    /// Leaf state with no children.
    Basic,
    /// OR-state: exactly one child active at a time.
    Normal,
    /// AND-state: all children simultaneously active.
    #[serde(alias = "orthogonal")]
    Parallel,
}

impl StateType {
    /// Academic alias for AND-composition.
    pub const ORTHOGONAL: StateType = StateType::Parallel;

    /// Whether this kind admits children.
    pub fn is_compound(self) -> bool {
        matches!(self, StateType::Normal | StateType::Parallel)
    }
}

/// A node in the statechart tree.
///
/// Each state is exclusively owned by its parent; the tree has a single
/// root owned by the [`Statechart`].
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct State {
    /// Label, unique across the whole tree.
    pub label: StateLabel,
    /// Composition kind; `Unspecified` until normalized.
    #[serde(rename = "type", default)]
    pub kind: StateType,
    /// Marks this state as the default child of its OR-parent.
    #[serde(default)]
    pub is_initial: bool,
    /// Marks this state as final.
    #[serde(default)]
    pub is_final: bool,
    /// Ordered, owned child states.
    #[serde(default)]
    pub children: Vec<State>,
}

impl State {
    /// Create a leaf state with the given label.
    pub fn new(label: impl Into<StateLabel>) -> Self {
        State {
            label: label.into(),
            ..State::default()
        }
    }

    /// The child flagged as this state's default, if any.
    pub fn default_child(&self) -> Option<&State> {
        self.children.iter().find(|child| child.is_initial)
    }
}

/// A complete statechart definition: state tree plus transitions.
///
/// The `events` list is the declared event alphabet; it is informational
/// and not consulted by the stepper.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Statechart {
    /// Root of the state tree, carrying the reserved root label.
    pub root: State,
    /// Transitions in declared order; order encodes priority.
    #[serde(default)]
    pub transitions: Vec<Transition>,
    /// Declared event alphabet.
    #[serde(default)]
    pub events: Vec<Event>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orthogonal_is_the_same_tag_as_parallel() {
        assert_eq!(StateType::ORTHOGONAL, StateType::Parallel);
    }

    #[test]
    fn orthogonal_alias_parses_to_parallel() {
        let parsed: StateType = serde_json::from_str("\"orthogonal\"").unwrap();
        assert_eq!(parsed, StateType::Parallel);
        // Canonical spelling round-trips.
        let json = serde_json::to_string(&StateType::Parallel).unwrap();
        assert_eq!(json, "\"parallel\"");
    }

    #[test]
    fn state_type_defaults_to_unspecified() {
        let state: State = serde_json::from_str(r#"{"label": "Off"}"#).unwrap();
        assert_eq!(state.kind, StateType::Unspecified);
        assert!(!state.is_initial);
        assert!(state.children.is_empty());
    }

    #[test]
    fn default_child_finds_initial_flag() {
        let state = State {
            label: "On".into(),
            kind: StateType::Normal,
            children: vec![
                State::new("Idle"),
                State {
                    label: "Active".into(),
                    is_initial: true,
                    ..State::default()
                },
            ],
            ..State::default()
        };
        assert_eq!(state.default_child().unwrap().label.as_str(), "Active");
    }

    #[test]
    fn statechart_roundtrip_serialization() {
        let chart = Statechart {
            root: State {
                label: StateLabel::root(),
                kind: StateType::Normal,
                children: vec![State {
                    label: "Off".into(),
                    is_initial: true,
                    ..State::default()
                }],
                ..State::default()
            },
            ..Statechart::default()
        };
        let json = serde_json::to_string(&chart).unwrap();
        let back: Statechart = serde_json::from_str(&json).unwrap();
        assert_eq!(chart, back);
    }
}
