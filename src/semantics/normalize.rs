//! Structural normalization of raw state trees.

use crate::core::{State, StateLabel, StateType, Statechart};

/// Derive state types from structure for lightly-specified trees.
///
/// One depth-first pass over the tree: a leaf with an `Unspecified`
/// type becomes `Basic`, a state with children and an `Unspecified`
/// type becomes `Normal` (OR). Explicitly-set types, `Parallel`
/// included, are never reassigned. An empty root label is rewritten to
/// the reserved root marker.
///
/// Normalization is idempotent: running it on an already-normalized
/// chart is the identity.
///
/// # Example
///
/// ```rust
/// use harel::core::{State, StateType, Statechart};
/// use harel::semantics::normalize;
///
/// let chart = Statechart {
///     root: State {
///         children: vec![State::new("Off")],
///         ..State::default()
///     },
///     ..Statechart::default()
/// };
/// let chart = normalize(chart);
/// assert_eq!(chart.root.kind, StateType::Normal);
/// assert_eq!(chart.root.children[0].kind, StateType::Basic);
/// assert!(chart.root.label.is_root());
/// ```
pub fn normalize(mut chart: Statechart) -> Statechart {
    if chart.root.label.as_str().is_empty() {
        chart.root.label = StateLabel::root();
    }

    // Explicit worklist instead of recursion: trees can be arbitrarily
    // deep and the stack depth must not depend on input shape.
    let mut stack: Vec<&mut State> = vec![&mut chart.root];
    while let Some(state) = stack.pop() {
        if state.kind == StateType::Unspecified {
            state.kind = if state.children.is_empty() {
                StateType::Basic
            } else {
                StateType::Normal
            };
        }
        stack.extend(state.children.iter_mut());
    }
    chart
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_chart() -> Statechart {
        Statechart {
            root: State {
                children: vec![
                    State::new("Off"),
                    State {
                        label: "On".into(),
                        kind: StateType::Parallel,
                        children: vec![
                            State {
                                label: "Control".into(),
                                children: vec![State::new("Idle")],
                                ..State::default()
                            },
                            State::new("Display"),
                        ],
                        ..State::default()
                    },
                ],
                ..State::default()
            },
            ..Statechart::default()
        }
    }

    #[test]
    fn leaves_become_basic_and_parents_become_normal() {
        let chart = normalize(raw_chart());
        assert_eq!(chart.root.kind, StateType::Normal);
        assert_eq!(chart.root.children[0].kind, StateType::Basic);
        let on = &chart.root.children[1];
        assert_eq!(on.children[0].kind, StateType::Normal);
        assert_eq!(on.children[0].children[0].kind, StateType::Basic);
        assert_eq!(on.children[1].kind, StateType::Basic);
    }

    #[test]
    fn explicit_parallel_type_is_preserved() {
        let chart = normalize(raw_chart());
        assert_eq!(chart.root.children[1].kind, StateType::Parallel);
    }

    #[test]
    fn empty_root_label_becomes_reserved_marker() {
        let chart = normalize(raw_chart());
        assert!(chart.root.label.is_root());
    }

    #[test]
    fn explicit_root_label_is_kept() {
        let mut raw = raw_chart();
        raw.root.label = "custom_root".into();
        let chart = normalize(raw);
        assert_eq!(chart.root.label.as_str(), "custom_root");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize(raw_chart());
        let twice = normalize(once.clone());
        assert_eq!(once, twice);
    }
}
