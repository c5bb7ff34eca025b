//! Builder for state subtrees.

use crate::core::{State, StateLabel, StateType};

/// Start building a state with the given label.
///
/// Types are left for normalization to derive unless
/// [`StateBuilder::parallel`] is called: leaves become `Basic`,
/// parents become `Normal` (OR).
///
/// # Example
///
/// ```rust
/// use harel::builder::state;
///
/// let on = state("On")
///     .parallel()
///     .child(state("Control").child(state("Idle").initial()))
///     .child(state("Display").child(state("Dark").initial()));
/// ```
pub fn state(label: impl Into<StateLabel>) -> StateBuilder {
    StateBuilder {
        label: label.into(),
        kind: StateType::Unspecified,
        is_initial: false,
        is_final: false,
        children: Vec::new(),
    }
}

/// Builder for a single state subtree.
#[derive(Clone, Debug)]
pub struct StateBuilder {
    label: StateLabel,
    kind: StateType,
    is_initial: bool,
    is_final: bool,
    children: Vec<StateBuilder>,
}

impl StateBuilder {
    /// Make this an AND-state: all children simultaneously active.
    pub fn parallel(mut self) -> Self {
        self.kind = StateType::Parallel;
        self
    }

    /// Mark this state as the default child of its OR-parent.
    pub fn initial(mut self) -> Self {
        self.is_initial = true;
        self
    }

    /// Mark this state as final.
    pub fn final_state(mut self) -> Self {
        self.is_final = true;
        self
    }

    /// Append a child subtree.
    pub fn child(mut self, child: StateBuilder) -> Self {
        self.children.push(child);
        self
    }

    pub(crate) fn build(self) -> State {
        State {
            label: self.label,
            kind: self.kind,
            is_initial: self.is_initial,
            is_final: self.is_final,
            children: self.children.into_iter().map(StateBuilder::build).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_nested_subtrees_in_order() {
        let built = state("On")
            .child(state("A").initial())
            .child(state("B"))
            .build();
        assert_eq!(built.label.as_str(), "On");
        assert_eq!(built.children.len(), 2);
        assert_eq!(built.children[0].label.as_str(), "A");
        assert!(built.children[0].is_initial);
        assert!(!built.children[1].is_initial);
    }

    #[test]
    fn kind_defaults_to_unspecified() {
        assert_eq!(state("X").build().kind, StateType::Unspecified);
        assert_eq!(state("X").parallel().build().kind, StateType::Parallel);
    }

    #[test]
    fn final_state_sets_flag() {
        assert!(state("Done").final_state().build().is_final);
    }
}
