//! Structural well-formedness checks for statecharts.
//!
//! Validation runs once per statechart, before any semantic query is
//! trusted. Rules run in a fixed order and stop at the first violation.

use crate::core::{State, StateLabel, StateType, Statechart, ROOT_LABEL};
use std::collections::HashSet;
use thiserror::Error;

/// A violated well-formedness rule.
///
/// Each variant names the offending state and the observed condition;
/// [`ValidationError::rule`] yields the machine-readable rule name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid root state: unexpected label '{0}' (expected '{ROOT_LABEL}')")]
    RootLabel(StateLabel),

    #[error("invalid parent-child relationship: inconsistent parent for state '{0}'")]
    ParentChild(StateLabel),

    #[error("overlapping state labels: duplicate state label '{0}'")]
    DuplicateLabel(StateLabel),

    #[error("state type mismatch: basic state '{0}' has children")]
    BasicWithChildren(StateLabel),

    #[error("state type mismatch: compound state '{0}' has no children")]
    CompoundWithoutChildren(StateLabel),

    #[error("state '{label}' has {count} default states, should have exactly 1")]
    DefaultCount { label: StateLabel, count: usize },
}

impl ValidationError {
    /// Name of the violated rule.
    pub fn rule(&self) -> &'static str {
        match self {
            ValidationError::RootLabel(_) => "root-state",
            ValidationError::ParentChild(_) => "parent-child",
            ValidationError::DuplicateLabel(_) => "unique-labels",
            ValidationError::BasicWithChildren(_)
            | ValidationError::CompoundWithoutChildren(_) => "type-children",
            ValidationError::DefaultCount { .. } => "single-default",
        }
    }
}

/// Validate a statechart against the well-formedness rules, in order:
/// root-state, parent-child, unique-labels, type-children,
/// single-default. Fails fast on the first violated rule.
pub fn validate(chart: &Statechart) -> Result<(), ValidationError> {
    validate_root_state(chart)?;
    validate_parent_child_relationships(chart)?;
    validate_non_overlapping_state_labels(chart)?;
    validate_state_type_agrees_with_children(chart)?;
    validate_parent_states_have_single_defaults(chart)?;
    Ok(())
}

fn validate_root_state(chart: &Statechart) -> Result<(), ValidationError> {
    if chart.root.label.as_str() != ROOT_LABEL {
        return Err(ValidationError::RootLabel(chart.root.label.clone()));
    }
    Ok(())
}

/// For every non-root state, the parent found by searching down from
/// the root must be the node that actually owns it. A mismatch means a
/// label appears under the wrong node, which would make label-based
/// parent lookups silently answer for the wrong state.
fn validate_parent_child_relationships(chart: &Statechart) -> Result<(), ValidationError> {
    let mut stack: Vec<&State> = vec![&chart.root];
    while let Some(state) = stack.pop() {
        for child in &state.children {
            match find_parent_by_search(&chart.root, &child.label) {
                Some(found) if std::ptr::eq(found, state) => {}
                _ => return Err(ValidationError::ParentChild(child.label.clone())),
            }
            stack.push(child);
        }
    }
    Ok(())
}

/// First state, in depth-first tree order, that owns a child with the
/// given label.
fn find_parent_by_search<'a>(root: &'a State, label: &StateLabel) -> Option<&'a State> {
    let mut stack: Vec<&State> = vec![root];
    while let Some(state) = stack.pop() {
        if state.children.iter().any(|child| child.label == *label) {
            return Some(state);
        }
        // Reverse keeps depth-first tree order on a LIFO stack.
        stack.extend(state.children.iter().rev());
    }
    None
}

fn validate_non_overlapping_state_labels(chart: &Statechart) -> Result<(), ValidationError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&State> = vec![&chart.root];
    while let Some(state) = stack.pop() {
        if !seen.insert(state.label.as_str()) {
            return Err(ValidationError::DuplicateLabel(state.label.clone()));
        }
        stack.extend(state.children.iter().rev());
    }
    Ok(())
}

fn validate_state_type_agrees_with_children(chart: &Statechart) -> Result<(), ValidationError> {
    let mut stack: Vec<&State> = vec![&chart.root];
    while let Some(state) = stack.pop() {
        match state.kind {
            StateType::Basic if !state.children.is_empty() => {
                return Err(ValidationError::BasicWithChildren(state.label.clone()));
            }
            StateType::Normal | StateType::Parallel if state.children.is_empty() => {
                return Err(ValidationError::CompoundWithoutChildren(state.label.clone()));
            }
            _ => {}
        }
        stack.extend(state.children.iter().rev());
    }
    Ok(())
}

fn validate_parent_states_have_single_defaults(
    chart: &Statechart,
) -> Result<(), ValidationError> {
    let mut stack: Vec<&State> = vec![&chart.root];
    while let Some(state) = stack.pop() {
        // Parallel states are exempt: all children are simultaneously
        // active, so there is no default-child notion.
        if state.kind == StateType::Normal {
            let count = state.children.iter().filter(|child| child.is_initial).count();
            if count != 1 {
                return Err(ValidationError::DefaultCount {
                    label: state.label.clone(),
                    count,
                });
            }
        }
        stack.extend(state.children.iter().rev());
    }
    Ok(())
}
