//! Configuration algebra: validity, consistency, default completion,
//! and canonical ordering of active-state sets.
//!
//! The reserved root is implicitly active in every configuration. It
//! never appears in configurations returned by the engine, and
//! top-level states are exempt from the parent-membership clause.

use super::{Chart, SemanticsError};
use crate::core::{Configuration, StateLabel, StateType};
use std::collections::BTreeSet;
use thiserror::Error;

/// A violated configuration-validity clause.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Clause (a): a configured state does not exist in the tree.
    #[error("state '{0}' not found in statechart")]
    StateNotFound(StateLabel),

    /// Clause (d): a configured state's parent is not configured.
    #[error("state '{state}' is in the configuration but its parent '{parent}' is not")]
    MissingParent { state: StateLabel, parent: StateLabel },

    /// Clause (b): an active AND-state is missing one of its children.
    #[error("child '{child}' of AND-state '{state}' is not in the configuration")]
    IncompleteParallel { state: StateLabel, child: StateLabel },

    /// Clause (c): an active OR-state has the wrong number of active
    /// children.
    #[error("OR-state '{state}' has {count} active children, expected exactly 1")]
    ActiveChildren { state: StateLabel, count: usize },
}

impl Chart {
    /// Check a configuration against the validity clauses:
    /// (a) every state exists, (d) every non-top-level state's parent
    /// is present, (b) active AND-states have all children present,
    /// (c) active OR-states have exactly one child present.
    ///
    /// The first violated clause is reported; each clause is a distinct
    /// error variant.
    pub fn validate_configuration(
        &self,
        configuration: &Configuration,
    ) -> Result<(), ConfigurationError> {
        let members: BTreeSet<&str> = configuration.iter().map(StateLabel::as_str).collect();

        for label in configuration {
            if !self.contains(label) {
                return Err(ConfigurationError::StateNotFound(label.clone()));
            }
        }

        for label in configuration {
            if let Ok(Some(parent)) = self.parent(label) {
                if !parent.is_root() && !members.contains(parent.as_str()) {
                    return Err(ConfigurationError::MissingParent {
                        state: label.clone(),
                        parent,
                    });
                }
            }
        }

        // Descend from the (implicitly active) root through active
        // states, checking the AND/OR cardinality clauses.
        let mut stack: Vec<&StateLabel> = vec![&self.definition().root.label];
        while let Some(label) = stack.pop() {
            let node = match self.node(label.as_str()) {
                Ok(node) => node,
                Err(_) => continue,
            };
            match node.kind {
                StateType::Parallel => {
                    for child in &node.children {
                        if !members.contains(child.as_str()) {
                            return Err(ConfigurationError::IncompleteParallel {
                                state: label.clone(),
                                child: child.clone(),
                            });
                        }
                        stack.push(child);
                    }
                }
                StateType::Normal if !node.children.is_empty() => {
                    let active: Vec<&StateLabel> = node
                        .children
                        .iter()
                        .filter(|child| members.contains(child.as_str()))
                        .collect();
                    if active.len() != 1 {
                        return Err(ConfigurationError::ActiveChildren {
                            state: label.clone(),
                            count: active.len(),
                        });
                    }
                    stack.extend(active);
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Whether a set of states can coexist in one configuration: every
    /// pair must be either ancestrally related or orthogonal.
    pub fn consistent<I, T>(&self, states: I) -> Result<bool, SemanticsError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Ok(self.find_inconsistent_pair(states)?.is_none())
    }

    /// Smallest configuration containing the seed set, closed under the
    /// completion rules: AND-states pull in all children, active
    /// OR-states without an active child pull in their default child,
    /// every non-root state pulls in its parent.
    ///
    /// Inconsistent seed sets are rejected with
    /// [`SemanticsError::Inconsistent`]; completion is only defined for
    /// consistent input. An empty seed completes from the root's
    /// defaults, which is the initial configuration of a fresh machine.
    pub fn default_completion<I, T>(&self, states: I) -> Result<Configuration, SemanticsError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let seeds: Vec<StateLabel> = states
            .into_iter()
            .map(|state| StateLabel::new(state.as_ref()))
            .collect();
        if let Some((a, b)) = self.find_inconsistent_pair(&seeds)? {
            return Err(SemanticsError::Inconsistent(a, b));
        }

        // Upward closure first: every seed's ancestor chain must be in
        // the set before the OR-default rule runs, otherwise a default
        // child could be added to a region the seeds already occupy.
        let mut set: BTreeSet<StateLabel> = BTreeSet::new();
        for seed in &seeds {
            for ancestor in self.path_from_root(seed.as_str())? {
                if !ancestor.is_root() {
                    set.insert(ancestor);
                }
            }
        }

        // Downward completion from the implicitly-active root. Each
        // state is visited at most once; the membership test keeps the
        // pass idempotent.
        let mut stack: Vec<StateLabel> = vec![self.definition().root.label.clone()];
        while let Some(label) = stack.pop() {
            let node = self.node(label.as_str())?;
            match node.kind {
                StateType::Parallel => {
                    for child in &node.children {
                        set.insert(child.clone());
                        stack.push(child.clone());
                    }
                }
                StateType::Normal if !node.children.is_empty() => {
                    let mut active = false;
                    for child in &node.children {
                        if set.contains(child) {
                            active = true;
                            stack.push(child.clone());
                        }
                    }
                    if !active {
                        let default = self.default_child(label.as_str())?;
                        set.insert(default.clone());
                        stack.push(default);
                    }
                }
                _ => {}
            }
        }

        let ordered = self.canonical_order_of_set(&set);
        Ok(Configuration::new(ordered))
    }

    /// Whether a configuration is settled: structurally valid and equal
    /// to its own default completion. Unknown labels are errors; other
    /// validity violations simply answer `false`.
    pub fn is_consistent_configuration(
        &self,
        configuration: &Configuration,
    ) -> Result<bool, SemanticsError> {
        for label in configuration {
            self.node(label.as_str())?;
        }
        if self.validate_configuration(configuration).is_err() {
            return Ok(false);
        }
        let completion = self.default_completion(configuration.states())?;
        let canonical = self.canonical_order(configuration.states());
        Ok(canonical == completion.states())
    }

    /// Canonical topological ordering of a state set: walk the tree
    /// from the root in declaration order, keeping only members; member
    /// labels not reachable from the root are appended afterward in
    /// lexicographic order.
    ///
    /// Two semantically-equal configurations compare equal structurally
    /// once both are in canonical order.
    pub fn canonical_order(&self, states: &[StateLabel]) -> Vec<StateLabel> {
        let set: BTreeSet<StateLabel> = states.iter().cloned().collect();
        self.canonical_order_of_set(&set)
    }

    /// Initial configuration of the chart: the default completion of
    /// the empty seed set.
    pub fn initial_configuration(&self) -> Result<Configuration, SemanticsError> {
        self.default_completion::<_, &str>([])
    }

    fn canonical_order_of_set(&self, set: &BTreeSet<StateLabel>) -> Vec<StateLabel> {
        let mut ordered = Vec::new();
        let mut seen: BTreeSet<&StateLabel> = BTreeSet::new();
        let mut stack: Vec<&StateLabel> = vec![&self.definition().root.label];
        while let Some(label) = stack.pop() {
            let Ok(node) = self.node(label.as_str()) else {
                continue;
            };
            if let Some(member) = set.get(label) {
                if seen.insert(member) {
                    ordered.push(member.clone());
                }
            }
            stack.extend(node.children.iter().rev());
        }
        // Orphans: members that are not in the tree at all. BTreeSet
        // iteration keeps them lexicographic.
        for member in set {
            if !seen.contains(member) {
                ordered.push(member.clone());
            }
        }
        ordered
    }

    fn find_inconsistent_pair<I, T>(
        &self,
        states: I,
    ) -> Result<Option<(StateLabel, StateLabel)>, SemanticsError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let labels: Vec<StateLabel> = states
            .into_iter()
            .map(|state| StateLabel::new(state.as_ref()))
            .collect();
        for label in &labels {
            self.node(label.as_str())?;
        }
        for (i, a) in labels.iter().enumerate() {
            for b in &labels[i + 1..] {
                if a == b {
                    continue;
                }
                if !self.ancestrally_related(a, b)? && !self.orthogonal(a, b)? {
                    return Ok(Some((a.clone(), b.clone())));
                }
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{state, StatechartBuilder};
    use crate::core::labels;
    use crate::semantics::test_fixtures::turnstile_chart;

    /// OR-branch "A" next to a two-region AND-branch "B".
    fn mixed_chart() -> Chart {
        StatechartBuilder::new()
            .state(
                state("A")
                    .initial()
                    .child(state("A1").initial())
                    .child(state("A2")),
            )
            .state(
                state("B")
                    .parallel()
                    .child(
                        state("B1")
                            .child(state("B1a").initial())
                            .child(state("B1b")),
                    )
                    .child(
                        state("B2")
                            .child(state("B2a").initial())
                            .child(state("B2b")),
                    ),
            )
            .build()
            .expect("mixed fixture is well-formed")
    }

    #[test]
    fn valid_or_configuration() {
        let chart = mixed_chart();
        let config = Configuration::new(labels(["A", "A1"]));
        assert_eq!(chart.validate_configuration(&config), Ok(()));
    }

    #[test]
    fn valid_parallel_configuration() {
        let chart = mixed_chart();
        let config = Configuration::new(labels(["B", "B1", "B1a", "B2", "B2b"]));
        assert_eq!(chart.validate_configuration(&config), Ok(()));
    }

    #[test]
    fn two_active_or_children_is_invalid() {
        let chart = mixed_chart();
        let config = Configuration::new(labels(["A", "A1", "A2"]));
        assert_eq!(
            chart.validate_configuration(&config),
            Err(ConfigurationError::ActiveChildren {
                state: "A".into(),
                count: 2,
            }),
        );
    }

    #[test]
    fn incomplete_parallel_state_is_invalid() {
        let chart = mixed_chart();
        let config = Configuration::new(labels(["B", "B1", "B1a"]));
        assert_eq!(
            chart.validate_configuration(&config),
            Err(ConfigurationError::IncompleteParallel {
                state: "B".into(),
                child: "B2".into(),
            }),
        );
    }

    #[test]
    fn missing_parent_is_invalid() {
        let chart = mixed_chart();
        let config = Configuration::new(labels(["A1"]));
        assert_eq!(
            chart.validate_configuration(&config),
            Err(ConfigurationError::MissingParent {
                state: "A1".into(),
                parent: "A".into(),
            }),
        );
    }

    #[test]
    fn unknown_state_is_invalid() {
        let chart = mixed_chart();
        let config = Configuration::new(labels(["Nope"]));
        assert_eq!(
            chart.validate_configuration(&config),
            Err(ConfigurationError::StateNotFound("Nope".into())),
        );
    }

    #[test]
    fn top_level_states_do_not_need_the_root_in_the_configuration() {
        let chart = mixed_chart();
        let config = Configuration::new(labels(["A", "A1"]));
        assert_eq!(chart.validate_configuration(&config), Ok(()));
    }

    #[test]
    fn consistent_accepts_ancestrally_related_and_orthogonal_sets() {
        let chart = turnstile_chart();
        assert!(chart.consistent(["On", "Blocked", "Ready"]).unwrap());
        assert!(chart.consistent(["Blocked", "Ready"]).unwrap());
        assert!(chart.consistent(["On"]).unwrap());
        assert!(chart.consistent::<_, &str>([]).unwrap());
    }

    #[test]
    fn or_siblings_are_inconsistent() {
        let chart = turnstile_chart();
        assert!(!chart.consistent(["On", "Off"]).unwrap());
        assert!(!chart.consistent(["Blocked", "Unblocked"]).unwrap());
    }

    #[test]
    fn consistent_propagates_not_found() {
        let chart = turnstile_chart();
        assert_eq!(
            chart.consistent(["On", "Nope"]),
            Err(SemanticsError::NotFound("Nope".into())),
        );
    }

    #[test]
    fn completion_of_and_state_fills_both_regions() {
        let chart = turnstile_chart();
        let completion = chart.default_completion(["On"]).unwrap();
        assert_eq!(
            completion.states(),
            labels([
                "On",
                "Turnstile Control",
                "Blocked",
                "Card Reader Control",
                "Ready",
            ]),
        );
    }

    #[test]
    fn completion_respects_seeded_non_default_children() {
        let chart = turnstile_chart();
        let completion = chart.default_completion(["Unblocked"]).unwrap();
        assert_eq!(
            completion.states(),
            labels([
                "On",
                "Turnstile Control",
                "Unblocked",
                "Card Reader Control",
                "Ready",
            ]),
        );
    }

    #[test]
    fn completion_of_empty_seed_is_the_initial_configuration() {
        let chart = turnstile_chart();
        let initial = chart.initial_configuration().unwrap();
        assert_eq!(initial.states(), labels(["Off"]));
        assert_eq!(initial, chart.default_completion::<_, &str>([]).unwrap());
    }

    #[test]
    fn completion_rejects_inconsistent_seeds() {
        let chart = turnstile_chart();
        let err = chart.default_completion(["On", "Off"]).unwrap_err();
        assert!(matches!(err, SemanticsError::Inconsistent(_, _)));
    }

    #[test]
    fn completion_is_idempotent() {
        let chart = turnstile_chart();
        let once = chart.default_completion(["On"]).unwrap();
        let twice = chart.default_completion(once.states()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn completion_output_is_a_consistent_configuration() {
        let chart = turnstile_chart();
        let completion = chart.default_completion(["On"]).unwrap();
        assert_eq!(chart.validate_configuration(&completion), Ok(()));
        assert!(chart.is_consistent_configuration(&completion).unwrap());
    }

    #[test]
    fn partial_configuration_is_not_consistent() {
        let chart = turnstile_chart();
        // Valid-looking but missing the Card Reader Control region.
        let config = Configuration::new(labels(["On", "Turnstile Control", "Blocked"]));
        assert!(!chart.is_consistent_configuration(&config).unwrap());
    }

    #[test]
    fn is_consistent_configuration_propagates_not_found() {
        let chart = turnstile_chart();
        let config = Configuration::new(labels(["Nope"]));
        assert_eq!(
            chart.is_consistent_configuration(&config),
            Err(SemanticsError::NotFound("Nope".into())),
        );
    }

    #[test]
    fn canonical_order_follows_tree_declaration_order() {
        let chart = turnstile_chart();
        let shuffled = labels(["Ready", "On", "Blocked", "Card Reader Control", "Turnstile Control"]);
        assert_eq!(
            chart.canonical_order(&shuffled),
            labels([
                "On",
                "Turnstile Control",
                "Blocked",
                "Card Reader Control",
                "Ready",
            ]),
        );
    }

    #[test]
    fn canonical_order_appends_orphans_lexicographically() {
        let chart = turnstile_chart();
        let states = labels(["Zed", "Off", "Alpha"]);
        assert_eq!(chart.canonical_order(&states), labels(["Off", "Alpha", "Zed"]));
    }

    #[test]
    fn canonical_order_drops_duplicates() {
        let chart = turnstile_chart();
        let states = labels(["Off", "Off"]);
        assert_eq!(chart.canonical_order(&states), labels(["Off"]));
    }

    #[test]
    fn deep_or_completion_in_mixed_chart() {
        let chart = mixed_chart();
        let completion = chart.default_completion(["B1b"]).unwrap();
        assert_eq!(
            completion.states(),
            labels(["B", "B1", "B1b", "B2", "B2a"]),
        );
    }
}
