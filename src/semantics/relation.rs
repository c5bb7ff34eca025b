//! Tree-relationship queries: ancestry, closure, LCA, orthogonality.
//!
//! All operations are pure reads over the chart's label and parent
//! indexes. Every query fails with [`SemanticsError::NotFound`] when a
//! referenced label is absent from the tree.

use super::{Chart, SemanticsError};
use crate::core::{StateLabel, StateType};

impl Chart {
    /// Direct children of a state, in tree order.
    pub fn children(&self, state: impl AsRef<str>) -> Result<Vec<StateLabel>, SemanticsError> {
        Ok(self.node(state.as_ref())?.children.clone())
    }

    /// Transitive closure of a state's children, in pre-order.
    pub fn children_plus(
        &self,
        state: impl AsRef<str>,
    ) -> Result<Vec<StateLabel>, SemanticsError> {
        let node = self.node(state.as_ref())?;
        let mut result = Vec::new();
        let mut stack: Vec<&StateLabel> = node.children.iter().rev().collect();
        while let Some(label) = stack.pop() {
            result.push(label.clone());
            let node = self.node(label.as_str())?;
            stack.extend(node.children.iter().rev());
        }
        Ok(result)
    }

    /// Reflexive-transitive closure of a state's children: the state
    /// itself followed by [`Chart::children_plus`] in pre-order.
    pub fn children_star(
        &self,
        state: impl AsRef<str>,
    ) -> Result<Vec<StateLabel>, SemanticsError> {
        let mut result = vec![StateLabel::new(state.as_ref())];
        result.extend(self.children_plus(state)?);
        Ok(result)
    }

    /// Whether `state` is a descendant of `ancestor` (reflexive: every
    /// state is a descendant of itself).
    pub fn descendant(
        &self,
        state: impl AsRef<str>,
        ancestor: impl AsRef<str>,
    ) -> Result<bool, SemanticsError> {
        let ancestor = ancestor.as_ref();
        self.node(ancestor)?;
        // Walk the parent chain upward from `state`; the chain is
        // bounded by tree depth.
        let mut current = StateLabel::new(state.as_ref());
        loop {
            if current.as_str() == ancestor {
                return Ok(true);
            }
            match &self.node(current.as_str())?.parent {
                Some(parent) => current = parent.clone(),
                None => return Ok(false),
            }
        }
    }

    /// Whether `state` is an ancestor of `descendant` (reflexive).
    pub fn ancestor(
        &self,
        state: impl AsRef<str>,
        descendant: impl AsRef<str>,
    ) -> Result<bool, SemanticsError> {
        self.descendant(descendant, state)
    }

    /// Whether one state is an ancestor-or-self of the other, in either
    /// direction.
    pub fn ancestrally_related(
        &self,
        a: impl AsRef<str>,
        b: impl AsRef<str>,
    ) -> Result<bool, SemanticsError> {
        Ok(self.descendant(a.as_ref(), b.as_ref())? || self.descendant(b.as_ref(), a.as_ref())?)
    }

    /// Least common ancestor of a set of states.
    ///
    /// Each state's root-to-self path is walked in lockstep from the
    /// root; the LCA is the deepest element on which all paths agree. A
    /// single state is its own LCA; an empty set yields the root.
    pub fn least_common_ancestor<I, T>(&self, states: I) -> Result<StateLabel, SemanticsError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let paths: Vec<Vec<StateLabel>> = states
            .into_iter()
            .map(|state| self.path_from_root(state.as_ref()))
            .collect::<Result<_, _>>()?;

        let Some(first) = paths.first() else {
            return Ok(StateLabel::root());
        };

        let mut lca = StateLabel::root();
        for depth in 0..first.len() {
            let candidate = &first[depth];
            if paths
                .iter()
                .all(|path| path.get(depth) == Some(candidate))
            {
                lca = candidate.clone();
            } else {
                break;
            }
        }
        Ok(lca)
    }

    /// Whether two states sit in different regions of a common
    /// AND-ancestor: never for a state and itself, never for
    /// ancestrally-related states, otherwise true iff their least
    /// common ancestor is a Parallel state.
    pub fn orthogonal(
        &self,
        a: impl AsRef<str>,
        b: impl AsRef<str>,
    ) -> Result<bool, SemanticsError> {
        let (a, b) = (a.as_ref(), b.as_ref());
        self.node(a)?;
        self.node(b)?;
        if a == b || self.ancestrally_related(a, b)? {
            return Ok(false);
        }
        let lca = self.least_common_ancestor([a, b])?;
        Ok(self.node(lca.as_str())?.kind == StateType::Parallel)
    }

    /// The default (initial) child of an OR-state.
    ///
    /// Post-validation every OR-state has exactly one, but the query
    /// still checks: callers may bypass validation.
    pub fn default_child(&self, state: impl AsRef<str>) -> Result<StateLabel, SemanticsError> {
        let state = state.as_ref();
        let node = self.node(state)?;
        for child in &node.children {
            if self.node(child.as_str())?.is_initial {
                return Ok(child.clone());
            }
        }
        Err(SemanticsError::NoDefault(StateLabel::new(state)))
    }

    /// Direct parent of a state. The root has no parent; that is a
    /// `None`, not an error.
    pub fn parent(&self, state: impl AsRef<str>) -> Result<Option<StateLabel>, SemanticsError> {
        Ok(self.node(state.as_ref())?.parent.clone())
    }

    /// Root-inclusive path from the root down to the state itself.
    pub(crate) fn path_from_root(&self, state: &str) -> Result<Vec<StateLabel>, SemanticsError> {
        let mut path = vec![StateLabel::new(state)];
        let mut current = self.node(state)?;
        while let Some(parent) = &current.parent {
            path.push(parent.clone());
            current = self.node(parent.as_str())?;
        }
        path.reverse();
        Ok(path)
    }
}
