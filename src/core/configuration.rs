//! Active-state configurations.

use super::label::StateLabel;
use serde::{Deserialize, Serialize};

/// The set of currently-active states of a machine, as an ordered list
/// of labels.
///
/// Callers may construct configurations in any order; derived
/// configurations returned by the engine are always in canonical
/// topological order (root-to-leaf, children in declaration order), so
/// equality comparison is meaningful only after canonicalization.
///
/// # Example
///
/// ```rust
/// use harel::core::{labels, Configuration};
///
/// let config = Configuration::new(labels(["On", "Blocked"]));
/// assert_eq!(config.primary().unwrap().as_str(), "On");
/// assert!(config.contains("Blocked"));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    states: Vec<StateLabel>,
}

impl Configuration {
    /// Create a configuration from a list of active state labels.
    pub fn new(states: Vec<StateLabel>) -> Self {
        Configuration { states }
    }

    /// The primary active state: the first (shallowest) label.
    ///
    /// For canonically-ordered configurations this is the topmost active
    /// state; the stepper matches transition sources against it.
    pub fn primary(&self) -> Option<&StateLabel> {
        self.states.first()
    }

    /// Active labels in order.
    pub fn states(&self) -> &[StateLabel] {
        &self.states
    }

    /// Membership test by label.
    pub fn contains(&self, label: impl AsRef<str>) -> bool {
        let label = label.as_ref();
        self.states.iter().any(|state| state.as_str() == label)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StateLabel> {
        self.states.iter()
    }
}

impl From<Vec<StateLabel>> for Configuration {
    fn from(states: Vec<StateLabel>) -> Self {
        Configuration::new(states)
    }
}

impl IntoIterator for Configuration {
    type Item = StateLabel;
    type IntoIter = std::vec::IntoIter<StateLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.into_iter()
    }
}

impl<'a> IntoIterator for &'a Configuration {
    type Item = &'a StateLabel;
    type IntoIter = std::slice::Iter<'a, StateLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
