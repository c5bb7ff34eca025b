//! State labels and the reserved root marker.
//!
//! Every state in a statechart is addressed by a label that is unique
//! across the whole tree. Labels are plain strings; the engine never
//! interprets them beyond equality and ordering.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Reserved label for the synthetic root state.
///
/// The root is a structural anchor, not a business state: it never
/// appears in configurations and carries no transitions of its own.
pub const ROOT_LABEL: &str = "__root__";

/// Label addressing a single state in a statechart tree.
///
/// # Example
///
/// ```rust
/// use harel::core::StateLabel;
///
/// let on = StateLabel::from("On");
/// assert_eq!(on.as_str(), "On");
/// assert!(!on.is_root());
/// assert!(StateLabel::root().is_root());
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateLabel(String);

impl StateLabel {
    /// Create a label from anything string-like.
    pub fn new(label: impl Into<String>) -> Self {
        StateLabel(label.into())
    }

    /// The reserved root marker label.
    pub fn root() -> Self {
        StateLabel(ROOT_LABEL.to_string())
    }

    /// Check whether this is the reserved root marker.
    pub fn is_root(&self) -> bool {
        self.0 == ROOT_LABEL
    }

    /// View the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StateLabel {
    fn from(label: &str) -> Self {
        StateLabel(label.to_string())
    }
}

impl From<String> for StateLabel {
    fn from(label: String) -> Self {
        StateLabel(label)
    }
}

impl AsRef<str> for StateLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StateLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for StateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Convert a list of string-likes into state labels.
///
/// # Example
///
/// ```rust
/// use harel::core::{labels, StateLabel};
///
/// let set = labels(["On", "Off"]);
/// assert_eq!(set, vec![StateLabel::from("On"), StateLabel::from("Off")]);
/// ```
pub fn labels<I, T>(items: I) -> Vec<StateLabel>
where
    I: IntoIterator<Item = T>,
    T: Into<StateLabel>,
{
    items.into_iter().map(Into::into).collect()
}
