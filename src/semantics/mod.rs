//! Statechart semantics: the validated chart and its query engine.
//!
//! [`Chart`] is the trust boundary of the crate. A raw [`Statechart`]
//! becomes a `Chart` by passing through normalization and validation;
//! from then on the tree is immutable and every relation query and
//! configuration operation is a pure read. A `Chart` is safe to share
//! across threads and machines without synchronization.

mod configuration;
mod error;
mod normalize;
mod relation;
mod validate;

pub use configuration::ConfigurationError;
pub use error::SemanticsError;
pub use normalize::normalize;
pub use validate::{validate, ValidationError};

use crate::core::{State, StateLabel, StateType, Statechart};
use std::collections::HashMap;
use tracing::debug;

/// Flattened view of one state, indexed by label.
///
/// The parent link is a back-reference relation computed once at
/// construction, so parent lookups never re-walk the tree.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) kind: StateType,
    pub(crate) is_initial: bool,
    pub(crate) parent: Option<StateLabel>,
    pub(crate) children: Vec<StateLabel>,
}

/// A normalized, validated statechart with label and parent indexes.
///
/// All semantic operations live here: the relation engine (ancestry,
/// least common ancestor, orthogonality), the configuration algebra
/// (validity, consistency, default completion, canonical ordering), and
/// the definition consulted by the event stepper.
///
/// # Example
///
/// ```rust
/// use harel::builder::{state, StatechartBuilder};
///
/// let chart = StatechartBuilder::new()
///     .state(state("Off").initial())
///     .state(
///         state("On")
///             .parallel()
///             .child(state("Control").child(state("Idle").initial()))
///             .child(state("Display").child(state("Dark").initial())),
///     )
///     .build()
///     .unwrap();
///
/// assert!(chart.orthogonal("Idle", "Dark").unwrap());
/// assert_eq!(
///     chart.least_common_ancestor(["Idle", "Dark"]).unwrap().as_str(),
///     "On",
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Chart {
    definition: Statechart,
    nodes: HashMap<StateLabel, Node>,
}

impl Chart {
    /// Normalize and validate a raw statechart, then index it.
    ///
    /// This is the only way to obtain a `Chart`: semantic queries are
    /// answered exclusively over trees that passed the structural
    /// rules.
    pub fn new(definition: Statechart) -> Result<Self, ValidationError> {
        let definition = normalize(definition);
        validate(&definition)?;

        let mut nodes = HashMap::new();
        let mut stack: Vec<(Option<StateLabel>, &State)> = vec![(None, &definition.root)];
        while let Some((parent, state)) = stack.pop() {
            nodes.insert(
                state.label.clone(),
                Node {
                    kind: state.kind,
                    is_initial: state.is_initial,
                    parent,
                    children: state.children.iter().map(|c| c.label.clone()).collect(),
                },
            );
            for child in &state.children {
                stack.push((Some(state.label.clone()), child));
            }
        }

        debug!(
            states = nodes.len(),
            transitions = definition.transitions.len(),
            "statechart validated"
        );
        Ok(Chart { definition, nodes })
    }

    /// The underlying, immutable statechart definition.
    pub fn definition(&self) -> &Statechart {
        &self.definition
    }

    /// Whether a state with this label exists.
    pub fn contains(&self, label: impl AsRef<str>) -> bool {
        self.nodes.contains_key(label.as_ref())
    }

    pub(crate) fn node(&self, label: &str) -> Result<&Node, SemanticsError> {
        self.nodes
            .get(label)
            .ok_or_else(|| SemanticsError::NotFound(StateLabel::new(label)))
    }
}
