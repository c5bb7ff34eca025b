//! Opaque machine context.
//!
//! The context is an ordered key-value document of structured values
//! (strings, numbers, booleans, nested maps). The engine never
//! interprets it; guards read it and actions mutate it in place.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered key-value document attached to a machine.
///
/// # Example
///
/// ```rust
/// use harel::core::Context;
///
/// let mut context = Context::new();
/// context.set("count", 0);
/// context.set("name", "turnstile");
/// assert_eq!(context.get("count"), Some(&0.into()));
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
    fields: Map<String, Value>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Context::default()
    }

    /// Read a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Write a field, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Remove a field, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.fields.iter()
    }
}

impl From<Map<String, Value>> for Context {
    fn from(fields: Map<String, Value>) -> Self {
        Context { fields }
    }
}
