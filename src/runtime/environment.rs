use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::runtime::Value;

/// Flat symbol table
///
/// There is no parent chain. A closure captures a full copy of the
/// environment it was created in, and every call starts from a fresh copy of
/// that capture, so bindings made later in the outer environment are never
/// seen by the closure and `define` inside a call never leaks out.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// Variables visible in this environment
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates a new empty environment
    pub fn new() -> Self {
        Environment {
            variables: HashMap::new(),
        }
    }

    /// Binds `name` to `value`, replacing any previous binding
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Gets the value bound to `name`
    pub fn get(&self, name: &str) -> Result<Value> {
        self.lookup(name).ok_or_else(|| Error::UnboundSymbol {
            name: name.to_string(),
        })
    }

    /// Gets the value bound to `name`, or `None` when unbound
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.variables.get(name).cloned()
    }

    /// Checks if a binding exists
    pub fn exists(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Returns a detached copy for closure capture
    pub fn snapshot(&self) -> Environment {
        self.clone()
    }

    /// All bound names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.variables.keys().cloned().collect();
        names.sort();
        names
    }
}
