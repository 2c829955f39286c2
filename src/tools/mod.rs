//! Built-in function system for lispy
//!
//! Built-ins are tools: named values implementing [`Tool`], collected in a
//! [`ToolRegistry`] and seeded into the evaluator's global environment.
//! They have no special-form status and are applied like any closure.

pub mod stdlib;

use crate::error::{Error, Result};
use crate::runtime::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Tool trait - every built-in implements this
pub trait Tool: Send + Sync {
    /// Name the tool is bound to in the global environment
    fn name(&self) -> &str;

    /// Tool description
    fn description(&self) -> &str;

    /// Execute the tool on already-evaluated arguments.
    /// Fixed-arity tools may assume [`arity`](Tool::arity) has been checked.
    fn execute(&self, args: &[Value]) -> Result<Value>;

    /// Check if tool requires specific number of arguments
    fn arity(&self) -> Option<usize> {
        None // None means variadic
    }

    /// Checks the declared arity, then executes
    fn call(&self, args: &[Value]) -> Result<Value> {
        if let Some(expected) = self.arity() {
            expect_arity(self.name(), args, expected)?;
        }
        self.execute(args)
    }
}

impl fmt::Debug for dyn Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tool({})", self.name())
    }
}

/// Fails with [`Error::ArityMismatch`] unless exactly `expected` arguments were passed
fn expect_arity(name: &str, args: &[Value], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(Error::ArityMismatch {
            name: name.to_string(),
            expected: expected.to_string(),
            got: args.len(),
        });
    }
    Ok(())
}

/// Tool registry
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create new registry with standard library
    pub fn new() -> Self {
        let mut registry = ToolRegistry {
            tools: HashMap::new(),
        };

        // Register all standard library tools
        stdlib::register_all(&mut registry);

        registry
    }

    /// Create empty registry (for testing)
    pub fn empty() -> Self {
        ToolRegistry {
            tools: HashMap::new(),
        }
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Arc::new(tool));
    }

    /// Get tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Check if tool exists
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// List all tool names
    pub fn list_tools(&self) -> Vec<String> {
        let mut names: Vec<_> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get tool count
    pub fn count(&self) -> usize {
        self.tools.len()
    }

    /// Iterate over registered tools as callable values
    pub fn values(&self) -> impl Iterator<Item = (&str, Value)> + '_ {
        self.tools
            .iter()
            .map(|(name, tool)| (name.as_str(), Value::Builtin(tool.clone())))
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
