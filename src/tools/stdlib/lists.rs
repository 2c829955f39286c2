//! List tools

use crate::error::Result;
use crate::runtime::Value;
use crate::tools::{Tool, ToolRegistry};

/// Register list tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(FirstTool);
    registry.register(LastTool);
    registry.register(DropTool);
    registry.register(ConsTool);
}

/// `first` - head of a list, `nil` when empty
pub struct FirstTool;

impl Tool for FirstTool {
    fn name(&self) -> &str {
        "first"
    }

    fn description(&self) -> &str {
        "First element of a list"
    }

    fn execute(&self, args: &[Value]) -> Result<Value> {
        Ok(args[0].as_list()?.first().cloned().unwrap_or(Value::Null))
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }
}

/// `last` - final element of a list, `nil` when empty
pub struct LastTool;

impl Tool for LastTool {
    fn name(&self) -> &str {
        "last"
    }

    fn description(&self) -> &str {
        "Last element of a list"
    }

    fn execute(&self, args: &[Value]) -> Result<Value> {
        Ok(args[0].as_list()?.last().cloned().unwrap_or(Value::Null))
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }
}

/// `drop` - the list without its first element
///
/// Example: `(drop (quote (1 2 3)))` returns `[2, 3]`; `(drop (quote ()))` is `[]`
pub struct DropTool;

impl Tool for DropTool {
    fn name(&self) -> &str {
        "drop"
    }

    fn description(&self) -> &str {
        "All elements of a list but the first"
    }

    fn execute(&self, args: &[Value]) -> Result<Value> {
        let items = args[0].as_list()?;
        Ok(Value::list(items.iter().skip(1).cloned().collect()))
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }
}

/// `cons` - new list with an element prepended
///
/// Example: `(cons 1 (quote (2 3)))` returns `[1, 2, 3]`
pub struct ConsTool;

impl Tool for ConsTool {
    fn name(&self) -> &str {
        "cons"
    }

    fn description(&self) -> &str {
        "Prepend an element to a list"
    }

    fn execute(&self, args: &[Value]) -> Result<Value> {
        let tail = args[1].as_list()?;

        let mut items = Vec::with_capacity(tail.len() + 1);
        items.push(args[0].clone());
        items.extend(tail.iter().cloned());
        Ok(Value::list(items))
    }

    fn arity(&self) -> Option<usize> {
        Some(2)
    }
}
