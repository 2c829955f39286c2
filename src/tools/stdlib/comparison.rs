//! Equality and ordering tools

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::runtime::Value;
use crate::tools::{Tool, ToolRegistry};

/// Register comparison tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(EqualTool);
    registry.register(CompareTool::new(CompareOp::Gt));
    registry.register(CompareTool::new(CompareOp::GtEq));
    registry.register(CompareTool::new(CompareOp::Lt));
    registry.register(CompareTool::new(CompareOp::LtEq));
}

/// `=` - true iff every argument is structurally equal to the first
///
/// Usage: `(= a b ...) -> bool`
/// Example: `(= 5 5 5)` returns `true`; `(=)` and `(= x)` are `true`
pub struct EqualTool;

impl Tool for EqualTool {
    fn name(&self) -> &str {
        "="
    }

    fn description(&self) -> &str {
        "Structural equality of all arguments"
    }

    fn execute(&self, args: &[Value]) -> Result<Value> {
        let all_equal = match args.split_first() {
            Some((first, rest)) => rest.iter().all(|v| v == first),
            None => true,
        };
        Ok(Value::Bool(all_equal))
    }
}

/// Binary ordering operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
}

impl CompareOp {
    /// Symbol the operator is bound to
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Gt => ">",
            CompareOp::GtEq => ">=",
            CompareOp::Lt => "<",
            CompareOp::LtEq => "<=",
        }
    }

    fn holds(&self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::GtEq => ordering != Ordering::Less,
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::LtEq => ordering != Ordering::Greater,
        }
    }
}

/// Orders two numbers (ints and floats mix) or two strings
pub fn compare_values(left: &Value, right: &Value) -> Result<Option<Ordering>> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Some(a.cmp(b))),
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            Ok(left.as_float()?.partial_cmp(&right.as_float()?))
        }
        (Value::String(a), Value::String(b)) => Ok(Some(a.cmp(b))),
        _ => Err(Error::InvalidComparison {
            left_type: left.type_name(),
            right_type: right.type_name(),
        }),
    }
}

/// `> >= < <=` - binary comparison
pub struct CompareTool {
    op: CompareOp,
}

impl CompareTool {
    /// Creates the tool for one operator
    pub fn new(op: CompareOp) -> Self {
        CompareTool { op }
    }
}

impl Tool for CompareTool {
    fn name(&self) -> &str {
        self.op.symbol()
    }

    fn description(&self) -> &str {
        "Compare two numbers or two strings"
    }

    fn execute(&self, args: &[Value]) -> Result<Value> {
        // NaN compares as unordered, which makes every operator false
        let holds = compare_values(&args[0], &args[1])?
            .map(|ordering| self.op.holds(ordering))
            .unwrap_or(false);
        Ok(Value::Bool(holds))
    }

    fn arity(&self) -> Option<usize> {
        Some(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmp(op: CompareOp, a: Value, b: Value) -> Result<Value> {
        CompareTool::new(op).execute(&[a, b])
    }

    #[test]
    fn test_equality() {
        let eq = EqualTool;
        assert_eq!(
            eq.execute(&[Value::Int(5), Value::Int(5), Value::Int(5)]).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            eq.execute(&[Value::Int(5), Value::Int(5), Value::Int(4)]).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            eq.execute(&[Value::Null, Value::Null]).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            eq.execute(&[Value::Bool(false), Value::Bool(true)]).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(eq.execute(&[]).unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_equality_on_lists() {
        let a = Value::list(vec![Value::Int(1), Value::symbol("x")]);
        let b = Value::list(vec![Value::Int(1), Value::symbol("x")]);
        assert_eq!(EqualTool.execute(&[a, b]).unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_ordering() {
        assert_eq!(cmp(CompareOp::Gt, Value::Int(4), Value::Int(3)).unwrap(), Value::Bool(true));
        assert_eq!(cmp(CompareOp::Gt, Value::Int(4), Value::Int(4)).unwrap(), Value::Bool(false));
        assert_eq!(cmp(CompareOp::GtEq, Value::Int(4), Value::Int(4)).unwrap(), Value::Bool(true));
        assert_eq!(cmp(CompareOp::Lt, Value::Int(3), Value::Int(4)).unwrap(), Value::Bool(true));
        assert_eq!(cmp(CompareOp::LtEq, Value::Int(3), Value::Int(3)).unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_mixed_numbers_and_strings() {
        assert_eq!(
            cmp(CompareOp::Lt, Value::Int(1), Value::Float(1.5)).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            cmp(CompareOp::Lt, Value::string("apple"), Value::string("banana")).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn test_incompatible_types() {
        assert_eq!(
            cmp(CompareOp::Lt, Value::string("a"), Value::Int(1)),
            Err(Error::InvalidComparison {
                left_type: "string".to_string(),
                right_type: "int".to_string(),
            })
        );
    }

    #[test]
    fn test_arity() {
        let err = CompareTool::new(CompareOp::Gt)
            .call(&[Value::Int(1), Value::Int(2), Value::Int(3)])
            .unwrap_err();
        assert!(matches!(err, Error::ArityMismatch { got: 3, .. }));
    }
}
