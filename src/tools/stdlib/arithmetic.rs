//! Arithmetic tools
//!
//! `+ - * /` are variadic left folds starting from the first argument, so
//! `(- 10 3 2)` is `(10 - 3) - 2` and `(- 5)` is just `5`. With no
//! arguments the result is `nil`.

use crate::error::{Error, Result};
use crate::runtime::Value;
use crate::tools::{Tool, ToolRegistry};

/// Register arithmetic tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(ArithmeticTool::new(ArithOp::Add));
    registry.register(ArithmeticTool::new(ArithOp::Sub));
    registry.register(ArithmeticTool::new(ArithOp::Mul));
    registry.register(ArithmeticTool::new(ArithOp::Div));
}

/// The four folding operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl ArithOp {
    /// Symbol the operator is bound to
    pub fn symbol(&self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        }
    }

    /// Applies the operator to one pair of operands
    pub fn apply(&self, left: &Value, right: &Value) -> Result<Value> {
        match (left, right) {
            (Value::Int(a), Value::Int(b)) => self.apply_int(*a, *b).map(Value::Int),
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                Ok(Value::Float(self.apply_float(left.as_float()?, right.as_float()?)))
            }
            (Value::String(a), Value::String(b)) if *self == ArithOp::Add => {
                Ok(Value::String(format!("{}{}", a, b)))
            }
            (Value::List(a), Value::List(b)) if *self == ArithOp::Add => {
                let mut joined = Vec::with_capacity(a.len() + b.len());
                joined.extend(a.iter().cloned());
                joined.extend(b.iter().cloned());
                Ok(Value::list(joined))
            }
            _ => Err(Error::InvalidOperation {
                op: self.symbol().to_string(),
                left_type: left.type_name(),
                right_type: right.type_name(),
            }),
        }
    }

    fn apply_int(&self, a: i64, b: i64) -> Result<i64> {
        let result = match self {
            ArithOp::Add => a.checked_add(b),
            ArithOp::Sub => a.checked_sub(b),
            ArithOp::Mul => a.checked_mul(b),
            ArithOp::Div => return floor_div(a, b),
        };
        result.ok_or_else(|| Error::IntegerOverflow {
            op: self.symbol().to_string(),
        })
    }

    fn apply_float(&self, a: f64, b: f64) -> f64 {
        match self {
            ArithOp::Add => a + b,
            ArithOp::Sub => a - b,
            ArithOp::Mul => a * b,
            ArithOp::Div => a / b,
        }
    }
}

/// Integer division rounding toward negative infinity
fn floor_div(a: i64, b: i64) -> Result<i64> {
    if b == 0 {
        return Err(Error::DivisionByZero);
    }
    let q = a.checked_div(b).ok_or_else(|| Error::IntegerOverflow {
        op: "/".to_string(),
    })?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        Ok(q - 1)
    } else {
        Ok(q)
    }
}

/// Left-folding arithmetic built-in
pub struct ArithmeticTool {
    op: ArithOp,
}

impl ArithmeticTool {
    /// Creates the tool for one operator
    pub fn new(op: ArithOp) -> Self {
        ArithmeticTool { op }
    }
}

impl Tool for ArithmeticTool {
    fn name(&self) -> &str {
        self.op.symbol()
    }

    fn description(&self) -> &str {
        match self.op {
            ArithOp::Add => "Sum of numbers, or concatenation of strings or lists",
            ArithOp::Sub => "Subtract the remaining arguments from the first",
            ArithOp::Mul => "Product of numbers",
            ArithOp::Div => "Divide the first argument by the rest (integer division floors)",
        }
    }

    fn execute(&self, args: &[Value]) -> Result<Value> {
        let mut rest = args.iter();
        let first = match rest.next() {
            Some(v) => v.clone(),
            None => return Ok(Value::Null),
        };
        rest.try_fold(first, |acc, x| self.op.apply(&acc, x))
    }
}
