use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::runtime::Environment;
use crate::tools::Tool;

/// An identifier. Two symbols are equal exactly when their names are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a symbol from its name
    pub fn new(name: impl Into<String>) -> Self {
        Symbol(name.into())
    }

    /// The symbol's name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

/// Runtime value representation
///
/// Parsed source and runtime data share this type: a parsed program is a
/// `List` of atoms and nested lists, and `quote` hands that structure back
/// unchanged.
#[derive(Debug, Clone)]
pub enum Value {
    // Primitives
    /// Null value (`nil`), distinct from `false`
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit integer value
    Int(i64),
    /// 64-bit floating-point value
    Float(f64),
    /// String value
    String(String),
    /// Symbol (identifier)
    Symbol(Symbol),

    /// Ordered sequence of values (reference-counted, never mutated in place)
    List(Arc<Vec<Value>>),

    /// Lambda function value (closure)
    Function {
        /// Parameter names, bound positionally at call time
        params: Vec<String>,
        /// Unevaluated body expression
        body: Arc<Value>,
        /// Snapshot of the defining environment
        closure: Arc<Environment>,
        /// Name given by `defn`; bound to the function itself on every call
        name: Option<String>,
    },

    /// Built-in function
    Builtin(Arc<dyn Tool>),
}

impl Value {
    /// Creates a list value from a vector of values
    pub fn list(values: Vec<Value>) -> Self {
        Value::List(Arc::new(values))
    }

    /// Creates a symbol value
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(Symbol::new(name))
    }

    /// Creates a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> String {
        match self {
            Value::Null => "nil".to_string(),
            Value::Bool(_) => "bool".to_string(),
            Value::Int(_) => "int".to_string(),
            Value::Float(_) => "float".to_string(),
            Value::String(_) => "string".to_string(),
            Value::Symbol(_) => "symbol".to_string(),
            Value::List(_) => "list".to_string(),
            Value::Function { .. } => "function".to_string(),
            Value::Builtin(_) => "builtin".to_string(),
        }
    }

    /// Only `false` and `nil` are falsy; `0`, `""` and `()` are all truthy
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Bool(false))
    }

    /// Returns true for closures and built-ins
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function { .. } | Value::Builtin(_))
    }

    /// Applies the evaluation-time unwrapping rule: a one-element list stands
    /// for its element. Empty lists and everything else are returned as is.
    pub fn unwrapped(&self) -> &Value {
        match self {
            Value::List(items) if items.len() == 1 => &items[0],
            other => other,
        }
    }

    // Type conversion methods

    /// Converts value to a 64-bit integer
    pub fn as_int(&self) -> Result<i64> {
        match self {
            Value::Int(n) => Ok(*n),
            _ => Err(Error::type_error("int", self.type_name())),
        }
    }

    /// Converts a numeric value to a 64-bit float
    pub fn as_float(&self) -> Result<f64> {
        match self {
            Value::Float(f) => Ok(*f),
            Value::Int(n) => Ok(*n as f64),
            _ => Err(Error::type_error("number", self.type_name())),
        }
    }

    /// Returns a reference to the string value
    pub fn as_string(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(Error::type_error("string", self.type_name())),
        }
    }

    /// Returns the elements of a list value
    pub fn as_list(&self) -> Result<&[Value]> {
        match self {
            Value::List(items) => Ok(items),
            _ => Err(Error::type_error("list", self.type_name())),
        }
    }

    /// Renders the value as it would be written in source: lists as
    /// `(a b c)`, everything else as its `Display` form
    pub fn source_text(&self) -> String {
        match self {
            Value::List(items) => {
                let parts: Vec<String> = items.iter().map(Value::source_text).collect();
                format!("({})", parts.join(" "))
            }
            other => other.to_string(),
        }
    }

    /// Returns the symbol name if this value is a symbol
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(sym) => Some(sym.name()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(fl) => write!(f, "{:?}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Symbol(sym) => write!(f, "{}", sym),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, val) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", val)?;
                }
                write!(f, "]")
            }
            Value::Function { params, name, .. } => match name {
                Some(name) => write!(f, "<function {} ({})>", name, params.join(" ")),
                None => write!(f, "<lambda ({})>", params.join(" ")),
            },
            Value::Builtin(tool) => write!(f, "<builtin {}>", tool.name()),
        }
    }
}

// Structural equality; this is what the `=` built-in compares with.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                (*a as f64) == *b
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            // Functions compared by identity (pointer equality)
            (Value::Function { body: a, .. }, Value::Function { body: b, .. }) => Arc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a.name() == b.name(),
            _ => false,
        }
    }
}

impl PartialEq<Vec<Value>> for Value {
    fn eq(&self, other: &Vec<Value>) -> bool {
        match self {
            Value::List(items) => items.as_ref() == other,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::list(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "nil");
        assert_eq!(Value::Bool(true).type_name(), "bool");
        assert_eq!(Value::Int(42).type_name(), "int");
        assert_eq!(Value::Float(2.71).type_name(), "float");
        assert_eq!(Value::string("test").type_name(), "string");
        assert_eq!(Value::symbol("x").type_name(), "symbol");
        assert_eq!(Value::list(vec![]).type_name(), "list");
    }

    #[test]
    fn test_truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Int(0).is_truthy());
        assert!(Value::Float(0.0).is_truthy());
        assert!(Value::string("").is_truthy());
        assert!(Value::list(vec![]).is_truthy());
    }

    #[test]
    fn test_symbol_equality_is_by_name() {
        assert_eq!(Value::symbol("abc"), Value::Symbol(Symbol::from("abc")));
        assert_ne!(Value::symbol("abc"), Value::string("abc"));
    }

    #[test]
    fn test_numeric_equality_crosses_int_and_float() {
        assert_eq!(Value::Int(1), Value::Float(1.0));
        assert_ne!(Value::Int(1), Value::Float(1.5));
        assert_ne!(Value::Int(0), Value::Bool(false));
        assert_ne!(Value::Null, Value::Bool(false));
    }

    #[test]
    fn test_unwrapping_rule() {
        let single = Value::list(vec![Value::Int(7)]);
        assert_eq!(single.unwrapped(), &Value::Int(7));

        let empty = Value::list(vec![]);
        assert_eq!(empty.unwrapped(), &Value::list(vec![]));

        let pair = Value::list(vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(pair.unwrapped(), &pair);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Value::Int(42).as_int().unwrap(), 42);
        assert_eq!(Value::Int(42).as_float().unwrap(), 42.0);
        assert!(Value::Float(1.5).as_int().is_err());
        assert_eq!(Value::string("hi").as_string().unwrap(), "hi");
        assert!(Value::Int(1).as_list().is_err());
        assert_eq!(Value::symbol("x").as_symbol(), Some("x"));
    }

    #[test]
    fn test_display() {
        let list = Value::list(vec![
            Value::Int(1),
            Value::Float(2.0),
            Value::string("s"),
            Value::symbol("sym"),
            Value::Null,
            Value::list(vec![Value::Bool(true)]),
        ]);
        assert_eq!(list.to_string(), r#"[1, 2.0, "s", sym, nil, [true]]"#);
        assert_eq!(list.source_text(), r#"(1 2.0 "s" sym nil (true))"#);
        assert_eq!(Value::list(vec![]).source_text(), "()");
    }
}
