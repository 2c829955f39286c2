//! Error types for the lispy interpreter

use thiserror::Error;

/// Interpreter errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Syntax errors
    /// Unbalanced parentheses in the source text
    ///
    /// **Triggered by:** An unmatched `)` or a `(` that is never closed
    /// **Example:** `(+ 1 (* 2 3)` (missing closing parenthesis)
    #[error("Syntax error at line {line}, column {col}: {message}")]
    SyntaxError {
        /// Line number where error occurred (1-indexed)
        line: usize,
        /// Column number where error occurred (1-indexed)
        col: usize,
        /// Error description
        message: String,
    },

    /// Special form with a missing or ill-shaped part
    ///
    /// **Triggered by:** `(define 5 3)`, `(lambda x x)`, `(defn (x) x)`
    #[error("Malformed {form} form: {reason}")]
    MalformedForm {
        /// Special form keyword
        form: String,
        /// What is wrong with it
        reason: String,
    },

    // Runtime errors
    /// Reference to a symbol with no binding
    ///
    /// **Triggered by:** Using a symbol before `define`/`defn` bound it
    /// **Example:** `(+ x 1)` when `x` was never defined
    #[error("Unbound symbol: {name}")]
    UnboundSymbol {
        /// Symbol name
        name: String,
    },

    /// Operator position of an application is unbound, `nil` or `false`
    ///
    /// **Example:** `(frobnicate 1 2)`
    #[error("Unrecognized operator {operator}")]
    UnrecognizedOperator {
        /// Literal text of the operator expression
        operator: String,
    },

    /// Attempt to call a value that is not callable
    #[error("Value is not callable: {type_name}")]
    NotCallable {
        /// Type of non-callable value
        type_name: String,
    },

    /// Type mismatch error
    ///
    /// **Triggered by:** A built-in receiving a value of the wrong kind
    /// **Example:** `(first 5)`, `(- "a" 1)`
    #[error("Type error: expected {expected}, got {got}")]
    TypeError {
        /// Expected type
        expected: String,
        /// Actual type
        got: String,
    },

    /// Invalid comparison between incompatible types
    ///
    /// **Example:** `(< "a" 1)`
    #[error("Invalid comparison between types {left_type} and {right_type}")]
    InvalidComparison {
        /// Left operand type
        left_type: String,
        /// Right operand type
        right_type: String,
    },

    /// Invalid operation for given types
    ///
    /// **Example:** `(* "a" 2)`, `(+ (quote (1)) 2)`
    #[error("Invalid operation: {op} on types {left_type} and {right_type}")]
    InvalidOperation {
        /// Operation name
        op: String,
        /// Left operand type
        left_type: String,
        /// Right operand type
        right_type: String,
    },

    /// Built-in called with the wrong number of arguments
    #[error("Wrong number of arguments for {name}: expected {expected}, got {got}")]
    ArityMismatch {
        /// Built-in name
        name: String,
        /// Expected argument count description
        expected: String,
        /// Actual argument count
        got: usize,
    },

    /// Integer division by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Checked integer arithmetic overflowed
    #[error("Integer overflow in {op}")]
    IntegerOverflow {
        /// Operator name
        op: String,
    },

    // Resource errors
    /// Closure calls nested deeper than the configured limit
    #[error("Recursion limit exceeded (max call depth: {limit})")]
    RecursionLimit {
        /// Configured maximum call depth
        limit: usize,
    },
}

/// Coarse error classification used to tag diagnostics in the front ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed source text or special form
    Syntax,
    /// Unbound symbol
    Name,
    /// Bad operator position
    Operator,
    /// Value of the wrong kind or count
    Type,
    /// Division by zero, overflow
    Arithmetic,
    /// Host resource limits
    Resource,
}

impl ErrorCategory {
    /// Tag printed in front of a diagnostic line, e.g. `TypeError`
    pub fn tag(&self) -> &'static str {
        match self {
            ErrorCategory::Syntax => "SyntaxError",
            ErrorCategory::Name => "NameError",
            ErrorCategory::Operator => "OperatorError",
            ErrorCategory::Type => "TypeError",
            ErrorCategory::Arithmetic => "ArithmeticError",
            ErrorCategory::Resource => "ResourceError",
        }
    }
}

impl Error {
    /// Create a type error from an expected kind and the offending value's type
    pub fn type_error(expected: impl Into<String>, got: impl Into<String>) -> Self {
        Error::TypeError {
            expected: expected.into(),
            got: got.into(),
        }
    }

    /// Create a malformed special form error
    pub fn malformed(form: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::MalformedForm {
            form: form.into(),
            reason: reason.into(),
        }
    }

    /// Classify the error for diagnostics
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::SyntaxError { .. } => ErrorCategory::Syntax,
            Error::MalformedForm { .. } => ErrorCategory::Syntax,

            Error::UnboundSymbol { .. } => ErrorCategory::Name,

            Error::UnrecognizedOperator { .. } => ErrorCategory::Operator,
            Error::NotCallable { .. } => ErrorCategory::Operator,

            Error::TypeError { .. } => ErrorCategory::Type,
            Error::InvalidComparison { .. } => ErrorCategory::Type,
            Error::InvalidOperation { .. } => ErrorCategory::Type,
            Error::ArityMismatch { .. } => ErrorCategory::Type,

            Error::DivisionByZero => ErrorCategory::Arithmetic,
            Error::IntegerOverflow { .. } => ErrorCategory::Arithmetic,

            Error::RecursionLimit { .. } => ErrorCategory::Resource,
        }
    }

    /// Diagnostic line as printed by the REPL: `$TypeError: ...`
    pub fn diagnostic(&self) -> String {
        format!("${}: {}", self.category().tag(), self)
    }
}

/// Result type for lispy operations
pub type Result<T> = std::result::Result<T, Error>;
