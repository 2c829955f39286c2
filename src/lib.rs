//! # lispy - A Minimal Lisp
//!
//! A small Lisp interpreter: a whitespace tokenizer, a depth-tracking list
//! parser, and a tree-walking evaluator with closures, named recursive
//! functions and a handful of built-ins.
//!
//! ## Quick Start
//!
//! ```rust
//! use lispy::{Evaluator, Value};
//!
//! # fn main() -> lispy::Result<()> {
//! let mut evaluator = Evaluator::new();
//!
//! evaluator.evaluate("(define r 10)")?;
//! let result = evaluator.evaluate("(* r r)")?;
//!
//! assert_eq!(result, Value::Int(100));
//! # Ok(())
//! # }
//! ```
//!
//! ### Functions
//!
//! ```rust
//! use lispy::{Evaluator, Value};
//!
//! # fn main() -> lispy::Result<()> {
//! let mut evaluator = Evaluator::new();
//! evaluator.evaluate("(defn fact (n) (if (<= n 1) 1 (* n (fact (- n 1)))))")?;
//!
//! assert_eq!(evaluator.evaluate("(fact 5)")?, Value::Int(120));
//! # Ok(())
//! # }
//! ```
//!
//! ### Whole Programs
//!
//! [`LispEvaluator::load`] runs every top-level form of a source file in order
//! and returns the value of the last one:
//!
//! ```rust
//! use lispy::{Evaluator, Value};
//!
//! # fn main() -> lispy::Result<()> {
//! let program = r#"
//! (define xs (quote (3 1 2)))
//! (defn sum (l) (if (= l (quote ())) 0 (+ (first l) (sum (drop l)))))
//! (sum xs)
//! "#;
//!
//! let mut evaluator = Evaluator::new();
//! assert_eq!(evaluator.load(program)?, Value::Int(6));
//! # Ok(())
//! # }
//! ```
//!
//! ## Language Overview
//!
//! ### Data Types
//!
//! - **Atoms**: integers, floats, strings, `true`, `false`, `nil`, symbols
//! - **Lists**: `(1 2 3)`, shared and immutable once built
//! - **Functions**: closures from `lambda`/`defn`, and built-ins
//!
//! ### Special Forms
//!
//! - `(lambda (params...) body)` - Anonymous function
//! - `(defn name (params...) body)` - Named, recursive function
//! - `(doall e1 ... en)` - Sequential execution, last value returned
//! - `(if pred then else)` - Only `false` and `nil` are falsy
//! - `(define name expr)` - Binding
//! - `(quote expr)` / `(eval expr)`
//!
//! ### Built-in Functions
//!
//! - **Arithmetic**: `(+ 1 2 3)`, `(- 10 3)`, `(* 2 3)`, `(/ 10 2)`
//! - **Comparison**: `(< x y)`, `(> x y)`, `(<= x y)`, `(>= x y)`, `(= x y ...)`
//! - **Lists**: `first`, `last`, `drop`, `cons`
//!
//! A list with a single element evaluates as that element, so `(5)` is `5`
//! and a zero-argument call has to be written with a dummy argument.
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Scanner → Tokens → Parser → Value tree → Evaluator → Result
//! ```
//!
//! - [`Scanner`] - Tokenizes source code into tokens
//! - [`Parser`] - Builds nested lists from tokens
//! - [`Evaluator`] - Evaluates the tree against an [`Environment`]
//! - [`Value`] - Runtime value representation
//! - [`ToolRegistry`] - Built-in functions
//!
//! ## Error Handling
//!
//! ```rust
//! use lispy::{Error, Evaluator};
//!
//! let mut evaluator = Evaluator::new();
//! let err = evaluator.evaluate("(/ 10 0)").unwrap_err();
//!
//! assert_eq!(err, Error::DivisionByZero);
//! assert_eq!(err.diagnostic(), "$ArithmeticError: Division by zero");
//! ```

/// Version of the lispy interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;
pub mod tools;

// Re-export main types
pub use error::{Error, ErrorCategory, Result};
pub use lexer::{tokenize, SExprScanner, Token, TokenKind};
pub use parser::{check_balance, parse, SExprParser};
pub use runtime::{Environment, EvaluatorConfig, LispEvaluator, SpecialForm, Symbol, Value};
pub use tools::{Tool, ToolRegistry};

/// Type alias for the S-expression scanner (lexer).
/// Converts raw source text into tokens for the parser.
pub type Scanner = SExprScanner;

/// Type alias for the S-expression parser.
/// Converts tokens into nested list values.
pub type Parser = SExprParser;

/// Type alias for the evaluator.
pub type Evaluator = LispEvaluator;
