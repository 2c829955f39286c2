//! Runtime values, environments and the evaluator

mod environment;
mod lisp_evaluator;
mod stack;
mod value;

pub use environment::Environment;
pub use lisp_evaluator::{EvaluatorConfig, LispEvaluator, SpecialForm};
pub use value::{Symbol, Value};
