//! lispy parser module
//!
//! Parses the token stream into nested list values.

mod paren_checker;
mod sexpr_parser;

pub use paren_checker::{check_balance, ParenStats};
pub use sexpr_parser::{typeify, SExprParser};

use crate::lexer::tokenize;
use crate::runtime::Value;

/// Tokenizes and parses source text into a top-level list. Never fails.
pub fn parse(source: &str) -> Value {
    SExprParser::new(tokenize(source)).parse()
}
