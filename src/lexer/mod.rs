//! Lexical analysis for lispy
//!
//! Converts source text into a flat stream of parenthesis and atom tokens.

mod sexpr_scanner;
mod token;

pub use sexpr_scanner::{tokenize, SExprScanner};
pub use token::{Token, TokenKind};
