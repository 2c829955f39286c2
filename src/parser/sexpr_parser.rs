use lazy_static::lazy_static;
use regex::Regex;

use crate::lexer::{Token, TokenKind};
use crate::runtime::Value;

lazy_static! {
    static ref INTEGER: Regex = Regex::new(r"^-?[0-9]+$").unwrap();
    static ref DECIMAL: Regex = Regex::new(r"^[0-9]+\.[0-9]+$").unwrap();
}

/// S-expression parser
///
/// Builds a nested list tree from a token stream. Parsing never fails:
/// unbalanced input yields a best-effort tree. Callers that want to reject
/// imbalance run [`check_balance`](super::check_balance) first.
pub struct SExprParser {
    tokens: Vec<Token>,
}

impl SExprParser {
    /// Creates a new S-expression parser
    pub fn new(tokens: Vec<Token>) -> Self {
        SExprParser { tokens }
    }

    /// Parses the tokens into a top-level list
    pub fn parse(&self) -> Value {
        let mut root: Vec<Value> = Vec::new();
        let mut depth: isize = 0;

        for token in &self.tokens {
            match token.kind {
                TokenKind::LeftParen => {
                    Self::current_list(&mut root, depth).push(Value::list(Vec::new()));
                    depth += 1;
                }
                TokenKind::RightParen => depth -= 1,
                TokenKind::Atom => {
                    Self::current_list(&mut root, depth).push(typeify(&token.lexeme));
                }
            }
        }

        if depth != 0 {
            tracing::debug!(depth, "parsed unbalanced input");
        }

        let tree = Value::list(root);
        tracing::trace!(%tree, "parsed");
        tree
    }

    /// Descends `depth` times into the last element, starting at the root.
    /// Stops early when the last element is not a list (or there is none),
    /// and a negative depth stays at the root.
    fn current_list(root: &mut Vec<Value>, depth: isize) -> &mut Vec<Value> {
        let mut current = root;
        for _ in 0..depth.max(0) {
            match current.last() {
                Some(Value::List(_)) => {}
                _ => break,
            }
            current = match current.last_mut() {
                Some(Value::List(items)) => std::sync::Arc::make_mut(items),
                _ => unreachable!("checked above"),
            };
        }
        current
    }
}

/// Classifies atom text into a value. First match wins: integer, decimal,
/// string (anything containing `"`), `nil`, `false`, `true`, symbol.
pub fn typeify(text: &str) -> Value {
    if INTEGER.is_match(text) {
        // Out of i64 range: keep the magnitude as a float
        return match text.parse::<i64>() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Float(text.parse::<f64>().unwrap_or(f64::NAN)),
        };
    }

    if DECIMAL.is_match(text) {
        if let Ok(f) = text.parse::<f64>() {
            return Value::Float(f);
        }
    }

    if text.contains('"') {
        let s = text.strip_prefix('"').unwrap_or(text);
        let s = s.strip_suffix('"').unwrap_or(s);
        return Value::string(s);
    }

    match text {
        "nil" => Value::Null,
        "false" => Value::Bool(false),
        "true" => Value::Bool(true),
        _ => Value::symbol(text),
    }
}
