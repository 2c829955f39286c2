use super::token::Token;

/// Scanner that splits raw source text into parenthesis and atom tokens
///
/// The whole input is expected to be wrapped in exactly one enclosing pair of
/// parentheses; that outer pair is stripped before splitting. Text without an
/// enclosing pair loses nothing but its outermost structure, and a bare atom
/// comes back as a single token.
pub struct SExprScanner {
    /// Source code
    source: String,
}

impl SExprScanner {
    /// Creates a new scanner from source code
    pub fn new(source: &str) -> Self {
        SExprScanner {
            source: source.to_string(),
        }
    }

    /// Scans all tokens from the source and returns them in order
    pub fn scan_tokens(&self) -> Vec<Token> {
        let tokens: Vec<Token> = self.lexemes().into_iter().map(Token::new).collect();
        tracing::trace!(count = tokens.len(), "scanned tokens");
        tokens
    }

    /// Splits the source into lexeme strings
    pub fn lexemes(&self) -> Vec<String> {
        let flat = self.source.replace('\n', " ");

        let mut body = flat.as_str();
        if let Some(rest) = body.strip_prefix('(') {
            body = rest;
        }
        if let Some(rest) = body.strip_suffix(')') {
            body = rest;
        }

        body.replace('(', " ( ")
            .replace(')', " ) ")
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

/// Tokenizes source text in one call
pub fn tokenize(source: &str) -> Vec<Token> {
    SExprScanner::new(source).scan_tokens()
}
