use serde::Serialize;

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token
    pub lexeme: String,
}

impl Token {
    /// Creates a token, classifying the lexeme
    pub fn new(lexeme: impl Into<String>) -> Self {
        let lexeme = lexeme.into();
        Token {
            kind: TokenKind::classify(&lexeme),
            lexeme,
        }
    }
}

/// Token classes seen by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Any other run of non-whitespace text
    Atom,
}

impl TokenKind {
    /// Classify a lexeme. Parentheses are always standalone tokens.
    pub fn classify(lexeme: &str) -> TokenKind {
        match lexeme {
            "(" => TokenKind::LeftParen,
            ")" => TokenKind::RightParen,
            _ => TokenKind::Atom,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
