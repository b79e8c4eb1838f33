//! Token model pairing a lexeme with its category and source span.
//!
//! Tokens are immutable once the tokenizer creates them. Two tokens are equal
//! when their categories match and their lexemes match ignoring ASCII case;
//! the span is carried along for diagnostics and for rebuilding string
//! literals, but never takes part in equality.
use crate::sql::token_kind::TokenKind;

/// A lexeme, its category, and its `[start, end)` byte span in the source.
///
/// Fields are read through accessors; a token cannot be altered after
/// construction.
///
/// Invariants:
/// - `end >= start`
/// - for tokens produced by `lex`, `source[start..end] == value`
#[derive(Debug, Clone)]
pub struct Token {
    value: String,
    kind: TokenKind,
    start: usize,
    end: usize,
}

/// Past-the-end token handed out by the cursor.
pub static END_OF_INPUT: Token = Token {
    value: String::new(),
    kind: TokenKind::EndOfInput,
    start: 0,
    end: 0,
};

impl Token {
    /// Construct a token spanning `0..value.len()`.
    pub fn new(value: impl Into<String>, kind: TokenKind) -> Self {
        Self::spanned(value, kind, 0)
    }

    /// Construct a token whose lexeme starts at byte `start` of the source.
    pub fn spanned(value: impl Into<String>, kind: TokenKind, start: usize) -> Self {
        let value = value.into();
        let end = start + value.len();
        Self {
            value,
            kind,
            start,
            end,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Case-insensitive comparison of the lexeme against `expected`.
    pub fn matches(&self, expected: &str) -> bool {
        self.value.eq_ignore_ascii_case(expected)
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.matches(&other.value)
    }
}

impl Eq for Token {}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.value)
    }
}
