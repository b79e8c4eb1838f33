//! Token categories assigned by the tokenizer's rule table.
//!
//! The set is deliberately coarse: the tokenizer only separates reserved
//! words and punctuation from identifiers and integers. Finer structure (a
//! name must start with a letter, a number is all digits) is checked
//! character by character in the grammar.

/// Category tag of a `Token`.
///
/// Displays as the bare variant name (`Reserved`, `Id`, ...), which is the
/// format the harness prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TokenKind {
    /// Whitespace. Matched by the rule table, never emitted.
    Discard,
    /// Identifier-like lexeme, including the `*` wildcard.
    Id,
    /// Unsigned integer literal.
    Int,
    /// Keyword or punctuation.
    Reserved,
    /// Sentinel returned by the cursor once the stream is exhausted.
    EndOfInput,
}

impl TokenKind {
    /// True for categories the tokenizer appends to its output.
    pub fn is_emitted(self) -> bool {
        !matches!(self, TokenKind::Discard | TokenKind::EndOfInput)
    }
}
