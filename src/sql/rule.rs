//! The tokenizer's ordered pattern table.
//!
//! Order is a first-match-wins priority list:
//! 1. whitespace (discarded)
//! 2. keywords, then punctuation
//! 3. the `*` wildcard, classified as an identifier
//! 4. integer literals
//! 5. the catch-all identifier pattern
//!
//! Moving a general pattern above a specific one silently reclassifies
//! keywords as identifiers. The table is compiled once and never changes.
use crate::sql::{keyword::Keyword, token_kind::TokenKind};
use regex::Regex;
use std::sync::LazyLock;

/// Punctuation lexemes, all classified `Reserved`.
pub const PUNCTUATION: [&str; 10] = ["(", ")", "[", "]", "+", "-", "=", ",", ".", "\""];

/// An anchored pattern and the category of whatever it matches.
#[derive(Debug)]
pub struct Rule {
    regex: Regex,
    pub kind: TokenKind,
}

impl Rule {
    /// Compile `pattern` anchored at the start of the input.
    pub fn new(pattern: &str, kind: TokenKind) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(&format!("^(?:{pattern})"))?,
            kind,
        })
    }

    /// Byte length of the non-empty prefix of `input` this rule matches.
    pub fn test(&self, input: &str) -> Option<usize> {
        self.regex
            .find(input)
            .map(|m| m.end())
            .filter(|&len| len > 0)
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// Source patterns of the rule table, in priority order.
pub fn rule_table() -> Vec<(String, TokenKind)> {
    let mut table = vec![(r"\s+".to_string(), TokenKind::Discard)];
    table.extend(
        Keyword::ALL
            .iter()
            .map(|kw| (kw.pattern(), TokenKind::Reserved)),
    );
    table.extend(
        PUNCTUATION
            .iter()
            .map(|p| (regex::escape(p), TokenKind::Reserved)),
    );
    table.push((r"\*".to_string(), TokenKind::Id));
    table.push(("[0-9]+".to_string(), TokenKind::Int));
    table.push(("[A-Za-z0-9_]+".to_string(), TokenKind::Id));
    table
}

/// The compiled, process-wide rule table.
pub static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    rule_table()
        .iter()
        .map(|(pattern, kind)| Rule::new(pattern, *kind))
        .collect::<Result<_, _>>()
        .expect("Built-in token patterns must compile")
});
