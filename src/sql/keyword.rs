//! Reserved words recognized by the tokenizer and matched by the grammar.
//!
//! The same enum feeds two places: the tokenizer builds one `Reserved` rule
//! per keyword (in `ALL` order) and grammar productions pass keywords to
//! `Parser::terminal`. Keeping both on one list means a keyword cannot be
//! tokenizable but unmatchable by name, or the reverse.
//!
//! Notes:
//! - `DELETE`, `SET`, `UPDATE` and `WHERE` are tokenized but no production
//!   consumes them yet.
//! - Matching is case-insensitive and only on a whole word, so `Selected`
//!   stays an identifier.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Delete,
    From,
    Insert,
    Into,
    Select,
    Set,
    Update,
    Where,
    Values,
}

impl Keyword {
    /// Every keyword, in rule-table order.
    pub const ALL: [Self; 9] = [
        Keyword::Delete,
        Keyword::From,
        Keyword::Insert,
        Keyword::Into,
        Keyword::Select,
        Keyword::Set,
        Keyword::Update,
        Keyword::Where,
        Keyword::Values,
    ];

    /// Canonical uppercase spelling.
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Delete => "DELETE",
            From => "FROM",
            Insert => "INSERT",
            Into => "INTO",
            Select => "SELECT",
            Set => "SET",
            Update => "UPDATE",
            Where => "WHERE",
            Values => "VALUES",
        }
    }

    /// Regex fragment matching this keyword as a whole, case-insensitive word.
    pub fn pattern(self) -> String {
        format!(r"(?i:{})\b", self.as_str())
    }
}

impl AsRef<str> for Keyword {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
