//! Pattern-table SQL tokenization.
//!
//! This module turns raw SQL text into the token stream consumed by the
//! backtracking parser. It is intentionally coarse: it only decides whether a
//! lexeme is a reserved word, an identifier, or an integer, leaving finer
//! structural checks to the grammar.
//!
//! Modules:
//! - `keyword`    : Reserved words shared by the rule table and the grammar.
//! - `token_kind` : Token categories (`Reserved`, `Id`, `Int`, ...).
//! - `token`      : Token struct pairing a lexeme with its category and span.
//! - `rule`       : The ordered, first-match-wins pattern table.
//! - `tokenizer`  : `lex`, producing a `Vec<Token>` or a lexical error.
//!
//! Example:
//! ```rust
//! use minsql::prelude::*;
//!
//! let tokens = lex("SELECT a, b FROM my_table").unwrap();
//! assert_eq!(tokens[0], Token::new("select", TokenKind::Reserved));
//! assert!(tokens.iter().any(|t| t.matches("my_table")));
//! ```
//!
//! NOTE: `DELETE`, `UPDATE`, `SET` and `WHERE` are tokenized even though the
//! grammar has no productions for them yet.

pub mod keyword;
pub mod rule;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use keyword::Keyword;
pub use rule::{RULES, Rule};
pub use token::{END_OF_INPUT, Token};
pub use token_kind::TokenKind;
pub use tokenizer::lex;

/// Convenience prelude re-exporting the most commonly used items.
///
/// Import with:
/// `use minsql::prelude::*;`
pub mod prelude {
    pub use super::{Keyword, Token, TokenKind, lex};
}
