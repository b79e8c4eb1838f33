use crate::*;
use rstest::fixture;

pub fn reserved(value: &str) -> Token {
    Token::new(value, TokenKind::Reserved)
}

pub fn id(value: &str) -> Token {
    Token::new(value, TokenKind::Id)
}

pub fn int(value: &str) -> Token {
    Token::new(value, TokenKind::Int)
}

/// Tokens of `SELECT * FROM TestTable`.
#[fixture]
pub fn select_star() -> Vec<Token> {
    vec![reserved("SELECT"), id("*"), reserved("FROM"), id("TestTable")]
}

/// Tokens of `INSERT INTO TestTable (Id) VALUES (1)`.
#[fixture]
pub fn insert_one() -> Vec<Token> {
    vec![
        reserved("INSERT"),
        reserved("INTO"),
        id("TestTable"),
        reserved("("),
        id("Id"),
        reserved(")"),
        reserved("VALUES"),
        reserved("("),
        int("1"),
        reserved(")"),
    ]
}
