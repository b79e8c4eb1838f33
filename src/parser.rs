//! Backtracking recursive-descent parser.
//!
//! A `Parser` couples a token `Cursor` with an `AstBuilder`. Grammar
//! productions (see `grammar`) are plain functions over `&mut Parser` that
//! return `false` on mismatch; `either` gives them PEG-style ordered choice
//! by checkpointing both the cursor and the AST log before each alternative
//! and restoring them when it fails.
crate::reexport!(cursor);
crate::reexport!(ast);
pub mod grammar;

use crate::*;

/// A grammar production: consumes from the parser, reports success.
pub type Production = fn(&mut Parser) -> bool;

/// Combined cursor and AST position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    cursor: CursorState,
    ast: AstMark,
}

/// Single-use parser over one token stream.
#[derive(Debug)]
pub struct Parser {
    cursor: Cursor,
    ast: AstBuilder,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            cursor: Cursor::new(tokens),
            ast: AstBuilder::new(),
        }
    }

    /// Run `Statement` from the first token.
    ///
    /// Acceptance is the result of `Statement` alone; tokens after a complete
    /// statement are left unread. On rejection the returned tree is the bare
    /// `Root`.
    pub fn parse(mut self) -> (Ast, bool) {
        let accepted = grammar::statement(&mut self);
        debug!(
            "Parse {} after {} of {} tokens",
            if accepted { "accepted" } else { "rejected" },
            self.cursor.position(),
            self.cursor.token_count()
        );
        (self.ast.build(), accepted)
    }

    /// Materialize whatever the productions run so far have built.
    pub fn into_ast(self) -> Ast {
        self.ast.build()
    }

    pub fn current(&self) -> &Token {
        self.cursor.current()
    }

    pub fn current_char(&self) -> Option<char> {
        self.cursor.current_char()
    }

    pub fn at_end(&self) -> bool {
        self.cursor.at_end()
    }

    pub fn at_token_start(&self) -> bool {
        self.cursor.at_token_start()
    }

    pub fn terminal(&mut self, expected: impl AsRef<str>) -> bool {
        self.cursor.terminal(expected.as_ref())
    }

    pub fn terminal_any(&mut self, expected: &[&str]) -> bool {
        self.cursor.terminal_any(expected)
    }

    pub fn peek(&self, expected: impl AsRef<str>) -> bool {
        self.cursor.peek(expected.as_ref())
    }

    pub fn peek_any(&self, expected: &[&str]) -> bool {
        self.cursor.peek_any(expected)
    }

    pub fn consume_letter(&mut self) -> CharMatch {
        self.cursor.consume_letter()
    }

    pub fn consume_digit(&mut self) -> CharMatch {
        self.cursor.consume_digit()
    }

    pub fn consume_letter_or_digit(&mut self) -> CharMatch {
        self.cursor.consume_letter_or_digit()
    }

    pub fn add_node(&mut self, node: Ast) {
        self.ast.add_node(node);
    }

    pub fn enter_node(&mut self, node: Ast) {
        self.ast.enter_node(node);
    }

    pub fn exit_node(&mut self) {
        self.ast.exit_node();
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            cursor: self.cursor.checkpoint(),
            ast: self.ast.mark(),
        }
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.cursor.restore(checkpoint.cursor);
        self.ast.rollback(checkpoint.ast);
    }

    /// Ordered choice: the first alternative that succeeds wins and keeps its
    /// effects. Each failure is rolled back before the next one is tried.
    pub fn either(&mut self, alternatives: &[Production]) -> bool {
        let checkpoint = self.checkpoint();
        for (index, alternative) in alternatives.iter().copied().enumerate() {
            if alternative(self) {
                trace!("Alternative {index} matched, now at {:?}", self.current());
                return true;
            }
            trace!(
                "Alternative {index} failed at {:?}, rewinding to {}:{}",
                self.current(),
                checkpoint.cursor.position(),
                checkpoint.cursor.sub_position()
            );
            self.restore(checkpoint);
        }
        false
    }
}

/// Parse a token stream into `(ast, accepted)`.
pub fn parse(tokens: Vec<Token>) -> (Ast, bool) {
    Parser::new(tokens).parse()
}

/// Lex then parse `text`.
pub fn parse_sql(text: &str) -> Result<(Ast, bool)> {
    Ok(parse(lex(text)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    fn string(value: &str) -> Ast {
        Ast::leaf(NodeKind::String, value)
    }

    fn accepts(sql: &str) -> bool {
        parse_sql(sql).map(|(_, ok)| ok).unwrap_or(false)
    }

    #[rstest]
    #[case("INSERT INTO TestTable (Id) VALUES (1)")]
    #[case("INSERT INTO TestTable VALUES (1)")]
    #[case("SELECT Id FROM TestTable")]
    #[case("SELECT Id, Name, FavColour FROM TestTable")]
    #[case("SELECT * FROM TestTable")]
    #[case("select id from users")]
    #[case("SELECT * FROM TestTable extra")]
    #[case("SELECT Values FROM t")]
    #[case("SELECT FROM FROM t")]
    #[case("SELECT a FROM Set")]
    fn accepts_statement(#[case] sql: &str) {
        common_init();
        assert!(accepts(sql), "{sql} should parse");
    }

    #[rstest]
    #[case("INSERT TestTable (Id) VALUES (1)")]
    #[case("SELECT * FROM")]
    #[case("SELECT FROM TestTable")]
    #[case("")]
    fn rejects_statement(#[case] sql: &str) {
        common_init();
        assert!(!accepts(sql), "{sql} should not parse");
    }

    #[test]
    fn select_star_tree() {
        let (ast, accepted) = parse_sql("SELECT * FROM TestTable").unwrap();
        assert!(accepted);
        assert_eq!(
            ast,
            Ast::root().with_children([
                Ast::new(NodeKind::Select).with_children([string("*")]),
                Ast::new(NodeKind::TableName).with_children([string("TestTable")]),
            ])
        );
    }

    #[test]
    fn select_columns_keep_source_order() {
        let (ast, accepted) = parse_sql("SELECT FirstName, LastName FROM Users").unwrap();
        assert!(accepted);
        assert_eq!(ast.children.len(), 2);
        assert_eq!(ast.children[0].kind, NodeKind::Select);
        assert_eq!(ast.children[0].child_values(), vec!["FirstName", "LastName"]);
        assert!(
            ast.children[0]
                .children
                .iter()
                .all(|c| c.kind == NodeKind::String)
        );
    }

    #[test]
    fn trailing_tokens_are_left_unread() {
        let (ast, accepted) = parse_sql("SELECT a FROM t WHERE b").unwrap();
        assert!(accepted);
        assert_eq!(ast.to_string(), "Root[Select[String(a)], TableName[String(t)]]");
    }

    #[test]
    fn keywords_can_name_columns_and_tables() {
        let (ast, accepted) = parse_sql("SELECT Values FROM Set").unwrap();
        assert!(accepted);
        assert_eq!(
            ast.to_string(),
            "Root[Select[String(Values)], TableName[String(Set)]]"
        );
    }

    #[test]
    fn rejection_leaves_bare_root() {
        let (ast, accepted) = parse_sql("SELECT a, b FROM").unwrap();
        assert!(!accepted);
        assert_eq!(ast, Ast::root());
    }

    #[test]
    fn repeated_parses_are_equal() {
        let sql = "INSERT INTO T (a, b) VALUES (\"x y\", -12)";
        assert_eq!(parse_sql(sql).unwrap(), parse_sql(sql).unwrap());
    }

    #[test]
    fn either_restores_between_alternatives() {
        let mut parser = Parser::new(vec![reserved("("), id("x")]);
        let matched = parser.either(&[
            |p| {
                p.add_node(string("discarded"));
                p.terminal("(") && p.terminal(")")
            },
            |p| p.terminal("(") && p.terminal("x"),
        ]);
        assert!(matched);
        assert!(parser.at_end());
        assert_eq!(parser.into_ast(), Ast::root());
    }

    #[test]
    fn either_failure_restores_everything() {
        let mut parser = Parser::new(vec![reserved("("), id("x")]);
        let before = parser.checkpoint();
        let matched = parser.either(&[
            |p| {
                p.enter_node(Ast::new(NodeKind::Select));
                p.terminal("(") && p.terminal("y")
            },
            |p| p.terminal(")"),
        ]);
        assert!(!matched);
        assert_eq!(parser.checkpoint(), before);
        assert!(parser.peek("("));
    }

    #[test]
    fn lex_errors_surface_from_parse_sql() {
        assert!(matches!(parse_sql("SELECT * FROM t;"), Err(Error::Lex { .. })));
    }

    /// Everything this grammar accepts (bar the bracketed qualifier) should
    /// be ordinary SQL to a general-purpose parser too.
    #[rstest]
    #[case("SELECT * FROM TestTable")]
    #[case("SELECT a, b2 FROM t1, t2")]
    #[case("INSERT INTO t VALUES (1, -2, +3)")]
    #[case("INSERT INTO t (a, b) VALUES (\"abc\", 4)")]
    fn accepted_statements_are_valid_sql(#[case] sql: &str) {
        use sqlparser::{dialect::GenericDialect, parser::Parser as SqlParser};
        assert!(accepts(sql));
        let parsed = SqlParser::parse_sql(&GenericDialect {}, sql);
        assert!(parsed.is_ok(), "sqlparser rejected {sql}: {parsed:?}");
    }
}
