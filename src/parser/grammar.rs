//! Productions of the SQL Minimum Grammar subset, one function per
//! non-terminal.
//!
//! ```text
//! statement            ::= insert-statement | select-statement
//! insert-statement     ::= INSERT INTO table-name [( column-identifier [, column-identifier]... )]
//!                          VALUES ( insert-value [, insert-value]... )
//! select-statement     ::= SELECT select-list FROM table-reference-list
//! select-list          ::= * | select-sublist [, select-sublist]...
//! select-sublist       ::= expression ::= term ::= factor ::= primary ::= column-name
//! column-name          ::= [[ table-name ].]column-identifier
//! table-reference-list ::= table-reference [, table-reference]...
//! table-reference      ::= table-name ::= table-identifier ::= user-defined-name
//! column-identifier    ::= user-defined-name
//! user-defined-name    ::= letter[letter | digit]...
//! insert-value         ::= literal | signed-integer
//! literal              ::= character-string-literal ::= "[letter | digit]..."
//! signed-integer       ::= [+ | -]digit[digit]...
//! ```
//!
//! Every function returns `false` on mismatch and may leave the parser
//! mid-way; callers that need to retry go through `Parser::either`.
use crate::*;

const QUOTE: &str = "\"";

pub fn statement(p: &mut Parser) -> bool {
    p.either(&[insert_statement, select_statement])
}

/// `Insert[TableName[..], Columns[..]?, Values[..]]`
pub fn insert_statement(p: &mut Parser) -> bool {
    if !p.terminal(Keyword::Insert) || !p.terminal(Keyword::Into) {
        return false;
    }
    p.enter_node(Ast::new(NodeKind::Insert));

    p.enter_node(Ast::new(NodeKind::TableName));
    if !table_name(p) {
        return false;
    }
    p.exit_node();

    if p.peek("(") {
        p.terminal("(");
        p.enter_node(Ast::new(NodeKind::Columns));
        if !separated(p, column_identifier) || !p.terminal(")") {
            return false;
        }
        p.exit_node();
    }

    if !p.terminal(Keyword::Values) || !p.terminal("(") {
        return false;
    }
    p.enter_node(Ast::new(NodeKind::Values));
    if !separated(p, insert_value) || !p.terminal(")") {
        return false;
    }
    p.exit_node();

    p.exit_node();
    true
}

/// `Select[..]` followed by `TableName[..]`, both directly under the open
/// node.
pub fn select_statement(p: &mut Parser) -> bool {
    if !p.terminal(Keyword::Select) {
        return false;
    }
    p.enter_node(Ast::new(NodeKind::Select));
    if !select_list(p) {
        return false;
    }
    p.exit_node();

    if !p.terminal(Keyword::From) {
        return false;
    }
    p.enter_node(Ast::new(NodeKind::TableName));
    if !table_reference_list(p) {
        return false;
    }
    p.exit_node();
    true
}

pub fn select_list(p: &mut Parser) -> bool {
    p.either(&[
        |p| {
            if !p.terminal("*") {
                return false;
            }
            p.add_node(Ast::leaf(NodeKind::String, "*"));
            true
        },
        |p| separated(p, select_sublist),
    ])
}

pub fn select_sublist(p: &mut Parser) -> bool {
    expression(p)
}

pub fn expression(p: &mut Parser) -> bool {
    term(p)
}

pub fn term(p: &mut Parser) -> bool {
    factor(p)
}

pub fn factor(p: &mut Parser) -> bool {
    primary(p)
}

pub fn primary(p: &mut Parser) -> bool {
    column_name(p)
}

/// Qualified names become `QualifiedName[table, column]`.
pub fn column_name(p: &mut Parser) -> bool {
    p.either(&[
        |p| {
            if !p.terminal("[") {
                return false;
            }
            p.enter_node(Ast::new(NodeKind::QualifiedName));
            if !table_name(p) || !p.terminal("]") || !p.terminal(".") {
                return false;
            }
            if !column_identifier(p) {
                return false;
            }
            p.exit_node();
            true
        },
        column_identifier,
    ])
}

pub fn table_reference_list(p: &mut Parser) -> bool {
    separated(p, table_reference)
}

pub fn table_reference(p: &mut Parser) -> bool {
    table_name(p)
}

pub fn table_name(p: &mut Parser) -> bool {
    table_identifier(p)
}

pub fn table_identifier(p: &mut Parser) -> bool {
    user_defined_name(p)
}

pub fn column_identifier(p: &mut Parser) -> bool {
    user_defined_name(p)
}

/// A whole token starting with a letter followed by letters or digits.
/// Adds a `String` node with the lexeme. Only the characters are checked,
/// so a keyword spelled as a name qualifies.
pub fn user_defined_name(p: &mut Parser) -> bool {
    if !p.at_token_start() {
        return false;
    }
    let node = Ast::leaf(NodeKind::String, p.current().value());

    let mut step = p.consume_letter();
    if !step.matched {
        return false;
    }
    while !step.end {
        step = p.consume_letter_or_digit();
        if !step.matched {
            return false;
        }
    }

    p.add_node(node);
    true
}

pub fn insert_value(p: &mut Parser) -> bool {
    p.either(&[literal, signed_integer])
}

pub fn literal(p: &mut Parser) -> bool {
    character_string_literal(p)
}

/// `"..."` holding only letters and digits. Adds a `String` node with the
/// text between the quotes; tokens that were separated by whitespace are
/// joined by a single space.
pub fn character_string_literal(p: &mut Parser) -> bool {
    if !p.terminal(QUOTE) {
        return false;
    }

    let mut text = String::new();
    let mut last_end = None;
    while !p.peek(QUOTE) {
        let (start, end) = p.current().span();
        if p.at_token_start() {
            if last_end.is_some_and(|prev| prev < start) {
                text.push(' ');
            }
            last_end = Some(end);
        }
        let c = p.current_char();
        if !p.consume_letter_or_digit().matched {
            return false;
        }
        text.extend(c);
    }

    if !p.terminal(QUOTE) {
        return false;
    }
    p.add_node(Ast::leaf(NodeKind::String, text));
    true
}

/// Optional sign token followed by one all-digit token. Adds an `Int` node
/// such as `-12`.
pub fn signed_integer(p: &mut Parser) -> bool {
    let mut value = String::new();
    if p.peek_any(&["+", "-"]) {
        value.push_str(p.current().value());
        p.terminal_any(&["+", "-"]);
    }
    if !p.at_token_start() {
        return false;
    }
    value.push_str(p.current().value());

    loop {
        let step = p.consume_digit();
        if !step.matched {
            return false;
        }
        if step.end {
            break;
        }
    }

    p.add_node(Ast::leaf(NodeKind::Int, value));
    true
}

/// `item {"," item}`
fn separated(p: &mut Parser, item: Production) -> bool {
    if !item(p) {
        return false;
    }
    while p.peek(",") {
        p.terminal(",");
        if !item(p) {
            return false;
        }
    }
    true
}
