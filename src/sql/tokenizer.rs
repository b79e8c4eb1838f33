use crate::sql::{rule::RULES, token::Token};
use crate::*;

/// Split SQL text into a stream of `Token`s using the ordered rule table.
///
/// Behavior:
/// - For the unconsumed suffix, tries every rule in table order; the first
///   one that matches wins (this is not longest-match).
/// - Whitespace matches are skipped; everything else becomes a token carrying
///   its byte span.
/// - Fails with `Error::Lex` as soon as a non-empty remainder matches no
///   rule. No partial stream is returned.
///
/// Pure function of `text` and the static rule table.
pub fn lex(text: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    while offset < text.len() {
        let remaining = &text[offset..];
        let Some((rule, len)) = RULES
            .iter()
            .find_map(|rule| rule.test(remaining).map(|len| (rule, len)))
        else {
            return Err(Error::Lex {
                offset,
                remaining: remaining.to_string(),
            });
        };

        if rule.kind.is_emitted() {
            let token = Token::spanned(&remaining[..len], rule.kind, offset);
            trace!("Lexed {token} at {:?} by {}", token.span(), rule.pattern());
            tokens.push(token);
        }
        offset += len;
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{id, int, reserved};
    use rand::{Rng as _, SeedableRng as _, rngs::StdRng, seq::IndexedRandom as _};

    #[test]
    fn select_expression() {
        let toks = lex("SELECT * FROM TestTable").unwrap();
        assert_eq!(
            toks,
            vec![reserved("SELECT"), id("*"), reserved("FROM"), id("TestTable")]
        );
    }

    #[test]
    fn insert_expression() {
        let toks = lex("INSERT INTO TestTable (Id) VALUES (1)").unwrap();
        assert_eq!(
            toks,
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
        );
    }

    #[test]
    fn delete_expression() {
        let toks = lex("DELETE FROM TestTable").unwrap();
        assert_eq!(
            toks,
            vec![reserved("DELETE"), reserved("FROM"), id("TestTable")]
        );
    }

    #[test]
    fn update_expression() {
        let toks = lex("UPDATE TestTable SET Id = 101 WHERE Id = 1").unwrap();
        assert_eq!(
            toks,
            vec![
                reserved("UPDATE"),
                id("TestTable"),
                reserved("SET"),
                id("Id"),
                reserved("="),
                int("101"),
                reserved("WHERE"),
                id("Id"),
                reserved("="),
                int("1"),
            ]
        );
    }

    #[test]
    fn keywords_are_case_insensitive_whole_words() {
        let toks = lex("select Selected from FromDate").unwrap();
        assert_eq!(
            toks,
            vec![
                reserved("SELECT"),
                id("Selected"),
                reserved("FROM"),
                id("FromDate"),
            ]
        );
    }

    #[test]
    fn integers_win_over_identifiers_for_leading_digits() {
        let toks = lex("12ab").unwrap();
        assert_eq!(toks, vec![int("12"), id("ab")]);
    }

    #[test]
    fn spans_point_into_source() {
        let sql = "  SELECT\t[Users].Name";
        for tok in lex(sql).unwrap() {
            let (start, end) = tok.span();
            assert_eq!(&sql[start..end], tok.value());
        }
    }

    #[test]
    fn empty_and_blank_input_yield_no_tokens() {
        assert!(lex("").unwrap().is_empty());
        assert!(lex(" \t\r\n ").unwrap().is_empty());
    }

    #[test]
    fn unmatched_remainder_is_an_error() {
        let err = lex("SELECT * FROM t;").unwrap_err();
        match err {
            Error::Lex { offset, remaining } => {
                assert_eq!(offset, 15);
                assert_eq!(remaining, ";");
            }
            other => panic!("Unexpected kind of err {other:?}"),
        }
    }

    #[test]
    fn lexing_is_deterministic() {
        let sql = "INSERT INTO T (a, b) VALUES (\"x\", -1)";
        assert_eq!(lex(sql).unwrap(), lex(sql).unwrap());
    }

    const LEXEMES: &[&str] = &[
        "SELECT", "from", "Insert", "INTO", "VALUES", "DELETE", "UPDATE", "SET", "WHERE", "(",
        ")", "[", "]", "+", "-", "=", ",", ".", "\"", "*", "0", "42", "TestTable", "a1", "x_y",
    ];
    const WHITESPACE: &[&str] = &[" ", "  ", "\t", "\n", "\r\n"];

    #[test]
    fn whitespace_separated_lexemes_round_trip() {
        crate::testing::common_init();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let count = rng.random_range(1..12);
            let mut sql = String::new();
            let mut expected = Vec::new();
            for _ in 0..count {
                if let Some(ws) = WHITESPACE.choose(&mut rng) {
                    sql.push_str(ws);
                }
                if let Some(lexeme) = LEXEMES.choose(&mut rng) {
                    sql.push_str(lexeme);
                    expected.push(*lexeme);
                }
            }

            let toks = lex(&sql).unwrap_or_else(|e| panic!("{sql:?} should lex: {e}"));
            let values = toks.iter().map(Token::value).collect::<Vec<_>>();
            assert_eq!(values, expected, "lexemes of {sql:?}");

            let mut rebuilt = String::new();
            let mut cursor = 0;
            for tok in &toks {
                let (start, end) = tok.span();
                let gap = &sql[cursor..start];
                assert!(gap.chars().all(char::is_whitespace), "gap {gap:?} in {sql:?}");
                rebuilt.push_str(gap);
                rebuilt.push_str(tok.value());
                cursor = end;
            }
            rebuilt.push_str(&sql[cursor..]);
            assert_eq!(rebuilt, sql);
        }
    }
}
