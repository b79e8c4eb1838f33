use crate::*;

/// Snapshot of a `Cursor`'s position, taken before trying an alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    position: usize,
    sub_position: usize,
}

impl CursorState {
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn sub_position(&self) -> usize {
        self.sub_position
    }
}

/// Outcome of examining one character of the current token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharMatch {
    /// The character satisfied the predicate.
    pub matched: bool,
    /// It was the token's last character; the cursor has moved to the next
    /// token.
    pub end: bool,
}

/// Movable position over a token stream.
///
/// `position` indexes the tokens; once it runs past the end the current
/// token is `END_OF_INPUT`. `sub_position` is a byte offset into the current
/// lexeme used by the character-level `consume_*` methods.
#[derive(Debug, Clone)]
pub struct Cursor {
    tokens: Vec<Token>,
    position: usize,
    sub_position: usize,
}

impl Cursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
            sub_position: 0,
        }
    }

    pub fn current(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&END_OF_INPUT)
    }

    /// Next unexamined character of the current token, if any.
    pub fn current_char(&self) -> Option<char> {
        self.current().value().get(self.sub_position..)?.chars().next()
    }

    pub fn at_end(&self) -> bool {
        self.current().is_end()
    }

    /// True when no character of the current token has been consumed yet.
    pub fn at_token_start(&self) -> bool {
        self.sub_position == 0
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Advance one token iff its lexeme equals `expected`, ignoring case.
    pub fn terminal(&mut self, expected: &str) -> bool {
        self.terminal_any(&[expected])
    }

    /// Like `terminal`, accepting any of `expected`.
    pub fn terminal_any(&mut self, expected: &[&str]) -> bool {
        if !self.peek_any(expected) {
            return false;
        }
        self.advance();
        true
    }

    pub fn peek(&self, expected: &str) -> bool {
        self.peek_any(&[expected])
    }

    pub fn peek_any(&self, expected: &[&str]) -> bool {
        let current = self.current();
        !current.is_end() && expected.iter().any(|e| current.matches(e))
    }

    pub fn consume_letter(&mut self) -> CharMatch {
        self.consume_char(char::is_alphabetic)
    }

    pub fn consume_digit(&mut self) -> CharMatch {
        self.consume_char(|c| c.is_ascii_digit())
    }

    pub fn consume_letter_or_digit(&mut self) -> CharMatch {
        self.consume_char(char::is_alphanumeric)
    }

    /// Test the next character of the current token against `predicate`.
    ///
    /// The last character moves the cursor to the next token whether or not
    /// it matched. At end of input nothing is consumed.
    fn consume_char(&mut self, predicate: impl Fn(char) -> bool) -> CharMatch {
        let Some(c) = self.current_char() else {
            return CharMatch {
                matched: false,
                end: true,
            };
        };
        let matched = predicate(c);
        let next = self.sub_position + c.len_utf8();
        if next >= self.current().value().len() {
            self.advance();
            CharMatch { matched, end: true }
        } else {
            self.sub_position = next;
            CharMatch {
                matched,
                end: false,
            }
        }
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        self.sub_position = 0;
    }

    pub fn checkpoint(&self) -> CursorState {
        CursorState {
            position: self.position,
            sub_position: self.sub_position,
        }
    }

    pub fn restore(&mut self, state: CursorState) {
        self.position = state.position;
        self.sub_position = state.sub_position;
    }
}
