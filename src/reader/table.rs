//! Cursor over a finished token sequence.

use super::token::{Token, Tokens};
use super::{ReadErr, ReadResult};

/// The parser's view of the tokens.
///
/// The cursor sits logically before the first token; `peek` looks at the
/// token after it, `consume` moves onto it. The cursor never moves past the
/// end-of-input token, so reads are always in bounds.
#[derive(Debug, Clone)]
pub struct TokenTable {
    source_name: String,
    tokens: Tokens,
    // Index of the token `peek` returns.
    next: usize,
}

impl TokenTable {
    pub fn new(source_name: impl Into<String>, tokens: Tokens) -> Self {
        TokenTable {
            source_name: source_name.into(),
            tokens,
            next: 0,
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    /// The token `consume` would return.
    pub fn peek(&self) -> &Token {
        self.peek_nth(0)
    }

    /// The token `n` places after `peek`, or the end-of-input token if that is past the end.
    pub fn peek_nth(&self, n: usize) -> &Token {
        self.tokens
            .get(self.next + n)
            .unwrap_or_else(|| self.tokens.last())
    }

    /// Return the next token and move past it.
    /// Consuming at end-of-input keeps returning the end-of-input token.
    pub fn consume(&mut self) -> Token {
        let token = self.peek().clone();
        if !token.is_eof() {
            self.next += 1;
        }
        token
    }

    /// Consume the next token only if it is the single character `text`.
    pub fn consume_symbol(&mut self, text: &str) -> Option<Token> {
        if self.peek().is_symbol(text) {
            Some(self.consume())
        } else {
            None
        }
    }

    /// Build a syntax error located at the next token.
    pub fn error(&self, message: impl Into<String>) -> ReadErr {
        let err = ReadErr::syntax(&self.source_name, Some(self.peek().line_number), message);
        tracing::debug!("{err}");
        err
    }

    /// Shorthand for returning [`TokenTable::error`] from a parse routine.
    pub fn fail<T>(&self, message: impl Into<String>) -> ReadResult<T> {
        Err(self.error(message))
    }
}
