//! Scanning source text into tokens.

use std::mem;

use super::character::*;
use super::token::{Token, TokenKind, Tokens};
use super::{ReadErr, ReadResult};

/// A single-use scanner over one source unit.
///
/// The cursor starts one before the first character, so the first
/// [`Lexer::next_character`] lands on index 0.
#[derive(Debug)]
pub struct Lexer {
    source_name: String,
    text: Vec<char>,
    position: isize,
    lineno: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(source_name: impl Into<String>, input: &str) -> Self {
        Lexer {
            source_name: source_name.into(),
            text: input.chars().collect(),
            position: -1,
            lineno: 1,
            tokens: Vec::new(),
        }
    }

    pub fn text(&self) -> &[char] {
        &self.text
    }

    /// Index of the character under the cursor; -1 before the first advance.
    pub fn position(&self) -> isize {
        self.position
    }

    /// The line the cursor is on.
    pub fn lineno(&self) -> usize {
        self.lineno
    }

    /// Advance and return the character now under the cursor.
    /// Once past the end, stays there and keeps returning `None`.
    pub fn next_character(&mut self) -> Option<char> {
        if self.position < self.text.len() as isize {
            self.position += 1;
        }
        self.character_at(self.position)
    }

    /// The character after the cursor, without moving.
    pub fn peek_character(&self) -> Option<char> {
        self.character_at(self.position + 1)
    }

    fn character_at(&self, index: isize) -> Option<char> {
        usize::try_from(index).ok().and_then(|i| self.text.get(i).copied())
    }

    /// Build a lexical error at the current line.
    pub fn error(&self, message: impl Into<String>) -> ReadErr {
        let err = ReadErr::lexical(&self.source_name, self.lineno, message);
        tracing::debug!("{err}");
        err
    }

    /// Scan the whole input.
    ///
    /// On error, the tokens scanned so far are dropped: no partial sequence
    /// leaves the lexer.
    pub fn make_tokens(&mut self) -> ReadResult<Tokens> {
        if let Err(err) = self.scan() {
            self.tokens.clear();
            return Err(err);
        }
        let tokens = Tokens::finish(mem::take(&mut self.tokens), self.lineno, self.text.len());
        tracing::debug!(
            "scanned {} tokens over {} lines from {}",
            tokens.len(),
            self.lineno,
            self.source_name
        );
        Ok(tokens)
    }

    fn scan(&mut self) -> ReadResult<()> {
        while let Some(ch) = self.next_character() {
            let line = self.lineno;
            let offset = self.position as usize;

            if is_newline(ch) {
                self.lineno += 1;
                continue;
            }
            if is_whitespace(ch) {
                continue;
            }

            let token = match ch {
                '(' => Token::new(TokenKind::LeftParen, "(", line, offset),
                ')' => Token::new(TokenKind::RightParen, ")", line, offset),
                '[' => Token::new(TokenKind::LeftBracket, "[", line, offset),
                ']' => Token::new(TokenKind::RightBracket, "]", line, offset),
                '{' => Token::new(TokenKind::LeftBrace, "{", line, offset),
                '}' => Token::new(TokenKind::RightBrace, "}", line, offset),
                _ if is_digit(ch) => self.get_number(ch, line, offset)?,
                _ if is_quote(ch) => self.get_string(ch, line, offset)?,
                _ if is_letter(ch) => self.get_identifier(ch, line, offset),
                '-' if self.peek_character() == Some('0')
                    && self.character_at(self.position + 2).and_then(alternate_base).is_some() =>
                {
                    return Err(self.error("signed alternate-base literals are not supported"));
                }
                _ => Token::new(TokenKind::Symbol, ch.to_string(), line, offset),
            };
            tracing::trace!("token: {token}");
            self.tokens.push(token);
        }
        Ok(())
    }

    /// Pull characters onto `fragment` while they satisfy `accept`.
    fn take_while(&mut self, fragment: &mut String, accept: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek_character().filter(|&c| accept(c)) {
            fragment.push(ch);
            self.next_character();
        }
    }

    /// A decimal number starting with `first`, or an alternate-base number if
    /// `first` is a `0` followed by a base prefix.
    fn get_number(&mut self, first: char, line: usize, offset: usize) -> ReadResult<Token> {
        if first == '0' {
            if let Some(prefix) = self.peek_character() {
                if let Some(valid) = alternate_base(prefix) {
                    return self.get_alternate_base_number(prefix, valid, line, offset);
                }
                if is_digit(prefix) {
                    return Err(self.error(
                        "integer literals cannot have a leading zero, except for 0 itself",
                    ));
                }
            }
        }

        let mut fragment = first.to_string();
        self.take_while(&mut fragment, is_digit);

        let kind = if self.peek_character() == Some('.')
            && self.character_at(self.position + 2).is_some_and(is_digit)
        {
            fragment.push('.');
            self.next_character();
            self.take_while(&mut fragment, is_digit);
            if self.peek_character() == Some('.')
                && self.character_at(self.position + 2).is_some_and(is_digit)
            {
                return Err(self.error(format!(
                    "malformed float literal: more than one decimal point after {fragment}"
                )));
            }
            TokenKind::Float
        } else if is_integer(&fragment) {
            TokenKind::Integer
        } else if is_big_integer(&fragment) {
            TokenKind::BigInteger
        } else {
            return Err(self.error(format!("invalid number literal {fragment}")));
        };

        if self.peek_character().is_some_and(is_letter) {
            return Err(self.error(format!(
                "invalid number literal: {fragment} runs into {:?}",
                self.peek_character().unwrap_or_default()
            )));
        }
        Ok(Token::new(kind, fragment, line, offset))
    }

    /// `0b`, `0x` or `0o` and its digits. The prefix letter is normalized to lowercase.
    fn get_alternate_base_number(
        &mut self,
        prefix: char,
        valid: fn(char) -> bool,
        line: usize,
        offset: usize,
    ) -> ReadResult<Token> {
        self.next_character();
        let mut fragment = format!("0{}", prefix.to_ascii_lowercase());
        self.take_while(&mut fragment, valid);

        let (kind, well_formed) = match prefix.to_ascii_lowercase() {
            'b' => (TokenKind::Binary, is_binary(&fragment)),
            'x' => (TokenKind::Hexadecimal, is_hexadecimal(&fragment)),
            _ => (TokenKind::Octal, is_octal(&fragment)),
        };
        if !well_formed || self.peek_character().is_some_and(is_identifier_part) {
            let mut rest = String::new();
            self.take_while(&mut rest, is_identifier_part);
            return Err(self.error(format!("invalid {kind} literal {fragment}{rest}")));
        }
        Ok(Token::new(kind, fragment, line, offset))
    }

    /// A quoted string, through the next unescaped matching quote.
    /// The value keeps its quotes and escapes as written.
    fn get_string(&mut self, quote: char, line: usize, offset: usize) -> ReadResult<Token> {
        let mut fragment = quote.to_string();
        // A backslash always escapes the next character.
        let mut escaped = false;
        while let Some(ch) = self.next_character() {
            fragment.push(ch);
            if is_newline(ch) {
                self.lineno += 1;
            }
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == quote {
                debug_assert!(is_string(&fragment));
                return Ok(Token::new(TokenKind::String, fragment, line, offset));
            }
        }
        Err(self.error(format!("unterminated string starting on line {line}")))
    }

    fn get_identifier(&mut self, first: char, line: usize, offset: usize) -> Token {
        let mut fragment = first.to_string();
        self.take_while(&mut fragment, is_identifier_part);
        Token::new(TokenKind::Identifier, fragment, line, offset)
    }
}
