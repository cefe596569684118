//! Tokens and token sequences produced by the lexer.

use std::fmt;

/// What sort of text a token covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Integer,
    BigInteger,
    Float,
    Binary,
    Hexadecimal,
    Octal,
    String,
    Identifier,
    /// Any other single character: operators, `:`, `,`, `.` and the like.
    Symbol,
    Eof,
}

impl TokenKind {
    /// Decimal numbers, which may carry a sign.
    pub fn is_base_ten(self) -> bool {
        matches!(self, TokenKind::Integer | TokenKind::BigInteger | TokenKind::Float)
    }

    /// Numbers written with a `0b`, `0x` or `0o` prefix.
    pub fn is_alternate_base(self) -> bool {
        matches!(self, TokenKind::Binary | TokenKind::Hexadecimal | TokenKind::Octal)
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "left-paren",
            TokenKind::RightParen => "right-paren",
            TokenKind::LeftBracket => "left-bracket",
            TokenKind::RightBracket => "right-bracket",
            TokenKind::LeftBrace => "left-brace",
            TokenKind::RightBrace => "right-brace",
            TokenKind::Integer => "integer",
            TokenKind::BigInteger => "big-integer",
            TokenKind::Float => "float",
            TokenKind::Binary => "binary",
            TokenKind::Hexadecimal => "hexadecimal",
            TokenKind::Octal => "octal",
            TokenKind::String => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::Symbol => "symbol",
            TokenKind::Eof => "eof",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A token along with its starting position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    /// 1-indexed line of the token's first character.
    pub line_number: usize,
    /// Index of the token's first character in the input.
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line_number: usize, offset: usize) -> Self {
        Token {
            kind,
            value: value.into(),
            line_number,
            offset,
        }
    }

    pub fn eof(line_number: usize, offset: usize) -> Self {
        Token::new(TokenKind::Eof, "eof", line_number, offset)
    }

    /// Index one past the token's last character.
    pub fn end(&self) -> usize {
        self.offset + self.value.chars().count()
    }

    /// Whether `next` starts right where this token ends, with nothing in between.
    pub fn is_adjacent_to(&self, next: &Token) -> bool {
        self.kind != TokenKind::Eof && next.kind != TokenKind::Eof && self.end() == next.offset
    }

    /// A single-character punctuation token with exactly this text.
    pub fn is_symbol(&self, text: &str) -> bool {
        self.kind == TokenKind::Symbol && self.value == text
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>4} {:<13} {}", self.line_number, self.kind, self.value)
    }
}

/// A finished token sequence. Always ends in exactly one end-of-input token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    tokens: Vec<Token>,
}

impl Tokens {
    /// Seal a scanned sequence, appending the end-of-input marker.
    pub(super) fn finish(mut tokens: Vec<Token>, line_number: usize, offset: usize) -> Self {
        tokens.push(Token::eof(line_number, offset));
        Tokens { tokens }
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Number of tokens, end-of-input included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Never true: there is always an end-of-input token.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// The end-of-input token.
    pub fn last(&self) -> &Token {
        // `finish` is the only constructor, and it always pushes one.
        &self.tokens[self.tokens.len() - 1]
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// One token per line, for diagnostics.
impl fmt::Display for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            writeln!(f, "{token}")?;
        }
        Ok(())
    }
}
