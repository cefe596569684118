//! Support for reading oblisp source text.
//!
//! Reading happens in two passes:
//! - the [`Lexer`] scans characters into a [`Tokens`] sequence;
//! - the [`Parser`] walks a [`TokenTable`] over those tokens, handing each
//!   grammar production to an [`AstBuilder`].
//!
//! Neither pass recovers from errors: the first problem aborts the read.

use std::io::ErrorKind as IoErrorKind;

use thiserror::Error;

use crate::ast::{AstBuilder, AstType, NoOp, SExpression};
use crate::options::ReadOptions;

pub mod character;
mod lexer;
mod parse;
mod table;
mod token;

pub use lexer::Lexer;
pub use parse::Parser;
pub use table::TokenTable;
pub use token::{Token, TokenKind, Tokens};

/// Which pass of the reader gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The characters do not form a valid token (e.g. `042`, an unterminated string).
    #[error("lexical error")]
    Lexical,
    /// The tokens do not fit the grammar (e.g. `([)`).
    #[error("syntax error")]
    Syntax,
}

/// Error type if a read does not complete.
///
/// The message is kept apart from the location so callers can match on it;
/// the Display implementation puts the two together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} in {source_name}{}: {message}", line_suffix(.line))]
pub struct ReadErr {
    pub kind: ErrorKind,
    pub message: String,
    pub source_name: String,
    pub line: Option<usize>,
}

fn line_suffix(line: &Option<usize>) -> String {
    match line {
        Some(line) => format!(" at line {line}"),
        None => String::new(),
    }
}

impl ReadErr {
    pub fn lexical(source_name: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        ReadErr {
            kind: ErrorKind::Lexical,
            message: message.into(),
            source_name: source_name.into(),
            line: Some(line),
        }
    }

    pub fn syntax(
        source_name: impl Into<String>,
        line: Option<usize>,
        message: impl Into<String>,
    ) -> Self {
        ReadErr {
            kind: ErrorKind::Syntax,
            message: message.into(),
            source_name: source_name.into(),
            line,
        }
    }

    /// The bare message, without kind or location.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Add additional context to an error.
    pub fn annotate(self, more: impl AsRef<str>) -> Self {
        ReadErr {
            message: format!("{}: {}", more.as_ref(), self.message),
            ..self
        }
    }
}

/// The main result type for this module:
/// a T (tokens, rendered forms, etc), or an error.
pub type ReadResult<T> = Result<T, ReadErr>;

impl From<ReadErr> for std::io::Error {
    fn from(value: ReadErr) -> Self {
        std::io::Error::new(IoErrorKind::InvalidInput, value)
    }
}

/// Output of [`read_with`]: whatever the configured builder produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Canonical S-expression text, one line per top-level form.
    Text(String),
    /// The placeholder builder ran; there is nothing to show.
    Unit,
}

impl Rendered {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Rendered::Text(s) => Some(s),
            Rendered::Unit => None,
        }
    }
}

/// Scan the input into tokens.
pub fn tokenize(source_name: &str, input: &str) -> ReadResult<Tokens> {
    Lexer::new(source_name, input).make_tokens()
}

/// Scan and parse the input, handing every production to `builder`.
/// Returns one output per top-level form.
pub fn read<B: AstBuilder>(
    source_name: &str,
    input: &str,
    builder: &mut B,
) -> ReadResult<Vec<B::Output>> {
    let tokens = tokenize(source_name, input)?;
    let table = TokenTable::new(source_name, tokens);
    Parser::new(table, builder).parse()
}

/// Scan and parse the input with the builder named in `options`.
pub fn read_with(source_name: &str, input: &str, options: &ReadOptions) -> ReadResult<Rendered> {
    match options.ast {
        AstType::SExpressions => {
            let forms = read(source_name, input, &mut SExpression)?;
            Ok(Rendered::Text(forms.join("\n")))
        }
        AstType::Default => {
            read(source_name, input, &mut NoOp)?;
            Ok(Rendered::Unit)
        }
    }
}
