//! Builders for the parser's output.
//!
//! The parser does not construct a tree itself. At each grammar production it
//! calls the matching [`AstBuilder`] method and keeps whatever comes back, so
//! the same parse can produce canonical text ([`SExpression`]), nothing at
//! all ([`NoOp`]), or any other representation a builder chooses.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::reader::Token;

mod noop;
mod sexpr;

pub use noop::NoOp;
pub use sexpr::SExpression;

/// One method per grammar production.
///
/// Sequences arrive in source order. Terminals arrive as the token that
/// spelled them; selectors made of several tokens (`==`, `empty?`,
/// `at:put:`) arrive as a single token holding the joined text.
pub trait AstBuilder {
    type Output;

    /// Name used in diagnostics.
    fn name(&self) -> &'static str;

    /// `` `(a b c) ``
    fn quoted_list(&mut self, units: Vec<Self::Output>) -> Self::Output;

    /// A parenthesized sequence, and every message send:
    /// message sends arrive as `[selector, receiver, arguments...]`.
    fn list(&mut self, units: Vec<Self::Output>) -> Self::Output;

    /// A decimal number with its optional sign.
    fn base_ten_literal(&mut self, sign: Option<Self::Output>, number: Self::Output) -> Self::Output;

    /// `[a b c]`
    fn tuple_literal(&mut self, items: Vec<Self::Output>) -> Self::Output;

    /// `{...}`, given the outputs of its associations.
    fn hash_literal(&mut self, associations: Vec<Self::Output>) -> Self::Output;

    /// `:key => value` or `"key" => value`.
    fn association(&mut self, key: Self::Output, value: Self::Output) -> Self::Output;

    /// `key: value`, with a bare identifier as the key.
    fn json_association(&mut self, key: &Token, value: Self::Output) -> Self::Output;

    /// `:name`
    fn symbol_literal(&mut self, id: &Token) -> Self::Output;

    fn terminal_self(&mut self, keyword: &Token) -> Self::Output;

    fn terminal_super(&mut self, keyword: &Token) -> Self::Output;

    fn terminal_positive_base_ten_number(&mut self, number: &Token) -> Self::Output;

    fn terminal_alternate_base_number(&mut self, number: &Token) -> Self::Output;

    fn terminal_string(&mut self, value: &Token) -> Self::Output;

    fn terminal_identifier(&mut self, id: &Token) -> Self::Output;

    /// Binary selectors such as `+` or `==`, in selector or operand position.
    fn terminal_message_symbol(&mut self, symbol: &Token) -> Self::Output;

    /// Identifiers with a trailing `?` or `!`.
    fn terminal_identifier_symbol(&mut self, symbol: &Token) -> Self::Output;

    /// The concatenated parts of a keyword message, e.g. `at:put:`.
    fn terminal_keyword_selector(&mut self, selector: &Token) -> Self::Output;

    /// The `-` in front of a negative number.
    fn terminal_sign(&mut self, sign: &Token) -> Self::Output;
}

/// Which builder to run, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AstType {
    /// Canonical S-expression text; see [`SExpression`].
    SExpressions,
    /// The placeholder builder; see [`NoOp`].
    #[default]
    Default,
}

impl AstType {
    /// Select a builder by name. Unrecognized names select [`AstType::Default`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "s-expressions" => AstType::SExpressions,
            _ => AstType::Default,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AstType::SExpressions => "s-expressions",
            AstType::Default => "default",
        }
    }
}

impl FromStr for AstType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AstType::from_name(s))
    }
}

impl fmt::Display for AstType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
