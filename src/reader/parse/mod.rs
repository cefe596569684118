//! Recursive-descent parser over a [`TokenTable`].
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! program      := expression* EOF
//! expression   := keyword_expr ( "=" expression )?
//! keyword_expr := binary_expr ( KEYWORD binary_expr )*
//! binary_expr  := unary_expr ( BINARY unary_expr )*
//! unary_expr   := primary UNARY*
//! primary      := list | tuple | hash | quoted_list | symbol | number | string
//!               | self | super | identifier | message_symbol
//! ```
//!
//! `KEYWORD` is an identifier with a `:` right after it, `BINARY` a run of
//! adjacent operator characters (`+`, `==`, `,`), `UNARY` an identifier,
//! possibly ending in `?` or `!`.

use super::character::{is_identifier_symbol, is_message_symbol};
use super::table::TokenTable;
use super::token::{Token, TokenKind};
use super::ReadResult;
use crate::ast::AstBuilder;

/// Where an expression sits, which decides how it may end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    /// The top level, and the bodies of lists, quoted lists and tuples.
    Body,
    /// A hash association's value: a `,` or a `key:` starts the next association.
    Hash,
}

/// A parsed form, before it is handed to a container.
enum Form<T> {
    /// A bare terminal.
    Terminal(T),
    /// A literal or group the builder has already seen.
    Built(T),
    /// A message send not yet given to the builder: selector, receiver, arguments.
    Send(Vec<T>),
}

impl<T> Form<T> {
    fn is_terminal(&self) -> bool {
        matches!(self, Form::Terminal(_))
    }
}

/// An identifier in selector or operand position: `name`, or `name?` / `name!`.
struct Name {
    token: Token,
    width: usize,
    with_suffix: bool,
}

fn is_closer(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::RightParen | TokenKind::RightBracket | TokenKind::RightBrace
    )
}

fn is_operator(token: &Token) -> bool {
    token.kind == TokenKind::Symbol && token.value.chars().all(is_message_symbol)
}

/// Single-use parser: build with a table and a builder, then call [`Parser::parse`].
pub struct Parser<'b, B: AstBuilder> {
    table: TokenTable,
    builder: &'b mut B,
}

impl<'b, B: AstBuilder> Parser<'b, B> {
    pub fn new(table: TokenTable, builder: &'b mut B) -> Self {
        Parser { table, builder }
    }

    /// Parse every top-level form, returning one output per form.
    pub fn parse(mut self) -> ReadResult<Vec<B::Output>> {
        let mut forms = Vec::new();
        while !self.table.peek().is_eof() {
            let line = self.table.peek().line_number;
            let form = self.expression(Context::Body)?;
            tracing::trace!("parsed form {} starting on line {line}", forms.len());
            forms.push(self.build(form));
        }
        tracing::debug!(
            "parsed {} forms from {} with the {} builder",
            forms.len(),
            self.table.source_name(),
            self.builder.name()
        );
        Ok(forms)
    }

    fn build(&mut self, form: Form<B::Output>) -> B::Output {
        match form {
            Form::Terminal(output) | Form::Built(output) => output,
            Form::Send(units) => self.builder.list(units),
        }
    }

    /// The units of a bracketed body.
    /// A body that is one message send is spread out: `[a , b]` holds `, a b`.
    fn body(&mut self, mut forms: Vec<Form<B::Output>>) -> Vec<B::Output> {
        if forms.len() == 1 {
            if let Some(Form::Send(units)) = forms.pop() {
                return units;
            }
        }
        forms.into_iter().map(|f| self.build(f)).collect()
    }

    fn skip(&mut self, count: usize) {
        for _ in 0..count {
            self.table.consume();
        }
    }

    /// Fail unless the next token can begin an operand of `after`.
    fn expect_operand(&self, after: &str) -> ReadResult<()> {
        let next = self.table.peek();
        if next.is_eof() || is_closer(next.kind) {
            return self.table.fail(format!("missing argument after '{after}'"));
        }
        Ok(())
    }

    /// An identifier followed immediately by `:`.
    fn at_keyword(&self) -> bool {
        let name = self.table.peek();
        let colon = self.table.peek_nth(1);
        name.kind == TokenKind::Identifier && colon.is_symbol(":") && name.is_adjacent_to(colon)
    }

    /// The identifier at the cursor, joined with a trailing `?` or `!` if one
    /// is attached and does not begin an operator such as `!=`.
    fn peek_name(&self) -> Option<Name> {
        let first = self.table.peek();
        if first.kind != TokenKind::Identifier {
            return None;
        }
        let next = self.table.peek_nth(1);
        let after = self.table.peek_nth(2);
        let suffixed = next.kind == TokenKind::Symbol
            && next.value.chars().all(is_identifier_symbol)
            && first.is_adjacent_to(next)
            && !(is_operator(after) && next.is_adjacent_to(after));
        if suffixed {
            let joined = format!("{}{}", first.value, next.value);
            Some(Name {
                token: Token::new(TokenKind::Identifier, joined, first.line_number, first.offset),
                width: 2,
                with_suffix: true,
            })
        } else {
            Some(Name {
                token: first.clone(),
                width: 1,
                with_suffix: false,
            })
        }
    }

    /// The binary selector at the cursor and how many tokens it spans.
    /// Adjacent operator characters form one selector (`==`, `=>`), except
    /// that `,` always stands alone.
    fn peek_binary_selector(&self) -> Option<(Token, usize)> {
        let first = self.table.peek();
        if !is_operator(first) {
            return None;
        }
        let mut value = first.value.clone();
        let mut width = 1;
        if first.value != "," {
            let mut last = first;
            loop {
                let next = self.table.peek_nth(width);
                if !is_operator(next) || next.value == "," || !last.is_adjacent_to(next) {
                    break;
                }
                value.push_str(&next.value);
                width += 1;
                last = next;
            }
        }
        let selector = Token::new(TokenKind::Symbol, value, first.line_number, first.offset);
        Some((selector, width))
    }

    /// A lone `=`, which assigns rather than sending a binary message.
    fn at_assignment(&self) -> bool {
        matches!(self.peek_binary_selector(), Some((selector, _)) if selector.value == "=")
    }

    fn emit_name(&mut self, name: &Name) -> B::Output {
        if name.with_suffix {
            self.builder.terminal_identifier_symbol(&name.token)
        } else {
            self.builder.terminal_identifier(&name.token)
        }
    }

    fn expression(&mut self, context: Context) -> ReadResult<Form<B::Output>> {
        let target = self.keyword_expression(context)?;
        if !self.at_assignment() {
            return Ok(target);
        }
        let equals = self.table.consume();
        self.expect_operand(&equals.value)?;
        let value = self.expression(context)?;
        let selector = self.builder.terminal_message_symbol(&equals);
        let target = self.build(target);
        let value = self.build(value);
        Ok(Form::Send(vec![selector, target, value]))
    }

    /// `receiver part1: arg1 part2: arg2`, sent as the single selector `part1:part2:`.
    /// Hash values stop short of keywords, which begin the next association.
    fn keyword_expression(&mut self, context: Context) -> ReadResult<Form<B::Output>> {
        let receiver = self.binary_expression(context)?;
        if context == Context::Hash || !self.at_keyword() {
            return Ok(receiver);
        }

        let start = self.table.peek().clone();
        let mut selector = String::new();
        let mut arguments = Vec::new();
        while self.at_keyword() {
            let part = self.table.consume();
            self.table.consume();
            selector.push_str(&part.value);
            selector.push(':');
            self.expect_operand(&format!("{}:", part.value))?;
            let argument = self.binary_expression(context)?;
            arguments.push(self.build(argument));
        }

        let selector = Token::new(TokenKind::Identifier, selector, start.line_number, start.offset);
        let mut units = vec![
            self.builder.terminal_keyword_selector(&selector),
            self.build(receiver),
        ];
        units.extend(arguments);
        Ok(Form::Send(units))
    }

    /// Left-associative: `a + b * c` is `(a + b) * c`.
    fn binary_expression(&mut self, context: Context) -> ReadResult<Form<B::Output>> {
        let mut left = self.unary_expression()?;
        while let Some((selector, width)) = self.peek_binary_selector() {
            if selector.value == "=" || (context == Context::Hash && selector.value == ",") {
                break;
            }
            self.skip(width);
            self.expect_operand(&selector.value)?;
            let right = self.unary_expression()?;
            let selector = self.builder.terminal_message_symbol(&selector);
            let receiver = self.build(left);
            let argument = self.build(right);
            left = Form::Send(vec![selector, receiver, argument]);
        }
        Ok(left)
    }

    fn unary_expression(&mut self) -> ReadResult<Form<B::Output>> {
        let mut receiver = self.primary()?;
        while !self.at_keyword() {
            let Some(name) = self.peek_name() else { break };
            if matches!(name.token.value.as_str(), "self" | "super") {
                break;
            }
            self.skip(name.width);
            let selector = self.emit_name(&name);
            let target = self.build(receiver);
            receiver = Form::Send(vec![selector, target]);
        }
        Ok(receiver)
    }

    fn primary(&mut self) -> ReadResult<Form<B::Output>> {
        let token = self.table.peek().clone();
        match token.kind {
            TokenKind::LeftParen => self.list(),
            TokenKind::LeftBracket => self.tuple(),
            TokenKind::LeftBrace => self.hash(),
            TokenKind::Integer | TokenKind::BigInteger | TokenKind::Float => {
                self.table.consume();
                let number = self.builder.terminal_positive_base_ten_number(&token);
                Ok(Form::Terminal(self.builder.base_ten_literal(None, number)))
            }
            TokenKind::Binary | TokenKind::Hexadecimal | TokenKind::Octal => {
                self.table.consume();
                Ok(Form::Terminal(
                    self.builder.terminal_alternate_base_number(&token),
                ))
            }
            TokenKind::String => {
                self.table.consume();
                Ok(Form::Terminal(self.builder.terminal_string(&token)))
            }
            TokenKind::Identifier => {
                if self.at_keyword() {
                    return self
                        .table
                        .fail(format!("unexpected keyword '{}:'", token.value));
                }
                let output = match token.value.as_str() {
                    "self" => {
                        self.table.consume();
                        self.builder.terminal_self(&token)
                    }
                    "super" => {
                        self.table.consume();
                        self.builder.terminal_super(&token)
                    }
                    _ => {
                        let name = self.peek_name().unwrap_or(Name {
                            token: token.clone(),
                            width: 1,
                            with_suffix: false,
                        });
                        self.skip(name.width);
                        self.emit_name(&name)
                    }
                };
                Ok(Form::Terminal(output))
            }
            TokenKind::Symbol => self.punctuation(token),
            TokenKind::RightParen | TokenKind::RightBracket | TokenKind::RightBrace => self
                .table
                .fail(format!("unexpected token '{}'", token.value)),
            TokenKind::Eof => self.table.fail("unexpected end of input"),
        }
    }

    /// Primaries that start with a punctuation character:
    /// `:symbol`, `` `(quoted) ``, `-5`, or an operator used as a value.
    fn punctuation(&mut self, token: Token) -> ReadResult<Form<B::Output>> {
        let next = self.table.peek_nth(1).clone();
        let attached = token.is_adjacent_to(&next);
        match token.value.as_str() {
            ":" if attached && next.kind == TokenKind::Identifier => {
                self.skip(2);
                Ok(Form::Built(self.builder.symbol_literal(&next)))
            }
            "`" if attached && next.kind == TokenKind::LeftParen => {
                self.table.consume();
                self.quoted_list()
            }
            "-" if attached && next.kind.is_base_ten() => {
                self.skip(2);
                let sign = self.builder.terminal_sign(&token);
                let number = self.builder.terminal_positive_base_ten_number(&next);
                Ok(Form::Built(
                    self.builder.base_ten_literal(Some(sign), number),
                ))
            }
            _ => match self.peek_binary_selector() {
                Some((selector, width)) => {
                    self.skip(width);
                    Ok(Form::Terminal(
                        self.builder.terminal_message_symbol(&selector),
                    ))
                }
                None => self
                    .table
                    .fail(format!("unexpected token '{}'", token.value)),
            },
        }
    }

    /// Forms up to `closer`, which is consumed.
    /// Reaching end-of-input, or a closer of another shape, fails with `missing`.
    fn sequence(&mut self, closer: TokenKind, missing: &str) -> ReadResult<Vec<Form<B::Output>>> {
        let mut forms = Vec::new();
        loop {
            let next = self.table.peek();
            if next.kind == closer {
                self.table.consume();
                return Ok(forms);
            }
            if next.is_eof() || is_closer(next.kind) {
                return self.table.fail(missing);
            }
            forms.push(self.expression(Context::Body)?);
        }
    }

    /// `( ... )`. Parentheses around a single send or literal only group it.
    fn list(&mut self) -> ReadResult<Form<B::Output>> {
        self.table.consume();
        let mut forms = self.sequence(TokenKind::RightParen, "missing closing parenthesis on list")?;
        if forms.len() == 1 && !forms[0].is_terminal() {
            if let Some(form) = forms.pop() {
                return Ok(form);
            }
        }
        let units = forms.into_iter().map(|f| self.build(f)).collect();
        Ok(Form::Built(self.builder.list(units)))
    }

    /// `` `( ... ) ``, with the backquote already consumed.
    fn quoted_list(&mut self) -> ReadResult<Form<B::Output>> {
        self.table.consume();
        let forms = self.sequence(
            TokenKind::RightParen,
            "missing closing parenthesis on quoted list",
        )?;
        let units = self.body(forms);
        Ok(Form::Built(self.builder.quoted_list(units)))
    }

    /// `[ ... ]`. A comma between items is the `,` message, as in a list.
    fn tuple(&mut self) -> ReadResult<Form<B::Output>> {
        self.table.consume();
        let forms = self.sequence(TokenKind::RightBracket, "missing closing bracket on tuple")?;
        let items = self.body(forms);
        Ok(Form::Built(self.builder.tuple_literal(items)))
    }

    /// `{ ... }`, associations optionally separated by commas.
    fn hash(&mut self) -> ReadResult<Form<B::Output>> {
        self.table.consume();
        let mut associations = Vec::new();
        loop {
            let next = self.table.peek();
            if next.kind == TokenKind::RightBrace {
                self.table.consume();
                break;
            }
            if next.is_eof() || is_closer(next.kind) {
                return self.table.fail("missing closing brace on hash");
            }
            associations.push(self.association()?);
            self.table.consume_symbol(",");
        }
        Ok(Form::Built(self.builder.hash_literal(associations)))
    }

    /// One of `key: value`, `:key => value`, `"key" => value`.
    fn association(&mut self) -> ReadResult<B::Output> {
        let key = self.table.peek().clone();
        let next = self.table.peek_nth(1).clone();

        if self.at_keyword() {
            self.skip(2);
            let value = self.association_value(&format!("{}:", key.value))?;
            return Ok(self.builder.json_association(&key, value));
        }

        let key = if key.is_symbol(":")
            && next.kind == TokenKind::Identifier
            && key.is_adjacent_to(&next)
        {
            self.skip(2);
            self.builder.symbol_literal(&next)
        } else if key.kind == TokenKind::String {
            self.table.consume();
            self.builder.terminal_string(&key)
        } else {
            return self.table.fail("invalid key in hash association");
        };

        let equals = self.table.peek();
        let arrow = self.table.peek_nth(1);
        if !(equals.is_symbol("=") && arrow.is_symbol(">") && equals.is_adjacent_to(arrow)) {
            return self.table.fail("expected '=>' in hash association");
        }
        self.skip(2);
        let value = self.association_value("=>")?;
        Ok(self.builder.association(key, value))
    }

    /// Keyword messages in a value need parentheses: `{a: (x at: 1)}`.
    fn association_value(&mut self, after: &str) -> ReadResult<B::Output> {
        self.expect_operand(after)?;
        let value = self.expression(Context::Hash)?;
        Ok(self.build(value))
    }
}

#[cfg(test)]
mod parse_test;
