//! Canonical S-expression text.
//!
//! Every literal is desugared into an explicit constructor call:
//!
//! | Source              | Output                                    |
//! |---------------------|-------------------------------------------|
//! | `[1 2]`             | `(new Tuple (1 2))`                       |
//! | `{a: 1}`            | `(new Hash ((new Association (new Symbol "a") 1)))` |
//! | `:a`                | `(new Symbol "a")`                        |
//! | `-5`                | `(negated 5)`                             |
//! | `` `(a b) ``        | `(__quoted__ (a b))`                      |
//!
//! Message sends put the selector first: `(x at: 1 put: 2)` is `(at:put: x 1 2)`.

use super::AstBuilder;
use crate::reader::Token;

/// Renders each production straight to text. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SExpression;

/// `(a b c)`, or `()` when empty.
fn parenthesize(units: &[String]) -> String {
    format!("({})", units.join(" "))
}

impl AstBuilder for SExpression {
    type Output = String;

    fn name(&self) -> &'static str {
        "s-expressions"
    }

    fn quoted_list(&mut self, units: Vec<String>) -> String {
        format!("(__quoted__ {})", parenthesize(&units))
    }

    fn list(&mut self, units: Vec<String>) -> String {
        parenthesize(&units)
    }

    fn base_ten_literal(&mut self, sign: Option<String>, number: String) -> String {
        match sign.as_deref() {
            Some("-") => format!("(negated {number})"),
            _ => number,
        }
    }

    fn tuple_literal(&mut self, items: Vec<String>) -> String {
        format!("(new Tuple {})", parenthesize(&items))
    }

    fn hash_literal(&mut self, associations: Vec<String>) -> String {
        format!("(new Hash {})", parenthesize(&associations))
    }

    fn association(&mut self, key: String, value: String) -> String {
        format!("(new Association {key} {value})")
    }

    fn json_association(&mut self, key: &Token, value: String) -> String {
        let key = self.symbol_literal(key);
        self.association(key, value)
    }

    fn symbol_literal(&mut self, id: &Token) -> String {
        format!("(new Symbol \"{}\")", id.value)
    }

    fn terminal_self(&mut self, keyword: &Token) -> String {
        keyword.value.clone()
    }

    fn terminal_super(&mut self, keyword: &Token) -> String {
        keyword.value.clone()
    }

    fn terminal_positive_base_ten_number(&mut self, number: &Token) -> String {
        number.value.clone()
    }

    fn terminal_alternate_base_number(&mut self, number: &Token) -> String {
        number.value.clone()
    }

    fn terminal_string(&mut self, value: &Token) -> String {
        value.value.clone()
    }

    fn terminal_identifier(&mut self, id: &Token) -> String {
        id.value.clone()
    }

    fn terminal_message_symbol(&mut self, symbol: &Token) -> String {
        symbol.value.clone()
    }

    fn terminal_identifier_symbol(&mut self, symbol: &Token) -> String {
        symbol.value.clone()
    }

    fn terminal_keyword_selector(&mut self, selector: &Token) -> String {
        selector.value.clone()
    }

    fn terminal_sign(&mut self, sign: &Token) -> String {
        sign.value.clone()
    }
}
