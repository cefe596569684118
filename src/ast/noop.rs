use super::AstBuilder;
use crate::reader::Token;

/// Builds nothing.
///
/// Stands in for a typed tree builder: running the parser with it checks
/// the input's syntax and discards the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOp;

impl AstBuilder for NoOp {
    type Output = ();

    fn name(&self) -> &'static str {
        "default"
    }

    fn quoted_list(&mut self, _units: Vec<()>) {}

    fn list(&mut self, _units: Vec<()>) {}

    fn base_ten_literal(&mut self, _sign: Option<()>, _number: ()) {}

    fn tuple_literal(&mut self, _items: Vec<()>) {}

    fn hash_literal(&mut self, _associations: Vec<()>) {}

    fn association(&mut self, _key: (), _value: ()) {}

    fn json_association(&mut self, _key: &Token, _value: ()) {}

    fn symbol_literal(&mut self, _id: &Token) {}

    fn terminal_self(&mut self, _keyword: &Token) {}

    fn terminal_super(&mut self, _keyword: &Token) {}

    fn terminal_positive_base_ten_number(&mut self, _number: &Token) {}

    fn terminal_alternate_base_number(&mut self, _number: &Token) {}

    fn terminal_string(&mut self, _value: &Token) {}

    fn terminal_identifier(&mut self, _id: &Token) {}

    fn terminal_message_symbol(&mut self, _symbol: &Token) {}

    fn terminal_identifier_symbol(&mut self, _symbol: &Token) {}

    fn terminal_keyword_selector(&mut self, _selector: &Token) {}

    fn terminal_sign(&mut self, _sign: &Token) {}
}
