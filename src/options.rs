//! Reader configuration.

use crate::ast::AstType;

/// How [`crate::read_with`] should handle its input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Which builder renders the parsed forms.
    pub ast: AstType,
}

impl ReadOptions {
    /// Options selecting the builder called `name`; unknown names fall back to the default.
    pub fn with_ast(name: &str) -> Self {
        ReadOptions {
            ast: AstType::from_name(name),
        }
    }
}
