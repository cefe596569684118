//! Reader for oblisp, an object-oriented Lisp with Smalltalk-style messages.
//!
//! Source text is scanned into tokens, then parsed into whatever an
//! [`AstBuilder`] makes of it:
//!
//! ```
//! use oblisp::{read_with, ReadOptions};
//!
//! let options = ReadOptions::with_ast("s-expressions");
//! let out = read_with("demo.obl", "(x at: 1 put: :a)", &options).unwrap();
//! assert_eq!(out.as_text(), Some("(at:put: x 1 (new Symbol \"a\"))"));
//! ```

pub mod ast;
pub mod options;
pub mod reader;

pub use ast::{AstBuilder, AstType, NoOp, SExpression};
pub use options::ReadOptions;
pub use reader::{read, read_with, tokenize, ErrorKind, ReadErr, ReadResult, Rendered};
