//! Source text to syntax tree.
//!
//! The evaluator never looks at source text. This module turns it into the
//! generic [`SyntaxNode`] tree that [`crate::reader`] consumes, so any other
//! parser producing the same shape of tree can be swapped in.

pub mod error;
pub mod parser;
mod syntax;

pub use error::{ParseError, ParseErrorKind};
pub use parser::{DEFAULT_MAX_DEPTH, Rule, TLispParser, parse, parse_with_max_depth};
pub use syntax::{Span, SyntaxNode};
