//! TLisp - a tiny Lisp with S-expressions and Q-expressions
//!
//! # Overview
//!
//! Programs are lists. An S-expression `(f a b)` applies `f` to its
//! arguments; a Q-expression `{f a b}` is data and stays unevaluated until
//! `eval` turns it back into code. Functions are built with `\` and curry
//! automatically when given fewer arguments than they declare.
//!
//! # Quick Start
//!
//! ```
//! use tlisp::{Engine, EngineOptions, Value};
//!
//! let mut engine = Engine::new(EngineOptions::default());
//!
//! engine.eval_str("def {add} (\\ {x y} {+ x y})").unwrap();
//! engine.eval_str("def {add5} (add 5)").unwrap();
//!
//! let result = engine.eval_str("add5 10").unwrap();
//! assert_eq!(result, Value::Number(15));
//! ```
//!
//! # Errors
//!
//! Anything that goes wrong while a program runs is an ordinary `Error`
//! value and is returned as `Ok`. Only source text that does not parse
//! produces an [`Error`], which [`render_error`] prints with the offending
//! span underlined:
//!
//! ```
//! use tlisp::{Engine, EngineOptions, render_error_to_string_no_color};
//!
//! let mut engine = Engine::new(EngineOptions::default());
//! let err = engine.eval_str("(+ 1 2").unwrap_err();
//! assert!(render_error_to_string_no_color(&err).contains("Unclosed delimiter"));
//! ```

// Re-export public API from tlisp_core
pub use tlisp_core::api::{Diagnostic, Engine, EngineOptions, Error, RelatedInfo};

// Re-export commonly used types and values
pub use tlisp_core::builtins::Builtin;
pub use tlisp_core::environment::Environment;
pub use tlisp_core::evaluator::{EvalError, EvaluatorOptions};
pub use tlisp_core::parser::{self, ParseError, SyntaxNode};
pub use tlisp_core::reader;
pub use tlisp_core::values::{self, Closure, Value};

mod error_renderer;
pub use error_renderer::{
    DEFAULT_SOURCE_NAME, render_error, render_error_to_string, render_error_to_string_no_color,
};
