//! S-expression reduction.
//!
//! The evaluator reduces a [`Value`] against the current chain of
//! environments and produces a final `Value`.
//!
//! ## Reduction rules
//!
//! - **Symbol**: resolved through the chain; the bound value is cloned out.
//! - **S-expression**: elements are evaluated left to right. The first
//!   `Error` wins and the rest are never evaluated. `()` is itself, `(x)` is
//!   `x`, anything longer applies the first element to the others.
//! - **Anything else** evaluates to itself.
//!
//! ## Function application
//!
//! Builtins receive the argument list by value. Closures bind formals one
//! argument at a time: running out of arguments returns a partially applied
//! closure, running out of formals is an error, and an exact fit pushes the
//! closure's environment on top of the caller's and reduces the body there.
//!
//! ## Example
//!
//! ```
//! use tlisp_core::{evaluator, parser, reader, values::Value};
//!
//! let tree = parser::parse("(+ 1 (* 2 3))").unwrap();
//! let result = evaluator::eval(reader::read(&tree));
//! assert_eq!(result, Value::Number(7));
//! ```

mod error;
mod eval;


pub use error::EvalError;
pub use eval::Evaluator;

use crate::values::Value;

/// Evaluator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Maximum evaluation stack depth (for recursion protection).
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self { max_depth: 1000 }
    }
}

/// Evaluate a value in a fresh global environment holding only the builtins.
///
/// Uses the default depth limit of 1000.
pub fn eval(value: Value) -> Value {
    eval_with_limits(value, EvaluatorOptions::default().max_depth)
}

/// Evaluate a value in a fresh global environment with a custom depth limit.
pub fn eval_with_limits(value: Value, max_depth: usize) -> Value {
    Evaluator::with_builtins(EvaluatorOptions { max_depth }).eval(value)
}
