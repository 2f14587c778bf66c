//! Public API for embedding TLisp.
//!
//! An [`Engine`] owns one global environment for its whole life, so
//! definitions made by one call are visible to the next, the way a REPL
//! session behaves.
//!
//! # Example
//!
//! ```
//! use tlisp_core::api::{Engine, EngineOptions};
//! use tlisp_core::values::Value;
//!
//! let mut engine = Engine::new(EngineOptions::default());
//!
//! engine.eval_str("def {add1} (\\ {x} {+ x 1})").unwrap();
//! let result = engine.eval_str("add1 41").unwrap();
//! assert_eq!(result, Value::Number(42));
//!
//! // Evaluation failures are values, not `Err`.
//! let result = engine.eval_str("/ 1 0").unwrap();
//! assert_eq!(result.to_string(), "Error: division by zero");
//! ```

pub mod engine;
pub mod error;
pub mod options;

#[cfg(test)]
mod engine_test;

pub use engine::Engine;
pub use error::{Diagnostic, Error, RelatedInfo};
pub use options::EngineOptions;
