//! TLisp core: values, environments, the reader and the evaluator.
//!
//! Source text is turned into a generic [`parser::SyntaxNode`] tree, the
//! [`reader`] converts that tree into a [`values::Value`] once, and the
//! [`evaluator`] reduces it against a chain of [`environment::Environment`]s
//! seeded by the [`builtins`] library.

pub mod api;
pub mod builtins;
pub mod environment;
pub mod evaluator;
pub mod parser;
pub mod reader;
pub mod scope_stack;
pub mod stack;
pub mod values;

pub use api::{Engine, EngineOptions, Error};
pub use environment::Environment;
pub use evaluator::{Evaluator, EvaluatorOptions};
pub use values::{Closure, Value};
