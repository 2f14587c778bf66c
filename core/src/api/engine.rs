//! The TLisp evaluation engine.

use super::{EngineOptions, Error};
use crate::environment::Environment;
use crate::evaluator::Evaluator;
use crate::parser::{self, SyntaxNode};
use crate::reader;
use crate::values::Value;
use ecow::EcoString;

/// Parses, reads and evaluates programs against a persistent global
/// environment.
///
/// The global environment starts out holding the builtin library.
pub struct Engine {
    evaluator: Evaluator,
    options: EngineOptions,
}

impl Engine {
    /// Create an engine whose global environment holds every builtin.
    pub fn new(options: EngineOptions) -> Self {
        Self {
            evaluator: Evaluator::with_builtins(options.evaluator.clone()),
            options,
        }
    }

    /// Access the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// The global environment, sorted by name.
    pub fn globals(&self) -> &Environment {
        self.evaluator.global()
    }

    /// Parse, read and evaluate a whole program.
    ///
    /// The top-level expressions form one S-expression, so `+ 1 2` is a
    /// call. Returns `Err` only when the source does not parse.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn eval_str(&mut self, source: &str) -> Result<Value, Error> {
        let tree = parser::parse_with_max_depth(source, self.options.max_parse_depth)?;
        Ok(self.eval_node(&tree))
    }

    /// Read and evaluate a syntax tree from any producer.
    #[tracing::instrument(level = "trace", skip_all, fields(tag = %node.tag))]
    pub fn eval_node(&mut self, node: &SyntaxNode) -> Value {
        self.eval_value(reader::read(node))
    }

    /// Evaluate an already-read value.
    pub fn eval_value(&mut self, value: Value) -> Value {
        self.evaluator.eval(value)
    }

    /// Bind a value in the global environment, replacing any previous binding.
    pub fn define(&mut self, name: impl Into<EcoString>, value: Value) -> Result<(), Error> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::Api("cannot define an empty name".to_string()));
        }
        tracing::debug!(name = %name, "host define");
        self.evaluator.scopes_mut().define_global(name, value);
        Ok(())
    }

    /// Look a name up in the global environment.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.globals().get(name)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}
