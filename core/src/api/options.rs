//! Configuration options for the TLisp engine.

use crate::evaluator::EvaluatorOptions;
use crate::parser::DEFAULT_MAX_DEPTH;

/// Configuration options for the TLisp engine.
///
/// # Example
///
/// ```
/// use tlisp_core::api::EngineOptions;
/// use tlisp_core::evaluator::EvaluatorOptions;
///
/// let options = EngineOptions {
///     evaluator: EvaluatorOptions { max_depth: 500 },
///     max_parse_depth: 64,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Options for every evaluation the engine runs.
    pub evaluator: EvaluatorOptions,

    /// Maximum bracket nesting accepted by the parser.
    ///
    /// Default: 256
    pub max_parse_depth: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            evaluator: EvaluatorOptions::default(),
            max_parse_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
