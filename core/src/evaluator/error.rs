//! Evaluation failures.
//!
//! Failures never leave the evaluator as a Rust error. Builtins and the
//! reduction loop build an [`EvalError`] and turn it into a
//! [`Value::Error`], which then flows through evaluation like any other
//! value. Keeping the variants typed gives every message a single template.

use crate::values::Value;
use ecow::EcoString;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("unbound symbol '{name}'")]
    UnboundSymbol { name: EcoString },

    #[error("S-Expression starts with incorrect type")]
    IncorrectHead,

    #[error("too many arguments")]
    TooManyArguments,

    #[error("invalid variadic formal")]
    InvalidVariadic,

    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid number")]
    InvalidNumber,

    #[error("function '{func}' passed incorrect number of arguments: got {got}, expected {expected}")]
    ArgumentCount {
        func: &'static str,
        got: usize,
        expected: usize,
    },

    #[error(
        "function '{func}' passed incorrect number of arguments: got {got}, expected at least {min}"
    )]
    TooFewArguments {
        func: &'static str,
        got: usize,
        min: usize,
    },

    #[error("function '{func}' passed incorrect type for argument {index}: got {got}, expected {expected}")]
    ArgumentType {
        func: &'static str,
        index: usize,
        got: &'static str,
        expected: &'static str,
    },

    #[error("function '{func}' passed {{}} for argument {index}")]
    EmptyList { func: &'static str, index: usize },

    #[error("function '{func}' cannot define non-symbol: got {got}, expected Symbol")]
    NonSymbol {
        func: &'static str,
        got: &'static str,
    },

    #[error(
        "function '{func}' passed mismatched symbols and values: got {symbols} symbols, expected {values}"
    )]
    SymbolCountMismatch {
        func: &'static str,
        symbols: usize,
        values: usize,
    },

    #[error("evaluation depth {depth} exceeds maximum of {max_depth}")]
    DepthExceeded { depth: usize, max_depth: usize },
}

impl From<EvalError> for Value {
    fn from(err: EvalError) -> Self {
        Value::error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            EvalError::UnboundSymbol { name: "foo".into() }.to_string(),
            "unbound symbol 'foo'"
        );
        assert_eq!(
            EvalError::ArgumentCount {
                func: "head",
                got: 2,
                expected: 1
            }
            .to_string(),
            "function 'head' passed incorrect number of arguments: got 2, expected 1"
        );
        assert_eq!(
            EvalError::ArgumentType {
                func: "join",
                index: 1,
                got: "Number",
                expected: "Q-Expression"
            }
            .to_string(),
            "function 'join' passed incorrect type for argument 1: got Number, expected Q-Expression"
        );
        assert_eq!(
            EvalError::EmptyList {
                func: "tail",
                index: 0
            }
            .to_string(),
            "function 'tail' passed {} for argument 0"
        );
    }

    #[test]
    fn test_into_value() {
        let value: Value = EvalError::DivisionByZero.into();
        assert_eq!(value, Value::error("division by zero"));
    }
}
