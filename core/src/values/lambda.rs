//! User-defined functions.
//!
//! A [`Closure`] pairs unevaluated formals and body with an environment it
//! owns exclusively. Partial application binds arguments into that
//! environment and hands back a closure with fewer formals left; cloning a
//! closure clones the environment too, so two copies never share bindings.

use super::value::Value;
use crate::environment::Environment;
use core::fmt;
use ecow::EcoString;

/// Formal that binds every remaining argument, as a list, to the formal after it.
pub const VARIADIC_MARKER: &str = "&";

/// A lambda value.
#[derive(Debug, Clone, PartialEq)]
pub struct Closure {
    /// Parameter names still waiting for an argument, possibly containing `&`.
    pub formals: Vec<EcoString>,

    /// The body, reduced as an S-expression once every formal is bound.
    pub body: Vec<Value>,

    /// Bindings made so far. Starts empty.
    pub env: Environment,
}

impl Closure {
    /// Create a closure with a fresh, empty environment.
    pub fn new(formals: Vec<EcoString>, body: Vec<Value>) -> Self {
        Self {
            formals,
            body,
            env: Environment::new(),
        }
    }

    /// True if the formals mention the variadic marker.
    pub fn is_variadic(&self) -> bool {
        self.formals.iter().any(|f| f == VARIADIC_MARKER)
    }

    /// Formals as a Q-expression of symbols, the form `\` was given.
    pub fn formals_value(&self) -> Value {
        Value::QExpr(self.formals.iter().cloned().map(Value::Symbol).collect())
    }
}

impl fmt::Display for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(\\ {{")?;
        for (i, formal) in self.formals.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", formal)?;
        }
        write!(f, "}} ")?;
        super::value::write_cells(f, '{', &self.body, '}')?;
        write!(f, ")")
    }
}
