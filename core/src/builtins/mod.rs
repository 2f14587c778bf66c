//! The primitive operations every program starts with.
//!
//! Each builtin takes its argument list by value, checks arity and types
//! before touching anything, and returns a single [`Value`]. Validation
//! failures come back as `Error` values naming the builtin.

mod arith;
mod binding;
mod list;


use crate::environment::Environment;
use crate::evaluator::{EvalError, Evaluator};
use crate::values::Value;
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref BY_NAME: HashMap<&'static str, Builtin> =
        Builtin::ALL.into_iter().map(|b| (b.name(), b)).collect();
}

/// Identifies one primitive operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    List,
    Head,
    Tail,
    Join,
    Eval,
    Def,
    Put,
    Lambda,
    Add,
    Sub,
    Mul,
    Div,
}

impl Builtin {
    /// Every builtin, in registration order.
    pub const ALL: [Builtin; 12] = [
        Builtin::List,
        Builtin::Head,
        Builtin::Tail,
        Builtin::Join,
        Builtin::Eval,
        Builtin::Def,
        Builtin::Put,
        Builtin::Lambda,
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
    ];

    /// The symbol this builtin is bound to.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::List => "list",
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::Join => "join",
            Builtin::Eval => "eval",
            Builtin::Def => "def",
            Builtin::Put => "=",
            Builtin::Lambda => "\\",
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
        }
    }

    pub fn from_name(name: &str) -> Option<Builtin> {
        BY_NAME.get(name).copied()
    }

    /// Run the builtin on an owned argument list.
    pub fn call(self, evaluator: &mut Evaluator, args: Vec<Value>) -> Value {
        let result = match self {
            Builtin::List => list::builtin_list(args),
            Builtin::Head => list::builtin_head(args),
            Builtin::Tail => list::builtin_tail(args),
            Builtin::Join => list::builtin_join(args),
            Builtin::Eval => list::builtin_eval(evaluator, args),
            Builtin::Def | Builtin::Put => binding::builtin_var(evaluator, self, args),
            Builtin::Lambda => binding::builtin_lambda(args),
            Builtin::Add | Builtin::Sub | Builtin::Mul | Builtin::Div => {
                arith::builtin_op(self, args)
            }
        };
        result.unwrap_or_else(Value::from)
    }
}

/// Bind every builtin under its name.
pub fn register_builtins(env: &mut Environment) {
    for builtin in Builtin::ALL {
        env.put(builtin.name(), Value::Builtin(builtin));
    }
    tracing::debug!(count = Builtin::ALL.len(), "registered builtins");
}

// ============================================================================
// Argument checks
// ============================================================================

/// Move exactly `N` arguments out of the list.
fn exact_args<const N: usize>(func: Builtin, args: Vec<Value>) -> Result<[Value; N], EvalError> {
    let got = args.len();
    args.try_into().map_err(|_| EvalError::ArgumentCount {
        func: func.name(),
        got,
        expected: N,
    })
}

fn expect_at_least(func: Builtin, args: &[Value], min: usize) -> Result<(), EvalError> {
    if args.len() >= min {
        Ok(())
    } else {
        Err(EvalError::TooFewArguments {
            func: func.name(),
            got: args.len(),
            min,
        })
    }
}

fn type_error(func: Builtin, index: usize, got: &Value, expected: &'static str) -> EvalError {
    EvalError::ArgumentType {
        func: func.name(),
        index,
        got: got.type_name(),
        expected,
    }
}

/// Take the cells out of a Q-expression argument.
fn into_qexpr(func: Builtin, index: usize, value: Value) -> Result<Vec<Value>, EvalError> {
    match value {
        Value::QExpr(cells) => Ok(cells),
        other => Err(type_error(func, index, &other, "Q-Expression")),
    }
}

/// Take the cells out of a Q-expression argument that must not be `{}`.
fn into_non_empty_qexpr(
    func: Builtin,
    index: usize,
    value: Value,
) -> Result<Vec<Value>, EvalError> {
    let cells = into_qexpr(func, index, value)?;
    if cells.is_empty() {
        return Err(EvalError::EmptyList {
            func: func.name(),
            index,
        });
    }
    Ok(cells)
}
