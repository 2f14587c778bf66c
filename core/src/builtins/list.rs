//! List construction and deconstruction: `list`, `head`, `tail`, `join`, `eval`.

use super::{Builtin, exact_args, into_non_empty_qexpr, into_qexpr};
use crate::evaluator::{EvalError, Evaluator};
use crate::values::Value;

/// `list a b c` => `{a b c}`. The argument list itself becomes the result.
pub(super) fn builtin_list(args: Vec<Value>) -> Result<Value, EvalError> {
    Ok(Value::QExpr(args))
}

/// `head {a b c}` => `{a}`
pub(super) fn builtin_head(args: Vec<Value>) -> Result<Value, EvalError> {
    let [list] = exact_args(Builtin::Head, args)?;
    let mut cells = into_non_empty_qexpr(Builtin::Head, 0, list)?;
    cells.truncate(1);
    Ok(Value::QExpr(cells))
}

/// `tail {a b c}` => `{b c}`
pub(super) fn builtin_tail(args: Vec<Value>) -> Result<Value, EvalError> {
    let [list] = exact_args(Builtin::Tail, args)?;
    let mut cells = into_non_empty_qexpr(Builtin::Tail, 0, list)?;
    cells.remove(0);
    Ok(Value::QExpr(cells))
}

/// `join {a} {b c}` => `{a b c}`
///
/// Every argument is checked before any is joined. `join` with no arguments
/// is `{}`.
pub(super) fn builtin_join(args: Vec<Value>) -> Result<Value, EvalError> {
    if let Some((index, bad)) = args
        .iter()
        .enumerate()
        .find(|(_, arg)| !matches!(arg, Value::QExpr(_)))
    {
        return Err(super::type_error(Builtin::Join, index, bad, "Q-Expression"));
    }

    let mut joined = Vec::new();
    for (index, arg) in args.into_iter().enumerate() {
        joined.extend(into_qexpr(Builtin::Join, index, arg)?);
    }
    Ok(Value::QExpr(joined))
}

/// `eval {+ 1 2}` => `3`, reduced in the caller's environment.
pub(super) fn builtin_eval(
    evaluator: &mut Evaluator,
    args: Vec<Value>,
) -> Result<Value, EvalError> {
    let [expr] = exact_args(Builtin::Eval, args)?;
    let cells = into_qexpr(Builtin::Eval, 0, expr)?;
    Ok(evaluator.eval(Value::SExpr(cells)))
}
