//! Integer arithmetic: `+ - * /`.

use super::{Builtin, expect_at_least, type_error};
use crate::evaluator::EvalError;
use crate::values::Value;

/// Fold the arguments left to right with the builtin's operator.
///
/// `-` with a single argument negates it.
pub(super) fn builtin_op(op: Builtin, args: Vec<Value>) -> Result<Value, EvalError> {
    expect_at_least(op, &args, 1)?;

    let numbers = args
        .iter()
        .enumerate()
        .map(|(index, arg)| {
            arg.as_number()
                .ok_or_else(|| type_error(op, index, arg, "Number"))
        })
        .collect::<Result<Vec<i64>, EvalError>>()?;

    let (first, rest) = match numbers.split_first() {
        Some(split) => split,
        None => return Ok(Value::SExpr(Vec::new())),
    };

    if op == Builtin::Sub && rest.is_empty() {
        return Ok(Value::Number(first.wrapping_neg()));
    }

    let mut acc = *first;
    for &n in rest {
        acc = eval_binary_int(op, acc, n)?;
    }
    Ok(Value::Number(acc))
}

/// Evaluate a binary operation on two integers.
///
/// Uses wrapping arithmetic to prevent panics on overflow.
/// Division by zero returns an error.
fn eval_binary_int(op: Builtin, left: i64, right: i64) -> Result<i64, EvalError> {
    match op {
        Builtin::Add => Ok(left.wrapping_add(right)),
        Builtin::Sub => Ok(left.wrapping_sub(right)),
        Builtin::Mul => Ok(left.wrapping_mul(right)),
        Builtin::Div => {
            if right == 0 {
                Err(EvalError::DivisionByZero)
            } else {
                // Use wrapping_div to handle i64::MIN / -1 case
                Ok(left.wrapping_div(right))
            }
        }
        _ => Err(EvalError::IncorrectHead),
    }
}
