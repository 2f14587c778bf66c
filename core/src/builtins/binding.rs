//! Binding forms: `def`, `=` and the lambda constructor `\`.

use super::{Builtin, exact_args, expect_at_least, into_qexpr};
use crate::evaluator::{EvalError, Evaluator};
use crate::values::{Closure, Value};
use ecow::EcoString;

/// `def {a b} 1 2` binds in the global environment, `= {a b} 1 2` in the
/// innermost one. Both return `()`.
pub(super) fn builtin_var(
    evaluator: &mut Evaluator,
    func: Builtin,
    args: Vec<Value>,
) -> Result<Value, EvalError> {
    expect_at_least(func, &args, 1)?;

    let mut args = args.into_iter();
    let names = args.next().map_or(Ok(Vec::new()), |v| into_qexpr(func, 0, v))?;
    let names = symbols(func, names)?;

    let values: Vec<Value> = args.collect();
    if names.len() != values.len() {
        return Err(EvalError::SymbolCountMismatch {
            func: func.name(),
            symbols: names.len(),
            values: values.len(),
        });
    }

    let scopes = evaluator.scopes_mut();
    for (name, value) in names.into_iter().zip(values) {
        tracing::debug!(name = %name, global = func == Builtin::Def, "define");
        if func == Builtin::Def {
            scopes.define_global(name, value);
        } else {
            scopes.define_local(name, value);
        }
    }

    Ok(Value::SExpr(Vec::new()))
}

/// `\ {x y} {+ x y}` builds a closure with an empty environment.
pub(super) fn builtin_lambda(args: Vec<Value>) -> Result<Value, EvalError> {
    let [formals, body] = exact_args(Builtin::Lambda, args)?;
    let formals = into_qexpr(Builtin::Lambda, 0, formals)?;
    let body = into_qexpr(Builtin::Lambda, 1, body)?;
    let formals = symbols(Builtin::Lambda, formals)?;

    Ok(Value::closure(Closure::new(formals, body)))
}

/// Names from a list that must hold only symbols.
fn symbols(func: Builtin, cells: Vec<Value>) -> Result<Vec<EcoString>, EvalError> {
    cells
        .into_iter()
        .map(|cell| match cell {
            Value::Symbol(name) => Ok(name),
            other => Err(EvalError::NonSymbol {
                func: func.name(),
                got: other.type_name(),
            }),
        })
        .collect()
}
