//! Core evaluation logic.

use crate::{
    builtins,
    environment::Environment,
    evaluator::{EvalError, EvaluatorOptions},
    scope_stack::ScopeStack,
    stack::ensure_sufficient_stack,
    values::{Closure, VARIADIC_MARKER, Value},
};
use ecow::EcoString;
use std::collections::VecDeque;

/// Reduces values against a chain of environments.
///
/// Owns the global environment for its whole life; call frames come and go
/// on top of it.
pub struct Evaluator {
    options: EvaluatorOptions,
    scopes: ScopeStack,
    depth: usize,
}

impl Evaluator {
    /// Create an evaluator over the given global environment.
    pub fn new(options: EvaluatorOptions, global: Environment) -> Self {
        Self {
            options,
            scopes: ScopeStack::new(global),
            depth: 0,
        }
    }

    /// Create an evaluator whose global environment holds the builtin library.
    pub fn with_builtins(options: EvaluatorOptions) -> Self {
        let mut global = Environment::new();
        builtins::register_builtins(&mut global);
        Self::new(options, global)
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    pub fn global(&self) -> &Environment {
        self.scopes.global()
    }

    pub fn scopes(&self) -> &ScopeStack {
        &self.scopes
    }

    pub fn scopes_mut(&mut self) -> &mut ScopeStack {
        &mut self.scopes
    }

    /// Give the global environment back, dropping the evaluator.
    pub fn into_global(self) -> Environment {
        self.scopes.into_global()
    }

    /// Evaluate a value in the current environment.
    pub fn eval(&mut self, value: Value) -> Value {
        // Check depth before recursing
        if self.depth >= self.options.max_depth {
            return EvalError::DepthExceeded {
                depth: self.depth,
                max_depth: self.options.max_depth,
            }
            .into();
        }

        self.depth += 1;
        let result = ensure_sufficient_stack(|| self.eval_inner(value));
        self.depth -= 1;

        result
    }

    fn eval_inner(&mut self, value: Value) -> Value {
        match value {
            Value::Symbol(name) => self.lookup(&name),
            Value::SExpr(cells) => self.eval_sexpr(cells),
            other => other,
        }
    }

    /// Resolve a symbol through the environment chain.
    ///
    /// Returns a copy, so callers may consume it freely.
    pub fn lookup(&self, name: &str) -> Value {
        match self.scopes.lookup(name) {
            Some(value) => value.clone(),
            None => EvalError::UnboundSymbol { name: name.into() }.into(),
        }
    }

    fn eval_sexpr(&mut self, cells: Vec<Value>) -> Value {
        let mut evaluated = Vec::with_capacity(cells.len());
        // Consuming the iterator drops unevaluated cells on an early return.
        for cell in cells {
            let value = self.eval(cell);
            if value.is_error() {
                return value;
            }
            evaluated.push(value);
        }

        let mut cells = evaluated.into_iter();
        let Some(head) = cells.next() else {
            return Value::SExpr(Vec::new());
        };
        if cells.len() == 0 {
            return head;
        }

        match head {
            Value::Builtin(_) | Value::Closure(_) => self.apply(head, cells.collect()),
            _ => EvalError::IncorrectHead.into(),
        }
    }

    /// Apply a function value to already-evaluated arguments.
    pub fn apply(&mut self, func: Value, args: Vec<Value>) -> Value {
        match func {
            Value::Builtin(builtin) => builtin.call(self, args),
            Value::Closure(closure) => self.apply_closure(*closure, args),
            _ => EvalError::IncorrectHead.into(),
        }
    }

    fn apply_closure(&mut self, mut closure: Closure, args: Vec<Value>) -> Value {
        let given = args.len();
        let mut formals: VecDeque<EcoString> = core::mem::take(&mut closure.formals).into();
        let mut args: VecDeque<Value> = args.into();

        while let Some(arg) = args.pop_front() {
            let Some(formal) = formals.pop_front() else {
                return EvalError::TooManyArguments.into();
            };

            if formal.as_str() == VARIADIC_MARKER {
                let rest = match (formals.pop_front(), formals.is_empty()) {
                    (Some(rest), true) => rest,
                    _ => return EvalError::InvalidVariadic.into(),
                };
                args.push_front(arg);
                closure.env.put(rest, Value::QExpr(args.drain(..).collect()));
                break;
            }

            closure.env.put(formal, arg);
        }

        // Arguments ran out right at `&`: the variadic formal gets an empty list.
        if formals
            .front()
            .is_some_and(|formal| formal.as_str() == VARIADIC_MARKER)
        {
            if formals.len() != 2 {
                return EvalError::InvalidVariadic.into();
            }
            formals.pop_front();
            if let Some(rest) = formals.pop_front() {
                closure.env.put(rest, Value::QExpr(Vec::new()));
            }
        }

        if !formals.is_empty() {
            tracing::trace!(bound = given, remaining = formals.len(), "partial application");
            closure.formals = formals.into();
            return Value::closure(closure);
        }

        tracing::trace!(bound = given, frames = self.scopes.depth(), "saturated call");
        self.scopes.push(closure.env);
        let result = self.eval(Value::SExpr(closure.body));
        let popped = self.scopes.pop();
        debug_assert!(popped.is_ok(), "call frame pushed above");

        result
    }
}
