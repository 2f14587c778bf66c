//! Symbol-to-value bindings for a single scope.
//!
//! An [`Environment`] owns its values outright. Lookups hand out borrows; the
//! evaluator clones what it needs, so a caller mutating a looked-up value can
//! never reach back into the environment that stored it.
//!
//! Environments do not point at their parents. The chain used for symbol
//! resolution is kept by [`crate::scope_stack::ScopeStack`].

use crate::values::Value;
use ecow::EcoString;

/// An ordered mapping from symbol name to value.
///
/// Bindings are kept sorted by name for binary search. Names are unique
/// within one environment; putting an existing name replaces its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: Vec<(EcoString, Value)>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Result<usize, usize> {
        self.bindings
            .binary_search_by(|(n, _)| n.as_str().cmp(name))
    }

    /// Look up a name in this environment only.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.position(name).ok().map(|idx| &self.bindings[idx].1)
    }

    /// Bind `name` to `value`, returning the value it displaced, if any.
    pub fn put(&mut self, name: impl Into<EcoString>, value: Value) -> Option<Value> {
        let name = name.into();
        match self.position(&name) {
            Ok(idx) => Some(core::mem::replace(&mut self.bindings[idx].1, value)),
            Err(idx) => {
                self.bindings.insert(idx, (name, value));
                None
            }
        }
    }

    /// Remove a binding and hand its value back to the caller.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.position(name)
            .ok()
            .map(|idx| self.bindings.remove(idx).1)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bound names in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|(n, _)| n.as_str())
    }
}

impl<N: Into<EcoString>> FromIterator<(N, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (N, Value)>>(iter: I) -> Self {
        let mut env = Environment::new();
        for (name, value) in iter {
            env.put(name, value);
        }
        env
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_put_and_get() {
        let mut env = Environment::new();
        assert_eq!(env.put("x", Value::Number(1)), None);
        assert_eq!(env.get("x"), Some(&Value::Number(1)));
        assert_eq!(env.get("y"), None);
    }

    #[test]
    fn test_put_replaces_existing_binding() {
        let mut env = Environment::new();
        env.put("x", Value::Number(1));
        let old = env.put("x", Value::Number(2));

        assert_eq!(old, Some(Value::Number(1)));
        assert_eq!(env.get("x"), Some(&Value::Number(2)));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_names_are_kept_sorted() {
        let env: Environment = [
            ("c", Value::Number(3)),
            ("a", Value::Number(1)),
            ("b", Value::Number(2)),
        ]
        .into_iter()
        .collect();

        assert_eq!(env.names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove() {
        let mut env = Environment::new();
        env.put("x", Value::Number(1));

        assert_eq!(env.remove("x"), Some(Value::Number(1)));
        assert_eq!(env.remove("x"), None);
        assert!(env.is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut env = Environment::new();
        env.put("xs", Value::qexpr(vec![Value::Number(1)]));

        let mut copy = env.clone();
        if let Some(Value::QExpr(cells)) = copy.remove("xs") {
            assert_eq!(cells.len(), 1);
        }
        copy.put("xs", Value::qexpr(vec![]));

        assert_eq!(env.get("xs"), Some(&Value::qexpr(vec![Value::Number(1)])));
    }
}
