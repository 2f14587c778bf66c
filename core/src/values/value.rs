use crate::builtins::Builtin;
use crate::values::Closure;
use core::fmt;
use ecow::EcoString;

/// A runtime datum.
///
/// Every value has exactly one owner: an environment slot, a list slot, or a
/// local. `Clone` is a deep copy and the only way to end up with two of the
/// same list, so list contents are never aliased.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(i64),

    /// An identifier to resolve, or a literal operator token inside a Q-expression.
    Symbol(EcoString),

    /// A failure. Flows through evaluation like any other value.
    Error(EcoString),

    Builtin(Builtin),

    Closure(Box<Closure>),

    /// A list to reduce: "apply the first element to the rest".
    SExpr(Vec<Value>),

    /// A quoted list, left alone by evaluation.
    QExpr(Vec<Value>),
}

impl Value {
    pub fn symbol(name: impl Into<EcoString>) -> Self {
        Value::Symbol(name.into())
    }

    pub fn error(message: impl Into<EcoString>) -> Self {
        Value::Error(message.into())
    }

    pub fn sexpr(cells: Vec<Value>) -> Self {
        Value::SExpr(cells)
    }

    pub fn qexpr(cells: Vec<Value>) -> Self {
        Value::QExpr(cells)
    }

    pub fn closure(closure: Closure) -> Self {
        Value::Closure(Box::new(closure))
    }

    /// Name of this value's variant as it appears in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Symbol(_) => "Symbol",
            Value::Error(_) => "Error",
            Value::Builtin(_) | Value::Closure(_) => "Function",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Value::Builtin(_) | Value::Closure(_))
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&str> {
        match self {
            Value::Error(m) => Some(m.as_str()),
            _ => None,
        }
    }

    /// Elements of an S- or Q-expression.
    pub fn cells(&self) -> Option<&[Value]> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(cells.as_slice()),
            _ => None,
        }
    }

    /// Take the elements out of an S- or Q-expression.
    pub fn into_cells(self) -> Option<Vec<Value>> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(cells),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<Builtin> for Value {
    fn from(builtin: Builtin) -> Self {
        Value::Builtin(builtin)
    }
}

impl From<Closure> for Value {
    fn from(closure: Closure) -> Self {
        Value::closure(closure)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::Error(message) => write!(f, "Error: {}", message),
            Value::Builtin(_) => write!(f, "<builtin>"),
            Value::Closure(closure) => write!(f, "{}", closure),
            Value::SExpr(cells) => write_cells(f, '(', cells, ')'),
            Value::QExpr(cells) => write_cells(f, '{', cells, '}'),
        }
    }
}

pub(super) fn write_cells(
    f: &mut fmt::Formatter<'_>,
    open: char,
    cells: &[Value],
    close: char,
) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", cell)?;
    }
    write!(f, "{}", close)
}
