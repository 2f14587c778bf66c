mod lambda;
mod value;

pub use lambda::{Closure, VARIADIC_MARKER};
pub use value::Value;
