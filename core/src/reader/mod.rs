//! Syntax tree to value.
//!
//! A single pass over a [`SyntaxNode`]: numbers and symbols become leaves,
//! parenthesised groups become S-expressions, braced groups become
//! Q-expressions. Bracket tokens and other non-semantic nodes are skipped.
//! Nothing is evaluated here.

use crate::evaluator::EvalError;
use crate::parser::SyntaxNode;
use crate::stack::ensure_sufficient_stack;
use crate::values::Value;

/// Tag of the node wrapping a whole program.
pub const ROOT_TAG: &str = ">";

/// Read a syntax tree into a value.
///
/// The program root reads to an S-expression of its top-level expressions.
/// Malformed leaves read to `Error` values rather than failing.
pub fn read(node: &SyntaxNode) -> Value {
    if node.has_tag("number") {
        return read_number(node);
    }
    if node.has_tag("symbol") {
        return match &node.text {
            Some(text) => Value::symbol(text.as_str()),
            None => Value::error("invalid symbol"),
        };
    }

    if node.tag == ROOT_TAG || node.has_tag("sexpr") {
        Value::SExpr(read_children(node))
    } else if node.has_tag("qexpr") {
        Value::QExpr(read_children(node))
    } else {
        Value::error(format!("unknown syntax node '{}'", node.tag))
    }
}

fn read_number(node: &SyntaxNode) -> Value {
    node.text
        .as_deref()
        .and_then(|text| text.parse::<i64>().ok())
        .map_or_else(|| EvalError::InvalidNumber.into(), Value::Number)
}

fn read_children(node: &SyntaxNode) -> Vec<Value> {
    node.children
        .iter()
        .filter(|child| !is_punctuation(child))
        .map(|child| ensure_sufficient_stack(|| read(child)))
        .collect()
}

const SEMANTIC_TAGS: [&str; 4] = ["number", "symbol", "sexpr", "qexpr"];

/// Bracket tokens and regex anchors carry no meaning once the tree is built.
fn is_punctuation(node: &SyntaxNode) -> bool {
    if SEMANTIC_TAGS.iter().any(|tag| node.has_tag(tag)) {
        return false;
    }
    node.has_tag("char")
        || node.has_tag("regex")
        || matches!(node.text.as_deref(), Some("(" | ")" | "{" | "}"))
}
