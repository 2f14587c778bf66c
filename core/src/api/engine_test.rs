use super::*;
use crate::evaluator::EvaluatorOptions;
use crate::parser::ParseErrorKind;
use crate::values::Value;
use pretty_assertions::assert_eq;

#[test]
fn test_definitions_persist_across_calls() {
    let mut engine = Engine::default();
    assert_eq!(engine.eval_str("def {x} 100").unwrap(), Value::SExpr(vec![]));
    assert_eq!(engine.eval_str("+ x 1").unwrap(), Value::Number(101));
}

#[test]
fn test_evaluation_error_is_ok() {
    let mut engine = Engine::default();
    let result = engine.eval_str("head {}").unwrap();
    assert_eq!(result, Value::error("function 'head' passed {} for argument 0"));
}

#[test]
fn test_parse_error_is_err() {
    let mut engine = Engine::default();
    let err = engine.eval_str("(+ 1").unwrap_err();

    let Error::Parse(parse_error) = &err else {
        panic!("expected parse error, got {:?}", err);
    };
    assert_eq!(
        parse_error.kind,
        ParseErrorKind::UnclosedDelimiter { delimiter: ')' }
    );
    assert_eq!(err.source_text(), Some("(+ 1"));
    assert_eq!(err.diagnostics()[0].code.as_deref(), Some("P002"));
}

#[test]
fn test_max_parse_depth_option() {
    let mut engine = Engine::new(EngineOptions {
        max_parse_depth: 2,
        ..EngineOptions::default()
    });
    assert_eq!(engine.eval_str("((1))").unwrap(), Value::Number(1));
    assert!(engine.eval_str("(((1)))").is_err());
}

#[test]
fn test_evaluator_options_are_used() {
    let mut engine = Engine::new(EngineOptions {
        evaluator: EvaluatorOptions { max_depth: 32 },
        ..EngineOptions::default()
    });
    engine.eval_str("def {f} (\\ {x} {f x})").unwrap();
    let result = engine.eval_str("f 0").unwrap();
    assert_eq!(result.to_string(), "Error: evaluation depth 32 exceeds maximum of 32");
}

#[test]
fn test_host_define_and_lookup() {
    let mut engine = Engine::default();
    engine.define("answer", Value::Number(42)).unwrap();

    assert_eq!(engine.lookup("answer"), Some(&Value::Number(42)));
    assert_eq!(engine.eval_str("* answer 2").unwrap(), Value::Number(84));
    assert_eq!(engine.lookup("missing"), None);
}

#[test]
fn test_define_rejects_empty_name() {
    let mut engine = Engine::default();
    let err = engine.define("", Value::Number(1)).unwrap_err();
    assert_eq!(err.to_string(), "API error: cannot define an empty name");
}

#[test]
fn test_globals_lists_builtins() {
    let engine = Engine::default();
    let names: Vec<&str> = engine.globals().names().collect();
    assert!(names.contains(&"def"));
    assert!(names.contains(&"\\"));
    assert_eq!(names.len(), 12);
}

#[test]
fn test_eval_node_from_hand_built_tree() {
    use crate::parser::{Span, SyntaxNode};

    let leaf = |tag: &str, text: &str| SyntaxNode::leaf(tag, text, Span::new(0, 0));
    let root = SyntaxNode::branch(
        ">",
        vec![
            leaf("regex", ""),
            leaf("expr|symbol|regex", "+"),
            leaf("expr|number|regex", "1"),
            leaf("expr|number|regex", "2"),
            leaf("regex", ""),
        ],
        Span::new(0, 0),
    );

    let mut engine = Engine::default();
    assert_eq!(engine.eval_node(&root), Value::Number(3));
}
