mod cases;

use indoc::indoc;
use pretty_assertions::assert_eq;
use tlisp::{Engine, EngineOptions, EvaluatorOptions};

test_case!(
    unbound_symbol,
    input: "foo",
    output: "Error: unbound symbol 'foo'",
);

test_case!(
    incorrect_head,
    input: "(1 2 3)",
    output: "Error: S-Expression starts with incorrect type",
);

test_case!(
    head_wrong_count,
    input: "head {1} {2}",
    output: "Error: function 'head' passed incorrect number of arguments: got 2, expected 1",
);

test_case!(
    head_empty,
    input: "head {}",
    output: "Error: function 'head' passed {} for argument 0",
);

test_case!(
    tail_wrong_type,
    input: "tail 1",
    output: "Error: function 'tail' passed incorrect type for argument 0: got Number, expected Q-Expression",
);

test_case!(
    join_wrong_type,
    input: "join {1} 2",
    output: "Error: function 'join' passed incorrect type for argument 1: got Number, expected Q-Expression",
);

test_case!(
    eval_wrong_type,
    input: "eval 1",
    output: "Error: function 'eval' passed incorrect type for argument 0: got Number, expected Q-Expression",
);

test_case!(
    def_mismatch,
    input: "def {x y} 1",
    output: "Error: function 'def' passed mismatched symbols and values: got 2 symbols, expected 1",
);

test_case!(
    def_non_symbol,
    input: "def {1} 1",
    output: "Error: function 'def' cannot define non-symbol: got Number, expected Symbol",
);

test_case!(
    put_non_symbol,
    input: "= {{x}} 1",
    output: "Error: function '=' cannot define non-symbol: got Q-Expression, expected Symbol",
);

test_case!(
    arithmetic_wrong_type,
    input: "+ 1 {2}",
    output: "Error: function '+' passed incorrect type for argument 1: got Q-Expression, expected Number",
);

test_case!(
    arithmetic_on_function,
    input: "* 2 head",
    output: "Error: function '*' passed incorrect type for argument 1: got Function, expected Number",
);

test_case!(
    first_error_wins,
    input: "list (foo) (/ 1 0)",
    output: "Error: unbound symbol 'foo'",
);

test_case!(
    error_stops_later_definitions,
    input: indoc! {"
        list (/ 1 0) (def {x} 1)
        x
    "},
    output: "Error: unbound symbol 'x'",
);

test_case!(
    error_inside_function_body,
    input: indoc! {r"
        def {bad} (\ {x} {/ x 0})
        + 1 (bad 5)
    "},
    output: "Error: division by zero",
);

test_case!(
    unclosed_paren,
    input: "(+ 1 2",
    output: "error: Unclosed delimiter, expected ')' [P002]\nhelp: Add the missing closing delimiter",
);

#[test]
fn unbounded_recursion_hits_depth_limit() {
    let mut engine = Engine::new(EngineOptions {
        evaluator: EvaluatorOptions { max_depth: 100 },
        ..EngineOptions::default()
    });

    let output = cases::run(
        &mut engine,
        indoc! {r"
            def {loop} (\ {x} {loop x})
            loop 1
        "},
    );
    assert_eq!(output, "Error: evaluation depth 100 exceeds maximum of 100");

    // The engine is still usable afterwards.
    assert_eq!(cases::run(&mut engine, "+ 1 2"), "3");
}

#[test]
fn default_depth_limit_is_an_error_value() {
    let mut engine = Engine::new(EngineOptions::default());

    let output = cases::run(
        &mut engine,
        indoc! {r"
            def {f} (\ {x} {f x})
            f 0
        "},
    );
    assert_eq!(output, "Error: evaluation depth 1000 exceeds maximum of 1000");
}

#[test]
fn stray_closing_bracket_is_a_parse_error() {
    let mut engine = cases::engine();
    let err = engine.eval_str("1 2)").unwrap_err();
    assert!(err.to_string().starts_with("error: Expected"));
    assert!(err.to_string().contains("found ')'"));
}
