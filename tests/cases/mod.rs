#![allow(dead_code)]

use indoc::indoc;
use once_cell::sync::Lazy;
use tlisp::{Engine, EngineOptions, SyntaxNode, parser};

/// Small library of helpers written in TLisp itself.
///
/// Each top-level group is evaluated on its own, the way a REPL evaluates
/// one line at a time.
pub const PRELUDE_SOURCE: &str = indoc! {r"
    ; function definition sugar
    (def {fun} (\ {f b} {def (head f) (\ (tail f) b)}))

    (fun {unpack f l} {eval (join (list f) l)})
    (fun {pack f & xs} {f xs})
    (def {curry} unpack)
    (def {uncurry} pack)

    (fun {first l} {eval (head l)})
    (fun {second l} {eval (head (tail l))})
    (fun {flip f a b} {f b a})
    (fun {comp f g x} {f (g x)})
"};

pub static PRELUDE: Lazy<SyntaxNode> =
    Lazy::new(|| parser::parse(PRELUDE_SOURCE).expect("prelude must parse"));

/// An engine with only the builtins.
pub fn engine() -> Engine {
    Engine::new(EngineOptions::default())
}

/// An engine with the prelude loaded.
pub fn engine_with_prelude() -> Engine {
    let mut engine = engine();
    for definition in &PRELUDE.children {
        let result = engine.eval_node(definition);
        assert!(!result.is_error(), "prelude failed: {}", result);
    }
    engine
}

/// Evaluate each line in order and render the last result.
///
/// Parse failures render as their error message.
pub fn run(engine: &mut Engine, input: &str) -> String {
    let mut last = String::from("()");
    for line in input.lines().filter(|line| !line.trim().is_empty()) {
        last = match engine.eval_str(line) {
            Ok(value) => value.to_string(),
            Err(err) => err.to_string(),
        };
    }
    last
}

/// Define a test that evaluates `input` line by line in a fresh engine and
/// compares the printed result of the last line.
#[macro_export]
macro_rules! test_case {
    ($name:ident, input: $input:expr, output: $output:expr $(,)?) => {
        #[test]
        fn $name() {
            let mut engine = $crate::cases::engine();
            pretty_assertions::assert_eq!($crate::cases::run(&mut engine, $input), $output);
        }
    };
    ($name:ident, prelude, input: $input:expr, output: $output:expr $(,)?) => {
        #[test]
        fn $name() {
            let mut engine = $crate::cases::engine_with_prelude();
            pretty_assertions::assert_eq!($crate::cases::run(&mut engine, $input), $output);
        }
    };
}
