mod cases;

use indoc::indoc;

test_case!(
    first,
    prelude,
    input: "first {1 2 3}",
    output: "1",
);

test_case!(
    second,
    prelude,
    input: "second {1 2 3}",
    output: "2",
);

test_case!(
    unpack_applies_to_list,
    prelude,
    input: "unpack + {1 2 3}",
    output: "6",
);

test_case!(
    curry,
    prelude,
    input: "curry + {5 6 7}",
    output: "18",
);

test_case!(
    uncurry,
    prelude,
    input: "uncurry head 5 6 7",
    output: "{5}",
);

test_case!(
    partially_applied_curry,
    prelude,
    input: indoc! {"
        def {add-curried} (curry +)
        add-curried {5 6 7}
    "},
    output: "18",
);

test_case!(
    flip,
    prelude,
    input: "flip - 1 10",
    output: "9",
);

test_case!(
    compose,
    prelude,
    input: r"comp (\ {x} {* x 2}) (\ {x} {+ x 1}) 5",
    output: "12",
);

test_case!(
    fun_defines_named_function,
    prelude,
    input: indoc! {"
        fun {add-together x y} {+ x y}
        add-together 1 2
    "},
    output: "3",
);

test_case!(
    fun_returns_unit,
    prelude,
    input: "fun {nothing x} {x}",
    output: "()",
);
