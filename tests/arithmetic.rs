mod cases;

test_case!(
    simple_addition,
    input: "+ 1 2",
    output: "3",
);

test_case!(
    parenthesized_call,
    input: "(+ 1 2)",
    output: "3",
);

test_case!(
    nested_calls,
    input: "* 2 (+ 1 2) (- 10 6)",
    output: "24",
);

test_case!(
    fold_left_to_right,
    input: "- 100 10 1",
    output: "89",
);

test_case!(
    unary_minus,
    input: "- 5",
    output: "-5",
);

test_case!(
    unary_plus_is_identity,
    input: "(+ 1)",
    output: "1",
);

test_case!(
    negative_literals,
    input: "+ -1 -2",
    output: "-3",
);

test_case!(
    integer_division_truncates,
    input: "/ -7 2",
    output: "-3",
);

test_case!(
    overflow_wraps,
    input: "+ 9223372036854775807 1",
    output: "-9223372036854775808",
);

test_case!(
    negating_min_wraps,
    input: "- (- 0 9223372036854775807 1)",
    output: "-9223372036854775808",
);

test_case!(
    division_by_zero,
    input: "/ 10 0",
    output: "Error: division by zero",
);

test_case!(
    division_by_zero_after_fold,
    input: "/ 10 2 (- 5 5)",
    output: "Error: division by zero",
);

test_case!(
    operator_alone_is_function,
    input: "+",
    output: "<builtin>",
);
