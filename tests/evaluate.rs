mod common;

use common::lox;

#[test]
fn evaluate_arithmetic() {
    lox("evaluate", "1 + 2 * 3").success().stdout("7\n");
}

#[test]
fn evaluate_division_quirk() {
    // a division without remainder collapses to an integer
    lox("evaluate", "4 / 2").success().stdout("2\n");
    lox("evaluate", "5 / 2").success().stdout("2.5\n");
}

#[test]
fn evaluate_float_arithmetic_keeps_decimal() {
    lox("evaluate", "1.5 + 1.5").success().stdout("3.0\n");
}

#[test]
fn evaluate_string_concatenation() {
    lox("evaluate", "\"foo\" + \"bar\"")
        .success()
        .stdout("foobar\n");
}

#[test]
fn evaluate_booleans_and_nil() {
    lox("evaluate", "1 < 2").success().stdout("true\n");
    lox("evaluate", "1 > 2").success().stdout("false\n");
    lox("evaluate", "nil").success().stdout("nil\n");
}

#[test]
fn evaluate_truthiness() {
    lox("evaluate", "!0").success().stdout("false\n");
    lox("evaluate", "!nil").success().stdout("true\n");
}

#[test]
fn evaluate_logical_asymmetry() {
    // `and` collapses to false, `or` passes the operand through
    lox("evaluate", "nil and 1").success().stdout("false\n");
    lox("evaluate", "2 or 1").success().stdout("2\n");
}

#[test]
fn evaluate_mixed_addition_is_runtime_error() {
    lox("evaluate", "\"a\" + 1")
        .code(70)
        .stderr("Operands must be two numbers or two strings.\n[line 1]\n");
}

#[test]
fn evaluate_non_numeric_comparison_is_runtime_error() {
    lox("evaluate", "\"a\" < 1")
        .code(70)
        .stderr("Operands must be numbers.\n[line 1]\n");
}

#[test]
fn evaluate_parse_error_exits_65() {
    lox("evaluate", "(1 +").code(65);
}
