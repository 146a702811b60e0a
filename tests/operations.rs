use calcbot::{
    EvalError,
    interpreter::{
        evaluator::{
            calc::calc,
            operation::{do_operation, evaluate_simple_expression, get_result},
            parens::evaluate_parens,
        },
        operator::{ADD_SUB, MUL_DIV, Operator},
    },
};

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}

fn assert_result_close(result: &str, expected: f64) {
    let value: f64 = result.parse()
                           .unwrap_or_else(|e| panic!("'{result}' is not a number: {e}"));
    assert_close(value, expected);
}

#[test]
fn calc_basic_arithmetic() {
    assert_eq!(calc("1", Operator::Add, "1"), Ok(2.0));
    assert_eq!(calc("1", Operator::Sub, "1"), Ok(0.0));
    assert_eq!(calc("2", Operator::Mul, "3"), Ok(6.0));
    assert_eq!(calc("8", Operator::Div, "2"), Ok(4.0));
}

#[test]
fn calc_negative_operands() {
    assert_eq!(calc("-1", Operator::Add, "-1"), Ok(-2.0));
    assert_eq!(calc("-2", Operator::Sub, "-1"), Ok(-1.0));
    assert_eq!(calc("-5", Operator::Mul, "-3"), Ok(15.0));
    assert_eq!(calc("-6", Operator::Div, "-2"), Ok(3.0));
}

#[test]
fn calc_fractional_operands() {
    assert_close(calc("1.1", Operator::Add, ".3").unwrap(), 1.4);
    assert_close(calc("2.5", Operator::Sub, "0.5").unwrap(), 2.0);
    assert_close(calc("3.4", Operator::Mul, "5.9").unwrap(), 20.06);
    assert_close(calc("12", Operator::Div, "1.6").unwrap(), 7.5);
}

#[test]
fn calc_matches_native_arithmetic() {
    assert_eq!(calc("0.1", Operator::Add, "0.2"), Ok(0.1 + 0.2));
    assert_eq!(calc("1", Operator::Div, "3"), Ok(1.0 / 3.0));
}

#[test]
fn calc_rejects_non_numeric_operands() {
    assert_eq!(calc("a1", Operator::Mul, "2"),
               Err(EvalError::NotANumber { operand: "a1".to_string() }));
    assert_eq!(calc("4", Operator::Add, "b4"),
               Err(EvalError::NotANumber { operand: "b4".to_string() }));
}

#[test]
fn calc_rejects_division_by_zero() {
    for x in ["1", "-7", "0", "2.5"] {
        assert_eq!(calc(x, Operator::Div, "0"), Err(EvalError::DivideByZero));
        assert_eq!(calc(x, Operator::Div, "0.0"), Err(EvalError::DivideByZero));
    }
}

#[test]
fn get_result_renders_values() {
    assert_eq!(get_result("1", Operator::Add, "1").unwrap(), "2");
    assert_eq!(get_result("1", Operator::Sub, "1").unwrap(), "0");
    assert_eq!(get_result("2", Operator::Mul, "3").unwrap(), "6");
    assert_eq!(get_result("8", Operator::Div, "2").unwrap(), "4");
    assert_eq!(get_result("-5", Operator::Mul, "-3").unwrap(), "15");
    assert_result_close(&get_result("3.4", Operator::Mul, "5.9").unwrap(), 20.06);
}

#[test]
fn get_result_keeps_preceding_operators() {
    assert_eq!(get_result("+ -3", Operator::Mul, "2").unwrap(), "+ -6");
    assert_eq!(get_result("- -4", Operator::Add, "3").unwrap(), "- -1");
    assert_eq!(get_result("*-2", Operator::Sub, "1").unwrap(), "*-3");
}

#[test]
fn get_result_negative_zero_renders_as_zero() {
    assert_eq!(get_result("0", Operator::Mul, "-1").unwrap(), "0");
}

#[test]
fn do_operation_single_operators() {
    assert_eq!(do_operation("2 * 2 - 3 * 3 + 4 * 5", &[Operator::Mul]).unwrap(),
               "4 - 9 + 20");
    assert_eq!(do_operation("12 / 2 * 1 - 24 / 3 + 3", &[Operator::Div]).unwrap(),
               "6 * 1 - 8 + 3");
    assert_eq!(do_operation("9 - 4 + 3 + 1 * 7", &[Operator::Add]).unwrap(),
               "9 - 8 * 7");
    assert_eq!(do_operation("3 - 2 + 4 - 3 * 5", &[Operator::Sub]).unwrap(),
               "1 + 1 * 5");
}

#[test]
fn do_operation_leaves_negative_literals() {
    assert_eq!(do_operation("3 - 5 + 4 - 8 * 5", &[Operator::Sub]).unwrap(),
               "-2 + -4 * 5");
    assert_eq!(do_operation("-6", ADD_SUB).unwrap(), "-6");
}

#[test]
fn do_operation_simplifies_double_negation() {
    assert_eq!(do_operation("--6", ADD_SUB).unwrap(), "6");
    assert_eq!(do_operation("- -2.5", ADD_SUB).unwrap(), "2.5");
}

#[test]
fn do_operation_works_left_to_right() {
    assert_eq!(do_operation("8 / 4 / 2", MUL_DIV).unwrap(), "1");
    assert_eq!(do_operation("10 - 4 - 3", ADD_SUB).unwrap(), "3");
}

#[test]
fn do_operation_fails_when_stuck() {
    assert_eq!(do_operation("2 * -.5", MUL_DIV),
               Err(EvalError::InvalidOperatorPlacement));
}

#[test]
fn simple_expression_follows_order_of_operations() {
    assert_eq!(evaluate_simple_expression("4 + 1 * 6 / 3 - 2").unwrap(), "4");
    assert_eq!(evaluate_simple_expression("-4 - 3 * 4 + 9 / 3").unwrap(), "-13");
    assert_eq!(evaluate_simple_expression("8 - 8 / 4 + 3 * 5").unwrap(), "21");
}

#[test]
fn simple_expression_handles_signs() {
    assert_eq!(evaluate_simple_expression("1 + -3 * 2").unwrap(), "-5");
    assert_eq!(evaluate_simple_expression("2 - -3").unwrap(), "5");
    assert_eq!(evaluate_simple_expression("-3 - -5").unwrap(), "2");
}

#[test]
fn simple_expression_blank_is_empty() {
    assert_eq!(evaluate_simple_expression("").unwrap(), "");
    assert_eq!(evaluate_simple_expression("   ").unwrap(), "");
}

#[test]
fn simple_expression_propagates_division_by_zero() {
    assert_eq!(evaluate_simple_expression("1 + 4 / 0"), Err(EvalError::DivideByZero));
}

#[test]
fn parens_single_group() {
    assert_eq!(evaluate_parens("4 * (7 - 5)").unwrap(), "4 * 2");
}

#[test]
fn parens_nested_groups() {
    assert_eq!(evaluate_parens("4 * (7 - (4 / 2)) * 2").unwrap(), "4 * 5 * 2");
    assert_eq!(evaluate_parens("((1 + 2) * (3 + 4))").unwrap(), "21");
}

#[test]
fn parens_without_groups_are_unchanged() {
    assert_eq!(evaluate_parens("1 + 2").unwrap(), "1 + 2");
}

#[test]
fn parens_mismatched() {
    for expression in ["4 * (7 - 5", "4 * 7 - 5)", "4 * (7) - 5)", "4 * )((7 - 5)"] {
        assert_eq!(evaluate_parens(expression),
                   Err(EvalError::MismatchedParentheses),
                   "{expression}");
    }
}
