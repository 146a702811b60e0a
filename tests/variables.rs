use calcbot::{Calculator, EvalError, interpreter::store::VariableStore};

#[test]
fn store_assigns_and_reads() {
    let mut store = VariableStore::new();
    store.set("bill", "a", 1.5).unwrap();
    store.set("bill", "a", -2.0).unwrap();
    assert_eq!(store.get("bill", "a"), Ok(-2.0));
}

#[test]
fn store_rejects_invalid_names() {
    let mut store = VariableStore::new();
    for name in ["", "ab", "1", "-", " a", "é"] {
        assert_eq!(store.set("bill", name, 1.0),
                   Err(EvalError::InvalidVariableName),
                   "{name:?}");
    }
    assert_eq!(store.variables("bill").count(), 0);
}

#[test]
fn store_rejects_non_finite_values() {
    let mut store = VariableStore::new();
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(store.set("bill", "a", value), Err(EvalError::InvalidValue));
    }
    assert!(store.get("bill", "a").is_err());
}

#[test]
fn store_reports_undefined_variables() {
    let mut store = VariableStore::new();
    assert_eq!(store.get("bill", "q"),
               Err(EvalError::UndefinedVariable { name: "q".to_string() }));

    store.set("bill", "p", 1.0).unwrap();
    assert_eq!(store.get("bill", "q"),
               Err(EvalError::UndefinedVariable { name: "q".to_string() }));
}

#[test]
fn store_deletes_whole_account() {
    let mut store = VariableStore::new();
    store.set("bill", "a", 1.0).unwrap();
    store.set("bill", "b", 2.0).unwrap();
    assert_eq!(store.variables("bill").count(), 2);

    assert!(store.delete_all("bill"));
    assert_eq!(store.variables("bill").count(), 0);
    assert!(store.get("bill", "a").is_err());
    assert!(!store.delete_all("bill"));
}

#[test]
fn store_lists_variables_in_name_order() {
    let mut store = VariableStore::new();
    store.set("bill", "b", 2.0).unwrap();
    store.set("bill", "a", 1.0).unwrap();
    store.set("bill", "B", 3.0).unwrap();

    let listed: Vec<_> = store.variables("bill").collect();
    assert_eq!(listed, vec![('B', 3.0), ('a', 1.0), ('b', 2.0)]);
    assert_eq!(store.variables("matt").count(), 0);
}

#[test]
fn accounts_are_isolated() {
    let mut calculator = Calculator::new();
    calculator.evaluate_equation("a = 1", "bill").unwrap();
    calculator.evaluate_equation("a = 2", "matt").unwrap();

    assert_eq!(calculator.evaluate_expression("a + 1", "bill").unwrap(), "2");
    assert_eq!(calculator.evaluate_expression("a + 1", "matt").unwrap(), "3");

    assert!(calculator.delete_variables("bill"));
    assert_eq!(calculator.evaluate_expression("a + 1", "bill"),
               Err(EvalError::InvalidCharacter));
    assert_eq!(calculator.get_variable("a", "matt"), Ok(2.0));
}

#[test]
fn equation_assigns_numbers() {
    let mut calculator = Calculator::new();
    assert_eq!(calculator.evaluate_equation("a = 9", "bill").unwrap(), "a = 9");
    assert_eq!(calculator.evaluate_equation("x=2.50", "bill").unwrap(), "x = 2.5");
    assert_eq!(calculator.evaluate_equation("y = -.5", "bill").unwrap(), "y = -0.5");
    assert_eq!(calculator.get_variable("y", "bill"), Ok(-0.5));
}

#[test]
fn equation_evaluates_expressions() {
    let mut calculator = Calculator::new();
    calculator.evaluate_equation("a = 3", "bill").unwrap();
    assert_eq!(calculator.evaluate_equation("b = 5 * a + 1", "bill").unwrap(), "b = 16");
    assert_eq!(calculator.evaluate_equation("a = 14 - 5 * 6", "bill").unwrap(), "a = -16");
    assert_eq!(calculator.evaluate_equation("c = --5", "bill").unwrap(), "c = 5");
    assert_eq!(calculator.evaluate_equation("d = (a + b) / 2", "bill").unwrap(), "d = 0");
}

#[test]
fn equation_variables_are_case_sensitive() {
    let mut calculator = Calculator::new();
    calculator.evaluate_equation("a = 1", "bill").unwrap();
    calculator.evaluate_equation("A = 2", "bill").unwrap();
    assert_eq!(calculator.get_variable("a", "bill"), Ok(1.0));
    assert_eq!(calculator.get_variable("A", "bill"), Ok(2.0));
}

#[test]
fn equation_errors() {
    let mut calculator = Calculator::new();
    assert_eq!(calculator.evaluate_equation("a 5", "bill"), Err(EvalError::MissingOperator));
    assert_eq!(calculator.evaluate_equation("a = 1 = 2", "bill"),
               Err(EvalError::InvalidCharacter));
    assert_eq!(calculator.evaluate_equation("= 5", "bill"),
               Err(EvalError::InvalidVariableName));
    assert_eq!(calculator.evaluate_equation("ab = 5", "bill"),
               Err(EvalError::InvalidVariableName));
    assert_eq!(calculator.evaluate_equation("a = ", "bill"), Err(EvalError::InvalidValue));
    assert_eq!(calculator.evaluate_equation("a = b", "bill"), Err(EvalError::InvalidValue));
    assert_eq!(calculator.evaluate_equation("a = 1 / 0", "bill"), Err(EvalError::DivideByZero));
    assert_eq!(calculator.evaluate_equation("a = 2 ^ 2 + 1", "bill"),
               Err(EvalError::InvalidCharacter));
}

#[test]
fn equation_reads_leading_number_of_plain_value() {
    let mut calculator = Calculator::new();
    assert_eq!(calculator.evaluate_equation("a = 12abc", "bill").unwrap(), "a = 12");
}

#[test]
fn failed_equation_keeps_previous_value() {
    let mut calculator = Calculator::new();
    calculator.evaluate_equation("a = 4", "bill").unwrap();
    assert!(calculator.evaluate_equation("a = 4 / 0", "bill").is_err());
    assert_eq!(calculator.get_variable("a", "bill"), Ok(4.0));
}
