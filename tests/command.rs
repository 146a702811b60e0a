use calcbot::{
    Calculator,
    command::{AUTHOR, HELP},
};

const ACCOUNT: &str = "cli";

#[test]
fn keywords_ignore_case_and_whitespace() {
    let mut calculator = Calculator::new();
    assert_eq!(calculator.execute("hello", ACCOUNT), "world");
    assert_eq!(calculator.execute("HELLO", ACCOUNT), "world");
    assert_eq!(calculator.execute("  Author\n", ACCOUNT), AUTHOR);
    assert_eq!(calculator.execute("help", ACCOUNT), HELP);
}

#[test]
fn author_and_help_text() {
    assert_eq!(AUTHOR, "Bill Bryant");
    assert!(HELP.contains("Commands"));
    assert!(HELP.contains("x = 1"));
}

#[test]
fn unrecognized_commands() {
    let mut calculator = Calculator::new();
    for command in ["fakecommand", "7", "hello world", ""] {
        assert_eq!(calculator.execute(command, ACCOUNT),
                   "Error: Unrecognized command",
                   "{command:?}");
    }
}

#[test]
fn expressions_and_equations() {
    let mut calculator = Calculator::new();
    assert_eq!(calculator.execute("4 * (2 - 5) / (3 + 3)", ACCOUNT), "-2");
    assert_eq!(calculator.execute("a = 1", ACCOUNT), "a = 1");
    assert_eq!(calculator.execute("b = 2", ACCOUNT), "b = 2");
    assert_eq!(calculator.execute("2 * (a+b)", ACCOUNT), "6");
}

#[test]
fn variable_lookup() {
    let mut calculator = Calculator::new();
    calculator.execute("z = 3.25", ACCOUNT);
    assert_eq!(calculator.execute("z", ACCOUNT), "3.25");
    assert_eq!(calculator.execute("x", ACCOUNT), "Error: Variable 'x' is not defined");
}

#[test]
fn errors_are_reported_as_text() {
    let mut calculator = Calculator::new().with_error_logging(true);
    assert_eq!(calculator.execute("abc = 1", ACCOUNT), "Error: Invalid variable name");
    assert_eq!(calculator.execute("-7", ACCOUNT), "Error: Missing operator");
    assert_eq!(calculator.execute("1 / 0", ACCOUNT), "Error: Cannot divide by zero");
    assert_eq!(calculator.execute("(1 + 2", ACCOUNT), "Error: Mismatched parentheses");
}

#[test]
fn accounts_do_not_share_variables() {
    let mut calculator = Calculator::new();
    calculator.execute("k = 5", "bill");
    assert_eq!(calculator.execute("k", "bill"), "5");
    assert_eq!(calculator.execute("k", "matt"), "Error: Variable 'k' is not defined");
}
