use tracing::error;

use crate::{
    error::CommandError,
    interpreter::evaluator::core::Calculator,
    util::num::{format_number, has_operator},
};

/// Reply to the `author` keyword.
pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

/// Reply to the `help` keyword.
pub const HELP: &str = "
Commands:
hello
    Output \"world\"
author
    Output author name
help
    Output this help message

This bot can also perform basic mathematical calculations (exponents are not \
supported). Variables may be assigned using the format:
x = 1
Variable names may consist of a single letter and are case sensitive. \
Variables may also be used in calculations. For example:
a = 1
b = 2
2 * (a+b)
-> 6";

impl Calculator {
    /// Executes a command and returns the text to show the user.
    ///
    /// Keywords (`hello`, `author`, `help`) are matched case-insensitively.
    /// Anything containing `=` is an equation, anything else containing an
    /// operator is an expression, and a single letter is a variable lookup.
    ///
    /// Errors never escape: they are returned as `Error: <message>` and, when
    /// error logging is enabled, logged as well.
    ///
    /// # Parameters
    /// - `command`: The raw command text.
    /// - `account`: The account the command was sent from.
    ///
    /// # Returns
    /// The reply text.
    ///
    /// # Example
    /// ```
    /// use calcbot::Calculator;
    ///
    /// let mut calculator = Calculator::new();
    /// assert_eq!(calculator.execute("Hello", "cli"), "world");
    /// assert_eq!(calculator.execute("n = 3 * 4", "cli"), "n = 12");
    /// assert_eq!(calculator.execute(" n ", "cli"), "12");
    /// assert_eq!(calculator.execute("n / 0", "cli"), "Error: Cannot divide by zero");
    /// assert_eq!(calculator.execute("fakecommand", "cli"), "Error: Unrecognized command");
    /// ```
    pub fn execute(&mut self, command: &str, account: &str) -> String {
        let command = command.trim();

        match command.to_lowercase().as_str() {
            "hello" => "world".to_string(),
            "author" => AUTHOR.to_string(),
            "help" => HELP.to_string(),
            _ => self.dispatch(command, account).unwrap_or_else(|e| {
                                                    if self.log_errors {
                                                        error!(account, command, "{e}");
                                                    }
                                                    format!("Error: {e}")
                                                }),
        }
    }

    /// Routes a non-keyword command to the matching evaluator.
    fn dispatch(&mut self, command: &str, account: &str) -> Result<String, CommandError> {
        if command.contains('=') {
            Ok(self.evaluate_equation(command, account)?)
        } else if has_operator(command) {
            Ok(self.evaluate_expression(command, account)?)
        } else if command.len() == 1 && command.bytes().all(|b| b.is_ascii_alphabetic()) {
            Ok(format_number(self.get_variable(command, account)?))
        } else {
            Err(CommandError::Unrecognized)
        }
    }
}
