use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info};

use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Per-account variable storage.
///
/// Each account (a chat sender, a terminal session) has its own namespace of
/// single-letter variables. Names are case-sensitive, so `a` and `A` are
/// different variables. Every stored value is finite.
#[derive(Debug, Default, Clone)]
pub struct VariableStore {
    accounts: HashMap<String, BTreeMap<char, f64>>,
}

/// Returns the variable name held in `name` if it is exactly one ASCII letter.
fn variable_name(name: &str) -> Option<char> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `value` to the variable `name` of `account`, creating the
    /// account's namespace if needed.
    ///
    /// # Parameters
    /// - `account`: The account that owns the variable.
    /// - `name`: The variable name, a single ASCII letter.
    /// - `value`: The value to store.
    ///
    /// # Errors
    /// - `InvalidVariableName` if `name` is not a single ASCII letter.
    /// - `InvalidValue` if `value` is NaN or infinite.
    ///
    /// # Example
    /// ```
    /// use calcbot::{EvalError, interpreter::store::VariableStore};
    ///
    /// let mut store = VariableStore::new();
    /// store.set("bill", "n", 10.0).unwrap();
    /// assert_eq!(store.get("bill", "n"), Ok(10.0));
    /// assert_eq!(store.set("bill", "test", 1.0), Err(EvalError::InvalidVariableName));
    /// assert_eq!(store.set("bill", "a", f64::NAN), Err(EvalError::InvalidValue));
    /// ```
    pub fn set(&mut self, account: &str, name: &str, value: f64) -> EvalResult<()> {
        let name = variable_name(name).ok_or(EvalError::InvalidVariableName)?;
        if !value.is_finite() {
            return Err(EvalError::InvalidValue);
        }

        debug!(account, %name, value, "assigning variable");
        self.accounts
            .entry(account.to_string())
            .or_default()
            .insert(name, value);
        Ok(())
    }

    /// Returns the value of the variable `name` of `account`.
    ///
    /// # Parameters
    /// - `account`: The account that owns the variable.
    /// - `name`: The variable name.
    ///
    /// # Returns
    /// The stored value.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if the account has no such variable.
    pub fn get(&self, account: &str, name: &str) -> EvalResult<f64> {
        variable_name(name).and_then(|c| self.accounts.get(account)?.get(&c).copied())
                           .ok_or_else(|| EvalError::UndefinedVariable { name: name.to_string() })
    }

    /// Removes every variable of `account`.
    ///
    /// # Parameters
    /// - `account`: The account whose variables are removed.
    ///
    /// # Returns
    /// `true` if the account had variables, `false` if there was nothing to
    /// remove.
    pub fn delete_all(&mut self, account: &str) -> bool {
        info!("Deleting variables for account: {account}");
        self.accounts.remove(account).is_some()
    }

    /// Iterates over the variables of `account` in name order.
    ///
    /// # Parameters
    /// - `account`: The account to list.
    ///
    /// # Returns
    /// An iterator of `(name, value)` pairs, empty for an unknown account.
    pub fn variables(&self, account: &str) -> impl Iterator<Item = (char, f64)> + '_ {
        self.accounts
            .get(account)
            .into_iter()
            .flat_map(|vars| vars.iter().map(|(&name, &value)| (name, value)))
    }
}
