use serde::Serialize;

use crate::ui::mvi::UiState;

use super::operator::Operator;

/// Display text after a division by zero.
pub const ERROR_DISPLAY: &str = "Error";
/// Display text of a freshly cleared calculator.
pub const INITIAL_DISPLAY: &str = "0";

/// Complete calculator state.
///
/// `display` is derived bookkeeping: the operand being typed, or the
/// captured operand plus the pending operator decoration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculatorState {
    pub display: String,
    /// Digits typed since the last operator or clear. Empty when none.
    pub current_value: String,
    /// Left operand of the pending operation. Empty when none.
    pub previous_value: String,
    pub operation: Option<Operator>,
    /// Set by Equals, cleared by the next digit or decimal point.
    pub calculated: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            current_value: String::new(),
            previous_value: String::new(),
            operation: None,
            calculated: false,
        }
    }
}

impl UiState for CalculatorState {}

impl CalculatorState {
    /// State entered on division by zero; only Clear or Backspace leave it.
    pub fn error() -> Self {
        Self {
            display: ERROR_DISPLAY.to_string(),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}
