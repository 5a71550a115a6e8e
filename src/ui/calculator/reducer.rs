//! Reducer for the calculator entry engine.

use crate::ui::mvi::Reducer;

use super::format::{format_operand, parse_operand};
use super::intent::CalcIntent;
use super::operator::{evaluate, ArithmeticError, Operator};
use super::state::{CalculatorState, INITIAL_DISPLAY};

/// Reducer for calculator state transitions.
///
/// Pure function. Division by zero is not an error for the caller: it is
/// the `"Error"` display state, which only Clear and Backspace leave.
pub struct CalcReducer;

impl Reducer for CalcReducer {
    type State = CalculatorState;
    type Intent = CalcIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CalcIntent::Clear => CalculatorState::default(),
            CalcIntent::Backspace => backspace(state),
            _ if state.is_error() => state,
            CalcIntent::Digit(digit) => push_digit(state, digit),
            CalcIntent::DecimalPoint => push_decimal_point(state),
            CalcIntent::Operation(op) => apply_operator(state, op),
            CalcIntent::Percent => percent(state),
            CalcIntent::Equals => equals(state),
        }
    }
}

fn push_digit(mut state: CalculatorState, digit: u8) -> CalculatorState {
    let Some(ch) = char::from_digit(u32::from(digit), 10) else {
        return state;
    };

    if state.calculated {
        state.display = ch.to_string();
        state.current_value = ch.to_string();
        state.calculated = false;
        return state;
    }

    if state.display == INITIAL_DISPLAY {
        state.display = ch.to_string();
        state.current_value = ch.to_string();
    } else {
        state.display.push(ch);
        state.current_value.push(ch);
    }
    state
}

fn push_decimal_point(mut state: CalculatorState) -> CalculatorState {
    if state.calculated {
        state.display = "0.".to_string();
        state.current_value = "0.".to_string();
        state.calculated = false;
        return state;
    }

    // One decimal point per operand
    if state.current_value.contains('.') {
        return state;
    }

    if state.display.ends_with(' ') {
        state.display.push_str("0.");
    } else {
        state.display.push('.');
    }

    if state.current_value.is_empty() {
        state.current_value.push_str("0.");
    } else {
        state.current_value.push('.');
    }
    state
}

fn apply_operator(mut state: CalculatorState, op: Operator) -> CalculatorState {
    match state.operation {
        Some(pending) if state.current_value.is_empty() => {
            // No second operand yet: swap the pending operator.
            if let Some(stripped) = state.display.strip_suffix(pending.decoration()) {
                state.display = format!("{}{}", stripped, op.decoration());
            }
        }
        Some(pending) if !state.previous_value.is_empty() => {
            match evaluate(&state.previous_value, &state.current_value, pending) {
                Ok(result) => {
                    tracing::debug!(
                        lhs = %state.previous_value,
                        rhs = %state.current_value,
                        op = ?pending,
                        result = %result,
                        "chained evaluation"
                    );
                    state.display = format!("{}{}", result, op.decoration());
                    state.previous_value = result;
                }
                Err(err) => return evaluation_failed(state, err),
            }
        }
        _ => {
            state.previous_value = if state.current_value.is_empty() {
                state.display.clone()
            } else {
                state.current_value.clone()
            };
            state.display.push_str(op.decoration());
        }
    }

    state.operation = Some(op);
    state.current_value.clear();
    state.calculated = false;
    state
}

fn percent(mut state: CalculatorState) -> CalculatorState {
    let Some(value) = parse_operand(&state.current_value) else {
        return state;
    };
    let Some(result) = format_operand(value / 100.0) else {
        return state;
    };

    state.display = result.clone();
    state.current_value = result;
    state
}

fn equals(state: CalculatorState) -> CalculatorState {
    let Some(op) = state.operation else {
        return state;
    };
    if state.previous_value.is_empty() || state.current_value.is_empty() {
        return state;
    }

    match evaluate(&state.previous_value, &state.current_value, op) {
        Ok(result) => {
            tracing::debug!(
                lhs = %state.previous_value,
                rhs = %state.current_value,
                op = ?op,
                result = %result,
                "evaluated"
            );
            CalculatorState {
                display: result.clone(),
                current_value: result,
                previous_value: String::new(),
                operation: None,
                calculated: true,
            }
        }
        Err(err) => evaluation_failed(state, err),
    }
}

fn evaluation_failed(state: CalculatorState, err: ArithmeticError) -> CalculatorState {
    match err {
        ArithmeticError::InvalidOperand(_) => {
            tracing::warn!(error = %err, display = %state.display, "ignoring evaluation");
            state
        }
        ArithmeticError::DivideByZero | ArithmeticError::NonFinite => {
            tracing::debug!(error = %err, "entering error state");
            CalculatorState::error()
        }
    }
}

fn backspace(mut state: CalculatorState) -> CalculatorState {
    if state.calculated || state.is_error() {
        return CalculatorState::default();
    }

    let len = state.display.chars().count();
    if len == 1 || (len == 2 && state.display.starts_with('-')) {
        state.display = INITIAL_DISPLAY.to_string();
        state.current_value.clear();
        return state;
    }

    if state.display.ends_with(' ') {
        if let Some(op) = state.operation {
            if let Some(stripped) = state.display.strip_suffix(op.decoration()) {
                return CalculatorState {
                    display: stripped.to_string(),
                    current_value: state.previous_value,
                    previous_value: String::new(),
                    operation: None,
                    calculated: false,
                };
            }
        }
    }

    state.display.pop();
    state.current_value.pop();
    state
}
