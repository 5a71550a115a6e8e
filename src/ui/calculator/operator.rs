use serde::Serialize;
use thiserror::Error;

use super::format::{format_number, parse_operand};

/// Pending binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Why a pending operation could not produce a displayable result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivideByZero,

    #[error("result is not a finite number")]
    NonFinite,

    #[error("invalid operand '{0}'")]
    InvalidOperand(String),
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol shown on the keypad.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Suffix appended to the display while the operator is pending.
    pub fn decoration(self) -> &'static str {
        match self {
            Operator::Add => " + ",
            Operator::Subtract => " - ",
            Operator::Multiply => " × ",
            Operator::Divide => " ÷ ",
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, ArithmeticError> {
        let result = match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs == 0.0 {
                    return Err(ArithmeticError::DivideByZero);
                }
                lhs / rhs
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(ArithmeticError::NonFinite)
        }
    }
}

/// Evaluate `previous op current` and format the result for the display.
pub fn evaluate(previous: &str, current: &str, op: Operator) -> Result<String, ArithmeticError> {
    let lhs = parse_operand(previous)
        .ok_or_else(|| ArithmeticError::InvalidOperand(previous.to_string()))?;
    let rhs = parse_operand(current)
        .ok_or_else(|| ArithmeticError::InvalidOperand(current.to_string()))?;
    let result = op.apply(lhs, rhs)?;
    format_number(result).ok_or(ArithmeticError::NonFinite)
}
