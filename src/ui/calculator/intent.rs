//! Intents for the calculator entry engine.

use crate::ui::mvi::Intent;

use super::operator::Operator;

/// Input events the entry engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcIntent {
    /// A digit 0-9. Values above 9 are ignored by the reducer.
    Digit(u8),
    DecimalPoint,
    /// Binary operator key.
    Operation(Operator),
    /// Unary percent: divides the operand being typed by 100.
    Percent,
    Equals,
    /// AC
    Clear,
    Backspace,
}

impl Intent for CalcIntent {}
