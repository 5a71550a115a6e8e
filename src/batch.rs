//! Non-interactive mode: replay a key string through the entry engine.

use thiserror::Error;

use crate::ui::calculator::{CalcIntent, CalcReducer, CalculatorState};
use crate::ui::input::intent_for_char;
use crate::ui::mvi::Reducer;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyMapError {
    #[error("Unknown key '{key}' at position {position}")]
    UnknownKey { key: char, position: usize },
}

/// Decode a key string into intents.
///
/// Accepts the keyboard characters (`0-9 . , + - * x / % =`), `C` for clear and
/// `<` for backspace. Whitespace is ignored. Positions are character indices.
pub fn parse_keys(input: &str) -> Result<Vec<CalcIntent>, KeyMapError> {
    input
        .chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(|(position, key)| match key {
            '<' => Ok(CalcIntent::Backspace),
            _ => intent_for_char(key).ok_or(KeyMapError::UnknownKey { key, position }),
        })
        .collect()
}

/// Replay `input` from the initial state and return the final state.
pub fn run_keys(input: &str) -> Result<CalculatorState, KeyMapError> {
    let intents = parse_keys(input)?;
    tracing::debug!(keys = intents.len(), "replaying key string");
    Ok(CalcReducer::reduce_all(CalculatorState::default(), intents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::calculator::Operator;

    #[test]
    fn parses_calculator_keys() {
        let intents = parse_keys("1.5 * 2 =").unwrap();
        assert_eq!(
            intents,
            vec![
                CalcIntent::Digit(1),
                CalcIntent::DecimalPoint,
                CalcIntent::Digit(5),
                CalcIntent::Operation(Operator::Multiply),
                CalcIntent::Digit(2),
                CalcIntent::Equals,
            ]
        );
    }

    #[test]
    fn clear_and_backspace_keys() {
        assert_eq!(
            parse_keys("C<").unwrap(),
            vec![CalcIntent::Clear, CalcIntent::Backspace]
        );
    }

    #[test]
    fn comma_is_a_decimal_point() {
        assert_eq!(run_keys("2,5+2,5=").unwrap().display, "5");
    }

    #[test]
    fn unknown_key_reports_position() {
        assert_eq!(
            parse_keys("12?"),
            Err(KeyMapError::UnknownKey {
                key: '?',
                position: 2
            })
        );
    }

    #[test]
    fn run_keys_evaluates() {
        assert_eq!(run_keys("3+4=").unwrap().display, "7");
    }
}
