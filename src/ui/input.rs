use crate::ui::app::App;
use crate::ui::calculator::{CalcIntent, Operator};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Feed the calculator.
    Calculator(CalcIntent),
    /// Copy the display to the system clipboard.
    Copy,
    Quit,
    /// Key has no binding.
    Ignore,
}

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Copy the current display to the clipboard.
    CopyDisplay,
}

/// Map a printable key to a calculator intent.
///
/// Shared by the keyboard and the batch key-string decoder.
pub fn intent_for_char(ch: char) -> Option<CalcIntent> {
    let intent = match ch {
        '0'..='9' => CalcIntent::Digit(ch as u8 - b'0'),
        '.' | ',' => CalcIntent::DecimalPoint,
        '+' => CalcIntent::Operation(Operator::Add),
        '-' => CalcIntent::Operation(Operator::Subtract),
        '*' | 'x' | 'X' => CalcIntent::Operation(Operator::Multiply),
        '/' => CalcIntent::Operation(Operator::Divide),
        '%' => CalcIntent::Percent,
        '=' => CalcIntent::Equals,
        'c' | 'C' => CalcIntent::Clear,
        _ => return None,
    };
    Some(intent)
}

pub fn classify_key(key: KeyEvent) -> KeyCommand {
    if key.kind != KeyEventKind::Press {
        return KeyCommand::Ignore;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        return KeyCommand::Quit;
    }
    if is_ctrl_char(key, 'y') {
        return KeyCommand::Copy;
    }
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return KeyCommand::Ignore;
    }

    match key.code {
        KeyCode::Enter => KeyCommand::Calculator(CalcIntent::Equals),
        KeyCode::Esc => KeyCommand::Calculator(CalcIntent::Clear),
        KeyCode::Backspace | KeyCode::Delete => KeyCommand::Calculator(CalcIntent::Backspace),
        KeyCode::Char('q') => KeyCommand::Quit,
        // Shift is how most layouts reach + * %, so it is not checked.
        KeyCode::Char(ch) => intent_for_char(ch)
            .map(KeyCommand::Calculator)
            .unwrap_or(KeyCommand::Ignore),
        _ => KeyCommand::Ignore,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    match classify_key(key) {
        KeyCommand::Calculator(intent) => {
            app.dispatch(intent);
            InputAction::None
        }
        KeyCommand::Copy => InputAction::CopyDisplay,
        KeyCommand::Quit => {
            app.request_quit();
            InputAction::None
        }
        KeyCommand::Ignore => InputAction::None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_map_to_digit_intents() {
        for d in 0..=9u8 {
            let ch = char::from(b'0' + d);
            assert_eq!(
                classify_key(key(KeyCode::Char(ch))),
                KeyCommand::Calculator(CalcIntent::Digit(d))
            );
        }
    }

    #[test]
    fn shifted_operators_still_map() {
        let plus = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(
            classify_key(plus),
            KeyCommand::Calculator(CalcIntent::Operation(Operator::Add))
        );
    }

    #[test]
    fn control_keys_are_app_commands() {
        let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        let copy = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL);
        let other = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::CONTROL);
        assert_eq!(classify_key(quit), KeyCommand::Quit);
        assert_eq!(classify_key(copy), KeyCommand::Copy);
        assert_eq!(classify_key(other), KeyCommand::Ignore);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut release = key(KeyCode::Char('1'));
        release.kind = KeyEventKind::Release;
        assert_eq!(classify_key(release), KeyCommand::Ignore);
    }
}
