//! Keypad grid: button placement, hit testing and rendering.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::ui::calculator::{CalcIntent, Operator};
use crate::ui::theme::Theme;

pub const COLUMNS: u16 = 4;
pub const ROWS: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// AC, delete, percent
    Function,
    Digit,
    Operator,
    Equals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    pub label: &'static str,
    pub intent: CalcIntent,
    pub kind: ButtonKind,
    pub row: u16,
    pub col: u16,
    /// Number of columns covered.
    pub span: u16,
}

const fn button(
    label: &'static str,
    intent: CalcIntent,
    kind: ButtonKind,
    row: u16,
    col: u16,
    span: u16,
) -> KeypadButton {
    KeypadButton {
        label,
        intent,
        kind,
        row,
        col,
        span,
    }
}

const fn digit(label: &'static str, value: u8, row: u16, col: u16) -> KeypadButton {
    button(label, CalcIntent::Digit(value), ButtonKind::Digit, row, col, 1)
}

const fn operator(op: Operator, label: &'static str, row: u16) -> KeypadButton {
    button(label, CalcIntent::Operation(op), ButtonKind::Operator, row, 3, 1)
}

/// All buttons, row by row.
pub static BUTTONS: [KeypadButton; 19] = [
    button("AC", CalcIntent::Clear, ButtonKind::Function, 0, 0, 1),
    button("⌫", CalcIntent::Backspace, ButtonKind::Function, 0, 1, 1),
    button("%", CalcIntent::Percent, ButtonKind::Function, 0, 2, 1),
    operator(Operator::Divide, "÷", 0),
    digit("7", 7, 1, 0),
    digit("8", 8, 1, 1),
    digit("9", 9, 1, 2),
    operator(Operator::Multiply, "×", 1),
    digit("4", 4, 2, 0),
    digit("5", 5, 2, 1),
    digit("6", 6, 2, 2),
    operator(Operator::Subtract, "-", 2),
    digit("1", 1, 3, 0),
    digit("2", 2, 3, 1),
    digit("3", 3, 3, 2),
    operator(Operator::Add, "+", 3),
    button("0", CalcIntent::Digit(0), ButtonKind::Digit, 4, 0, 2),
    button(".", CalcIntent::DecimalPoint, ButtonKind::Digit, 4, 2, 1),
    button("=", CalcIntent::Equals, ButtonKind::Equals, 4, 3, 1),
];

/// Screen rect of `button` inside the keypad `area`.
///
/// Cells are `area / grid` wide; the last column and row absorb the remainder.
pub fn button_rect(area: Rect, button: &KeypadButton) -> Rect {
    let cell_width = area.width / COLUMNS;
    let cell_height = area.height / ROWS;

    let x = area.x + button.col * cell_width;
    let y = area.y + button.row * cell_height;
    let width = if button.col + button.span >= COLUMNS {
        area.width - button.col * cell_width
    } else {
        button.span * cell_width
    };
    let height = if button.row + 1 >= ROWS {
        area.height - button.row * cell_height
    } else {
        cell_height
    };

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Button under terminal cell (`column`, `row`), if any.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<&'static KeypadButton> {
    BUTTONS.iter().find(|button| {
        let rect = button_rect(area, button);
        rect.width > 0
            && rect.height > 0
            && column >= rect.x
            && column < rect.x + rect.width
            && row >= rect.y
            && row < rect.y + rect.height
    })
}

/// Keypad widget; highlights the button of the last pressed intent.
pub struct Keypad {
    theme: Theme,
    pressed: Option<CalcIntent>,
}

impl Keypad {
    pub fn new(theme: Theme, pressed: Option<CalcIntent>) -> Self {
        Self { theme, pressed }
    }

    fn button_style(&self, button: &KeypadButton) -> Style {
        let (bg, fg) = match button.kind {
            ButtonKind::Function => (self.theme.function_bg, self.theme.function_fg),
            ButtonKind::Digit => (self.theme.digit_bg, self.theme.digit_fg),
            ButtonKind::Operator => (self.theme.operator_bg, self.theme.operator_fg),
            ButtonKind::Equals => (self.theme.equals_bg, self.theme.equals_fg),
        };
        let bg = if self.pressed == Some(button.intent) {
            self.theme.pressed_bg
        } else {
            bg
        };
        Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD)
    }
}

impl Widget for Keypad {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for button in BUTTONS.iter() {
            let rect = button_rect(area, button);
            if rect.width == 0 || rect.height == 0 {
                continue;
            }
            let style = self.button_style(button);
            Paragraph::new(button.label)
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(style.fg(self.theme.border)),
                )
                .render(rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_calculator_key_has_a_button() {
        for d in 0..=9 {
            assert!(BUTTONS.iter().any(|b| b.intent == CalcIntent::Digit(d)));
        }
        for op in Operator::ALL {
            assert!(BUTTONS.iter().any(|b| b.intent == CalcIntent::Operation(op)));
        }
        for intent in [
            CalcIntent::DecimalPoint,
            CalcIntent::Percent,
            CalcIntent::Equals,
            CalcIntent::Clear,
            CalcIntent::Backspace,
        ] {
            assert!(BUTTONS.iter().any(|b| b.intent == intent));
        }
    }

    #[test]
    fn buttons_do_not_overlap() {
        let mut cells = [[false; COLUMNS as usize]; ROWS as usize];
        for button in BUTTONS.iter() {
            for col in button.col..button.col + button.span {
                let cell = &mut cells[button.row as usize][col as usize];
                assert!(!*cell, "overlap at {:?}", button.label);
                *cell = true;
            }
        }
        assert!(cells.iter().flatten().all(|filled| *filled));
    }

    #[test]
    fn wide_zero_spans_two_cells() {
        let area = Rect::new(0, 0, 36, 15);
        let zero = BUTTONS.iter().find(|b| b.label == "0").unwrap();
        assert_eq!(button_rect(area, zero), Rect::new(0, 12, 18, 3));
    }

    #[test]
    fn last_column_absorbs_remainder() {
        let area = Rect::new(0, 0, 38, 17);
        let equals = BUTTONS.iter().find(|b| b.label == "=").unwrap();
        assert_eq!(button_rect(area, equals), Rect::new(27, 12, 11, 5));
    }
}
