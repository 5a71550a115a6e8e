use crate::ui::calculator::CalculatorState;
use crate::ui::theme::Theme;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Right-aligned display panel above the keypad.
pub struct DisplayPanel<'a> {
    state: &'a CalculatorState,
    theme: Theme,
}

impl<'a> DisplayPanel<'a> {
    pub fn new(state: &'a CalculatorState, theme: Theme) -> Self {
        Self { state, theme }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let color = if self.state.is_error() {
            self.theme.error_text
        } else {
            self.theme.display_text
        };
        let text_style = Style::default().fg(color).add_modifier(Modifier::BOLD);

        let line = Line::from(vec![
            Span::styled(self.state.display(), text_style),
            Span::raw(" "),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Right)
            .style(Style::default().bg(self.theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.border)),
            )
    }
}
