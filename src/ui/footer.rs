use crate::ui::theme::Theme;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HINTS: &str =
    " Enter: = │ Esc: AC │ Bksp: Delete │ Ctrl+Y: Copy │ Ctrl+Q: Quit";

pub struct Footer<'a> {
    theme: Theme,
    /// Transient message shown instead of the version (e.g. "Copied").
    status: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(theme: Theme, status: Option<&'a str>) -> Self {
        Self { theme, status }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let right = match self.status {
            Some(status) => format!("{} ", status),
            None => format!("v{} ", VERSION),
        };

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = HINTS.chars().count();
        let right_width = right.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(right_width);

        let text_style = Style::default()
            .fg(self.theme.hint_text)
            .add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(right, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.border)),
            )
    }
}
