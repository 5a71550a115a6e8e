use crate::ui::app::App;
use crate::ui::display::DisplayPanel;
use crate::ui::footer::Footer;
use crate::ui::keypad::Keypad;
use crate::ui::layout::layout_regions;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let theme = app.theme();
    let regions = layout_regions(area, app.show_hints());

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );
    frame.render_widget(
        DisplayPanel::new(app.calculator(), theme).widget(),
        regions.display,
    );
    frame.render_widget(Keypad::new(theme, app.pressed()), regions.keypad);

    if regions.footer.height > 0 {
        let footer = Footer::new(theme, app.status());
        frame.render_widget(footer.widget(regions.footer), regions.footer);
    }
}
