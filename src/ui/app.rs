use crate::config::Config;
use crate::ui::calculator::{CalcIntent, CalcReducer, CalculatorState};
use crate::ui::keypad::hit_test;
use crate::ui::layout::{layout_regions, Regions};
use crate::ui::mvi::Reducer;
use crate::ui::theme::Theme;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    /// Calculator state (MVI pattern).
    calculator: CalculatorState,
    theme: Theme,
    show_hints: bool,
    flash: Duration,
    /// Last dispatched intent, highlighted on the keypad until `flash` elapses.
    pressed: Option<(CalcIntent, Instant)>,
    status: Option<(String, Instant)>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            size: None,
            calculator: CalculatorState::default(),
            theme: Theme::from(config.ui.theme),
            show_hints: config.ui.show_hints,
            flash: Duration::from_millis(config.ui.flash_ms),
            pressed: None,
            status: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn calculator(&self) -> &CalculatorState {
        &self.calculator
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// Apply one calculator intent.
    pub fn dispatch(&mut self, intent: CalcIntent) {
        dispatch_mvi!(self, calculator, CalcReducer, intent);
        tracing::debug!(
            ?intent,
            display = %self.calculator.display,
            pending = ?self.calculator.operation,
            "calculator transition"
        );
        self.pressed = Some((intent, Instant::now()));
    }

    /// Intent whose keypad button is currently highlighted.
    pub fn pressed(&self) -> Option<CalcIntent> {
        self.pressed.map(|(intent, _)| intent)
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(message, _)| message.as_str())
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some((message.into(), Instant::now()));
    }

    /// Text to put on the clipboard; nothing while the display shows an error.
    pub fn copyable_value(&self) -> Option<&str> {
        if self.calculator.is_error() {
            None
        } else {
            Some(self.calculator.display())
        }
    }

    pub fn on_tick(&mut self) {
        let now = Instant::now();
        if matches!(self.pressed, Some((_, at)) if now.duration_since(at) >= self.flash) {
            self.pressed = None;
        }
        // Status messages stay visible for a few ticks longer than the flash.
        let status_ttl = self.flash.max(Duration::from_secs(2));
        if matches!(&self.status, Some((_, at)) if now.duration_since(*at) >= status_ttl) {
            self.status = None;
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Screen regions for the last known terminal size.
    pub fn regions(&self) -> Option<Regions> {
        self.size.map(|(cols, rows)| {
            layout_regions(
                Rect {
                    x: 0,
                    y: 0,
                    width: cols,
                    height: rows,
                },
                self.show_hints,
            )
        })
    }

    /// Left click on a keypad button dispatches that button's intent.
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(regions) = self.regions() else {
            return;
        };
        if let Some(button) = hit_test(regions.keypad, mouse.column, mouse.row) {
            self.dispatch(button.intent);
        }
    }
}
