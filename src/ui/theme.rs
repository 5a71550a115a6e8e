use ratatui::style::Color;

use crate::config::ThemeName;

pub const ACCENT_ORANGE: Color = Color::Rgb(0xf9, 0x73, 0x16);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

/// Palette for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub border: Color,
    pub display_text: Color,
    pub hint_text: Color,
    pub digit_bg: Color,
    pub digit_fg: Color,
    pub function_bg: Color,
    pub function_fg: Color,
    pub operator_bg: Color,
    pub operator_fg: Color,
    pub equals_bg: Color,
    pub equals_fg: Color,
    pub pressed_bg: Color,
    pub error_text: Color,
}

impl Theme {
    pub const DARK: Theme = Theme {
        background: Color::Rgb(0x11, 0x18, 0x27),
        border: Color::Rgb(0x37, 0x41, 0x51),
        display_text: Color::Rgb(0xf9, 0xfa, 0xfb),
        hint_text: Color::Rgb(0x9c, 0xa3, 0xaf),
        digit_bg: Color::Rgb(0x1f, 0x29, 0x37),
        digit_fg: Color::Rgb(0xf3, 0xf4, 0xf6),
        function_bg: Color::Rgb(0x37, 0x41, 0x51),
        function_fg: Color::Rgb(0xe5, 0xe7, 0xeb),
        operator_bg: Color::Rgb(0x37, 0x41, 0x51),
        operator_fg: ACCENT_ORANGE,
        equals_bg: ACCENT_ORANGE,
        equals_fg: Color::Rgb(0xff, 0xff, 0xff),
        pressed_bg: Color::Rgb(0x4b, 0x55, 0x63),
        error_text: STATUS_ERROR,
    };

    pub const LIGHT: Theme = Theme {
        background: Color::Rgb(0xf9, 0xfa, 0xfb),
        border: Color::Rgb(0xd1, 0xd5, 0xdb),
        display_text: Color::Rgb(0x11, 0x18, 0x27),
        hint_text: Color::Rgb(0x6b, 0x72, 0x80),
        digit_bg: Color::Rgb(0xff, 0xff, 0xff),
        digit_fg: Color::Rgb(0x11, 0x18, 0x27),
        function_bg: Color::Rgb(0xe5, 0xe7, 0xeb),
        function_fg: Color::Rgb(0x37, 0x41, 0x51),
        operator_bg: Color::Rgb(0xe5, 0xe7, 0xeb),
        operator_fg: ACCENT_ORANGE,
        equals_bg: ACCENT_ORANGE,
        equals_fg: Color::Rgb(0xff, 0xff, 0xff),
        pressed_bg: Color::Rgb(0xd1, 0xd5, 0xdb),
        error_text: STATUS_ERROR,
    };
}

impl From<ThemeName> for Theme {
    fn from(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Theme::DARK,
            ThemeName::Light => Theme::LIGHT,
        }
    }
}
