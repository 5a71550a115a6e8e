use ratatui::layout::Rect;

/// Calculator panel width: four keypad columns.
pub const PANEL_WIDTH: u16 = 36;
pub const DISPLAY_HEIGHT: u16 = 3;
/// Five keypad rows, three cells each.
pub const KEYPAD_HEIGHT: u16 = 15;
pub const FOOTER_HEIGHT: u16 = 3;

/// Screen areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub display: Rect,
    pub keypad: Rect,
    /// Zero height when hints are hidden.
    pub footer: Rect,
}

pub fn layout_regions(area: Rect, show_footer: bool) -> Regions {
    let footer_height = if show_footer {
        FOOTER_HEIGHT.min(area.height)
    } else {
        0
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(footer_height),
    };

    let panel = centered_rect_by_size(body, PANEL_WIDTH, DISPLAY_HEIGHT + KEYPAD_HEIGHT);
    let display_height = DISPLAY_HEIGHT.min(panel.height);
    let display = Rect {
        x: panel.x,
        y: panel.y,
        width: panel.width,
        height: display_height,
    };
    let keypad = Rect {
        x: panel.x,
        y: panel.y + display_height,
        width: panel.width,
        height: panel.height.saturating_sub(display_height),
    };

    Regions {
        display,
        keypad,
        footer,
    }
}

/// Rect of at most `width` x `height`, centered in `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_is_centered_above_footer() {
        let regions = layout_regions(Rect::new(0, 0, 80, 24), true);
        assert_eq!(regions.footer, Rect::new(0, 21, 80, 3));
        assert_eq!(regions.display, Rect::new(22, 1, 36, 3));
        assert_eq!(regions.keypad, Rect::new(22, 4, 36, 15));
    }

    #[test]
    fn hidden_footer_takes_no_space() {
        let regions = layout_regions(Rect::new(0, 0, 36, 18), false);
        assert_eq!(regions.footer.height, 0);
        assert_eq!(regions.display, Rect::new(0, 0, 36, 3));
        assert_eq!(regions.keypad, Rect::new(0, 3, 36, 15));
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        let regions = layout_regions(Rect::new(0, 0, 10, 2), true);
        assert_eq!(regions.footer.height, 2);
        assert_eq!(regions.keypad.height, 0);
    }
}
