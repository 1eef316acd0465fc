//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

use crate::scoring::Band;

pub const TITLE_COLOR: Color = Color::Magenta;
pub const MUTED: Color = Color::Gray;
pub const ROW_ALT_BG: Color = Color::Indexed(235);
pub const STATUS_BAR_BG: Color = Color::Indexed(236);
pub const STATUS_KEY_COLOR: Color = Color::Cyan;
pub const FLASH_SUCCESS: Color = Color::Green;
pub const FLASH_ERROR: Color = Color::Red;

pub fn header_style() -> Style {
    Style::new().bold()
}

pub fn row_selected() -> Style {
    Style::new().reversed()
}

/// Terminal color for a result band. The band names are the original
/// traffic-light palette; Black renders as dark gray so it stays visible on
/// dark terminals.
pub fn band_color(band: Band) -> Color {
    match band {
        Band::Green => Color::Green,
        Band::Blue => Color::Blue,
        Band::Orange => Color::Indexed(208),
        Band::Red => Color::Red,
        Band::Black => Color::DarkGray,
    }
}

/// Color for a 0..=3 sub-score.
pub fn points_color(points: u8) -> Color {
    match points {
        3 => Color::Green,
        2 => Color::Cyan,
        1 => Color::Yellow,
        _ => Color::Red,
    }
}
