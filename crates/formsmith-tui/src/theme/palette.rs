//! Color palette

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

/// Foreground on top of an accent background
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Drag feedback ---
pub const DRAG_SOURCE: Color = Color::DarkGray;
pub const DROP_TARGET: Color = Color::Magenta;

// --- Effects ---
pub const SHADOW: Color = Color::Black;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_background_is_rgb() {
        match POPUP_BG {
            Color::Rgb(_, _, _) => {}
            _ => panic!("POPUP_BG should be RGB"),
        }
    }

    #[test]
    fn test_drag_colors_differ_from_focus() {
        assert_ne!(DROP_TARGET, BORDER_ACTIVE);
        assert_ne!(DRAG_SOURCE, BORDER_ACTIVE);
    }
}
