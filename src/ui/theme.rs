//! Theme constants and colors for the board UI.

use gpui::{Rgba, rgba};

use crate::domain::DecorationColor;

// Layout constants
pub const BOARD_PADDING: f32 = 20.0;
pub const PIECE_SCALE: f32 = 0.98; // piece size relative to square
pub const GHOST_OPACITY: f32 = 0.4;
pub const MIN_CELL_SIZE: f32 = 30.0;

// Initial panel sizes
pub const INITIAL_LEFT_PANEL: f32 = 640.0;
pub const INITIAL_RIGHT_PANEL: f32 = 260.0;

// Square sets
pub const GREEN_LIGHT: u32 = 0xEEEED2;
pub const GREEN_DARK: u32 = 0x769656;
pub const BLUE_LIGHT: u32 = 0xDEE3E6;
pub const BLUE_DARK: u32 = 0x8CA2AD;

// Selection ring (border_4 gives the 4px stroke)
pub const SELECTION_COLOR: u32 = 0xFF3B30;
pub const SELECTION_INSET: f32 = 4.0;
pub const SELECTION_RADIUS: f32 = 8.0;

// Panel colors
pub const PANEL_BG: u32 = 0x2a2a2a;
pub const SIDE_PANEL_BG: u32 = 0x1e1e1e;
pub const BORDER_COLOR: u32 = 0x4a4a4a;
pub const BUTTON_BG: u32 = 0x3a3a3a;
pub const TEXT_PRIMARY: u32 = 0xffffff;
pub const TEXT_SECONDARY: u32 = 0x888888;

/// Highlight and arrow fill, 70% opaque
pub fn decoration_color(color: DecorationColor) -> Rgba {
    match color {
        DecorationColor::Red => rgba(0xFF3B30B3),
        DecorationColor::Green => rgba(0x34C759B3),
        DecorationColor::Orange => rgba(0xFF9500B3),
        DecorationColor::Blue => rgba(0x007AFFB3),
    }
}
