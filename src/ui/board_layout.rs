//! Board layout calculations - fits the board into the measured panel.

use crate::domain::Rect;
use crate::ui::theme::{BOARD_PADDING, MIN_CELL_SIZE};

/// Places the board inside the board panel, leaving room for the padding
/// and the coordinate labels (a column on the left, a row underneath)
#[derive(Clone, Copy, Debug)]
pub struct BoardLayout {
    /// Panel frame in window coordinates
    pub panel: Rect,
    pub coordinates_inset: f32,
}

impl BoardLayout {
    pub fn new(panel: Rect, coordinates_inset: f32) -> Self {
        Self {
            panel,
            coordinates_inset,
        }
    }

    /// Calculate square size from measured panel dimensions
    pub fn cell_size(&self) -> f32 {
        let available_width = self.panel.width - BOARD_PADDING * 2.0 - self.coordinates_inset;
        let available_height = self.panel.height - BOARD_PADDING * 2.0 - self.coordinates_inset;
        (available_width.min(available_height) / 8.0).max(MIN_CELL_SIZE)
    }

    /// Board frame in window coordinates
    pub fn board_frame(&self) -> Rect {
        let size = self.cell_size() * 8.0;
        Rect::new(
            self.panel.origin.x + BOARD_PADDING + self.coordinates_inset,
            self.panel.origin.y + BOARD_PADDING,
            size,
            size,
        )
    }

    /// Board origin relative to the panel, for absolutely positioned overlays
    pub fn board_offset(&self) -> (f32, f32) {
        (BOARD_PADDING + self.coordinates_inset, BOARD_PADDING)
    }
}
