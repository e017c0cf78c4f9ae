//! Piece rendering component.

use gpui::{SharedString, div, img, prelude::*, px};

use crate::domain::Rect;
use crate::ui::theme::GHOST_OPACITY;

/// Render a piece centered in its cell frame. A ghost is drawn translucent
/// while the piece itself follows the pointer.
pub fn render_piece(
    asset: SharedString,
    frame: Rect,
    piece_size: f32,
    ghost: bool,
) -> impl IntoElement {
    div()
        .absolute()
        .left(px(frame.origin.x))
        .top(px(frame.origin.y))
        .size(px(frame.width))
        .flex()
        .items_center()
        .justify_center()
        .when(ghost, |el| el.opacity(GHOST_OPACITY))
        .child(img(asset).size(px(piece_size)))
}
