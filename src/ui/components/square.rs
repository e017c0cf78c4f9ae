//! Square rendering component.

use gpui::{AnyElement, Rgba, div, prelude::*, px};

use crate::domain::Rect;

/// Render a board cell with its rendered decorations, positioned by its frame
pub fn render_square(frame: Rect, color: Rgba, decorations: Vec<AnyElement>) -> impl IntoElement {
    div()
        .absolute()
        .left(px(frame.origin.x))
        .top(px(frame.origin.y))
        .size(px(frame.width))
        .bg(color)
        .children(decorations)
}
