//! Renderers for square decorations and board decorations.

use gpui::{AnyElement, Bounds, PathBuilder, Pixels, Window, div, point, prelude::*, px, rgb};
use tracing::warn;

use crate::domain::{
    BoardDecoration, BoardGeometry, Point, SquareDecoration, SquareDecorationKind, arrow_outline,
};
use crate::ui::theme::{SELECTION_COLOR, SELECTION_INSET, SELECTION_RADIUS, decoration_color};

/// Draws one square decoration inside its cell
pub trait SquareDecorator {
    fn render(&self, decoration: &SquareDecoration, cell_size: f32) -> Option<AnyElement>;
}

/// Paints one board decoration over the whole board
pub trait BoardDecorator {
    /// `bounds` is the board frame in window coordinates
    fn paint(
        &self,
        decoration: &BoardDecoration,
        geometry: &BoardGeometry,
        bounds: Bounds<Pixels>,
        window: &mut Window,
    );
}

/// Rounded ring for selections, translucent fill for highlights
pub struct DefaultSquareDecorator;

impl SquareDecorator for DefaultSquareDecorator {
    fn render(&self, decoration: &SquareDecoration, cell_size: f32) -> Option<AnyElement> {
        let element = match decoration.kind {
            SquareDecorationKind::Selection => div()
                .absolute()
                .left(px(SELECTION_INSET))
                .top(px(SELECTION_INSET))
                .size(px((cell_size - 2.0 * SELECTION_INSET).max(0.0)))
                .border_4()
                .border_color(rgb(SELECTION_COLOR))
                .rounded(px(SELECTION_RADIUS)),
            SquareDecorationKind::Highlight(color) => div()
                .absolute()
                .top_0()
                .left_0()
                .size_full()
                .bg(decoration_color(color)),
        };
        Some(element.into_any_element())
    }
}

pub struct HiddenSquareDecorator;

impl SquareDecorator for HiddenSquareDecorator {
    fn render(&self, _decoration: &SquareDecoration, _cell_size: f32) -> Option<AnyElement> {
        None
    }
}

/// Filled arrows; knight moves get an L-shaped arrow
pub struct StraightAndKnightArrows;

impl BoardDecorator for StraightAndKnightArrows {
    fn paint(
        &self,
        decoration: &BoardDecoration,
        geometry: &BoardGeometry,
        bounds: Bounds<Pixels>,
        window: &mut Window,
    ) {
        let BoardDecoration::Arrow(arrow) = decoration;
        let outline = arrow_outline(arrow, geometry);
        let Some((first, rest)) = outline.points.split_first() else {
            return;
        };

        let to_window = |p: &Point| point(bounds.origin.x + px(p.x), bounds.origin.y + px(p.y));
        let mut builder = PathBuilder::fill();
        builder.move_to(to_window(first));
        for p in rest {
            builder.line_to(to_window(p));
        }
        builder.close();

        match builder.build() {
            Ok(path) => window.paint_path(path, decoration_color(arrow.color)),
            Err(err) => warn!(start = %arrow.start, end = %arrow.end, "arrow path: {err:#}"),
        }
    }
}
