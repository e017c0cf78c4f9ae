//! Piece palette: every kind and color, draggable onto the board.

use gpui::{
    Context, Pixels, Point, SharedString, Window, div, img, prelude::*, px, rgb,
};
use tracing::warn;

use crate::domain::drag_payload;
use crate::domain::{PieceColor, PieceKind, PieceTemplate};
use crate::ui::sets::PieceSet;
use crate::ui::theme::{BORDER_COLOR, BUTTON_BG};

const PALETTE_PIECE_SIZE: f32 = 40.0;

/// Drag value carried from the palette to the board; rendered as the drag preview
#[derive(Clone, Debug)]
pub struct PaletteDrag {
    /// Encoded `PieceData`
    pub payload: String,
    asset: SharedString,
    position: Point<Pixels>,
}

impl PaletteDrag {
    pub fn new(template: PieceTemplate, piece_set: &dyn PieceSet) -> anyhow::Result<Self> {
        Ok(Self {
            payload: drag_payload::encode(template)?,
            asset: piece_set.asset_path(template.kind, template.color),
            position: Point::default(),
        })
    }

    fn at(mut self, position: Point<Pixels>) -> Self {
        self.position = position;
        self
    }
}

impl Render for PaletteDrag {
    fn render(&mut self, _: &mut Window, _: &mut Context<Self>) -> impl IntoElement {
        let half = px(PALETTE_PIECE_SIZE / 2.0);
        div()
            .pl(self.position.x - half)
            .pt(self.position.y - half)
            .child(img(self.asset.clone()).size(px(PALETTE_PIECE_SIZE)))
    }
}

/// Two rows of pieces, white then black
pub fn render_palette(piece_set: &dyn PieceSet) -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .gap_1()
        .children(PieceColor::ALL.into_iter().map(|color| {
            div()
                .flex()
                .gap_1()
                .children(PieceKind::ALL.into_iter().filter_map(|kind| {
                    let template = PieceTemplate::new(kind, color);
                    let drag = match PaletteDrag::new(template, piece_set) {
                        Ok(drag) => drag,
                        Err(err) => {
                            warn!(?kind, ?color, "palette entry skipped: {err:#}");
                            return None;
                        }
                    };
                    let asset = drag.asset.clone();
                    Some(
                        div()
                            .id(SharedString::from(format!(
                                "palette-{}{}",
                                color.letter(),
                                kind.letter()
                            )))
                            .size(px(PALETTE_PIECE_SIZE))
                            .rounded_md()
                            .cursor_grab()
                            .hover(|el| {
                                el.bg(rgb(BUTTON_BG))
                                    .border_1()
                                    .border_color(rgb(BORDER_COLOR))
                            })
                            .on_drag(drag, |drag: &PaletteDrag, position, _, cx| {
                                cx.new(|_| drag.clone().at(position))
                            })
                            .child(img(asset).size(px(PALETTE_PIECE_SIZE))),
                    )
                }))
        }))
}
