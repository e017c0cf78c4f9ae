//! Board view - squares, decorations, pieces and arrows, with pointer input
//! routed into the board session.

use gpui::{
    Context, Entity, MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Pixels,
    Subscription, Window, canvas, div, img, prelude::*, px, rgb,
};
use gpui_component::resizable::{h_resizable, resizable_panel};
use tracing::warn;

use crate::domain::{Modifiers, Point, Rect, Square};
use crate::models::BoardSession;
use crate::ui::board_layout::BoardLayout;
use crate::ui::components::{
    PaletteDrag, render_file_labels, render_piece, render_rank_labels, render_square,
};
use crate::ui::config::BoardConfig;
use crate::ui::theme::{
    BOARD_PADDING, INITIAL_LEFT_PANEL, INITIAL_RIGHT_PANEL, PANEL_BG, PIECE_SCALE,
};
use crate::ui::views::render_side_panel;

fn to_point(position: gpui::Point<Pixels>) -> Point {
    Point::new(position.x.into(), position.y.into())
}

fn to_modifiers(modifiers: gpui::Modifiers) -> Modifiers {
    Modifiers {
        shift: modifiers.shift,
        control: modifiers.control,
        option: modifiers.alt,
        command: modifiers.platform,
    }
}

/// The board view observes a BoardSession and owns the display config
pub struct BoardView {
    pub(crate) session: Entity<BoardSession>,
    pub(crate) config: BoardConfig,
    _subscription: Subscription,
}

impl BoardView {
    pub fn new(session: Entity<BoardSession>, config: BoardConfig, cx: &mut Context<Self>) -> Self {
        let _subscription = cx.observe(&session, |_, _, cx| cx.notify());
        session.update(cx, |session, _| session.set_flipped(config.flipped));
        Self {
            session,
            config,
            _subscription,
        }
    }

    pub fn toggle_flipped(&mut self, cx: &mut Context<Self>) {
        self.config.flipped = !self.config.flipped;
        let flipped = self.config.flipped;
        self.session.update(cx, |session, cx| {
            session.set_flipped(flipped);
            cx.notify();
        });
    }
}

impl Render for BoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let model_down = self.session.clone();
        let model_secondary_down = self.session.clone();
        let model_move = self.session.clone();
        let model_up = self.session.clone();
        let model_up_out = self.session.clone();
        let model_secondary_up = self.session.clone();
        let model_secondary_up_out = self.session.clone();
        let model_measure = self.session.clone();

        let config = self.config.clone();
        let session = self.session.read(cx);
        let geometry = session.geometry();
        let board = session.board();
        let drag = session.drag().copied();

        let cell_size = geometry.cell_size();
        let piece_size = cell_size * PIECE_SCALE;
        let board_size = geometry.size;
        let square_set = config.square_set.square_set();
        let piece_set = config.piece_set.piece_set();
        let square_decorator = config.square_decorator.decorator();
        let board_decorator = config.board_decorator.decorator();
        let inset = config.coordinates_inset();

        let squares = Square::all().map(|square| {
            let decorations = board
                .square_decorations()
                .iter()
                .filter(|d| d.square == square)
                .filter_map(|d| square_decorator.render(d, cell_size))
                .collect();
            render_square(
                geometry.cell_frame(square),
                square_set.color(square),
                decorations,
            )
        });

        let dragged_id = drag.map(|d| d.piece.id);
        let pieces = board.pieces().iter().map(|piece| {
            render_piece(
                piece_set.asset_path(piece.kind, piece.color),
                geometry.cell_frame(piece.square),
                piece_size,
                dragged_id == Some(piece.id),
            )
        });

        // Arrows are painted over the pieces in one canvas
        let board_decorations = board.board_decorations().to_vec();
        let arrows = canvas(
            |_, _, _| {},
            move |bounds, _, window, _| {
                for decoration in &board_decorations {
                    board_decorator.paint(decoration, &geometry, bounds, window);
                }
            },
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full();

        let board_element = div()
            .relative()
            .flex_shrink_0()
            .w(px(board_size))
            .h(px(board_size))
            .overflow_hidden()
            .children(squares)
            .children(pieces)
            .child(arrows);

        // Floating piece follows the pointer, positioned relative to the panel
        let (offset_x, offset_y) = BoardLayout::new(Rect::default(), inset).board_offset();
        let floating_piece = drag.map(|d| {
            div()
                .absolute()
                .left(px(d.pointer.x + offset_x - piece_size / 2.0))
                .top(px(d.pointer.y + offset_y - piece_size / 2.0))
                .size(px(piece_size))
                .child(img(piece_set.asset_path(d.piece.kind, d.piece.color)).size(px(piece_size)))
        });

        let board_with_labels = div()
            .flex()
            .flex_col()
            .flex_shrink_0()
            .child(
                div()
                    .flex()
                    .when(config.show_coordinates, |el| {
                        el.child(render_rank_labels(&config, cell_size))
                    })
                    .child(board_element),
            )
            .when(config.show_coordinates, |el| {
                el.child(render_file_labels(&config, cell_size))
            });

        let board_panel_content = div()
            .id("board-panel")
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(rgb(PANEL_BG))
            .p(px(BOARD_PADDING))
            .child(board_with_labels)
            .when_some(floating_piece, |el, fp| el.child(fp))
            .on_mouse_down(MouseButton::Left, move |ev: &MouseDownEvent, _window, cx| {
                model_down.update(cx, |session, cx| {
                    session.primary_down(to_point(ev.position));
                    cx.notify();
                });
            })
            .on_mouse_down(MouseButton::Right, move |ev: &MouseDownEvent, _window, cx| {
                model_secondary_down.update(cx, |session, cx| {
                    session.secondary_down(to_point(ev.position), to_modifiers(ev.modifiers));
                    cx.notify();
                });
            })
            .on_mouse_move(move |ev: &MouseMoveEvent, _, cx| {
                let position = to_point(ev.position);
                model_move.update(cx, |session, cx| match ev.pressed_button {
                    Some(MouseButton::Left) => {
                        session.primary_move(position);
                        cx.notify();
                    }
                    Some(MouseButton::Right) => {
                        session.secondary_move(position, to_modifiers(ev.modifiers));
                        cx.notify();
                    }
                    _ => {}
                });
            })
            .on_mouse_up(MouseButton::Left, move |ev: &MouseUpEvent, _window, cx| {
                model_up.update(cx, |session, cx| {
                    session.primary_up(to_point(ev.position));
                    cx.notify();
                });
            })
            // Releasing outside the panel still ends the gesture
            .on_mouse_up_out(MouseButton::Left, move |ev: &MouseUpEvent, _window, cx| {
                model_up_out.update(cx, |session, cx| {
                    session.primary_up(to_point(ev.position));
                    cx.notify();
                });
            })
            .on_mouse_up(MouseButton::Right, move |ev: &MouseUpEvent, _window, cx| {
                model_secondary_up.update(cx, |session, cx| {
                    session.secondary_up(to_point(ev.position), to_modifiers(ev.modifiers));
                    cx.notify();
                });
            })
            .on_mouse_up_out(MouseButton::Right, move |ev: &MouseUpEvent, _window, cx| {
                model_secondary_up_out.update(cx, |session, cx| {
                    session.secondary_up(to_point(ev.position), to_modifiers(ev.modifiers));
                    cx.notify();
                });
            })
            .on_drop(cx.listener(|this, drag: &PaletteDrag, window, cx| {
                let position = to_point(window.mouse_position());
                this.session.update(cx, |session, cx| {
                    match session.drop_payload(&drag.payload, position) {
                        Ok(_) => cx.notify(),
                        Err(err) => warn!("rejected piece drop: {err:#}"),
                    }
                });
            }));

        // Canvas to measure actual panel size and place the board
        let measure_canvas = canvas(
            move |bounds, _window, cx| {
                let panel = Rect::new(
                    bounds.origin.x.into(),
                    bounds.origin.y.into(),
                    bounds.size.width.into(),
                    bounds.size.height.into(),
                );
                let frame = BoardLayout::new(panel, inset).board_frame();
                model_measure.update(cx, |session, cx| {
                    if session.bounds() != frame {
                        session.set_bounds(frame);
                        cx.notify();
                    }
                });
            },
            |_, _, _, _| {},
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full();

        let board_panel_with_measure = div()
            .relative()
            .size_full()
            .child(measure_canvas)
            .child(board_panel_content);

        let side_panel = render_side_panel(self, cx);

        div().size_full().child(
            h_resizable("board-layout")
                .child(
                    resizable_panel()
                        .size(px(INITIAL_LEFT_PANEL))
                        .size_range(px(320.)..px(1600.))
                        .child(board_panel_with_measure),
                )
                .child(
                    resizable_panel()
                        .size(px(INITIAL_RIGHT_PANEL))
                        .size_range(px(180.)..Pixels::MAX)
                        .child(side_panel),
                ),
        )
    }
}
