//! Side panel - display toggles, board actions and the piece palette.

use gpui::{Context, FontWeight, SharedString, div, prelude::*, px, rgb};
use gpui_component::button::{Button, ButtonVariants};
use tracing::debug;

use crate::ui::components::render_palette;
use crate::ui::theme::{
    BOARD_PADDING, BORDER_COLOR, SIDE_PANEL_BG, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::views::BoardView;

fn toggle_button(id: &'static str, label: String, active: bool) -> Button {
    let button = Button::new(id).label(label).compact();
    if active { button.primary() } else { button }
}

fn section_title(title: &'static str) -> impl IntoElement {
    div()
        .text_xs()
        .text_color(rgb(TEXT_SECONDARY))
        .child(title)
}

pub fn render_side_panel(view: &BoardView, cx: &mut Context<BoardView>) -> impl IntoElement {
    let config = &view.config;
    let session = view.session.read(cx);
    let decoration_mode = session.delegate().decoration_mode;
    let fen = SharedString::from(session.board().board_fen());

    let display = div()
        .flex()
        .flex_wrap()
        .gap_2()
        .child(
            toggle_button("flip", "Flip".into(), config.flipped)
                .on_click(cx.listener(|this, _, _, cx| this.toggle_flipped(cx))),
        )
        .child(
            toggle_button("coordinates", "Coordinates".into(), config.show_coordinates)
                .on_click(cx.listener(|this, _, _, cx| {
                    this.config.show_coordinates = !this.config.show_coordinates;
                    cx.notify();
                })),
        )
        .child(
            toggle_button(
                "square-set",
                format!("Squares: {:?}", config.square_set),
                false,
            )
            .on_click(cx.listener(|this, _, _, cx| {
                this.config.square_set = this.config.square_set.next();
                debug!(square_set = ?this.config.square_set, "square set changed");
                cx.notify();
            })),
        )
        .child(
            toggle_button(
                "piece-set",
                format!("Pieces: {:?}", config.piece_set),
                false,
            )
            .on_click(cx.listener(|this, _, _, cx| {
                this.config.piece_set = this.config.piece_set.next();
                debug!(piece_set = ?this.config.piece_set, "piece set changed");
                cx.notify();
            })),
        );

    let session_for_mode = view.session.clone();
    let session_for_reset = view.session.clone();
    let session_for_clear = view.session.clone();
    let session_for_decorations = view.session.clone();
    let actions = div()
        .flex()
        .flex_wrap()
        .gap_2()
        .child(
            toggle_button("decoration-mode", "Decoration mode".into(), decoration_mode).on_click(
                move |_, _, cx| {
                    session_for_mode.update(cx, |session, cx| {
                        session.delegate_mut().toggle_decoration_mode();
                        cx.notify();
                    });
                },
            ),
        )
        .child(
            Button::new("start-position")
                .label("Start position")
                .compact()
                .on_click(move |_, _, cx| {
                    session_for_reset.update(cx, |session, cx| {
                        let board = session.board_mut();
                        board.remove_all_square_decorations();
                        board.remove_all_board_decorations();
                        board.setup_start_position();
                        cx.notify();
                    });
                }),
        )
        .child(
            Button::new("clear-board")
                .label("Clear board")
                .danger()
                .compact()
                .on_click(move |_, _, cx| {
                    session_for_clear.update(cx, |session, cx| {
                        session.board_mut().remove_all_pieces();
                        cx.notify();
                    });
                }),
        )
        .child(
            Button::new("clear-decorations")
                .label("Clear marks")
                .compact()
                .on_click(move |_, _, cx| {
                    session_for_decorations.update(cx, |session, cx| {
                        let board = session.board_mut();
                        board.remove_all_square_decorations();
                        board.remove_all_board_decorations();
                        cx.notify();
                    });
                }),
        );

    div()
        .size_full()
        .flex()
        .flex_col()
        .gap_4()
        .p(px(BOARD_PADDING))
        .bg(rgb(SIDE_PANEL_BG))
        .border_l_1()
        .border_color(rgb(BORDER_COLOR))
        .child(
            div()
                .text_color(rgb(TEXT_PRIMARY))
                .font_weight(FontWeight::SEMIBOLD)
                .child("Board"),
        )
        .child(section_title("Display"))
        .child(display)
        .child(section_title("Actions"))
        .child(actions)
        .child(section_title("Drag a piece onto the board"))
        .child(render_palette(config.piece_set.piece_set()))
        .child(section_title("Position"))
        .child(
            div()
                .text_xs()
                .text_color(rgb(TEXT_PRIMARY))
                .child(fen),
        )
}
