//! Rank and file labels drawn beside the board.

use gpui::{Div, FontWeight, div, prelude::*, px};

use crate::domain::{File, Rank};
use crate::ui::config::BoardConfig;

/// Rank labels from top to bottom
pub fn rank_labels(flipped: bool) -> [char; 8] {
    let mut labels = Rank::ALL.map(Rank::name);
    if !flipped {
        labels.reverse();
    }
    labels
}

/// File labels from left to right
pub fn file_labels(flipped: bool) -> [char; 8] {
    let mut labels = File::ALL.map(File::name);
    if flipped {
        labels.reverse();
    }
    labels
}

fn label(text: char, config: &BoardConfig) -> Div {
    div()
        .flex()
        .items_center()
        .justify_center()
        .text_size(px(config.coordinates_font_size))
        .font_weight(FontWeight::BOLD)
        .text_color(config.coordinates_foreground.to_rgba())
        .child(text.to_string())
}

/// Column of rank labels to the left of the board
pub fn render_rank_labels(config: &BoardConfig, cell_size: f32) -> Div {
    div()
        .flex()
        .flex_col()
        .flex_shrink_0()
        .w(px(config.coordinates_size))
        .bg(config.coordinates_background.to_rgba())
        .children(
            rank_labels(config.flipped)
                .into_iter()
                .map(|text| label(text, config).h(px(cell_size))),
        )
}

/// Row of file labels below the board, offset past the rank column
pub fn render_file_labels(config: &BoardConfig, cell_size: f32) -> Div {
    div()
        .flex()
        .flex_shrink_0()
        .h(px(config.coordinates_size))
        .pl(px(config.coordinates_size))
        .bg(config.coordinates_background.to_rgba())
        .children(
            file_labels(config.flipped)
                .into_iter()
                .map(|text| label(text, config).w(px(cell_size))),
        )
}
