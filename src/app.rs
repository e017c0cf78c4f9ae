//! Application setup and window creation.

use gpui::{App, Bounds, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;
use tracing::{error, trace};

use crate::domain::BoardModel;
use crate::models::{BoardSession, DemoBoardDelegate};
use crate::ui::BoardConfig;
use crate::ui::views::BoardView;

/// Initialize and run the board application
pub fn run(cx: &mut App, config: BoardConfig) {
    gpui_component::init(cx);

    let mut board = BoardModel::new();
    board.subscribe(|change| trace!(?change, "board changed"));
    board.setup_start_position();

    let session = cx.new(|_| BoardSession::new(board, DemoBoardDelegate::new()));

    let bounds = Bounds::centered(None, size(px(960.0), px(680.0)), cx);
    let opened = cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| BoardView::new(session, config, cx));
            cx.new(|cx| Root::new(view, window, cx))
        },
    );
    if let Err(err) = opened {
        error!("failed to open window: {err:#}");
        cx.quit();
    }
}
