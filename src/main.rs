use std::path::Path;

use chessboard_gpui::app;
use chessboard_gpui::ui::{BoardConfig, FileAssets};
use gpui::{App, Application};
use tracing_subscriber::EnvFilter;

const CONFIG_FILE: &str = "chessboard.json";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = BoardConfig::load_or_default(Path::new(CONFIG_FILE));

    Application::new()
        .with_assets(FileAssets::new())
        .run(move |cx: &mut App| app::run(cx, config));
}
