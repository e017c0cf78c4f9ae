pub mod assets;
pub mod board_layout;
pub mod components;
pub mod config;
pub mod decorators;
pub mod sets;
pub mod theme;
pub mod views;

pub use assets::FileAssets;
pub use board_layout::BoardLayout;
pub use config::BoardConfig;
