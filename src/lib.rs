//! Interactive chessboard for gpui: a board model with pieces, selections,
//! highlights and arrows, pointer interaction routed through a replaceable
//! delegate, and a configurable renderer.

pub mod app;
pub mod domain;
pub mod models;
pub mod ui;
