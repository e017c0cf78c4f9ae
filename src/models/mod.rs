//! Application state: the board session and the reference delegate.

mod board_session;
mod demo_delegate;

pub use board_session::{BoardSession, PieceDrag};
pub use demo_delegate::DemoBoardDelegate;
