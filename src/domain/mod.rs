//! Pure board domain: squares, pieces, decorations, the board model,
//! geometry and arrow shapes.
//! No GPUI dependencies - this is the domain layer.

pub mod arrow_path;
pub mod board_model;
pub mod decoration;
pub mod drag_payload;
pub mod geometry;
pub mod interaction;
pub mod piece;
pub mod square;

pub use arrow_path::{ArrowDimensions, ArrowOutline, arrow_outline};
pub use board_model::{BoardChange, BoardModel, ListenerId};
pub use decoration::{
    Arrow, BoardDecoration, DecorationColor, DecorationId, SquareDecoration, SquareDecorationKind,
};
pub use drag_payload::{PieceData, PieceTemplate};
pub use geometry::{BoardGeometry, Point, Rect};
pub use interaction::{BoardDelegate, Modifiers, NoopDelegate, PointerGesture, PointerTracker};
pub use piece::{Piece, PieceColor, PieceId, PieceKind};
pub use square::{File, Rank, Square};
