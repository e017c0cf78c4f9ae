mod coordinates;
mod palette;
mod piece;
mod square;

pub use coordinates::{file_labels, rank_labels, render_file_labels, render_rank_labels};
pub use palette::{PaletteDrag, render_palette};
pub use piece::render_piece;
pub use square::render_square;
