//! Board geometry - maps between board-local pixel positions and squares.
//!
//! The origin (0, 0) is always the top-left corner of the rendered board.
//! Unflipped, a1 sits bottom-left; flipped, the board is rotated 180° and
//! h8 sits bottom-left.

use crate::domain::Square;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// max(|dx|, |dy|)
    pub fn chebyshev_distance(self, other: Point) -> f32 {
        (other.x - self.x).abs().max((other.y - self.y).abs())
    }

    pub fn offset(self, dx: f32, dy: f32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Rect {
    pub origin: Point,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        self.origin.offset(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BoardGeometry {
    /// Edge length of the square board area
    pub size: f32,
    pub flipped: bool,
}

impl BoardGeometry {
    pub fn new(size: f32, flipped: bool) -> Self {
        Self { size, flipped }
    }

    pub fn cell_size(&self) -> f32 {
        self.size / 8.0
    }

    /// On-screen frame of a square in board-local coordinates
    pub fn cell_frame(&self, square: Square) -> Rect {
        let cell = self.cell_size();
        let file = square.file().index() as f32;
        let rank = square.rank().index() as f32;

        let (x, y) = if self.flipped {
            ((7.0 - file) * cell, rank * cell)
        } else {
            (file * cell, (7.0 - rank) * cell)
        };
        Rect::new(x, y, cell, cell)
    }

    /// Square under a board-local position, or None when outside the board
    pub fn square_for_position(&self, position: Point) -> Option<Square> {
        let cell = self.cell_size();
        if cell <= 0.0 || !position.x.is_finite() || !position.y.is_finite() {
            return None;
        }
        // floor keeps positions left of or above the board at negative indices
        let ix = (position.x / cell).floor();
        let iy = (position.y / cell).floor();
        if !(0.0..8.0).contains(&ix) || !(0.0..8.0).contains(&iy) {
            return None;
        }
        let (ix, iy) = (ix as i32, iy as i32);

        if self.flipped {
            Square::from_xy(7 - ix, iy)
        } else {
            Square::from_xy(ix, 7 - iy)
        }
    }

    /// Center of a square's frame
    pub fn center(&self, square: Square) -> Point {
        self.cell_frame(square).center()
    }
}
