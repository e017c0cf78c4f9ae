//! Board session - the application layer tying the board model to pointer
//! input.
//!
//! The view measures where the board sits in the window and feeds raw
//! pointer events in window coordinates. The session turns them into
//! taps, piece drags and secondary-button gestures and hands those to the
//! delegate, which mutates the board.

use tracing::{debug, trace};

use crate::domain::drag_payload;
use crate::domain::{
    BoardDelegate, BoardGeometry, BoardModel, Modifiers, Piece, PointerGesture, PointerTracker,
    Point, Rect, Square,
};
use crate::models::DemoBoardDelegate;

/// A piece following the pointer
#[derive(Clone, Copy, Debug)]
pub struct PieceDrag {
    pub piece: Piece,
    /// Pointer position in board-local coordinates
    pub pointer: Point,
}

/// What was under the primary pointer when it went down
#[derive(Clone, Copy, Debug)]
struct PrimaryPress {
    square: Option<Square>,
    piece: Option<Piece>,
}

pub struct BoardSession<D: BoardDelegate = DemoBoardDelegate> {
    board: BoardModel,
    delegate: D,
    /// Board frame in window coordinates, as last measured
    bounds: Rect,
    flipped: bool,
    primary: PointerTracker,
    primary_press: Option<PrimaryPress>,
    secondary: PointerTracker,
    drag: Option<PieceDrag>,
}

impl<D: BoardDelegate> BoardSession<D> {
    pub fn new(board: BoardModel, delegate: D) -> Self {
        Self {
            board,
            delegate,
            bounds: Rect::new(0.0, 0.0, 0.0, 0.0),
            flipped: false,
            primary: PointerTracker::new(),
            primary_press: None,
            secondary: PointerTracker::new(),
            drag: None,
        }
    }

    pub fn board(&self) -> &BoardModel {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut BoardModel {
        &mut self.board
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Record where the board was laid out. The board is square; the
    /// shorter side wins.
    pub fn set_bounds(&mut self, bounds: Rect) {
        let size = bounds.width.min(bounds.height).max(0.0);
        self.bounds = Rect::new(bounds.origin.x, bounds.origin.y, size, size);
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn set_flipped(&mut self, flipped: bool) {
        self.flipped = flipped;
    }

    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry::new(self.bounds.width, self.flipped)
    }

    /// Piece currently following the pointer, if any
    pub fn drag(&self) -> Option<&PieceDrag> {
        self.drag.as_ref()
    }

    fn to_local(&self, position: Point) -> Point {
        Point::new(
            position.x - self.bounds.origin.x,
            position.y - self.bounds.origin.y,
        )
    }

    /// Square under a window position
    pub fn square_at(&self, position: Point) -> Option<Square> {
        self.geometry().square_for_position(self.to_local(position))
    }

    // Primary button

    pub fn primary_down(&mut self, position: Point) {
        let square = self.square_at(position);
        let piece = square.and_then(|sq| self.board.piece_on(sq).copied());
        trace!(?square, "primary down");
        self.primary.down(position);
        self.primary_press = Some(PrimaryPress { square, piece });
        self.drag = None;
    }

    pub fn primary_move(&mut self, position: Point) {
        let Some(PointerGesture::Dragging { .. }) = self.primary.moved(position) else {
            return;
        };
        let Some(press) = self.primary_press else {
            return;
        };
        let square = self.square_at(position);
        let local = self.to_local(position);

        if let Some(drag) = &mut self.drag {
            drag.pointer = local;
            let piece = drag.piece;
            self.delegate.piece_dragging(&mut self.board, &piece, square);
            return;
        }

        match press.piece {
            Some(piece) if self.delegate.can_drag_piece(&piece) => {
                debug!(from = %piece.square, "piece drag started");
                self.drag = Some(PieceDrag {
                    piece,
                    pointer: local,
                });
                self.delegate.piece_dragging(&mut self.board, &piece, square);
            }
            _ => {
                self.delegate
                    .on_dragging(&mut self.board, press.square, square);
            }
        }
    }

    pub fn primary_up(&mut self, position: Point) {
        let gesture = self.primary.up(position);
        let press = self.primary_press.take();
        let drag = self.drag.take();
        let square = self.square_at(position);

        match gesture {
            Some(PointerGesture::Click { .. }) => {
                if let Some(tapped) = press.and_then(|p| p.square) {
                    trace!(%tapped, "tap");
                    self.delegate.tapped(&mut self.board, tapped);
                }
            }
            Some(PointerGesture::Dragged { .. }) => match drag {
                Some(drag) => {
                    self.delegate
                        .piece_dragged(&mut self.board, &drag.piece, square);
                }
                None => {
                    let from = press.and_then(|p| p.square);
                    self.delegate.on_dragged(&mut self.board, from, square);
                }
            },
            _ => {}
        }
    }

    // Secondary button

    pub fn secondary_down(&mut self, position: Point, modifiers: Modifiers) {
        self.secondary.down(position);
        let square = self.square_at(position);
        self.delegate
            .on_secondary_down(&mut self.board, square, modifiers);
    }

    pub fn secondary_move(&mut self, position: Point, modifiers: Modifiers) {
        if let Some(PointerGesture::Dragging { start, current }) = self.secondary.moved(position) {
            let from = self.square_at(start);
            let to = self.square_at(current);
            self.delegate
                .on_secondary_dragging(&mut self.board, from, to, modifiers);
        }
    }

    pub fn secondary_up(&mut self, position: Point, modifiers: Modifiers) {
        let gesture = self.secondary.up(position);
        let square = self.square_at(position);
        self.delegate
            .on_secondary_up(&mut self.board, square, modifiers);

        match gesture {
            Some(PointerGesture::Click { at }) => {
                let square = self.square_at(at);
                self.delegate
                    .on_secondary_click(&mut self.board, square, modifiers);
            }
            Some(PointerGesture::Dragged { start, end }) => {
                let from = self.square_at(start);
                let to = self.square_at(end);
                self.delegate
                    .on_secondary_dragged(&mut self.board, from, to, modifiers);
            }
            _ => {}
        }
    }

    /// Drop a palette payload at a window position. Returns whether a piece
    /// was placed; drops outside the board are ignored.
    pub fn drop_payload(&mut self, payload: &str, position: Point) -> anyhow::Result<bool> {
        let template = drag_payload::decode(payload)?;
        let Some(square) = self.square_at(position) else {
            debug!("payload dropped outside the board");
            return Ok(false);
        };
        debug!(
            %square,
            kind = ?template.kind,
            color = ?template.color,
            "piece dropped from palette"
        );
        self.board.place(template.place_on(square));
        Ok(true)
    }
}
