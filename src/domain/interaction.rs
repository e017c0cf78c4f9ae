//! Interaction contract between the UI shell and the board.
//!
//! The shell feeds raw pointer events into a `PointerTracker`, which turns
//! them into clicks and drags. Those are reported to a `BoardDelegate`,
//! which decides how the board model changes.

use crate::domain::{BoardModel, DecorationColor, Piece, Point, Square};

/// Pointer travel (Chebyshev distance) before a press becomes a drag
pub const DRAG_THRESHOLD: f32 = 10.0;

/// Keyboard modifiers held during a secondary-button gesture
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub option: bool,
    pub command: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        control: false,
        option: false,
        command: false,
    };

    /// Decoration color picked by the held modifier; shift wins over
    /// control, control over option
    pub fn decoration_color(self) -> DecorationColor {
        if self.shift {
            DecorationColor::Green
        } else if self.control {
            DecorationColor::Orange
        } else if self.option {
            DecorationColor::Blue
        } else {
            DecorationColor::Red
        }
    }
}

/// Receives interaction events. Every method has a no-op default, so a
/// delegate only implements what it cares about.
#[allow(unused_variables)]
pub trait BoardDelegate {
    /// Whether a drag starting on `piece` moves the piece. When false the
    /// drag is reported through `on_dragging`/`on_dragged` instead.
    fn can_drag_piece(&self, piece: &Piece) -> bool {
        true
    }

    /// A piece is being dragged; `square` is the square under the pointer
    fn piece_dragging(&mut self, board: &mut BoardModel, piece: &Piece, square: Option<Square>) {}

    /// A piece drag ended; `square` is None when dropped off the board
    fn piece_dragged(&mut self, board: &mut BoardModel, piece: &Piece, square: Option<Square>) {}

    fn tapped(&mut self, board: &mut BoardModel, square: Square) {}

    /// A primary drag that does not carry a piece
    fn on_dragging(&mut self, board: &mut BoardModel, from: Option<Square>, to: Option<Square>) {}

    fn on_dragged(&mut self, board: &mut BoardModel, from: Option<Square>, to: Option<Square>) {}

    fn on_secondary_down(
        &mut self,
        board: &mut BoardModel,
        square: Option<Square>,
        modifiers: Modifiers,
    ) {
    }

    fn on_secondary_up(
        &mut self,
        board: &mut BoardModel,
        square: Option<Square>,
        modifiers: Modifiers,
    ) {
    }

    fn on_secondary_click(
        &mut self,
        board: &mut BoardModel,
        square: Option<Square>,
        modifiers: Modifiers,
    ) {
    }

    fn on_secondary_dragging(
        &mut self,
        board: &mut BoardModel,
        from: Option<Square>,
        to: Option<Square>,
        modifiers: Modifiers,
    ) {
    }

    fn on_secondary_dragged(
        &mut self,
        board: &mut BoardModel,
        from: Option<Square>,
        to: Option<Square>,
        modifiers: Modifiers,
    ) {
    }
}

/// Delegate that ignores everything
pub struct NoopDelegate;

impl BoardDelegate for NoopDelegate {}

#[derive(Clone, Copy, PartialEq, Debug)]
enum PointerState {
    Idle,
    Down { start: Point },
    Dragging { start: Point },
}

/// Gesture recognized from a press/move/release sequence
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PointerGesture {
    Dragging { start: Point, current: Point },
    Click { at: Point },
    Dragged { start: Point, end: Point },
}

/// Tells clicks from drags for one pointer button
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PointerTracker {
    state: PointerState,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            state: PointerState::Idle,
        }
    }

    pub fn is_pressed(&self) -> bool {
        !matches!(self.state, PointerState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, PointerState::Dragging { .. })
    }

    pub fn down(&mut self, at: Point) {
        self.state = PointerState::Down { start: at };
    }

    /// Pointer moved while pressed. Reports `Dragging` once the pointer has
    /// left the threshold box around the press point, and on every move after.
    pub fn moved(&mut self, at: Point) -> Option<PointerGesture> {
        match self.state {
            PointerState::Idle => None,
            PointerState::Down { start } => {
                if start.chebyshev_distance(at) < DRAG_THRESHOLD {
                    return None;
                }
                self.state = PointerState::Dragging { start };
                Some(PointerGesture::Dragging { start, current: at })
            }
            PointerState::Dragging { start } => {
                Some(PointerGesture::Dragging { start, current: at })
            }
        }
    }

    pub fn up(&mut self, at: Point) -> Option<PointerGesture> {
        let gesture = match self.state {
            PointerState::Idle => None,
            PointerState::Down { .. } => Some(PointerGesture::Click { at }),
            PointerState::Dragging { start } => Some(PointerGesture::Dragged { start, end: at }),
        };
        self.state = PointerState::Idle;
        gesture
    }

    /// Drop any gesture in progress
    pub fn cancel(&mut self) {
        self.state = PointerState::Idle;
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_colors() {
        assert_eq!(Modifiers::NONE.decoration_color(), DecorationColor::Red);
        let shift = Modifiers {
            shift: true,
            ..Modifiers::NONE
        };
        assert_eq!(shift.decoration_color(), DecorationColor::Green);
        let control = Modifiers {
            control: true,
            ..Modifiers::NONE
        };
        assert_eq!(control.decoration_color(), DecorationColor::Orange);
        let option = Modifiers {
            option: true,
            ..Modifiers::NONE
        };
        assert_eq!(option.decoration_color(), DecorationColor::Blue);
        let command = Modifiers {
            command: true,
            ..Modifiers::NONE
        };
        assert_eq!(command.decoration_color(), DecorationColor::Red);
        let shift_and_option = Modifiers {
            shift: true,
            option: true,
            ..Modifiers::NONE
        };
        assert_eq!(shift_and_option.decoration_color(), DecorationColor::Green);
    }

    #[test]
    fn test_click_without_movement() {
        let mut tracker = PointerTracker::new();
        tracker.down(Point::new(5.0, 5.0));
        assert!(tracker.is_pressed());
        assert_eq!(tracker.moved(Point::new(9.0, 1.0)), None);
        assert_eq!(
            tracker.up(Point::new(9.0, 1.0)),
            Some(PointerGesture::Click {
                at: Point::new(9.0, 1.0)
            })
        );
        assert!(!tracker.is_pressed());
    }

    #[test]
    fn test_drag_past_threshold() {
        let mut tracker = PointerTracker::new();
        let start = Point::new(0.0, 0.0);
        tracker.down(start);
        assert_eq!(
            tracker.moved(Point::new(0.0, 10.0)),
            Some(PointerGesture::Dragging {
                start,
                current: Point::new(0.0, 10.0)
            })
        );
        assert!(tracker.is_dragging());
        // keeps reporting even when back inside the threshold box
        assert_eq!(
            tracker.moved(Point::new(1.0, 1.0)),
            Some(PointerGesture::Dragging {
                start,
                current: Point::new(1.0, 1.0)
            })
        );
        assert_eq!(
            tracker.up(Point::new(1.0, 1.0)),
            Some(PointerGesture::Dragged {
                start,
                end: Point::new(1.0, 1.0)
            })
        );
    }

    #[test]
    fn test_idle_tracker_ignores_events() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.moved(Point::new(50.0, 50.0)), None);
        assert_eq!(tracker.up(Point::new(50.0, 50.0)), None);

        tracker.down(Point::new(1.0, 1.0));
        tracker.cancel();
        assert_eq!(tracker.up(Point::new(1.0, 1.0)), None);
        assert!(!tracker.is_pressed());
    }
}
