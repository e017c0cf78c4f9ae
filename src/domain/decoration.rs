//! Square and board decorations (selections, highlights, arrows).

use crate::domain::Square;

/// The four decoration colors shared by highlights and arrows.
/// The reference input mapping is: no modifier = red, shift = green,
/// control = orange, option = blue.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DecorationColor {
    Red,
    Green,
    Orange,
    Blue,
}

impl DecorationColor {
    pub const ALL: [DecorationColor; 4] = [
        DecorationColor::Red,
        DecorationColor::Green,
        DecorationColor::Orange,
        DecorationColor::Blue,
    ];
}

/// Identifier handed out by a `BoardModel`; unique within that model only
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct DecorationId(pub(crate) u64);

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SquareDecorationKind {
    Selection,
    Highlight(DecorationColor),
}

/// A marker attached to exactly one square
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SquareDecoration {
    pub id: DecorationId,
    pub square: Square,
    pub kind: SquareDecorationKind,
}

impl SquareDecoration {
    pub fn is_selection(&self) -> bool {
        matches!(self.kind, SquareDecorationKind::Selection)
    }

    /// Highlight color, if this is a highlight
    pub fn highlight_color(&self) -> Option<DecorationColor> {
        match self.kind {
            SquareDecorationKind::Highlight(color) => Some(color),
            SquareDecorationKind::Selection => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Arrow {
    pub id: DecorationId,
    pub color: DecorationColor,
    pub start: Square,
    pub end: Square,
}

impl Arrow {
    pub fn connects(&self, start: Square, end: Square) -> bool {
        self.start == start && self.end == end
    }

    /// Whether start and end are a knight's move apart
    pub fn is_knight_move(&self) -> bool {
        is_knight_move(self.start, self.end)
    }
}

/// A marker spanning the board rather than a single square
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BoardDecoration {
    Arrow(Arrow),
}

impl BoardDecoration {
    pub fn id(&self) -> DecorationId {
        match self {
            BoardDecoration::Arrow(arrow) => arrow.id,
        }
    }

    pub fn as_arrow(&self) -> Option<&Arrow> {
        match self {
            BoardDecoration::Arrow(arrow) => Some(arrow),
        }
    }
}

fn is_knight_move(start: Square, end: Square) -> bool {
    let d_rank = (end.rank().index() - start.rank().index()).abs();
    let d_file = (end.file().index() - start.file().index()).abs();
    matches!((d_rank, d_file), (2, 1) | (1, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_move_detection() {
        assert!(is_knight_move(Square::B1, Square::C3));
        assert!(is_knight_move(Square::G1, Square::E2));
        assert!(is_knight_move(Square::E4, Square::D6));
        assert!(!is_knight_move(Square::E2, Square::E4));
        assert!(!is_knight_move(Square::A1, Square::H8));
        assert!(!is_knight_move(Square::B1, Square::D3));
    }

    #[test]
    fn test_highlight_color() {
        let selection = SquareDecoration {
            id: DecorationId(1),
            square: Square::E4,
            kind: SquareDecorationKind::Selection,
        };
        let highlight = SquareDecoration {
            id: DecorationId(2),
            square: Square::E4,
            kind: SquareDecorationKind::Highlight(DecorationColor::Blue),
        };
        assert!(selection.is_selection());
        assert_eq!(selection.highlight_color(), None);
        assert!(!highlight.is_selection());
        assert_eq!(highlight.highlight_color(), Some(DecorationColor::Blue));
    }
}
