//! Reference delegate: tap-to-move, drag-to-move, and right-button
//! highlights/arrows, with an optional decoration mode that turns primary
//! input into red highlights and arrows.

use tracing::debug;

use crate::domain::{BoardDelegate, BoardModel, DecorationColor, Modifiers, Piece, Square};

#[derive(Clone, Copy, Debug, Default)]
pub struct DemoBoardDelegate {
    /// Primary taps and drags draw decorations instead of moving pieces
    pub decoration_mode: bool,
}

impl DemoBoardDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_decoration_mode(&mut self) {
        self.decoration_mode = !self.decoration_mode;
        debug!(decoration_mode = self.decoration_mode, "decoration mode toggled");
    }
}

impl BoardDelegate for DemoBoardDelegate {
    fn can_drag_piece(&self, _piece: &Piece) -> bool {
        !self.decoration_mode
    }

    fn piece_dragging(&mut self, board: &mut BoardModel, piece: &Piece, square: Option<Square>) {
        board.remove_all_selections();
        board.select(piece.square);
        if let Some(square) = square {
            board.select(square);
        }
    }

    fn piece_dragged(&mut self, board: &mut BoardModel, piece: &Piece, square: Option<Square>) {
        board.remove_all_square_decorations();
        board.remove_all_board_decorations();
        match square {
            Some(square) => {
                debug!(from = %piece.square, to = %square, "piece dropped");
                board.move_piece(piece, square);
            }
            None => {
                debug!(from = %piece.square, "piece dropped off board");
                board.remove(piece);
            }
        }
    }

    fn tapped(&mut self, board: &mut BoardModel, square: Square) {
        if self.decoration_mode {
            board.toggle_highlight(DecorationColor::Red, square, true);
            return;
        }

        let Some(&first) = board.selected_squares().first() else {
            board.remove_all_selections();
            board.select(square);
            return;
        };

        if first == square {
            board.deselect(square);
        } else if let Some(piece) = board.piece_on(first).copied() {
            debug!(from = %first, to = %square, "tap move");
            board.move_piece(&piece, square);
            board.remove_all_board_decorations();
            board.remove_all_square_decorations();
        } else {
            board.remove_all_selections();
            board.select(square);
        }
    }

    fn on_dragged(&mut self, board: &mut BoardModel, from: Option<Square>, to: Option<Square>) {
        if !self.decoration_mode {
            return;
        }
        if let (Some(from), Some(to)) = (from, to) {
            if from != to {
                board.toggle_arrow(DecorationColor::Red, from, to, true);
            }
        }
    }

    fn on_secondary_click(
        &mut self,
        board: &mut BoardModel,
        square: Option<Square>,
        modifiers: Modifiers,
    ) {
        if let Some(square) = square {
            board.toggle_highlight(modifiers.decoration_color(), square, true);
        }
    }

    fn on_secondary_dragged(
        &mut self,
        board: &mut BoardModel,
        from: Option<Square>,
        to: Option<Square>,
        modifiers: Modifiers,
    ) {
        if let (Some(from), Some(to)) = (from, to) {
            if from != to {
                board.toggle_arrow(modifiers.decoration_color(), from, to, true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PieceColor, PieceKind};

    fn start_board() -> BoardModel {
        let mut board = BoardModel::new();
        board.setup_start_position();
        board
    }

    #[test]
    fn test_tap_then_tap_moves_piece() {
        let mut board = start_board();
        let mut delegate = DemoBoardDelegate::new();
        let pawn = *board.piece_on(Square::E2).unwrap();

        delegate.tapped(&mut board, Square::E2);
        assert_eq!(board.selected_squares(), vec![Square::E2]);

        delegate.tapped(&mut board, Square::E4);
        assert!(board.piece_on(Square::E2).is_none());
        let moved = board.piece_on(Square::E4).unwrap();
        assert_eq!(moved.id, pawn.id);
        assert!(board.selections().is_empty());
        assert!(board.square_decorations().is_empty());
    }

    #[test]
    fn test_tap_same_square_deselects() {
        let mut board = start_board();
        let mut delegate = DemoBoardDelegate::new();
        delegate.tapped(&mut board, Square::G1);
        delegate.tapped(&mut board, Square::G1);
        assert!(board.selected_squares().is_empty());
        assert!(board.piece_on(Square::G1).is_some());
    }

    #[test]
    fn test_tap_from_empty_selection_reselects() {
        let mut board = start_board();
        let mut delegate = DemoBoardDelegate::new();
        delegate.tapped(&mut board, Square::E4);
        assert_eq!(board.selected_squares(), vec![Square::E4]);

        delegate.tapped(&mut board, Square::D2);
        assert_eq!(board.selected_squares(), vec![Square::D2]);
        assert_eq!(board.pieces().len(), 32);
    }

    #[test]
    fn test_tap_move_clears_decorations() {
        let mut board = start_board();
        let mut delegate = DemoBoardDelegate::new();
        board.add_arrow(DecorationColor::Blue, Square::A2, Square::A4, true);
        board.add_highlight(DecorationColor::Green, Square::H7, false);

        delegate.tapped(&mut board, Square::B1);
        delegate.tapped(&mut board, Square::C3);
        assert!(board.arrows().is_empty());
        assert!(board.highlights().is_empty());
        assert_eq!(board.piece_on(Square::C3).unwrap().kind, PieceKind::Knight);
    }

    #[test]
    fn test_piece_drag_selects_origin_and_target() {
        let mut board = start_board();
        let mut delegate = DemoBoardDelegate::new();
        let knight = *board.piece_on(Square::G1).unwrap();

        delegate.piece_dragging(&mut board, &knight, Some(Square::F3));
        assert_eq!(board.selected_squares(), vec![Square::G1, Square::F3]);

        delegate.piece_dragging(&mut board, &knight, None);
        assert_eq!(board.selected_squares(), vec![Square::G1]);

        delegate.piece_dragged(&mut board, &knight, Some(Square::F3));
        assert!(board.selections().is_empty());
        assert_eq!(board.piece_on(Square::F3).unwrap().id, knight.id);
    }

    #[test]
    fn test_piece_dragged_off_board_removes_it() {
        let mut board = start_board();
        let mut delegate = DemoBoardDelegate::new();
        let queen = *board.piece_on(Square::D8).unwrap();
        delegate.piece_dragged(&mut board, &queen, None);
        assert!(board.piece_on(Square::D8).is_none());
        assert_eq!(board.pieces().len(), 31);
    }

    #[test]
    fn test_piece_dragged_captures() {
        let mut board = BoardModel::new();
        let rook = Piece::new(PieceKind::Rook, PieceColor::White, Square::A1);
        board.place(rook);
        board.place(Piece::new(PieceKind::Knight, PieceColor::Black, Square::A8));
        let mut delegate = DemoBoardDelegate::new();

        delegate.piece_dragged(&mut board, &rook, Some(Square::A8));
        assert_eq!(board.pieces().len(), 1);
        assert_eq!(board.piece_on(Square::A8).unwrap().id, rook.id);
    }

    #[test]
    fn test_secondary_click_toggles_highlight_by_modifier() {
        let mut board = start_board();
        let mut delegate = DemoBoardDelegate::new();
        let shift = Modifiers {
            shift: true,
            ..Modifiers::NONE
        };

        delegate.on_secondary_click(&mut board, Some(Square::E4), shift);
        assert_eq!(board.highlights_of_color(DecorationColor::Green).len(), 1);

        // a different color replaces the highlight on that square
        delegate.on_secondary_click(&mut board, Some(Square::E4), Modifiers::NONE);
        assert!(board.highlights_of_color(DecorationColor::Green).is_empty());
        assert_eq!(board.highlights_on(Square::E4).len(), 1);

        delegate.on_secondary_click(&mut board, Some(Square::D4), Modifiers::NONE);
        assert_eq!(board.highlights().len(), 2);

        delegate.on_secondary_click(&mut board, Some(Square::D4), Modifiers::NONE);
        delegate.on_secondary_click(&mut board, Some(Square::E4), Modifiers::NONE);
        assert!(board.highlights().is_empty());

        delegate.on_secondary_click(&mut board, None, Modifiers::NONE);
        assert!(board.highlights().is_empty());
    }

    #[test]
    fn test_secondary_drag_toggles_arrow() {
        let mut board = start_board();
        let mut delegate = DemoBoardDelegate::new();
        let control = Modifiers {
            control: true,
            ..Modifiers::NONE
        };

        delegate.on_secondary_dragged(&mut board, Some(Square::G1), Some(Square::F3), control);
        let arrows = board.arrows();
        assert_eq!(arrows.len(), 1);
        assert_eq!(arrows[0].color, DecorationColor::Orange);

        delegate.on_secondary_dragged(&mut board, Some(Square::G1), Some(Square::F3), control);
        assert!(board.arrows().is_empty());

        delegate.on_secondary_dragged(&mut board, Some(Square::G1), Some(Square::G1), control);
        delegate.on_secondary_dragged(&mut board, Some(Square::G1), None, control);
        assert!(board.arrows().is_empty());
    }

    #[test]
    fn test_decoration_mode() {
        let mut board = start_board();
        let mut delegate = DemoBoardDelegate::new();
        delegate.toggle_decoration_mode();

        let pawn = *board.piece_on(Square::E2).unwrap();
        assert!(!delegate.can_drag_piece(&pawn));

        delegate.tapped(&mut board, Square::E2);
        assert_eq!(board.highlights_of_color(DecorationColor::Red).len(), 1);
        assert!(board.selections().is_empty());

        delegate.on_dragged(&mut board, Some(Square::E2), Some(Square::E4));
        assert_eq!(board.arrows_between(Square::E2, Square::E4).len(), 1);

        delegate.toggle_decoration_mode();
        assert!(delegate.can_drag_piece(&pawn));
        delegate.on_dragged(&mut board, Some(Square::E2), Some(Square::E4));
        assert_eq!(board.arrows().len(), 1);
    }
}
