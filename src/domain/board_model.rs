//! Board state model: pieces, square decorations and board decorations.
//!
//! This is a pure domain module with no GPUI dependencies. All three
//! collections are flat ordered lists and every query is a linear scan;
//! a board never holds more than a few dozen entries.
//!
//! Mutations never fail. An operation whose precondition already holds
//! (selecting a selected square, moving a piece that is not on the board)
//! leaves the collections unchanged.

use std::collections::HashSet;

use anyhow::Context;
use tracing::trace;

use crate::domain::piece::{from_shakmaty, to_shakmaty};
use crate::domain::{
    Arrow, BoardDecoration, DecorationColor, DecorationId, Piece, Square, SquareDecoration,
    SquareDecorationKind,
};

/// Which collection a mutation touched
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BoardChange {
    Pieces,
    SquareDecorations,
    BoardDecorations,
}

/// Handle returned by `BoardModel::subscribe`
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(BoardChange)>;

pub struct BoardModel {
    pieces: Vec<Piece>,
    square_decorations: Vec<SquareDecoration>,
    board_decorations: Vec<BoardDecoration>,
    next_decoration_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl BoardModel {
    pub fn new() -> Self {
        Self {
            pieces: Vec::new(),
            square_decorations: Vec::new(),
            board_decorations: Vec::new(),
            next_decoration_id: 1,
            listeners: Vec::new(),
            next_listener_id: 1,
        }
    }

    /// Register a callback invoked after every mutation
    pub fn subscribe(&mut self, listener: impl FnMut(BoardChange) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    fn changed(&mut self, change: BoardChange) {
        for (_, listener) in &mut self.listeners {
            listener(change);
        }
    }

    fn next_id(&mut self) -> DecorationId {
        let id = DecorationId(self.next_decoration_id);
        self.next_decoration_id += 1;
        id
    }

    fn retain_square_decorations(&mut self, keep: impl FnMut(&SquareDecoration) -> bool) {
        self.square_decorations.retain(keep);
        self.changed(BoardChange::SquareDecorations);
    }

    fn retain_arrows(&mut self, mut keep: impl FnMut(&Arrow) -> bool) {
        self.board_decorations.retain(|decoration| match decoration {
            BoardDecoration::Arrow(arrow) => keep(arrow),
        });
        self.changed(BoardChange::BoardDecorations);
    }

    // Pieces

    /// Replace the board with the standard starting position
    pub fn setup_start_position(&mut self) {
        self.pieces = shakmaty::Board::new()
            .iter()
            .map(|(square, piece)| {
                let (kind, color) = from_shakmaty(piece);
                Piece::new(kind, color, square.into())
            })
            .collect();
        trace!(pieces = self.pieces.len(), "start position set up");
        self.changed(BoardChange::Pieces);
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Replace the piece collection
    pub fn set_pieces(&mut self, pieces: Vec<Piece>) {
        self.pieces = pieces;
        self.changed(BoardChange::Pieces);
    }

    pub fn piece_on(&self, square: Square) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.square == square)
    }

    pub fn remove_all_pieces(&mut self) {
        self.pieces.clear();
        self.changed(BoardChange::Pieces);
    }

    /// Place a piece, evicting whatever stands on its square
    pub fn place(&mut self, piece: Piece) {
        trace!(square = %piece.square, kind = ?piece.kind, "place");
        self.pieces.retain(|p| p.square != piece.square);
        self.pieces.push(piece);
        self.changed(BoardChange::Pieces);
    }

    pub fn remove_pieces(&mut self, square: Square) {
        self.pieces.retain(|p| p.square != square);
        self.changed(BoardChange::Pieces);
    }

    pub fn remove(&mut self, piece: &Piece) {
        self.pieces.retain(|p| p.id != piece.id);
        self.changed(BoardChange::Pieces);
    }

    /// Move a piece (matched by id) to `to`, capturing anything standing there.
    /// The destination is cleared even when the piece itself is not on the board.
    pub fn move_piece(&mut self, piece: &Piece, to: Square) {
        trace!(from = %piece.square, %to, "move");
        let moving = self
            .pieces
            .iter()
            .find(|p| p.id == piece.id)
            .copied()
            .map(|p| p.moved_to(to));
        self.pieces.retain(|p| p.square != to && p.id != piece.id);
        if let Some(moved) = moving {
            self.pieces.push(moved);
        }
        self.changed(BoardChange::Pieces);
    }

    /// Board part of a FEN string, e.g. "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
    pub fn board_fen(&self) -> String {
        let mut board = shakmaty::Board::empty();
        for p in &self.pieces {
            board.set_piece_at(p.square.into(), to_shakmaty(p.kind, p.color));
        }
        board.to_string()
    }

    /// Replace all pieces from the board part of a FEN string
    pub fn set_board_fen(&mut self, fen: &str) -> anyhow::Result<()> {
        let board: shakmaty::Board = fen
            .parse()
            .with_context(|| format!("invalid board fen {fen:?}"))?;
        let pieces = board
            .iter()
            .map(|(square, piece)| {
                let (kind, color) = from_shakmaty(piece);
                Piece::new(kind, color, square.into())
            })
            .collect();
        self.set_pieces(pieces);
        Ok(())
    }

    // Square decorations

    pub fn square_decorations(&self) -> &[SquareDecoration] {
        &self.square_decorations
    }

    /// Replace the square decorations
    pub fn set_square_decorations(&mut self, decorations: Vec<SquareDecoration>) {
        self.square_decorations = decorations;
        self.changed(BoardChange::SquareDecorations);
    }

    pub fn remove_all_square_decorations(&mut self) {
        self.square_decorations.clear();
        self.changed(BoardChange::SquareDecorations);
    }

    pub fn remove_all_decorations_on(&mut self, square: Square) {
        self.retain_square_decorations(|d| d.square != square);
    }

    /// Add a decoration, optionally clearing every other decoration on that square first
    pub fn add_square_decoration(
        &mut self,
        kind: SquareDecorationKind,
        square: Square,
        remove_others: bool,
    ) -> DecorationId {
        if remove_others {
            self.square_decorations.retain(|d| d.square != square);
        }
        let id = self.next_id();
        self.square_decorations
            .push(SquareDecoration { id, square, kind });
        self.changed(BoardChange::SquareDecorations);
        id
    }

    // Selections

    pub fn selections(&self) -> Vec<SquareDecoration> {
        self.square_decorations
            .iter()
            .filter(|d| d.is_selection())
            .copied()
            .collect()
    }

    /// Selected squares, each reported once
    pub fn selected_squares(&self) -> Vec<Square> {
        let mut seen = HashSet::new();
        self.square_decorations
            .iter()
            .filter(|d| d.is_selection())
            .map(|d| d.square)
            .filter(|square| seen.insert(*square))
            .collect()
    }

    pub fn is_selected(&self, square: Square) -> bool {
        self.square_decorations
            .iter()
            .any(|d| d.is_selection() && d.square == square)
    }

    pub fn remove_all_selections(&mut self) {
        self.retain_square_decorations(|d| !d.is_selection());
    }

    pub fn select(&mut self, square: Square) {
        if self.is_selected(square) {
            return;
        }
        trace!(%square, "select");
        self.add_square_decoration(SquareDecorationKind::Selection, square, false);
    }

    pub fn deselect(&mut self, square: Square) {
        if !self.is_selected(square) {
            return;
        }
        trace!(%square, "deselect");
        self.retain_square_decorations(|d| !(d.is_selection() && d.square == square));
    }

    pub fn toggle_selection(&mut self, square: Square) {
        if self.is_selected(square) {
            self.deselect(square);
        } else {
            self.select(square);
        }
    }

    // Highlights

    pub fn highlights(&self) -> Vec<SquareDecoration> {
        self.square_decorations
            .iter()
            .filter(|d| d.highlight_color().is_some())
            .copied()
            .collect()
    }

    pub fn highlights_of_color(&self, color: DecorationColor) -> Vec<SquareDecoration> {
        self.square_decorations
            .iter()
            .filter(|d| d.highlight_color() == Some(color))
            .copied()
            .collect()
    }

    pub fn highlights_on(&self, square: Square) -> Vec<SquareDecoration> {
        self.square_decorations
            .iter()
            .filter(|d| d.square == square && d.highlight_color().is_some())
            .copied()
            .collect()
    }

    pub fn remove_all_highlights(&mut self) {
        self.retain_square_decorations(|d| d.highlight_color().is_none());
    }

    pub fn remove_all_highlights_of_color(&mut self, color: DecorationColor) {
        self.retain_square_decorations(|d| d.highlight_color() != Some(color));
    }

    pub fn remove_highlights_on(&mut self, square: Square) {
        self.retain_square_decorations(|d| d.square != square || d.highlight_color().is_none());
    }

    pub fn remove_highlights_on_of_color(&mut self, square: Square, color: DecorationColor) {
        self.retain_square_decorations(|d| {
            d.square != square || d.highlight_color() != Some(color)
        });
    }

    /// Highlight a square. With `remove_others`, highlights of any color
    /// already on the square are removed first; selections are kept.
    pub fn add_highlight(&mut self, color: DecorationColor, square: Square, remove_others: bool) {
        trace!(%square, ?color, remove_others, "add highlight");
        if remove_others {
            self.square_decorations
                .retain(|d| d.square != square || d.highlight_color().is_none());
        }
        let id = self.next_id();
        self.square_decorations.push(SquareDecoration {
            id,
            square,
            kind: SquareDecorationKind::Highlight(color),
        });
        self.changed(BoardChange::SquareDecorations);
    }

    /// Remove the highlight of `color` on `square` if there is one, otherwise add it
    pub fn toggle_highlight(
        &mut self,
        color: DecorationColor,
        square: Square,
        remove_others: bool,
    ) {
        let present = self
            .square_decorations
            .iter()
            .any(|d| d.square == square && d.highlight_color() == Some(color));
        if present {
            self.remove_highlights_on_of_color(square, color);
        } else {
            self.add_highlight(color, square, remove_others);
        }
    }

    // Board decorations

    pub fn board_decorations(&self) -> &[BoardDecoration] {
        &self.board_decorations
    }

    /// Replace the board decorations
    pub fn set_board_decorations(&mut self, decorations: Vec<BoardDecoration>) {
        self.board_decorations = decorations;
        self.changed(BoardChange::BoardDecorations);
    }

    pub fn remove_all_board_decorations(&mut self) {
        self.board_decorations.clear();
        self.changed(BoardChange::BoardDecorations);
    }

    // Arrows

    pub fn arrows(&self) -> Vec<Arrow> {
        self.board_decorations
            .iter()
            .filter_map(BoardDecoration::as_arrow)
            .copied()
            .collect()
    }

    pub fn arrows_from(&self, start: Square) -> Vec<Arrow> {
        self.arrows()
            .into_iter()
            .filter(|a| a.start == start)
            .collect()
    }

    pub fn arrows_to(&self, end: Square) -> Vec<Arrow> {
        self.arrows().into_iter().filter(|a| a.end == end).collect()
    }

    pub fn arrows_between(&self, start: Square, end: Square) -> Vec<Arrow> {
        self.arrows()
            .into_iter()
            .filter(|a| a.connects(start, end))
            .collect()
    }

    /// Add an arrow. With `remove_others`, every arrow between the same
    /// start and end is removed first.
    pub fn add_arrow(
        &mut self,
        color: DecorationColor,
        start: Square,
        end: Square,
        remove_others: bool,
    ) {
        trace!(%start, %end, ?color, remove_others, "add arrow");
        if remove_others {
            self.board_decorations.retain(|d| match d {
                BoardDecoration::Arrow(arrow) => !arrow.connects(start, end),
            });
        }
        let id = self.next_id();
        self.board_decorations.push(BoardDecoration::Arrow(Arrow {
            id,
            color,
            start,
            end,
        }));
        self.changed(BoardChange::BoardDecorations);
    }

    /// Remove the arrow of `color` between the squares if there is one, otherwise add it
    pub fn toggle_arrow(
        &mut self,
        color: DecorationColor,
        start: Square,
        end: Square,
        remove_others: bool,
    ) {
        if self
            .arrows_between(start, end)
            .iter()
            .any(|a| a.color == color)
        {
            self.remove_arrows_between_of_color(color, start, end);
        } else {
            self.add_arrow(color, start, end, remove_others);
        }
    }

    pub fn remove_arrows(&mut self) {
        self.retain_arrows(|_| false);
    }

    pub fn remove_arrows_between(&mut self, start: Square, end: Square) {
        self.retain_arrows(|a| !a.connects(start, end));
    }

    pub fn remove_arrows_between_of_color(
        &mut self,
        color: DecorationColor,
        start: Square,
        end: Square,
    ) {
        self.retain_arrows(|a| a.color != color || !a.connects(start, end));
    }
}

impl Default for BoardModel {
    fn default() -> Self {
        Self::new()
    }
}
