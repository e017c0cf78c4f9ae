//! Pieces placed on the board.
//! No GPUI dependencies - this is the domain layer.

use std::sync::atomic::{AtomicU64, Ordering};

use shakmaty::{Color as SColor, Role};

use crate::domain::Square;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Uppercase letter used in asset names, e.g. 'N' for knight
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl PieceColor {
    pub const ALL: [PieceColor; 2] = [PieceColor::White, PieceColor::Black];

    pub fn letter(self) -> char {
        match self {
            PieceColor::White => 'w',
            PieceColor::Black => 'b',
        }
    }
}

/// Stable identity of a piece, preserved across moves
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct PieceId(u64);

static NEXT_PIECE_ID: AtomicU64 = AtomicU64::new(1);

impl PieceId {
    fn next() -> Self {
        PieceId(NEXT_PIECE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A piece instance on the board
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: PieceColor,
    pub square: Square,
}

impl Piece {
    /// Create a new piece with a fresh id
    pub fn new(kind: PieceKind, color: PieceColor, square: Square) -> Self {
        Self {
            id: PieceId::next(),
            kind,
            color,
            square,
        }
    }

    /// Same piece (same id) standing on another square
    pub fn moved_to(self, square: Square) -> Self {
        Self { square, ..self }
    }
}

/// Convert shakmaty piece kind/color to our domain types
pub fn from_shakmaty(piece: shakmaty::Piece) -> (PieceKind, PieceColor) {
    let kind = match piece.role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    };
    let color = match piece.color {
        SColor::White => PieceColor::White,
        SColor::Black => PieceColor::Black,
    };
    (kind, color)
}

/// Convert our piece kind/color to a shakmaty piece
pub fn to_shakmaty(kind: PieceKind, color: PieceColor) -> shakmaty::Piece {
    let role = match kind {
        PieceKind::Pawn => Role::Pawn,
        PieceKind::Knight => Role::Knight,
        PieceKind::Bishop => Role::Bishop,
        PieceKind::Rook => Role::Rook,
        PieceKind::Queen => Role::Queen,
        PieceKind::King => Role::King,
    };
    let color = match color {
        PieceColor::White => SColor::White,
        PieceColor::Black => SColor::Black,
    };
    shakmaty::Piece { color, role }
}
