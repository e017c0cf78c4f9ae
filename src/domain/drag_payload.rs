//! Drag-and-drop payload for dropping new pieces onto the board.
//!
//! The payload carries only a piece template (kind and color); the square
//! comes from where the drop lands. On the wire it is a small JSON object
//! with two integer fields, e.g. `{"pieceType":2,"pieceColor":1}`.

use anyhow::{Context, anyhow};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{Piece, PieceColor, PieceKind, Square};

/// A piece without a square
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PieceTemplate {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl PieceTemplate {
    pub fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }

    /// A fresh piece of this kind placed on `square`
    pub fn place_on(self, square: Square) -> Piece {
        Piece::new(self.kind, self.color, square)
    }
}

/// Wire form of a `PieceTemplate`
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PieceData {
    /// 0 pawn, 1 rook, 2 knight, 3 bishop, 4 queen, 5 king
    pub piece_type: u8,
    /// 0 white, 1 black
    pub piece_color: u8,
}

impl PieceData {
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(PieceData)
    }
}

impl From<PieceTemplate> for PieceData {
    fn from(template: PieceTemplate) -> Self {
        Self {
            piece_type: template.kind as u8,
            piece_color: template.color as u8,
        }
    }
}

impl TryFrom<PieceData> for PieceTemplate {
    type Error = anyhow::Error;

    fn try_from(data: PieceData) -> anyhow::Result<Self> {
        let kind = PieceKind::ALL
            .get(usize::from(data.piece_type))
            .copied()
            .ok_or_else(|| anyhow!("unknown piece type {}", data.piece_type))?;
        let color = PieceColor::ALL
            .get(usize::from(data.piece_color))
            .copied()
            .ok_or_else(|| anyhow!("unknown piece color {}", data.piece_color))?;
        Ok(PieceTemplate { kind, color })
    }
}

pub fn encode(template: PieceTemplate) -> anyhow::Result<String> {
    serde_json::to_string(&PieceData::from(template)).context("failed to encode piece payload")
}

pub fn decode(payload: &str) -> anyhow::Result<PieceTemplate> {
    let data: PieceData =
        serde_json::from_str(payload).context("malformed piece payload")?;
    PieceTemplate::try_from(data)
}
