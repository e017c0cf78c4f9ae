//! Square sets (board colors) and piece sets (piece artwork).

use gpui::{Rgba, SharedString, rgb};

use crate::domain::{PieceColor, PieceKind, Square};
use crate::ui::theme::{BLUE_DARK, BLUE_LIGHT, GREEN_DARK, GREEN_LIGHT};

pub trait SquareSet {
    fn light(&self) -> Rgba;
    fn dark(&self) -> Rgba;

    /// Fill for a square; a1 is dark
    fn color(&self, square: Square) -> Rgba {
        if is_light(square) {
            self.light()
        } else {
            self.dark()
        }
    }
}

pub fn is_light(square: Square) -> bool {
    (square.file().index() + square.rank().index()) % 2 == 1
}

pub struct GreenSquareSet;

impl SquareSet for GreenSquareSet {
    fn light(&self) -> Rgba {
        rgb(GREEN_LIGHT)
    }

    fn dark(&self) -> Rgba {
        rgb(GREEN_DARK)
    }
}

pub struct BlueSquareSet;

impl SquareSet for BlueSquareSet {
    fn light(&self) -> Rgba {
        rgb(BLUE_LIGHT)
    }

    fn dark(&self) -> Rgba {
        rgb(BLUE_DARK)
    }
}

pub trait PieceSet {
    /// Directory under `assets/pieces/`
    fn name(&self) -> &'static str;

    /// Asset path of a piece image, e.g. `assets/pieces/merida/bN.svg`
    fn asset_path(&self, kind: PieceKind, color: PieceColor) -> SharedString {
        format!(
            "assets/pieces/{}/{}{}.svg",
            self.name(),
            color.letter(),
            kind.letter()
        )
        .into()
    }
}

pub struct CBurnettPieceSet;

impl PieceSet for CBurnettPieceSet {
    fn name(&self) -> &'static str {
        "cburnett"
    }
}

pub struct MeridaPieceSet;

impl PieceSet for MeridaPieceSet {
    fn name(&self) -> &'static str {
        "merida"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_shading() {
        assert!(!is_light(Square::A1));
        assert!(is_light(Square::H1));
        assert!(is_light(Square::A8));
        assert!(!is_light(Square::H8));
        assert!(is_light(Square::E4));
        assert_eq!(GreenSquareSet.color(Square::A1), rgb(GREEN_DARK));
        assert_eq!(BlueSquareSet.color(Square::B1), rgb(BLUE_LIGHT));
    }

    #[test]
    fn test_asset_paths() {
        assert_eq!(
            CBurnettPieceSet.asset_path(PieceKind::Pawn, PieceColor::White),
            SharedString::from("assets/pieces/cburnett/wP.svg")
        );
        assert_eq!(
            MeridaPieceSet.asset_path(PieceKind::Knight, PieceColor::Black),
            SharedString::from("assets/pieces/merida/bN.svg")
        );
    }
}
