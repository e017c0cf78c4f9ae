//! Board configuration, loadable from a JSON file.
//!
//! Every field has a default, so a config file only needs the fields it
//! changes:
//!
//! ```json
//! { "flipped": true, "squareSet": "blue", "coordinatesBackground": "#202020" }
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, anyhow};
use gpui::{Rgba, rgb};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{info, warn};

use crate::ui::decorators::{
    BoardDecorator, DefaultSquareDecorator, HiddenSquareDecorator, SquareDecorator,
    StraightAndKnightArrows,
};
use crate::ui::sets::{
    BlueSquareSet, CBurnettPieceSet, GreenSquareSet, MeridaPieceSet, PieceSet, SquareSet,
};

/// `#rrggbb` color
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HexColor(pub u32);

impl HexColor {
    pub fn to_rgba(self) -> Rgba {
        rgb(self.0)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl std::str::FromStr for HexColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| anyhow!("color {s:?} must start with '#'"))?;
        if digits.len() != 6 {
            return Err(anyhow!("color {s:?} must have six hex digits"));
        }
        let value = u32::from_str_radix(digits, 16)
            .with_context(|| format!("color {s:?} is not valid hex"))?;
        Ok(HexColor(value))
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum SquareSetKind {
    #[default]
    Green,
    Blue,
}

impl SquareSetKind {
    pub fn square_set(self) -> &'static dyn SquareSet {
        match self {
            SquareSetKind::Green => &GreenSquareSet,
            SquareSetKind::Blue => &BlueSquareSet,
        }
    }

    pub fn next(self) -> Self {
        match self {
            SquareSetKind::Green => SquareSetKind::Blue,
            SquareSetKind::Blue => SquareSetKind::Green,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum PieceSetKind {
    #[default]
    Cburnett,
    Merida,
}

impl PieceSetKind {
    pub fn piece_set(self) -> &'static dyn PieceSet {
        match self {
            PieceSetKind::Cburnett => &CBurnettPieceSet,
            PieceSetKind::Merida => &MeridaPieceSet,
        }
    }

    pub fn next(self) -> Self {
        match self {
            PieceSetKind::Cburnett => PieceSetKind::Merida,
            PieceSetKind::Merida => PieceSetKind::Cburnett,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum SquareDecoratorKind {
    /// Selection rings and translucent highlights
    #[default]
    Default,
    /// Square decorations are kept in the model but not drawn
    Hidden,
}

impl SquareDecoratorKind {
    pub fn decorator(self) -> &'static dyn SquareDecorator {
        match self {
            SquareDecoratorKind::Default => &DefaultSquareDecorator,
            SquareDecoratorKind::Hidden => &HiddenSquareDecorator,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum BoardDecoratorKind {
    #[default]
    Arrows,
}

impl BoardDecoratorKind {
    pub fn decorator(self) -> &'static dyn BoardDecorator {
        match self {
            BoardDecoratorKind::Arrows => &StraightAndKnightArrows,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Show the board from black's side
    pub flipped: bool,
    pub show_coordinates: bool,
    /// Width of the rank label column and height of the file label row
    pub coordinates_size: f32,
    pub coordinates_font_size: f32,
    #[schemars(with = "String")]
    pub coordinates_background: HexColor,
    #[schemars(with = "String")]
    pub coordinates_foreground: HexColor,
    pub square_set: SquareSetKind,
    pub piece_set: PieceSetKind,
    pub square_decorator: SquareDecoratorKind,
    pub board_decorator: BoardDecoratorKind,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            flipped: false,
            show_coordinates: true,
            coordinates_size: 20.0,
            coordinates_font_size: 16.0,
            coordinates_background: HexColor(0x000000),
            coordinates_foreground: HexColor(0xffffff),
            square_set: SquareSetKind::default(),
            piece_set: PieceSetKind::default(),
            square_decorator: SquareDecoratorKind::default(),
            board_decorator: BoardDecoratorKind::default(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: BoardConfig = serde_json::from_str(json).context("invalid board config")?;
        if config.coordinates_size < 0.0 {
            return Err(anyhow!(
                "coordinatesSize must be non-negative, got {}",
                config.coordinates_size
            ));
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("failed to load {}", path.display()))
    }

    /// Load `path` if it exists, falling back to defaults on any problem
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                info!(path = %path.display(), "board config loaded");
                config
            }
            Err(err) => {
                warn!("{err:#}; using default board config");
                Self::default()
            }
        }
    }

    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(BoardConfig)
    }

    /// Space taken by the coordinate labels, zero when hidden
    pub fn coordinates_inset(&self) -> f32 {
        if self.show_coordinates {
            self.coordinates_size
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(BoardConfig::from_json("{}").unwrap(), BoardConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = BoardConfig::from_json(
            r##"{"flipped": true, "squareSet": "blue", "pieceSet": "merida",
                 "coordinatesForeground": "#ffcc00"}"##,
        )
        .unwrap();
        assert!(config.flipped);
        assert_eq!(config.square_set, SquareSetKind::Blue);
        assert_eq!(config.piece_set, PieceSetKind::Merida);
        assert_eq!(config.coordinates_foreground, HexColor(0xffcc00));
        assert!(config.show_coordinates);
        assert_eq!(config.coordinates_size, 20.0);
    }

    #[test]
    fn test_invalid_config() {
        assert!(BoardConfig::from_json(r#"{"squareSet": "purple"}"#).is_err());
        assert!(BoardConfig::from_json(r#"{"coordinatesBackground": "000000"}"#).is_err());
        assert!(BoardConfig::from_json(r##"{"coordinatesBackground": "#12345"}"##).is_err());
        assert!(BoardConfig::from_json(r#"{"coordinatesSize": -1}"#).is_err());
        assert!(BoardConfig::from_json("[").is_err());
    }

    #[test]
    fn test_serializes_colors_as_hex() {
        let json = serde_json::to_string(&BoardConfig::default()).unwrap();
        assert!(json.contains(r##""coordinatesForeground":"#ffffff""##));
        assert!(json.contains(r#""squareSet":"green""#));
        assert_eq!(BoardConfig::from_json(&json).unwrap(), BoardConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir()
            .join(format!("chessboard-config-{}.json", std::process::id()));
        fs::write(&path, r#"{"showCoordinates": false}"#).unwrap();
        let config = BoardConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(!config.show_coordinates);
        assert_eq!(config.coordinates_inset(), 0.0);
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("chessboard-config-does-not-exist.json");
        assert!(BoardConfig::load(&path).is_err());
        assert_eq!(BoardConfig::load_or_default(&path), BoardConfig::default());
    }

    #[test]
    fn test_schema_names_fields() {
        let schema = BoardConfig::json_schema();
        let properties = schema.get("properties").unwrap();
        assert!(properties.get("squareSet").is_some());
        assert!(properties.get("coordinatesBackground").is_some());
    }

    #[test]
    fn test_kinds_cycle() {
        assert_eq!(SquareSetKind::Green.next().next(), SquareSetKind::Green);
        assert_eq!(PieceSetKind::Cburnett.next(), PieceSetKind::Merida);
    }
}
