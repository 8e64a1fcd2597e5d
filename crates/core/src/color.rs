//! Color palette vocabulary for character attributes.
//!
//! Characters carry an optional primary color and an ordered list of
//! secondary colors, each a hue/shade pair from a fixed palette
//! (18 hues x 8 shades). Both enums derive `Deserialize`, so an invalid
//! hue or shade is rejected at the API boundary before it reaches the
//! database.

use serde::{Deserialize, Serialize};

/// One of the 18 supported hues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hue {
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
    Gray,
}

/// One of the 8 supported shades. Serialized as the numeric string used by
/// the web client ("200" through "900").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shade {
    #[serde(rename = "200")]
    S200,
    #[serde(rename = "300")]
    S300,
    #[serde(rename = "400")]
    S400,
    #[serde(rename = "500")]
    S500,
    #[serde(rename = "600")]
    S600,
    #[serde(rename = "700")]
    S700,
    #[serde(rename = "800")]
    S800,
    #[serde(rename = "900")]
    S900,
}

/// A single palette color: hue plus shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub hue: Hue,
    pub shade: Shade,
}
