//! Fill and colour settings for blobs

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a blob's outline is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillType {
    /// Linear gradient from `color1` to `color2`
    #[default]
    Gradient,
    /// Flat `color1`
    Solid,
    /// Unfilled, stroked with `color1`
    Outline,
}

impl FillType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gradient => "gradient",
            Self::Solid => "solid",
            Self::Outline => "outline",
        }
    }
}

impl FromStr for FillType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "gradient" => Ok(Self::Gradient),
            "solid" => Ok(Self::Solid),
            "outline" => Ok(Self::Outline),
            _ => Err(Error::InvalidParameter(format!("unknown fill type: {s}"))),
        }
    }
}

/// An opaque sRGB colour written as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (case-insensitive)
    pub fn from_hex(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

/// Preset gradient pairs offered by the editor
pub const PALETTES: [(Color, Color); 6] = [
    (Color::rgb(0xFF, 0xA5, 0x00), Color::rgb(0xFF, 0x63, 0x47)),
    (Color::rgb(0x00, 0xFF, 0xF0), Color::rgb(0x00, 0x66, 0xFF)),
    (Color::rgb(0xFF, 0x69, 0xB4), Color::rgb(0xFF, 0x14, 0x93)),
    (Color::rgb(0xFF, 0x4B, 0x4B), Color::rgb(0xFF, 0x00, 0x00)),
    (Color::rgb(0x90, 0xEE, 0x90), Color::rgb(0x32, 0xCD, 0x32)),
    (Color::rgb(0x93, 0x70, 0xDB), Color::rgb(0x4B, 0x00, 0x82)),
];

/// Paint settings for one blob
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobStyle {
    pub fill: FillType,
    pub color1: Color,
    pub color2: Color,
    /// Gradient direction in degrees (0 = left to right, 90 = top to bottom)
    pub gradient_angle: f64,
}

impl Default for BlobStyle {
    fn default() -> Self {
        Self {
            fill: FillType::Gradient,
            color1: Color::rgb(0xD3, 0xE1, 0xEB),
            color2: Color::WHITE,
            gradient_angle: 90.0,
        }
    }
}

impl BlobStyle {
    /// Gradient style from one of the [`PALETTES`]
    ///
    /// Returns `None` for an index past the end of the palette list.
    pub fn palette(index: usize) -> Option<Self> {
        PALETTES.get(index).map(|&(color1, color2)| Self {
            color1,
            color2,
            ..Self::default()
        })
    }

    pub fn with_fill(mut self, fill: FillType) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_colors(mut self, color1: Color, color2: Color) -> Self {
        self.color1 = color1;
        self.color2 = color2;
        self
    }

    pub fn with_gradient_angle(mut self, degrees: f64) -> Self {
        self.gradient_angle = degrees;
        self
    }

    /// Gradient endpoints as percentages `(x1, y1, x2, y2)` of the bounding box
    pub fn gradient_vector(&self) -> (f64, f64, f64, f64) {
        let angle = self.gradient_angle.to_radians();
        let (sin, cos) = angle.sin_cos();
        (
            50.0 - cos * 50.0,
            50.0 - sin * 50.0,
            50.0 + cos * 50.0,
            50.0 + sin * 50.0,
        )
    }
}
