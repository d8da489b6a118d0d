//! Canvas documents
//!
//! A [`Canvas`] is the composition the editor works on: a background, a
//! blur and grain overlay, and a list of placed blobs. It is mutated only
//! through [`CanvasCommand`]s.

mod command;
mod render;

pub use command::{CanvasCommand, RotateDirection};

use crate::path::Path as OutlinePath;
use crate::shape::{PolygonConfig, generate};
use crate::style::{BlobStyle, Color};
use crate::texture::PixelBuffer;
use crate::texture::noise::{self, NoiseTextureConfig};
use crate::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default canvas width in logical units
pub const CANVAS_WIDTH: u32 = 1000;

/// Default canvas height in logical units
pub const CANVAS_HEIGHT: u32 = 600;

/// Rotation applied by one [`CanvasCommand::Rotate`], in degrees
pub const ROTATION_STEP: f64 = 45.0;

/// A generated blob and the parameters it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlobConfig {
    pub edges: usize,
    pub smoothness: f64,
    #[serde(default)]
    pub style: BlobStyle,
    /// SVG path data in blob space
    pub path: String,
    /// Horizontal stretch factor
    #[serde(default = "one")]
    pub width: f64,
    /// Vertical stretch factor
    #[serde(default = "one")]
    pub height: f64,
}

fn one() -> f64 {
    1.0
}

impl BlobConfig {
    /// Generate a fresh outline for `edges` and `smoothness`
    pub fn generate<R: Rng + ?Sized>(
        edges: usize,
        smoothness: f64,
        style: BlobStyle,
        rng: &mut R,
    ) -> Self {
        let ring = generate(&PolygonConfig::new(edges, smoothness), rng);
        Self::from_path(edges, smoothness, style, &ring.to_path())
    }

    /// Wrap an existing outline
    pub fn from_path(edges: usize, smoothness: f64, style: BlobStyle, path: &OutlinePath) -> Self {
        Self {
            edges,
            smoothness,
            style,
            path: path.to_svg(),
            width: 1.0,
            height: 1.0,
        }
    }

    /// Regenerate the outline with the current parameters
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let ring = generate(&PolygonConfig::new(self.edges, self.smoothness), rng);
        self.path = ring.to_path().to_svg();
    }

    pub fn with_stretch(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// A blob placed on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedBlob {
    pub blob: BlobConfig,
    /// Position of the blob's centre in canvas units
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    /// Rotation in degrees
    pub rotation: f64,
}

impl PlacedBlob {
    /// Place `blob` at the middle of a default-sized canvas
    pub fn centered(blob: BlobConfig) -> Self {
        Self {
            blob,
            x: f64::from(CANVAS_WIDTH) / 2.0,
            y: f64::from(CANVAS_HEIGHT) / 2.0,
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

/// Grain overlay settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseOverlay {
    pub intensity: f64,
    /// Opacity of the whole overlay when composited
    pub opacity: f64,
    /// Magnification of each grain sample, in canvas units
    pub size: u32,
}

impl Default for NoiseOverlay {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            opacity: 0.05,
            size: 1,
        }
    }
}

/// The composition being edited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    /// Gaussian blur standard deviation applied to the blob layer
    pub blur: f64,
    #[serde(default)]
    pub noise: NoiseOverlay,
    #[serde(default)]
    pub blobs: Vec<PlacedBlob>,
    #[serde(skip)]
    selected: Option<usize>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            background: Color::rgb(0xF9, 0xFA, 0xFB),
            blur: 0.0,
            noise: NoiseOverlay::default(),
            blobs: Vec::new(),
            selected: None,
        }
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the selected blob, if any
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn blob(&self, index: usize) -> Option<&PlacedBlob> {
        self.blobs.get(index)
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    /// Size of the grain buffer that covers this canvas
    ///
    /// Each sample spans `size × size` canvas units, so the buffer is the
    /// canvas divided by `size`, never smaller than 1×1.
    pub fn overlay_dimensions(&self) -> (u32, u32) {
        let size = self.noise.size.max(1);
        ((self.width / size).max(1), (self.height / size).max(1))
    }

    /// Generate a fresh grain buffer for the overlay
    pub fn noise_texture<R: Rng + ?Sized>(&self, rng: &mut R) -> PixelBuffer {
        let (width, height) = self.overlay_dimensions();
        let config = NoiseTextureConfig::new(width, height).with_intensity(self.noise.intensity);
        noise::generate(&config, rng)
    }

    /// Load a canvas document from JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save this canvas as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_blob_has_closed_path() {
        let mut rng = StdRng::seed_from_u64(1);
        let blob = BlobConfig::generate(6, 0.4, BlobStyle::default(), &mut rng);
        assert!(blob.path.starts_with("M "));
        assert!(blob.path.ends_with(" Z"));
        assert_eq!(blob.path.matches('C').count(), 6);
    }

    #[test]
    fn regenerate_changes_outline() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut blob = BlobConfig::generate(6, 0.4, BlobStyle::default(), &mut rng);
        let before = blob.path.clone();
        blob.regenerate(&mut rng);
        assert_ne!(blob.path, before);
    }

    #[test]
    fn overlay_dimensions_follow_size() {
        let mut canvas = Canvas::new();
        assert_eq!(canvas.overlay_dimensions(), (1000, 600));

        canvas.noise.size = 4;
        assert_eq!(canvas.overlay_dimensions(), (250, 150));

        canvas.noise.size = 0;
        assert_eq!(canvas.overlay_dimensions(), (1000, 600));

        canvas.noise.size = 5000;
        assert_eq!(canvas.overlay_dimensions(), (1, 1));
    }

    #[test]
    fn noise_texture_covers_overlay() {
        let mut canvas = Canvas::new();
        canvas.noise.size = 10;
        let mut rng = StdRng::seed_from_u64(3);
        let buffer = canvas.noise_texture(&mut rng);
        assert_eq!((buffer.width(), buffer.height()), (100, 60));
    }

    #[test]
    fn json_round_trip() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut canvas = Canvas::new();
        canvas.blobs.push(PlacedBlob::centered(BlobConfig::generate(
            5,
            0.5,
            BlobStyle::palette(2).unwrap(),
            &mut rng,
        )));
        canvas.blur = 12.0;

        let path = std::env::temp_dir().join("blobkit_test_canvas.json");
        canvas.save(&path).unwrap();
        let loaded = Canvas::load(&path).unwrap();
        assert_eq!(loaded, canvas);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn minimal_document_fills_defaults() {
        let json = r##"{
            "width": 800,
            "height": 400,
            "background": "#000000",
            "blur": 0,
            "blobs": [
                { "blob": { "edges": 3, "smoothness": 1, "path": "M 0 0 Z" },
                  "x": 10, "y": 20, "scale": 2, "rotation": 45 }
            ]
        }"##;
        let canvas: Canvas = serde_json::from_str(json).unwrap();
        assert_eq!(canvas.noise, NoiseOverlay::default());
        assert_eq!(canvas.blobs[0].blob.style, BlobStyle::default());
        assert!((canvas.blobs[0].blob.width - 1.0).abs() < f64::EPSILON);
    }
}
