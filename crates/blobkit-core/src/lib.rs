//! # Blobkit Core
//!
//! Procedural blob shapes, smooth outlines and grain textures.
//!
//! Blobkit generates organic "blob" silhouettes as jittered regular polygons,
//! turns them into smooth closed SVG paths, and synthesizes per-pixel grain
//! noise for compositing on top.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use blobkit_core::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//!
//! // Jittered pentagon, half way between spiky and round
//! let ring = generate(&PolygonConfig::default(), &mut rng);
//!
//! // Smooth closed outline as SVG path data
//! let path = ring.to_path();
//! let svg = blob_svg(&path, &BlobStyle::default());
//! export_svg(&svg, "blob.svg")?;
//! ```
//!
//! ## Units and Conventions
//!
//! - **Coordinates**: `f64`, y-down as in SVG. Blobs live in a `0..300`
//!   square centred on `(150, 150)`.
//! - **Angles**: generators use **radians**; styles and canvas transforms use
//!   **degrees**, matching SVG attributes.
//! - **Randomness**: every generator takes an explicit `rand::Rng`. Seed a
//!   `StdRng` for reproducible output.

pub mod canvas;
pub mod export;
pub mod path;
pub mod shape;
pub mod style;
pub mod texture;

mod error;

pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    // Shape generation
    pub use crate::shape::{
        DEFAULT_CENTER, Point, PolygonConfig, Ring, generate, generate_seeded, jitter,
    };

    // Outlines
    pub use crate::path::{Path, PathCommand, TENSION, to_path, to_path_with_tension};

    // Grain
    pub use crate::texture::{NoiseTextureConfig, PixelBuffer, noise::generate as generate_noise};

    // Styling and export
    pub use crate::export::{ExportFormat, blob_svg, export_png, export_svg};
    pub use crate::style::{BlobStyle, Color, FillType, PALETTES};

    // Canvas document
    pub use crate::canvas::{BlobConfig, Canvas, CanvasCommand, NoiseOverlay, PlacedBlob};

    // Math (re-export glam)
    pub use glam::DVec2;

    // Error handling
    pub use crate::{Error, Result};
}
