//! Export functionality for blob outlines and grain textures

mod svg;

use crate::texture::PixelBuffer;
use crate::{Error, Result};
use std::fs;
use std::path::Path;

pub use svg::{BLOB_VIEW_BOX, OUTLINE_STROKE_WIDTH, blob_svg};
pub(crate) use svg::{paint_attributes, write_gradient, writeln_str, xml_escape};

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Vector outline document
    #[default]
    Svg,
    /// Raster grain texture
    Png,
}

impl ExportFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "svg" => Some(Self::Svg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }

    /// Get a human-readable name for this format
    pub fn name(&self) -> &'static str {
        match self {
            Self::Svg => "SVG (Vector)",
            Self::Png => "PNG (Raster)",
        }
    }
}

/// Write an SVG document to `path`
///
/// Fails with [`Error::Export`] if the extension is not `.svg`.
pub fn export_svg<P: AsRef<Path>>(document: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    expect_format(path, ExportFormat::Svg)?;
    fs::write(path, document)?;
    tracing::info!("Wrote SVG to {}", path.display());
    Ok(())
}

/// Write a grain buffer as PNG, magnified by `size` (see [`PixelBuffer::magnify`])
pub fn export_png<P: AsRef<Path>>(buffer: &PixelBuffer, size: u32, path: P) -> Result<()> {
    let path = path.as_ref();
    expect_format(path, ExportFormat::Png)?;
    if buffer.is_empty() {
        return Err(Error::Export("cannot write an empty texture".to_string()));
    }
    buffer.magnify(size)?.save(path)?;
    tracing::info!(
        "Wrote {}x{} texture to {}",
        buffer.width(),
        buffer.height(),
        path.display()
    );
    Ok(())
}

fn expect_format(path: &Path, expected: ExportFormat) -> Result<()> {
    match ExportFormat::from_extension(path) {
        Some(format) if format == expected => Ok(()),
        _ => Err(Error::Export(format!(
            "{} export expects a .{} file, got: {}",
            expected.name(),
            expected.extension(),
            path.display()
        ))),
    }
}
