//! Grain textures
//!
//! Per-pixel grayscale noise used as a blended overlay on top of a canvas.

pub mod noise;

use crate::error::{Error, Result};
use image::{GrayAlphaImage, LumaA, Rgba, RgbaImage};

pub use noise::{MID_GRAY, NoiseTextureConfig};

/// Largest side, in pixels, a magnified texture may have
pub const MAX_MAGNIFIED_SIDE: u32 = 1 << 15;

/// A `width × height` grid of grayscale samples with a parallel alpha channel
///
/// Samples are stored row-major. Every sample produced by the noise
/// generator is fully opaque; overlay opacity is applied when compositing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    values: Vec<u8>,
    alpha: Vec<u8>,
}

impl PixelBuffer {
    /// Build a buffer by evaluating `f(x, y)` for every cell in row-major order
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> Self {
        let len = width as usize * height as usize;
        let mut values = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                values.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            values,
            alpha: vec![u8::MAX; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells (`width × height`)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Grayscale samples in row-major order
    pub fn samples(&self) -> &[u8] {
        &self.values
    }

    /// Alpha channel in row-major order
    pub fn alpha_channel(&self) -> &[u8] {
        &self.alpha
    }

    /// Grayscale value at `(x, y)`, or `None` outside the buffer
    pub fn value(&self, x: u32, y: u32) -> Option<u8> {
        self.index(x, y).map(|i| self.values[i])
    }

    /// Alpha at `(x, y)`, or `None` outside the buffer
    pub fn alpha(&self, x: u32, y: u32) -> Option<u8> {
        self.index(x, y).map(|i| self.alpha[i])
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Convert to a gray + alpha image
    pub fn to_image(&self) -> GrayAlphaImage {
        GrayAlphaImage::from_fn(self.width, self.height, |x, y| {
            let i = y as usize * self.width as usize + x as usize;
            LumaA([self.values[i], self.alpha[i]])
        })
    }

    /// Convert to an RGBA image with equal colour channels
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let i = y as usize * self.width as usize + x as usize;
            let v = self.values[i];
            Rgba([v, v, v, self.alpha[i]])
        })
    }

    /// Magnify by an integer factor with nearest-neighbour sampling
    ///
    /// Each sample becomes a `size × size` block, the pixelated look of a
    /// small grain texture stretched over a larger canvas. A `size` of 0 or 1
    /// returns the image at its native resolution.
    ///
    /// Fails with [`Error::InvalidParameter`] if either magnified side would
    /// exceed [`MAX_MAGNIFIED_SIDE`].
    pub fn magnify(&self, size: u32) -> Result<GrayAlphaImage> {
        if size <= 1 || self.is_empty() {
            return Ok(self.to_image());
        }
        let side = |n: u32| n.checked_mul(size).filter(|&m| m <= MAX_MAGNIFIED_SIDE);
        let (Some(width), Some(height)) = (side(self.width), side(self.height)) else {
            return Err(Error::InvalidParameter(format!(
                "magnifying {}x{} by {} exceeds {} pixels per side",
                self.width, self.height, size, MAX_MAGNIFIED_SIDE
            )));
        };
        Ok(GrayAlphaImage::from_fn(width, height, |x, y| {
            let i = (y / size) as usize * self.width as usize + (x / size) as usize;
            LumaA([self.values[i], self.alpha[i]])
        }))
    }
}
