//! Per-pixel grain noise

use super::PixelBuffer;
use rand::Rng;

/// Baseline every sample is centred on
pub const MID_GRAY: u8 = 128;

/// Full swing of one sample at intensity 1
const SWING: f64 = 255.0;

/// Parameters for [`generate`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseTextureConfig {
    pub width: u32,
    pub height: u32,
    /// Spread around [`MID_GRAY`]; 0 gives a flat field, 1 spans the full range
    pub intensity: f64,
}

impl NoiseTextureConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            intensity: 1.0,
        }
    }

    pub fn with_intensity(mut self, intensity: f64) -> Self {
        self.intensity = intensity;
        self
    }
}

/// Generate a fresh grain buffer
///
/// Every cell independently draws `128 + (u - 0.5) · 255 · intensity`,
/// rounded half-to-even and saturated to `0..=255`. Alpha is always opaque.
/// Nothing is cached; cache the buffer if the same grain is needed across
/// renders.
pub fn generate<R: Rng + ?Sized>(config: &NoiseTextureConfig, rng: &mut R) -> PixelBuffer {
    let intensity = config.intensity;
    let buffer = PixelBuffer::from_fn(config.width, config.height, |_, _| {
        grain_value(rng.random::<f64>(), intensity)
    });

    tracing::debug!(
        width = config.width,
        height = config.height,
        intensity,
        "Generated noise texture"
    );

    buffer
}

/// Map a uniform draw in `0..1` to a grayscale sample
pub fn grain_value(uniform: f64, intensity: f64) -> u8 {
    let value = f64::from(MID_GRAY) + (uniform - 0.5) * SWING * intensity;
    if value.is_nan() {
        return MID_GRAY;
    }
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_intensity_is_flat_mid_gray() {
        let mut rng = StdRng::seed_from_u64(1);
        let buf = generate(&NoiseTextureConfig::new(16, 9).with_intensity(0.0), &mut rng);
        assert!(buf.samples().iter().all(|&v| v == MID_GRAY));
        assert!(buf.alpha_channel().iter().all(|&a| a == 255));
    }

    #[test]
    fn dimensions_match_request() {
        let mut rng = StdRng::seed_from_u64(2);
        for (w, h) in [(1, 1), (7, 3), (64, 1), (1, 40)] {
            let buf = generate(&NoiseTextureConfig::new(w, h), &mut rng);
            assert_eq!(buf.width(), w);
            assert_eq!(buf.height(), h);
            assert_eq!(buf.len(), (w * h) as usize);
        }
    }

    #[test]
    fn zero_sized_request_gives_empty_buffer() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(generate(&NoiseTextureConfig::new(0, 10), &mut rng).is_empty());
        assert!(generate(&NoiseTextureConfig::new(10, 0), &mut rng).is_empty());
    }

    #[test]
    fn samples_vary_at_full_intensity() {
        let mut rng = StdRng::seed_from_u64(4);
        let buf = generate(&NoiseTextureConfig::new(32, 32), &mut rng);
        let first = buf.samples()[0];
        assert!(buf.samples().iter().any(|&v| v != first));
    }

    #[test]
    fn fresh_randomness_each_call() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = NoiseTextureConfig::new(8, 8);
        let a = generate(&config, &mut rng);
        let b = generate(&config, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn grain_value_maps_the_unit_interval() {
        assert_eq!(grain_value(0.5, 1.0), 128);
        assert_eq!(grain_value(0.0, 1.0), 0); // 0.5 rounds to even
        assert_eq!(grain_value(0.999_999, 1.0), 255);
        assert_eq!(grain_value(0.75, 0.5), 160); // 128 + 31.875
    }

    #[test]
    fn large_intensity_saturates() {
        assert_eq!(grain_value(0.0, 10.0), 0);
        assert_eq!(grain_value(0.9, 10.0), 255);

        let mut rng = StdRng::seed_from_u64(6);
        let buf = generate(&NoiseTextureConfig::new(32, 32).with_intensity(50.0), &mut rng);
        let saturated = buf.samples().iter().filter(|&&v| v == 0 || v == 255).count();
        assert!(saturated > 900, "only {saturated} of 1024 samples saturated");
    }

    #[test]
    fn negative_intensity_mirrors() {
        assert_eq!(grain_value(0.0, -1.0), 255);
        assert_eq!(grain_value(0.75, -0.5), 96);
    }
}
