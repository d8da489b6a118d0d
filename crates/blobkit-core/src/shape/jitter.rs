//! Per-point jitter for roughening an existing ring

use super::Ring;
use glam::DVec2;
use rand::Rng;

/// Offset every point by up to `amount / 2` on each axis
///
/// Count and order are preserved. An `amount` of zero returns an identical
/// ring.
pub fn jitter<R: Rng + ?Sized>(ring: &Ring, amount: f64, rng: &mut R) -> Ring {
    ring.iter()
        .map(|p| {
            let offset = DVec2::new(
                (rng.random::<f64>() - 0.5) * amount,
                (rng.random::<f64>() - 0.5) * amount,
            );
            *p + offset
        })
        .collect::<Vec<_>>()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{PolygonConfig, generate_seeded};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_amount_keeps_points() {
        let ring = generate_seeded(&PolygonConfig::default(), 4);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(jitter(&ring, 0.0, &mut rng), ring);
    }

    #[test]
    fn offsets_stay_within_half_amount() {
        let ring = generate_seeded(&PolygonConfig::new(10, 0.4), 4);
        let mut rng = StdRng::seed_from_u64(1);
        let jittered = jitter(&ring, 6.0, &mut rng);

        assert_eq!(jittered.len(), ring.len());
        for (a, b) in ring.iter().zip(&jittered) {
            let d = (*b - *a).abs();
            assert!(d.x <= 3.0 && d.y <= 3.0);
        }
        assert_ne!(jittered, ring);
    }
}
