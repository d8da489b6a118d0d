//! Jittered regular polygon generator

use super::{Point, PolygonConfig, Ring};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Fraction of the ideal radius the radius jitter can reach at smoothness 0
const RADIUS_VARIATION: f64 = 0.8;

/// Extra spread applied on top of [`RADIUS_VARIATION`]
const RADIUS_SPREAD: f64 = 2.2;

/// Fraction of one angular step the angle jitter can reach at smoothness 0
const ANGLE_VARIATION: f64 = 0.8;

/// Generate a ring of `edge_count` points around `center`
///
/// Each vertex is a blend of a point on the ideal circle and a randomized
/// point whose radius and angle are jittered by `1 - smoothness`. The blend
/// weights the ideal point by `smoothness`, so `smoothness = 1` lands every
/// vertex exactly on the circle.
///
/// Draws one value for the start angle, then three per vertex.
pub fn generate<R: Rng + ?Sized>(config: &PolygonConfig, rng: &mut R) -> Ring {
    let PolygonConfig {
        edge_count,
        smoothness,
        radius,
        center,
    } = *config;

    let angle_step = TAU / edge_count as f64;
    let start_angle = rng.random::<f64>() * TAU;

    let roughness = 1.0 - smoothness;
    let base_offset = roughness;
    let radius_variation = RADIUS_VARIATION * roughness;
    let angle_variation = angle_step * ANGLE_VARIATION * roughness;

    let mut points = Vec::with_capacity(edge_count);

    for i in 0..edge_count {
        let angle = start_angle + i as f64 * angle_step;

        let radius_factor = 1.0 + (rng.random::<f64>() - 0.5) * radius_variation * RADIUS_SPREAD;
        let random_radius = radius * radius_factor * (1.0 + (rng.random::<f64>() - 0.5) * base_offset);
        let random_angle = angle + (rng.random::<f64>() - 0.5) * angle_variation;

        let perfect = center + polar(angle, radius);
        let randomized = center + polar(random_angle, random_radius);

        points.push(perfect * smoothness + randomized * roughness);
    }

    tracing::debug!(
        edge_count,
        smoothness,
        radius,
        start_angle,
        "Generated blob ring"
    );

    Ring::new(points)
}

/// Generate a ring from a `u64` seed
///
/// The same seed and config always produce the same ring.
pub fn generate_seeded(config: &PolygonConfig, seed: u64) -> Ring {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(config, &mut rng)
}

fn polar(angle: f64, radius: f64) -> Point {
    DVec2::new(angle.cos() * radius, angle.sin() * radius)
}
