//! Blob silhouettes
//!
//! A blob starts life as a [`Ring`]: an ordered loop of points around a
//! centre, produced by perturbing a regular polygon.

mod jitter;
mod polygon;

pub use jitter::jitter;
pub use polygon::{generate, generate_seeded};

use glam::DVec2;

/// A point in blob space
pub type Point = DVec2;

/// Centre of the `0..300` blob space
pub const DEFAULT_CENTER: Point = DVec2::new(150.0, 150.0);

/// Parameters for [`generate`]
///
/// `edge_count` below 3 and `smoothness` outside `0..=1` are accepted as-is;
/// clamp upstream if strict values are needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonConfig {
    /// Number of vertices on the ring
    pub edge_count: usize,
    /// 0 = spiky and irregular, 1 = regular polygon
    pub smoothness: f64,
    /// Radius of the ideal circle
    pub radius: f64,
    /// Centre of the ideal circle
    pub center: Point,
}

impl Default for PolygonConfig {
    fn default() -> Self {
        Self {
            edge_count: 5,
            smoothness: 0.5,
            radius: 60.0,
            center: DEFAULT_CENTER,
        }
    }
}

impl PolygonConfig {
    pub fn new(edge_count: usize, smoothness: f64) -> Self {
        Self {
            edge_count,
            smoothness,
            ..Self::default()
        }
    }

    /// Set the ideal radius
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set the centre point
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }
}

/// An ordered, implicitly closed loop of points
///
/// The last point connects back to the first. Order follows increasing
/// angle around the centre the ring was generated from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ring {
    points: Vec<Point>,
}

impl Ring {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl From<Vec<Point>> for Ring {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl AsRef<[Point]> for Ring {
    fn as_ref(&self) -> &[Point] {
        &self.points
    }
}

impl<'a> IntoIterator for &'a Ring {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
