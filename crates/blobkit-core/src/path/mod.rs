//! Smooth closed outlines
//!
//! Converts a point loop into a closed cubic Bézier path. Control points come
//! from a four-point neighbourhood (Catmull-Rom style), so the tangent leaving
//! a vertex always equals the tangent arriving at it, seam included.

mod svg_number;

pub(crate) use svg_number::SvgNumber;

use crate::shape::{Point, Ring};
use std::fmt;

/// Tangent scale used by [`to_path`]
///
/// Higher values flatten segments toward straight lines, lower values make
/// rounder bulges.
pub const TENSION: f64 = 0.2;

/// A single drawing command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// `M x y`
    MoveTo(Point),
    /// `C c1x c1y, c2x c2y, x y`
    CubicTo { c1: Point, c2: Point, to: Point },
    /// `Z`
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(p) => write!(f, "M {} {}", SvgNumber(p.x), SvgNumber(p.y)),
            Self::CubicTo { c1, c2, to } => write!(
                f,
                "C {} {}, {} {}, {} {}",
                SvgNumber(c1.x),
                SvgNumber(c1.y),
                SvgNumber(c2.x),
                SvgNumber(c2.y),
                SvgNumber(to.x),
                SvgNumber(to.y)
            ),
            Self::Close => f.write_str("Z"),
        }
    }
}

/// A closed outline as a sequence of drawing commands
///
/// Displays as SVG path data. An empty path displays as an empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of cubic segments
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::CubicTo { .. }))
            .count()
    }

    /// SVG path data (`M … C … Z`)
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

/// Build a smooth closed path through `points` using [`TENSION`]
///
/// Returns an empty path for fewer than 3 points.
pub fn to_path(points: &[Point]) -> Path {
    to_path_with_tension(points, TENSION)
}

/// Build a smooth closed path with a custom tangent scale
pub fn to_path_with_tension(points: &[Point], tension: f64) -> Path {
    let n = points.len();
    if n < 3 {
        return Path::default();
    }

    let mut commands = Vec::with_capacity(n + 2);
    commands.push(PathCommand::MoveTo(points[0]));

    for i in 0..n {
        let (c1, c2) = segment_controls(points, i, tension);
        commands.push(PathCommand::CubicTo {
            c1,
            c2,
            to: points[(i + 1) % n],
        });
    }

    commands.push(PathCommand::Close);
    Path { commands }
}

/// Control points of the segment from vertex `i` to vertex `i + 1`
fn segment_controls(points: &[Point], i: usize, tension: f64) -> (Point, Point) {
    let n = points.len();
    let prev = points[(i + n - 1) % n];
    let current = points[i];
    let next = points[(i + 1) % n];
    let after_next = points[(i + 2) % n];

    let c1 = current + (next - prev) * tension;
    let c2 = next - (after_next - current) * tension;
    (c1, c2)
}

/// Tangent leaving vertex `i` (first control point minus the vertex)
///
/// `None` when the loop has fewer than 3 points or `i` is out of range.
pub fn outgoing_tangent(points: &[Point], i: usize, tension: f64) -> Option<Point> {
    if points.len() < 3 || i >= points.len() {
        return None;
    }
    let (c1, _) = segment_controls(points, i, tension);
    Some(c1 - points[i])
}

/// Tangent arriving at vertex `i` (the vertex minus the previous segment's
/// second control point)
pub fn incoming_tangent(points: &[Point], i: usize, tension: f64) -> Option<Point> {
    let n = points.len();
    if n < 3 || i >= n {
        return None;
    }
    let (_, c2) = segment_controls(points, (i + n - 1) % n, tension);
    Some(points[i] - c2)
}

impl Ring {
    /// Smooth closed outline through this ring
    pub fn to_path(&self) -> Path {
        to_path(self.points())
    }
}
