//! Geometry primitives for contour segments.

use serde::{Deserialize, Serialize};

/// Tolerance below which two corner values are treated as equal during
/// edge interpolation.
pub const EPS: f32 = 1e-6;

/// A point in grid space (1.0 unit = 1 cell).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One piece of an isocontour. Segments carry no connectivity to their
/// neighbors; consumers that want polylines must join endpoints themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

/// Locate the isolevel crossing on the edge `p1`-`p2`, assuming the field
/// varies linearly between the two corner values.
///
/// When the corner values are within [`EPS`] of each other the crossing is
/// ill-defined and `p1` is returned unchanged. `t` is not clamped: callers
/// only interpolate edges the case table has already marked as crossed.
pub fn lerp(p1: Point, p2: Point, v1: f32, v2: f32, iso: f32) -> Point {
    let denom = v2 - v1;

    if denom.abs() < EPS {
        return p1;
    }

    let t = (iso - v1) / denom;

    Point::new(p1.x + t * (p2.x - p1.x), p1.y + t * (p2.y - p1.y))
}
