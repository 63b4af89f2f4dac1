//! Cubic curve segments over four control points.

use arcway_core::{ArcwayError, Result};
use arcway_math::{DMat4, DVec4, Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::Curve;

/// Blending-function family of a [`CurveSegment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveKind {
    /// Cubic Bezier; interpolates `p1` and `p4`, with `p2`/`p3` as handles.
    Bezier,
    /// Cubic Hermite; `p1`/`p3` are endpoints, `p2`/`p4` are tangent vectors.
    Hermite,
    /// Uniform Catmull-Rom (tension 1/2); interpolates `p2` and `p3`.
    CatmullRom,
    /// Uniform cubic B-spline span; approximates all four points.
    BSpline,
}

impl CurveKind {
    /// Characteristic matrix mapping the power basis `(1, t, t^2, t^3)` to
    /// the four control-point weights.
    fn basis(self) -> DMat4 {
        match self {
            CurveKind::Bezier => DMat4::from_cols(
                DVec4::new(1.0, 0.0, 0.0, 0.0),
                DVec4::new(-3.0, 3.0, 0.0, 0.0),
                DVec4::new(3.0, -6.0, 3.0, 0.0),
                DVec4::new(-1.0, 3.0, -3.0, 1.0),
            ),
            CurveKind::Hermite => DMat4::from_cols(
                DVec4::new(1.0, 0.0, 0.0, 0.0),
                DVec4::new(0.0, 1.0, 0.0, 0.0),
                DVec4::new(-3.0, -2.0, 3.0, -1.0),
                DVec4::new(2.0, 1.0, -2.0, 1.0),
            ),
            CurveKind::CatmullRom => DMat4::from_cols(
                DVec4::new(0.0, 1.0, 0.0, 0.0),
                DVec4::new(-0.5, 0.0, 0.5, 0.0),
                DVec4::new(1.0, -2.5, 2.0, -0.5),
                DVec4::new(-0.5, 1.5, -1.5, 0.5),
            ),
            CurveKind::BSpline => DMat4::from_cols(
                DVec4::new(1.0 / 6.0, 4.0 / 6.0, 1.0 / 6.0, 0.0),
                DVec4::new(-0.5, 0.0, 0.5, 0.0),
                DVec4::new(0.5, -1.0, 0.5, 0.0),
                DVec4::new(-1.0 / 6.0, 0.5, -0.5, 1.0 / 6.0),
            ),
        }
    }
}

/// A cubic curve over four control points, traced over `t` in `[0, 1]`.
///
/// The parameter is not clamped here: values outside `[0, 1]` extrapolate
/// along the same polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSegment {
    points: [Point3; 4],
    kind: CurveKind,
}

impl CurveSegment {
    /// Build a segment from four control points.
    ///
    /// Rejects points with NaN or infinite coordinates.
    pub fn new(points: [Point3; 4], kind: CurveKind) -> Result<Self> {
        for (i, p) in points.iter().enumerate() {
            if !p.is_finite() {
                return Err(ArcwayError::ControlPoint(format!(
                    "control point {} is not finite: {p}",
                    i + 1
                )));
            }
        }
        Ok(Self { points, kind })
    }

    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    pub fn points(&self) -> &[Point3; 4] {
        &self.points
    }

    fn weighted_sum(&self, powers: DVec4) -> Point3 {
        let w = self.kind.basis() * powers;
        self.points[0] * w.x + self.points[1] * w.y + self.points[2] * w.z + self.points[3] * w.w
    }
}

impl Curve for CurveSegment {
    fn point_at(&self, t: f64) -> Point3 {
        self.weighted_sum(DVec4::new(1.0, t, t * t, t * t * t))
    }

    fn velocity_at(&self, t: f64) -> Vector3 {
        self.weighted_sum(DVec4::new(0.0, 1.0, 2.0 * t, 3.0 * t * t))
    }

    fn acceleration_at(&self, t: f64) -> Vector3 {
        self.weighted_sum(DVec4::new(0.0, 0.0, 2.0, 6.0 * t))
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}
