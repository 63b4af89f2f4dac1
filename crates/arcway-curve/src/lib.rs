//! Arcway curves: cubic segments, chained paths, and arc-length lookup.

pub mod arclen;
pub mod path;
pub mod sample;
pub mod segment;

use arcway_math::{Point3, Vector3};

pub use arclen::ArcLengthTable;
pub use path::{CurvePath, PathConfig};
pub use segment::{CurveKind, CurveSegment};

/// Trait for parametric curves in 3D space.
pub trait Curve {
    /// Evaluate the curve position at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Evaluate the first derivative with respect to `t`.
    fn velocity_at(&self, t: f64) -> Vector3;

    /// Evaluate the second derivative with respect to `t`.
    fn acceleration_at(&self, t: f64) -> Vector3;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Whether the curve is closed (start == end).
    fn is_closed(&self) -> bool {
        false
    }
}
