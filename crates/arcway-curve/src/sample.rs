//! Sampling utilities for converting curves to discrete representations.

use arcway_math::Point3;

use crate::Curve;

/// Sample a curve into a polyline of `samples + 1` points across its domain.
///
/// Returns an empty polyline for zero `samples` or an empty domain.
pub fn curve_polyline(curve: &dyn Curve, samples: usize) -> Vec<Point3> {
    let (t_min, t_max) = curve.domain();
    if samples == 0 || t_max <= t_min {
        return Vec::new();
    }
    let stride = (t_max - t_min) / samples as f64;
    (0..=samples)
        .map(|i| curve.point_at(t_min + i as f64 * stride))
        .collect()
}

/// Sample tangent ticks along a curve for debug display.
///
/// Each entry is `(point, point + velocity * scale)` at one of `samples + 1`
/// uniform parameters across the domain.
pub fn tangent_segments(curve: &dyn Curve, samples: usize, scale: f64) -> Vec<(Point3, Point3)> {
    let (t_min, t_max) = curve.domain();
    if samples == 0 || t_max <= t_min {
        return Vec::new();
    }
    let stride = (t_max - t_min) / samples as f64;
    (0..=samples)
        .map(|i| {
            let t = t_min + i as f64 * stride;
            let p = curve.point_at(t);
            (p, p + curve.velocity_at(t) * scale)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{CurvePath, PathConfig};
    use crate::segment::CurveKind;
    use arcway_math::DVec3;

    fn test_path(cyclic: bool) -> CurvePath {
        let points = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(2.0, 1.0, 0.0),
            DVec3::new(3.0, 0.0, 0.0),
        ];
        let config = PathConfig {
            kind: if cyclic { CurveKind::CatmullRom } else { CurveKind::Bezier },
            cyclic,
            resolution: 16,
        };
        CurvePath::new(points, config).unwrap()
    }

    #[test]
    fn test_polyline_covers_domain() {
        let path = test_path(true);
        let points = curve_polyline(&path, 20);
        assert_eq!(points.len(), 21);
        assert!((points[0] - path.point_at(0.0)).length() < 1e-12);
        assert!((points[20] - path.point_at(4.0)).length() < 1e-12);
    }

    #[test]
    fn test_polyline_of_empty_domain() {
        let path = test_path(false);
        assert!(curve_polyline(&path, 0).is_empty());

        let empty = CurvePath::new(
            *path.control_points(),
            PathConfig {
                kind: CurveKind::Bezier,
                cyclic: true,
                resolution: 16,
            },
        )
        .unwrap();
        assert!(curve_polyline(&empty, 20).is_empty());
    }

    #[test]
    fn test_tangent_ticks_follow_velocity() {
        let path = test_path(false);
        let ticks = tangent_segments(&path, 10, 0.25);
        assert_eq!(ticks.len(), 11);
        for (i, (base, tip)) in ticks.iter().enumerate() {
            let t = i as f64 / 10.0;
            assert!((*base - path.point_at(t)).length() < 1e-12);
            let expected = *base + path.velocity_at(t) * 0.25;
            assert!((*tip - expected).length() < 1e-12);
        }
    }
}
