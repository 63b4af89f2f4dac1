use crate::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb3 {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point, or `None` for an empty slice.
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let mut bounds = Self::new(first, first);
        for &p in rest {
            bounds.min = bounds.min.min(p);
            bounds.max = bounds.max.max(p);
        }
        Some(bounds)
    }

    pub fn center(&self) -> Point3 {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }

    pub fn contains_point(&self, p: Point3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Grow the box by `amount` on every side.
    pub fn expand(&self, amount: f64) -> Self {
        let offset = Vector3::splat(amount);
        Self {
            min: self.min - offset,
            max: self.max + offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    #[test]
    fn test_from_points() {
        let pts = vec![dvec3(2.0, -1.0, 0.5), dvec3(-3.0, 4.0, 1.0), dvec3(0.0, 0.0, -2.0)];
        let aabb = Aabb3::from_points(&pts).unwrap();
        assert_eq!(aabb.min, dvec3(-3.0, -1.0, -2.0));
        assert_eq!(aabb.max, dvec3(2.0, 4.0, 1.0));
        assert!(Aabb3::from_points(&[]).is_none());
    }

    #[test]
    fn test_contains_point() {
        let aabb = Aabb3::new(dvec3(0.0, 0.0, 0.0), dvec3(2.0, 2.0, 2.0));
        assert!(aabb.contains_point(dvec3(1.0, 1.5, 0.5)));
        assert!(!aabb.contains_point(dvec3(1.0, 2.5, 0.5)));
    }

    #[test]
    fn test_expand() {
        let aabb = Aabb3::new(dvec3(0.0, 0.0, 0.0), dvec3(1.0, 1.0, 1.0)).expand(0.5);
        assert_eq!(aabb.min, dvec3(-0.5, -0.5, -0.5));
        assert_eq!(aabb.max, dvec3(1.5, 1.5, 1.5));
        assert_eq!(aabb.center(), dvec3(0.5, 0.5, 0.5));
        assert_eq!(aabb.extents(), dvec3(2.0, 2.0, 2.0));
    }
}
