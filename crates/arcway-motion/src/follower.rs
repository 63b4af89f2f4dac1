//! Constant-speed traversal of curve paths.

use arcway_curve::{Curve, CurvePath};
use arcway_math::{look_rotation, DQuat, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Position and instantaneous velocity of a follower on a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Point3,
    pub velocity: Vector3,
}

impl Pose {
    /// Orientation looking along the velocity, or `None` when the velocity
    /// is too small to define a heading.
    pub fn orientation(&self, up: Vector3) -> Option<DQuat> {
        look_rotation(self.velocity, up)
    }
}

/// Advances a travel distance along a [`CurvePath`] and reports poses.
///
/// The accumulated distance wraps modulo the path's total length, so the
/// follower loops forever on cyclic paths and restarts on open ones. With
/// `constant_speed` the distance is mapped through the path's arc-length
/// table; otherwise the parameter advances uniformly, which speeds up and
/// slows down wherever the control points bunch together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathFollower {
    speed: f64,
    constant_speed: bool,
    distance: f64,
}

impl PathFollower {
    pub fn new(speed: f64) -> Self {
        Self {
            speed,
            constant_speed: true,
            distance: 0.0,
        }
    }

    /// Disable arc-length mapping and advance the raw parameter uniformly.
    pub fn with_uniform_parameter(mut self) -> Self {
        self.constant_speed = false;
        self
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Distance travelled from the path start, after wrapping.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Restart from the path start.
    pub fn reset(&mut self) {
        self.distance = 0.0;
    }

    /// Advance by `dt` seconds along `path` and return the new pose.
    ///
    /// Panics when the path has no segments.
    pub fn advance(&mut self, path: &CurvePath, dt: f64) -> Pose {
        let total = path.total_length();
        self.distance = if total > 0.0 {
            (self.distance + self.speed * dt).rem_euclid(total)
        } else {
            0.0
        };
        self.pose(path)
    }

    /// Pose at the current distance without advancing.
    pub fn pose(&self, path: &CurvePath) -> Pose {
        let u = self.parameter(path);
        Pose {
            position: path.point_at(u),
            velocity: path.velocity_at(u),
        }
    }

    /// Global path parameter for the current distance.
    pub fn parameter(&self, path: &CurvePath) -> f64 {
        if self.constant_speed {
            path.param_at_length(self.distance)
        } else {
            let total = path.total_length();
            if total > 0.0 {
                (self.distance / total) * path.segment_count() as f64
            } else {
                0.0
            }
        }
    }
}
