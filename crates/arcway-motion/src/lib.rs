//! Arcway motion: moving along curve paths at controlled speed.

pub mod follower;

pub use follower::{PathFollower, Pose};
