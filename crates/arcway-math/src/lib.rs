pub mod aabb;
pub mod orient;

pub use glam::{DMat3, DMat4, DQuat, DVec3, DVec4};
pub use aabb::Aabb3;
pub use orient::look_rotation;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
