use crate::{DMat3, DQuat, Vector3};

/// Rotation that looks along `forward` with `up` as the vertical reference.
///
/// The resulting quaternion maps +Z onto the normalized `forward`. Returns
/// `None` when `forward` is near zero or (anti)parallel to `up`.
pub fn look_rotation(forward: Vector3, up: Vector3) -> Option<DQuat> {
    let fwd = forward.try_normalize()?;
    let right = up.cross(fwd).try_normalize()?;
    let up = fwd.cross(right);
    Some(DQuat::from_mat3(&DMat3::from_cols(right, up, fwd)))
}
