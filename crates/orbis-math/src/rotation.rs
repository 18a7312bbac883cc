//! Minimal-angle rotations between directions.

use glam::{DQuat, DVec3};

const ANTIPARALLEL_MARGIN: f64 = 8.0 * f64::EPSILON;

/// Unit quaternion rotating unit vector `from` onto unit vector `to` along
/// the shortest arc.
///
/// Both inputs must already be normalized. Parallel inputs give the identity.
/// Antiparallel inputs have no unique axis; the rotation is then a half turn
/// about a vector perpendicular to `from`, built from whichever pair of its
/// components cannot both be zero.
#[must_use]
pub fn rotation_between_unit_vectors(from: DVec3, to: DVec3) -> DQuat {
    let r = from.dot(to) + 1.0;

    // Exactly opposite unit vectors can land a few ulps above zero.
    let q = if r < ANTIPARALLEL_MARGIN {
        if from.x.abs() > from.z.abs() {
            DQuat::from_xyzw(-from.y, from.x, 0.0, 0.0)
        } else {
            DQuat::from_xyzw(0.0, -from.z, from.y, 0.0)
        }
    } else {
        let axis = from.cross(to);
        DQuat::from_xyzw(axis.x, axis.y, axis.z, r)
    };

    q.normalize()
}

/// Like [`rotation_between_unit_vectors`] but normalizes the inputs first.
///
/// Returns `None` if either vector has no direction.
#[must_use]
pub fn rotation_between(from: DVec3, to: DVec3) -> Option<DQuat> {
    Some(rotation_between_unit_vectors(
        from.try_normalize()?,
        to.try_normalize()?,
    ))
}
