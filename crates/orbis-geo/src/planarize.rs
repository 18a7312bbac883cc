//! Rotating an arbitrary pair of sphere points into the canonical arc frame.
//!
//! The canonical frame has both points in the XOY plane (z = 0), mirrored
//! about the +Y axis. An arc built there only has to be rotated back with
//! [`ArcPlacement::rotation`] to land on the original points.

use glam::{DQuat, DVec3};
use orbis_math::{GEOMETRY_EPSILON, rotation_between_unit_vectors};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::GeoError;

/// Two sphere points expressed in the canonical arc frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArcPlacement {
    /// Rotation from the canonical frame back to sphere space.
    pub rotation: DQuat,
    /// First point in the canonical frame, on the +X side.
    pub start: DVec3,
    /// Second point in the canonical frame, mirror of `start` about +Y.
    pub end: DVec3,
}

/// Rotate `p1` and `p2` about the sphere center into the canonical frame.
///
/// Two rotations are chained. The first turns the normal of the plane
/// through the center, `p1` and `p2` onto +Z, which drops both points into
/// z = 0. The second spins about Z until their midpoint lies on +Y. The
/// returned rotation is the inverse of the chain, `A⁻¹ · B⁻¹`.
///
/// Because `p1 × p2` is sent to +Z, `p2` lies counter-clockwise of `p1`,
/// which places `start` on the +X side.
///
/// # Errors
///
/// Returns [`GeoError::DegenerateArc`] if the points are coincident,
/// antipodal, or either sits on the center: no unique plane exists.
pub fn planarize(p1: DVec3, p2: DVec3) -> Result<ArcPlacement, GeoError> {
    // Equal to p1 × p2, but the difference keeps its precision for nearby
    // points.
    let normal = p1.cross(p2 - p1);
    let scale = p1.length() * p2.length();
    if scale <= 0.0 || normal.length() <= GEOMETRY_EPSILON * scale {
        return Err(GeoError::DegenerateArc);
    }
    let normal = normal / normal.length();

    let to_xoy = rotation_between_unit_vectors(normal, DVec3::Z);
    let start_xoy = to_xoy * p1;
    let end_xoy = to_xoy * p2;

    let mid_dir = ((start_xoy + end_xoy) * 0.5)
        .try_normalize()
        .ok_or(GeoError::DegenerateArc)?;
    let to_y = rotation_between_unit_vectors(mid_dir, DVec3::Y);

    let start = to_y * start_xoy;
    let end = to_y * end_xoy;
    let rotation = to_xoy.conjugate() * to_y.conjugate();

    trace!(?start, ?end, "planarized arc endpoints");

    Ok(ArcPlacement {
        rotation,
        start,
        end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_to_sphere;
    use orbis_math::approx_eq_vec3;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    fn assert_canonical(placement: &ArcPlacement) {
        let ArcPlacement { start, end, .. } = *placement;
        assert!(start.z.abs() < EPSILON, "start off plane: {start:?}");
        assert!(end.z.abs() < EPSILON, "end off plane: {end:?}");
        assert!((start.y - end.y).abs() < EPSILON, "y mismatch: {start:?} {end:?}");
        assert!((start.x + end.x).abs() < EPSILON, "x not mirrored: {start:?} {end:?}");
        assert!(start.x > 0.0, "start should be on +X: {start:?}");
        assert!(start.y > 0.0, "midpoint should be on +Y: {start:?}");
    }

    #[test]
    fn test_sample_sites_planarize() {
        let p1 = geo_to_sphere(1.0, 39.0, 116.0);
        let p2 = geo_to_sphere(1.0, 34.052235, -118.243683);
        let placement = planarize(p1, p2).unwrap();
        assert_canonical(&placement);

        // Rotations preserve distance from the center.
        assert!((placement.start.length() - 1.0).abs() < EPSILON);
        assert!((placement.end.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_rotation_restores_original_points() {
        let p1 = geo_to_sphere(2.5, -12.0, 48.0);
        let p2 = geo_to_sphere(2.5, 60.0, 5.0);
        let placement = planarize(p1, p2).unwrap();
        assert!(approx_eq_vec3(placement.rotation * placement.start, p1, EPSILON));
        assert!(approx_eq_vec3(placement.rotation * placement.end, p2, EPSILON));
    }

    #[test]
    fn test_already_canonical_points_stay_put() {
        let p1 = DVec3::new(0.6, 0.8, 0.0);
        let p2 = DVec3::new(-0.6, 0.8, 0.0);
        let placement = planarize(p1, p2).unwrap();
        assert!(approx_eq_vec3(placement.start, p1, EPSILON));
        assert!(approx_eq_vec3(placement.end, p2, EPSILON));
        assert!(placement.rotation.abs_diff_eq(DQuat::IDENTITY, EPSILON));
    }

    #[test]
    fn test_points_in_xoy_with_midpoint_on_negative_y() {
        // Normal is already +Z, but the midpoint needs a half turn.
        let p1 = DVec3::new(-0.6, -0.8, 0.0);
        let p2 = DVec3::new(0.6, -0.8, 0.0);
        let placement = planarize(p1, p2).unwrap();
        assert_canonical(&placement);
        assert!(approx_eq_vec3(placement.rotation * placement.start, p1, EPSILON));
    }

    #[test]
    fn test_coincident_points_are_degenerate() {
        let p = geo_to_sphere(1.0, 10.0, 20.0);
        assert_eq!(planarize(p, p), Err(GeoError::DegenerateArc));
    }

    #[test]
    fn test_antipodal_points_are_degenerate() {
        let p = geo_to_sphere(1.0, 10.0, 20.0);
        assert_eq!(planarize(p, -p), Err(GeoError::DegenerateArc));
    }

    #[test]
    fn test_point_at_center_is_degenerate() {
        assert_eq!(planarize(DVec3::ZERO, DVec3::X), Err(GeoError::DegenerateArc));
    }

    #[test]
    fn test_nearby_points_stay_in_plane() {
        for separation in [1e-2, 1e-4, 1e-6] {
            let p1 = geo_to_sphere(1.0, 10.0, 20.0);
            let p2 = geo_to_sphere(1.0, 10.0 + separation, 20.0);
            let placement = planarize(p1, p2).unwrap();
            let chord = (p2 - p1).length();

            // The off-plane residue must be small next to the chord, not
            // just next to the radius. The floor is rounding in the rotations.
            let tolerance = 1e-9 * chord + 8.0 * f64::EPSILON;
            assert!(placement.start.z.abs() < tolerance, "{separation}: {placement:?}");
            assert!(placement.end.z.abs() < tolerance, "{separation}: {placement:?}");
            assert!(placement.start.x > 0.0);
        }
    }

    proptest! {
        #[test]
        fn prop_canonical_and_reversible(
            lon1 in -180.0f64..180.0, lat1 in -180.0f64..180.0,
            lon2 in -180.0f64..180.0, lat2 in -180.0f64..180.0,
        ) {
            let p1 = geo_to_sphere(1.0, lon1, lat1);
            let p2 = geo_to_sphere(1.0, lon2, lat2);
            prop_assume!(p1.cross(p2).length() > 1e-3);

            let placement = planarize(p1, p2).unwrap();
            prop_assert!(placement.start.z.abs() < 1e-7);
            prop_assert!(placement.end.z.abs() < 1e-7);
            prop_assert!((placement.start.y - placement.end.y).abs() < 1e-7);
            prop_assert!((placement.start.x + placement.end.x).abs() < 1e-7);
            prop_assert!(approx_eq_vec3(placement.rotation * placement.start, p1, 1e-7));
            prop_assert!(approx_eq_vec3(placement.rotation * placement.end, p2, 1e-7));
        }
    }
}
