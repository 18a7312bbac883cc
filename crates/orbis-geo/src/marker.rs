//! Surface-aligned marker placement (light pillars).

use glam::{DQuat, DVec3};
use orbis_math::rotation_between;
use serde::{Deserialize, Serialize};

use crate::{GeoError, geo_to_sphere};

/// Where a marker sits on the sphere and how it is turned.
///
/// The marker is modelled standing along its local +Z axis; `orientation`
/// turns local +Z onto the outward surface normal at `position`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerPlacement {
    /// Rotation from marker-local space to sphere space.
    pub orientation: DQuat,
    /// Marker base on the sphere surface.
    pub position: DVec3,
}

impl MarkerPlacement {
    /// Transform a point from marker-local space into sphere space.
    #[must_use]
    pub fn to_world(&self, local: DVec3) -> DVec3 {
        self.position + self.orientation * local
    }

    /// Outward direction the marker points along.
    #[must_use]
    pub fn up(&self) -> DVec3 {
        self.orientation * DVec3::Z
    }
}

/// Place a marker at a geographic site on a sphere of the given radius.
///
/// # Errors
///
/// Returns [`GeoError::DegeneratePosition`] when the site lands on the
/// sphere center (zero radius), where the surface normal is undefined.
pub fn place_marker(
    radius: f64,
    longitude: f64,
    latitude: f64,
) -> Result<MarkerPlacement, GeoError> {
    let position = geo_to_sphere(radius, longitude, latitude);
    let orientation =
        rotation_between(DVec3::Z, position).ok_or(GeoError::DegeneratePosition)?;

    Ok(MarkerPlacement {
        orientation,
        position,
    })
}

/// Sphere-space corners of a light pillar: two crossed `width × height`
/// planes standing on the surface at `placement`.
///
/// The first plane spans local XZ, the second is the same plane turned a
/// quarter turn about local Z. Corners are wound base-left, base-right,
/// top-right, top-left.
#[must_use]
pub fn pillar_quads(placement: &MarkerPlacement, width: f64, height: f64) -> [[DVec3; 4]; 2] {
    let half = width * 0.5;
    let first = [
        DVec3::new(-half, 0.0, 0.0),
        DVec3::new(half, 0.0, 0.0),
        DVec3::new(half, 0.0, height),
        DVec3::new(-half, 0.0, height),
    ];
    let quarter_turn = DQuat::from_rotation_z(std::f64::consts::FRAC_PI_2);

    let mut quads = [[DVec3::ZERO; 4]; 2];
    for (i, corner) in first.into_iter().enumerate() {
        quads[0][i] = placement.to_world(corner);
        quads[1][i] = placement.to_world(quarter_turn * corner);
    }
    quads
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbis_math::approx_eq_vec3;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_marker_points_outward() {
        let m = place_marker(1.0, 39.0, 116.0).unwrap();
        let normal = m.position.normalize();
        assert!(
            approx_eq_vec3(m.up(), normal, EPSILON),
            "up {:?} vs normal {normal:?}",
            m.up()
        );
        assert!((m.position.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_marker_on_local_up_axis_is_identity() {
        // lon 0, lat 90 maps to +Z, which is already the marker's up.
        let m = place_marker(3.0, 0.0, 90.0).unwrap();
        assert!(m.orientation.abs_diff_eq(DQuat::IDENTITY, EPSILON));
    }

    #[test]
    fn test_marker_opposite_local_up_turns_over() {
        // lon 0, lat -90 maps to -Z: the antiparallel case.
        let m = place_marker(1.0, 0.0, -90.0).unwrap();
        assert!(approx_eq_vec3(m.up(), DVec3::NEG_Z, EPSILON), "up = {:?}", m.up());
    }

    #[test]
    fn test_zero_radius_is_degenerate() {
        assert_eq!(place_marker(0.0, 10.0, 10.0), Err(GeoError::DegeneratePosition));
    }

    #[test]
    fn test_pillar_quads_stand_on_surface() {
        let m = place_marker(1.0, 34.052235, -118.243683).unwrap();
        let (width, height) = (0.05, 0.3);
        let quads = pillar_quads(&m, width, height);
        let up = m.up();

        for quad in &quads {
            // Base corners straddle the site at surface level.
            let base_mid = (quad[0] + quad[1]) * 0.5;
            assert!(approx_eq_vec3(base_mid, m.position, EPSILON));
            assert!(((quad[1] - quad[0]).length() - width).abs() < EPSILON);
            // Top corners are `height` along the outward normal.
            assert!(approx_eq_vec3(quad[3] - quad[0], up * height, EPSILON));
            assert!(approx_eq_vec3(quad[2] - quad[1], up * height, EPSILON));
        }

        // The two planes are crossed at a right angle.
        let a = quads[0][1] - quads[0][0];
        let b = quads[1][1] - quads[1][0];
        assert!(a.dot(b).abs() < EPSILON);
    }

    proptest! {
        #[test]
        fn prop_orientation_maps_up_to_normal(
            lon in -180.0f64..180.0,
            lat in -180.0f64..180.0,
            radius in 0.1f64..100.0,
        ) {
            let m = place_marker(radius, lon, lat).unwrap();
            let normal = m.position.normalize();
            prop_assert!(approx_eq_vec3(m.orientation * DVec3::Z, normal, 1e-7));
        }
    }
}
