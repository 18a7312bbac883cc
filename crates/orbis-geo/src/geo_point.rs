//! Geographic coordinates and their projection onto a sphere.

use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A geographic site given as longitude/latitude in degrees.
///
/// No range is enforced: the sphere mapping is periodic, so values outside
/// `[-180, 180]` / `[-90, 90]` simply wrap around.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
}

impl GeoPoint {
    /// Create a new geographic point.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Position of this site on a sphere of the given radius.
    #[must_use]
    pub fn to_sphere(self, radius: f64) -> DVec3 {
        geo_to_sphere(radius, self.longitude, self.latitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lon {:.4}\u{00B0}, lat {:.4}\u{00B0}",
            self.longitude, self.latitude
        )
    }
}

/// Map a longitude/latitude pair (degrees) to a point at distance `radius`
/// from the origin.
///
/// The globe texture is wrapped so that longitude drives the Y axis:
///
/// ```text
/// x = -r cos(lon) cos(lat)
/// y =  r sin(lon)
/// z =  r cos(lon) sin(lat)
/// ```
///
/// Marker and arc placement depend on this exact convention, which is not
/// the textbook spherical mapping.
#[inline]
#[must_use]
pub fn geo_to_sphere(radius: f64, longitude: f64, latitude: f64) -> DVec3 {
    let lon = longitude.to_radians();
    let lat = latitude.to_radians();

    DVec3::new(
        -radius * lon.cos() * lat.cos(),
        radius * lon.sin(),
        radius * lon.cos() * lat.sin(),
    )
}
