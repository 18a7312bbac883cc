//! Spherical geometry for globe decoration: geographic coordinates to sphere
//! points, surface-aligned marker placement, and outward-bulging flight arcs
//! between two sites.
//!
//! Everything here is a pure function of its inputs. Arcs are built in a
//! canonical frame (both endpoints in the XOY plane, symmetric about +Y) and
//! carry the rotation that moves them back onto the sphere.

mod arc;
mod error;
mod geo_point;
mod marker;
mod planarize;

pub use arc::{
    ArcCurve, ArcOptions, DEFAULT_ARC_BULGE, DEFAULT_ARC_COLOR, DEFAULT_ARC_SEGMENTS,
    angle_at_origin, arc_in_plane, build_arc, circumcenter,
};
pub use error::GeoError;
pub use geo_point::{GeoPoint, geo_to_sphere};
pub use marker::{MarkerPlacement, pillar_quads, place_marker};
pub use planarize::{ArcPlacement, planarize};
