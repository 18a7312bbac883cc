//! Double-precision vector and quaternion helpers for globe geometry.
//!
//! Thin layer over `glam`'s `DVec3`/`DQuat` that pins down the degenerate
//! cases (zero vectors, parallel and antiparallel directions, `acos` domain)
//! instead of leaving them to NaN propagation.

mod angle;
mod rotation;

pub use angle::{angle_at_vertex, angle_between, clamp_cos};
pub use glam::{DQuat, DVec2, DVec3};
pub use rotation::{rotation_between, rotation_between_unit_vectors};

/// Lengths and dot-product margins below this are treated as zero.
pub const GEOMETRY_EPSILON: f64 = 1e-10;

/// Returns true if all components are within `epsilon` of the other.
pub fn approx_eq_vec3(a: DVec3, b: DVec3, epsilon: f64) -> bool {
    (a.x - b.x).abs() < epsilon && (a.y - b.y).abs() < epsilon && (a.z - b.z).abs() < epsilon
}
