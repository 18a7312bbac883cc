//! Angles between directions, with the `acos` domain guarded.

use std::f64::consts::PI;

use glam::DVec3;
use tracing::{debug, warn};

use crate::GEOMETRY_EPSILON;

/// Overshoot past ±1 that is still considered ordinary round-off.
const ROUND_OFF_OVERSHOOT: f64 = 1e-6;

/// Clamp a cosine into `[-1, 1]` before it reaches `acos`.
///
/// Values outside the range are clamped and logged: round-off overshoot at
/// `debug`, anything larger (usually an unnormalised input) at `warn`. The
/// computation always proceeds with the clamped value.
#[must_use]
pub fn clamp_cos(value: f64) -> f64 {
    if (-1.0..=1.0).contains(&value) {
        return value;
    }

    let overshoot = value.abs() - 1.0;
    if overshoot > ROUND_OFF_OVERSHOOT {
        warn!(value, overshoot, "cosine outside [-1, 1], clamping");
    } else {
        debug!(value, overshoot, "cosine round-off outside [-1, 1], clamping");
    }
    value.clamp(-1.0, 1.0)
}

/// Cosine beyond which `acos` is too flat to resolve the angle and the chord
/// between the unit vectors is used instead.
const NEAR_PARALLEL_COS: f64 = 0.9;

/// Angle in radians between two directions, in `[0, π]`.
///
/// Returns `None` when either vector is (near) zero-length, since the
/// direction is undefined. Nearly parallel or antiparallel directions are
/// resolved from the chord `2·asin(|â - b̂| / 2)`, which keeps full relative
/// precision for tiny angles.
#[must_use]
pub fn angle_between(a: DVec3, b: DVec3) -> Option<f64> {
    let a = a.try_normalize()?;
    let b = b.try_normalize()?;
    let cos = clamp_cos(a.dot(b));
    let angle = if cos > NEAR_PARALLEL_COS {
        2.0 * (0.5 * (a - b).length()).asin()
    } else if cos < -NEAR_PARALLEL_COS {
        PI - 2.0 * (0.5 * (a + b).length()).asin()
    } else {
        cos.acos()
    };
    Some(angle)
}

/// Angle AOB in radians: the angle at vertex `o` between the rays towards
/// `a` and `b`.
///
/// Returns `None` if `a` or `b` coincides with `o`.
#[must_use]
pub fn angle_at_vertex(a: DVec3, b: DVec3, o: DVec3) -> Option<f64> {
    let oa = a - o;
    let ob = b - o;
    if oa.length_squared() < GEOMETRY_EPSILON * GEOMETRY_EPSILON
        || ob.length_squared() < GEOMETRY_EPSILON * GEOMETRY_EPSILON
    {
        return None;
    }
    angle_between(oa, ob)
}
