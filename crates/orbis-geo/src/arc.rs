//! Flight arcs: circular curves bulging out of the sphere between two sites.

use std::f64::consts::PI;

use glam::{DQuat, DVec2, DVec3};
use orbis_math::{GEOMETRY_EPSILON, angle_at_vertex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{GeoError, GeoPoint, planarize};

/// Segments an arc is sampled with unless told otherwise.
pub const DEFAULT_ARC_SEGMENTS: usize = 80;

/// Apex height above the sphere, per radian of separation, as a fraction of
/// the sphere radius.
pub const DEFAULT_ARC_BULGE: f64 = 0.15;

/// Line color used when none is configured.
pub const DEFAULT_ARC_COLOR: u32 = 0xd18547;

/// How an arc is shaped and drawn.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcOptions {
    /// Number of segments; the curve has `segments + 1` samples.
    pub segments: usize,
    /// Apex lift coefficient (see [`DEFAULT_ARC_BULGE`]).
    pub bulge: f64,
    /// Line color, `0xRRGGBB`.
    pub color: u32,
    /// Color of the point travelling along the arc, if one is drawn.
    pub fly_line_color: Option<u32>,
}

impl Default for ArcOptions {
    fn default() -> Self {
        Self {
            segments: DEFAULT_ARC_SEGMENTS,
            bulge: DEFAULT_ARC_BULGE,
            color: DEFAULT_ARC_COLOR,
            fly_line_color: None,
        }
    }
}

/// A sampled circular arc in the canonical XOY frame plus the rotation that
/// carries it onto the sphere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArcCurve {
    /// Circle center in the canonical frame (z = 0, on the Y axis).
    pub center: DVec3,
    /// Apex of the arc in the canonical frame.
    pub top: DVec3,
    /// Circle radius.
    pub radius: f64,
    /// Angle of the first sample around `center`, radians from +X.
    pub start_angle: f64,
    /// Angle of the last sample; always `π - start_angle`.
    pub end_angle: f64,
    /// Evenly spaced samples from `start_angle` to `end_angle`.
    pub points: Vec<DVec2>,
    /// Rotation from the canonical frame to sphere space.
    pub rotation: DQuat,
    /// Line color, `0xRRGGBB`.
    pub color: u32,
    /// Color of the travelling point, if any.
    pub fly_line_color: Option<u32>,
}

impl ArcCurve {
    /// Canonical-frame point at parameter `t` in `[0, 1]` (clamped), where 0
    /// is the start site and 1 the end site.
    #[must_use]
    pub fn point_at(&self, t: f64) -> DVec2 {
        let t = t.clamp(0.0, 1.0);
        let angle = self.start_angle + t * (self.end_angle - self.start_angle);
        self.center.truncate() + self.radius * DVec2::new(angle.cos(), angle.sin())
    }

    /// Sphere-space point at parameter `t`; see [`point_at`](Self::point_at).
    #[must_use]
    pub fn world_point_at(&self, t: f64) -> DVec3 {
        self.rotation * self.point_at(t).extend(0.0)
    }

    /// All samples carried into sphere space.
    #[must_use]
    pub fn world_points(&self) -> Vec<DVec3> {
        self.points
            .iter()
            .map(|p| self.rotation * p.extend(0.0))
            .collect()
    }

    /// Circle center in sphere space.
    #[must_use]
    pub fn world_center(&self) -> DVec3 {
        self.rotation * self.center
    }

    /// Apex in sphere space.
    #[must_use]
    pub fn world_top(&self) -> DVec3 {
        self.rotation * self.top
    }
}

/// Angle AOB in radians, in `[0, π]`.
///
/// # Errors
///
/// Returns [`GeoError::DegeneratePosition`] if `a` or `b` coincides with `o`.
pub fn angle_at_origin(a: DVec3, b: DVec3, o: DVec3) -> Result<f64, GeoError> {
    angle_at_vertex(a, b, o).ok_or(GeoError::DegeneratePosition)
}

/// Center of the circle through three points of the XOY plane.
///
/// Solves the perpendicular-bisector system in coordinates relative to `p1`,
/// so nearby points keep their precision; z components are ignored and the
/// result has z = 0.
///
/// # Errors
///
/// Returns [`GeoError::CollinearPoints`] when the points are collinear (or
/// coincide), which leaves the system without a solution.
pub fn circumcenter(p1: DVec3, p2: DVec3, p3: DVec3) -> Result<DVec3, GeoError> {
    let b = (p2 - p1).truncate();
    let c = (p3 - p1).truncate();
    let lb = b.length_squared();
    let lc = c.length_squared();

    // Twice the signed triangle area; relative to |b|·|c| it is the sine of
    // the angle at p1.
    let s = b.perp_dot(c);
    let scale = (lb * lc).sqrt();
    if scale == 0.0 || s.abs() <= GEOMETRY_EPSILON * scale {
        return Err(GeoError::CollinearPoints);
    }

    let x = (c.y * lb - b.y * lc) / (2.0 * s);
    let y = (b.x * lc - c.x * lb) / (2.0 * s);
    Ok(DVec3::new(p1.x + x, p1.y + y, 0.0))
}

/// Build the arc between two canonical-frame points.
///
/// `start` and `end` must lie in z = 0, mirrored about +Y with `start` on the
/// +X side, as produced by [`planarize`]. The apex sits above their midpoint
/// at `radius · (1 + θ · bulge)` from the origin, θ being their angular
/// separation, so farther sites get taller arcs. The returned curve has an
/// identity rotation.
///
/// # Errors
///
/// [`GeoError::InvalidSegments`] for zero segments,
/// [`GeoError::DegenerateArc`] if the midpoint is the origin,
/// [`GeoError::CollinearPoints`] if the apex is in line with the endpoints
/// (coincident endpoints), and
/// [`GeoError::DegeneratePosition`] if an endpoint sits on the origin or
/// the circle center.
pub fn arc_in_plane(
    radius: f64,
    start: DVec3,
    end: DVec3,
    options: &ArcOptions,
) -> Result<ArcCurve, GeoError> {
    if options.segments == 0 {
        return Err(GeoError::InvalidSegments);
    }

    let mid_dir = ((start + end) * 0.5)
        .try_normalize()
        .ok_or(GeoError::DegenerateArc)?;
    let separation = angle_at_origin(start, end, DVec3::ZERO)?;
    let top = mid_dir * (radius + separation * radius * options.bulge);

    let center = circumcenter(start, end, top)?;
    let arc_radius = (center.y - top.y).abs();

    // The start ray's angle from straight down, less a quarter turn. `start`
    // is on the +X side, so that is just its polar angle about the center.
    let to_start = (start - center).truncate();
    if to_start == DVec2::ZERO {
        return Err(GeoError::DegeneratePosition);
    }
    let start_angle = to_start.y.atan2(to_start.x);
    let end_angle = PI - start_angle;

    debug!(separation, arc_radius, start_angle, end_angle, "built arc in canonical frame");

    let step = (end_angle - start_angle) / options.segments as f64;
    let points = (0..=options.segments)
        .map(|i| {
            let angle = start_angle + step * i as f64;
            center.truncate() + arc_radius * DVec2::new(angle.cos(), angle.sin())
        })
        .collect();

    Ok(ArcCurve {
        center,
        top,
        radius: arc_radius,
        start_angle,
        end_angle,
        points,
        rotation: DQuat::IDENTITY,
        color: options.color,
        fly_line_color: options.fly_line_color,
    })
}

/// Build the flight arc between two sites on a sphere of the given radius.
///
/// The sites are projected onto the sphere, moved into the canonical frame,
/// the arc is built there, and the curve is handed back with the rotation
/// that places it over the original sites.
///
/// # Errors
///
/// [`GeoError::DegenerateArc`] for coincident or antipodal sites, plus any
/// error from [`arc_in_plane`].
pub fn build_arc(
    radius: f64,
    from: GeoPoint,
    to: GeoPoint,
    options: &ArcOptions,
) -> Result<ArcCurve, GeoError> {
    let placement = planarize(from.to_sphere(radius), to.to_sphere(radius))?;
    let mut curve = arc_in_plane(radius, placement.start, placement.end, options)?;
    curve.rotation = placement.rotation * curve.rotation;
    Ok(curve)
}
