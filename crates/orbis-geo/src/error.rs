//! Geometry error types.

/// Inputs for which the construction has no unique answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeoError {
    /// The two arc endpoints coincide or are antipodal, so they do not span
    /// a unique plane through the sphere center.
    #[error("arc endpoints are coincident or antipodal")]
    DegenerateArc,

    /// The three points defining the arc circle are collinear.
    #[error("arc points are collinear, circumcenter is undefined")]
    CollinearPoints,

    /// A point sits on the center it is measured from (e.g. a zero radius),
    /// so it has no direction.
    #[error("point has no direction from its reference center")]
    DegeneratePosition,

    /// An arc must be sampled with at least one segment.
    #[error("arc needs at least one segment")]
    InvalidSegments,
}
