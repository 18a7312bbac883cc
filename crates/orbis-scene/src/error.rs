//! Scene building errors.

use orbis_geo::GeoError;

/// Errors raised while turning a config into a scene description.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// A route names a site that is not configured.
    #[error("route {from:?} -> {to:?} refers to unknown site {missing:?}")]
    UnknownSite {
        from: String,
        to: String,
        missing: String,
    },

    /// A site's pillar could not be placed.
    #[error("cannot place pillar for site {site:?}: {source}")]
    Marker {
        site: String,
        #[source]
        source: GeoError,
    },

    /// A route's arc could not be built.
    #[error("cannot build arc {from:?} -> {to:?}: {source}")]
    Arc {
        from: String,
        to: String,
        #[source]
        source: GeoError,
    },

    /// RON serialization failed.
    #[error("failed to serialize scene as RON: {0}")]
    Ron(#[from] ron::Error),

    /// JSON serialization failed.
    #[error("failed to serialize scene as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
