//! Engine-independent description of the globe scene.
//!
//! [`build_scene`] turns a [`Config`](orbis_config::Config) into a
//! [`SceneDescription`]: camera, lights, the textured earth with its glow,
//! one light pillar per site and one flight arc per route. Geometry is
//! resolved to plain numbers so any renderer can consume it.

mod build;
mod description;
mod error;
mod spin;

pub use build::build_scene;
pub use description::{
    AmbientLightDesc, ArcDesc, CameraDesc, EarthDesc, GlowDesc, OrbitControlsDesc, PillarDesc,
    SceneDescription,
};
pub use error::SceneError;
pub use spin::Spin;
