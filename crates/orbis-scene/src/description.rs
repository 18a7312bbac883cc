//! Plain-data scene description.

use glam::{DQuat, DVec3};
use orbis_geo::{ArcCurve, MarkerPlacement};
use serde::{Deserialize, Serialize};

use crate::{SceneError, Spin};

/// Everything a renderer needs to draw the globe scene.
///
/// Earth, glow, pillars and arcs are expressed in the globe group's local
/// space; [`Spin::rotation`] carries them into world space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub camera: CameraDesc,
    pub controls: OrbitControlsDesc,
    pub ambient_light: AmbientLightDesc,
    pub earth: EarthDesc,
    pub glow: GlowDesc,
    pub pillars: Vec<PillarDesc>,
    pub arcs: Vec<ArcDesc>,
    pub spin: Spin,
}

/// Perspective camera looking at the globe center.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraDesc {
    /// Vertical field of view in degrees.
    pub fov_deg: f64,
    /// Viewport width over height.
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub position: DVec3,
}

/// Orbit controls around the globe center.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitControlsDesc {
    pub target: DVec3,
    pub enable_zoom: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AmbientLightDesc {
    pub color: u32,
    pub intensity: f64,
}

/// Textured icosahedron sphere with a Phong material.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EarthDesc {
    pub radius: f64,
    /// Icosahedron subdivision level.
    pub detail: u32,
    pub texture: String,
    pub depth_write: bool,
}

/// Additive glow sprite drawn over the earth.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlowDesc {
    pub texture: String,
    pub color: u32,
    pub opacity: f64,
    /// Sprite scale; z is always 1.
    pub scale: DVec3,
    pub transparent: bool,
    pub depth_write: bool,
    pub depth_test: bool,
    pub render_order: i32,
}

/// A light pillar: two crossed textured quads standing on a site.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PillarDesc {
    /// Site name.
    pub site: String,
    pub color: u32,
    pub texture: String,
    pub width: f64,
    pub height: f64,
    pub placement: MarkerPlacement,
    /// Corner positions of both quads, base-left, base-right, top-right,
    /// top-left.
    pub quads: [[DVec3; 4]; 2],
}

/// A flight arc between two sites.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArcDesc {
    pub from: String,
    pub to: String,
    pub curve: ArcCurve,
    /// The curve's samples in globe space, ready for a line strip.
    pub world_points: Vec<DVec3>,
}

impl SceneDescription {
    /// Step the globe spin forward by `frames` frames.
    pub fn advance(&mut self, frames: u64) {
        self.spin.advance(frames);
    }

    /// Rotation from globe space to world space at the current frame.
    #[must_use]
    pub fn group_rotation(&self) -> DQuat {
        self.spin.rotation()
    }

    /// Look up a pillar by site name.
    pub fn pillar(&self, site: &str) -> Option<&PillarDesc> {
        self.pillars.iter().find(|p| p.site == site)
    }

    /// Pretty-printed RON.
    pub fn to_ron(&self) -> Result<String, SceneError> {
        let pretty = ron::ser::PrettyConfig::new().depth_limit(4);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl ArcDesc {
    /// Globe-space position of a point travelling along the arc, `t` in
    /// `[0, 1]` from departure to arrival.
    #[must_use]
    pub fn traveller_at(&self, t: f64) -> DVec3 {
        self.curve.world_point_at(t)
    }
}
