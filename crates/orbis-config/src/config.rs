//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level globe configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// The earth sphere itself.
    pub globe: GlobeConfig,
    /// Atmosphere glow sprite behind the globe.
    pub glow: GlowConfig,
    /// Camera and orbit controls.
    pub camera: CameraConfig,
    /// Scene lighting.
    pub lighting: LightingConfig,
    /// Light pillar sizing and texture.
    pub pillar: PillarConfig,
    /// Flight arc shape and colors.
    pub arc: ArcConfig,
    /// Sites marked with a light pillar.
    pub sites: Vec<SiteConfig>,
    /// Flight arcs between named sites.
    pub routes: Vec<RouteConfig>,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Earth sphere configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlobeConfig {
    /// Sphere radius in scene units. Everything else scales with it.
    pub radius: f64,
    /// Icosahedron subdivision level of the sphere mesh.
    pub detail: u32,
    /// Equirectangular earth texture.
    pub texture: String,
    /// Spin about the Y axis per rendered frame, in radians.
    pub spin_rate: f64,
    /// Write the sphere to the depth buffer.
    pub depth_write: bool,
}

/// Glow sprite configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlowConfig {
    /// Radial glow texture.
    pub texture: String,
    /// Tint, `0xRRGGBB`.
    pub color: u32,
    /// Opacity (0.0 - 1.0).
    pub opacity: f64,
    /// Sprite size relative to the globe radius.
    pub scale: f64,
    /// Draw order; the glow is drawn after the earth.
    pub render_order: i32,
}

/// Camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_deg: f64,
    /// Near clipping plane.
    pub near: f64,
    /// Far clipping plane.
    pub far: f64,
    /// Distance from the globe center along +Z.
    pub distance: f64,
    /// Viewport width in logical pixels.
    pub width: u32,
    /// Viewport height in logical pixels.
    pub height: u32,
    /// Allow zooming with the orbit controls.
    pub enable_zoom: bool,
}

/// Lighting configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightingConfig {
    /// Ambient light color, `0xRRGGBB`.
    pub ambient_color: u32,
    /// Ambient light intensity.
    pub ambient_intensity: f64,
}

/// Light pillar configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PillarConfig {
    /// Pillar texture.
    pub texture: String,
    /// Pillar width as a fraction of the globe radius.
    pub width_ratio: f64,
    /// Pillar height as a fraction of the globe radius.
    pub height_ratio: f64,
}

/// Flight arc configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArcConfig {
    /// Segments per arc; each arc has `segments + 1` samples.
    pub segments: usize,
    /// Apex lift per radian of separation, relative to the globe radius.
    pub bulge: f64,
    /// Arc line color, `0xRRGGBB`.
    pub color: u32,
    /// Color of the point travelling along the arc.
    pub fly_line_color: Option<u32>,
}

/// A named site on the globe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Name used by routes to refer to this site.
    pub name: String,
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Pillar color, `0xRRGGBB`.
    pub color: u32,
}

/// A flight arc between two named sites.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteConfig {
    /// Name of the departure site.
    pub from: String,
    /// Name of the arrival site.
    pub to: String,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Config {
    /// Look up a site by name.
    pub fn site(&self, name: &str) -> Option<&SiteConfig> {
        self.sites.iter().find(|s| s.name == name)
    }
}

// --- Default implementations ---

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            detail: 12,
            texture: "earth.jpg".to_string(),
            spin_rate: 0.001,
            depth_write: true,
        }
    }
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            texture: "glow.png".to_string(),
            color: 0x4390d1,
            opacity: 0.7,
            scale: 2.5,
            render_order: 1,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 75.0,
            near: 0.1,
            far: 1000.0,
            distance: 5.0,
            width: 1280,
            height: 720,
            enable_zoom: false,
        }
    }
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_color: 0xffffff,
            ambient_intensity: 2.0,
        }
    }
}

impl Default for PillarConfig {
    fn default() -> Self {
        Self {
            texture: "light.png".to_string(),
            width_ratio: 0.05,
            height_ratio: 0.3,
        }
    }
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self {
            segments: 80,
            bulge: 0.15,
            color: 0xffffff,
            fly_line_color: Some(0x000000),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// The two demo sites, joined by a single route.
fn default_sites() -> Vec<SiteConfig> {
    vec![
        SiteConfig {
            name: "Beijing".to_string(),
            lon: 39.0,
            lat: 116.0,
            color: 0xffffff,
        },
        SiteConfig {
            name: "Los Angeles".to_string(),
            lon: 34.052235,
            lat: -118.243683,
            color: 0x00ffff,
        },
    ]
}

fn default_routes() -> Vec<RouteConfig> {
    vec![RouteConfig {
        from: "Beijing".to_string(),
        to: "Los Angeles".to_string(),
    }]
}

impl Config {
    /// Default configuration including the demo sites and route.
    pub fn with_demo_sites() -> Self {
        Self {
            sites: default_sites(),
            routes: default_routes(),
            ..Self::default()
        }
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file
    /// seeded with the demo sites.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let config = read_config(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::with_demo_sites();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path.clone(),
            source,
        })?;
        Ok(())
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
