//! Configuration for the globe scene builder.
//!
//! Settings persist to disk as a RON file, can be overridden from the command
//! line via clap, and deserialize with per-section defaults so older or
//! partial files keep loading.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, OutputFormat};
pub use config::{
    ArcConfig, CameraConfig, Config, DebugConfig, GlobeConfig, GlowConfig, LightingConfig,
    PillarConfig, RouteConfig, SiteConfig,
};
pub use error::ConfigError;
