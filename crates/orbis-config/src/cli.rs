//! Command-line argument parsing for the globe scene builder.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::Config;

/// Serialization format for the emitted scene description.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rusty Object Notation.
    #[default]
    Ron,
    /// JSON.
    Json,
}

/// Globe scene builder command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "orbis", about = "Build a globe scene with light pillars and flight arcs")]
pub struct CliArgs {
    /// Globe radius.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Segments per flight arc.
    #[arg(long)]
    pub segments: Option<usize>,

    /// Arc apex lift per radian of separation.
    #[arg(long)]
    pub bulge: Option<f64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the scene description here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Ron)]
    pub format: OutputFormat,

    /// Advance the globe spin by this many frames before emitting.
    #[arg(long, default_value_t = 0)]
    pub frames: u64,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(radius) = args.radius {
            self.globe.radius = radius;
        }
        if let Some(segments) = args.segments {
            self.arc.segments = segments;
        }
        if let Some(bulge) = args.bulge {
            self.arc.bulge = bulge;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
