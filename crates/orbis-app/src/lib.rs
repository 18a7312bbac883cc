//! Globe scene builder application: config in, scene description out.

pub mod platform;

use std::io::Write;
use std::path::{Path, PathBuf};

use orbis_config::{CliArgs, Config, ConfigError, OutputFormat};
use orbis_scene::{SceneDescription, SceneError, build_scene};
use tracing::info;

use crate::platform::{PlatformDirs, PlatformError};

/// Anything that can stop a run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error("failed to write scene to {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolve directories, load the config and apply CLI overrides.
///
/// # Errors
///
/// Fails if the directories cannot be created or the config cannot be read.
pub fn prepare(args: &CliArgs, dirs: &PlatformDirs) -> Result<Config, AppError> {
    dirs.create_dirs()?;
    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(args);
    Ok(config)
}

/// Build the scene for `config`, spun forward by `frames`, and render it in
/// the requested format.
///
/// # Errors
///
/// Fails if the scene cannot be built or serialized.
pub fn render_scene(
    config: &Config,
    frames: u64,
    format: OutputFormat,
) -> Result<String, AppError> {
    let mut scene: SceneDescription = build_scene(config)?;
    scene.advance(frames);
    info!(frames, angle = scene.spin.angle, "advanced globe spin");

    let text = match format {
        OutputFormat::Ron => scene.to_ron()?,
        OutputFormat::Json => scene.to_json()?,
    };
    Ok(text)
}

/// Write the rendered scene to `output`, or stdout when `None`.
///
/// # Errors
///
/// Returns [`AppError::Output`] if the destination cannot be written.
pub fn emit(text: &str, output: Option<&Path>) -> Result<(), AppError> {
    match output {
        Some(path) => {
            std::fs::write(path, text).map_err(|source| AppError::Output {
                path: path.to_path_buf(),
                source,
            })?;
            info!("Wrote scene description to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}").map_err(|source| AppError::Output {
                path: PathBuf::from("<stdout>"),
                source,
            })?;
        }
    }
    Ok(())
}
