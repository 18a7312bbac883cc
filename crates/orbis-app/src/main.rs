//! `orbis`: build the globe scene and print its description.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p orbis-app -- --format json` for JSON output.

use clap::Parser;
use orbis_app::platform::PlatformDirs;
use orbis_app::{AppError, emit, prepare, render_scene};
use orbis_config::CliArgs;

fn run(args: &CliArgs) -> Result<(), AppError> {
    let mut dirs = PlatformDirs::resolve()?;
    if let Some(ref config_dir) = args.config {
        dirs = dirs.with_config_dir(config_dir.clone());
    }

    // Installed first so config loading is logged; the configured level is
    // applied once the config is known.
    let logging = orbis_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), None);
    tracing::info!(config_dir = %dirs.config_dir.display(), "Orbis globe scene builder");

    let config = prepare(args, &dirs)?;
    if let Some(handle) = &logging
        && let Err(e) = handle.apply_config(&config)
    {
        tracing::warn!("could not apply configured log level: {e}");
    }

    let text = render_scene(&config, args.frames, args.format)?;
    emit(&text, args.output.as_deref())
}

fn main() {
    let args = CliArgs::parse();
    if let Err(e) = run(&args) {
        eprintln!("orbis: {e}");
        std::process::exit(1);
    }
}
