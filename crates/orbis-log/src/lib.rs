//! Structured logging for the globe scene builder.
//!
//! Console output goes through `tracing-subscriber`'s fmt layer; debug builds
//! can additionally write JSON lines to `orbis.log` for later inspection. The
//! level comes from `RUST_LOG` when set, otherwise from `debug.log_level` in
//! the config.

use orbis_config::Config;
use std::path::Path;
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

/// Filter used when neither `RUST_LOG` nor the config names a level.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "orbis.log";

/// Handle to the installed subscriber's level filter.
///
/// Logging is usually installed before the config is read, so that config
/// file messages are captured; [`apply_config`](Self::apply_config) then
/// switches to the configured level.
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
}

impl LogHandle {
    /// Switch to the config's `debug.log_level`.
    ///
    /// `RUST_LOG` still wins: when it is set nothing changes and `Ok(false)`
    /// is returned.
    ///
    /// # Errors
    ///
    /// Fails if the subscriber holding the filter has been dropped.
    pub fn apply_config(&self, config: &Config) -> Result<bool, reload::Error> {
        if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
            return Ok(false);
        }
        self.filter.reload(EnvFilter::new(filter_for(Some(config))))?;
        Ok(true)
    }
}

/// Install the global tracing subscriber.
///
/// * `log_dir` - Directory for the JSON log file (debug builds only)
/// * `debug_build` - Whether to also log to a file
/// * `config` - Configuration providing the fallback log level
///
/// Returns `None` if a global subscriber was already installed, in which
/// case the existing one is left in place. Records from the `log` crate are
/// forwarded to the subscriber.
///
/// ```no_run
/// use orbis_config::Config;
/// use orbis_log::init_logging;
///
/// let handle = init_logging(None, false, None);
/// let config = Config::default();
/// if let Some(handle) = handle {
///     handle.apply_config(&config).ok();
/// }
/// ```
pub fn init_logging(
    log_dir: Option<&Path>,
    debug_build: bool,
    config: Option<&Config>,
) -> Option<LogHandle> {
    let filter_str = filter_for(config);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));
    let (env_filter, filter) = reload::Layer::new(env_filter);

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr) // stdout carries the scene description
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    let installed = if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE_NAME))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).try_init().is_ok()
    } else {
        subscriber.try_init().is_ok()
    };

    installed.then_some(LogHandle { filter })
}

/// Filter string for the given config: its `debug.log_level` if set,
/// otherwise [`DEFAULT_FILTER`].
pub fn filter_for(config: Option<&Config>) -> String {
    config
        .map(|c| c.debug.log_level.trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// An `EnvFilter` built from [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
