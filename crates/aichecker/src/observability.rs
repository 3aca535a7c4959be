//! Logging and tracing setup for the binary.
//!
//! Human-readable logs go to stderr so stdout stays clean for reports and
//! JSON. When a log file location is known (explicit path, log directory,
//! or config `log_dir`), a JSON-lines layer is added through a
//! non-blocking `tracing-appender` writer.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, filter_fn};
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// Explicit log file path.
const ENV_LOG_PATH: &str = "AICHECKER_LOG_PATH";
/// Log directory; the file name is [`LOG_FILE_NAME`].
const ENV_LOG_DIR: &str = "AICHECKER_LOG_DIR";
/// File name used inside a log directory.
const LOG_FILE_NAME: &str = "aichecker.jsonl";

/// Target for events that only belong in the log file. `main` already
/// prints fatal errors to stderr itself.
pub const FILE_ONLY_TARGET: &str = "aichecker::fatal";

/// Where to write the JSON-lines log, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Full path of the log file. `None` disables file logging.
    pub log_file: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log file from the environment, falling back to `config_log_dir`.
    ///
    /// Precedence: `AICHECKER_LOG_PATH`, then `AICHECKER_LOG_DIR`, then the
    /// configured directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(ENV_LOG_PATH).map(PathBuf::from),
            std::env::var_os(ENV_LOG_DIR).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        explicit_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let log_file = explicit_path
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| {
                env_dir
                    .filter(|d| !d.as_os_str().is_empty())
                    .or(config_dir)
                    .map(|dir| dir.join(LOG_FILE_NAME))
            });
        Self { log_file }
    }
}

/// Build the stderr filter from CLI flags and the configured level.
///
/// `-q` wins over everything; `-v`/`-vv` raise the level; otherwise
/// `RUST_LOG` applies, then the configured level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let directive = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => {
            if let Ok(filter) = EnvFilter::try_from_default_env() {
                return filter;
            }
            config_level
        }
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    EnvFilter::new(directive)
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive for
/// the whole process.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter_fn(|meta| meta.target() != FILE_ONLY_TARGET));

    let Some(ref path) = config.log_file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init()
            .context("failed to install tracing subscriber")?;
        return Ok(None);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let file_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(Some(guard))
}
