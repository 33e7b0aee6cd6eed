//! File logging through tracing
//!
//! The dashboard owns the terminal, so log lines go to a daily rolling file
//! under the local data directory. `CDASH_LOG` takes `EnvFilter` directives:
//!
//! ```bash
//! CDASH_LOG=debug cdash
//! CDASH_LOG=cdash_api=trace,warn cdash /users
//! ```

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "CDASH_LOG";

/// Rolling file name prefix; the appender adds the date
pub const LOG_FILE_PREFIX: &str = "cdash.log";

const DEFAULT_FILTER: &str =
    "client_dashboard=info,cdash_core=info,cdash_api=info,cdash_app=info,cdash_tui=info,warn";

/// Install the global subscriber writing to [`log_directory`]
pub fn init() -> Result<()> {
    let log_dir = log_directory(dirs::data_local_dir().as_deref());
    std::fs::create_dir_all(&log_dir)?;

    let directives = std::env::var(LOG_ENV_VAR).ok();
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    tracing_subscriber::registry()
        .with(filter_from(directives.as_deref()))
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_dir = %log_dir.display(),
        "Client Dashboard starting"
    );
    if let Some(raw) = directives.filter(|raw| EnvFilter::try_new(raw).is_err()) {
        tracing::warn!("Ignoring invalid {}={:?}, using defaults", LOG_ENV_VAR, raw);
    }

    Ok(())
}

/// `<data_dir>/client-dashboard/logs`, relative to the working directory when
/// the platform has no data directory
pub fn log_directory(data_dir: Option<&Path>) -> PathBuf {
    data_dir
        .unwrap_or_else(|| Path::new("."))
        .join("client-dashboard")
        .join("logs")
}

/// Filter from user directives; missing or unparsable input keeps the defaults
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
