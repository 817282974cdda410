pub mod settings;

use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::settings::Logger;

/// Query parameters accepted by list endpoints. `filter` is a
/// case-insensitive substring match on url or username.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct QueryParams {
    pub filter: Option<String>,
}

/// Installs the global tracing subscriber. When a log directory is
/// configured, output additionally goes to a daily-rolling file; the
/// returned guard must be kept alive for the duration of the process.
pub fn init_logging(logger: &Logger) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logger.level.clone()));

    if logger.directory.is_empty() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .init();
        return None;
    }

    let appender = tracing_appender::rolling::daily(&logger.directory, "credman.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}
