use std::env;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("cannot open trace log {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("another trace subscriber is already installed")]
    Install(#[from] SetGlobalDefaultError),
}

pub fn tracing_log_path() -> PathBuf {
    env::var("OVERLAY_TRACE_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("overlay_demo_trace.log"))
}

/// An explicit level wins over `RUST_LOG`.
pub fn env_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

fn open_log_file(path: &Path) -> Result<File, TelemetryError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| TelemetryError::Open {
            path: path.to_path_buf(),
            source,
        })
}

fn install(level: Option<&str>, path: &Path) -> Result<(), TelemetryError> {
    let file = open_log_file(path)?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Sends trace output to a file; the terminal belongs to the demo UI.
///
/// Must run before the terminal enters raw mode: a failure is reported on stderr
/// and the demo carries on without tracing.
pub fn init_tracing(level: Option<&str>) {
    TRACING_INIT.get_or_init(|| {
        if let Err(err) = install(level, &tracing_log_path()) {
            eprintln!("tracing disabled: {err}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::{TelemetryError, env_filter, open_log_file};
    use std::env;

    #[test]
    fn explicit_level_overrides_environment() {
        let filter = env_filter(Some("debug"));
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn unwritable_log_path_reports_the_path() {
        let path = env::temp_dir()
            .join("overlay_demo_missing_dir")
            .join("nested")
            .join("trace.log");
        let err = open_log_file(&path).expect_err("parent directory does not exist");
        assert!(matches!(err, TelemetryError::Open { .. }));
        assert!(err.to_string().contains("trace.log"));
    }
}
