//! File logging via `tracing-subscriber`.
//!
//! The terminal belongs to the plot, so log lines only ever go to a file.
//! `TRMANDELBROT_LOG` overrides the configured level with any `EnvFilter`
//! directive, e.g. `TRMANDELBROT_LOG=trmandelbrot=debug`.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::{error::Error, fmt};

use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::LogConfig;

pub const LOG_ENV: &str = "TRMANDELBROT_LOG";

#[derive(Debug)]
pub enum LoggingError {
    Open { path: PathBuf, source: io::Error },
    Filter(ParseError),
    Install(SetGlobalDefaultError),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "cannot open log file {}: {}", path.display(), source)
            }
            Self::Filter(err) => write!(f, "invalid log filter: {}", err),
            Self::Install(err) => write!(f, "cannot install logger: {}", err),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Filter(err) => Some(err),
            Self::Install(err) => Some(err),
        }
    }
}

/// Installs the global subscriber. Without a resolvable log file nothing is
/// installed and the `tracing` macros become no-ops.
pub fn init_logging(config: &LogConfig) -> Result<Option<PathBuf>, LoggingError> {
    let Some(path) = config.resolved_file() else {
        return Ok(None);
    };

    let filter = build_filter(std::env::var(LOG_ENV).ok().as_deref(), &config.level)?;

    let file = open_log_file(&path).map_err(|source| LoggingError::Open {
        path: path.clone(),
        source,
    })?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).map_err(LoggingError::Install)?;

    Ok(Some(path))
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// The environment directive wins over the configured level.
pub(crate) fn build_filter(env: Option<&str>, level: &str) -> Result<EnvFilter, LoggingError> {
    let directives = match env {
        Some(directive) if !directive.trim().is_empty() => directive,
        _ => level,
    };

    EnvFilter::try_new(directives).map_err(LoggingError::Filter)
}
