//! Configuration file support.
//!
//! The file lives at `~/.trmandelbrot/config.toml` unless `--config` says
//! otherwise. Every table and every key is optional:
//!
//! ```toml
//! [plot]
//! grid_size = 40              # 1 to 1024
//! max_iterations = 80
//! from_x = -2.0
//! to_x = 2.0
//! from_y = -2.5
//! to_y = 1.5
//! zoom_policy = "origin"      # or "centre"
//! colour_map = "escape-bands" # fire-gradient, blue-white-gradient
//!
//! [controls]
//! pan_step = 0.1
//! zoom_step = 1.2
//! zoom_step_large = 2.0
//!
//! [display]
//! cell_width = 2
//! show_escape = false
//!
//! [engine]
//! cache_capacity = 65536      # 0 = unbounded
//! parallel = false
//!
//! [log]
//! file = "~/.trmandelbrot/trmandelbrot.log"
//! level = "info"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::{error::Error, fmt};

use serde::Deserialize;

use crate::core::data::bounds::BoundsError;
use crate::core::fractals::mandelbrot::escape_cache::{CachePolicy, DEFAULT_CACHE_CAPACITY};
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::viewport::mapper::MAX_GRID_SIZE;
use crate::presenters::terminal::presenter::DEFAULT_CELL_WIDTH;

const CONFIG_DIR: &str = ".trmandelbrot";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "trmandelbrot.log";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub plot: MandelbrotConfig,
    pub controls: ControlsConfig,
    pub display: DisplayConfig,
    pub engine: EngineConfig,
    pub log: LogConfig,
}

/// Step sizes for the movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub pan_step: f64,
    pub zoom_step: f64,
    pub zoom_step_large: f64,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            pan_step: 0.1,
            zoom_step: 1.2,
            zoom_step_large: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Terminal columns per grid cell.
    pub cell_width: u16,
    pub show_escape: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            show_escape: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Zero means unbounded.
    pub cache_capacity: usize,
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            parallel: false,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn cache_policy(&self) -> CachePolicy {
        CachePolicy::from_capacity(self.cache_capacity)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub file: Option<PathBuf>,
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

impl LogConfig {
    /// The configured log file with `~` expanded, falling back to the file
    /// next to the default config.
    #[must_use]
    pub fn resolved_file(&self) -> Option<PathBuf> {
        match &self.file {
            Some(path) => Some(expand_home(path)),
            None => home_dir().map(|home| home.join(CONFIG_DIR).join(LOG_FILE)),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read config file {}: {}", path.display(), source)
            }
            Self::Parse { path, source } => {
                write!(f, "malformed config file {}: {}", path.display(), source)
            }
            Self::Invalid { field, reason } => write!(f, "invalid config {}: {}", field, reason),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid { .. } => None,
        }
    }
}

impl Config {
    /// Reads the file at `path`. A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `~/.trmandelbrot/config.toml`, when a home directory is known.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.plot.grid_size == 0 {
            return Err(invalid("plot.grid_size", "must be greater than zero"));
        }

        if self.plot.grid_size > MAX_GRID_SIZE {
            return Err(invalid(
                "plot.grid_size",
                &format!("must be at most {}", MAX_GRID_SIZE),
            ));
        }

        if self.plot.max_iterations == 0 {
            return Err(invalid("plot.max_iterations", "must be greater than zero"));
        }

        self.plot.bounds().map_err(|err| match err {
            BoundsError::NonFiniteBound { .. } => invalid("plot bounds", "must be finite"),
            BoundsError::InvalidSize { .. } => {
                invalid("plot bounds", "from_x must be below to_x and from_y below to_y")
            }
        })?;

        for (field, value) in [
            ("controls.pan_step", self.controls.pan_step),
            ("controls.zoom_step", self.controls.zoom_step),
            ("controls.zoom_step_large", self.controls.zoom_step_large),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, "must be a positive number"));
            }
        }

        if self.display.cell_width == 0 {
            return Err(invalid("display.cell_width", "must be greater than zero"));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE")
        .or_else(|| std::env::var_os("HOME"))
        .map(PathBuf::from)
}
