use std::path::PathBuf;
use std::{error::Error, fmt};

use crate::config::Config;
use crate::core::viewport::zoom_policy::ZoomPolicy;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq)]
pub enum CliAction {
    Run(CliOptions),
    Help,
    Version,
}

/// Command-line overrides. Anything left unset keeps the config file value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CliOptions {
    pub config_path: Option<PathBuf>,
    pub grid_size: Option<u32>,
    pub max_iterations: Option<u32>,
    pub parallel: bool,
    pub centre_zoom: bool,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    MissingValue(String),
    InvalidValue { flag: String, value: String },
    UnknownArgument(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue(flag) => write!(f, "missing value for {}", flag),
            Self::InvalidValue { flag, value } => {
                write!(f, "invalid value '{}' for {}", value, flag)
            }
            Self::UnknownArgument(arg) => write!(f, "unknown argument '{}'", arg),
        }
    }
}

impl Error for CliError {}

/// Parses the arguments after the program name.
pub fn parse_args<I>(args: I) -> Result<CliAction, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliAction::Help),
            "-v" | "--version" => return Ok(CliAction::Version),
            "-c" | "--config" => {
                options.config_path = Some(PathBuf::from(value_for(&arg, args.next())?));
            }
            "-s" | "--size" => {
                options.grid_size = Some(number_for(&arg, args.next())?);
            }
            "-i" | "--iterations" => {
                options.max_iterations = Some(number_for(&arg, args.next())?);
            }
            "-p" | "--parallel" => options.parallel = true,
            "--centre-zoom" | "--center-zoom" => options.centre_zoom = true,
            "--log" => {
                options.log_file = Some(PathBuf::from(value_for(&arg, args.next())?));
            }
            _ => return Err(CliError::UnknownArgument(arg)),
        }
    }

    Ok(CliAction::Run(options))
}

impl CliOptions {
    pub fn apply(&self, config: &mut Config) {
        if let Some(grid_size) = self.grid_size {
            config.plot.grid_size = grid_size;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.plot.max_iterations = max_iterations;
        }
        if self.parallel {
            config.engine.parallel = true;
        }
        if self.centre_zoom {
            config.plot.zoom_policy = ZoomPolicy::Centre;
        }
        if let Some(log_file) = &self.log_file {
            config.log.file = Some(log_file.clone());
        }
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, CliError> {
    value.ok_or_else(|| CliError::MissingValue(flag.to_string()))
}

fn number_for(flag: &str, value: Option<String>) -> Result<u32, CliError> {
    let value = value_for(flag, value)?;

    value.parse().map_err(|_| CliError::InvalidValue {
        flag: flag.to_string(),
        value,
    })
}

pub fn help_text() -> String {
    format!(
        "\
trmandelbrot {VERSION} - A terminal Mandelbrot set plotter

Usage: trmandelbrot [OPTIONS]

Options:
  -c, --config <FILE>      Config file (default: ~/.trmandelbrot/config.toml)
  -s, --size <N>           Grid size in cells per side (1-1024)
  -i, --iterations <N>     Maximum iterations per point
  -p, --parallel           Evaluate grid rows on all cores
      --centre-zoom        Zoom around the view centre instead of the origin
      --log <FILE>         Log file (default: ~/.trmandelbrot/trmandelbrot.log)
  -v, --version            Show version
  -h, --help               Show this help

Keys:
  Arrows                   Move the view
  ] / [                    Zoom in / out
  }} / {{                    Zoom in / out faster
  e                        Toggle escape counts
  c                        Cycle colour map
  + / -                    Double / halve max iterations
  0, Home                  Reset the view
  q, Esc, Ctrl-C           Quit

Logging: set TRMANDELBROT_LOG to override the configured level.
"
    )
}
