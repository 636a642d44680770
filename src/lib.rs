//! trmandelbrot: plots the Mandelbrot set as a grid of coloured terminal
//! cells, with pan and zoom from the keyboard.
//!
//! The core is two pieces: the escape-time calculation
//! ([`escape`], [`EscapeTimeEngine`]) and the [`ViewportMapper`] that turns a
//! region of the complex plane into a grid of points. Everything else is an
//! adapter around them.

pub mod cli;
pub mod config;
pub mod controllers;
pub mod core;
pub mod input;
pub mod logging;
pub mod presenters;

pub use crate::config::Config;
pub use crate::controllers::explorer::{
    ExplorerCommand, ExplorerController, ExplorerError, ExplorerOptions, ExplorerPresenterPort,
    Frame, FrameCell, IterationScale,
};
pub use crate::core::data::bounds::Bounds;
pub use crate::core::data::cell::Cell;
pub use crate::core::data::escape_result::EscapeResult;
pub use crate::core::data::point::Point;
pub use crate::core::fractals::mandelbrot::algorithm::escape;
pub use crate::core::fractals::mandelbrot::engine::EscapeTimeEngine;
pub use crate::core::fractals::mandelbrot::escape_cache::CachePolicy;
pub use crate::core::viewport::errors::ViewportError;
pub use crate::core::viewport::mapper::ViewportMapper;
pub use crate::core::viewport::zoom_policy::ZoomPolicy;
pub use crate::input::terminal::{CrosstermEvents, KeyMap, run_event_loop};
pub use crate::presenters::terminal::{TerminalPresenter, TerminalSession};
