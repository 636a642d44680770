//! Explorer controller for the interactive plotter.
//!
//! Turns [`ExplorerCommand`]s into viewport and engine calls and hands each
//! evaluated grid to the presentation layer as a [`Frame`].
//!
//! # Architecture
//!
//! - **Input**: `ExplorerCommand` values produced by an input adapter
//! - **Output**: `ExplorerPresenterPort` trait for receiving frames
//! - **Core**: the viewport mapper, escape-time engine and colour maps from `core/`

pub mod commands;
pub mod controller;
pub mod data;
pub mod errors;
pub mod ports;

pub use commands::{ExplorerCommand, IterationScale};
pub use controller::{ExplorerController, ExplorerOptions};
pub use data::frame::{Frame, FrameCell};
pub use errors::ExplorerError;
pub use ports::presenter::ExplorerPresenterPort;
