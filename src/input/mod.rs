//! Input adapters for the plotter.
//!
//! This module contains adapters that receive input from various sources
//! and translate them into explorer commands.

pub mod terminal;
