//! Port definitions for the explorer controller.

pub mod presenter;
