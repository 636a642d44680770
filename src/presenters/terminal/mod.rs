//! Crossterm front end: draws frames and owns the terminal modes.

pub mod presenter;
pub mod session;

pub use presenter::TerminalPresenter;
pub use session::TerminalSession;
