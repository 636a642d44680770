pub mod event_loop;
pub mod keymap;

pub use event_loop::{CrosstermEvents, EventLoopError, EventSource, run_event_loop};
pub use keymap::KeyMap;
