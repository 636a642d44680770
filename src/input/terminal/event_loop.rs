use std::io;
use std::{error::Error, fmt};

use crossterm::event::{self, Event};
use tracing::{debug, info};

use crate::controllers::explorer::commands::ExplorerCommand;
use crate::controllers::explorer::controller::ExplorerController;
use crate::controllers::explorer::errors::ExplorerError;
use crate::controllers::explorer::ports::presenter::ExplorerPresenterPort;
use crate::input::terminal::keymap::KeyMap;

pub trait EventSource {
    fn next_event(&mut self) -> io::Result<Event>;
}

/// Blocking reads from the real terminal.
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        event::read()
    }
}

#[derive(Debug)]
pub enum EventLoopError {
    Input(io::Error),
    Explorer(ExplorerError),
}

impl fmt::Display for EventLoopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(err) => write!(f, "failed to read terminal input: {}", err),
            Self::Explorer(err) => write!(f, "{}", err),
        }
    }
}

impl Error for EventLoopError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(err) => Some(err),
            Self::Explorer(err) => Some(err),
        }
    }
}

impl From<ExplorerError> for EventLoopError {
    fn from(err: ExplorerError) -> Self {
        Self::Explorer(err)
    }
}

/// Draws the first frame, then handles one event at a time until a quit
/// command arrives. Each command's frame is presented before the next event
/// is read.
pub fn run_event_loop<P, E>(
    controller: &mut ExplorerController<P>,
    keymap: &KeyMap,
    events: &mut E,
) -> Result<(), EventLoopError>
where
    P: ExplorerPresenterPort,
    E: EventSource,
{
    controller.start()?;

    loop {
        let command = match events.next_event().map_err(EventLoopError::Input)? {
            Event::Key(key) => match keymap.command_for(&key) {
                Some(command) => command,
                None => continue,
            },
            Event::Resize(columns, rows) => {
                debug!(columns, rows, "terminal resized");
                ExplorerCommand::Redraw
            }
            _ => continue,
        };

        if !controller.handle(command)? {
            info!(generation = controller.generation(), "quit requested");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::explorer::controller::ExplorerOptions;
    use crate::controllers::explorer::data::frame::Frame;
    use crate::core::data::bounds::Bounds;
    use crate::core::viewport::mapper::ViewportMapper;
    use crate::core::viewport::zoom_policy::ZoomPolicy;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::collections::VecDeque;

    struct ScriptedEvents {
        events: VecDeque<Event>,
    }

    impl ScriptedEvents {
        fn keys(codes: &[KeyCode]) -> Self {
            Self {
                events: codes
                    .iter()
                    .map(|&code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
                    .collect(),
            }
        }
    }

    impl EventSource for ScriptedEvents {
        fn next_event(&mut self) -> io::Result<Event> {
            self.events
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script finished"))
        }
    }

    #[derive(Default)]
    struct RecordingPresenter {
        frames: Vec<Frame>,
    }

    impl ExplorerPresenterPort for RecordingPresenter {
        fn present(&mut self, frame: &Frame) -> io::Result<()> {
            self.frames.push(frame.clone());
            Ok(())
        }
    }

    fn controller() -> ExplorerController<RecordingPresenter> {
        let mapper = ViewportMapper::new(Bounds::default(), 6, 40, ZoomPolicy::Origin).unwrap();
        ExplorerController::new(mapper, ExplorerOptions::default(), RecordingPresenter::default())
    }

    #[test]
    fn test_runs_commands_until_quit() {
        let mut controller = controller();
        let mut events = ScriptedEvents::keys(&[
            KeyCode::Right,
            KeyCode::Char('x'),
            KeyCode::Char(']'),
            KeyCode::Char('q'),
            KeyCode::Left,
        ]);

        run_event_loop(&mut controller, &KeyMap::default(), &mut events).unwrap();

        let frames = &controller.presenter().frames;
        assert_eq!(frames.len(), 3);
        assert!(frames[2].bell);
        assert_eq!(events.events.len(), 1);
    }

    #[test]
    fn test_resize_redraws() {
        let mut controller = controller();
        let mut events = ScriptedEvents {
            events: VecDeque::from(vec![
                Event::Resize(80, 24),
                Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            ]),
        };

        run_event_loop(&mut controller, &KeyMap::default(), &mut events).unwrap();

        let frames = &controller.presenter().frames;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].bounds, frames[1].bounds);
    }

    #[test]
    fn test_input_error_ends_loop() {
        let mut controller = controller();
        let mut events = ScriptedEvents::keys(&[KeyCode::Up]);

        let result = run_event_loop(&mut controller, &KeyMap::default(), &mut events);

        assert!(matches!(result, Err(EventLoopError::Input(_))));
        assert_eq!(controller.presenter().frames.len(), 2);
    }
}
