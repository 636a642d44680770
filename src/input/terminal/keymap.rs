use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::ControlsConfig;
use crate::controllers::explorer::commands::{ExplorerCommand, IterationScale};

/// Translates key presses into explorer commands using the configured steps.
///
/// Up moves towards smaller imaginary values because row 0 is drawn at the
/// top and maps to `from_y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyMap {
    pan_step: f64,
    zoom_step: f64,
    zoom_step_large: f64,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new(&ControlsConfig::default())
    }
}

impl KeyMap {
    #[must_use]
    pub fn new(controls: &ControlsConfig) -> Self {
        Self {
            pan_step: controls.pan_step,
            zoom_step: controls.zoom_step,
            zoom_step_large: controls.zoom_step_large,
        }
    }

    #[must_use]
    pub fn command_for(&self, key: &KeyEvent) -> Option<ExplorerCommand> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(ExplorerCommand::Quit),
                KeyCode::Char('l') => Some(ExplorerCommand::Redraw),
                _ => None,
            };
        }

        let step = self.pan_step;
        let command = match key.code {
            KeyCode::Up => ExplorerCommand::Pan { dx: 0.0, dy: -step },
            KeyCode::Down => ExplorerCommand::Pan { dx: 0.0, dy: step },
            KeyCode::Left => ExplorerCommand::Pan { dx: -step, dy: 0.0 },
            KeyCode::Right => ExplorerCommand::Pan { dx: step, dy: 0.0 },
            KeyCode::Char(']') => ExplorerCommand::Zoom(-self.zoom_step),
            KeyCode::Char('[') => ExplorerCommand::Zoom(self.zoom_step),
            KeyCode::Char('}') => ExplorerCommand::Zoom(-self.zoom_step_large),
            KeyCode::Char('{') => ExplorerCommand::Zoom(self.zoom_step_large),
            KeyCode::Char('e') => ExplorerCommand::ToggleEscape,
            KeyCode::Char('c') => ExplorerCommand::CycleColourMap,
            KeyCode::Char('+') | KeyCode::Char('=') => {
                ExplorerCommand::ScaleIterations(IterationScale::Double)
            }
            KeyCode::Char('-') => ExplorerCommand::ScaleIterations(IterationScale::Halve),
            KeyCode::Char('0') | KeyCode::Home => ExplorerCommand::Reset,
            KeyCode::Char('q') | KeyCode::Esc => ExplorerCommand::Quit,
            _ => return None,
        };

        Some(command)
    }
}
