use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::debug;

/// Raw mode plus the alternate screen for as long as the value lives.
pub struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        stdout.flush()?;

        debug!("terminal session started");
        Ok(Self { active: true })
    }

    pub fn leave(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let mut stdout = io::stdout();
        execute!(stdout, Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;

        debug!("terminal session ended");
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // restore the terminal even when unwinding
        let _ = self.leave();
    }
}
