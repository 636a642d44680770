use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo},
    queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal::{Clear, ClearType},
};

use crate::controllers::explorer::data::frame::{Frame, FrameCell};
use crate::controllers::explorer::ports::presenter::ExplorerPresenterPort;
use crate::core::data::colour::Colour;

pub const DEFAULT_CELL_WIDTH: u16 = 2;

const FOOTER: &str = "↑↓←→ Move  ] In  [ Out  } In+  { Out+  e Toggle #s  c Colours  +/- Iterations  0 Reset  q Quit";

const BELL: &str = "\x07";

/// Draws each frame as a block of coloured cells, one terminal row per grid
/// row, with a title above and a status line and key help below.
pub struct TerminalPresenter<W: Write> {
    out: W,
    cell_width: u16,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, cell_width: u16) -> Self {
        Self {
            out,
            cell_width: cell_width.max(1),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        queue!(
            self.out,
            Hide,
            Clear(ClearType::All),
            MoveTo(0, 0),
            SetAttribute(Attribute::Bold),
            Print(frame.title()),
            SetAttribute(Attribute::Reset)
        )?;

        for (index, row) in frame.rows().enumerate() {
            queue!(self.out, MoveTo(0, screen_row(index + 1)))?;
            for cell in row {
                self.draw_cell(cell, frame.show_escape)?;
            }
            queue!(self.out, ResetColor)?;
        }

        let below = screen_row(frame.grid_size as usize + 1);
        queue!(
            self.out,
            MoveTo(0, below),
            Print(status_line(frame)),
            MoveTo(0, below.saturating_add(1)),
            SetAttribute(Attribute::Dim),
            Print(FOOTER),
            SetAttribute(Attribute::Reset)
        )?;

        if frame.bell {
            queue!(self.out, Print(BELL))?;
        }

        self.out.flush()
    }

    fn draw_cell(&mut self, cell: &FrameCell, show_escape: bool) -> io::Result<()> {
        let label = cell_label(cell, show_escape, self.cell_width);

        queue!(
            self.out,
            SetBackgroundColor(to_terminal_colour(cell.colour)),
            SetForegroundColor(label_colour(cell.colour)),
            Print(label)
        )
    }
}

impl<W: Write> ExplorerPresenterPort for TerminalPresenter<W> {
    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        self.draw(frame)
    }
}

fn screen_row(row: usize) -> u16 {
    u16::try_from(row).unwrap_or(u16::MAX)
}

/// The escape count right-aligned in the cell, or blanks when labels are off.
/// Counts wider than the cell keep their trailing digits.
pub(crate) fn cell_label(cell: &FrameCell, show_escape: bool, cell_width: u16) -> String {
    let width = cell_width as usize;

    if !show_escape {
        return " ".repeat(width);
    }

    let digits = cell.result.escape_count().to_string();
    let visible = &digits[digits.len().saturating_sub(width)..];

    format!("{:>width$}", visible, width = width)
}

pub(crate) fn status_line(frame: &Frame) -> String {
    let summary = format!(
        "max iterations {} | {} | {:.1} ms",
        frame.max_iterations,
        frame.colour_map_name,
        frame.render_duration.as_secs_f64() * 1000.0
    );

    match &frame.status {
        Some(message) => format!("{} | {}", message, summary),
        None => summary,
    }
}

fn to_terminal_colour(colour: Colour) -> Color {
    Color::Rgb {
        r: colour.r,
        g: colour.g,
        b: colour.b,
    }
}

fn label_colour(background: Colour) -> Color {
    if background.luma() > 128 {
        Color::Black
    } else {
        Color::White
    }
}
