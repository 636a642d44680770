use std::time::Duration;

use crate::core::data::bounds::Bounds;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::point::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameCell {
    pub col: u32,
    pub row: u32,
    pub point: Point,
    pub result: EscapeResult,
    pub colour: Colour,
}

/// One fully evaluated grid, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub generation: u64,
    pub bounds: Bounds,
    pub grid_size: u32,
    pub max_iterations: u32,
    /// Raster order, `grid_size * grid_size` entries.
    pub cells: Vec<FrameCell>,
    pub show_escape: bool,
    pub colour_map_name: &'static str,
    pub render_duration: Duration,
    pub status: Option<String>,
    pub bell: bool,
}

impl Frame {
    pub fn rows(&self) -> impl Iterator<Item = &[FrameCell]> {
        self.cells.chunks((self.grid_size as usize).max(1))
    }

    #[must_use]
    pub fn cell(&self, col: u32, row: u32) -> Option<&FrameCell> {
        if col >= self.grid_size || row >= self.grid_size {
            return None;
        }

        self.cells
            .get(row as usize * self.grid_size as usize + col as usize)
    }

    /// Title line with the bounds to two decimals.
    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "trMandelbrot -- A Terminal Mandelbrot Set Plotter -- ({:.2}, {:.2} -> {:.2}, {:.2})",
            self.bounds.from_x(),
            self.bounds.from_y(),
            self.bounds.to_x(),
            self.bounds.to_y()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(grid_size: u32) -> Frame {
        let mut cells = Vec::new();
        for row in 0..grid_size {
            for col in 0..grid_size {
                cells.push(FrameCell {
                    col,
                    row,
                    point: Point::new(col as f64, row as f64, 10).unwrap(),
                    result: EscapeResult::escaped(1),
                    colour: Colour::BLACK,
                });
            }
        }

        Frame {
            generation: 1,
            bounds: Bounds::default(),
            grid_size,
            max_iterations: 10,
            cells,
            show_escape: false,
            colour_map_name: "Escape bands",
            render_duration: Duration::ZERO,
            status: None,
            bell: false,
        }
    }

    #[test]
    fn test_title_shows_bounds_to_two_decimals() {
        assert_eq!(
            frame(2).title(),
            "trMandelbrot -- A Terminal Mandelbrot Set Plotter -- (-2.00, -2.50 -> 2.00, 1.50)"
        );
    }

    #[test]
    fn test_rows_split_cells_by_grid_size() {
        let frame = frame(3);
        let rows: Vec<&[FrameCell]> = frame.rows().collect();

        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 3));
        assert_eq!(rows[1][2].col, 2);
        assert_eq!(rows[1][2].row, 1);
    }

    #[test]
    fn test_cell_lookup() {
        let frame = frame(3);

        assert_eq!(frame.cell(2, 1).map(|c| (c.col, c.row)), Some((2, 1)));
        assert!(frame.cell(3, 0).is_none());
    }
}
