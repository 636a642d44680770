use crate::core::data::bounds::Bounds;
use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellToComplexCoordsError {
    CellOutsideGrid { col: u32, row: u32, grid_size: u32 },
}

impl fmt::Display for CellToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutsideGrid {
                col,
                row,
                grid_size,
            } => {
                write!(
                    f,
                    "cell (col: {}, row: {}) is outside the {}x{} grid",
                    col, row, grid_size, grid_size
                )
            }
        }
    }
}

impl Error for CellToComplexCoordsError {}

/// Maps a grid cell onto the complex plane.
///
/// Stepping is half-open: column 0 lands on `from_x`, the last column lands
/// one step short of `to_x`. Rows map onto the imaginary axis the same way.
pub fn cell_to_complex_coords(
    col: u32,
    row: u32,
    grid_size: u32,
    bounds: &Bounds,
) -> Result<Complex, CellToComplexCoordsError> {
    if col >= grid_size || row >= grid_size {
        return Err(CellToComplexCoordsError::CellOutsideGrid {
            col,
            row,
            grid_size,
        });
    }

    Ok(interpolate(col, row, grid_size, bounds))
}

pub(crate) fn interpolate(col: u32, row: u32, grid_size: u32, bounds: &Bounds) -> Complex {
    let step_x = bounds.width() / grid_size as f64;
    let step_y = bounds.height() / grid_size as f64;

    Complex::new(
        bounds.from_x() + col as f64 * step_x,
        bounds.from_y() + row as f64 * step_y,
    )
}
