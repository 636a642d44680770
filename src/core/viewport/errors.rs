use std::{error::Error, fmt};

use crate::core::data::bounds::BoundsError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::cell_to_complex_coords::CellToComplexCoordsError;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    ZeroGridSize,
    GridSizeTooLarge { grid_size: u32, max: u32 },
    InvalidBounds(BoundsError),
    InvalidPoint(MandelbrotError),
    InvalidCell(CellToComplexCoordsError),
    NonFiniteDelta { dx: f64, dy: f64 },
    NonFiniteZoomFactor(f64),
    /// A pan or zoom would have inverted, collapsed or overflowed the bounds.
    /// The viewport is left as it was.
    DegenerateViewport(BoundsError),
}

impl ViewportError {
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        !self.is_degenerate()
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateViewport(_))
    }
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroGridSize => write!(f, "invalid input: grid size must be greater than zero"),
            Self::GridSizeTooLarge { grid_size, max } => {
                write!(f, "invalid input: grid size {} exceeds the maximum of {}", grid_size, max)
            }
            Self::InvalidBounds(err) => write!(f, "invalid input: {}", err),
            Self::InvalidPoint(err) => write!(f, "{}", err),
            Self::InvalidCell(err) => write!(f, "invalid input: {}", err),
            Self::NonFiniteDelta { dx, dy } => {
                write!(f, "invalid input: pan delta ({}, {}) is not finite", dx, dy)
            }
            Self::NonFiniteZoomFactor(factor) => {
                write!(f, "invalid input: zoom factor {} is not finite", factor)
            }
            Self::DegenerateViewport(err) => write!(f, "degenerate viewport: {}", err),
        }
    }
}

impl Error for ViewportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidBounds(err) | Self::DegenerateViewport(err) => Some(err),
            Self::InvalidPoint(err) => Some(err),
            Self::InvalidCell(err) => Some(err),
            Self::ZeroGridSize
            | Self::GridSizeTooLarge { .. }
            | Self::NonFiniteDelta { .. } | Self::NonFiniteZoomFactor(_) => None,
        }
    }
}

impl From<MandelbrotError> for ViewportError {
    fn from(err: MandelbrotError) -> Self {
        Self::InvalidPoint(err)
    }
}

impl From<CellToComplexCoordsError> for ViewportError {
    fn from(err: CellToComplexCoordsError) -> Self {
        Self::InvalidCell(err)
    }
}
