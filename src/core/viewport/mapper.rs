use crate::core::data::bounds::{Bounds, BoundsError};
use crate::core::data::cell::Cell;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::util::cell_to_complex_coords::{cell_to_complex_coords, interpolate};
use crate::core::viewport::errors::ViewportError;
use crate::core::viewport::zoom_policy::ZoomPolicy;

/// Largest grid side accepted. A grid is drawn one terminal row per grid row.
pub const MAX_GRID_SIZE: u32 = 1024;

/// Owns the visible region of the plane and turns it into a grid of points.
///
/// Pan and zoom build a candidate region, validate it, and only then replace
/// the current one, so a rejected mutation leaves the mapper untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportMapper {
    bounds: Bounds,
    grid_size: u32,
    max_iterations: u32,
    zoom_policy: ZoomPolicy,
    home: (Bounds, u32),
}

impl ViewportMapper {
    pub fn new(
        bounds: Bounds,
        grid_size: u32,
        max_iterations: u32,
        zoom_policy: ZoomPolicy,
    ) -> Result<Self, ViewportError> {
        if grid_size == 0 {
            return Err(ViewportError::ZeroGridSize);
        }

        if grid_size > MAX_GRID_SIZE {
            return Err(ViewportError::GridSizeTooLarge {
                grid_size,
                max: MAX_GRID_SIZE,
            });
        }

        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError.into());
        }

        if !has_resolution(&bounds, grid_size) {
            return Err(ViewportError::InvalidBounds(
                BoundsError::InvalidSize {
                    width: bounds.width(),
                    height: bounds.height(),
                },
            ));
        }

        Ok(Self {
            bounds,
            grid_size,
            max_iterations,
            zoom_policy,
            home: (bounds, max_iterations),
        })
    }

    pub fn from_config(config: &MandelbrotConfig) -> Result<Self, ViewportError> {
        let bounds = config.bounds().map_err(ViewportError::InvalidBounds)?;

        Self::new(
            bounds,
            config.grid_size,
            config.max_iterations,
            config.zoom_policy,
        )
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn zoom_policy(&self) -> ZoomPolicy {
        self.zoom_policy
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), ViewportError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError.into());
        }

        self.max_iterations = max_iterations;
        Ok(())
    }

    /// The point sampled by a single cell.
    pub fn point_at(&self, col: u32, row: u32) -> Result<Point, ViewportError> {
        let c = cell_to_complex_coords(col, row, self.grid_size, &self.bounds)?;

        Ok(Point::from_validated(c.re, c.im, self.max_iterations))
    }

    /// Every cell of the grid in raster order: row 0 first, and within a row
    /// column 0 first.
    #[must_use]
    pub fn grid(&self) -> Vec<Cell> {
        let size = self.grid_size;
        let mut cells = Vec::with_capacity((size as usize) * (size as usize));

        for row in 0..size {
            for col in 0..size {
                let c = interpolate(col, row, size, &self.bounds);
                cells.push(Cell {
                    col,
                    row,
                    point: Point::from_validated(c.re, c.im, self.max_iterations),
                });
            }
        }

        cells
    }

    pub fn pan(&mut self, dx: f64, dy: f64) -> Result<Vec<Cell>, ViewportError> {
        if !dx.is_finite() || !dy.is_finite() {
            return Err(ViewportError::NonFiniteDelta { dx, dy });
        }

        let candidate = self
            .bounds
            .translated(dx, dy)
            .map_err(ViewportError::DegenerateViewport)?;
        self.commit(candidate)?;

        Ok(self.grid())
    }

    pub fn zoom(&mut self, factor: f64) -> Result<Vec<Cell>, ViewportError> {
        if !factor.is_finite() {
            return Err(ViewportError::NonFiniteZoomFactor(factor));
        }

        let candidate = self
            .zoom_policy
            .apply(&self.bounds, factor)
            .map_err(ViewportError::DegenerateViewport)?;
        self.commit(candidate)?;

        Ok(self.grid())
    }

    /// Restores the region and resolution the mapper was built with.
    pub fn reset(&mut self) -> Vec<Cell> {
        let (bounds, max_iterations) = self.home;
        self.bounds = bounds;
        self.max_iterations = max_iterations;

        self.grid()
    }

    fn commit(&mut self, candidate: Bounds) -> Result<(), ViewportError> {
        if !has_resolution(&candidate, self.grid_size) {
            return Err(ViewportError::DegenerateViewport(
                BoundsError::InvalidSize {
                    width: candidate.width(),
                    height: candidate.height(),
                },
            ));
        }

        self.bounds = candidate;
        Ok(())
    }
}

/// The first step from each lower bound must land on a new value. This catches
/// a step that underflows to zero and one that is lost when added to a large
/// bound. Later cells are not checked individually.
fn has_resolution(bounds: &Bounds, grid_size: u32) -> bool {
    let step_x = bounds.width() / grid_size as f64;
    let step_y = bounds.height() / grid_size as f64;

    bounds.from_x() + step_x != bounds.from_x() && bounds.from_y() + step_y != bounds.from_y()
}
