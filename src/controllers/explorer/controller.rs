use std::time::Instant;

use tracing::{debug, warn};

use crate::controllers::explorer::commands::{ExplorerCommand, IterationScale};
use crate::controllers::explorer::data::frame::{Frame, FrameCell};
use crate::controllers::explorer::errors::ExplorerError;
use crate::controllers::explorer::ports::presenter::ExplorerPresenterPort;
use crate::core::actions::generate_colour_grid::generate_colour_grid::generate_colour_grid;
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::data::cell::Cell;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::engine::EscapeTimeEngine;
use crate::core::fractals::mandelbrot::escape_cache::CachePolicy;
use crate::core::viewport::mapper::ViewportMapper;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExplorerOptions {
    pub colour_map_kind: MandelbrotColourMapKinds,
    pub show_escape: bool,
    pub parallel: bool,
    pub cache_policy: CachePolicy,
}

/// Applies one command at a time and re-renders the whole grid after every
/// change, including rejected ones so the status line can report them.
pub struct ExplorerController<P: ExplorerPresenterPort> {
    mapper: ViewportMapper,
    engine: EscapeTimeEngine,
    colour_map_kind: MandelbrotColourMapKinds,
    colour_map: Box<dyn MandelbrotColourMap>,
    show_escape: bool,
    parallel: bool,
    generation: u64,
    presenter: P,
}

impl<P: ExplorerPresenterPort> ExplorerController<P> {
    pub fn new(mapper: ViewportMapper, options: ExplorerOptions, presenter: P) -> Self {
        let colour_map =
            mandelbrot_colour_map_factory(options.colour_map_kind, mapper.max_iterations());

        Self {
            mapper,
            engine: EscapeTimeEngine::new(options.cache_policy),
            colour_map_kind: options.colour_map_kind,
            colour_map,
            show_escape: options.show_escape,
            parallel: options.parallel,
            generation: 0,
            presenter,
        }
    }

    /// Presents the initial view.
    pub fn start(&mut self) -> Result<(), ExplorerError> {
        let cells = self.mapper.grid();
        self.render(cells, None, false)
    }

    /// Returns `Ok(false)` once the session should end.
    pub fn handle(&mut self, command: ExplorerCommand) -> Result<bool, ExplorerError> {
        let outcome = match command {
            ExplorerCommand::Quit => return Ok(false),
            ExplorerCommand::Pan { dx, dy } => self
                .mapper
                .pan(dx, dy)
                .map(|cells| (cells, false))
                .map_err(ExplorerError::from),
            ExplorerCommand::Zoom(factor) => self
                .mapper
                .zoom(factor)
                .map(|cells| (cells, true))
                .map_err(ExplorerError::from),
            ExplorerCommand::ToggleEscape => {
                self.show_escape = !self.show_escape;
                Ok((self.mapper.grid(), false))
            }
            ExplorerCommand::CycleColourMap => {
                self.colour_map_kind = self.colour_map_kind.next();
                self.rebuild_colour_map();
                Ok((self.mapper.grid(), false))
            }
            ExplorerCommand::ScaleIterations(scale) => self
                .scale_iterations(scale)
                .map(|()| (self.mapper.grid(), false)),
            ExplorerCommand::Reset => {
                let cells = self.mapper.reset();
                self.rebuild_colour_map();
                Ok((cells, false))
            }
            ExplorerCommand::Redraw => Ok((self.mapper.grid(), false)),
        };

        match outcome {
            Ok((cells, bell)) => self.render(cells, None, bell)?,
            Err(err) if err.is_rejection() => {
                warn!(?command, error = %err, "command rejected");
                let cells = self.mapper.grid();
                self.render(cells, Some(err.to_string()), false)?;
            }
            Err(err) => return Err(err),
        }

        Ok(true)
    }

    #[must_use]
    pub fn mapper(&self) -> &ViewportMapper {
        &self.mapper
    }

    #[must_use]
    pub fn engine(&self) -> &EscapeTimeEngine {
        &self.engine
    }

    #[must_use]
    pub fn colour_map_kind(&self) -> MandelbrotColourMapKinds {
        self.colour_map_kind
    }

    #[must_use]
    pub fn show_escape(&self) -> bool {
        self.show_escape
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    fn scale_iterations(&mut self, scale: IterationScale) -> Result<(), ExplorerError> {
        let current = self.mapper.max_iterations();
        let next = scale
            .apply(current)
            .ok_or(ExplorerError::IterationOverflow {
                max_iterations: current,
            })?;

        self.mapper.set_max_iterations(next)?;
        self.rebuild_colour_map();

        Ok(())
    }

    fn rebuild_colour_map(&mut self) {
        self.colour_map =
            mandelbrot_colour_map_factory(self.colour_map_kind, self.mapper.max_iterations());
    }

    fn render(
        &mut self,
        cells: Vec<Cell>,
        status: Option<String>,
        bell: bool,
    ) -> Result<(), ExplorerError> {
        let start = Instant::now();
        let grid_size = self.mapper.grid_size();

        let results = if self.parallel {
            generate_fractal_rayon(&cells, grid_size, &self.engine)
        } else {
            generate_fractal(&cells, &self.engine)
        }
        .unwrap_or_else(|never| match never {});

        let colours = generate_colour_grid(&results, &self.colour_map)?;
        let render_duration = start.elapsed();

        let frame_cells = cells
            .iter()
            .zip(results)
            .zip(colours)
            .map(|((cell, result), colour)| FrameCell {
                col: cell.col,
                row: cell.row,
                point: cell.point,
                result,
                colour,
            })
            .collect();

        self.generation += 1;

        let stats = self.engine.stats();
        debug!(
            generation = self.generation,
            ?render_duration,
            cache_hits = stats.hits,
            cache_misses = stats.misses,
            cache_len = stats.len,
            "frame rendered"
        );

        let frame = Frame {
            generation: self.generation,
            bounds: self.mapper.bounds(),
            grid_size,
            max_iterations: self.mapper.max_iterations(),
            cells: frame_cells,
            show_escape: self.show_escape,
            colour_map_name: self.colour_map_kind.display_name(),
            render_duration,
            status,
            bell,
        };

        self.presenter.present(&frame)?;

        Ok(())
    }
}
