use serde::Deserialize;

use crate::core::{
    data::{
        bounds::{Bounds, BoundsError},
        point::DEFAULT_MAX_ITERATIONS,
    },
    fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds,
    viewport::zoom_policy::ZoomPolicy,
};

pub const DEFAULT_GRID_SIZE: u32 = 40;

/// Everything needed to set up a plot: the starting view, its resolution and
/// how it is coloured. Doubles as the `[plot]` table of the config file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MandelbrotConfig {
    pub grid_size: u32,
    pub max_iterations: u32,
    pub from_x: f64,
    pub to_x: f64,
    pub from_y: f64,
    pub to_y: f64,
    pub zoom_policy: ZoomPolicy,
    #[serde(rename = "colour_map")]
    pub colour_map_kind: MandelbrotColourMapKinds,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        let bounds = Bounds::default();

        Self {
            grid_size: DEFAULT_GRID_SIZE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            from_x: bounds.from_x(),
            to_x: bounds.to_x(),
            from_y: bounds.from_y(),
            to_y: bounds.to_y(),
            zoom_policy: ZoomPolicy::default(),
            colour_map_kind: MandelbrotColourMapKinds::default(),
        }
    }
}

impl MandelbrotConfig {
    pub fn bounds(&self) -> Result<Bounds, BoundsError> {
        Bounds::new(self.from_x, self.to_x, self.from_y, self.to_y)
    }
}
