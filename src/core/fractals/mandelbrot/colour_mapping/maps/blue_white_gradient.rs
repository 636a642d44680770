use crate::core::actions::generate_colour_grid::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::mandelbrot::colour_mapping::errors::MandelbrotColourMapErrors;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use std::error::Error;

#[derive(Debug)]
pub struct MandelbrotBlueWhiteGradient {
    max_iterations: u32,
}

impl ColourMap<EscapeResult> for MandelbrotBlueWhiteGradient {
    fn map(&self, result: EscapeResult) -> Result<Colour, Box<dyn Error>> {
        if result.stable {
            return Ok(Colour::BLACK);
        }

        if result.count >= self.max_iterations {
            return Err(Box::new(MandelbrotColourMapErrors::CountExceedsMax {
                count: result.count,
                max_iterations: self.max_iterations,
            }));
        }

        let t = result.count as f64 / self.max_iterations as f64;

        // Bernstein polynomials: dark blue at low counts, pale near the cap
        let r = (9.0 * (1.0 - t) * t * t * t * 255.0) as u8;
        let g = (15.0 * (1.0 - t) * (1.0 - t) * t * t * 255.0) as u8;
        let b = (8.5 * (1.0 - t) * (1.0 - t) * (1.0 - t) * t * 255.0) as u8;

        Ok(Colour { r, g, b })
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotBlueWhiteGradient {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::BlueWhiteGradient
    }
}

impl MandelbrotBlueWhiteGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
