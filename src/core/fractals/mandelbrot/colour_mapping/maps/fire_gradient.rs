use crate::core::actions::generate_colour_grid::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::mandelbrot::colour_mapping::errors::MandelbrotColourMapErrors;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use std::error::Error;

#[derive(Debug)]
pub struct MandelbrotFireGradient {
    max_iterations: u32,
}

impl ColourMap<EscapeResult> for MandelbrotFireGradient {
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

        // black -> red -> orange -> yellow -> white in four equal segments
        let (r, g, b) = if t < 0.25 {
            let local_t = t / 0.25;
            ((local_t * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            (255, (local_t * 165.0) as u8, 0)
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            (255, (165.0 + local_t * 90.0) as u8, 0)
        } else {
            let local_t = (t - 0.75) / 0.25;
            (255, 255, (local_t * 255.0) as u8)
        };

        Ok(Colour { r, g, b })
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotFireGradient {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::FireGradient
    }
}

impl MandelbrotFireGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
