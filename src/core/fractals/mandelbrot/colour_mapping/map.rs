use crate::core::actions::generate_colour_grid::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use std::error::Error;

pub trait MandelbrotColourMap: ColourMap<EscapeResult> + Send + Sync {
    fn kind(&self) -> MandelbrotColourMapKinds;
}

impl ColourMap<EscapeResult> for Box<dyn MandelbrotColourMap> {
    fn map(&self, value: EscapeResult) -> Result<Colour, Box<dyn Error>> {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
