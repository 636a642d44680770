use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::MandelbrotColourMapKinds,
    map::MandelbrotColourMap,
    maps::{
        blue_white_gradient::MandelbrotBlueWhiteGradient, escape_bands::MandelbrotEscapeBands,
        fire_gradient::MandelbrotFireGradient,
    },
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKinds,
    max_iterations: u32,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKinds::EscapeBands => Box::new(MandelbrotEscapeBands::new()),
        MandelbrotColourMapKinds::FireGradient => {
            Box::new(MandelbrotFireGradient::new(max_iterations))
        }
        MandelbrotColourMapKinds::BlueWhiteGradient => {
            Box::new(MandelbrotBlueWhiteGradient::new(max_iterations))
        }
    }
}
