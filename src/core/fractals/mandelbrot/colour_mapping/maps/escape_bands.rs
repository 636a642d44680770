use crate::core::actions::generate_colour_grid::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::{EscapeResult, MAX_ESCAPE_BAND};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use std::error::Error;

/// One colour per escape band, 1 through 15. Deeper bands run from brown
/// through blue into gold.
const BAND_PALETTE: [Colour; MAX_ESCAPE_BAND as usize] = [
    Colour::rgb(66, 30, 15),
    Colour::rgb(25, 7, 26),
    Colour::rgb(9, 1, 47),
    Colour::rgb(4, 4, 73),
    Colour::rgb(0, 7, 100),
    Colour::rgb(12, 44, 138),
    Colour::rgb(24, 82, 177),
    Colour::rgb(57, 125, 209),
    Colour::rgb(134, 181, 229),
    Colour::rgb(211, 236, 248),
    Colour::rgb(241, 233, 191),
    Colour::rgb(248, 201, 95),
    Colour::rgb(255, 170, 0),
    Colour::rgb(204, 128, 0),
    Colour::rgb(153, 87, 0),
];

/// Discrete colouring by `EscapeResult::band`, independent of resolution.
#[derive(Debug, Default)]
pub struct MandelbrotEscapeBands;

impl ColourMap<EscapeResult> for MandelbrotEscapeBands {
    fn map(&self, result: EscapeResult) -> Result<Colour, Box<dyn Error>> {
        match result.band() {
            0 => Ok(Colour::BLACK),
            band => Ok(BAND_PALETTE[(band - 1) as usize]),
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotEscapeBands {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::EscapeBands
    }
}

impl MandelbrotEscapeBands {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_points_are_black() {
        let mapper = MandelbrotEscapeBands::new();

        assert_eq!(mapper.map(EscapeResult::stable()).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_each_band_has_its_own_colour() {
        let mapper = MandelbrotEscapeBands::new();
        let colours: Vec<Colour> = (1..=MAX_ESCAPE_BAND)
            .map(|count| mapper.map(EscapeResult::escaped(count)).unwrap())
            .collect();

        for (i, colour) in colours.iter().enumerate() {
            assert_ne!(*colour, Colour::BLACK);
            for other in &colours[i + 1..] {
                assert_ne!(colour, other);
            }
        }
    }

    #[test]
    fn test_counts_past_last_band_share_its_colour() {
        let mapper = MandelbrotEscapeBands::new();

        assert_eq!(
            mapper.map(EscapeResult::escaped(4000)).unwrap(),
            mapper.map(EscapeResult::escaped(MAX_ESCAPE_BAND)).unwrap()
        );
    }
}
