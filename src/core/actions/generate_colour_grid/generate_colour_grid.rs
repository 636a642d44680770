use crate::core::actions::generate_colour_grid::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GenerateColourGridError {
    ColourMap { index: usize, source: Box<dyn Error> },
}

impl fmt::Display for GenerateColourGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap { index, source } => {
                write!(f, "colour map error at cell {}: {}", index, source)
            }
        }
    }
}

impl Error for GenerateColourGridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap { source, .. } => Some(source.as_ref()),
        }
    }
}

/// Maps each evaluated cell to its display colour, keeping the input order.
pub fn generate_colour_grid<T, CMap>(
    input: &[T],
    mapper: &CMap,
) -> Result<Vec<Colour>, GenerateColourGridError>
where
    T: Copy,
    CMap: ColourMap<T> + ?Sized,
{
    input
        .iter()
        .enumerate()
        .map(|(index, value)| {
            mapper
                .map(*value)
                .map_err(|source| GenerateColourGridError::ColourMap { index, source })
        })
        .collect()
}
