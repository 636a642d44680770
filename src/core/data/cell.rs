use crate::core::data::point::Point;

/// One position of the display grid and the point it samples.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: u32,
    pub row: u32,
    pub point: Point,
}
