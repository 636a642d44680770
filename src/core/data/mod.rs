pub mod bounds;
pub mod cell;
pub mod colour;
pub mod complex;
pub mod escape_result;
pub mod point;
