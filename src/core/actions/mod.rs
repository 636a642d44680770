pub mod generate_colour_grid;
pub mod generate_fractal;
