pub mod blue_white_gradient;
pub mod escape_bands;
pub mod fire_gradient;
