pub mod algorithm;
pub mod colour_mapping;
pub mod engine;
pub mod errors;
pub mod escape_cache;
pub mod mandelbrot_config;
