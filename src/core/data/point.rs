use std::hash::{Hash, Hasher};

use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 80;

/// A point of the complex plane paired with the resolution it is evaluated at.
///
/// Equality and hashing use the exact bit patterns of `re` and `im`, so two
/// points compare equal only when the escape calculation is guaranteed to
/// produce the same result for both.
#[derive(Debug, Copy, Clone)]
pub struct Point {
    re: f64,
    im: f64,
    max_iterations: u32,
}

impl Point {
    pub fn new(re: f64, im: f64, max_iterations: u32) -> Result<Self, MandelbrotError> {
        if !re.is_finite() || !im.is_finite() {
            return Err(MandelbrotError::NonFiniteCoordinate { re, im });
        }

        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self {
            re,
            im,
            max_iterations,
        })
    }

    /// For callers that derive coordinates from already validated bounds.
    pub(crate) fn from_validated(re: f64, im: f64, max_iterations: u32) -> Self {
        debug_assert!(re.is_finite() && im.is_finite() && max_iterations > 0);

        Self {
            re,
            im,
            max_iterations,
        }
    }

    #[must_use]
    pub fn re(&self) -> f64 {
        self.re
    }

    #[must_use]
    pub fn im(&self) -> f64 {
        self.im
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn c(&self) -> Complex {
        Complex::new(self.re, self.im)
    }

    fn key(&self) -> (u64, u64, u32) {
        (self.re.to_bits(), self.im.to_bits(), self.max_iterations)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
