use std::convert::Infallible;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::algorithm::escape_point;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::escape_cache::{CachePolicy, CacheStats, EscapeCache};

/// Memoizing front for the escape-time calculation.
///
/// The cache sits behind a mutex so one engine can serve both the sequential
/// and the row-parallel grid evaluation. The lock is released while a point
/// is being iterated, so two rows racing on the same point both compute it
/// and the second insert simply refreshes the entry.
#[derive(Debug, Default)]
pub struct EscapeTimeEngine {
    cache: Mutex<EscapeCache>,
}

impl EscapeTimeEngine {
    #[must_use]
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            cache: Mutex::new(EscapeCache::new(policy)),
        }
    }

    pub fn query(
        &self,
        re: f64,
        im: f64,
        max_iterations: u32,
    ) -> Result<EscapeResult, MandelbrotError> {
        let point = Point::new(re, im, max_iterations)?;

        Ok(self.evaluate(&point))
    }

    #[must_use]
    pub fn evaluate(&self, point: &Point) -> EscapeResult {
        if let Some(result) = self.lock().get(point) {
            return result;
        }

        let result = escape_point(point);
        self.lock().insert(*point, result);

        result
    }

    #[must_use]
    pub fn policy(&self) -> CachePolicy {
        self.lock().policy()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.lock().stats()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, EscapeCache> {
        // entries are plain values; a panic mid-update cannot leave one half-written
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FractalAlgorithm for EscapeTimeEngine {
    type Success = EscapeResult;
    type Failure = Infallible;

    fn compute(&self, point: Point) -> Result<Self::Success, Self::Failure> {
        Ok(self.evaluate(&point))
    }
}
