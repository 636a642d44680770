use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::cell::Cell;

/// Evaluates every cell in order, stopping at the first failure.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    cells: &[Cell],
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    cells
        .iter()
        .map(|cell| algorithm.compute(cell.point))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::bounds::Bounds;
    use crate::core::data::escape_result::EscapeResult;
    use crate::core::data::point::Point;
    use crate::core::fractals::mandelbrot::algorithm::{escape, MandelbrotAlgorithm};
    use crate::core::viewport::mapper::ViewportMapper;
    use crate::core::viewport::zoom_policy::ZoomPolicy;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    struct FailAboveReal(f64);

    impl FractalAlgorithm for FailAboveReal {
        type Success = f64;
        type Failure = StubError;

        fn compute(&self, point: Point) -> Result<Self::Success, Self::Failure> {
            if point.re() > self.0 {
                Err(StubError {})
            } else {
                Ok(point.re())
            }
        }
    }

    #[test]
    fn test_results_follow_cell_order() {
        let mapper = ViewportMapper::new(Bounds::default(), 8, 50, ZoomPolicy::Origin).unwrap();
        let cells = mapper.grid();

        let results = generate_fractal(&cells, &MandelbrotAlgorithm).unwrap();

        assert_eq!(results.len(), 64);
        for (cell, result) in cells.iter().zip(&results) {
            assert_eq!(
                *result,
                escape(cell.point.re(), cell.point.im(), 50).unwrap()
            );
        }
    }

    #[test]
    fn test_default_grid_contains_both_kinds_of_point() {
        let mapper = ViewportMapper::new(Bounds::default(), 40, 80, ZoomPolicy::Origin).unwrap();

        let results = generate_fractal(&mapper.grid(), &MandelbrotAlgorithm).unwrap();

        assert!(results.iter().any(|r| r.stable));
        assert!(results.iter().any(|r| !r.stable));
        assert!(results.contains(&EscapeResult::escaped(1)));
    }

    #[test]
    fn test_propagates_algorithm_failure() {
        let mapper = ViewportMapper::new(Bounds::default(), 4, 10, ZoomPolicy::Origin).unwrap();

        let result = generate_fractal(&mapper.grid(), &FailAboveReal(0.5));

        assert_eq!(result, Err(StubError {}));
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        let result = generate_fractal(&[], &MandelbrotAlgorithm).unwrap();

        assert!(result.is_empty());
    }
}
