use std::convert::Infallible;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// |z|² beyond which the orbit is guaranteed to diverge (bailout radius 2).
pub const BAILOUT_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time calculation for `c = re + im·i`.
///
/// Rejects non-finite coordinates and a zero iteration cap before iterating.
pub fn escape(re: f64, im: f64, max_iterations: u32) -> Result<EscapeResult, MandelbrotError> {
    let point = Point::new(re, im, max_iterations)?;

    Ok(escape_point(&point))
}

/// Escape-time calculation for an already validated point.
#[must_use]
pub fn escape_point(point: &Point) -> EscapeResult {
    let c = point.c();
    let mut z = Complex::ZERO;

    for iteration in 0..point.max_iterations() {
        if z.norm_sqr() > BAILOUT_RADIUS_SQUARED {
            return EscapeResult::escaped(iteration);
        }
        z = c + z * z;
    }

    EscapeResult::stable()
}

/// The uncached engine, exposed through the grid evaluation port.
#[derive(Debug, Default, Copy, Clone)]
pub struct MandelbrotAlgorithm;

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = EscapeResult;
    type Failure = Infallible;

    fn compute(&self, point: Point) -> Result<Self::Success, Self::Failure> {
        Ok(escape_point(&point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_stable_at_every_resolution() {
        for max_iterations in [1, 2, 80, 1000, 5000] {
            assert_eq!(
                escape(0.0, 0.0, max_iterations).unwrap(),
                EscapeResult::stable()
            );
        }
    }

    #[test]
    fn test_cardioid_boundary_point_is_stable() {
        let result = escape(0.25, 0.0, 100).unwrap();

        assert!(result.stable);
        assert_eq!(result.count, 0);
    }

    #[test]
    fn test_one_plus_i_escapes_quickly() {
        // z1 = 1 + i, |z1|² = 2; z2 = 1 + 3i, |z2|² = 10
        let result = escape(1.0, 1.0, 100).unwrap();

        assert_eq!(result, EscapeResult::escaped(2));
    }

    #[test]
    fn test_points_outside_radius_two_escape_at_first_check() {
        for (re, im) in [(3.0, 0.0), (-2.1, 0.5), (0.0, 2.01), (1.5, -1.5), (-10.0, 10.0)] {
            assert_eq!(
                escape(re, im, 50).unwrap(),
                EscapeResult::escaped(1),
                "c = {} + {}i",
                re,
                im
            );
        }
    }

    #[test]
    fn test_minus_two_sits_on_the_boundary_and_stays_bounded() {
        // orbit is 0, -2, 2, 2, ... and |z| never exceeds 2
        assert!(escape(-2.0, 0.0, 500).unwrap().stable);
    }

    #[test]
    fn test_single_iteration_never_escapes() {
        assert!(escape(100.0, 100.0, 1).unwrap().stable);
    }

    #[test]
    fn test_count_grows_with_resolution_until_true_escape_index() {
        let true_index = escape(0.3, 0.0, 10_000).unwrap();
        assert!(!true_index.stable);
        let k = true_index.count;
        assert!(k > 2);

        for max_iterations in 1..=k {
            assert!(escape(0.3, 0.0, max_iterations).unwrap().stable);
        }
        for max_iterations in [k + 1, k + 2, 2 * k, 10 * k] {
            assert_eq!(
                escape(0.3, 0.0, max_iterations).unwrap(),
                EscapeResult::escaped(k)
            );
        }
    }

    #[test]
    fn test_escape_count_stays_below_max_iterations() {
        for re in [-1.9, -0.75, 0.26, 0.4, 1.0] {
            for im in [-1.0, -0.1, 0.1, 0.65] {
                let result = escape(re, im, 64).unwrap();
                if !result.stable {
                    assert!(result.count >= 1 && result.count <= 63);
                }
            }
        }
    }

    #[test]
    fn test_escape_is_deterministic() {
        let first = escape(-0.7435, 0.1314, 5000).unwrap();
        let second = escape(-0.7435, 0.1314, 5000).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_escape_rejects_invalid_input() {
        assert_eq!(
            escape(0.0, 0.0, 0),
            Err(MandelbrotError::ZeroMaxIterationsError)
        );
        assert!(matches!(
            escape(f64::INFINITY, 0.0, 10),
            Err(MandelbrotError::NonFiniteCoordinate { .. })
        ));
        assert!(matches!(
            escape(0.0, f64::NAN, 10),
            Err(MandelbrotError::NonFiniteCoordinate { .. })
        ));
    }

    #[test]
    fn test_algorithm_port_matches_free_function() {
        let point = Point::new(-0.1, 0.9, 200).unwrap();

        assert_eq!(
            MandelbrotAlgorithm.compute(point).unwrap(),
            escape(-0.1, 0.9, 200).unwrap()
        );
    }
}
