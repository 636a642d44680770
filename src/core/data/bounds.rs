use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BoundsError {
    NonFiniteBound {
        from_x: f64,
        to_x: f64,
        from_y: f64,
        to_y: f64,
    },
    InvalidSize {
        width: f64,
        height: f64,
    },
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBound {
                from_x,
                to_x,
                from_y,
                to_y,
            } => {
                write!(
                    f,
                    "bounds must be finite: x {}..{}, y {}..{}",
                    from_x, to_x, from_y, to_y
                )
            }
            Self::InvalidSize { width, height } => {
                write!(f, "bounds size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for BoundsError {}

/// The visible rectangle of the complex plane.
///
/// Always satisfies `from_x < to_x` and `from_y < to_y` with all four values
/// finite; every constructor and transform re-checks this.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    from_x: f64,
    to_x: f64,
    from_y: f64,
    to_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            from_x: -2.0,
            to_x: 2.0,
            from_y: -2.5,
            to_y: 1.5,
        }
    }
}

impl Bounds {
    pub fn new(from_x: f64, to_x: f64, from_y: f64, to_y: f64) -> Result<Self, BoundsError> {
        if !(from_x.is_finite() && to_x.is_finite() && from_y.is_finite() && to_y.is_finite()) {
            return Err(BoundsError::NonFiniteBound {
                from_x,
                to_x,
                from_y,
                to_y,
            });
        }

        let width = to_x - from_x;
        let height = to_y - from_y;

        // NaN-safe: a span that overflowed to infinity is also rejected
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(BoundsError::InvalidSize { width, height });
        }

        Ok(Self {
            from_x,
            to_x,
            from_y,
            to_y,
        })
    }

    #[must_use]
    pub fn from_x(&self) -> f64 {
        self.from_x
    }

    #[must_use]
    pub fn to_x(&self) -> f64 {
        self.to_x
    }

    #[must_use]
    pub fn from_y(&self) -> f64 {
        self.from_y
    }

    #[must_use]
    pub fn to_y(&self) -> f64 {
        self.to_y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.to_x - self.from_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.to_y - self.from_y
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        Complex::new(
            self.from_x + self.width() / 2.0,
            self.from_y + self.height() / 2.0,
        )
    }

    /// Half-open containment: the upper bounds themselves lie outside.
    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.from_x <= point.re
            && point.re < self.to_x
            && self.from_y <= point.im
            && point.im < self.to_y
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Result<Self, BoundsError> {
        Self::new(
            self.from_x + dx,
            self.to_x + dx,
            self.from_y + dy,
            self.to_y + dy,
        )
    }

    /// Applies `f` to each of the four bounds independently.
    pub fn map_each(&self, f: impl Fn(f64) -> f64) -> Result<Self, BoundsError> {
        Self::new(f(self.from_x), f(self.to_x), f(self.from_y), f(self.to_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let bounds = Bounds::default();

        assert_eq!(bounds, Bounds::new(-2.0, 2.0, -2.5, 1.5).unwrap());
        assert_eq!(bounds.width(), 4.0);
        assert_eq!(bounds.height(), 4.0);
        assert_eq!(bounds.centre(), Complex::new(0.0, -0.5));
    }

    #[test]
    fn test_bounds_dimensions_must_be_positive() {
        assert_eq!(
            Bounds::new(0.0, 0.0, 0.0, 1.0),
            Err(BoundsError::InvalidSize {
                width: 0.0,
                height: 1.0
            })
        );
        assert_eq!(
            Bounds::new(1.0, -1.0, 0.0, 1.0),
            Err(BoundsError::InvalidSize {
                width: -2.0,
                height: 1.0
            })
        );
        assert_eq!(
            Bounds::new(0.0, 1.0, 2.0, 2.0),
            Err(BoundsError::InvalidSize {
                width: 1.0,
                height: 0.0
            })
        );
    }

    #[test]
    fn test_bounds_must_be_finite() {
        assert!(matches!(
            Bounds::new(f64::NEG_INFINITY, 0.0, 0.0, 1.0),
            Err(BoundsError::NonFiniteBound { .. })
        ));
        assert!(matches!(
            Bounds::new(0.0, 1.0, 0.0, f64::NAN),
            Err(BoundsError::NonFiniteBound { .. })
        ));
    }

    #[test]
    fn test_span_overflow_is_rejected() {
        let result = Bounds::new(-f64::MAX, f64::MAX, 0.0, 1.0);

        assert!(matches!(result, Err(BoundsError::InvalidSize { .. })));
    }

    #[test]
    fn test_contains_point_is_half_open() {
        let bounds = Bounds::default();

        assert!(bounds.contains_point(Complex::new(-2.0, -2.5)));
        assert!(bounds.contains_point(Complex::new(1.9, 1.4)));
        assert!(!bounds.contains_point(Complex::new(2.0, 0.0)));
        assert!(!bounds.contains_point(Complex::new(0.0, 1.5)));
        assert!(!bounds.contains_point(Complex::new(-2.1, 0.0)));
    }

    #[test]
    fn test_translated_keeps_span() {
        let moved = Bounds::default().translated(0.5, -1.0).unwrap();

        assert_eq!(moved, Bounds::new(-1.5, 2.5, -3.5, 0.5).unwrap());
    }

    #[test]
    fn test_map_each_rejects_collapse() {
        let result = Bounds::default().map_each(|v| v * 0.0);

        assert!(matches!(result, Err(BoundsError::InvalidSize { .. })));
    }
}
