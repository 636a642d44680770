use std::ops::{Add, Mul};

/// Just the complex arithmetic the escape loop uses.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    #[must_use]
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[must_use]
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_sqr() {
        assert_eq!(Complex::new(3.0, 4.0).norm_sqr(), 25.0);
        assert_eq!(Complex::new(-3.0, -4.0).norm_sqr(), 25.0);
        assert_eq!(Complex::ZERO.norm_sqr(), 0.0);
    }

    #[test]
    fn test_add() {
        let result = Complex::new(1.0, 2.0) + Complex::new(-3.0, -7.0);

        assert_eq!(result, Complex::new(-2.0, -5.0));
    }

    #[test]
    fn test_square() {
        // (2 + 3i)² = 4 + 12i - 9 = -5 + 12i
        let c = Complex::new(2.0, 3.0);

        assert_eq!(c * c, Complex::new(-5.0, 12.0));
    }

    #[test]
    fn test_escape_step_matches_hand_computation() {
        // z² + c with z = 1 + i, c = 1 + i gives 1 + 3i
        let c = Complex::new(1.0, 1.0);
        let z = c * c + c;

        assert_eq!(z, Complex::new(1.0, 3.0));
    }
}
