use std::{error::Error, fmt};

/// Rejected inputs to the escape-time calculation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MandelbrotError {
    NonFiniteCoordinate { re: f64, im: f64 },
    ZeroMaxIterationsError,
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteCoordinate { re, im } => {
                write!(f, "invalid input: coordinate ({}, {}) is not finite", re, im)
            }
            Self::ZeroMaxIterationsError => {
                write!(f, "invalid input: maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for MandelbrotError {}
