use std::{error::Error, fmt};

#[derive(Debug)]
pub enum MandelbrotColourMapErrors {
    CountExceedsMax { count: u32, max_iterations: u32 },
}

impl fmt::Display for MandelbrotColourMapErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountExceedsMax {
                count,
                max_iterations,
            } => {
                write!(
                    f,
                    "escape count {} is not below maximum iterations {}",
                    count, max_iterations
                )
            }
        }
    }
}

impl Error for MandelbrotColourMapErrors {}
