/// One user request, already translated from whatever input produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExplorerCommand {
    Pan { dx: f64, dy: f64 },
    /// Negative factors zoom in, positive factors zoom out.
    Zoom(f64),
    ToggleEscape,
    CycleColourMap,
    ScaleIterations(IterationScale),
    Reset,
    Redraw,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationScale {
    Double,
    Halve,
}

impl IterationScale {
    /// `None` when doubling would overflow.
    #[must_use]
    pub fn apply(self, max_iterations: u32) -> Option<u32> {
        match self {
            Self::Double => max_iterations.checked_mul(2),
            Self::Halve => Some(max_iterations / 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_and_halve() {
        assert_eq!(IterationScale::Double.apply(80), Some(160));
        assert_eq!(IterationScale::Halve.apply(80), Some(40));
        assert_eq!(IterationScale::Halve.apply(1), Some(0));
    }

    #[test]
    fn test_double_overflow_is_none() {
        assert_eq!(IterationScale::Double.apply(u32::MAX), None);
    }
}
