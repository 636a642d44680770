use std::{error::Error, fmt, io};

use crate::core::actions::generate_colour_grid::generate_colour_grid::GenerateColourGridError;
use crate::core::viewport::errors::ViewportError;

#[derive(Debug)]
pub enum ExplorerError {
    Viewport(ViewportError),
    IterationOverflow { max_iterations: u32 },
    ColourGrid(GenerateColourGridError),
    Present(io::Error),
}

impl ExplorerError {
    /// Rejected commands are reported to the user and the session carries on;
    /// anything else ends it.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Viewport(_) | Self::IterationOverflow { .. })
    }
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "{}", err),
            Self::IterationOverflow { max_iterations } => write!(
                f,
                "invalid input: cannot raise max iterations above {}",
                max_iterations
            ),
            Self::ColourGrid(err) => write!(f, "{}", err),
            Self::Present(err) => write!(f, "failed to present frame: {}", err),
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::ColourGrid(err) => Some(err),
            Self::Present(err) => Some(err),
            Self::IterationOverflow { .. } => None,
        }
    }
}

impl From<ViewportError> for ExplorerError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<GenerateColourGridError> for ExplorerError {
    fn from(err: GenerateColourGridError) -> Self {
        Self::ColourGrid(err)
    }
}

impl From<io::Error> for ExplorerError {
    fn from(err: io::Error) -> Self {
        Self::Present(err)
    }
}
