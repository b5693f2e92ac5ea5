use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColourMapError {
    /// An escape count at or above the map's bound violates the evaluator
    /// contract (reaching the bound reclassifies as in-set).
    CountExceedsBound { count: u32, max_iterations: u32 },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountExceedsBound {
                count,
                max_iterations,
            } => {
                write!(
                    f,
                    "escape count {} is not below the iteration bound {}",
                    count, max_iterations
                )
            }
        }
    }
}

impl Error for ColourMapError {}
