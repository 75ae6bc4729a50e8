//! Simulation error taxonomy
//!
//! Both variants are deterministic faults: once raised, the run cannot
//! sensibly continue, so they propagate to the caller instead of being
//! masked as NaN or silently skipped.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Two distinct bodies occupy the exact same position, so the pairwise
    /// force is undefined (division by zero separation)
    DegenerateSeparation { i: usize, j: usize },
    /// Bad initial conditions: non-positive mass, non-positive time step,
    /// or fewer than two bodies
    InvalidConfiguration(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::DegenerateSeparation { i, j } => {
                write!(f, "bodies {i} and {j} are at the same position, separation is zero")
            }
            SimError::InvalidConfiguration(msg) => {
                write!(f, "invalid configuration: {msg}")
            }
        }
    }
}

impl std::error::Error for SimError {}
