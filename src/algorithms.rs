use std::fmt;

mod brute_force;
mod greedy;

pub use brute_force::BruteForce;
pub use brute_force::Metadata as BfMetadata;
pub use greedy::Greedy;
pub use greedy::Metadata as GreedyMetadata;

/// Common errors thrown by algorithms.
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Input sets don't have matching lengths.
    InputLenMismatch { expected: usize, actual: usize },

    /// The graph's bipartition space exceeds the enumeration counter's range.
    TooManyVertices { actual: usize, max: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputLenMismatch { expected, actual } => write!(
                f,
                "input sets don't have the same length (expected {expected} items, got {actual})",
            ),
            Error::TooManyVertices { actual, max } => write!(
                f,
                "graph has {actual} vertices, exhaustive enumeration supports at most {max}",
            ),
        }
    }
}

impl std::error::Error for Error {}
