//! A graph bipartitioning library that maximizes the edge cut of undirected,
//! unweighted graphs (the Max-Cut problem).
//!
//! # Crate Layout
//!
//! Decoupe exposes a [`Partition`] trait, which is in turn implemented by
//! algorithms.  See its documentation for more details.  Algorithms take a
//! [`Graph`] as input and write a side (0 or 1) for each vertex into a part ID
//! slice.
//!
//! # Available algorithms
//!
//! - [Exhaustive search][BruteForce]: the global optimum, for small graphs.
//! - [Greedy assignment][Greedy]: a deterministic single-pass heuristic.
//!
//! Both report the number of crossing edges through their metadata.  The
//! [`bipartition`] module converts between the per-vertex side representation
//! used by the trait and the bit-packed masks used by the exhaustive search.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    rust_2018_idioms
)]

mod algorithms;
pub mod bipartition;
mod graph;

pub use crate::algorithms::*;
pub use crate::graph::Graph;
pub use crate::graph::InvalidGraphError;

pub use rayon;

/// The `Partition` trait allows for partitioning data.
///
/// Partitioning algorithms implement this trait.
///
/// The generic argument `M` defines the input of the algorithms (e.g. a
/// graph, or a graph together with tuning parameters).
///
/// The input partition must be of the correct size and its contents may or
/// may not be used by the algorithms.
pub trait Partition<M> {
    /// Diagnostic data returned for a specific run of the algorithm.
    type Metadata;

    /// Error details, should the algorithm fail to run.
    type Error;

    /// Partition the given data and output the part ID of each element in
    /// `part_ids`.
    ///
    /// The algorithms in this crate build bipartitions: every part ID is
    /// either 0 or 1.
    fn partition(&mut self, part_ids: &mut [usize], data: M)
        -> Result<Self::Metadata, Self::Error>;
}
