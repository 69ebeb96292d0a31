//! Dense graph storage and the cut metric shared by all algorithms.

use itertools::Itertools as _;
use rayon::iter::IntoParallelIterator as _;
use rayon::iter::ParallelIterator as _;
use std::fmt;

/// Errors raised when an adjacency matrix fails validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidGraphError {
    /// A row's length differs from the number of rows.
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The entries `(i, j)` and `(j, i)` differ.
    NotSymmetric { i: usize, j: usize },

    /// An entry is neither 0 nor 1.
    NotBinary { i: usize, j: usize, value: u8 },
}

impl fmt::Display for InvalidGraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidGraphError::NotSquare {
                row,
                expected,
                actual,
            } => write!(
                f,
                "row {row} has {actual} entries, expected {expected} (matrix must be square)",
            ),
            InvalidGraphError::NotSymmetric { i, j } => {
                write!(f, "entries ({i}, {j}) and ({j}, {i}) differ")
            }
            InvalidGraphError::NotBinary { i, j, value } => {
                write!(f, "entry ({i}, {j}) is {value}, expected 0 or 1")
            }
        }
    }
}

impl std::error::Error for InvalidGraphError {}

/// An undirected, unweighted graph stored as a dense adjacency matrix.
///
/// The matrix is kept flattened in row-major order.  It is validated to be
/// square, symmetric and binary on construction and is read-only afterwards.
/// The diagonal is conventionally zero; self-loops never cross a bipartition
/// and are ignored by the cut metric.
#[derive(Clone, Debug)]
pub struct Graph {
    vertex_count: usize,
    adjacency: Vec<u8>,
}

impl Graph {
    /// Build a graph from a dense adjacency matrix.
    ///
    /// # Example
    ///
    /// ```rust
    /// // A triangle.
    /// let graph = decoupe::Graph::from_adjacency(&[
    ///     [0, 1, 1],
    ///     [1, 0, 1],
    ///     [1, 1, 0],
    /// ])?;
    /// assert_eq!(graph.edge_count(), 3);
    /// # Ok::<(), decoupe::InvalidGraphError>(())
    /// ```
    pub fn from_adjacency<R>(rows: &[R]) -> Result<Graph, InvalidGraphError>
    where
        R: AsRef<[u8]>,
    {
        let vertex_count = rows.len();
        let mut adjacency = vec![0; vertex_count * vertex_count];
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != vertex_count {
                return Err(InvalidGraphError::NotSquare {
                    row: i,
                    expected: vertex_count,
                    actual: row.len(),
                });
            }
            adjacency[i * vertex_count..(i + 1) * vertex_count].copy_from_slice(row);
        }
        for i in 0..vertex_count {
            for j in 0..vertex_count {
                let value = adjacency[i * vertex_count + j];
                if 1 < value {
                    return Err(InvalidGraphError::NotBinary { i, j, value });
                }
            }
        }
        for (i, j) in (0..vertex_count).tuple_combinations() {
            if adjacency[i * vertex_count + j] != adjacency[j * vertex_count + i] {
                return Err(InvalidGraphError::NotSymmetric { i, j });
            }
        }
        Ok(Graph {
            vertex_count,
            adjacency,
        })
    }

    /// Build a graph from an edge list.  Both orientations of each edge are
    /// inserted, so the result is symmetric by construction.
    ///
    /// # Panics
    ///
    /// Panics if an endpoint is out of bounds or an edge is a self-loop.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Graph
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut adjacency = vec![0; vertex_count * vertex_count];
        for (i, j) in edges {
            assert!(
                i < vertex_count && j < vertex_count,
                "edge ({i}, {j}) is out of bounds",
            );
            assert_ne!(i, j, "self-loop on vertex {i}");
            adjacency[i * vertex_count + j] = 1;
            adjacency[j * vertex_count + i] = 1;
        }
        Graph {
            vertex_count,
            adjacency,
        }
    }

    /// Sample an Erdős–Rényi graph: each vertex pair is linked with
    /// probability `density`.
    ///
    /// # Panics
    ///
    /// Panics if `density` is not in `[0, 1]`.
    pub fn random<R>(rng: &mut R, vertex_count: usize, density: f64) -> Graph
    where
        R: rand::Rng,
    {
        let mut adjacency = vec![0; vertex_count * vertex_count];
        for (i, j) in (0..vertex_count).tuple_combinations() {
            if rng.gen_bool(density) {
                adjacency[i * vertex_count + j] = 1;
                adjacency[j * vertex_count + i] = 1;
            }
        }
        Graph {
            vertex_count,
            adjacency,
        }
    }

    /// The number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// The number of edges.
    pub fn edge_count(&self) -> u64 {
        (0..self.vertex_count)
            .tuple_combinations()
            .filter(|&(i, j)| self.has_edge(i, j))
            .count() as u64
    }

    /// Whether vertices `i` and `j` are linked.
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.adjacency[i * self.vertex_count + j] == 1
    }

    /// An iterator over the neighbors of the given vertex, in increasing
    /// order.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        let row = &self.adjacency[vertex * self.vertex_count..(vertex + 1) * self.vertex_count];
        row.iter()
            .enumerate()
            .filter_map(|(j, &linked)| (linked == 1).then_some(j))
    }

    /// The number of neighbors of the given vertex.
    pub fn degree(&self, vertex: usize) -> usize {
        self.neighbors(vertex).count()
    }

    /// The edge cut of a bipartition.
    ///
    /// Given a partition of the graph's vertices, the edge cut is the number
    /// of edges that link vertices of different parts.
    ///
    /// `part_ids` must have one entry per vertex; this is a programming error
    /// and not checked in release builds.
    pub fn edge_cut(&self, part_ids: &[usize]) -> u64 {
        debug_assert_eq!(part_ids.len(), self.vertex_count);
        (0..self.vertex_count)
            .into_par_iter()
            .map(|vertex| {
                let vertex_part = part_ids[vertex];
                self.neighbors(vertex)
                    .filter(|neighbor| {
                        *neighbor < vertex && part_ids[*neighbor] != vertex_part
                    })
                    .count() as u64
            })
            .sum()
    }

    /// The edge cut of a bit-packed bipartition, where bit `i` of `mask` is
    /// the side of vertex `i`.
    ///
    /// Same metric as [`Graph::edge_cut`], kept sequential and allocation-free
    /// for enumeration loops.
    pub fn mask_edge_cut(&self, mask: u64) -> u64 {
        debug_assert!(self.vertex_count <= u64::BITS as usize);
        let mut cut = 0;
        for vertex in 1..self.vertex_count {
            let vertex_side = mask >> vertex & 1;
            let row = &self.adjacency[vertex * self.vertex_count..][..vertex];
            cut += row
                .iter()
                .enumerate()
                .filter(|&(neighbor, &linked)| linked == 1 && mask >> neighbor & 1 != vertex_side)
                .count() as u64;
        }
        cut
    }
}
