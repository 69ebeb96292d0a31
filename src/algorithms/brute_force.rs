use super::Error;
use crate::bipartition;
use crate::Graph;
use rayon::iter::IntoParallelIterator as _;
use rayon::iter::ParallelIterator as _;

/// Largest vertex count whose `2^n` bipartition masks fit the `u64`
/// enumeration counter.
const MAX_VERTICES: usize = u64::BITS as usize - 1;

/// Diagnostic data returned by [`BruteForce`].
#[derive(Clone, Copy, Debug)]
pub struct Metadata {
    /// Number of edges crossing the returned bipartition.
    pub cut_size: u64,

    /// Bit-packed copy of the returned bipartition, where bit `i` is the side
    /// of vertex `i`.
    pub mask: u64,
}

fn brute_force(part_ids: &mut [usize], graph: &Graph) -> Metadata {
    let mask_count = 1_u64 << graph.vertex_count();
    tracing::info!(mask_count, "enumerating bipartitions");

    // Strict comparison on the cut, lowest mask on ties: the reduction gives
    // the same winner as an ascending sequential scan, whichever way rayon
    // splits the range.
    let (mask, cut_size) = (0..mask_count)
        .into_par_iter()
        .map(|mask| (mask, graph.mask_edge_cut(mask)))
        .reduce(
            || (0, 0),
            |best, candidate| {
                if candidate.1 > best.1 || (candidate.1 == best.1 && candidate.0 < best.0) {
                    candidate
                } else {
                    best
                }
            },
        );

    bipartition::from_mask(mask, part_ids);
    tracing::info!("final edge cut: {}", cut_size);
    Metadata { cut_size, mask }
}

/// # Exhaustive Max-Cut search
///
/// Enumerate every bipartition of the graph and return one with the largest
/// edge cut.
///
/// Masks are visited in a max-reduction whose tie-break keeps the lowest
/// bit-packed bipartition.  A bipartition and its complement always cut the
/// same edges, so the reported side assignment is the lower of each
/// complementary pair, the one placing the highest-numbered vertex on side 0.
///
/// The sweep visits `2^n` masks and evaluates each in `O(n^2)`.  It is run
/// on the rayon thread pool, which keeps a few more vertices within reach,
/// but graphs beyond roughly 24 vertices stop being interactive.
///
/// # Example
///
/// ```rust
/// use decoupe::Partition as _;
///
/// // Cutting a triangle isolates one vertex from the other two.
/// let graph = decoupe::Graph::from_edges(3, [(0, 1), (1, 2), (0, 2)]);
/// let mut partition = [0; 3];
///
/// let metadata = decoupe::BruteForce.partition(&mut partition, &graph)?;
///
/// assert_eq!(metadata.cut_size, 2);
/// assert_eq!(partition, [1, 0, 0]);
/// # Ok::<(), decoupe::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForce;

impl<'a> crate::Partition<&'a Graph> for BruteForce {
    type Metadata = Metadata;
    type Error = Error;

    fn partition(
        &mut self,
        part_ids: &mut [usize],
        graph: &'a Graph,
    ) -> Result<Self::Metadata, Self::Error> {
        if part_ids.len() != graph.vertex_count() {
            return Err(Error::InputLenMismatch {
                expected: part_ids.len(),
                actual: graph.vertex_count(),
            });
        }
        if MAX_VERTICES < graph.vertex_count() {
            return Err(Error::TooManyVertices {
                actual: graph.vertex_count(),
                max: MAX_VERTICES,
            });
        }
        Ok(brute_force(part_ids, graph))
    }
}
