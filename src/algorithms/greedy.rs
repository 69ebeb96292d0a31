use super::Error;
use crate::Graph;

/// Diagnostic data returned by [`Greedy`].
#[derive(Clone, Copy, Debug)]
pub struct Metadata {
    /// Number of edges crossing the returned bipartition.
    pub cut_size: u64,
}

fn greedy(part_ids: &mut [usize], graph: &Graph) {
    if part_ids.is_empty() {
        return;
    }
    part_ids[0] = 0;
    for vertex in 1..graph.vertex_count() {
        let mut side_counts = [0_usize; 2];
        for neighbor in graph.neighbors(vertex) {
            if neighbor < vertex {
                side_counts[part_ids[neighbor]] += 1;
            }
        }
        // Strict comparison: a vertex with no placed neighbor, or with as
        // many on each side, goes to side 1.
        part_ids[vertex] = if side_counts[0] > side_counts[1] { 0 } else { 1 };
    }
}

/// # Single-pass greedy bipartitioning
///
/// Assign vertex 0 to side 0, then place every following vertex in index
/// order by counting its already-placed neighbors on each side: side 0 when
/// strictly more of them sit on side 0, side 1 otherwise, ties included.
///
/// The pass only looks backward.  Edges towards vertices that are not placed
/// yet do not influence a decision, so the cut reported in the metadata is
/// re-evaluated over the completed bipartition.  The pass is deterministic
/// and runs in `O(n^2)` time and `O(n)` space, but carries no optimality
/// guarantee: on a triangle it leaves all three vertices on the same side.
///
/// # Example
///
/// ```rust
/// use decoupe::Partition as _;
///
/// // The complete bipartite graph between {0, 1} and {2, 3}.
/// let graph = decoupe::Graph::from_edges(4, [(0, 2), (0, 3), (1, 2), (1, 3)]);
/// let mut partition = [0; 4];
///
/// let metadata = decoupe::Greedy.partition(&mut partition, &graph)?;
///
/// // Vertices 1, 2 and 3 are all placed on ties and land on side 1.
/// assert_eq!(partition, [0, 1, 1, 1]);
/// assert_eq!(metadata.cut_size, 2);
/// # Ok::<(), decoupe::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy;

impl<'a> crate::Partition<&'a Graph> for Greedy {
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
        greedy(part_ids, graph);
        let cut_size = graph.edge_cut(part_ids);
        tracing::info!("final edge cut: {}", cut_size);
        Ok(Metadata { cut_size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::arbitrary_graph;
    use crate::Partition as _;
    use proptest::prelude::*;

    #[test]
    fn single_vertex() {
        let graph = Graph::from_edges(1, []);
        let mut part_ids = [42];
        let metadata = Greedy.partition(&mut part_ids, &graph).unwrap();
        assert_eq!(part_ids, [0]);
        assert_eq!(metadata.cut_size, 0);
    }

    #[test]
    fn first_neighbor_pulls_to_side_0() {
        // Vertex 1 sees one neighbor on side 0 and none on side 1, so the
        // strict majority rule keeps it on side 0.
        let graph = Graph::from_edges(2, [(0, 1)]);
        let mut part_ids = [0; 2];
        let metadata = Greedy.partition(&mut part_ids, &graph).unwrap();
        assert_eq!(part_ids, [0, 0]);
        assert_eq!(metadata.cut_size, 0);
    }

    #[test]
    fn isolated_vertex_lands_on_side_1() {
        let graph = Graph::from_edges(2, []);
        let mut part_ids = [0; 2];
        Greedy.partition(&mut part_ids, &graph).unwrap();
        assert_eq!(part_ids, [0, 1]);
    }

    #[test]
    fn triangle_stays_whole() {
        // The known worst case of the majority rule: each vertex of the
        // triangle follows its predecessors onto side 0 and no edge is cut.
        let graph = Graph::from_edges(3, [(0, 1), (1, 2), (0, 2)]);
        let mut part_ids = [0; 3];
        let metadata = Greedy.partition(&mut part_ids, &graph).unwrap();
        assert_eq!(part_ids, [0, 0, 0]);
        assert_eq!(metadata.cut_size, 0);
    }

    #[test]
    fn ties_fall_to_side_1() {
        // Vertex 2 sees one placed neighbor on each side.
        let graph = Graph::from_edges(3, [(0, 2), (1, 2)]);
        let mut part_ids = [0; 3];
        let metadata = Greedy.partition(&mut part_ids, &graph).unwrap();
        assert_eq!(part_ids, [0, 1, 1]);
        assert_eq!(metadata.cut_size, 1);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let graph = Graph::from_edges(3, [(0, 1)]);
        let mut part_ids = [0; 4];
        let err = Greedy.partition(&mut part_ids, &graph).unwrap_err();
        assert!(matches!(
            err,
            Error::InputLenMismatch {
                expected: 4,
                actual: 3,
            },
        ));
    }

    proptest!(
        #![proptest_config(ProptestConfig{timeout: 2000, ..ProptestConfig::default()})]

        /// Every vertex ends up with a side, and the reported cut is the cut
        /// of the returned bipartition, within bounds.
        #[test]
        fn complete_and_bounded(graph in arbitrary_graph(24)) {
            let mut part_ids = vec![usize::MAX; graph.vertex_count()];
            let metadata = Greedy.partition(&mut part_ids, &graph).unwrap();
            prop_assert!(part_ids.iter().all(|part_id| *part_id < 2));
            prop_assert_eq!(metadata.cut_size, graph.edge_cut(&part_ids));
            prop_assert!(metadata.cut_size <= graph.edge_count());
        }

        /// No hidden randomness: repeated runs agree bit for bit.
        #[test]
        fn deterministic(graph in arbitrary_graph(24)) {
            let mut first = vec![0; graph.vertex_count()];
            let mut second = vec![0; graph.vertex_count()];
            let metadata_first = Greedy.partition(&mut first, &graph).unwrap();
            let metadata_second = Greedy.partition(&mut second, &graph).unwrap();
            prop_assert_eq!(first, second);
            prop_assert_eq!(metadata_first.cut_size, metadata_second.cut_size);
        }
    );
}
