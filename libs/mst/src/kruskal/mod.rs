use log::{debug, trace};
use num_traits::Zero;

use crate::disjoint_set::DisjointSet;
use crate::{validate_edges, Edge, GraphError, SpanningForest};


/// Minimum spanning forest of the undirected graph on `0..num_vertices`.
///
/// Edges are considered in ascending weight order; equal weights keep their
/// input order, so the result is deterministic. The accepted edges are
/// returned in the order they were accepted. A disconnected graph yields a
/// [`ForestKind::PartialForest`](crate::ForestKind::PartialForest) with fewer
/// than `num_vertices - 1` edges.
pub fn kruskal<W>(num_vertices: usize, edges: &[Edge<W>]) -> Result<SpanningForest<W>, GraphError>
where
    W: Zero + Copy + Ord,
{
    validate_edges(num_vertices, edges)?;

    let mut sorted = edges.to_vec();
    sorted.sort_by(|a, b| a.weight.cmp(&b.weight));

    let mut ds = DisjointSet::new(num_vertices);
    let mut accepted = Vec::with_capacity(num_vertices - 1);

    for edge in sorted {
        if accepted.len() == num_vertices - 1 {
            break;
        }
        if ds.find(edge.src) != ds.find(edge.dest) {
            debug!("accept {} -- {} (#{})", edge.src, edge.dest, accepted.len());
            ds.union(edge.src, edge.dest);
            accepted.push(edge);
        } else {
            trace!("reject {} -- {}: closes a cycle", edge.src, edge.dest);
        }
    }

    let forest = SpanningForest::from_accepted(num_vertices, accepted);
    debug!(
        "kruskal: {} of {} edges accepted, {} component(s)",
        forest.len(),
        edges.len(),
        ds.num_sets()
    );
    Ok(forest)
}
