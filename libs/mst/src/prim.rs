use std::cmp::Reverse;
use std::collections::BinaryHeap;

use num_traits::Zero;

use crate::{validate_edges, Edge, GraphError, SpanningForest, Vertex};

/// Lazy Prim, restarted from every vertex not reached so far.
///
/// Produces a minimum spanning forest with the same total weight as
/// [`kruskal`](crate::kruskal); the edge order differs (tree by tree, in
/// the order the vertices were reached).
pub fn prim<W>(num_vertices: usize, edges: &[Edge<W>]) -> Result<SpanningForest<W>, GraphError>
where
    W: Zero + Copy + Ord,
{
    validate_edges(num_vertices, edges)?;

    let mut adjacency: Vec<Vec<usize>> = vec![vec![]; num_vertices];
    for (id, edge) in edges.iter().enumerate() {
        if edge.is_loop() {
            continue;
        }
        adjacency[edge.src as usize].push(id);
        adjacency[edge.dest as usize].push(id);
    }

    let mut visited = vec![false; num_vertices];
    let mut accepted = Vec::with_capacity(num_vertices - 1);
    // (weight, edge id, vertex to enter); the edge id breaks weight ties like the input order
    let mut heap: BinaryHeap<Reverse<(W, usize, Vertex)>> = BinaryHeap::new();

    for start in 0..num_vertices {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        push_incident(&mut heap, &adjacency[start], edges, start as Vertex, &visited);

        while let Some(Reverse((_, id, v))) = heap.pop() {
            if visited[v as usize] {
                continue;
            }
            visited[v as usize] = true;
            accepted.push(edges[id]);
            push_incident(&mut heap, &adjacency[v as usize], edges, v, &visited);
        }
    }

    Ok(SpanningForest::from_accepted(num_vertices, accepted))
}

fn push_incident<W: Copy + Ord>(
    heap: &mut BinaryHeap<Reverse<(W, usize, Vertex)>>,
    incident: &[usize],
    edges: &[Edge<W>],
    from: Vertex,
    visited: &[bool],
) {
    for &id in incident {
        if let Some(to) = edges[id].other(from) {
            if !visited[to as usize] {
                heap.push(Reverse((edges[id].weight, id, to)));
            }
        }
    }
}
