use std::fmt::{Display, Formatter};

use num_traits::Zero;

pub mod disjoint_set;
pub mod kruskal;
pub mod prim;

pub use disjoint_set::DisjointSet;
pub use kruskal::kruskal;
pub use prim::prim;

pub type Vertex = u32;

/// Undirected weighted edge between `src` and `dest`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    pub src: Vertex,
    pub dest: Vertex,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(src: Vertex, dest: Vertex, weight: W) -> Self {
        Self { src, dest, weight }
    }

    pub fn is_loop(&self) -> bool {
        self.src == self.dest
    }

    /// Endpoint opposite to `v`, `None` if `v` is not incident to the edge.
    pub fn other(&self, v: Vertex) -> Option<Vertex> {
        if self.src == v {
            Some(self.dest)
        } else if self.dest == v {
            Some(self.src)
        } else {
            None
        }
    }
}

impl<W: Display> Display for Edge<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {} == {}", self.src, self.dest, self.weight)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    NoVertices,
    TooManyVertices(usize),
    InvalidEdge {
        index: usize,
        src: Vertex,
        dest: Vertex,
        num_vertices: usize,
    },
}

impl Display for GraphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::NoVertices => write!(f, "graph has no vertices"),
            GraphError::TooManyVertices(n) => write!(
                f,
                "graph has {} vertices, at most {} supported",
                n,
                Vertex::MAX as usize + 1
            ),
            GraphError::InvalidEdge {
                index,
                src,
                dest,
                num_vertices,
            } => write!(
                f,
                "invalid edge #{} ({} -- {}): vertices must be in [0, {})",
                index, src, dest, num_vertices
            ),
        }
    }
}

impl std::error::Error for GraphError {}

/// Checks the input of a spanning forest computation before anything is touched.
pub fn validate_edges<W>(num_vertices: usize, edges: &[Edge<W>]) -> Result<(), GraphError> {
    if num_vertices == 0 {
        return Err(GraphError::NoVertices);
    }
    // vertex ids are `Vertex`, so 0..num_vertices must be representable
    if num_vertices - 1 > Vertex::MAX as usize {
        return Err(GraphError::TooManyVertices(num_vertices));
    }
    match edges.iter().enumerate().find(|(_, e)| {
        e.src as usize >= num_vertices || e.dest as usize >= num_vertices
    }) {
        Some((index, e)) => Err(GraphError::InvalidEdge {
            index,
            src: e.src,
            dest: e.dest,
            num_vertices,
        }),
        None => Ok(()),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForestKind {
    /// V-1 edges, every vertex reachable from every other.
    SpanningTree,
    /// The input graph was disconnected, one tree per component.
    PartialForest,
}

impl ForestKind {
    pub fn is_spanning_tree(&self) -> bool {
        match self {
            Self::SpanningTree => true,
            _ => false,
        }
    }
}

impl Display for ForestKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ForestKind::SpanningTree => write!(f, "spanning-tree"),
            ForestKind::PartialForest => write!(f, "partial-forest"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningForest<W> {
    pub num_vertices: usize,
    pub edges: Vec<Edge<W>>,
    pub kind: ForestKind,
}

impl<W> SpanningForest<W>
where
    W: Zero + Copy,
{
    pub(crate) fn from_accepted(num_vertices: usize, edges: Vec<Edge<W>>) -> Self {
        let kind = if edges.len() + 1 == num_vertices {
            ForestKind::SpanningTree
        } else {
            ForestKind::PartialForest
        };
        Self {
            num_vertices,
            edges,
            kind,
        }
    }

    pub fn total_weight(&self) -> W {
        self.edges
            .iter()
            .fold(W::zero(), |acc, edge| acc + edge.weight)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of trees in the forest, isolated vertices included.
    pub fn num_components(&self) -> usize {
        self.num_vertices - self.edges.len()
    }
}
