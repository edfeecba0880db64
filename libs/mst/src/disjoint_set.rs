use crate::Vertex;

/// Union-find over the vertices `0..n` with path compression and union by rank.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<Vertex>,
    // upper bound on the height of the tree rooted at the vertex
    rank: Vec<u8>,
    num_sets: usize,
}

impl DisjointSet {
    pub fn new(n: usize) -> Self {
        assert!(
            n <= Vertex::MAX as usize + 1,
            "{} elements exceed the vertex id range",
            n
        );
        Self {
            parent: (0..n).map(|v| v as Vertex).collect(),
            rank: vec![0; n],
            num_sets: n,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Representative of the set containing `x`.
    ///
    /// Every vertex on the way up is re-pointed directly to the root.
    ///
    /// # Panics
    /// if `x` is not in `0..len()`.
    pub fn find(&mut self, x: Vertex) -> Vertex {
        assert!(
            (x as usize) < self.parent.len(),
            "vertex {} out of range (0..{})",
            x,
            self.parent.len()
        );

        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut current = x;
        while current != root {
            let next = self.parent[current as usize];
            self.parent[current as usize] = root;
            current = next;
        }
        root
    }

    /// Merges the sets of `x` and `y`. Returns `false` if they already were the same set.
    pub fn union(&mut self, x: Vertex, y: Vertex) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        let (rank_x, rank_y) = (self.rank[root_x as usize], self.rank[root_y as usize]);
        if rank_x < rank_y {
            self.parent[root_x as usize] = root_y;
        } else if rank_x > rank_y {
            self.parent[root_y as usize] = root_x;
        } else {
            self.parent[root_y as usize] = root_x;
            self.rank[root_x as usize] += 1;
        }
        self.num_sets -= 1;
        true
    }

    pub fn same(&mut self, x: Vertex, y: Vertex) -> bool {
        self.find(x) == self.find(y)
    }
}
