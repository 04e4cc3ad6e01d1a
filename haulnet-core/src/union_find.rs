//! Union-find (disjoint set union) over dense node indices.
//!
//! The spanning-forest builder and the component partition both process
//! edges while merging connected components. Callers map node identifiers
//! to indices `0..n` before use and key off [`DisjointSet::union`]
//! returning whether a merge actually happened.

#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Returns the representative of `node`'s set, compressing the walked
    /// path onto the root as it returns.
    pub(crate) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets holding `left` and `right`, attaching the lower-rank
    /// root under the higher-rank one.
    ///
    /// Returns `false` without modifying anything when both nodes already
    /// share a representative, i.e. linking them would close a cycle.
    pub(crate) fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        if self.rank[left] < self.rank[right] {
            std::mem::swap(&mut left, &mut right);
        }
        if self.rank[left] == self.rank[right] {
            self.rank[left] = self.rank[left].saturating_add(1);
        }
        self.parent[right] = left;
        true
    }
}
