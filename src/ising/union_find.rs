/// Disjoint-set forest over the elements `0..n`.
///
/// Union by rank with path halving in `find`, so a sequence of `m` operations
/// costs `O(m α(n))`. A Swendsen-Wang step builds one of these from scratch and
/// drops it at the end of the step.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// Create `n` singleton components
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative root of the component containing `x`
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the components containing `x` and `y`; a no-op if they already match
    pub fn union(&mut self, x: usize, y: usize) {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return;
        }
        if self.rank[rx] < self.rank[ry] {
            self.parent[rx] = ry;
        } else {
            self.parent[ry] = rx;
            if self.rank[rx] == self.rank[ry] {
                self.rank[rx] += 1;
            }
        }
    }

    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// One representative per component, in ascending order
    pub fn roots(&mut self) -> Vec<usize> {
        (0..self.len()).filter(|&i| self.find(i) == i).collect()
    }

    /// Every element whose representative is `root`
    pub fn members(&mut self, root: usize) -> Vec<usize> {
        (0..self.len()).filter(|&i| self.find(i) == root).collect()
    }
}
