//! The dominance order on partitions of `n`.

use crate::closure::walk_covers;
use crate::partition::Partition;
use rustc_hash::FxHashMap;
use std::fmt;
use tracing::debug;

/// All partitions of `n` with their cover relations and ranks.
///
/// Partitions are stored once, in discovery order; adjacency and ranks are
/// side tables indexed by position so the partitions stay plain values.
#[derive(Clone, Debug)]
pub struct Poset {
    n: u32,
    partitions: Vec<Partition>,
    index: FxHashMap<Partition, usize>,
    /// `covers[i]`: partitions immediately below `partitions[i]`.
    covers: Vec<Vec<usize>>,
    /// `covered_by[i]`: partitions immediately above `partitions[i]`.
    covered_by: Vec<Vec<usize>>,
    ranks: Vec<usize>,
}

impl Poset {
    /// Builds the dominance poset on partitions of `n`.
    ///
    /// Expands breadth-first from `[n]`: every covered partition is looked up
    /// by value and reused if already known, and each edge is recorded in both
    /// directions.
    #[must_use]
    pub fn build(n: u32) -> Self {
        let top = Partition::row(n);
        let mut poset = Self {
            n,
            partitions: vec![top.clone()],
            index: FxHashMap::from_iter([(top.clone(), 0)]),
            covers: vec![Vec::new()],
            covered_by: vec![Vec::new()],
            ranks: vec![0],
        };

        let levels = walk_covers(vec![top], |parent, child| poset.record_cover(parent, child));
        poset.settle_ranks();

        debug!(
            n,
            partitions = poset.len(),
            edges = poset.edge_count(),
            levels,
            max_rank = poset.max_rank(),
            "built dominance poset"
        );
        poset
    }

    /// Records `parent -> child`, returning true if `child` was new.
    fn record_cover(&mut self, parent: &Partition, child: Partition) -> bool {
        let parent_idx = self.index[parent];
        let (child_idx, is_new) = match self.index.get(&child) {
            Some(&idx) => (idx, false),
            None => {
                let idx = self.partitions.len();
                self.index.insert(child.clone(), idx);
                self.partitions.push(child);
                self.covers.push(Vec::new());
                self.covered_by.push(Vec::new());
                self.ranks.push(0);
                (idx, true)
            }
        };

        if !self.covers[parent_idx].contains(&child_idx) {
            self.covers[parent_idx].push(child_idx);
            self.covered_by[child_idx].push(parent_idx);
        }
        self.ranks[child_idx] = self.ranks[child_idx].max(self.ranks[parent_idx] + 1);

        is_new
    }

    /// Makes every rank the length of the longest chain down from the top.
    ///
    /// The breadth-first pass can raise a rank after the partition was already
    /// expanded. Lexicographic order extends dominance, so one sweep in
    /// decreasing lexicographic order sees every parent before its children.
    fn settle_ranks(&mut self) {
        let mut order: Vec<usize> = (0..self.partitions.len()).collect();
        order.sort_by(|&a, &b| self.partitions[b].parts().cmp(self.partitions[a].parts()));

        for idx in order {
            let rank = self.covered_by[idx]
                .iter()
                .map(|&parent| self.ranks[parent] + 1)
                .max()
                .unwrap_or(0);
            self.ranks[idx] = rank;
        }
    }

    fn edge_count(&self) -> usize {
        self.covers.iter().map(Vec::len).sum()
    }

    fn lookup(&self, p: &Partition) -> Option<usize> {
        self.index.get(p).copied()
    }

    fn resolve(&self, indices: &[usize]) -> Vec<&Partition> {
        indices.iter().map(|&i| &self.partitions[i]).collect()
    }

    /// The size of every partition in the poset.
    #[must_use]
    pub fn n(&self) -> u32 {
        self.n
    }

    /// All partitions of `n`, in breadth-first discovery order.
    #[must_use]
    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// Consumes the poset, keeping only its partitions.
    #[must_use]
    pub fn into_partitions(self) -> Vec<Partition> {
        self.partitions
    }

    /// The number of partitions, i.e. the partition number p(n).
    #[must_use]
    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    /// Always false: even `n == 0` has the empty partition.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    /// Returns true if `p` is a partition of this poset.
    #[must_use]
    pub fn contains(&self, p: &Partition) -> bool {
        self.index.contains_key(p)
    }

    /// The poset's own instance equal to `p`.
    #[must_use]
    pub fn get(&self, p: &Partition) -> Option<&Partition> {
        self.lookup(p).map(|i| &self.partitions[i])
    }

    /// Partitions immediately below `p` (empty if `p` is not in the poset).
    #[must_use]
    pub fn covers(&self, p: &Partition) -> Vec<&Partition> {
        self.lookup(p)
            .map(|i| self.resolve(&self.covers[i]))
            .unwrap_or_default()
    }

    /// Partitions immediately above `p` (empty if `p` is not in the poset).
    #[must_use]
    pub fn covered_by(&self, p: &Partition) -> Vec<&Partition> {
        self.lookup(p)
            .map(|i| self.resolve(&self.covered_by[i]))
            .unwrap_or_default()
    }

    /// Length of the longest chain from the top down to `p`.
    #[must_use]
    pub fn rank(&self, p: &Partition) -> Option<usize> {
        self.lookup(p).map(|i| self.ranks[i])
    }

    /// The largest rank, attained by the bottom element.
    #[must_use]
    pub fn max_rank(&self) -> usize {
        self.ranks.iter().copied().max().unwrap_or(0)
    }

    /// Cover relations as `(lower, upper)` pairs.
    #[must_use]
    pub fn cover_edges(&self) -> Vec<(&Partition, &Partition)> {
        self.covers
            .iter()
            .enumerate()
            .flat_map(|(upper, lowers)| {
                lowers
                    .iter()
                    .map(move |&lower| (&self.partitions[lower], &self.partitions[upper]))
            })
            .collect()
    }

    /// Partitions grouped by rank, top level first.
    #[must_use]
    pub fn levels(&self) -> Vec<Vec<&Partition>> {
        let mut levels = vec![Vec::new(); self.max_rank() + 1];
        for (p, &rank) in self.partitions.iter().zip(&self.ranks) {
            levels[rank].push(p);
        }
        levels
    }

    /// The top element `[n]`.
    #[must_use]
    pub fn top(&self) -> &Partition {
        &self.partitions[0]
    }

    /// The bottom element `[1, ..., 1]`: the one partition covering nothing.
    #[must_use]
    pub fn bottom(&self) -> &Partition {
        let idx = self.covers.iter().position(Vec::is_empty).unwrap_or(0);
        &self.partitions[idx]
    }
}

impl fmt::Display for Poset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Partitions({}) with {} partitions", self.n, self.len())
    }
}

/// All partitions of `n`, largest first in breadth-first order.
#[must_use]
pub fn partitions_of(n: u32) -> Vec<Partition> {
    Poset::build(n).into_partitions()
}
