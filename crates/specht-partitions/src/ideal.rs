//! Order ideals (downward-closed sets) of the dominance poset.

use crate::closure::walk_covers;
use crate::error::PartitionError;
use crate::partition::Partition;
use crate::poset::partitions_of;
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::debug;

/// A lower order ideal of partitions of `n`.
///
/// Kept as a minimal generating set (pairwise incomparable) together with
/// the full downward closure of those generators.
#[derive(Clone, Debug)]
pub struct Ideal {
    n: u32,
    generators: Vec<Partition>,
    members: FxHashSet<Partition>,
    /// Members in the order they joined, for deterministic iteration.
    order: Vec<Partition>,
}

impl Ideal {
    /// The empty ideal over partitions of `n`.
    #[must_use]
    pub fn new(n: u32) -> Self {
        Self {
            n,
            generators: Vec::new(),
            members: FxHashSet::default(),
            order: Vec::new(),
        }
    }

    /// The ideal generated by `generators`.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::MismatchedSize`] if a generator is not a
    /// partition of `n`.
    pub fn with_generators<I>(n: u32, generators: I) -> Result<Self, PartitionError>
    where
        I: IntoIterator<Item = Partition>,
    {
        let mut ideal = Self::new(n);
        for g in generators {
            ideal.add_generator(g)?;
        }
        Ok(ideal)
    }

    /// Adds `g` and everything below it.
    ///
    /// Returns `Ok(false)` when `g` is already a member. Otherwise `g` becomes
    /// a generator, replaces any generator it dominates, and its downward
    /// closure joins the ideal.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::MismatchedSize`] if `g` is not a partition
    /// of `n`.
    pub fn add_generator(&mut self, g: Partition) -> Result<bool, PartitionError> {
        if g.n() != self.n {
            return Err(PartitionError::MismatchedSize {
                generator: g.to_string(),
                expected: self.n,
                found: g.n(),
            });
        }
        Ok(self.absorb(g))
    }

    /// Adds `g` of matching size and its downward closure.
    fn absorb(&mut self, g: Partition) -> bool {
        debug_assert_eq!(g.n(), self.n);
        if self.members.contains(&g) {
            return false;
        }

        self.generators.retain(|old| !g.dominates(old));
        self.generators.push(g.clone());
        self.insert(g.clone());

        let members = &mut self.members;
        let order = &mut self.order;
        walk_covers(vec![g], |_, child| {
            if members.contains(&child) {
                return false;
            }
            members.insert(child.clone());
            order.push(child);
            true
        });

        true
    }

    fn insert(&mut self, p: Partition) {
        if self.members.insert(p.clone()) {
            self.order.push(p);
        }
    }

    /// The projection to partitions of `n - 1` along row `k`.
    ///
    /// A partition `p` of `n - 1` belongs to the result when `p` with a box
    /// added to row `k` lies below some generator. Over `n == 0` the result
    /// is the (empty) ideal itself.
    #[must_use]
    pub fn smaller(&self, k: usize) -> Self {
        let Some(m) = self.n.checked_sub(1) else {
            return Self::new(0);
        };

        let mut result = Self::new(m);
        for p in partitions_of(m) {
            let lifted = p.add_to_part(k);
            if self.generators.iter().any(|g| g.dominates(&lifted)) {
                result.absorb(p);
            }
        }

        debug!(
            n = self.n,
            row = k,
            generators = result.generators.len(),
            members = result.len(),
            "projected ideal"
        );
        result
    }

    /// The union of two ideals over the same `n`.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::MismatchedSize`] if the sizes differ.
    pub fn union(&self, other: &Self) -> Result<Self, PartitionError> {
        self.ensure_same_size(other)?;
        let mut result = self.clone();
        for g in &other.generators {
            result.add_generator(g.clone())?;
        }
        Ok(result)
    }

    /// The intersection of two ideals over the same `n`.
    ///
    /// Dominance on partitions of `n` is a lattice, so the intersection of
    /// two principal ideals is the principal ideal of their meet.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::MismatchedSize`] if the sizes differ.
    pub fn intersection(&self, other: &Self) -> Result<Self, PartitionError> {
        self.ensure_same_size(other)?;
        let meets = self
            .generators
            .iter()
            .flat_map(|a| other.generators.iter().map(move |b| a.meet(b)));
        Self::with_generators(self.n, meets.collect::<Vec<_>>())
    }

    fn ensure_same_size(&self, other: &Self) -> Result<(), PartitionError> {
        if self.n == other.n {
            return Ok(());
        }
        Err(PartitionError::MismatchedSize {
            generator: other.to_string(),
            expected: self.n,
            found: other.n,
        })
    }

    /// The size of every member partition.
    #[must_use]
    pub fn n(&self) -> u32 {
        self.n
    }

    /// The minimal generators, pairwise incomparable.
    #[must_use]
    pub fn generators(&self) -> &[Partition] {
        &self.generators
    }

    /// Every member, in the order it joined the ideal.
    #[must_use]
    pub fn partitions(&self) -> &[Partition] {
        &self.order
    }

    /// Returns true if `p` is a member.
    #[must_use]
    pub fn contains(&self, p: &Partition) -> bool {
        self.members.contains(p)
    }

    /// The number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the ideal has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl fmt::Display for Ideal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LowerOrderIdeal({}) generated by [", self.n)?;
        for (i, g) in self.generators.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{g}")?;
        }
        write!(f, "] with {} partitions", self.len())
    }
}

/// The maximal elements of `partitions` under dominance, first occurrence kept.
///
/// This is the minimal generating set of the ideal the partitions generate.
#[must_use]
pub fn maximal_elements<I>(partitions: I) -> Vec<Partition>
where
    I: IntoIterator<Item = Partition>,
{
    let mut maximal: Vec<Partition> = Vec::new();
    for p in partitions {
        if maximal.iter().any(|m| m.dominates(&p)) {
            continue;
        }
        maximal.retain(|m| !p.dominates(m));
        maximal.push(p);
    }
    maximal
}
