//! Integer partitions as immutable values.
//!
//! A [`Partition`] stores its parts in non-increasing order and is compared,
//! hashed and looked up by that canonical sequence. Every transformation
//! builds a new partition.

use crate::error::PartitionError;
use smallvec::SmallVec;
use std::fmt;

/// Inline capacity for parts; partitions of interest rarely have more rows.
const INLINE_PARTS: usize = 8;

type Parts = SmallVec<[u32; INLINE_PARTS]>;

/// A corner of a Young diagram: the last row of a run of equal parts.
///
/// Rows are 1-indexed. The final row is always a corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Corner {
    /// 1-indexed row at which the run of equal parts ends.
    pub row: usize,
    /// The common value of the parts in that run.
    pub value: u32,
}

/// A partition of `n`: positive parts in non-increasing order.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Partition {
    parts: Parts,
    n: u32,
}

impl Partition {
    /// Creates a partition from parts in any order.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::InvalidPartition`] if `parts` is empty or
    /// contains a non-positive entry.
    pub fn new(parts: impl IntoIterator<Item = i64>) -> Result<Self, PartitionError> {
        let raw: Vec<i64> = parts.into_iter().collect();
        let invalid = |reason: &'static str| PartitionError::InvalidPartition {
            parts: raw.clone(),
            reason,
        };

        if raw.is_empty() {
            return Err(invalid("a partition needs at least one part"));
        }

        let mut converted = Parts::with_capacity(raw.len());
        let mut n = 0u32;
        for &part in &raw {
            if part <= 0 {
                return Err(invalid("parts must be positive"));
            }
            let part = u32::try_from(part).map_err(|_| invalid("part does not fit in u32"))?;
            n = n
                .checked_add(part)
                .ok_or_else(|| invalid("size does not fit in u32"))?;
            converted.push(part);
        }

        Ok(Self::from_unsorted(converted, n))
    }

    /// Creates a partition from unsigned parts in any order.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::InvalidPartition`] if `parts` is empty or
    /// contains a zero.
    pub fn from_parts(parts: impl IntoIterator<Item = u32>) -> Result<Self, PartitionError> {
        Self::new(parts.into_iter().map(i64::from))
    }

    /// The single row `[n]`, top of the dominance order on partitions of `n`.
    ///
    /// `n == 0` gives the empty partition.
    #[must_use]
    pub fn row(n: u32) -> Self {
        if n == 0 {
            return Self::empty();
        }
        Self {
            parts: smallvec::smallvec![n],
            n,
        }
    }

    /// The single column `[1, 1, ..., 1]`, bottom of the dominance order.
    #[must_use]
    pub fn column(n: u32) -> Self {
        Self {
            parts: std::iter::repeat(1).take(n as usize).collect(),
            n,
        }
    }

    /// The unique partition of 0.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            parts: Parts::new(),
            n: 0,
        }
    }

    /// `n` must be the sum of `parts`.
    fn from_unsorted(mut parts: Parts, n: u32) -> Self {
        parts.retain(|p| *p > 0);
        parts.sort_unstable_by(|a, b| b.cmp(a));
        debug_assert_eq!(parts.iter().map(|&p| u64::from(p)).sum::<u64>(), u64::from(n));
        Self { parts, n }
    }

    /// The parts, largest first.
    #[must_use]
    pub fn parts(&self) -> &[u32] {
        &self.parts
    }

    /// The size: sum of the parts.
    #[must_use]
    pub fn n(&self) -> u32 {
        self.n
    }

    /// The number of parts (rows).
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns true for the empty partition of 0.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The largest part, or 0 for the empty partition.
    #[must_use]
    pub fn largest_part(&self) -> u32 {
        self.parts.first().copied().unwrap_or(0)
    }

    /// The conjugate partition (transpose of the Young diagram).
    #[must_use]
    pub fn conjugate(&self) -> Self {
        let parts = (1..=self.largest_part())
            .map(|column| {
                let height = self.parts.iter().take_while(|&&p| p >= column).count();
                u32::try_from(height).unwrap_or(u32::MAX)
            })
            .collect();
        Self { parts, n: self.n }
    }

    /// The corners of the Young diagram, top to bottom.
    ///
    /// Row `i` is a corner when `parts[i + 1] < parts[i]` (1-indexed), and the
    /// last row is always one.
    #[must_use]
    pub fn corner_set(&self) -> Vec<Corner> {
        let mut corners: Vec<Corner> = self
            .parts
            .windows(2)
            .enumerate()
            .filter(|(_, w)| w[1] < w[0])
            .map(|(i, w)| Corner {
                row: i + 1,
                value: w[0],
            })
            .collect();

        if let Some(&last) = self.parts.last() {
            corners.push(Corner {
                row: self.len(),
                value: last,
            });
        }

        corners
    }

    /// The partitions covered by this one in the dominance order.
    ///
    /// Each corner `(i, j)` contributes at most one partition:
    /// - last row with `j > 1`: drop a box into a new row of length 1;
    /// - next row shorter than `j - 1`: move a box from row `i` to row `i + 1`;
    /// - `j == 2`: the rows below are all 1, so start a new row of length 1;
    /// - otherwise move a box from row `i` to the first later row of
    ///   length `j - 2`, if there is one.
    #[must_use]
    pub fn covered_partitions(&self) -> Vec<Partition> {
        let parts = &self.parts;
        let len = parts.len();
        let mut covered = Vec::new();

        for Corner { row: i, value: j } in self.corner_set() {
            let mut next = parts.clone();
            if i == len {
                if j > 1 {
                    next[len - 1] -= 1;
                    next.push(1);
                    covered.push(Self::from_unsorted(next, self.n));
                }
            } else if parts[i] < j - 1 {
                next[i - 1] -= 1;
                next[i] += 1;
                covered.push(Self::from_unsorted(next, self.n));
            } else if j == 2 {
                next[i - 1] -= 1;
                next.push(1);
                covered.push(Self::from_unsorted(next, self.n));
            } else if let Some(k) = (i..len).find(|&k| parts[k] == j - 2) {
                next[i - 1] -= 1;
                next[k] += 1;
                covered.push(Self::from_unsorted(next, self.n));
            }
        }

        covered
    }

    /// Returns true if `self` dominates `other`.
    ///
    /// Both part sequences are zero-padded to a common length and every prefix
    /// sum of `self` must be at least the matching prefix sum of `other`.
    #[must_use]
    pub fn dominates(&self, other: &Self) -> bool {
        let len = self.len().max(other.len());
        let mut ours = 0u64;
        let mut theirs = 0u64;
        for i in 0..len {
            ours += u64::from(self.parts.get(i).copied().unwrap_or(0));
            theirs += u64::from(other.parts.get(i).copied().unwrap_or(0));
            if ours < theirs {
                return false;
            }
        }
        true
    }

    /// Returns true if `other` dominates `self`.
    #[must_use]
    pub fn dominated_by(&self, other: &Self) -> bool {
        other.dominates(self)
    }

    /// Dominance without equality.
    #[must_use]
    pub fn strictly_dominates(&self, other: &Self) -> bool {
        self != other && self.dominates(other)
    }

    /// Returns true if one of the two dominates the other.
    #[must_use]
    pub fn is_comparable(&self, other: &Self) -> bool {
        self.dominates(other) || other.dominates(self)
    }

    /// The greatest lower bound in the dominance order.
    ///
    /// Its prefix sums are the pointwise minimum of the two inputs' prefix
    /// sums; the pointwise minimum of concave sequences is concave, so the
    /// differences form a partition again.
    #[must_use]
    pub fn meet(&self, other: &Self) -> Self {
        let len = self.len().max(other.len());
        let mut ours = 0u32;
        let mut theirs = 0u32;
        let mut running = 0u32;
        let mut parts = Parts::new();

        for i in 0..len {
            ours += self.parts.get(i).copied().unwrap_or(0);
            theirs += other.parts.get(i).copied().unwrap_or(0);
            let next = ours.min(theirs) - running;
            if next == 0 {
                break;
            }
            parts.push(next);
            running += next;
        }

        Self { parts, n: running }
    }

    /// Adds a box to row `k` (1-indexed, in the current order).
    ///
    /// Rows past the end start a new row of length 1. Row 0 is read as row 1.
    ///
    /// # Panics
    ///
    /// Panics if the size is already `u32::MAX`.
    #[must_use]
    pub fn add_to_part(&self, k: usize) -> Self {
        assert!(self.n < u32::MAX, "partition size overflows u32");
        let mut parts = self.parts.clone();
        let k = k.max(1);
        if k > parts.len() {
            parts.push(1);
        } else {
            parts[k - 1] += 1;
        }
        Self::from_unsorted(parts, self.n + 1)
    }

    /// Removes a box from row `k` (1-indexed, in the current order).
    ///
    /// `k` is clamped into `1..=len`, so any row past the end removes from the
    /// last row; a row that reaches 0 disappears. The empty partition is
    /// returned unchanged.
    #[must_use]
    pub fn remove_from_part(&self, k: usize) -> Self {
        if self.is_empty() {
            return self.clone();
        }
        let mut parts = self.parts.clone();
        let k = k.clamp(1, parts.len());
        parts[k - 1] -= 1;
        Self::from_unsorted(parts, self.n - 1)
    }
}

impl fmt::Debug for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Partition({:?})", self.parts.as_slice())
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.parts.as_slice())
    }
}
