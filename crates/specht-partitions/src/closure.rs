//! Breadth-first traversal along cover edges.
//!
//! Both the poset builder and ideal closure walk downward from a set of
//! partitions until nothing new turns up; they differ only in what they
//! record per edge, which the caller supplies as `visit`.

use crate::partition::Partition;
use tracing::trace;

/// Walks cover edges downward from `start`, level by level.
///
/// `visit(parent, child)` is called once per edge and returns true when
/// `child` is new and must be expanded in the next level. Terminates because
/// every cover edge strictly decreases in dominance and the set of partitions
/// of a fixed size is finite.
///
/// Returns the number of levels expanded.
pub(crate) fn walk_covers<F>(start: Vec<Partition>, mut visit: F) -> usize
where
    F: FnMut(&Partition, Partition) -> bool,
{
    let mut frontier = start;
    let mut levels = 0;

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for parent in &frontier {
            for child in parent.covered_partitions() {
                if visit(parent, child.clone()) {
                    next.push(child);
                }
            }
        }
        trace!(level = levels, expanded = frontier.len(), discovered = next.len(), "cover walk level");
        frontier = next;
        levels += 1;
    }

    levels
}
