use std::collections::BinaryHeap;

use crate::node::NodeId;

/// Heap entry ordered by `priority`, then `cost`, then insertion sequence.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry {
    priority: u32,
    cost: u32,
    seq: u64,
    node: NodeId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first, then
        // smallest cost, then the earliest pushed.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Minimum-priority queue of pending search nodes.
///
/// Equal priorities pop the smaller cost from start first; remaining ties
/// are broken first-in first-out using a per-queue sequence counter, so pop
/// order depends only on the sequence of pushes. Duplicate nodes are not
/// filtered here.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `node` with the given priority and cost from start.
    pub fn push(&mut self, node: NodeId, priority: u32, cost: u32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            cost,
            seq,
            node,
        });
    }

    /// Remove and return the node with the smallest priority.
    pub fn pop_min(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.node)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NodeArena, SearchNode};
    use wayfind_core::Position;

    fn ids(n: usize) -> Vec<NodeId> {
        let mut arena = NodeArena::new();
        (0..n)
            .map(|i| {
                arena.alloc(SearchNode {
                    position: Position::new(i as i32, 0),
                    cost_from_start: 0,
                    heuristic_estimate: 0,
                    predecessor: None,
                })
            })
            .collect()
    }

    #[test]
    fn pops_smallest_priority_first() {
        let n = ids(3);
        let mut f = Frontier::new();
        f.push(n[0], 7, 0);
        f.push(n[1], 2, 0);
        f.push(n[2], 5, 0);
        assert_eq!(f.len(), 3);
        assert_eq!(f.pop_min(), Some(n[1]));
        assert_eq!(f.pop_min(), Some(n[2]));
        assert_eq!(f.pop_min(), Some(n[0]));
        assert_eq!(f.pop_min(), None);
        assert!(f.is_empty());
    }

    #[test]
    fn equal_priorities_pop_in_insertion_order() {
        let n = ids(5);
        let mut f = Frontier::new();
        f.push(n[3], 4, 2);
        f.push(n[0], 4, 2);
        f.push(n[4], 1, 2);
        f.push(n[2], 4, 2);
        f.push(n[1], 4, 2);
        let order: Vec<_> = std::iter::from_fn(|| f.pop_min()).collect();
        assert_eq!(order, vec![n[4], n[3], n[0], n[2], n[1]]);
    }

    #[test]
    fn duplicates_are_kept() {
        let n = ids(1);
        let mut f = Frontier::new();
        f.push(n[0], 1, 0);
        f.push(n[0], 1, 0);
        assert_eq!(f.len(), 2);
    }

    #[test]
    fn equal_priorities_pop_smaller_cost_first() {
        let n = ids(4);
        let mut f = Frontier::new();
        f.push(n[0], 6, 4);
        f.push(n[1], 6, 1);
        f.push(n[2], 5, 5);
        f.push(n[3], 6, 1);
        let order: Vec<_> = std::iter::from_fn(|| f.pop_min()).collect();
        assert_eq!(order, vec![n[2], n[1], n[3], n[0]]);
    }
}
