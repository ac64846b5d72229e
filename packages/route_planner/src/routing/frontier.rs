//! Min-priority work queue shared by the Dijkstra and A* engines. A city may
//! be queued more than once; callers are expected to skip entries for cities
//! which have already been settled when they are popped.

use crate::common::graph::Weight;
use petgraph::graph::NodeIndex;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A single queued city, ordered by priority alone
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    inx: NodeIndex,
    priority: Weight,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

/// Ascending priority queue of city indexes
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Queue a city at the provided priority
    pub fn push(&mut self, inx: NodeIndex, priority: Weight) {
        self.heap.push(Reverse(FrontierEntry { inx, priority }));
    }

    /// Remove and return the city with the lowest priority, if any remain
    pub fn pop_min(&mut self) -> Option<NodeIndex> {
        self.heap.pop().map(|Reverse(entry)| entry.inx)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    /// Cities come out in ascending priority regardless of insertion order
    #[test]
    fn test_pop_min_order() {
        let mut frontier = Frontier::new();
        frontier.push(NodeIndex::new(0), 30);
        frontier.push(NodeIndex::new(1), 10);
        frontier.push(NodeIndex::new(2), 20);

        let mut result = Vec::new();
        while let Some(inx) = frontier.pop_min() {
            result.push(inx.index());
        }

        assert_eq!(result, vec![1, 2, 0]);
    }

    /// The same city can be queued several times, each entry is returned
    #[test]
    fn test_duplicate_entries() {
        let mut frontier = Frontier::new();
        frontier.push(NodeIndex::new(4), 50);
        frontier.push(NodeIndex::new(4), 5);

        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop_min(), Some(NodeIndex::new(4)));
        assert_eq!(frontier.pop_min(), Some(NodeIndex::new(4)));
        assert!(frontier.is_empty());
    }

    /// Popping an empty frontier returns nothing
    #[test]
    fn test_pop_empty() {
        let mut frontier = Frontier::default();

        assert_eq!(frontier.pop_min(), None);
    }
}
