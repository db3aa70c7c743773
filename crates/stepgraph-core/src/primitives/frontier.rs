use crate::graph::{NodeId, Weight};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Entry in a `MinFrontier`, ordered by priority then insertion order
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry {
    pub priority: Weight,
    pub node: NodeId,
    seq: u64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
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
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-priority frontier with lazy deletion.
///
/// Pushing is cheap and never deduplicates: a node may sit in the frontier
/// several times with stale priorities. Callers recheck validity against
/// their own visited set when an entry is popped. Equal priorities pop in
/// insertion order.
#[derive(Debug, Default)]
pub struct MinFrontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    next_seq: u64,
}

impl MinFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frontier seeded with a single entry
    pub fn seeded(priority: Weight, node: NodeId) -> Self {
        let mut frontier = Self::new();
        frontier.push(priority, node);
        frontier
    }

    pub fn push(&mut self, priority: Weight, node: NodeId) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(FrontierEntry {
            priority,
            node,
            seq,
        }));
    }

    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
