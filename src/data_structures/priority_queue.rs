use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority frontier over (priority, vertex) pairs.
///
/// Entries with equal priority pop in ascending vertex order. Stale entries are
/// not removed; the caller skips vertices it has already settled.
#[derive(Debug)]
pub struct BinaryHeapWrapper<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> BinaryHeapWrapper<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    pub fn new() -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty frontier with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Pushes a vertex with the given priority
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }
}

impl<V, P> Default for BinaryHeapWrapper<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
