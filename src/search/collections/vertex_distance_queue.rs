use std::{cmp::Reverse, collections::BinaryHeap};

use radix_heap::RadixHeapMap;

use crate::graphs::{Distance, Vertex};

/// A priority queue over vertices keyed by tentative distance.
///
/// Implementations push without a decrease-key operation, so a vertex
/// may sit in the queue multiple times with stale keys. That is only
/// correct when every pop is paired with a settled-set check
/// ([`super::vertex_expanded_data::VertexExpandedData::expand`]): an
/// already-settled vertex popped again must be discarded without
/// relaxing its neighbors.
pub trait VertexDistanceQueue {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    fn insert(&mut self, vertex: Vertex, distance: Distance);

    /// Removes and returns a vertex with the smallest distance, or
    /// `None` if the queue is empty.
    fn pop(&mut self) -> Option<Vertex>;

    fn is_empty(&self) -> bool;
}

/// Binary-heap queue; the default choice, O(log n) per operation.
pub struct VertexDistanceQueueBinaryHeap {
    heap: BinaryHeap<Reverse<(Distance, Vertex)>>,
}

impl Default for VertexDistanceQueueBinaryHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexDistanceQueueBinaryHeap {
    pub fn new() -> Self {
        VertexDistanceQueueBinaryHeap {
            heap: BinaryHeap::new(),
        }
    }
}

impl VertexDistanceQueue for VertexDistanceQueueBinaryHeap {
    fn clear(&mut self) {
        self.heap.clear();
    }

    fn insert(&mut self, vertex: Vertex, distance: Distance) {
        self.heap.push(Reverse((distance, vertex)));
    }

    fn pop(&mut self) -> Option<Vertex> {
        let Reverse((_distance, vertex)) = self.heap.pop()?;

        Some(vertex)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Radix-heap queue for monotone searches.
///
/// Keys are stored negated because the radix heap pops its largest key.
/// Only usable when inserted keys never fall below the last popped key,
/// which holds for Dijkstra and for A* with a consistent heuristic.
pub struct VertexDistanceQueueRadix {
    heap: RadixHeapMap<i64, Vertex>,
}

impl Default for VertexDistanceQueueRadix {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexDistanceQueueRadix {
    pub fn new() -> Self {
        VertexDistanceQueueRadix {
            heap: RadixHeapMap::new(),
        }
    }
}

impl VertexDistanceQueue for VertexDistanceQueueRadix {
    fn clear(&mut self) {
        self.heap.clear();
    }

    fn insert(&mut self, vertex: Vertex, distance: Distance) {
        self.heap.push(-i64::from(distance), vertex);
    }

    fn pop(&mut self) -> Option<Vertex> {
        let (_negated_distance, vertex) = self.heap.pop()?;

        Some(vertex)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Linear-scan queue, O(n) per pop. Acceptable for small graphs and for
/// cross-checking the heap implementations in tests; never the right
/// choice for the stated complexity bound on large inputs.
pub struct VertexDistanceQueueLinear {
    entries: Vec<(Distance, Vertex)>,
}

impl Default for VertexDistanceQueueLinear {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexDistanceQueueLinear {
    pub fn new() -> Self {
        VertexDistanceQueueLinear {
            entries: Vec::new(),
        }
    }
}

impl VertexDistanceQueue for VertexDistanceQueueLinear {
    fn clear(&mut self) {
        self.entries.clear();
    }

    fn insert(&mut self, vertex: Vertex, distance: Distance) {
        self.entries.push((distance, vertex));
    }

    fn pop(&mut self) -> Option<Vertex> {
        let smallest = self
            .entries
            .iter()
            .enumerate()
            .min_by_key(|(_, entry)| **entry)?
            .0;

        Some(self.entries.swap_remove(smallest).1)
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(queue: &mut dyn VertexDistanceQueue) -> Vec<Vertex> {
        let mut popped = Vec::new();
        while let Some(vertex) = queue.pop() {
            popped.push(vertex);
        }
        popped
    }

    #[test]
    fn queues_agree_on_pop_order() {
        let inserts = [(5u32, 0u32), (1, 1), (3, 2), (1, 3), (8, 4)];

        let mut heap = VertexDistanceQueueBinaryHeap::new();
        let mut linear = VertexDistanceQueueLinear::new();
        for &(distance, vertex) in &inserts {
            heap.insert(vertex, distance);
            linear.insert(vertex, distance);
        }

        let from_heap = drain(&mut heap);
        let from_linear = drain(&mut linear);

        assert_eq!(from_heap.len(), inserts.len());
        // both must be sorted by the keys they were inserted with
        let key_of =
            |vertex: &Vertex| inserts.iter().find(|entry| entry.1 == *vertex).unwrap().0;
        assert!(from_heap.windows(2).all(|w| key_of(&w[0]) <= key_of(&w[1])));
        assert!(from_linear
            .windows(2)
            .all(|w| key_of(&w[0]) <= key_of(&w[1])));
    }

    #[test]
    fn radix_queue_pops_monotone_inserts_in_order() {
        let mut queue = VertexDistanceQueueRadix::new();
        queue.insert(0, 0);
        assert_eq!(queue.pop(), Some(0));
        queue.insert(1, 2);
        queue.insert(2, 4);
        assert_eq!(queue.pop(), Some(1));
        queue.insert(3, 3);
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), Some(2));
        assert!(queue.is_empty());
    }
}
