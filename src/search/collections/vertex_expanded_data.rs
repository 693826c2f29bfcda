use fixedbitset::FixedBitSet;

use crate::graphs::{Graph, Vertex};

/// The settled set of a search run.
///
/// `expand` marks a vertex settled and reports whether it already was.
/// Paired with the lazy-deletion queues this is what keeps relaxation
/// work bounded: a stale queue entry for a settled vertex is discarded
/// on pop instead of being re-relaxed.
pub trait VertexExpandedData {
    fn expand(&mut self, vertex: Vertex) -> bool;

    fn clear(&mut self);
}

pub struct VertexExpandedDataVec {
    expanded: Vec<bool>,
}

impl VertexExpandedDataVec {
    pub fn new(graph: &dyn Graph) -> Self {
        VertexExpandedDataVec {
            expanded: vec![false; graph.number_of_vertices() as usize],
        }
    }
}

impl VertexExpandedData for VertexExpandedDataVec {
    fn expand(&mut self, vertex: Vertex) -> bool {
        let is_expanded = self.expanded[vertex as usize];
        self.expanded[vertex as usize] = true;
        is_expanded
    }

    fn clear(&mut self) {
        self.expanded.fill(false);
    }
}

pub struct VertexExpandedDataBitSet {
    expanded: FixedBitSet,
}

impl VertexExpandedDataBitSet {
    pub fn new(graph: &dyn Graph) -> Self {
        VertexExpandedDataBitSet {
            expanded: FixedBitSet::with_capacity(graph.number_of_vertices() as usize),
        }
    }
}

impl VertexExpandedData for VertexExpandedDataBitSet {
    fn expand(&mut self, vertex: Vertex) -> bool {
        self.expanded.put(vertex as usize)
    }

    fn clear(&mut self) {
        self.expanded.clear()
    }
}

/// Caps the number of vertices a search may settle.
///
/// Once the budget is spent, every further vertex reports as already
/// settled, so the search loop discards the rest of its queue without
/// doing more relaxation work. Distances computed before the cutoff
/// stay valid; vertices past it simply keep the unreached sentinel.
pub struct BoundedVertexExpanded<E> {
    inner: E,
    remaining: u32,
}

impl<E: VertexExpandedData> BoundedVertexExpanded<E> {
    pub fn new(inner: E, budget: u32) -> Self {
        BoundedVertexExpanded {
            inner,
            remaining: budget,
        }
    }
}

impl<E: VertexExpandedData> VertexExpandedData for BoundedVertexExpanded<E> {
    fn expand(&mut self, vertex: Vertex) -> bool {
        if self.remaining == 0 {
            return true;
        }

        let was_expanded = self.inner.expand(vertex);
        if !was_expanded {
            self.remaining -= 1;
        }
        was_expanded
    }

    fn clear(&mut self) {
        self.inner.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::{adjacency_graph::AdjacencyGraph, Orientation};

    fn empty_graph(vertices: u32) -> AdjacencyGraph {
        AdjacencyGraph::new(vertices, Orientation::Undirected)
    }

    #[test]
    fn vec_and_bitset_report_first_and_repeat_expansions_alike() {
        let graph = empty_graph(4);
        let mut vec = VertexExpandedDataVec::new(&graph);
        let mut bits = VertexExpandedDataBitSet::new(&graph);

        for vertex in [2, 0, 2, 3, 0] {
            assert_eq!(vec.expand(vertex), bits.expand(vertex));
        }
    }

    #[test]
    fn bounded_wrapper_reports_everything_expanded_after_the_budget() {
        let graph = empty_graph(8);
        let mut bounded = BoundedVertexExpanded::new(VertexExpandedDataVec::new(&graph), 2);

        assert!(!bounded.expand(0));
        assert!(!bounded.expand(1));
        // budget spent: even fresh vertices now count as settled
        assert!(bounded.expand(2));
        // and vertices settled before the cutoff still do
        assert!(bounded.expand(0));
    }
}
