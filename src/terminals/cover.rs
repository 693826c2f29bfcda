use serde::Serialize;

use super::reduced_graph::ReducedGraph;
use crate::{
    error::{RoutingError, RoutingResult},
    graphs::{Distance, Vertex},
};

/// Disjoint-set forest over terminal positions.
///
/// Union by rank with path compression; `find` is iterative so the call
/// stack stays flat no matter how many terminals there are.
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    pub fn new(size: usize) -> UnionFind {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    pub fn find(&mut self, element: usize) -> usize {
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // second pass: point the whole chain at the root
        let mut current = element;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merges the two components. Returns false when the elements were
    /// already in the same one.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        if self.rank[root_a] > self.rank[root_b] {
            self.parent[root_b] = root_a;
        } else if self.rank[root_a] < self.rank[root_b] {
            self.parent[root_a] = root_b;
        } else {
            self.parent[root_b] = root_a;
            self.rank[root_a] += 1;
        }

        true
    }
}

/// A spanning set of reduced edges connecting every terminal, with its
/// total weight. Edge endpoints are original vertex ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SpanningCover {
    pub edges: Vec<(Vertex, Vertex)>,
    pub weight: Distance,
}

/// Kruskal over the reduced graph.
///
/// Edges are processed in the total order `(weight, smaller, larger)`,
/// so tie-breaking is deterministic and reruns pick the same cover.
/// The total is a 2-approximation of the cheapest subgraph connecting
/// the terminals in the original graph; on the reduced metric itself it
/// is exact.
pub fn minimum_cover(reduced: &ReducedGraph) -> RoutingResult<SpanningCover> {
    let number_of_terminals = reduced.number_of_terminals();
    if number_of_terminals <= 1 {
        return Ok(SpanningCover {
            edges: Vec::new(),
            weight: 0,
        });
    }

    let mut reduced_edges = reduced.edges();
    reduced_edges.sort_unstable_by_key(|edge| (edge.weight, edge.smaller, edge.larger));

    let mut components = UnionFind::new(number_of_terminals);
    let mut edges = Vec::with_capacity(number_of_terminals - 1);
    let mut weight: Distance = 0;

    for edge in reduced_edges {
        if components.union(edge.smaller, edge.larger) {
            edges.push((
                reduced.terminals()[edge.smaller],
                reduced.terminals()[edge.larger],
            ));
            weight += edge.weight;

            if edges.len() == number_of_terminals - 1 {
                break;
            }
        }
    }

    if edges.len() < number_of_terminals - 1 {
        return Err(RoutingError::DisconnectedTerminalSet {
            unreachable: reduced.unreachable_pairs().to_vec(),
        });
    }

    Ok(SpanningCover { edges, weight })
}
