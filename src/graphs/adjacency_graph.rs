use serde::{Deserialize, Serialize};

use super::{Distance, Edge, Graph, Orientation, TaillessEdge, Vertex, WeightedEdge};
use crate::error::{RoutingError, RoutingResult};

/// Adjacency-vector graph with a fixed vertex count.
///
/// Each row is sorted by head so weight lookups are binary searches.
/// Undirected graphs mirror every insertion, and `reweight` keeps the
/// mirrored arcs equal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdjacencyGraph {
    edges: Vec<Vec<TaillessEdge>>,
    orientation: Orientation,
}

impl AdjacencyGraph {
    pub fn new(number_of_vertices: u32, orientation: Orientation) -> AdjacencyGraph {
        AdjacencyGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
            orientation,
        }
    }

    /// Builds a graph from an edge list. Parallel edges keep the
    /// cheapest weight.
    pub fn from_edges(
        number_of_vertices: u32,
        orientation: Orientation,
        edges: &[WeightedEdge],
    ) -> RoutingResult<AdjacencyGraph> {
        let mut graph = AdjacencyGraph::new(number_of_vertices, orientation);

        for edge in edges {
            let current = graph
                .get_weight(&edge.remove_weight())
                .unwrap_or(Distance::MAX);
            if edge.weight < current {
                graph.add_edge(edge.tail, edge.head, edge.weight)?;
            }
        }

        Ok(graph)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Inserts an edge, mirroring it on undirected graphs. Fails with
    /// `InvalidVertex` when an endpoint is outside `[0, vertex_count)`.
    pub fn add_edge(&mut self, tail: Vertex, head: Vertex, weight: Distance) -> RoutingResult<()> {
        self.check_vertex(tail)?;
        self.check_vertex(head)?;

        self.set_weight(&Edge { tail, head }, Some(weight));
        if self.orientation == Orientation::Undirected {
            self.set_weight(&Edge { tail: head, head: tail }, Some(weight));
        }

        Ok(())
    }

    /// Replaces every edge weight with a freshly sampled one; the
    /// topology is untouched. Undirected graphs sample once per
    /// unordered pair so both arcs stay equal. The caller must hold
    /// exclusive access, which `&mut self` enforces.
    pub fn reweight(&mut self, mut sampler: impl FnMut(Vertex, Vertex) -> Distance) {
        match self.orientation {
            Orientation::Directed => {
                for tail in 0..self.edges.len() {
                    for entry in &mut self.edges[tail] {
                        entry.weight = sampler(tail as Vertex, entry.head);
                    }
                }
            }
            Orientation::Undirected => {
                let mut sampled = Vec::new();
                for tail in 0..self.edges.len() {
                    for entry in &self.edges[tail] {
                        if entry.head > tail as Vertex {
                            sampled.push((tail as Vertex, entry.head));
                        }
                    }
                }
                for (tail, head) in sampled {
                    let weight = sampler(tail, head);
                    self.update_weight(tail, head, weight);
                    self.update_weight(head, tail, weight);
                }
            }
        }
    }

    fn update_weight(&mut self, tail: Vertex, head: Vertex, weight: Distance) {
        let row = &mut self.edges[tail as usize];
        if let Ok(index) = row.binary_search_by_key(&head, |entry| entry.head) {
            row[index].weight = weight;
        }
    }

    fn check_vertex(&self, vertex: Vertex) -> RoutingResult<()> {
        if !self.contains_vertex(vertex) {
            return Err(RoutingError::InvalidVertex {
                vertex,
                number_of_vertices: self.number_of_vertices(),
            });
        }
        Ok(())
    }
}

impl Graph for AdjacencyGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn edges(&self, tail: Vertex) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        // A plain map closure would not keep `tail` alive long enough.
        struct EdgeIterator<'a> {
            edge_iter: std::slice::Iter<'a, TaillessEdge>,
            tail: Vertex,
        }

        impl<'a> Iterator for EdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                self.edge_iter
                    .next()
                    .map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }
        }

        impl<'a> ExactSizeIterator for EdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_iter.len()
            }
        }

        Box::new(EdgeIterator {
            edge_iter: self.edges[tail as usize].iter(),
            tail,
        })
    }

    fn get_weight(&self, edge: &Edge) -> Option<Distance> {
        let row = self.edges.get(edge.tail as usize)?;

        let index = row
            .binary_search_by_key(&edge.head, |entry| entry.head)
            .ok()?;

        Some(row[index].weight)
    }

    fn set_weight(&mut self, edge: &Edge, weight: Option<Distance>) {
        let row = &mut self.edges[edge.tail as usize];
        let index = row.binary_search_by_key(&edge.head, |entry| entry.head);

        if let Some(weight) = weight {
            match index {
                Ok(index) => row[index].weight = weight,
                Err(index) => row.insert(
                    index,
                    TaillessEdge {
                        head: edge.head,
                        weight,
                    },
                ),
            }
        } else if let Ok(index) = index {
            row.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new(3, Orientation::Undirected);
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(1, 2, 2).unwrap();
        graph.add_edge(0, 2, 4).unwrap();
        graph
    }

    #[test]
    fn undirected_insertion_mirrors_edges() {
        let graph = triangle();
        assert_eq!(graph.get_weight(&Edge { tail: 0, head: 1 }), Some(1));
        assert_eq!(graph.get_weight(&Edge { tail: 1, head: 0 }), Some(1));
        assert_eq!(graph.number_of_edges(), 6);
    }

    #[test]
    fn directed_insertion_does_not_mirror() {
        let mut graph = AdjacencyGraph::new(2, Orientation::Directed);
        graph.add_edge(0, 1, 7).unwrap();
        assert_eq!(graph.get_weight(&Edge { tail: 0, head: 1 }), Some(7));
        assert_eq!(graph.get_weight(&Edge { tail: 1, head: 0 }), None);
    }

    #[test]
    fn add_edge_rejects_out_of_range_vertices() {
        let mut graph = AdjacencyGraph::new(3, Orientation::Undirected);
        assert_eq!(
            graph.add_edge(0, 3, 1),
            Err(RoutingError::InvalidVertex {
                vertex: 3,
                number_of_vertices: 3,
            })
        );
    }

    #[test]
    fn parallel_edges_keep_the_cheapest_weight() {
        let edges = vec![
            WeightedEdge::new(0, 1, 9),
            WeightedEdge::new(0, 1, 3),
            WeightedEdge::new(0, 1, 5),
        ];
        let graph = AdjacencyGraph::from_edges(2, Orientation::Directed, &edges).unwrap();
        assert_eq!(graph.get_weight(&Edge { tail: 0, head: 1 }), Some(3));
    }

    #[test]
    fn reweight_replaces_weights_and_keeps_topology() {
        let mut graph = triangle();
        graph.reweight(|_, _| 10);
        assert_eq!(graph.get_weight(&Edge { tail: 0, head: 1 }), Some(10));
        assert_eq!(graph.get_weight(&Edge { tail: 2, head: 1 }), Some(10));
        assert_eq!(graph.number_of_edges(), 6);
    }

    #[test]
    fn reweight_keeps_undirected_pairs_symmetric() {
        let mut graph = triangle();
        let mut next = 0;
        graph.reweight(|_, _| {
            next += 1;
            next
        });
        for tail in 0..3 {
            for edge in graph.edges(tail) {
                assert_eq!(
                    graph.get_weight(&edge.reversed().remove_weight()),
                    Some(edge.weight)
                );
            }
        }
    }
}
