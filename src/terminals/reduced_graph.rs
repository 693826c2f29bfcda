use ahash::AHashSet;
use indicatif::ParallelProgressIterator;
use itertools::Itertools;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::{Deserialize, Serialize};

use crate::{
    error::{RoutingError, RoutingResult},
    graphs::{Distance, Graph, Vertex},
    search::dijkstra::dijkstra_one_to_all_wrapped,
    utility::get_progressbar,
};

/// One edge of the reduced terminal graph. Endpoints are terminal
/// *positions* (indices into the terminal sequence), not vertex ids,
/// with `smaller < larger`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReducedEdge {
    pub smaller: usize,
    pub larger: usize,
    pub weight: Distance,
}

/// Complete distance graph over a terminal set.
///
/// Built with one full one-to-all oracle pass per terminal, k passes in
/// total rather than one per pair. The passes are independent read-only
/// queries, so they run in parallel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReducedGraph {
    terminals: Vec<Vertex>,
    // row i holds the distances from terminal i to every terminal,
    // Distance::MAX where the oracle never reached one
    distances: Vec<Vec<Distance>>,
    unreachable: Vec<(Vertex, Vertex)>,
}

impl ReducedGraph {
    pub fn build(graph: &dyn Graph, terminals: &[Vertex]) -> RoutingResult<ReducedGraph> {
        let mut seen = AHashSet::new();
        for &terminal in terminals {
            if !graph.contains_vertex(terminal) {
                return Err(RoutingError::InvalidVertex {
                    vertex: terminal,
                    number_of_vertices: graph.number_of_vertices(),
                });
            }
            if !seen.insert(terminal) {
                return Err(RoutingError::DuplicateTerminal { vertex: terminal });
            }
        }

        let distances: Vec<Vec<Distance>> = terminals
            .par_iter()
            .progress_with(get_progressbar(
                "Reducing terminal graph",
                terminals.len() as u64,
            ))
            .map(|&terminal| {
                let data = dijkstra_one_to_all_wrapped(graph, terminal);
                terminals
                    .iter()
                    .map(|&other| data.distances[other as usize])
                    .collect()
            })
            .collect();

        let unreachable = (0..terminals.len())
            .tuple_combinations()
            .filter(|&(i, j)| {
                distances[i][j] == Distance::MAX && distances[j][i] == Distance::MAX
            })
            .map(|(i, j)| (terminals[i], terminals[j]))
            .collect();

        Ok(ReducedGraph {
            terminals: terminals.to_vec(),
            distances,
            unreachable,
        })
    }

    pub fn terminals(&self) -> &[Vertex] {
        &self.terminals
    }

    pub fn number_of_terminals(&self) -> usize {
        self.terminals.len()
    }

    pub fn position_of(&self, vertex: Vertex) -> Option<usize> {
        self.terminals.iter().position(|&terminal| terminal == vertex)
    }

    /// Oracle distance from terminal position `from` to terminal
    /// position `to`; `Distance::MAX` when unreached.
    pub fn distance(&self, from: usize, to: usize) -> Distance {
        self.distances[from][to]
    }

    /// The finite reduced edges, one per unordered terminal pair. On
    /// directed inputs the pair weight is the cheaper direction, since
    /// the spanning connector treats connectivity as undirected.
    /// Pairs unreached in both directions are excluded here and listed
    /// by [`Self::unreachable_pairs`] instead.
    pub fn edges(&self) -> Vec<ReducedEdge> {
        (0..self.terminals.len())
            .tuple_combinations()
            .filter_map(|(smaller, larger)| {
                let weight = std::cmp::min(
                    self.distances[smaller][larger],
                    self.distances[larger][smaller],
                );
                if weight == Distance::MAX {
                    return None;
                }
                Some(ReducedEdge {
                    smaller,
                    larger,
                    weight,
                })
            })
            .collect()
    }

    /// Unordered terminal pairs (original vertex ids) the oracle could
    /// not connect in either direction.
    pub fn unreachable_pairs(&self) -> &[(Vertex, Vertex)] {
        &self.unreachable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::{adjacency_graph::AdjacencyGraph, Orientation};

    // the 6-vertex fixture used throughout the crate's tests
    fn cover_example() -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new(6, Orientation::Undirected);
        graph.add_edge(0, 1, 4).unwrap();
        graph.add_edge(0, 2, 3).unwrap();
        graph.add_edge(1, 2, 1).unwrap();
        graph.add_edge(1, 3, 2).unwrap();
        graph.add_edge(2, 3, 4).unwrap();
        graph.add_edge(3, 4, 2).unwrap();
        graph.add_edge(4, 5, 6).unwrap();
        graph.add_edge(3, 5, 5).unwrap();
        graph
    }

    #[test]
    fn distances_between_terminals_match_the_oracle() {
        let graph = cover_example();
        let reduced = ReducedGraph::build(&graph, &[0, 3, 4, 5]).unwrap();

        assert_eq!(reduced.distance(0, 1), 6); // d(0, 3)
        assert_eq!(reduced.distance(0, 2), 8); // d(0, 4)
        assert_eq!(reduced.distance(0, 3), 11); // d(0, 5)
        assert_eq!(reduced.distance(1, 2), 2); // d(3, 4)
        assert_eq!(reduced.distance(1, 3), 5); // d(3, 5)
        assert_eq!(reduced.distance(2, 3), 6); // d(4, 5)
        assert_eq!(reduced.distance(2, 2), 0);
    }

    #[test]
    fn all_pairs_become_reduced_edges() {
        let graph = cover_example();
        let reduced = ReducedGraph::build(&graph, &[0, 3, 4, 5]).unwrap();
        assert_eq!(reduced.edges().len(), 6);
        assert!(reduced.unreachable_pairs().is_empty());
    }

    #[test]
    fn an_isolated_terminal_surfaces_as_unreachable_pairs() {
        let mut graph = AdjacencyGraph::new(4, Orientation::Undirected);
        graph.add_edge(0, 1, 1).unwrap();
        // vertex 3 has no edges at all
        let reduced = ReducedGraph::build(&graph, &[0, 1, 3]).unwrap();

        assert_eq!(reduced.edges().len(), 1);
        assert_eq!(reduced.unreachable_pairs(), &[(0, 3), (1, 3)]);
    }

    #[test]
    fn duplicate_terminals_are_rejected() {
        let graph = cover_example();
        assert_eq!(
            ReducedGraph::build(&graph, &[0, 3, 0]).unwrap_err(),
            RoutingError::DuplicateTerminal { vertex: 0 }
        );
    }

    #[test]
    fn out_of_range_terminals_are_rejected() {
        let graph = cover_example();
        assert_eq!(
            ReducedGraph::build(&graph, &[0, 6]).unwrap_err(),
            RoutingError::InvalidVertex {
                vertex: 6,
                number_of_vertices: 6,
            }
        );
    }
}
