use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Graph, Vertex};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub distance: Distance,
}

/// Distance and predecessor bookkeeping for one search run.
pub trait DijkstraData {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex>;

    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex);

    /// `Distance::MAX` marks a vertex the search has not reached.
    fn get_distance(&self, vertex: Vertex) -> Distance;

    fn set_distance(&mut self, vertex: Vertex, distance: Distance);

    /// Walks the predecessor chain from `target` back to `source`.
    ///
    /// Returns `None` when the target carries the unreached sentinel or
    /// when the chain breaks or revisits a vertex before arriving at the
    /// source; a partial or cyclic sequence is never returned.
    fn get_path(&self, source: Vertex, target: Vertex) -> Option<Path> {
        let distance = self.get_distance(target);
        if distance == Distance::MAX {
            return None;
        }

        let mut vertices = vec![target];
        let mut seen = AHashSet::new();
        seen.insert(target);

        let mut current = target;
        while current != source {
            current = self.get_predecessor(current)?;
            if !seen.insert(current) {
                return None;
            }
            vertices.push(current);
        }

        vertices.reverse();

        Some(Path { vertices, distance })
    }
}

/// Vec-backed bookkeeping, sized to the graph.
pub struct DijkstraDataVec {
    pub predecessors: Vec<Vertex>,
    pub distances: Vec<Distance>,
}

impl DijkstraDataVec {
    /// `Vertex::MAX` doubles as the "no predecessor" marker, so it is
    /// not usable as a vertex id.
    pub fn new(graph: &dyn Graph) -> Self {
        DijkstraDataVec {
            predecessors: vec![Vertex::MAX; graph.number_of_vertices() as usize],
            distances: vec![Distance::MAX; graph.number_of_vertices() as usize],
        }
    }
}

impl DijkstraData for DijkstraDataVec {
    fn clear(&mut self) {
        self.predecessors.fill(Vertex::MAX);
        self.distances.fill(Distance::MAX);
    }

    fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        let predecessor = self.predecessors[vertex as usize];

        if predecessor == Vertex::MAX {
            return None;
        }

        Some(predecessor)
    }

    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex) {
        self.predecessors[vertex as usize] = predecessor;
    }

    fn get_distance(&self, vertex: Vertex) -> Distance {
        self.distances[vertex as usize]
    }

    fn set_distance(&mut self, vertex: Vertex, distance: Distance) {
        self.distances[vertex as usize] = distance;
    }
}

/// Map-backed bookkeeping for searches that touch few vertices of a
/// large graph, e.g. early-exit point queries.
#[derive(Default)]
pub struct DijkstraDataHashMap {
    predecessors: AHashMap<Vertex, Vertex>,
    distances: AHashMap<Vertex, Distance>,
}

impl DijkstraDataHashMap {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DijkstraData for DijkstraDataHashMap {
    fn clear(&mut self) {
        self.predecessors.clear();
        self.distances.clear();
    }

    fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        self.predecessors.get(&vertex).copied()
    }

    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex) {
        self.predecessors.insert(vertex, predecessor);
    }

    fn get_distance(&self, vertex: Vertex) -> Distance {
        *self.distances.get(&vertex).unwrap_or(&Distance::MAX)
    }

    fn set_distance(&mut self, vertex: Vertex, distance: Distance) {
        self.distances.insert(vertex, distance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_data() -> DijkstraDataHashMap {
        // 0 -> 1 -> 2, distances 0, 2, 5
        let mut data = DijkstraDataHashMap::new();
        data.set_distance(0, 0);
        data.set_distance(1, 2);
        data.set_predecessor(1, 0);
        data.set_distance(2, 5);
        data.set_predecessor(2, 1);
        data
    }

    #[test]
    fn path_is_reconstructed_from_source_to_target() {
        let data = chain_data();
        let path = data.get_path(0, 2).unwrap();
        assert_eq!(path.vertices, vec![0, 1, 2]);
        assert_eq!(path.distance, 5);
    }

    #[test]
    fn unreached_target_has_no_path() {
        let data = chain_data();
        assert_eq!(data.get_path(0, 7), None);
    }

    #[test]
    fn broken_chain_has_no_path() {
        let mut data = chain_data();
        // a finite distance without a predecessor chain back to 0
        data.set_distance(9, 1);
        assert_eq!(data.get_path(0, 9), None);
    }

    #[test]
    fn cyclic_chain_is_rejected() {
        let mut data = DijkstraDataHashMap::new();
        data.set_distance(2, 3);
        data.set_predecessor(2, 1);
        data.set_predecessor(1, 2);
        assert_eq!(data.get_path(0, 2), None);
    }

    #[test]
    fn source_equals_target_yields_the_trivial_path() {
        let data = chain_data();
        let path = data.get_path(0, 0).unwrap();
        assert_eq!(path.vertices, vec![0]);
        assert_eq!(path.distance, 0);
    }
}
