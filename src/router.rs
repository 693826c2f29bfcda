use std::sync::RwLock;

use crate::{
    error::{RoutingError, RoutingResult},
    graphs::{adjacency_graph::AdjacencyGraph, Distance, Graph, Vertex, VertexCoordinates},
    search::{
        a_star::a_star_one_to_one,
        collections::{
            dijkstra_data::{DijkstraData, DijkstraDataVec, Path},
            vertex_distance_queue::VertexDistanceQueueBinaryHeap,
            vertex_expanded_data::{
                BoundedVertexExpanded, VertexExpandedData, VertexExpandedDataBitSet,
            },
        },
        dijkstra::dijkstra_one_to_one,
        euclidean::EuclideanHeuristic,
    },
    terminals::{
        cover::{minimum_cover, SpanningCover},
        reduced_graph::ReducedGraph,
        tour::{nearest_neighbor_tour, Tour},
    },
};

/// A routing session owning one graph.
///
/// The graph sits behind a single-writer/multi-reader lock: every query
/// takes it in read mode, `reweight` in write mode, so no query ever
/// observes a half-reweighted graph and reweights never interleave.
/// All per-query state is allocated per call; nothing persists between
/// unrelated requests.
pub struct Router {
    graph: RwLock<AdjacencyGraph>,
    coordinates: Option<VertexCoordinates>,
    expansion_limit: Option<u32>,
}

impl Router {
    pub fn new(graph: AdjacencyGraph) -> Router {
        Router {
            graph: RwLock::new(graph),
            coordinates: None,
            expansion_limit: None,
        }
    }

    /// Attaches per-vertex positions; point queries switch from
    /// Dijkstra to A* guided by the straight-line heuristic.
    pub fn with_coordinates(mut self, coordinates: VertexCoordinates) -> Router {
        self.coordinates = Some(coordinates);
        self
    }

    /// Caps how many vertices a point query may settle, bounding
    /// worst-case work on adversarial dense inputs. Terminal reduction
    /// always runs unbounded; truncated passes would turn finite
    /// distances into sentinels and corrupt cover and tour results.
    pub fn with_expansion_limit(mut self, limit: u32) -> Router {
        self.expansion_limit = Some(limit);
        self
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.graph.read().unwrap().number_of_vertices()
    }

    /// Visits every terminal from `source` with the nearest-neighbor
    /// heuristic over the reduced terminal graph. The source counts as
    /// visited, so listing it among the terminals is allowed.
    pub fn route(&self, source: Vertex, terminals: &[Vertex]) -> RoutingResult<Tour> {
        let graph = self.graph.read().unwrap();

        let mut stops = Vec::with_capacity(terminals.len() + 1);
        stops.push(source);
        stops.extend(terminals.iter().copied().filter(|&terminal| terminal != source));

        let reduced = ReducedGraph::build(&*graph, &stops)?;
        nearest_neighbor_tour(&reduced, source)
    }

    /// Weight of a minimum spanning connector over the terminals.
    pub fn cover(&self, terminals: &[Vertex]) -> RoutingResult<SpanningCover> {
        let graph = self.graph.read().unwrap();
        let reduced = ReducedGraph::build(&*graph, terminals)?;
        minimum_cover(&reduced)
    }

    /// Replaces every edge weight in place using the supplied sampler.
    /// Takes the write lock, so it waits for in-flight queries and
    /// blocks new ones until the swap is complete.
    pub fn reweight(&self, sampler: impl FnMut(Vertex, Vertex) -> Distance) {
        self.graph.write().unwrap().reweight(sampler);
    }

    /// Shortest path between two vertices: A* when coordinates are
    /// attached, Dijkstra otherwise.
    pub fn shortest_path(&self, source: Vertex, target: Vertex) -> RoutingResult<Path> {
        let graph = self.graph.read().unwrap();
        for vertex in [source, target] {
            if !graph.contains_vertex(vertex) {
                return Err(RoutingError::InvalidVertex {
                    vertex,
                    number_of_vertices: graph.number_of_vertices(),
                });
            }
        }

        let mut data = DijkstraDataVec::new(&*graph);
        match self.expansion_limit {
            Some(limit) => {
                let mut expanded =
                    BoundedVertexExpanded::new(VertexExpandedDataBitSet::new(&*graph), limit);
                self.point_query(&*graph, &mut data, &mut expanded, source, target);
            }
            None => {
                let mut expanded = VertexExpandedDataBitSet::new(&*graph);
                self.point_query(&*graph, &mut data, &mut expanded, source, target);
            }
        }

        data.get_path(source, target)
            .ok_or(RoutingError::NoPathFound { source, target })
    }

    pub fn shortest_path_distance(&self, source: Vertex, target: Vertex) -> RoutingResult<Distance> {
        self.shortest_path(source, target).map(|path| path.distance)
    }

    fn point_query(
        &self,
        graph: &dyn Graph,
        data: &mut dyn DijkstraData,
        expanded: &mut dyn VertexExpandedData,
        source: Vertex,
        target: Vertex,
    ) {
        let mut queue = VertexDistanceQueueBinaryHeap::new();

        match &self.coordinates {
            Some(coordinates) => {
                let heuristic = EuclideanHeuristic { coordinates };
                a_star_one_to_one(graph, data, expanded, &mut queue, &heuristic, source, target);
            }
            None => {
                dijkstra_one_to_one(graph, data, expanded, &mut queue, source, target);
            }
        }
    }
}
