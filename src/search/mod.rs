use crate::graphs::{Distance, Vertex};

pub mod a_star;
pub mod collections;
pub mod dijkstra;
pub mod euclidean;

/// An estimate of the remaining distance between two vertices.
///
/// `lower_bound` must be admissible (never exceed the true distance)
/// for A* to return optimal paths, and consistent for the monotone
/// queue variants to be usable.
pub trait DistanceHeuristic: Send + Sync {
    fn lower_bound(&self, _source: Vertex, _target: Vertex) -> Distance {
        0
    }
}

/// The zero estimate. A* degenerates to Dijkstra with it, which the
/// tests rely on.
pub struct TrivialHeuristic {}

impl DistanceHeuristic for TrivialHeuristic {}
