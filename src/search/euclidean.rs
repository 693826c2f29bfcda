use super::DistanceHeuristic;
use crate::graphs::{Distance, Vertex, VertexCoordinates};

/// Straight-line lower bound from per-vertex 2-D positions.
///
/// Admissible only when every edge weight is at least the straight-line
/// distance between its endpoints; that is the caller's contract when
/// attaching coordinates. Vertices without a position estimate as 0,
/// which is always admissible.
pub struct EuclideanHeuristic<'a> {
    pub coordinates: &'a VertexCoordinates,
}

impl DistanceHeuristic for EuclideanHeuristic<'_> {
    fn lower_bound(&self, source: Vertex, target: Vertex) -> Distance {
        self.coordinates.straight_line(source, target).floor() as Distance
    }
}
