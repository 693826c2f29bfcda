use super::{
    collections::{
        dijkstra_data::{DijkstraData, DijkstraDataVec, Path},
        vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap},
        vertex_expanded_data::{VertexExpandedData, VertexExpandedDataBitSet},
    },
    DistanceHeuristic,
};
use crate::graphs::{Distance, Graph, Vertex};

/// A* from `source` to `target`.
///
/// Identical relaxation rule as Dijkstra; only the queue key differs:
/// a vertex is ordered by `g + h` where `g` is its tentative distance
/// (kept in `data`) and `h` the heuristic's lower bound to the target.
/// Stops once `target` is popped, at which point its distance is final
/// for any admissible heuristic. With the zero heuristic every queue
/// key equals the tentative distance and the search behaves like
/// Dijkstra on every vertex it visits.
pub fn a_star_one_to_one(
    graph: &dyn Graph,
    data: &mut dyn DijkstraData,
    expanded: &mut dyn VertexExpandedData,
    queue: &mut dyn VertexDistanceQueue,
    heuristic: &dyn DistanceHeuristic,
    source: Vertex,
    target: Vertex,
) {
    data.set_distance(source, 0);
    queue.insert(source, heuristic.lower_bound(source, target));

    while let Some(tail) = queue.pop() {
        if expanded.expand(tail) {
            continue;
        }
        if tail == target {
            break;
        }

        let distance_tail = data.get_distance(tail);

        for edge in graph.edges(tail) {
            let alternative = distance_tail
                .checked_add(edge.weight)
                .unwrap_or(Distance::MAX);
            if alternative < data.get_distance(edge.head) {
                data.set_distance(edge.head, alternative);
                data.set_predecessor(edge.head, tail);
                let estimate = alternative
                    .checked_add(heuristic.lower_bound(edge.head, target))
                    .unwrap_or(Distance::MAX);
                queue.insert(edge.head, estimate);
            }
        }
    }
}

/// `a_star_one_to_one` with freshly allocated state. The binary heap is
/// used rather than the radix queue: an inconsistent (but admissible)
/// heuristic may produce non-monotone keys, which the binary heap
/// tolerates.
pub fn a_star_one_to_one_wrapped(
    graph: &dyn Graph,
    heuristic: &dyn DistanceHeuristic,
    source: Vertex,
    target: Vertex,
) -> Option<Path> {
    let mut data = DijkstraDataVec::new(graph);
    let mut expanded = VertexExpandedDataBitSet::new(graph);
    let mut queue = VertexDistanceQueueBinaryHeap::new();

    a_star_one_to_one(
        graph,
        &mut data,
        &mut expanded,
        &mut queue,
        heuristic,
        source,
        target,
    );

    data.get_path(source, target)
}
