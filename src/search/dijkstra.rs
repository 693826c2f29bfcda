use super::collections::{
    dijkstra_data::{DijkstraData, DijkstraDataVec, Path},
    vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueRadix},
    vertex_expanded_data::{VertexExpandedData, VertexExpandedDataBitSet},
};
use crate::graphs::{Distance, Graph, Vertex};

/// Dijkstra from `source` to every reachable vertex.
///
/// The queue pushes without decrease-key, so stale entries are expected;
/// the `expanded` check on pop discards them. Settled vertices come out
/// in non-decreasing distance order, which is what makes the distances
/// final.
pub fn dijkstra_one_to_all(
    graph: &dyn Graph,
    data: &mut dyn DijkstraData,
    expanded: &mut dyn VertexExpandedData,
    queue: &mut dyn VertexDistanceQueue,
    source: Vertex,
) {
    data.set_distance(source, 0);
    queue.insert(source, 0);

    while let Some(tail) = queue.pop() {
        if expanded.expand(tail) {
            continue;
        }

        let distance_tail = data.get_distance(tail);

        for edge in graph.edges(tail) {
            relax(data, queue, distance_tail, tail, edge.head, edge.weight);
        }
    }
}

/// Dijkstra from `source`, stopping as soon as `target` is settled. The
/// partial distance and predecessor vectors are already correct for
/// every settled vertex at that point.
pub fn dijkstra_one_to_one(
    graph: &dyn Graph,
    data: &mut dyn DijkstraData,
    expanded: &mut dyn VertexExpandedData,
    queue: &mut dyn VertexDistanceQueue,
    source: Vertex,
    target: Vertex,
) {
    data.set_distance(source, 0);
    queue.insert(source, 0);

    while let Some(tail) = queue.pop() {
        if expanded.expand(tail) {
            continue;
        }
        if tail == target {
            break;
        }

        let distance_tail = data.get_distance(tail);

        for edge in graph.edges(tail) {
            relax(data, queue, distance_tail, tail, edge.head, edge.weight);
        }
    }
}

/// One relaxation step. The tentative distance saturates to the
/// unreached sentinel instead of wrapping, and a saturated value never
/// improves anything, so the sentinel stays out of the bookkeeping.
pub(super) fn relax(
    data: &mut dyn DijkstraData,
    queue: &mut dyn VertexDistanceQueue,
    distance_tail: Distance,
    tail: Vertex,
    head: Vertex,
    edge_weight: Distance,
) {
    let alternative = distance_tail
        .checked_add(edge_weight)
        .unwrap_or(Distance::MAX);
    if alternative < data.get_distance(head) {
        data.set_distance(head, alternative);
        data.set_predecessor(head, tail);
        queue.insert(head, alternative);
    }
}

/// `dijkstra_one_to_all` with freshly allocated vec-backed state. The
/// one-to-all search is monotone, so the radix queue applies.
pub fn dijkstra_one_to_all_wrapped(graph: &dyn Graph, source: Vertex) -> DijkstraDataVec {
    let mut data = DijkstraDataVec::new(graph);
    let mut expanded = VertexExpandedDataBitSet::new(graph);
    let mut queue = VertexDistanceQueueRadix::new();

    dijkstra_one_to_all(graph, &mut data, &mut expanded, &mut queue, source);

    data
}

/// `dijkstra_one_to_one` with freshly allocated state, reconstructing
/// the path on success.
pub fn dijkstra_one_to_one_wrapped(
    graph: &dyn Graph,
    source: Vertex,
    target: Vertex,
) -> Option<Path> {
    let mut data = DijkstraDataVec::new(graph);
    let mut expanded = VertexExpandedDataBitSet::new(graph);
    let mut queue = VertexDistanceQueueRadix::new();

    dijkstra_one_to_one(graph, &mut data, &mut expanded, &mut queue, source, target);

    data.get_path(source, target)
}
