use serde::Serialize;

use super::reduced_graph::ReducedGraph;
use crate::{
    error::{RoutingError, RoutingResult},
    graphs::{Distance, Vertex},
};

/// A terminal visiting order and its accumulated cost. The first vertex
/// is the start; each following step is a shortest path in the original
/// graph, so the cost bounds the optimal tour from above.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tour {
    pub vertices: Vec<Vertex>,
    pub distance: Distance,
}

/// Greedy nearest-neighbor ordering over the reduced graph.
///
/// From the current position the closest unvisited terminal is taken
/// next, ties broken by the lowest position in the terminal sequence —
/// which makes the result deterministic for a fixed terminal order. The
/// reduced matrix is consulted directly (it was built with one oracle
/// pass per terminal), never the oracle per step. When every remaining
/// terminal carries the unreached sentinel the tour fails with the cost
/// accumulated so far and the terminals left unreached; the sentinel is
/// never added to the running cost.
///
/// `start` must be a member of the terminal sequence; anything else is
/// reported as an invalid vertex of the reduced graph.
pub fn nearest_neighbor_tour(reduced: &ReducedGraph, start: Vertex) -> RoutingResult<Tour> {
    let number_of_terminals = reduced.number_of_terminals();
    let start_position = reduced
        .position_of(start)
        .ok_or(RoutingError::InvalidVertex {
            vertex: start,
            number_of_vertices: number_of_terminals as u32,
        })?;

    let mut visited = vec![false; number_of_terminals];
    visited[start_position] = true;

    let mut vertices = vec![start];
    let mut distance: Distance = 0;
    let mut current = start_position;

    for _ in 1..number_of_terminals {
        let mut nearest: Option<(Distance, usize)> = None;
        for candidate in 0..number_of_terminals {
            if visited[candidate] {
                continue;
            }
            let step = reduced.distance(current, candidate);
            if step == Distance::MAX {
                continue;
            }
            // strict comparison keeps the lowest position on ties
            if nearest.map_or(true, |(best, _)| step < best) {
                nearest = Some((step, candidate));
            }
        }

        let Some((step, next)) = nearest else {
            let unreached = (0..number_of_terminals)
                .filter(|&position| !visited[position])
                .map(|position| reduced.terminals()[position])
                .collect();
            return Err(RoutingError::NoFeasibleTour {
                cost_so_far: distance,
                unreached,
            });
        };

        visited[next] = true;
        vertices.push(reduced.terminals()[next]);
        distance += step;
        current = next;
    }

    Ok(Tour { vertices, distance })
}
