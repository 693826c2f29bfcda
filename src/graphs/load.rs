use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter},
    path::Path,
};

use log::warn;

use super::{adjacency_graph::AdjacencyGraph, Orientation, WeightedEdge};
use crate::error::RoutingResult;

/// Reads a comma-separated edge list: one `tail,head,weight` triple per
/// line, terminated by end of input or by the sentinel triple `-1,-1,0`.
/// Malformed records are skipped with a warning; they are a loader
/// concern, not a core error.
pub fn read_edges(reader: impl BufRead) -> io::Result<Vec<WeightedEdge>> {
    let mut edges = Vec::new();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_edge_record(line) {
            Some(EdgeRecord::Edge(edge)) => edges.push(edge),
            Some(EdgeRecord::Sentinel) => break,
            None => warn!(
                "skipping malformed edge record on line {}: {:?}",
                line_number + 1,
                line
            ),
        }
    }

    Ok(edges)
}

pub fn read_edges_from_csv(path: &Path) -> io::Result<Vec<WeightedEdge>> {
    let file = File::open(path)?;
    read_edges(BufReader::new(file))
}

enum EdgeRecord {
    Edge(WeightedEdge),
    Sentinel,
}

fn parse_edge_record(line: &str) -> Option<EdgeRecord> {
    let mut values = line.split(',');
    let tail: i64 = values.next()?.trim().parse().ok()?;
    let head: i64 = values.next()?.trim().parse().ok()?;
    let weight: i64 = values.next()?.trim().parse().ok()?;
    if values.next().is_some() {
        return None;
    }

    if (tail, head, weight) == (-1, -1, 0) {
        return Some(EdgeRecord::Sentinel);
    }

    let tail = u32::try_from(tail).ok()?;
    let head = u32::try_from(head).ok()?;
    let weight = u32::try_from(weight).ok()?;

    Some(EdgeRecord::Edge(WeightedEdge::new(tail, head, weight)))
}

/// Builds a graph sized to the largest endpoint in the edge list.
pub fn graph_from_edge_list(
    edges: &[WeightedEdge],
    orientation: Orientation,
) -> RoutingResult<AdjacencyGraph> {
    let number_of_vertices = edges
        .iter()
        .map(|edge| edge.tail.max(edge.head))
        .max()
        .map_or(0, |largest| largest + 1);

    AdjacencyGraph::from_edges(number_of_vertices, orientation, edges)
}

/// Reading a snapshot is much faster than re-parsing a text edge list.
pub fn read_graph_snapshot(path: &Path) -> bincode::Result<AdjacencyGraph> {
    let reader = BufReader::new(File::open(path)?);
    bincode::deserialize_from(reader)
}

pub fn write_graph_snapshot(path: &Path, graph: &AdjacencyGraph) -> bincode::Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(writer, graph)
}
