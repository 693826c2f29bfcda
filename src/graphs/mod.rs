use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod adjacency_graph;
pub mod load;

pub type Vertex = u32;
pub type Distance = u32;

/// Whether a graph stores one arc per inserted edge or mirrors every
/// insertion. Chosen at construction and fixed for the graph's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Orientation {
    Directed,
    Undirected,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub tail: Vertex,
    pub head: Vertex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub tail: Vertex,
    pub head: Vertex,
    pub weight: Distance,
}

impl WeightedEdge {
    pub fn new(tail: Vertex, head: Vertex, weight: Distance) -> WeightedEdge {
        WeightedEdge { tail, head, weight }
    }

    pub fn remove_weight(&self) -> Edge {
        Edge {
            tail: self.tail,
            head: self.head,
        }
    }

    pub fn reversed(&self) -> WeightedEdge {
        WeightedEdge {
            tail: self.head,
            head: self.tail,
            weight: self.weight,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaillessEdge {
    pub head: Vertex,
    pub weight: Distance,
}

impl TaillessEdge {
    pub fn set_tail(&self, tail: Vertex) -> WeightedEdge {
        WeightedEdge {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}

pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32 {
        (0..self.number_of_vertices())
            .map(|vertex| self.edges(vertex).len() as u32)
            .sum::<u32>()
    }

    fn edges(&self, tail: Vertex) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;

    fn get_weight(&self, edge: &Edge) -> Option<Distance>;

    fn set_weight(&mut self, edge: &Edge, weight: Option<Distance>);

    fn contains_vertex(&self, vertex: Vertex) -> bool {
        vertex < self.number_of_vertices()
    }
}

/// Optional 2-D positions for the vertices of a graph. Only the A*
/// heuristic reads them; every other part of the crate works without.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VertexCoordinates {
    positions: Vec<(f32, f32)>,
}

impl VertexCoordinates {
    pub fn new(positions: Vec<(f32, f32)>) -> VertexCoordinates {
        VertexCoordinates { positions }
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.positions.len() as u32
    }

    pub fn position(&self, vertex: Vertex) -> Option<(f32, f32)> {
        self.positions.get(vertex as usize).copied()
    }

    /// Straight-line distance between two vertices, or `0.0` if either
    /// has no recorded position.
    pub fn straight_line(&self, source: Vertex, target: Vertex) -> f64 {
        match (self.position(source), self.position(target)) {
            (Some((x0, y0)), Some((x1, y1))) => {
                let dx = f64::from(x1) - f64::from(x0);
                let dy = f64::from(y1) - f64::from(y0);
                (dx * dx + dy * dy).sqrt()
            }
            _ => 0.0,
        }
    }
}
