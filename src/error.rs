use std::fmt;

use crate::graphs::{Distance, Vertex};

/// Result type for routing operations.
pub type RoutingResult<T> = Result<T, RoutingError>;

/// Failures of the routing core.
///
/// The shortest-path oracle itself never fails on unreachability; it
/// reports the sentinel distance. The terminal layers convert sentinels
/// into the typed variants below instead of letting them reach any
/// arithmetic.
///
/// `Display`/`Error` are implemented by hand rather than derived: one
/// variant's field is named `source` (matching the routing vocabulary),
/// which `thiserror`'s derive treats as a `std::error::Error` source
/// chain link regardless of the field's actual type, and `Vertex` (`u32`)
/// cannot implement `Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// An endpoint lies outside `[0, number_of_vertices)`.
    InvalidVertex {
        vertex: Vertex,
        number_of_vertices: u32,
    },

    /// A terminal appears more than once in a terminal list.
    DuplicateTerminal { vertex: Vertex },

    /// The predecessor chain of a query result does not reach the source.
    NoPathFound { source: Vertex, target: Vertex },

    /// The spanning connector cannot span all terminals.
    DisconnectedTerminalSet { unreachable: Vec<(Vertex, Vertex)> },

    /// The tour heuristic cannot reach one of the remaining terminals.
    NoFeasibleTour {
        cost_so_far: Distance,
        unreached: Vec<Vertex>,
    },
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingError::InvalidVertex {
                vertex,
                number_of_vertices,
            } => write!(
                f,
                "vertex {vertex} is out of range for a graph with {number_of_vertices} vertices"
            ),
            RoutingError::DuplicateTerminal { vertex } => {
                write!(f, "terminal {vertex} is listed more than once")
            }
            RoutingError::NoPathFound { source, target } => {
                write!(f, "no path from {source} to {target}")
            }
            RoutingError::DisconnectedTerminalSet { unreachable } => write!(
                f,
                "terminal set is disconnected; unreachable pairs: {unreachable:?}"
            ),
            RoutingError::NoFeasibleTour {
                cost_so_far,
                unreached,
            } => write!(
                f,
                "no feasible tour: terminals {unreached:?} are unreachable (cost so far: {cost_so_far})"
            ),
        }
    }
}

impl std::error::Error for RoutingError {}
