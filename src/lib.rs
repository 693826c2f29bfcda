pub mod error;
pub mod graphs;
pub mod router;
pub mod search;
pub mod terminals;
pub mod utility;

pub use error::{RoutingError, RoutingResult};
pub use router::Router;
