//! The transit graph and the shortest-path router it is searched with.
//!
//! [`TransitGraph::build`] turns the catalog into a directed weighted graph
//! whose vertices are `(bus, stop)` boarding points. [`Router`] finds the
//! cheapest path between two vertices.

mod builder;
mod router;

pub use builder::{TransitGraph, VertexInfo};
pub use router::{DirectedWeightedGraph, Edge, EdgeId, RouteGuard, RouteId, Router, VertexId};
