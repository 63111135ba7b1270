//! Journey planner over the transit graph.
//!
//! This module answers the two computed questions about the network: how
//! long and how curved a bus route is ([`metrics`]), and the fastest
//! itinerary between two stops ([`RouteSearch`]). A route search tries
//! every bus serving the origin against every bus serving the destination
//! and turns the winning graph path into wait and ride segments.

mod config;
mod itinerary;
pub mod metrics;
mod search;

pub use config::{RoutingSettings, SettingsError};
pub use itinerary::{Itinerary, Segment, assemble};
pub use metrics::BusMetrics;
pub use search::RouteSearch;
