//! Bus transit query engine.
//!
//! Loads a static bus network from a JSON document and answers three kinds
//! of query about it: statistics of a bus route, the buses serving a stop,
//! and the fastest itinerary between two stops.

pub mod document;
pub mod domain;
pub mod graph;
pub mod planner;
pub mod query;
