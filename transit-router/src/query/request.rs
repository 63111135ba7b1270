//! Request and response kinds.

use crate::planner::{BusMetrics, Itinerary};

/// Opaque request id, echoed back in the response.
pub type RequestId = i64;

/// What a request asks about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Statistics of one bus route
    Bus { name: String },
    /// Buses serving a stop
    Stop { name: String },
    /// Fastest itinerary between two stops
    Route { from: String, to: String },
}

/// A query tagged with its request id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub id: RequestId,
    pub query: Query,
}

impl Request {
    pub fn bus(id: RequestId, name: impl Into<String>) -> Self {
        Self {
            id,
            query: Query::Bus { name: name.into() },
        }
    }

    pub fn stop(id: RequestId, name: impl Into<String>) -> Self {
        Self {
            id,
            query: Query::Stop { name: name.into() },
        }
    }

    pub fn route(id: RequestId, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id,
            query: Query::Route {
                from: from.into(),
                to: to.into(),
            },
        }
    }
}

/// The answer to one query.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Bus(BusMetrics),
    /// Sorted names of the buses serving the stop, possibly empty
    Stop(Vec<String>),
    Route(Itinerary),
    /// The bus or stop does not exist, or no route connects the stops
    NotFound,
}

/// An answer tagged with the id of the request it answers.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub request_id: RequestId,
    pub answer: Answer,
}
