//! Itinerary types and assembly from a graph path.
//!
//! An `Itinerary` alternates between waiting at a stop and riding a bus.
//! Consecutive ride edges of one bus collapse into a single [`Segment::Ride`]
//! whose span count is the number of hops taken.

use crate::graph::{EdgeId, TransitGraph};

use super::RoutingSettings;

/// One step of an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Waiting for a bus at a stop
    Wait { stop: String, duration: f64 },
    /// Riding one bus for `span_count` consecutive hops
    Ride {
        bus: String,
        span_count: usize,
        duration: f64,
    },
}

/// A complete answer to a route query.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    /// Total travel time in minutes, including the initial boarding wait
    pub total_time: f64,
    /// Wait and ride segments in travel order
    pub segments: Vec<Segment>,
}

impl Itinerary {
    /// The answer for a journey that starts where it ends.
    pub fn trivial() -> Self {
        Self {
            total_time: 0.0,
            segments: Vec::new(),
        }
    }
}

/// Convert a path of graph edges into itinerary segments.
///
/// The first segment is always the wait for the first bus at `from`. An
/// edge whose endpoints share a stop name is a change of bus and becomes a
/// wait; any other edge is a hop that opens or extends a ride. Edges that
/// do not resolve in `graph` are skipped.
pub fn assemble(
    edges: &[EdgeId],
    from: &str,
    graph: &TransitGraph,
    settings: &RoutingSettings,
) -> Vec<Segment> {
    let mut segments = vec![Segment::Wait {
        stop: from.to_string(),
        duration: settings.wait_time,
    }];
    let mut riding = false;

    for &edge_id in edges {
        let Some((edge, start, end)) = graph.edge_endpoints(edge_id) else {
            continue;
        };

        if start.stop == end.stop {
            segments.push(Segment::Wait {
                stop: start.stop.clone(),
                duration: settings.wait_time,
            });
            riding = false;
            continue;
        }

        if riding {
            if let Some(Segment::Ride {
                bus,
                span_count,
                duration,
            }) = segments.last_mut()
            {
                if *bus == start.bus {
                    *span_count += 1;
                    *duration += edge.weight;
                    continue;
                }
            }
        }

        segments.push(Segment::Ride {
            bus: start.bus.clone(),
            span_count: 1,
            duration: edge.weight,
        });
        riding = true;
    }

    segments
}
