//! Best-route search between two stops.
//!
//! A stop is served by one vertex per bus stopping there, so a query is
//! answered by searching every (origin vertex, destination vertex) pair
//! and keeping the cheapest non-empty path.

use tracing::{debug, trace};

use crate::graph::{EdgeId, Router, TransitGraph, VertexId};

use super::RoutingSettings;
use super::itinerary::{Itinerary, assemble};

/// Route search over a built transit graph.
pub struct RouteSearch<'a> {
    graph: &'a TransitGraph,
    router: &'a Router,
    settings: &'a RoutingSettings,
}

impl<'a> RouteSearch<'a> {
    /// Create a new search.
    pub fn new(graph: &'a TransitGraph, router: &'a Router, settings: &'a RoutingSettings) -> Self {
        Self {
            graph,
            router,
            settings,
        }
    }

    /// Find the fastest itinerary from stop `from` to stop `to`.
    ///
    /// Returns the trivial itinerary without searching when both names are
    /// equal, and `None` when either stop has no vertices or no candidate
    /// pair is connected.
    pub fn find_route(&self, from: &str, to: &str) -> Option<Itinerary> {
        if from == to {
            return Some(Itinerary::trivial());
        }

        let origins = self.graph.vertices_at_stop(from);
        if origins.is_empty() {
            debug!(stop = from, "origin has no vertices");
            return None;
        }
        let destinations = self.graph.vertices_at_stop(to);
        if destinations.is_empty() {
            debug!(stop = to, "destination has no vertices");
            return None;
        }

        let (weight, edges) = self.best_path(origins, destinations)?;

        Some(Itinerary {
            total_time: weight + self.settings.wait_time,
            segments: assemble(&edges, from, self.graph, self.settings),
        })
    }

    /// Cheapest non-empty path over all candidate pairs. Ties keep the
    /// first pair found.
    fn best_path(
        &self,
        origins: &[VertexId],
        destinations: &[VertexId],
    ) -> Option<(f64, Vec<EdgeId>)> {
        let mut best: Option<(f64, Vec<EdgeId>)> = None;

        for &origin in origins {
            for &destination in destinations {
                let Some(route) = self.router.build_route(self.graph.graph(), origin, destination)
                else {
                    continue;
                };
                if route.edge_count() == 0 {
                    continue;
                }

                let improves = best
                    .as_ref()
                    .is_none_or(|(weight, _)| route.weight() < *weight);
                trace!(
                    origin,
                    destination,
                    weight = route.weight(),
                    improves,
                    "candidate route"
                );
                if improves {
                    best = Some((route.weight(), route.edges()));
                }
            }
        }

        best
    }
}
