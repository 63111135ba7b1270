//! The query engine built once per input document.

use std::collections::HashMap;

use tracing::{debug, info};

use super::request::{Answer, Query, Request, Response};
use crate::domain::{IntegrityError, TransitCatalog};
use crate::graph::{Router, TransitGraph};
use crate::planner::{BusMetrics, RouteSearch, RoutingSettings, SettingsError};

/// Fatal errors while preparing the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// The network data is malformed
    #[error(transparent)]
    Integrity(#[from] IntegrityError),

    /// The routing settings are unusable
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Answers bus, stop and route queries against one loaded network.
///
/// The graph and per-bus metrics are computed up front, so answering is
/// read-only and a failing query never affects the next one.
pub struct QueryEngine {
    catalog: TransitCatalog,
    settings: RoutingSettings,
    graph: TransitGraph,
    router: Router,
    bus_metrics: HashMap<String, BusMetrics>,
}

impl QueryEngine {
    /// Build the transit graph and bus metrics for `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Integrity`] if a bus has no road distance
    /// between two consecutive stops.
    pub fn new(catalog: TransitCatalog, settings: RoutingSettings) -> Result<Self, EngineError> {
        let graph = TransitGraph::build(&catalog, &settings)?;

        let mut bus_metrics = HashMap::with_capacity(catalog.buses().len());
        for bus in catalog.buses() {
            bus_metrics.insert(bus.name.clone(), BusMetrics::compute(bus, &catalog)?);
        }

        info!(
            stops = catalog.stops().len(),
            buses = catalog.buses().len(),
            vertices = graph.vertex_count(),
            "query engine ready"
        );

        Ok(Self {
            catalog,
            settings,
            graph,
            router: Router::new(),
            bus_metrics,
        })
    }

    /// The loaded catalog.
    pub fn catalog(&self) -> &TransitCatalog {
        &self.catalog
    }

    /// The transit graph.
    pub fn graph(&self) -> &TransitGraph {
        &self.graph
    }

    /// Answer a single request.
    pub fn answer(&self, request: &Request) -> Response {
        let answer = match &request.query {
            Query::Bus { name } => self
                .bus_metrics
                .get(name)
                .cloned()
                .map_or(Answer::NotFound, Answer::Bus),
            Query::Stop { name } => self
                .catalog
                .buses_at(name)
                .map_or(Answer::NotFound, |buses| {
                    Answer::Stop(buses.into_iter().map(str::to_string).collect())
                }),
            Query::Route { from, to } => RouteSearch::new(&self.graph, &self.router, &self.settings)
                .find_route(from, to)
                .map_or(Answer::NotFound, Answer::Route),
        };

        debug!(
            request_id = request.id,
            found = !matches!(answer, Answer::NotFound),
            "request answered"
        );

        Response {
            request_id: request.id,
            answer,
        }
    }

    /// Answer every request, in order.
    pub fn answer_all(&self, requests: &[Request]) -> Vec<Response> {
        requests.iter().map(|request| self.answer(request)).collect()
    }
}
