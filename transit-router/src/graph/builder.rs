//! Transit graph construction.
//!
//! Every vertex stands for "this bus, at this stop". Ride edges connect
//! consecutive stops of one bus and weigh the travel time. Wait edges link
//! vertices of different buses at the same physical stop and weigh the
//! routing wait time. All ids are handed out by [`TransitGraph::build`] and
//! never change afterwards.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::router::{DirectedWeightedGraph, Edge, EdgeId, VertexId};
use crate::domain::{Bus, IntegrityError, RouteKind, TransitCatalog};
use crate::planner::RoutingSettings;

/// The `(bus, stop)` identity of a vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexInfo {
    pub bus: String,
    pub stop: String,
}

/// The transit graph together with its vertex indexes.
///
/// `vertices` maps a vertex id to its identity. `by_bus_stop` maps an
/// identity back to the first vertex created for it, and `by_stop` lists
/// every vertex located at a physical stop in creation order.
#[derive(Debug, Clone)]
pub struct TransitGraph {
    graph: DirectedWeightedGraph,
    vertices: Vec<VertexInfo>,
    by_bus_stop: BTreeMap<(String, String), VertexId>,
    by_stop: BTreeMap<String, Vec<VertexId>>,
}

impl TransitGraph {
    /// Build the graph for every bus in the catalog, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrityError::MissingDistance`] if two consecutive stops
    /// of a bus have no road distance in either direction.
    pub fn build(
        catalog: &TransitCatalog,
        settings: &RoutingSettings,
    ) -> Result<Self, IntegrityError> {
        let mut builder = GraphBuilder::new(catalog, settings);
        for bus in catalog.buses() {
            match bus.kind {
                RouteKind::Line => builder.add_line(bus)?,
                RouteKind::Round => builder.add_round(bus)?,
            }
        }
        Ok(builder.finish())
    }

    /// The underlying weighted graph.
    pub fn graph(&self) -> &DirectedWeightedGraph {
        &self.graph
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Identity of a vertex.
    pub fn vertex(&self, id: VertexId) -> Option<&VertexInfo> {
        self.vertices.get(id)
    }

    /// The vertex for boarding `bus` at `stop`, if the bus stops there.
    pub fn vertex_at(&self, bus: &str, stop: &str) -> Option<VertexId> {
        self.by_bus_stop
            .get(&(bus.to_string(), stop.to_string()))
            .copied()
    }

    /// All vertices located at a physical stop, in creation order.
    pub fn vertices_at_stop(&self, stop: &str) -> &[VertexId] {
        self.by_stop.get(stop).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Resolve an edge and the identities of both its endpoints.
    pub fn edge_endpoints(&self, id: EdgeId) -> Option<(&Edge, &VertexInfo, &VertexInfo)> {
        let edge = self.graph.edge(id)?;
        Some((edge, self.vertex(edge.from)?, self.vertex(edge.to)?))
    }
}

/// Incremental state while the graph is being built.
struct GraphBuilder<'a> {
    catalog: &'a TransitCatalog,
    settings: &'a RoutingSettings,
    edges: Vec<Edge>,
    vertices: Vec<VertexInfo>,
    by_bus_stop: BTreeMap<(String, String), VertexId>,
    by_stop: BTreeMap<String, Vec<VertexId>>,
}

impl<'a> GraphBuilder<'a> {
    fn new(catalog: &'a TransitCatalog, settings: &'a RoutingSettings) -> Self {
        Self {
            catalog,
            settings,
            edges: Vec::new(),
            vertices: Vec::new(),
            by_bus_stop: BTreeMap::new(),
            by_stop: BTreeMap::new(),
        }
    }

    /// Ride time from `from` to `to`, falling back to the reverse
    /// distance when only that one is recorded.
    fn ride_time(&self, from: &str, to: &str) -> Result<f64, IntegrityError> {
        let metres = self.catalog.distances().between(from, to)?;
        Ok(self.settings.ride_time(metres))
    }

    /// Vertex for `bus` at `stop`, created on first encounter.
    fn resolve(&mut self, bus: &str, stop: &str) -> VertexId {
        if let Some(&id) = self.by_bus_stop.get(&(bus.to_string(), stop.to_string())) {
            return id;
        }
        let id = self.create(bus, stop);
        self.by_bus_stop
            .insert((bus.to_string(), stop.to_string()), id);
        id
    }

    /// Create a vertex at `stop`, link it to the other buses already
    /// there and register it at the stop.
    fn create(&mut self, bus: &str, stop: &str) -> VertexId {
        let id = self.vertices.len();
        self.vertices.push(VertexInfo {
            bus: bus.to_string(),
            stop: stop.to_string(),
        });

        let wait = self.settings.wait_time;
        let at_stop = self.by_stop.entry(stop.to_string()).or_default();
        for &other in at_stop.iter() {
            if self.vertices[other].bus == bus {
                continue;
            }
            self.edges.push(Edge::new(id, other, wait));
            self.edges.push(Edge::new(other, id, wait));
        }
        at_stop.push(id);

        trace!(vertex = id, bus, stop, "vertex created");
        id
    }

    fn add_line(&mut self, bus: &Bus) -> Result<(), IntegrityError> {
        for (from, to) in bus.hops() {
            let forward = self.ride_time(from, to)?;
            let backward = self.ride_time(to, from)?;

            let v_from = self.resolve(&bus.name, from);
            let v_to = self.resolve(&bus.name, to);

            self.edges.push(Edge::new(v_from, v_to, forward));
            self.edges.push(Edge::new(v_to, v_from, backward));
        }
        Ok(())
    }

    fn add_round(&mut self, bus: &Bus) -> Result<(), IntegrityError> {
        let stops = &bus.stops;
        if stops.len() < 2 {
            debug!(bus = %bus.name, "round route with fewer than two stops has no edges");
            return Ok(());
        }

        // The catalog guarantees the last entry repeats the start; it is
        // replaced by a synthetic closing vertex below.
        let last_internal = stops.len() - 2;
        for (from, to) in bus.hops().take(last_internal) {
            let time = self.ride_time(from, to)?;
            let v_from = self.resolve(&bus.name, from);
            let v_to = self.resolve(&bus.name, to);
            self.edges.push(Edge::new(v_from, v_to, time));
        }

        let start = &stops[0];
        let before_close = &stops[last_internal];
        let closing_time = self.ride_time(before_close, start)?;

        let v_start = self.resolve(&bus.name, start);
        let v_before = self.resolve(&bus.name, before_close);
        let v_close = self.create(&bus.name, start);

        self.edges.push(Edge::new(v_before, v_close, closing_time));
        self.edges
            .push(Edge::new(v_close, v_start, self.settings.wait_time));
        Ok(())
    }

    fn finish(self) -> TransitGraph {
        let mut graph = DirectedWeightedGraph::new(self.vertices.len());
        for edge in &self.edges {
            graph.add_edge(*edge);
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            stops = self.by_stop.len(),
            "transit graph built"
        );

        TransitGraph {
            graph,
            vertices: self.vertices,
            by_bus_stop: self.by_bus_stop,
            by_stop: self.by_stop,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::CatalogBuilder;
    use proptest::prelude::*;

    const NAMES: [&str; 5] = ["A", "B", "C", "D", "E"];

    /// Buses over a fully connected five-stop network.
    fn routes() -> impl Strategy<Value = Vec<(bool, Vec<usize>)>> {
        prop::collection::vec(
            (any::<bool>(), prop::collection::vec(0..NAMES.len(), 2..8)),
            1..5,
        )
    }

    fn catalog(routes: &[(bool, Vec<usize>)]) -> TransitCatalog {
        let mut builder = CatalogBuilder::new();
        for (i, name) in NAMES.iter().enumerate() {
            builder = builder.stop(name, i as f64 * 0.01, 0.0);
            for other in NAMES {
                builder = builder.distance(name, other, 100 * (i as u64 + 1));
            }
        }
        for (n, (round, stops)) in routes.iter().enumerate() {
            let mut stops: Vec<&str> = stops.iter().map(|&i| NAMES[i]).collect();
            let kind = if *round {
                stops.push(stops[0]);
                RouteKind::Round
            } else {
                RouteKind::Line
            };
            builder = builder.bus(&n.to_string(), kind, &stops);
        }
        builder.build().unwrap()
    }

    proptest! {
        /// Each (bus, stop) identity owns exactly one indexed vertex
        #[test]
        fn one_vertex_per_identity(routes in routes()) {
            let catalog = catalog(&routes);
            let settings = RoutingSettings::from_input(1.0, 30.0).unwrap();
            let graph = TransitGraph::build(&catalog, &settings).unwrap();

            for bus in catalog.buses() {
                for stop in &bus.stops {
                    let v = graph.vertex_at(&bus.name, stop);
                    prop_assert!(v.is_some());
                    let info = graph.vertex(v.unwrap()).unwrap();
                    prop_assert_eq!(&info.bus, &bus.name);
                    prop_assert_eq!(&info.stop, stop);
                }
            }
        }

        /// Edges never connect two vertices of one bus at one stop, except
        /// around the closing vertex of a round route
        #[test]
        fn no_same_bus_transfers(routes in routes()) {
            let catalog = catalog(&routes);
            let settings = RoutingSettings::from_input(1.0, 30.0).unwrap();
            let graph = TransitGraph::build(&catalog, &settings).unwrap();

            for id in 0..graph.graph().edge_count() {
                let (edge, from, to) = graph.edge_endpoints(id).unwrap();
                prop_assert!(edge.weight >= 0.0);
                // A hop between two equal consecutive stops loops on one vertex
                if edge.from == edge.to {
                    continue;
                }
                if from.bus == to.bus && from.stop == to.stop {
                    let start = graph.vertex_at(&to.bus, &to.stop);
                    prop_assert!(start == Some(edge.to) || start == Some(edge.from));
                    let bus = catalog.bus(&to.bus).unwrap();
                    prop_assert_eq!(bus.kind, RouteKind::Round);
                }
            }
        }
    }
}
