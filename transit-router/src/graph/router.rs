//! Directed weighted graph and shortest-path router.
//!
//! The router hands out each computed path as a [`RouteGuard`]. The guard
//! owns a slot in the router's route registry and frees it when dropped,
//! so callers comparing many candidate paths never leak expanded routes.

use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Index of a vertex, in `0..vertex_count`.
pub type VertexId = usize;

/// Index of an edge, in insertion order.
pub type EdgeId = usize;

/// A directed edge weighted in minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, weight: f64) -> Self {
        Self { from, to, weight }
    }
}

/// Adjacency-list graph with a fixed vertex count.
#[derive(Debug, Clone)]
pub struct DirectedWeightedGraph {
    edges: Vec<Edge>,
    outgoing: Vec<Vec<EdgeId>>,
}

impl DirectedWeightedGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            outgoing: vec![Vec::new(); vertex_count],
        }
    }

    /// Add an edge and return its id.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a vertex of this graph.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        assert!(
            edge.from < self.outgoing.len() && edge.to < self.outgoing.len(),
            "edge {} -> {} outside graph of {} vertices",
            edge.from,
            edge.to,
            self.outgoing.len()
        );
        let id = self.edges.len();
        self.edges.push(edge);
        self.outgoing[edge.from].push(id);
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Ids of the edges leaving `vertex`.
    pub fn outgoing(&self, vertex: VertexId) -> &[EdgeId] {
        self.outgoing.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Handle of an expanded route inside a [`Router`].
pub type RouteId = u64;

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    vertex: VertexId,
}

impl Eq for State {}

// Min-heap on cost. Ties are broken by vertex id so the search order is
// deterministic.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest-path router over a [`DirectedWeightedGraph`].
///
/// Each successful [`Router::build_route`] registers the route's edge list
/// under a fresh [`RouteId`] until its guard is dropped.
#[derive(Debug, Default)]
pub struct Router {
    routes: RefCell<HashMap<RouteId, Vec<EdgeId>>>,
    next_id: Cell<RouteId>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the cheapest path from `from` to `to`.
    ///
    /// Returns `None` if `to` is unreachable or either vertex is outside
    /// the graph. A path from a vertex to itself has no edges and weight 0.
    pub fn build_route(
        &self,
        graph: &DirectedWeightedGraph,
        from: VertexId,
        to: VertexId,
    ) -> Option<RouteGuard<'_>> {
        let n = graph.vertex_count();
        if from >= n || to >= n {
            return None;
        }

        let mut dist = vec![f64::INFINITY; n];
        let mut prev_edge: Vec<Option<EdgeId>> = vec![None; n];
        let mut heap = BinaryHeap::new();

        dist[from] = 0.0;
        heap.push(State {
            cost: 0.0,
            vertex: from,
        });

        while let Some(State { cost, vertex }) = heap.pop() {
            if vertex == to {
                break;
            }
            // Stale entry
            if cost > dist[vertex] {
                continue;
            }

            for &edge_id in graph.outgoing(vertex) {
                let edge = &graph.edges[edge_id];
                let next = cost + edge.weight;
                if next < dist[edge.to] {
                    dist[edge.to] = next;
                    prev_edge[edge.to] = Some(edge_id);
                    heap.push(State {
                        cost: next,
                        vertex: edge.to,
                    });
                }
            }
        }

        if dist[to].is_infinite() {
            return None;
        }

        let mut edges = Vec::new();
        let mut cursor = to;
        while cursor != from {
            let edge_id = prev_edge[cursor]?;
            edges.push(edge_id);
            cursor = graph.edges[edge_id].from;
        }
        edges.reverse();

        Some(self.register(dist[to], edges))
    }

    /// Number of routes currently held by live guards.
    pub fn live_routes(&self) -> usize {
        self.routes.borrow().len()
    }

    fn register(&self, weight: f64, edges: Vec<EdgeId>) -> RouteGuard<'_> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let edge_count = edges.len();
        self.routes.borrow_mut().insert(id, edges);
        RouteGuard {
            router: self,
            id,
            weight,
            edge_count,
        }
    }

    fn route_edge(&self, id: RouteId, index: usize) -> Option<EdgeId> {
        self.routes.borrow().get(&id)?.get(index).copied()
    }

    fn release(&self, id: RouteId) {
        self.routes.borrow_mut().remove(&id);
    }
}

/// A computed route, released from its router on drop.
#[derive(Debug)]
pub struct RouteGuard<'r> {
    router: &'r Router,
    id: RouteId,
    weight: f64,
    edge_count: usize,
}

impl RouteGuard<'_> {
    /// Total weight of the route.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Number of edges on the route.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The `index`-th edge of the route, for `index` in `0..edge_count()`.
    pub fn edge(&self, index: usize) -> Option<EdgeId> {
        self.router.route_edge(self.id, index)
    }

    /// All edges of the route, in travel order.
    pub fn edges(&self) -> Vec<EdgeId> {
        (0..self.edge_count)
            .filter_map(|index| self.edge(index))
            .collect()
    }
}

impl Drop for RouteGuard<'_> {
    fn drop(&mut self) {
        self.router.release(self.id);
    }
}
