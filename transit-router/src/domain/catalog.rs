//! The loaded transit network: stops, buses and road distances.
//!
//! A `TransitCatalog` is built once by [`CatalogBuilder::build`], which
//! validates every cross-reference. Nothing mutates it afterwards.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::{Bus, DistanceTable, IntegrityError, RouteKind, Stop};

/// Validated, immutable entity tables.
#[derive(Debug, Clone)]
pub struct TransitCatalog {
    stops: Vec<Stop>,
    stop_index: HashMap<String, usize>,
    buses: Vec<Bus>,
    bus_index: HashMap<String, usize>,
    distances: DistanceTable,
    /// Stop name to the names of buses serving it, sorted
    stop_to_buses: BTreeMap<String, BTreeSet<String>>,
}

impl TransitCatalog {
    /// All stops, in declaration order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All buses, in declaration order.
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    /// The road distance table.
    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    /// Look up a stop by name.
    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stop_index.get(name).map(|&idx| &self.stops[idx])
    }

    /// Look up a bus by name.
    pub fn bus(&self, name: &str) -> Option<&Bus> {
        self.bus_index.get(name).map(|&idx| &self.buses[idx])
    }

    /// Names of the buses serving a stop, sorted.
    ///
    /// Returns `None` if the stop is not declared. A declared stop that no
    /// bus serves yields an empty list.
    pub fn buses_at(&self, stop: &str) -> Option<Vec<&str>> {
        self.stop(stop)?;
        Some(
            self.stop_to_buses
                .get(stop)
                .map(|buses| buses.iter().map(String::as_str).collect())
                .unwrap_or_default(),
        )
    }
}

/// Builder for a [`TransitCatalog`].
///
/// Entries are collected as-is; all validation happens in
/// [`CatalogBuilder::build`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    distances: DistanceTable,
}

impl CatalogBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop.
    pub fn stop(mut self, name: &str, latitude: f64, longitude: f64) -> Self {
        self.stops.push(Stop::new(name, latitude, longitude));
        self
    }

    /// Add a directed road distance.
    pub fn distance(mut self, from: &str, to: &str, metres: u64) -> Self {
        self.distances.insert(from, to, metres);
        self
    }

    /// Add a bus.
    pub fn bus(mut self, name: &str, kind: RouteKind, stops: &[&str]) -> Self {
        self.buses.push(Bus::new(name, kind, stops.iter().copied()));
        self
    }

    /// Add an already constructed stop.
    pub fn add_stop(&mut self, stop: Stop) {
        self.stops.push(stop);
    }

    /// Add an already constructed bus.
    pub fn add_bus(&mut self, bus: Bus) {
        self.buses.push(bus);
    }

    /// Add a directed road distance in place.
    pub fn add_distance(&mut self, from: &str, to: &str, metres: u64) {
        self.distances.insert(from, to, metres);
    }

    /// Validate and freeze the catalog.
    ///
    /// # Errors
    ///
    /// - [`IntegrityError::DuplicateStop`] / [`IntegrityError::DuplicateBus`]
    ///   if a name is declared twice
    /// - [`IntegrityError::UnknownStop`] if a bus references an undeclared stop
    /// - [`IntegrityError::OpenRoundRoute`] if a round bus does not end at the
    ///   stop it starts from
    pub fn build(self) -> Result<TransitCatalog, IntegrityError> {
        let mut stop_index = HashMap::with_capacity(self.stops.len());
        for (idx, stop) in self.stops.iter().enumerate() {
            if stop_index.insert(stop.name.clone(), idx).is_some() {
                return Err(IntegrityError::DuplicateStop(stop.name.clone()));
            }
        }

        let mut bus_index = HashMap::with_capacity(self.buses.len());
        let mut stop_to_buses: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (idx, bus) in self.buses.iter().enumerate() {
            if bus_index.insert(bus.name.clone(), idx).is_some() {
                return Err(IntegrityError::DuplicateBus(bus.name.clone()));
            }
            if bus.kind == RouteKind::Round && bus.stops.first() != bus.stops.last() {
                return Err(IntegrityError::OpenRoundRoute(bus.name.clone()));
            }
            for stop in &bus.stops {
                if !stop_index.contains_key(stop) {
                    return Err(IntegrityError::UnknownStop {
                        bus: bus.name.clone(),
                        stop: stop.clone(),
                    });
                }
                stop_to_buses
                    .entry(stop.clone())
                    .or_default()
                    .insert(bus.name.clone());
            }
        }

        Ok(TransitCatalog {
            stops: self.stops,
            stop_index,
            buses: self.buses,
            bus_index,
            distances: self.distances,
            stop_to_buses,
        })
    }
}
