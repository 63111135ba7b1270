//! Input document DTOs.
//!
//! These types map directly onto the JSON input. Unknown keys are rejected
//! so that a misspelled field fails loudly instead of being ignored.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::{Bus, CatalogBuilder, IntegrityError, RouteKind, Stop, TransitCatalog};
use crate::planner::{RoutingSettings, SettingsError};
use crate::query::{Request, RequestId};

/// The whole input document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputDocument {
    /// Global wait time and velocity.
    pub routing_settings: SettingsInput,

    /// Stops and buses making up the network.
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    /// Queries to answer, in output order.
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// The `routing_settings` block.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsInput {
    /// Minutes spent waiting for every bus boarded.
    pub bus_wait_time: f64,

    /// Bus velocity in km/h.
    pub bus_velocity: f64,
}

/// A network entity declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopInput),
    Bus(BusInput),
}

/// A stop declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StopInput {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Road distances in metres from this stop to its neighbours.
    #[serde(default)]
    pub road_distances: BTreeMap<String, u64>,
}

/// A bus declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BusInput {
    pub name: String,
    pub stops: Vec<String>,

    /// True for a loop whose stop list ends with its first stop.
    pub is_roundtrip: bool,
}

/// A query.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", deny_unknown_fields)]
pub enum StatRequest {
    Bus { id: RequestId, name: String },
    Stop { id: RequestId, name: String },
    Route { id: RequestId, from: String, to: String },
}

impl SettingsInput {
    /// Convert document units into routing settings.
    pub fn to_settings(self) -> Result<RoutingSettings, SettingsError> {
        RoutingSettings::from_input(self.bus_wait_time, self.bus_velocity)
    }
}

impl InputDocument {
    /// Build the validated catalog from the base requests.
    pub fn catalog(&self) -> Result<TransitCatalog, IntegrityError> {
        let mut builder = CatalogBuilder::new();
        for entity in &self.base_requests {
            match entity {
                BaseRequest::Stop(stop) => {
                    builder.add_stop(Stop::new(&stop.name, stop.latitude, stop.longitude));
                    for (neighbour, &metres) in &stop.road_distances {
                        builder.add_distance(&stop.name, neighbour, metres);
                    }
                }
                BaseRequest::Bus(bus) => {
                    let kind = if bus.is_roundtrip {
                        RouteKind::Round
                    } else {
                        RouteKind::Line
                    };
                    builder.add_bus(Bus::new(&bus.name, kind, bus.stops.iter().cloned()));
                }
            }
        }
        builder.build()
    }

    /// The stat requests as engine requests, in document order.
    pub fn requests(&self) -> Vec<Request> {
        self.stat_requests
            .iter()
            .map(|request| match request {
                StatRequest::Bus { id, name } => Request::bus(*id, name.as_str()),
                StatRequest::Stop { id, name } => Request::stop(*id, name.as_str()),
                StatRequest::Route { id, from, to } => {
                    Request::route(*id, from.as_str(), to.as_str())
                }
            })
            .collect()
    }
}
