//! Route length and curvature of a bus.

use crate::domain::{Bus, IntegrityError, RouteKind, Stop, TransitCatalog};

/// Statistics reported for a bus query.
#[derive(Debug, Clone, PartialEq)]
pub struct BusMetrics {
    /// Stops passed on one full trip
    pub stop_count: usize,
    /// Distinct stop names
    pub unique_stop_count: usize,
    /// Road distance in metres
    pub route_length: u64,
    /// Road distance over geographic distance, `None` if the latter is zero
    pub curvature: Option<f64>,
}

impl BusMetrics {
    /// Compute every statistic for `bus`.
    pub fn compute(bus: &Bus, catalog: &TransitCatalog) -> Result<Self, IntegrityError> {
        let route_length = road_distance(bus, catalog)?;
        let geo = geo_distance(bus, catalog)?;
        Ok(Self {
            stop_count: bus.stop_count(),
            unique_stop_count: bus.unique_stop_count(),
            route_length,
            curvature: curvature(route_length, geo),
        })
    }
}

/// Road distance of one full trip, in metres.
///
/// Line routes add the way back, looked up in the reverse direction with
/// the same symmetric fallback.
pub fn road_distance(bus: &Bus, catalog: &TransitCatalog) -> Result<u64, IntegrityError> {
    let distances = catalog.distances();
    let mut total = 0;
    for (from, to) in bus.hops() {
        total += distances.between(from, to)?;
        if bus.kind == RouteKind::Line {
            total += distances.between(to, from)?;
        }
    }
    Ok(total)
}

/// Great-circle distance of one full trip, in metres.
///
/// The way back of a line route is assumed to be geometrically identical.
pub fn geo_distance(bus: &Bus, catalog: &TransitCatalog) -> Result<f64, IntegrityError> {
    let mut total = 0.0;
    for (from, to) in bus.hops() {
        let a = lookup_stop(bus, from, catalog)?;
        let b = lookup_stop(bus, to, catalog)?;
        total += a.point.distance_to(&b.point);
    }

    Ok(match bus.kind {
        RouteKind::Round => total,
        RouteKind::Line => total * 2.0,
    })
}

/// Ratio of road to geographic distance.
pub fn curvature(road: u64, geo: f64) -> Option<f64> {
    (geo > 0.0).then(|| road as f64 / geo)
}

fn lookup_stop<'c>(
    bus: &Bus,
    name: &str,
    catalog: &'c TransitCatalog,
) -> Result<&'c Stop, IntegrityError> {
    catalog.stop(name).ok_or_else(|| IntegrityError::UnknownStop {
        bus: bus.name.clone(),
        stop: name.to_string(),
    })
}
