//! Domain types for the transit network.
//!
//! This module contains the entity tables loaded from the input document:
//! stops, buses and road distances. [`TransitCatalog`] validates every
//! cross-reference at construction time, so code that receives a catalog
//! can trust that each bus stop exists.

mod bus;
mod catalog;
mod distances;
mod error;
mod stop;

pub use bus::{Bus, RouteKind};
pub use catalog::{CatalogBuilder, TransitCatalog};
pub use distances::DistanceTable;
pub use error::IntegrityError;
pub use stop::{GeoPoint, Stop};
