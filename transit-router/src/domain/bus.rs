//! Bus routes.

use std::collections::HashSet;

/// How a bus traverses its stop sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    /// A loop. The sequence already ends with its first stop.
    Round,
    /// Travelled forward to the last stop, then back to the first.
    Line,
}

/// A bus and its ordered stop sequence.
///
/// Stop names may repeat. A `Bus` does not know whether its stops exist;
/// that is checked when the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bus {
    /// Unique bus name
    pub name: String,
    /// Route kind
    pub kind: RouteKind,
    /// Stop names in travel order
    pub stops: Vec<String>,
}

impl Bus {
    /// Creates a bus from a name, route kind and stop names.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        kind: RouteKind,
        stops: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            stops: stops.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of stops a rider passes through on one full trip.
    ///
    /// A line route visits every stop but the last one twice.
    pub fn stop_count(&self) -> usize {
        match self.kind {
            RouteKind::Round => self.stops.len(),
            RouteKind::Line => (2 * self.stops.len()).saturating_sub(1),
        }
    }

    /// Number of distinct stop names on the route.
    pub fn unique_stop_count(&self) -> usize {
        self.stops.iter().collect::<HashSet<_>>().len()
    }

    /// Consecutive `(from, to)` stop pairs in forward order.
    pub fn hops(&self) -> impl Iterator<Item = (&str, &str)> {
        self.stops
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn stop_names() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[A-E]", 0..12)
    }

    proptest! {
        /// Round routes count each sequence entry once
        #[test]
        fn round_count(stops in stop_names()) {
            let bus = Bus::new("x", RouteKind::Round, stops.clone());
            prop_assert_eq!(bus.stop_count(), stops.len());
        }

        /// Line routes count 2n - 1 for any non-empty sequence
        #[test]
        fn line_count(stops in stop_names().prop_filter("non-empty", |s| !s.is_empty())) {
            let bus = Bus::new("x", RouteKind::Line, stops.clone());
            prop_assert_eq!(bus.stop_count(), 2 * stops.len() - 1);
        }

        /// Unique count never depends on the route kind
        #[test]
        fn unique_count_ignores_kind(stops in stop_names()) {
            let round = Bus::new("x", RouteKind::Round, stops.clone());
            let line = Bus::new("x", RouteKind::Line, stops.clone());
            prop_assert_eq!(round.unique_stop_count(), line.unique_stop_count());
            prop_assert!(round.unique_stop_count() <= stops.len());
        }
    }
}
