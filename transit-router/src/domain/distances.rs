//! Road distances between stops.

use std::collections::HashMap;

use super::IntegrityError;

/// Directed road distances in metres, keyed by `(from, to)` stop names.
///
/// A missing reverse entry means the road is assumed symmetric, so
/// [`DistanceTable::between`] falls back to `(to, from)`.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    entries: HashMap<(String, String), u64>,
}

impl DistanceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the road distance from `from` to `to`.
    ///
    /// A later entry for the same ordered pair replaces the earlier one.
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>, metres: u64) {
        self.entries.insert((from.into(), to.into()), metres);
    }

    /// The distance recorded for exactly this direction, if any.
    pub fn get(&self, from: &str, to: &str) -> Option<u64> {
        self.entries
            .get(&(from.to_string(), to.to_string()))
            .copied()
    }

    /// Road distance from `from` to `to`, using the reverse entry when
    /// only that one is recorded.
    pub fn between(&self, from: &str, to: &str) -> Result<u64, IntegrityError> {
        self.get(from, to)
            .or_else(|| self.get(to, from))
            .ok_or_else(|| IntegrityError::MissingDistance {
                from: from.to_string(),
                to: to.to_string(),
            })
    }
}
