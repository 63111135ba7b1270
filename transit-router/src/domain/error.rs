//! Domain error types.
//!
//! These errors mean the loaded network is malformed. They are fatal for the
//! whole run: there is no partial graph to answer queries against.

/// Data-integrity errors found while loading or indexing the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityError {
    /// No road distance is recorded between two consecutive stops, in
    /// either direction
    #[error("no road distance between {from} and {to}")]
    MissingDistance { from: String, to: String },

    /// A bus route references a stop that was never declared
    #[error("bus {bus} references unknown stop {stop}")]
    UnknownStop { bus: String, stop: String },

    /// The same stop name was declared twice
    #[error("duplicate stop: {0}")]
    DuplicateStop(String),

    /// The same bus name was declared twice
    #[error("duplicate bus: {0}")]
    DuplicateBus(String),

    /// A round bus whose stop list does not return to its first stop
    #[error("round bus {0} does not end at its first stop")]
    OpenRoundRoute(String),
}
