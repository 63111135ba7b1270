//! Routing settings shared by graph construction and search.

/// Error returned for unusable routing settings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    /// Velocity must be a positive, finite number
    #[error("bus velocity must be positive, got {0}")]
    InvalidVelocity(f64),

    /// Wait time must be a non-negative, finite number
    #[error("bus wait time must be non-negative, got {0}")]
    InvalidWaitTime(f64),
}

/// Global routing parameters, loaded once and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingSettings {
    /// Time spent waiting for a bus at boarding and at every change (minutes).
    pub wait_time: f64,

    /// Bus velocity in metres per minute.
    pub velocity: f64,
}

impl RoutingSettings {
    /// Create settings from a wait time in minutes and a velocity in
    /// metres per minute.
    pub fn new(wait_time: f64, velocity: f64) -> Result<Self, SettingsError> {
        if !wait_time.is_finite() || wait_time < 0.0 {
            return Err(SettingsError::InvalidWaitTime(wait_time));
        }
        if !velocity.is_finite() || velocity <= 0.0 {
            return Err(SettingsError::InvalidVelocity(velocity));
        }
        Ok(Self {
            wait_time,
            velocity,
        })
    }

    /// Create settings from document units: wait time in minutes and
    /// velocity in km/h.
    pub fn from_input(wait_time: f64, velocity_kmh: f64) -> Result<Self, SettingsError> {
        if !velocity_kmh.is_finite() || velocity_kmh <= 0.0 {
            return Err(SettingsError::InvalidVelocity(velocity_kmh));
        }
        Self::new(wait_time, velocity_kmh * 1000.0 / 60.0)
    }

    /// Minutes needed to ride `metres` of road.
    pub fn ride_time(&self, metres: u64) -> f64 {
        metres as f64 / self.velocity
    }
}
