//! Error types for environment derivation

use thiserror::Error;

/// Failure to model one planet.
///
/// Every variant is fatal for the planet being derived only; callers
/// generating a whole system can skip the planet and carry on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvironmentError {
    #[error("invalid orbital zone {zone}: expected 1, 2 or 3")]
    InvalidZone { zone: u8 },

    #[error("boiling point is undefined at non-positive pressure ({pressure_mb} mb)")]
    NonPositivePressure { pressure_mb: f64 },

    #[error("semi-major axis must be positive, got {semi_major_axis_au} AU")]
    NonPositiveOrbit { semi_major_axis_au: f64 },

    #[error("eccentricity must lie in [0, 1), got {eccentricity}")]
    InvalidEccentricity { eccentricity: f64 },

    #[error("planet mass must be positive, got {mass} solar masses")]
    NonPositiveMass { mass: f64 },

    #[error("invalid host star: {reason}")]
    InvalidStar { reason: String },
}

pub type Result<T> = std::result::Result<T, EnvironmentError>;
