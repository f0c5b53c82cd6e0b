use serde::{Deserialize, Serialize};

/// Standard surface acceleration of the Earth in cm/s²
pub const EARTH_ACCELERATION: f64 = 980.7;

/// An acceleration in cm/s²
///
/// ```rust
/// use units::Acceleration;
///
/// let g = Acceleration::from_earth_gravities(1.0);
/// assert_eq!(g.to_cm_per_sec2(), 980.7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Acceleration(f64); // Base unit: cm/s²

impl Acceleration {
    pub fn from_cm_per_sec2(value: f64) -> Self {
        Self(value)
    }

    pub fn from_earth_gravities(value: f64) -> Self {
        Self(value * EARTH_ACCELERATION)
    }

    pub fn to_cm_per_sec2(&self) -> f64 {
        self.0
    }

    /// Multiples of the Earth's surface gravity
    pub fn to_earth_gravities(&self) -> f64 {
        self.0 / EARTH_ACCELERATION
    }
}
