use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

pub const CM_PER_METER: f64 = 100.0;
pub const CM_PER_KM: f64 = 1.0e5;

/// A speed in cm/s
///
/// Escape velocities and molecular RMS velocities are compared against each
/// other directly, so both live in the same CGS unit.
///
/// ```rust
/// use units::Velocity;
///
/// let earth_escape = Velocity::from_km_per_sec(11.18);
/// assert!((earth_escape.to_cm_per_sec() - 1.118e6).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: cm/s

impl Velocity {
    pub fn from_cm_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn from_meters_per_sec(value: f64) -> Self {
        Self(value * CM_PER_METER)
    }

    pub fn from_km_per_sec(value: f64) -> Self {
        Self(value * CM_PER_KM)
    }

    pub fn to_cm_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_meters_per_sec(&self) -> f64 {
        self.0 / CM_PER_METER
    }

    pub fn to_km_per_sec(&self) -> f64 {
        self.0 / CM_PER_KM
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

/// Division of Velocity by Velocity returns a dimensionless ratio
impl Div for Velocity {
    type Output = f64;

    fn div(self, rhs: Velocity) -> f64 {
        self.0 / rhs.0
    }
}
