use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Mean sea-level pressure of the Earth in millibars
pub const EARTH_SURFACE_PRESSURE_MB: f64 = 1013.25;
pub const MILLIBARS_PER_BAR: f64 = 1000.0;
/// Millibars per millimetre of mercury (760 mmHg = 1 atm)
pub const MMHG_TO_MB: f64 = EARTH_SURFACE_PRESSURE_MB / 760.0;
/// Millibars per pound per square inch (14.696 psi = 1 atm)
pub const PSI_TO_MB: f64 = EARTH_SURFACE_PRESSURE_MB / 14.696;

/// Pressure in millibars
///
/// Surface pressures, partial pressures and respiratory limits all share
/// this unit; the constructors cover the units the physiology tables are
/// written in.
///
/// ```rust
/// use units::Pressure;
///
/// let one_atm = Pressure::from_atmospheres(1.0);
/// assert!((one_atm.to_millibars() - 1013.25).abs() < 1e-9);
/// assert!((Pressure::from_mmhg(760.0).to_atmospheres() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pressure(f64); // Base unit: millibars

impl Pressure {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub const fn from_millibars(value: f64) -> Self {
        Self(value)
    }

    pub fn from_bars(value: f64) -> Self {
        Self(value * MILLIBARS_PER_BAR)
    }

    pub fn from_atmospheres(value: f64) -> Self {
        Self(value * EARTH_SURFACE_PRESSURE_MB)
    }

    pub const fn from_mmhg(value: f64) -> Self {
        Self(value * MMHG_TO_MB)
    }

    pub fn from_psi(value: f64) -> Self {
        Self(value * PSI_TO_MB)
    }

    /// Parts per million of one Earth atmosphere
    pub const fn from_ppm_of_atmosphere(value: f64) -> Self {
        Self(value * EARTH_SURFACE_PRESSURE_MB / 1.0e6)
    }

    pub fn to_millibars(&self) -> f64 {
        self.0
    }

    pub fn to_bars(&self) -> f64 {
        self.0 / MILLIBARS_PER_BAR
    }

    pub fn to_atmospheres(&self) -> f64 {
        self.0 / EARTH_SURFACE_PRESSURE_MB
    }

    pub fn to_mmhg(&self) -> f64 {
        self.0 / MMHG_TO_MB
    }

    pub fn is_vacuum(&self) -> bool {
        self.0 <= 0.0
    }
}

impl Add for Pressure {
    type Output = Pressure;

    fn add(self, rhs: Pressure) -> Pressure {
        Pressure(self.0 + rhs.0)
    }
}

impl Sub for Pressure {
    type Output = Pressure;

    fn sub(self, rhs: Pressure) -> Pressure {
        Pressure(self.0 - rhs.0)
    }
}

impl Mul<f64> for Pressure {
    type Output = Pressure;

    fn mul(self, rhs: f64) -> Pressure {
        Pressure(self.0 * rhs)
    }
}

/// Division of Pressure by Pressure returns a dimensionless ratio
impl Div for Pressure {
    type Output = f64;

    fn div(self, rhs: Pressure) -> f64 {
        self.0 / rhs.0
    }
}
