use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Mass of the Sun in grams (1.989 × 10³³ g)
pub const SOLAR_MASS_G: f64 = 1.989e33;

/// Mass of the Earth in grams (5.977 × 10²⁷ g)
pub const EARTH_MASS_G: f64 = 5.977e27;

/// Earth masses per solar mass (M☉/M⊕)
pub const EARTH_MASSES_PER_SOLAR: f64 = 332_775.64;

/// A mass, stored in solar masses
///
/// Solar masses are the base unit: planet masses arrive from the accretion
/// stage as tiny fractions of the host star, and the environment formulas
/// convert to grams or Earth masses as they need.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let earth = Mass::from_earth_masses(1.0);
/// assert!((earth.to_earth_masses() - 1.0).abs() < 1e-9);
///
/// let grams = earth.to_grams();
/// assert!((grams / 5.977e27 - 1.0).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// One solar mass is 332,775.64 Earth masses in this model
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value / EARTH_MASSES_PER_SOLAR)
    }

    pub fn from_grams(value: f64) -> Self {
        Self(value / SOLAR_MASS_G)
    }

    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    pub fn to_earth_masses(&self) -> f64 {
        self.0 * EARTH_MASSES_PER_SOLAR
    }

    pub fn to_grams(&self) -> f64 {
        self.0 * SOLAR_MASS_G
    }

    /// Power function on the solar-mass value
    pub fn powf(&self, n: f64) -> f64 {
        self.0.powf(n)
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

/// Ratio of two Mass values
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}

/// Scalar on the left
impl Mul<Mass> for f64 {
    type Output = Mass;

    fn mul(self, rhs: Mass) -> Mass {
        rhs * self
    }
}
