use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Centimeters in one astronomical unit
pub const AU_TO_CM: f64 = 1.495978707e13;
/// Centimeters in one kilometer
pub const KM_TO_CM: f64 = 1.0e5;
/// Kilometers in one astronomical unit
pub const AU_TO_KM: f64 = AU_TO_CM / KM_TO_CM;
/// Equatorial radius of the Earth in kilometers
pub const EARTH_RADIUS_KM: f64 = 6378.0;

/// A distance, stored in astronomical units
///
/// AU keeps orbital distances readable; planetary radii are usually built
/// with [`Length::from_km`].
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let orbit = Length::from_au(1.0);
/// let radius = Length::from_km(6378.0);
///
/// assert!((radius.to_earth_radii() - 1.0).abs() < 1e-12);
/// assert!(orbit.to_km() > 1.49e8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    pub fn from_km(value: f64) -> Self {
        Self(value / AU_TO_KM)
    }

    pub fn from_cm(value: f64) -> Self {
        Self(value / AU_TO_CM)
    }

    pub fn from_earth_radii(value: f64) -> Self {
        Self::from_km(value * EARTH_RADIUS_KM)
    }

    pub fn to_au(&self) -> f64 {
        self.0
    }

    pub fn to_km(&self) -> f64 {
        self.0 * AU_TO_KM
    }

    pub fn to_cm(&self) -> f64 {
        self.0 * AU_TO_CM
    }

    pub fn to_earth_radii(&self) -> f64 {
        self.to_km() / EARTH_RADIUS_KM
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Ratio of two Length values
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

/// Scalar on the left
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
