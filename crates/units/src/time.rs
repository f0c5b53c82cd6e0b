use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Earth days per Earth year
pub const DAYS_PER_YEAR: f64 = 365.256;
pub const HOURS_PER_DAY: f64 = 24.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const HOURS_PER_YEAR: f64 = DAYS_PER_YEAR * HOURS_PER_DAY;
pub const SECONDS_PER_YEAR: f64 = HOURS_PER_YEAR * SECONDS_PER_HOUR;

/// A span of time, stored in years
///
/// Years suit stellar ages and gas-retention lifetimes; day lengths and
/// orbital periods convert through hours and days.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let year = Time::from_days(365.256);
/// assert!((year.to_years() - 1.0).abs() < 1e-12);
/// assert!((year.to_hours() - 8766.144).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Years

impl Time {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_years(value: f64) -> Self {
        Self(value)
    }

    pub fn from_gyr(value: f64) -> Self {
        Self(value * 1.0e9)
    }

    pub fn from_days(value: f64) -> Self {
        Self(value / DAYS_PER_YEAR)
    }

    pub fn from_hours(value: f64) -> Self {
        Self(value / HOURS_PER_YEAR)
    }

    pub fn from_seconds(value: f64) -> Self {
        Self(value / SECONDS_PER_YEAR)
    }

    pub fn to_years(&self) -> f64 {
        self.0
    }

    pub fn to_gyr(&self) -> f64 {
        self.0 / 1.0e9
    }

    pub fn to_days(&self) -> f64 {
        self.0 * DAYS_PER_YEAR
    }

    pub fn to_hours(&self) -> f64 {
        self.0 * HOURS_PER_YEAR
    }

    pub fn to_seconds(&self) -> f64 {
        self.0 * SECONDS_PER_YEAR
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

impl Div<f64> for Time {
    type Output = Time;

    fn div(self, rhs: f64) -> Time {
        Time(self.0 / rhs)
    }
}

/// Ratio of two Time values
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Time) -> f64 {
        self.0 / rhs.0
    }
}
