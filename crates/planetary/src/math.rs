//! Numeric helpers shared by the environment model
//!
//! Every stochastic helper draws from a caller-supplied generator so a
//! seeded `ChaChaRng` replays a planet exactly.

use std::cmp::Ordering;

use rand::Rng;
use serde::{Deserialize, Serialize};

const ECCENTRICITY_COEFF: f64 = 0.077;
const MAX_ECCENTRICITY: f64 = 0.999_999_999_999;
const EARTH_AXIAL_TILT: f64 = 23.4;

/// A quantity that is either finite or unbounded.
///
/// Rotation arrested by tides and gases that never escape both produce
/// values with no meaningful magnitude. `Infinite` orders above every
/// finite value, so comparisons against a target stay correct.
///
/// ```
/// use planetary::math::Magnitude;
///
/// let lifetime = Magnitude::Infinite;
/// assert!(lifetime > Magnitude::Finite(4.6e9));
/// assert_eq!(Magnitude::Finite(3.0).finite(), Some(3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Magnitude {
    Finite(f64),
    Infinite,
}

impl Magnitude {
    /// Wraps `value`, treating anything non-finite or above `cap` as unbounded
    pub fn capped(value: f64, cap: f64) -> Self {
        if !value.is_finite() || value > cap {
            Magnitude::Infinite
        } else {
            Magnitude::Finite(value)
        }
    }

    pub fn finite(self) -> Option<f64> {
        match self {
            Magnitude::Finite(v) => Some(v),
            Magnitude::Infinite => None,
        }
    }

    pub fn is_infinite(self) -> bool {
        matches!(self, Magnitude::Infinite)
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Magnitude::Finite(a), Magnitude::Finite(b)) => a.partial_cmp(b),
            (Magnitude::Finite(_), Magnitude::Infinite) => Some(Ordering::Less),
            (Magnitude::Infinite, Magnitude::Finite(_)) => Some(Ordering::Greater),
            (Magnitude::Infinite, Magnitude::Infinite) => Some(Ordering::Equal),
        }
    }
}

/// Uniform value between `inner` and `outer`
pub fn random_number(rng: &mut impl Rng, inner: f64, outer: f64) -> f64 {
    inner + (outer - inner) * rng.random::<f64>()
}

/// `value` perturbed by up to ± `variation` of itself
pub fn about(rng: &mut impl Rng, value: f64, variation: f64) -> f64 {
    value + value * random_number(rng, -variation, variation)
}

/// Eccentricity skewed towards circular orbits, always below 1
pub fn random_eccentricity(rng: &mut impl Rng) -> f64 {
    let e = 1.0 - rng.random::<f64>().powf(ECCENTRICITY_COEFF);
    e.min(MAX_ECCENTRICITY)
}

/// Axial tilt in whole degrees, growing slowly with orbital distance
///
/// # Arguments
/// * `semi_major_axis_au` - Orbital distance in AU
pub fn random_axial_tilt(rng: &mut impl Rng, semi_major_axis_au: f64) -> f64 {
    let tilt = semi_major_axis_au.powf(0.2) * about(rng, EARTH_AXIAL_TILT, 0.4);
    tilt.trunc() % 360.0
}

pub fn pow1_4(x: f64) -> f64 {
    x.sqrt().sqrt()
}

pub fn pow1_3(x: f64) -> f64 {
    x.cbrt()
}
