//! Orbital zone and period

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;
use units::{Length, Mass, Time};

use crate::error::{EnvironmentError, Result};

/// Coarse distance class relative to stellar luminosity
///
/// Selects the effective atomic constants of the Kothari radius and the
/// volatile inventory scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrbitalZone {
    /// Inside 4√L AU
    Inner,
    /// Inside 15√L AU
    Middle,
    Outer,
}

impl OrbitalZone {
    /// Zone for an orbit around a star of the given luminosity (L☉)
    pub fn for_orbit(luminosity: f64, semi_major_axis: Length) -> Self {
        let a = semi_major_axis.to_au();
        let root_l = luminosity.sqrt();
        if a < 4.0 * root_l {
            OrbitalZone::Inner
        } else if a < 15.0 * root_l {
            OrbitalZone::Middle
        } else {
            OrbitalZone::Outer
        }
    }

    pub fn number(self) -> u8 {
        match self {
            OrbitalZone::Inner => 1,
            OrbitalZone::Middle => 2,
            OrbitalZone::Outer => 3,
        }
    }
}

impl TryFrom<u8> for OrbitalZone {
    type Error = EnvironmentError;

    fn try_from(zone: u8) -> Result<Self> {
        match zone {
            1 => Ok(OrbitalZone::Inner),
            2 => Ok(OrbitalZone::Middle),
            3 => Ok(OrbitalZone::Outer),
            _ => Err(EnvironmentError::InvalidZone { zone }),
        }
    }
}

impl fmt::Display for OrbitalZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zone {}", self.number())
    }
}

/// Converts a raw zone number, logging the rejection of bad input
pub fn resolve_zone(zone: u8) -> Result<OrbitalZone> {
    OrbitalZone::try_from(zone).inspect_err(|_| warn!(zone, "rejecting planet with invalid orbital zone"))
}

/// Sidereal period of a two-body orbit
///
/// # Arguments
/// * `semi_major_axis` - Orbital distance
/// * `small_mass` - Planet mass
/// * `large_mass` - Star mass
///
/// # Returns
/// Period as a `Time`; Earth around the Sun gives one year.
pub fn orbital_period(semi_major_axis: Length, small_mass: Mass, large_mass: Mass) -> Time {
    let a = semi_major_axis.to_au();
    let total = (small_mass + large_mass).to_solar_masses();
    Time::from_years((a.powi(3) / total).sqrt())
}
