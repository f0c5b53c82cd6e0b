//! Host star context for environment derivation
//!
//! The star is read-only here: its mass drives tidal spin-down and volatile
//! scaling, its age sets the gas-retention horizon, and its ecosphere radius
//! anchors every temperature estimate.

use serde::{Deserialize, Serialize};
use units::{Length, Time};

use crate::error::{EnvironmentError, Result};

/// Host star properties needed by the environment model
///
/// # Examples
/// ```
/// use planetary::star::HostStar;
///
/// let sun = HostStar::solar();
/// assert_eq!(sun.ecosphere_radius.to_au(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostStar {
    /// Stellar mass in solar masses (M☉)
    pub mass: f64,
    /// Stellar luminosity in solar luminosities (L☉)
    pub luminosity: f64,
    /// Stellar age, when known
    pub age: Option<Time>,
    /// Distance at which an Earth analogue would have Earth's temperature
    pub ecosphere_radius: Length,
}

impl HostStar {
    /// Create a host star, deriving the ecosphere radius as √L AU
    ///
    /// # Errors
    /// `InvalidStar` if mass, luminosity or a known age is not positive.
    pub fn new(mass: f64, luminosity: f64, age: Option<Time>) -> Result<Self> {
        if mass.is_nan() || mass <= 0.0 {
            return Err(EnvironmentError::InvalidStar {
                reason: format!("mass must be positive, got {mass}"),
            });
        }
        if luminosity.is_nan() || luminosity <= 0.0 {
            return Err(EnvironmentError::InvalidStar {
                reason: format!("luminosity must be positive, got {luminosity}"),
            });
        }
        if let Some(age) = age
            && (age.to_years().is_nan() || age.to_years() <= 0.0)
        {
            return Err(EnvironmentError::InvalidStar {
                reason: format!("age must be positive, got {} years", age.to_years()),
            });
        }

        Ok(Self {
            mass,
            luminosity,
            age,
            ecosphere_radius: Length::from_au(luminosity.sqrt()),
        })
    }

    /// Main-sequence star with luminosity from the mass-luminosity relation
    pub fn from_mass(mass: f64, age: Option<Time>) -> Result<Self> {
        Self::new(mass, luminosity_from_mass(mass), age)
    }

    /// The Sun at 4.6 Gyr
    pub fn solar() -> Self {
        Self {
            mass: 1.0,
            luminosity: 1.0,
            age: Some(Time::from_gyr(4.6)),
            ecosphere_radius: Length::from_au(1.0),
        }
    }

    /// Horizon over which gases must be retained (years)
    ///
    /// Falls back to `default_years` when the star's age is unknown.
    pub fn retention_horizon(&self, default_years: f64) -> f64 {
        self.age.map_or(default_years, |age| age.to_years())
    }
}

/// Main-sequence luminosity (L☉) for a mass in solar masses
///
/// Piecewise power law: steeper below one solar mass, flattening above it.
pub fn luminosity_from_mass(mass_ratio: f64) -> f64 {
    let n = if mass_ratio < 1.0 {
        1.75 * (mass_ratio - 0.1) + 3.325
    } else {
        0.5 * (2.0 - mass_ratio) + 4.4
    };
    mass_ratio.powf(n)
}
