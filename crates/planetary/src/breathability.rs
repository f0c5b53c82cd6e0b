//! Human breathability of an atmosphere
//!
//! Compares each gas's inspired partial pressure against its toxicity
//! ceiling and requires oxygen within a tolerable band.
//!
//! # References
//! - Dole (1964) - "Habitable Planets for Man", ch. 2

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use units::Pressure;

use crate::constants::{H2O_ASSUMED_PRESSURE_MMHG, MAX_O2_IPP_MMHG, MIN_O2_IPP_MMHG};
use crate::gases::{GasComponent, GasSpecies};

/// Breathability class of an atmosphere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Breathability {
    /// No atmosphere to breathe
    None,
    Breathable,
    /// Harmless, but oxygen is outside the tolerable band
    Unbreathable,
    /// At least one gas exceeds its toxicity ceiling
    Poisonous,
}

impl fmt::Display for Breathability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Breathability::None => "none",
            Breathability::Breathable => "breathable",
            Breathability::Unbreathable => "unbreathable",
            Breathability::Poisonous => "poisonous",
        };
        f.write_str(label)
    }
}

/// Partial pressure of a gas in air humidified by the airway
///
/// The fixed water vapour pressure is removed from the total and the
/// remainder shared out in the gas's proportion.
pub fn inspired_partial_pressure(surface_pressure: Pressure, partial_pressure: Pressure) -> Pressure {
    let water = Pressure::from_mmhg(H2O_ASSUMED_PRESSURE_MMHG);
    (surface_pressure - water) * (partial_pressure / surface_pressure)
}

/// Classifies a gas mixture at the given surface pressure
///
/// Any gas above its ceiling makes the atmosphere poisonous regardless of
/// oxygen. Otherwise it is breathable only with oxygen's inspired pressure
/// inside 72-400 mmHg.
///
/// # Examples
/// ```
/// use planetary::breathability::{Breathability, classify};
/// use planetary::gases::{GasComponent, GasSpecies};
/// use units::Pressure;
///
/// let air = [
///     GasComponent { species: GasSpecies::Nitrogen, partial_pressure: Pressure::from_millibars(780.0) },
///     GasComponent { species: GasSpecies::Oxygen, partial_pressure: Pressure::from_millibars(220.0) },
/// ];
/// assert_eq!(classify(&air, Pressure::from_millibars(1000.0)), Breathability::Breathable);
/// assert_eq!(classify(&[], Pressure::zero()), Breathability::None);
/// ```
pub fn classify(gases: &[GasComponent], surface_pressure: Pressure) -> Breathability {
    if gases.is_empty() || surface_pressure.is_vacuum() {
        return Breathability::None;
    }

    let min_oxygen = Pressure::from_mmhg(MIN_O2_IPP_MMHG);
    let max_oxygen = Pressure::from_mmhg(MAX_O2_IPP_MMHG);
    let mut oxygen_ok = false;

    for gas in gases {
        let ipp = inspired_partial_pressure(surface_pressure, gas.partial_pressure);

        if let Some(limit) = gas.species.max_inspired_pressure()
            && ipp > limit
        {
            debug!(
                species = %gas.species,
                ipp_mb = ipp.to_millibars(),
                limit_mb = limit.to_millibars(),
                "toxic gas level"
            );
            return Breathability::Poisonous;
        }

        if gas.species == GasSpecies::Oxygen {
            oxygen_ok = ipp >= min_oxygen && ipp <= max_oxygen;
        }
    }

    if oxygen_ok {
        Breathability::Breathable
    } else {
        Breathability::Unbreathable
    }
}
