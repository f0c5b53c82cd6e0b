//! Habitability and Earth-likeness of a modelled planet

use serde::{Deserialize, Serialize};

use crate::atmosphere::Atmosphere;
use crate::breathability::Breathability;
use crate::climate::Climate;
use crate::constants::FREEZING_POINT_OF_WATER;
use crate::physical::Rotation;

/// Earth's mean surface temperature in Celsius
const EARTH_MEAN_CELSIUS: f64 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habitability {
    /// Breathable air on a planet with a normal day-night cycle
    pub habitable: bool,
    /// Habitable and close to Earth in every surface measure
    pub earthlike: bool,
}

impl Habitability {
    /// Assess a terrestrial planet's final state
    ///
    /// Earth-like requires gravity 0.8-1.2 g, a mean temperature within
    /// -2..+3 K of Earth's, at most 10 % ice, 0.5-2 atm of pressure, 40-80 %
    /// cloud and 50-80 % ocean.
    pub fn assess(
        rotation: &Rotation,
        surface_gravity: f64,
        atmosphere: &Atmosphere,
        climate: &Climate,
        breathability: Breathability,
    ) -> Self {
        let habitable =
            breathability == Breathability::Breathable && !rotation.tidally_locked && !rotation.resonant;
        if !habitable {
            return Self {
                habitable,
                earthlike: false,
            };
        }

        let relative_temp =
            climate.surface_temperature - FREEZING_POINT_OF_WATER - EARTH_MEAN_CELSIUS;
        let pressure_atm = atmosphere.surface_pressure.to_atmospheres();
        let cover = climate.cover;

        let earthlike = (0.8..=1.2).contains(&surface_gravity)
            && (-2.0..=3.0).contains(&relative_temp)
            && cover.ice_cover <= 0.1
            && (0.5..=2.0).contains(&pressure_atm)
            && (0.4..=0.8).contains(&cover.cloud_cover)
            && (0.5..=0.8).contains(&cover.hydrosphere);

        Self {
            habitable,
            earthlike,
        }
    }
}
