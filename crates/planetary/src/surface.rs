//! Ocean, cloud and ice cover, and the albedo they produce

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use units::{EARTH_RADIUS_KM, Length};

use crate::constants::{
    AIRLESS_ICE_ALBEDO, CLOUD_ALBEDO, CLOUD_COVERAGE_FACTOR, EARTH_AVERAGE_KELVIN,
    EARTH_WATER_MASS_PER_AREA, ICE_ALBEDO, Q2_36, ROCKY_AIRLESS_ALBEDO, ROCKY_ALBEDO,
    WATER_ALBEDO, WATER_VAPOR_WEIGHT,
};

/// Ice stops forming above this temperature (K)
const ICE_CEILING_TEMP: f64 = 328.0;

/// Fractional coverage of the surface, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceCover {
    pub hydrosphere: f64,
    pub cloud_cover: f64,
    pub ice_cover: f64,
}

impl SurfaceCover {
    /// Bond albedo of the mixed surface
    ///
    /// Clouds hide an equal share of each non-empty surface type. Whatever
    /// clear area is left is weighted by its component albedo, and is never
    /// allowed to exceed `1 - cloud_cover`. In vacuum, open water does not
    /// reflect and ice and rock use their airless albedos.
    pub fn albedo(&self, airless: bool) -> f64 {
        let cloud = self.cloud_cover;
        let mut rock = 1.0 - self.hydrosphere - self.ice_cover;
        let mut water = self.hydrosphere;
        let mut ice = self.ice_cover;

        let components = [water, ice, rock].iter().filter(|f| **f > 0.0).count();
        let cloud_share = if components > 0 {
            cloud / components as f64
        } else {
            0.0
        };

        rock = if rock >= cloud_share { rock - cloud_share } else { 0.0 };
        water = if water > cloud_share { water - cloud_share } else { 0.0 };
        ice = if ice > cloud_share { ice - cloud_share } else { 0.0 };

        let clear = rock + water + ice;
        let clear_sky = (1.0 - cloud).max(0.0);
        if clear > clear_sky && clear > 0.0 {
            let scale = clear_sky / clear;
            rock *= scale;
            water *= scale;
            ice *= scale;
        }

        if airless {
            cloud * CLOUD_ALBEDO + rock * ROCKY_AIRLESS_ALBEDO + ice * AIRLESS_ICE_ALBEDO
        } else {
            cloud * CLOUD_ALBEDO + rock * ROCKY_ALBEDO + water * WATER_ALBEDO + ice * ICE_ALBEDO
        }
    }
}

/// Fraction of the surface under liquid water
///
/// Earth's inventory of 1000 on an Earth-sized body covers 71 %.
pub fn hydro_fraction(volatile_inventory: f64, radius: Length) -> f64 {
    let temp = (0.71 * volatile_inventory / 1000.0) * (EARTH_RADIUS_KM / radius.to_km()).powi(2);
    temp.min(1.0)
}

/// Cloud cover from evaporated ocean mass
///
/// Water vapour grows exponentially with temperature above Earth's mean.
/// No clouds form if water vapour itself escapes.
pub fn cloud_fraction(
    surface_temp: f64,
    min_molecular_weight: f64,
    radius: Length,
    hydro_fraction: f64,
) -> f64 {
    if min_molecular_weight > WATER_VAPOR_WEIGHT {
        return 0.0;
    }

    let surface_area = 4.0 * PI * radius.to_km().powi(2);
    let hydro_mass = hydro_fraction * surface_area * EARTH_WATER_MASS_PER_AREA;
    let water_vapor = (1.0e-8 * hydro_mass) * (Q2_36 * (surface_temp - EARTH_AVERAGE_KELVIN)).exp();
    let fraction = CLOUD_COVERAGE_FACTOR * water_vapor / surface_area;

    fraction.min(1.0)
}

/// Ice cover from a fifth-power law below 328 K
///
/// Capped at 1.5 times the hydrosphere, since ice needs water to form.
pub fn ice_fraction(hydro_fraction: f64, surface_temp: f64) -> f64 {
    let temp = surface_temp.min(ICE_CEILING_TEMP);
    let ice = ((ICE_CEILING_TEMP - temp) / 90.0).powi(5);
    ice.min(1.5 * hydro_fraction).min(1.0)
}
