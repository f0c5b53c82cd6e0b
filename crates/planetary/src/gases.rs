//! Gas species and atmospheric mixture
//!
//! Each species carries its molecular weight, boiling point, cosmic
//! abundance, chemical reactivity and the highest inspired partial pressure
//! a human tolerates. A planet holds a species when it is heavier than the
//! minimum retained weight and too volatile to freeze out at the surface.
//!
//! # References
//! - Dole (1964) - "Habitable Planets for Man"
//! - Burrows (2006) - StarGen gas tables

use std::fmt;

use serde::{Deserialize, Serialize};
use units::{Mass, Pressure, Velocity};

use crate::atmosphere::rms_velocity;
use crate::constants::MAX_O2_IPP_MMHG;

/// Chemical species tracked in planetary atmospheres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GasSpecies {
    Hydrogen,
    Helium,
    Nitrogen,
    Oxygen,
    Neon,
    Argon,
    Krypton,
    Xenon,
    Ammonia,
    Water,
    CarbonDioxide,
    Ozone,
    Methane,
}

/// Fixed physical and physiological data for one species
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasProperties {
    pub symbol: &'static str,
    /// Molecular weight (amu)
    pub weight: f64,
    /// Boiling point at one bar (K)
    pub boiling_point: f64,
    /// Solar abundance relative to silicon
    pub abundance: f64,
    pub reactivity: f64,
    /// Highest tolerable inspired partial pressure; `None` when unlimited
    pub max_ipp: Option<Pressure>,
}

const fn gas(
    symbol: &'static str,
    weight: f64,
    boiling_point: f64,
    abundance: f64,
    reactivity: f64,
    max_ipp: Option<Pressure>,
) -> GasProperties {
    GasProperties {
        symbol,
        weight,
        boiling_point,
        abundance,
        reactivity,
        max_ipp,
    }
}

const HYDROGEN: GasProperties = gas("H", 1.0079, 20.40, 27925.4, 1.0, None);
const HELIUM: GasProperties = gas("He", 4.0026, 4.20, 2722.7, 0.0, Some(Pressure::from_mmhg(61000.0)));
const NITROGEN: GasProperties = gas("N", 14.0067, 77.40, 3.13329, 0.0, Some(Pressure::from_mmhg(2330.0)));
const OXYGEN: GasProperties = gas("O", 15.9994, 90.20, 23.8232, 10.0, Some(Pressure::from_mmhg(MAX_O2_IPP_MMHG)));
const NEON: GasProperties = gas("Ne", 20.17, 27.10, 3.4435e-5, 0.0, Some(Pressure::from_mmhg(3900.0)));
const ARGON: GasProperties = gas("Ar", 39.948, 87.30, 0.100925, 0.0, Some(Pressure::from_mmhg(1220.0)));
const KRYPTON: GasProperties = gas("Kr", 83.8, 119.70, 4.4978e-5, 0.0, Some(Pressure::from_mmhg(350.0)));
const XENON: GasProperties = gas("Xe", 131.3, 165.0, 4.69894e-6, 0.0, Some(Pressure::from_mmhg(160.0)));
const AMMONIA: GasProperties = gas("NH3", 17.0, 239.66, 0.0001, 1.0, Some(Pressure::from_ppm_of_atmosphere(100.0)));
const WATER: GasProperties = gas("H2O", 18.0, 373.16, 0.001, 0.0, None);
const CARBON_DIOXIDE: GasProperties = gas("CO2", 44.0, 194.66, 0.0005, 0.0, Some(Pressure::from_mmhg(7.0)));
const OZONE: GasProperties = gas("O3", 48.0, 161.16, 0.000001, 2.0, Some(Pressure::from_ppm_of_atmosphere(0.1)));
const METHANE: GasProperties = gas("CH4", 16.0, 109.16, 0.0001, 1.0, Some(Pressure::from_ppm_of_atmosphere(50000.0)));

impl GasSpecies {
    pub const ALL: [GasSpecies; 13] = [
        GasSpecies::Hydrogen,
        GasSpecies::Helium,
        GasSpecies::Nitrogen,
        GasSpecies::Oxygen,
        GasSpecies::Neon,
        GasSpecies::Argon,
        GasSpecies::Krypton,
        GasSpecies::Xenon,
        GasSpecies::Ammonia,
        GasSpecies::Water,
        GasSpecies::CarbonDioxide,
        GasSpecies::Ozone,
        GasSpecies::Methane,
    ];

    pub fn properties(self) -> &'static GasProperties {
        match self {
            GasSpecies::Hydrogen => &HYDROGEN,
            GasSpecies::Helium => &HELIUM,
            GasSpecies::Nitrogen => &NITROGEN,
            GasSpecies::Oxygen => &OXYGEN,
            GasSpecies::Neon => &NEON,
            GasSpecies::Argon => &ARGON,
            GasSpecies::Krypton => &KRYPTON,
            GasSpecies::Xenon => &XENON,
            GasSpecies::Ammonia => &AMMONIA,
            GasSpecies::Water => &WATER,
            GasSpecies::CarbonDioxide => &CARBON_DIOXIDE,
            GasSpecies::Ozone => &OZONE,
            GasSpecies::Methane => &METHANE,
        }
    }

    /// Highest tolerable inspired partial pressure, if the species is toxic
    pub fn max_inspired_pressure(self) -> Option<Pressure> {
        self.properties().max_ipp
    }
}

impl fmt::Display for GasSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.properties().symbol)
    }
}

/// One constituent of an atmosphere
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasComponent {
    pub species: GasSpecies,
    pub partial_pressure: Pressure,
}

/// Planetary conditions the mixture depends on
#[derive(Debug, Clone, Copy)]
pub struct GasEnvironment {
    pub surface_pressure: Pressure,
    pub min_molecular_weight: f64,
    pub exospheric_temperature: f64,
    pub escape_velocity: Velocity,
    /// Mean surface temperature (K)
    pub surface_temperature: f64,
    /// Night-side low temperature (K)
    pub low_temperature: f64,
    /// Age over which gases escape and react (years)
    pub age_years: f64,
    pub planet_mass: Mass,
    /// Gas captured during accretion
    pub gas_mass: Mass,
}

/// Relative amount of one species left after escape and chemistry
fn retained_amount(species: GasSpecies, env: &GasEnvironment) -> f64 {
    let props = species.properties();
    let pressure_bars = env.surface_pressure.to_bars();
    let age = env.age_years;

    let vrms = rms_velocity(props.weight, env.exospheric_temperature);
    let escape_factor = (1.0 / (1.0 + vrms / env.escape_velocity)).powf(age / 1.0e9);

    let temperate_and_old = age > 2.0e9 && env.surface_temperature > 270.0 && env.surface_temperature < 400.0;
    let decay = |exponent: f64| (1.0 / (1.0 + props.reactivity)).powf(exponent);

    let mut abundance = props.abundance;
    let reactivity = match species {
        GasSpecies::Argon => 0.15 * age / 4.0e9,
        GasSpecies::Helium => {
            abundance *= 0.001 + env.gas_mass / env.planet_mass;
            decay(age / 2.0e9 * (0.75 + pressure_bars))
        }
        GasSpecies::Oxygen if temperate_and_old => {
            decay((age / 2.0e9).powf(0.25) * (0.89 + pressure_bars / 4.0))
        }
        GasSpecies::CarbonDioxide if temperate_and_old => {
            decay((age / 2.0e9).sqrt() * (0.75 + pressure_bars)) * 1.5
        }
        _ => decay(age / 2.0e9 * (0.75 + pressure_bars)),
    };

    let fraction = 1.0 - env.min_molecular_weight / props.weight;
    abundance * escape_factor * reactivity * fraction
}

/// Pressure-adjusted boiling point of a species (K)
fn surface_boiling_point(species: GasSpecies, pressure_bars: f64) -> f64 {
    let bp = species.properties().boiling_point;
    bp / (373.0 * ((pressure_bars + 0.001).ln() / -5050.5 + 1.0 / 373.0))
}

/// Gas mixture of a terrestrial atmosphere
///
/// A species is present when its pressure-adjusted boiling point lies below
/// the low temperature and it is at least as heavy as the lightest retained
/// molecule. The surface pressure is shared out by each species' retained
/// amount. Returns components sorted by decreasing partial pressure; empty
/// in vacuum.
pub fn derive_gases(env: &GasEnvironment) -> Vec<GasComponent> {
    if env.surface_pressure.is_vacuum() {
        return Vec::new();
    }
    let pressure_bars = env.surface_pressure.to_bars();

    let amounts: Vec<(GasSpecies, f64)> = GasSpecies::ALL
        .iter()
        .copied()
        .filter(|&species| {
            let boil = surface_boiling_point(species, pressure_bars);
            boil >= 0.0
                && boil < env.low_temperature
                && species.properties().weight >= env.min_molecular_weight
        })
        .map(|species| (species, retained_amount(species, env)))
        .filter(|&(_, amount)| amount > 0.0)
        .collect();

    let total: f64 = amounts.iter().map(|(_, amount)| amount).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut gases: Vec<GasComponent> = amounts
        .into_iter()
        .map(|(species, amount)| GasComponent {
            species,
            partial_pressure: env.surface_pressure * (amount / total),
        })
        .collect();
    gases.sort_by(|a, b| {
        b.partial_pressure
            .to_millibars()
            .total_cmp(&a.partial_pressure.to_millibars())
    });
    gases
}
