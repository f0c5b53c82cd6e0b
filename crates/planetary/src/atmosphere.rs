//! Atmospheric retention, volatile inventory and surface pressure
//!
//! A planet keeps a gas while its escape velocity is several times the
//! gas's RMS thermal velocity at the exobase. The retention solver finds
//! the lightest molecule that survives Jeans escape for the age of the
//! system; the volatile inventory and surface pressure follow from how
//! strongly the planet holds molecular nitrogen.
//!
//! # References
//! - Jeans (1925) - "The Dynamical Theory of Gases"
//! - Fogg (1985) - "Extra-Solar Planetary Systems: A Microcomputer Simulation"
//! - Dole (1964) - "Habitable Planets for Man"

use serde::{Deserialize, Serialize};
use tracing::trace;
use units::{
    EARTH_ACCELERATION, EARTH_RADIUS_KM, EARTH_SURFACE_PRESSURE_MB, Length, Mass, Pressure, Time,
    Velocity,
};

use crate::constants::{
    EARTH_EXOSPHERE_TEMP, FREEZING_POINT_OF_WATER, GAS_RETENTION_THRESHOLD,
    GREENHOUSE_TRIGGER_ALBEDO, MAX_GAS_LIFETIME_YEARS, MOLAR_GAS_CONST,
};
use crate::error::{EnvironmentError, Result};
use crate::gases::GasComponent;
use crate::math::Magnitude;
use crate::orbit::{OrbitalZone, resolve_zone};
use crate::physical::escape_velocity;
use crate::temperature::effective_temperature;

const MAX_BRACKET_STEPS: u32 = 25;
const MAX_BISECTION_STEPS: u32 = 25;
/// Bisection stops once the bracket is narrower than this (amu)
const WEIGHT_TOLERANCE: f64 = 0.1;
/// Inventory divisor for planets without a runaway greenhouse or captured gas
const THIN_ATMOSPHERE_DIVISOR: f64 = 140.0;

/// Atmospheric state of a terrestrial planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Atmosphere {
    /// Exobase temperature (K)
    pub exospheric_temperature: f64,
    /// RMS velocity of N₂ at the exobase
    pub rms_velocity: Velocity,
    /// Lightest molecular weight retained over the system's age
    pub min_molecular_weight: f64,
    /// Dimensionless volatile gas inventory (Earth ≈ 1000)
    pub volatile_inventory: f64,
    pub surface_pressure: Pressure,
    /// Boiling point of water at the surface (K); `None` in vacuum
    pub boiling_point: Option<f64>,
    /// Runaway greenhouse in effect
    pub greenhouse: bool,
    /// Gas mixture sorted by decreasing partial pressure
    pub gases: Vec<GasComponent>,
}

/// Exobase temperature, scaled from Earth's 1273 K by inverse-square flux
pub fn exospheric_temperature(semi_major_axis: Length, ecosphere_radius: Length) -> f64 {
    EARTH_EXOSPHERE_TEMP / (semi_major_axis / ecosphere_radius).powi(2)
}

/// RMS thermal velocity of a molecule at the given temperature
///
/// # Arguments
/// * `molecular_weight` - Molecular weight in amu
/// * `exospheric_temp` - Temperature in Kelvin
pub fn rms_velocity(molecular_weight: f64, exospheric_temp: f64) -> Velocity {
    Velocity::from_meters_per_sec((3.0 * MOLAR_GAS_CONST * exospheric_temp / molecular_weight).sqrt())
}

/// Lightest molecule whose RMS velocity stays under the retention threshold
///
/// Used as the starting guess of [`min_molecular_weight`].
pub fn molecule_limit(mass: Mass, radius: Length, exospheric_temp: f64) -> f64 {
    let esc = escape_velocity(mass, radius).to_meters_per_sec();
    3.0 * MOLAR_GAS_CONST * exospheric_temp / (esc / GAS_RETENTION_THRESHOLD).powi(2)
}

/// Jeans-escape lifetime of a gas, in years
///
/// Lifetimes beyond 2×10¹⁰ years are unbounded.
///
/// # Arguments
/// * `molecular_weight` - Molecular weight in amu
/// * `exospheric_temp` - Exobase temperature in Kelvin
/// * `surface_gravity` - Gravity in Earth gravities
/// * `radius` - Planet radius
pub fn gas_life(
    molecular_weight: f64,
    exospheric_temp: f64,
    surface_gravity: f64,
    radius: Length,
) -> Magnitude {
    let v = rms_velocity(molecular_weight, exospheric_temp).to_cm_per_sec();
    let g = surface_gravity * EARTH_ACCELERATION;
    let r = radius.to_cm();

    let seconds = (v.powi(3) / (2.0 * g.powi(2) * r)) * (3.0 * g * r / v.powi(2)).exp();
    Magnitude::capped(Time::from_seconds(seconds).to_years(), MAX_GAS_LIFETIME_YEARS)
}

/// Minimum molecular weight retained for `target_years`
///
/// Brackets the answer by halving (or doubling) the analytic guess until
/// the lifetime crosses the target, then bisects to within 0.1 amu. The
/// returned weight is the bracket's upper end, so its lifetime is at least
/// the target whenever a bracket was found.
pub fn min_molecular_weight(
    mass: Mass,
    radius: Length,
    exospheric_temp: f64,
    surface_gravity: f64,
    target_years: f64,
) -> f64 {
    let target = Magnitude::Finite(target_years);
    let life = |weight: f64| gas_life(weight, exospheric_temp, surface_gravity, radius);

    let guess = molecule_limit(mass, radius, exospheric_temp);
    let mut lower = guess;
    let mut upper = guess;
    let mut steps = 0;

    if life(guess) > target {
        while life(lower) > target && steps < MAX_BRACKET_STEPS {
            lower /= 2.0;
            steps += 1;
        }
    } else {
        while life(upper) < target && steps < MAX_BRACKET_STEPS {
            upper *= 2.0;
            steps += 1;
        }
    }

    steps = 0;
    while upper - lower > WEIGHT_TOLERANCE && steps < MAX_BISECTION_STEPS {
        let mid = (lower + upper) / 2.0;
        if life(mid) < target {
            lower = mid;
        } else {
            upper = mid;
        }
        steps += 1;
    }

    trace!(guess, lower, upper, "retention bracket settled");
    upper
}

/// Whether the planet is close enough in to start a runaway greenhouse
///
/// True when the effective temperature at albedo 0.20 exceeds freezing.
pub fn greenhouse_trigger(ecosphere_radius: Length, semi_major_axis: Length) -> bool {
    effective_temperature(ecosphere_radius, semi_major_axis, GREENHOUSE_TRIGGER_ALBEDO)
        > FREEZING_POINT_OF_WATER
}

fn inventory_constant(zone: OrbitalZone) -> f64 {
    match zone {
        OrbitalZone::Inner => 140_000.0,
        OrbitalZone::Middle => 75_000.0,
        OrbitalZone::Outer => 250.0,
    }
}

/// Dimensionless volatile gas inventory
///
/// Zero when the escape velocity is under six times the RMS velocity.
/// Otherwise a zone constant scaled by planet mass (Earth masses) over star
/// mass, divided by 140 unless a runaway greenhouse or accreted gas
/// thickens the atmosphere.
///
/// # Errors
/// `InvalidZone` if `orbit_zone` is not 1, 2 or 3.
pub fn vol_inventory(
    mass: Mass,
    escape_velocity: Velocity,
    rms_velocity: Velocity,
    star_mass: f64,
    orbit_zone: u8,
    greenhouse: bool,
    accreted_gas: bool,
) -> Result<f64> {
    let zone = resolve_zone(orbit_zone)?;

    if escape_velocity / rms_velocity < GAS_RETENTION_THRESHOLD {
        return Ok(0.0);
    }

    let inventory = inventory_constant(zone) * mass.to_earth_masses() / star_mass;
    if greenhouse || accreted_gas {
        Ok(inventory)
    } else {
        Ok(inventory / THIN_ATMOSPHERE_DIVISOR)
    }
}

/// Surface pressure from inventory, radius and gravity (Earth g)
///
/// An Earth-sized, Earth-gravity planet with inventory 1000 sits at
/// one atmosphere.
pub fn pressure(volatile_inventory: f64, radius: Length, surface_gravity: f64) -> Pressure {
    let radius_ratio = EARTH_RADIUS_KM / radius.to_km();
    Pressure::from_millibars(
        volatile_inventory * surface_gravity * (EARTH_SURFACE_PRESSURE_MB / 1000.0)
            / radius_ratio.powi(2),
    )
}

/// Boiling point of water (K) at the given surface pressure
///
/// # Errors
/// `NonPositivePressure` in vacuum, where water has no liquid phase.
///
/// # Examples
/// ```
/// use planetary::atmosphere::boiling_point;
/// use units::Pressure;
///
/// let bp = boiling_point(Pressure::from_atmospheres(1.0)).unwrap();
/// assert!((bp - 373.0).abs() < 1.0);
/// assert!(boiling_point(Pressure::zero()).is_err());
/// ```
pub fn boiling_point(surface_pressure: Pressure) -> Result<f64> {
    let pressure_mb = surface_pressure.to_millibars();
    if pressure_mb.is_nan() || pressure_mb <= 0.0 {
        return Err(EnvironmentError::NonPositivePressure { pressure_mb });
    }
    let surface_bars = surface_pressure.to_bars();
    Ok(1.0 / (surface_bars.ln() / -5050.5 + 1.0 / 373.0))
}
