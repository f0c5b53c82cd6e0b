//! Radiative temperatures, greenhouse warming and diurnal/seasonal range
//!
//! Temperatures scale from Earth's by the inverse-square distance to the
//! ecosphere radius and a fourth-root albedo contrast. Greenhouse warming
//! comes from a grey optical depth built from molecular weight and surface
//! pressure.
//!
//! # References
//! - Fogg (1985) - "Extra-Solar Planetary Systems: A Microcomputer Simulation"
//! - Hart (1978) - "The Evolution of the Atmosphere of the Earth"

use serde::{Deserialize, Serialize};
use units::{Length, Pressure, Time};

use crate::constants::{EARTH_ALBEDO, EARTH_AVERAGE_KELVIN, EARTH_CONVECTION_FACTOR, EARTH_EFFECTIVE_TEMP};
use crate::math::pow1_4;

/// Optical depth contributed by the lightest retained gas, by weight band (amu)
const OPACITY_BINS: [(f64, f64, f64); 5] = [
    (0.0, 10.0, 3.0),
    (10.0, 20.0, 2.34),
    (20.0, 30.0, 1.0),
    (30.0, 45.0, 0.15),
    (45.0, 100.0, 0.05),
];

/// Optical depth multiplier by surface pressure (atmospheres), highest tier first
const PRESSURE_TIERS: [(f64, f64); 5] = [
    (70.0, 8.333),
    (50.0, 6.666),
    (30.0, 3.333),
    (10.0, 2.0),
    (5.0, 1.5),
];

fn albedo_scaled(ecosphere_radius: Length, semi_major_axis: Length, albedo: f64, reference: f64) -> f64 {
    (ecosphere_radius / semi_major_axis).sqrt() * pow1_4((1.0 - albedo) / (1.0 - EARTH_ALBEDO)) * reference
}

/// Effective radiating temperature (K); 250 K for Earth
pub fn effective_temperature(ecosphere_radius: Length, semi_major_axis: Length, albedo: f64) -> f64 {
    albedo_scaled(ecosphere_radius, semi_major_axis, albedo, EARTH_EFFECTIVE_TEMP)
}

/// Surface temperature estimate calibrated on Earth's 287 K mean
pub fn estimated_temperature(ecosphere_radius: Length, semi_major_axis: Length, albedo: f64) -> f64 {
    albedo_scaled(ecosphere_radius, semi_major_axis, albedo, EARTH_AVERAGE_KELVIN)
}

/// Grey optical depth of an atmosphere
///
/// # Arguments
/// * `molecular_weight` - Lightest retained molecular weight (amu)
/// * `surface_pressure` - Surface pressure
pub fn opacity(molecular_weight: f64, surface_pressure: Pressure) -> f64 {
    let depth: f64 = OPACITY_BINS
        .iter()
        .filter(|(lower, upper, _)| molecular_weight >= *lower && molecular_weight < *upper)
        .map(|(_, _, contribution)| contribution)
        .sum();

    let atmospheres = surface_pressure.to_atmospheres();
    let multiplier = PRESSURE_TIERS
        .iter()
        .find(|(threshold, _)| atmospheres >= *threshold)
        .map_or(1.0, |(_, factor)| *factor);

    depth * multiplier
}

/// Temperature rise (K) over the effective temperature from greenhouse trapping
///
/// Never negative. Convection carries away more of the trapped heat in thin
/// air, scaled by the 0.4 power of pressure in atmospheres.
pub fn greenhouse_warming(optical_depth: f64, effective_temp: f64, surface_pressure: Pressure) -> f64 {
    let convection_factor = EARTH_CONVECTION_FACTOR * surface_pressure.to_atmospheres().powf(0.4);
    let rise = (pow1_4(1.0 + 0.75 * optical_depth) - 1.0) * effective_temp * convection_factor;
    rise.max(0.0)
}

/// Mean surface temperature for an albedo: effective plus greenhouse warming
pub fn surface_temperature(
    ecosphere_radius: Length,
    semi_major_axis: Length,
    albedo: f64,
    molecular_weight: f64,
    surface_pressure: Pressure,
) -> f64 {
    let effective = effective_temperature(ecosphere_radius, semi_major_axis, albedo);
    effective + greenhouse_warming(opacity(molecular_weight, surface_pressure), effective, surface_pressure)
}

/// Smooth clamp of `x` into (-1, 1)
///
/// Large magnitudes are divided through by x⁴ first so the result saturates
/// at ±1 instead of collapsing to 0 when x⁴ overflows.
pub fn lim(x: f64) -> f64 {
    if x.abs() > 1.0 {
        x.signum() / pow1_4(1.0 + x.powi(-4))
    } else {
        x / pow1_4(1.0 + x.powi(4))
    }
}

/// Softly limits `v` into `[min, max]` without a hard corner
///
/// ```
/// use planetary::temperature::soft;
///
/// let v = soft(1.0e6, 400.0, 200.0);
/// assert!(v <= 400.0 && v >= 200.0);
/// ```
pub fn soft(v: f64, max: f64, min: f64) -> f64 {
    let dv = v - min;
    let dm = max - min;
    (lim(2.0 * dv / dm - 1.0) + 1.0) / 2.0 * dm + min
}

/// Day/night and seasonal temperature extremes (K)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureRange {
    /// Daytime high
    pub high: f64,
    /// Night-time low
    pub low: f64,
    /// Summer maximum
    pub max: f64,
    /// Winter minimum
    pub min: f64,
}

impl TemperatureRange {
    /// Range around a mean surface temperature
    ///
    /// Thick air damps both the diurnal swing (longer days widen it) and the
    /// seasonal swing driven by axial tilt and eccentricity. Each bound is
    /// softly limited between T/√(day + 24) and T + 10√T.
    ///
    /// # Arguments
    /// * `surface_temp` - Mean surface temperature (K)
    /// * `surface_pressure` - Surface pressure
    /// * `day` - Length of one rotation
    /// * `axial_tilt` - Axial tilt in degrees
    /// * `eccentricity` - Orbital eccentricity
    pub fn calculate(
        surface_temp: f64,
        surface_pressure: Pressure,
        day: Time,
        axial_tilt: f64,
        eccentricity: f64,
    ) -> Self {
        let pressure_bars = surface_pressure.to_bars();
        let day_hours = day.to_hours();

        let pressmod = 1.0 / (1.0 + 20.0 * pressure_bars).sqrt();
        let ppmod = 1.0 / (10.0 + 5.0 * pressure_bars).sqrt();
        let tiltmod = (axial_tilt.to_radians().cos() * (1.0 + eccentricity).powi(2)).abs();
        let daymod = 1.0 / (200.0 / day_hours + 1.0);

        let high = (1.0 + daymod).powf(pressmod) * surface_temp;
        let mut low = (1.0 - daymod).powf(pressmod) * surface_temp;
        let summer_high = high + ((100.0 + high) * tiltmod).powf(ppmod.sqrt());
        let mut winter_low = low - ((150.0 + low) * tiltmod).powf(ppmod.sqrt());

        let max = surface_temp + surface_temp.sqrt() * 10.0;
        let min = surface_temp / (day_hours + 24.0).sqrt();

        low = low.max(min);
        winter_low = winter_low.max(0.0);

        Self {
            high: soft(high, max, min),
            low: soft(low, max, min),
            max: soft(summer_high, max, min),
            min: soft(winter_low, max, min),
        }
    }
}
