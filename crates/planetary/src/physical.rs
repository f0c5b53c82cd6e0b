//! Bulk physical properties: radius, density, surface forces and rotation
//!
//! Radius comes either from Kothari's degenerate-matter equation of state
//! or, for gas giants, from an empirical density; the remaining quantity of
//! the (mass, radius, density) triple is always derived from the other two.
//!
//! # References
//! - Kothari (1936) - "The Internal Constitution of the Planets"
//! - Fogg (1985) - "Extra-Solar Planetary Systems: A Microcomputer Simulation"
//! - Goldreich & Soter (1966) - "Q in the Solar System"

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use units::{
    Acceleration, Density, EARTH_DENSITY, EARTH_MASS_G, EARTH_RADIUS_KM, Length, Mass,
    SOLAR_MASS_G, Time, Velocity,
};

use crate::constants::{CHANGE_IN_EARTH_ANG_VEL, CM_PER_KM, GRAV_CONSTANT, J};
use crate::math::{Magnitude, pow1_3, pow1_4};
use crate::orbit::OrbitalZone;

const A1_20: f64 = 6.485e12;
const A2_20: f64 = 4.0032e-8;
const BETA_20: f64 = 5.71e12;
/// Calibration that lands an Earth analogue on 6378 km
const JIMS_FUDGE: f64 = 1.004;

/// Eccentricity above which a locked body settles into spin-orbit resonance
const RESONANCE_ECCENTRICITY: f64 = 0.1;

/// Effective (atomic weight, atomic number) of the bulk material
fn atomic_constants(zone: OrbitalZone, gas_giant: bool) -> (f64, f64) {
    match (zone, gas_giant) {
        (OrbitalZone::Inner, true) => (9.5, 4.5),
        (OrbitalZone::Inner, false) => (15.0, 8.0),
        (OrbitalZone::Middle, true) => (2.47, 2.0),
        (OrbitalZone::Middle, false) => (10.0, 5.0),
        (OrbitalZone::Outer, true) => (7.0, 4.0),
        (OrbitalZone::Outer, false) => (10.0, 5.0),
    }
}

/// Equatorial radius from Kothari's equation of state
///
/// # Arguments
/// * `mass` - Planet mass
/// * `gas_giant` - Selects the light-element composition row
/// * `zone` - Orbital zone selecting the composition column
///
/// # Examples
/// ```
/// use planetary::orbit::OrbitalZone;
/// use planetary::physical::kothari_radius;
/// use units::Mass;
///
/// let r = kothari_radius(Mass::from_earth_masses(1.0), false, OrbitalZone::Inner);
/// assert!((r.to_km() - 6378.0).abs() < 64.0);
/// ```
pub fn kothari_radius(mass: Mass, gas_giant: bool, zone: OrbitalZone) -> Length {
    let (atomic_weight, atomic_num) = atomic_constants(zone, gas_giant);
    let m = mass.to_solar_masses();

    let numerator = 2.0 * BETA_20 * pow1_3(SOLAR_MASS_G);
    let base = numerator / (A1_20 * pow1_3(atomic_weight * atomic_num));

    let correction = A2_20 * atomic_weight.powf(4.0 / 3.0) * SOLAR_MASS_G.powf(2.0 / 3.0) * m.powf(2.0 / 3.0)
        / (A1_20 * atomic_num.powi(2));

    let radius_cm = base / (1.0 + correction) * pow1_3(m);
    Length::from_km(radius_cm / CM_PER_KM / JIMS_FUDGE)
}

/// Mean density that reproduces the Solar System's trend with mass and distance
///
/// Scales as the eighth root of mass (Earth masses) and the fourth root of
/// the ecosphere-to-orbit ratio, times 1.2 g/cc for giants or 5.5 otherwise.
pub fn empirical_density(
    mass: Mass,
    semi_major_axis: Length,
    ecosphere_radius: Length,
    gas_giant: bool,
) -> Density {
    let temp = mass.to_earth_masses().powf(1.0 / 8.0) * pow1_4(ecosphere_radius / semi_major_axis);
    let factor = if gas_giant { 1.2 } else { 5.5 };
    Density::from_grams_per_cm3(temp * factor)
}

/// Radius of a uniform sphere of the given mass and density
pub fn volume_radius(mass: Mass, density: Density) -> Length {
    let volume = mass.to_grams() / density.to_grams_per_cm3();
    let radius_cm = pow1_3(3.0 * volume / (4.0 * PI));
    Length::from_cm(radius_cm)
}

/// Mean density of a uniform sphere of the given mass and radius
pub fn volume_density(mass: Mass, radius: Length) -> Density {
    let volume = 4.0 * PI * radius.to_cm().powi(3) / 3.0;
    Density::from_grams_per_cm3(mass.to_grams() / volume)
}

pub fn escape_velocity(mass: Mass, radius: Length) -> Velocity {
    Velocity::from_cm_per_sec((2.0 * GRAV_CONSTANT * mass.to_grams() / radius.to_cm()).sqrt())
}

pub fn acceleration(mass: Mass, radius: Length) -> Acceleration {
    Acceleration::from_cm_per_sec2(GRAV_CONSTANT * mass.to_grams() / radius.to_cm().powi(2))
}

/// Surface gravity in Earth gravities
pub fn gravity(acceleration: Acceleration) -> f64 {
    acceleration.to_earth_gravities()
}

/// Spin state after tidal braking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rotation {
    /// Length of one rotation
    pub day: Time,
    /// Spin slowed to (or past) the orbital period
    pub tidally_locked: bool,
    /// Locked into a spin-orbit resonance by an eccentric orbit
    pub resonant: bool,
}

/// Inputs to the tidal rotation model
#[derive(Debug, Clone, Copy)]
pub struct SpinInputs {
    pub mass: Mass,
    pub radius: Length,
    pub density: Density,
    pub orbital_period: Time,
    pub semi_major_axis: Length,
    pub eccentricity: f64,
    pub gas_giant: bool,
    /// Star mass in solar masses
    pub star_mass: f64,
    pub star_age: Time,
}

/// Day length from primordial spin minus secular tidal braking
///
/// Base angular velocity follows from an empirical angular momentum
/// constant and a shape factor (k² of 0.24 for giants, 0.33 otherwise).
/// Braking scales with density, radius, inverse mass, star mass squared,
/// a⁻⁶ and the star's age. A body whose spin would stop or reverse, or
/// whose day reaches its year, is tidally locked; an eccentric lock
/// settles into resonance with the day shortened by (1-e)/(1+e).
///
/// The model under-spins terrestrial planets: an Earth analogue around the
/// Sun comes out near 16 hours rather than 24. Treat the day as an
/// order-of-magnitude figure, not a calibrated one.
pub fn day_length(inputs: &SpinInputs) -> Rotation {
    let mass_g = inputs.mass.to_grams();
    let radius_cm = inputs.radius.to_cm();
    let year_hours = inputs.orbital_period.to_hours();

    let k2 = if inputs.gas_giant { 0.24 } else { 0.33 };
    let base_angular_velocity = (2.0 * J * mass_g / (k2 * radius_cm.powi(2))).sqrt();

    let change_in_angular_velocity = CHANGE_IN_EARTH_ANG_VEL
        * (inputs.density.to_grams_per_cm3() / EARTH_DENSITY)
        * (inputs.radius.to_km() / EARTH_RADIUS_KM)
        * (EARTH_MASS_G / mass_g)
        * inputs.star_mass.powi(2)
        * (1.0 / inputs.semi_major_axis.to_au().powi(6));
    let angular_velocity = base_angular_velocity + change_in_angular_velocity * inputs.star_age.to_years();

    let spin = if angular_velocity <= 0.0 {
        Magnitude::Infinite
    } else {
        Magnitude::Finite(2.0 * PI / (3600.0 * angular_velocity))
    };

    match spin {
        Magnitude::Finite(hours) if hours < year_hours => Rotation {
            day: Time::from_hours(hours),
            tidally_locked: false,
            resonant: false,
        },
        _ if inputs.eccentricity > RESONANCE_ECCENTRICITY => {
            let factor = (1.0 - inputs.eccentricity) / (1.0 + inputs.eccentricity);
            Rotation {
                day: Time::from_hours(factor * year_hours),
                tidally_locked: true,
                resonant: true,
            }
        }
        _ => Rotation {
            day: inputs.orbital_period,
            tidally_locked: true,
            resonant: false,
        },
    }
}
