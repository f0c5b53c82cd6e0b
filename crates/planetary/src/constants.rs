//! Physical constants and empirical calibration values
//!
//! CGS units throughout unless the name says otherwise. The empirical values
//! (albedos, cloud and water coefficients) are the calibration set of the
//! Fogg/Burrows climate model that the thermal solver reproduces.
//!
//! # References
//! - Fogg (1985) - "Extra-Solar Planetary Systems: A Microcomputer Simulation"
//! - Burrows (2006) - StarGen

/// Gravitational constant (dyne cm² g⁻²)
pub const GRAV_CONSTANT: f64 = 6.672e-8;
/// Molar gas constant (erg mol⁻¹ K⁻¹ / 1000, paired with cm/s ÷ 100)
pub const MOLAR_GAS_CONST: f64 = 8314.41;
/// Empirical angular momentum transfer constant for spin-down
pub const J: f64 = 1.46e-19;
/// Tidal change in Earth's angular velocity (radians/s per year)
pub const CHANGE_IN_EARTH_ANG_VEL: f64 = -1.3e-15;
pub const CM_PER_KM: f64 = 1.0e5;

pub const EARTH_EXOSPHERE_TEMP: f64 = 1273.0;
pub const EARTH_EFFECTIVE_TEMP: f64 = 250.0;
/// Earth mean surface temperature, 14 °C
pub const EARTH_AVERAGE_KELVIN: f64 = 287.15;
pub const FREEZING_POINT_OF_WATER: f64 = 273.15;
/// Escape velocity must exceed this multiple of the RMS velocity to hold a gas
pub const GAS_RETENTION_THRESHOLD: f64 = 6.0;
/// Retention lifetimes beyond this are treated as unbounded (years)
pub const MAX_GAS_LIFETIME_YEARS: f64 = 2.0e10;

pub const ICE_ALBEDO: f64 = 0.7;
pub const CLOUD_ALBEDO: f64 = 0.52;
pub const GAS_GIANT_ALBEDO: f64 = 0.5;
pub const AIRLESS_ICE_ALBEDO: f64 = 0.5;
pub const EARTH_ALBEDO: f64 = 0.3;
pub const GREENHOUSE_TRIGGER_ALBEDO: f64 = 0.20;
pub const ROCKY_ALBEDO: f64 = 0.15;
pub const ROCKY_AIRLESS_ALBEDO: f64 = 0.07;
pub const WATER_ALBEDO: f64 = 0.04;

pub const CLOUD_COVERAGE_FACTOR: f64 = 1.839e-8;
/// Grams of water per square km of Earth's surface
pub const EARTH_WATER_MASS_PER_AREA: f64 = 3.83e15;
/// Exponential humidity coefficient, 0.0698 per kelvin (Fogg eq. 36)
pub const Q2_36: f64 = 0.0698;
pub const EARTH_CONVECTION_FACTOR: f64 = 0.43;

pub const WATER_VAPOR_WEIGHT: f64 = 18.0;
pub const MOL_NITROGEN_WEIGHT: f64 = 28.0;

/// Assumed water vapour partial pressure in the airway (mmHg)
pub const H2O_ASSUMED_PRESSURE_MMHG: f64 = 47.0;
/// Inspired oxygen band for breathable air (mmHg)
pub const MIN_O2_IPP_MMHG: f64 = 72.0;
pub const MAX_O2_IPP_MMHG: f64 = 400.0;
