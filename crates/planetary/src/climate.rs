//! Thermal equilibrium of a terrestrial planet
//!
//! Surface temperature, albedo and surface cover depend on one another:
//! warmer oceans raise more cloud, cloud and ice brighten the planet, and
//! a brighter planet cools. The solver iterates this loop as a damped
//! fixed point, blending each pass one third new to two thirds old until
//! the temperature settles or the iteration cap is reached.
//!
//! Two one-shot events can fire inside a pass. A runaway greenhouse whose
//! summer maximum drops below the boiling point condenses its oceans back
//! out (deluge), and a rotating planet whose daytime high reaches the
//! boiling point loses its open water to the air (boil-off).
//!
//! # References
//! - Fogg (1985) - "Extra-Solar Planetary Systems: A Microcomputer Simulation"
//! - Burrows (2006) - StarGen surface temperature iteration

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use units::{Length, Mass, Velocity};

use crate::atmosphere::{Atmosphere, boiling_point, pressure, vol_inventory};
use crate::config::EnvironmentConfig;
use crate::constants::{EARTH_ALBEDO, FREEZING_POINT_OF_WATER, WATER_VAPOR_WEIGHT};
use crate::error::Result;
use crate::physical::Rotation;
use crate::surface::{SurfaceCover, cloud_fraction, hydro_fraction, ice_fraction};
use crate::temperature::{TemperatureRange, effective_temperature, surface_temperature};

/// Oceans freeze solid this far below the freezing point (K)
const FREEZE_MARGIN: f64 = 3.0;

/// Fixed planetary properties the thermal loop reads
#[derive(Debug, Clone, Copy)]
pub struct ClimateInputs {
    pub semi_major_axis: Length,
    pub eccentricity: f64,
    /// Axial tilt in degrees
    pub axial_tilt: f64,
    pub mass: Mass,
    pub radius: Length,
    /// Surface gravity in Earth gravities
    pub surface_gravity: f64,
    pub escape_velocity: Velocity,
    pub rotation: Rotation,
    pub orbit_zone: u8,
    /// Significant gas captured during accretion
    pub accreted_gas: bool,
    /// Star mass in solar masses
    pub star_mass: f64,
    pub ecosphere_radius: Length,
}

/// Converged (or last computed) climate of a planet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Climate {
    /// Mean surface temperature (K)
    pub surface_temperature: f64,
    pub range: TemperatureRange,
    pub cover: SurfaceCover,
    pub albedo: f64,
    /// Surface temperature above the effective radiating temperature (K)
    pub greenhouse_rise: f64,
}

/// How the thermal loop terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveOutcome {
    /// Damped passes run after the initial one
    pub passes: u32,
    /// Temperature change fell under the threshold before the cap
    pub converged: bool,
}

#[derive(Debug, Clone, Copy)]
struct ThermalState {
    temperature: f64,
    range: TemperatureRange,
    cover: SurfaceCover,
    albedo: f64,
}

/// One third new, two thirds old
fn damp(new: f64, old: f64) -> f64 {
    (new + 2.0 * old) / 3.0
}

struct ThermalSolver<'a> {
    inputs: &'a ClimateInputs,
    atmosphere: &'a mut Atmosphere,
}

impl ThermalSolver<'_> {
    fn temperature_for(&self, albedo: f64) -> f64 {
        surface_temperature(
            self.inputs.ecosphere_radius,
            self.inputs.semi_major_axis,
            albedo,
            self.atmosphere.min_molecular_weight,
            self.atmosphere.surface_pressure,
        )
    }

    fn range_for(&self, temperature: f64) -> TemperatureRange {
        TemperatureRange::calculate(
            temperature,
            self.atmosphere.surface_pressure,
            self.inputs.rotation.day,
            self.inputs.axial_tilt,
            self.inputs.eccentricity,
        )
    }

    /// Ends a runaway greenhouse once summers no longer boil the oceans
    fn condense_oceans(&mut self, max_temp: f64) -> Result<()> {
        let inputs = self.inputs;
        let atmosphere = &mut *self.atmosphere;
        let condensing = atmosphere.greenhouse && atmosphere.boiling_point.is_some_and(|bp| max_temp < bp);
        if !condensing {
            return Ok(());
        }

        atmosphere.greenhouse = false;
        atmosphere.volatile_inventory = vol_inventory(
            inputs.mass,
            inputs.escape_velocity,
            atmosphere.rms_velocity,
            inputs.star_mass,
            inputs.orbit_zone,
            false,
            inputs.accreted_gas,
        )?;
        atmosphere.surface_pressure =
            pressure(atmosphere.volatile_inventory, inputs.radius, inputs.surface_gravity);
        atmosphere.boiling_point = boiling_point(atmosphere.surface_pressure).ok();

        debug!(
            max_temp,
            pressure_mb = atmosphere.surface_pressure.to_millibars(),
            "deluge: oceans condense and the runaway greenhouse ends"
        );
        Ok(())
    }

    fn pass(&mut self, previous: Option<&ThermalState>) -> Result<ThermalState> {
        let (temperature, range) = match previous {
            Some(state) => (state.temperature, state.range),
            None => {
                let initial = self.temperature_for(EARTH_ALBEDO);
                (initial, self.range_for(initial))
            }
        };

        self.condense_oceans(range.max)?;

        let radius = self.inputs.radius;
        let atmosphere = &*self.atmosphere;
        let hydrosphere = hydro_fraction(atmosphere.volatile_inventory, radius);
        let mut cover = SurfaceCover {
            hydrosphere,
            cloud_cover: cloud_fraction(temperature, atmosphere.min_molecular_weight, radius, hydrosphere),
            ice_cover: ice_fraction(hydrosphere, temperature),
        };

        let airless = atmosphere.surface_pressure.is_vacuum();
        if atmosphere.greenhouse && !airless {
            cover.cloud_cover = 1.0;
        }

        let rotation = self.inputs.rotation;
        let boiled_off = previous.is_some()
            && !rotation.tidally_locked
            && !rotation.resonant
            && atmosphere.boiling_point.is_some_and(|bp| range.high >= bp);
        if boiled_off {
            cover.hydrosphere = 0.0;
            cover.cloud_cover = if atmosphere.min_molecular_weight > WATER_VAPOR_WEIGHT {
                0.0
            } else {
                1.0
            };
            debug!(high = range.high, "boil-off: oceans flash to vapour");
        }

        if temperature < FREEZING_POINT_OF_WATER - FREEZE_MARGIN {
            cover.hydrosphere = 0.0;
        }

        let mut albedo = cover.albedo(airless);
        let mut temperature = self.temperature_for(albedo);

        if let Some(old) = previous {
            if !boiled_off {
                cover.hydrosphere = damp(cover.hydrosphere, old.cover.hydrosphere);
            }
            cover.cloud_cover = damp(cover.cloud_cover, old.cover.cloud_cover);
            cover.ice_cover = damp(cover.ice_cover, old.cover.ice_cover);
            albedo = damp(albedo, old.albedo);
            temperature = damp(temperature, old.temperature);
        }

        Ok(ThermalState {
            temperature,
            range: self.range_for(temperature),
            cover,
            albedo,
        })
    }
}

/// Iterates the planet's climate to equilibrium
///
/// Mutates `atmosphere` when a deluge ends a runaway greenhouse. Hitting
/// `max_iterations` is not an error; the last state is accepted and the
/// outcome reports `converged: false`.
///
/// # Errors
/// `InvalidZone` from re-deriving the inventory during a deluge.
pub fn solve(
    inputs: &ClimateInputs,
    atmosphere: &mut Atmosphere,
    config: &EnvironmentConfig,
) -> Result<(Climate, SolveOutcome)> {
    let mut solver = ThermalSolver { inputs, atmosphere };
    let mut state = solver.pass(None)?;
    let mut outcome = SolveOutcome {
        passes: 0,
        converged: false,
    };

    while outcome.passes < config.max_iterations {
        let next = solver.pass(Some(&state))?;
        outcome.passes += 1;

        let delta = (next.temperature - state.temperature).abs();
        trace!(
            pass = outcome.passes,
            temperature = next.temperature,
            albedo = next.albedo,
            delta,
            "thermal pass"
        );
        state = next;

        if delta < config.convergence_threshold {
            outcome.converged = true;
            break;
        }
    }

    if !outcome.converged {
        debug!(
            passes = outcome.passes,
            temperature = state.temperature,
            "thermal loop stopped at its iteration cap"
        );
    }

    let effective = effective_temperature(inputs.ecosphere_radius, inputs.semi_major_axis, state.albedo);
    let climate = Climate {
        surface_temperature: state.temperature,
        range: state.range,
        cover: state.cover,
        albedo: state.albedo,
        greenhouse_rise: state.temperature - effective,
    };
    Ok((climate, outcome))
}
