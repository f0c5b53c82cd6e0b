//! Planet records and the environment derivation pipeline
//!
//! A [`PlanetSeed`] carries what the accretion stage decided (orbit, mass,
//! gas-giant flag, zone). [`Planet::generate`] runs it forward through
//! bulk properties, rotation, atmospheric retention, the thermal
//! equilibrium loop and breathability, producing a finished [`Planet`].

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use units::{Acceleration, Density, Length, Mass, Time, Velocity};

use crate::atmosphere::{
    Atmosphere, boiling_point, exospheric_temperature, greenhouse_trigger, min_molecular_weight,
    pressure, rms_velocity, vol_inventory,
};
use crate::breathability::{Breathability, classify};
use crate::climate::{self, Climate, ClimateInputs, SolveOutcome};
use crate::config::EnvironmentConfig;
use crate::constants::{FREEZING_POINT_OF_WATER, GAS_GIANT_ALBEDO, MOL_NITROGEN_WEIGHT};
use crate::error::{EnvironmentError, Result};
use crate::gases::{GasEnvironment, derive_gases};
use crate::habitability::Habitability;
use crate::math::about;
use crate::orbit::{orbital_period, resolve_zone};
use crate::physical::{
    Rotation, SpinInputs, acceleration, day_length, empirical_density, escape_velocity, gravity,
    kothari_radius, volume_density, volume_radius,
};
use crate::star::HostStar;
use crate::temperature::estimated_temperature;

/// Captured gas above this fraction of planet mass thickens the atmosphere
const ACCRETED_GAS_RATIO: f64 = 1.0e-6;

/// Orbital and bulk parameters handed over by the accretion stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetSeed {
    pub semi_major_axis: Length,
    pub eccentricity: f64,
    /// Axial tilt in degrees
    pub axial_tilt: f64,
    pub mass: Mass,
    /// Portion of the mass captured as gas
    pub gas_mass: Mass,
    pub gas_giant: bool,
    /// Orbital zone, 1 to 3
    pub orbit_zone: u8,
}

impl PlanetSeed {
    /// Checks the preconditions every formula downstream relies on
    ///
    /// The orbit zone is checked separately when it is first used.
    pub fn validate(&self) -> Result<()> {
        let a = self.semi_major_axis.to_au();
        if a.is_nan() || a <= 0.0 {
            return Err(EnvironmentError::NonPositiveOrbit {
                semi_major_axis_au: a,
            });
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(EnvironmentError::InvalidEccentricity {
                eccentricity: self.eccentricity,
            });
        }
        let mass = self.mass.to_solar_masses();
        if mass.is_nan() || mass <= 0.0 {
            return Err(EnvironmentError::NonPositiveMass { mass });
        }
        Ok(())
    }

    fn has_accreted_gas(&self) -> bool {
        self.gas_mass / self.mass > ACCRETED_GAS_RATIO
    }
}

/// Environment of a solid planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerrestrialEnvironment {
    pub atmosphere: Atmosphere,
    pub climate: Climate,
    pub outcome: SolveOutcome,
    pub breathability: Breathability,
    pub habitability: Habitability,
}

/// Environment of a gas giant; there is no surface to model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasGiantEnvironment {
    pub exospheric_temperature: f64,
    pub min_molecular_weight: f64,
    pub albedo: f64,
    /// Estimated equilibrium temperature at the cloud tops (K)
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Environment {
    Terrestrial(Box<TerrestrialEnvironment>),
    GasGiant(GasGiantEnvironment),
}

/// A planet with every environmental property derived
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub seed: PlanetSeed,
    pub radius: Length,
    pub density: Density,
    pub orbital_period: Time,
    pub rotation: Rotation,
    pub escape_velocity: Velocity,
    pub surface_acceleration: Acceleration,
    /// Surface gravity in Earth gravities
    pub surface_gravity: f64,
    pub environment: Environment,
}

impl Planet {
    /// Derives the full environment of one planet
    ///
    /// The only random draw is a gas giant's albedo; terrestrial planets are
    /// fully determined by their seed and star.
    ///
    /// # Errors
    /// Fails for this planet only, on an invalid zone or a seed that breaks
    /// [`PlanetSeed::validate`].
    ///
    /// # Examples
    /// ```
    /// use planetary::config::EnvironmentConfig;
    /// use planetary::planet::{Planet, earth_seed};
    /// use planetary::star::HostStar;
    ///
    /// let mut rng = rand::rng();
    /// let earth = Planet::generate(earth_seed(), &HostStar::solar(), &EnvironmentConfig::default(), &mut rng)
    ///     .unwrap();
    /// assert!((earth.radius.to_km() - 6378.0).abs() < 64.0);
    /// ```
    pub fn generate(
        seed: PlanetSeed,
        star: &HostStar,
        config: &EnvironmentConfig,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        seed.validate()?;
        let zone = resolve_zone(seed.orbit_zone)?;

        let age = Time::from_years(star.retention_horizon(config.default_gas_lifetime_years));
        let star_mass = Mass::from_solar_masses(star.mass);
        let orbital_period = orbital_period(seed.semi_major_axis, seed.mass, star_mass);

        let (radius, density) = if seed.gas_giant {
            let density =
                empirical_density(seed.mass, seed.semi_major_axis, star.ecosphere_radius, true);
            (volume_radius(seed.mass, density), density)
        } else {
            let radius = kothari_radius(seed.mass, false, zone);
            (radius, volume_density(seed.mass, radius))
        };

        let rotation = day_length(&SpinInputs {
            mass: seed.mass,
            radius,
            density,
            orbital_period,
            semi_major_axis: seed.semi_major_axis,
            eccentricity: seed.eccentricity,
            gas_giant: seed.gas_giant,
            star_mass: star.mass,
            star_age: age,
        });

        let escape_velocity = escape_velocity(seed.mass, radius);
        let surface_acceleration = acceleration(seed.mass, radius);
        let surface_gravity = gravity(surface_acceleration);

        debug!(
            %zone,
            radius_km = radius.to_km(),
            density = density.to_grams_per_cm3(),
            day_hours = rotation.day.to_hours(),
            tidally_locked = rotation.tidally_locked,
            surface_gravity,
            "physical profile"
        );

        let exospheric_temp = exospheric_temperature(seed.semi_major_axis, star.ecosphere_radius);
        let min_weight = min_molecular_weight(
            seed.mass,
            radius,
            exospheric_temp,
            surface_gravity,
            age.to_years(),
        );

        let environment = if seed.gas_giant {
            let albedo = about(rng, GAS_GIANT_ALBEDO, 0.1);
            Environment::GasGiant(GasGiantEnvironment {
                exospheric_temperature: exospheric_temp,
                min_molecular_weight: min_weight,
                albedo,
                temperature: estimated_temperature(star.ecosphere_radius, seed.semi_major_axis, albedo),
            })
        } else {
            let inputs = ClimateInputs {
                semi_major_axis: seed.semi_major_axis,
                eccentricity: seed.eccentricity,
                axial_tilt: seed.axial_tilt,
                mass: seed.mass,
                radius,
                surface_gravity,
                escape_velocity,
                rotation,
                orbit_zone: seed.orbit_zone,
                accreted_gas: seed.has_accreted_gas(),
                star_mass: star.mass,
                ecosphere_radius: star.ecosphere_radius,
            };
            let atmosphere = initial_atmosphere(&inputs, exospheric_temp, min_weight)?;
            let terrestrial = terrestrial_environment(&inputs, atmosphere, &seed, age, config)?;
            Environment::Terrestrial(Box::new(terrestrial))
        };

        Ok(Self {
            seed,
            radius,
            density,
            orbital_period,
            rotation,
            escape_velocity,
            surface_acceleration,
            surface_gravity,
            environment,
        })
    }

    pub fn is_gas_giant(&self) -> bool {
        matches!(self.environment, Environment::GasGiant(_))
    }

    /// Solid-surface environment, absent for gas giants
    pub fn terrestrial(&self) -> Option<&TerrestrialEnvironment> {
        match &self.environment {
            Environment::Terrestrial(env) => Some(env.as_ref()),
            Environment::GasGiant(_) => None,
        }
    }

    pub fn breathability(&self) -> Breathability {
        self.terrestrial()
            .map_or(Breathability::None, |env| env.breathability)
    }

    /// Mean surface (or cloud-top) temperature in Kelvin
    pub fn temperature(&self) -> f64 {
        match &self.environment {
            Environment::Terrestrial(env) => env.climate.surface_temperature,
            Environment::GasGiant(env) => env.temperature,
        }
    }
}

fn initial_atmosphere(
    inputs: &ClimateInputs,
    exospheric_temp: f64,
    min_weight: f64,
) -> Result<Atmosphere> {
    let rms = rms_velocity(MOL_NITROGEN_WEIGHT, exospheric_temp);
    let greenhouse = greenhouse_trigger(inputs.ecosphere_radius, inputs.semi_major_axis);
    let inventory = vol_inventory(
        inputs.mass,
        inputs.escape_velocity,
        rms,
        inputs.star_mass,
        inputs.orbit_zone,
        greenhouse,
        inputs.accreted_gas,
    )?;
    let surface_pressure = pressure(inventory, inputs.radius, inputs.surface_gravity);

    debug!(
        min_molecular_weight = min_weight,
        inventory,
        pressure_mb = surface_pressure.to_millibars(),
        greenhouse,
        "atmosphere"
    );

    Ok(Atmosphere {
        exospheric_temperature: exospheric_temp,
        rms_velocity: rms,
        min_molecular_weight: min_weight,
        volatile_inventory: inventory,
        surface_pressure,
        boiling_point: boiling_point(surface_pressure).ok(),
        greenhouse,
        gases: Vec::new(),
    })
}

fn terrestrial_environment(
    inputs: &ClimateInputs,
    mut atmosphere: Atmosphere,
    seed: &PlanetSeed,
    age: Time,
    config: &EnvironmentConfig,
) -> Result<TerrestrialEnvironment> {
    let (climate, outcome) = climate::solve(inputs, &mut atmosphere, config)?;

    debug!(
        surface_temperature = climate.surface_temperature,
        albedo = climate.albedo,
        hydrosphere = climate.cover.hydrosphere,
        cloud_cover = climate.cover.cloud_cover,
        ice_cover = climate.cover.ice_cover,
        passes = outcome.passes,
        converged = outcome.converged,
        "climate"
    );

    let liquid_window = climate.range.max >= FREEZING_POINT_OF_WATER
        && atmosphere
            .boiling_point
            .is_some_and(|bp| climate.range.min <= bp);
    if config.compute_gases && liquid_window {
        atmosphere.gases = derive_gases(&GasEnvironment {
            surface_pressure: atmosphere.surface_pressure,
            min_molecular_weight: atmosphere.min_molecular_weight,
            exospheric_temperature: atmosphere.exospheric_temperature,
            escape_velocity: inputs.escape_velocity,
            surface_temperature: climate.surface_temperature,
            low_temperature: climate.range.low,
            age_years: age.to_years(),
            planet_mass: seed.mass,
            gas_mass: seed.gas_mass,
        });
    }

    let breathability = classify(&atmosphere.gases, atmosphere.surface_pressure);
    let habitability = Habitability::assess(
        &inputs.rotation,
        inputs.surface_gravity,
        &atmosphere,
        &climate,
        breathability,
    );
    debug!(
        %breathability,
        gases = atmosphere.gases.len(),
        habitable = habitability.habitable,
        earthlike = habitability.earthlike,
        "breathability"
    );

    Ok(TerrestrialEnvironment {
        atmosphere,
        climate,
        outcome,
        breathability,
        habitability,
    })
}

/// Derives every planet of a system independently
///
/// A planet that cannot be modelled yields its own `Err` and does not
/// stop the rest.
pub fn generate_system(
    seeds: Vec<PlanetSeed>,
    star: &HostStar,
    config: &EnvironmentConfig,
    rng: &mut impl Rng,
) -> Vec<Result<Planet>> {
    seeds
        .into_iter()
        .map(|seed| Planet::generate(seed, star, config, rng))
        .collect()
}

// =============================================================================
// Seeds for Solar System analogs
// =============================================================================

/// Earth at 1 AU around the Sun
pub fn earth_seed() -> PlanetSeed {
    PlanetSeed {
        semi_major_axis: Length::from_au(1.0),
        eccentricity: 0.017,
        axial_tilt: 23.4,
        mass: Mass::from_earth_masses(1.0),
        gas_mass: Mass::zero(),
        gas_giant: false,
        orbit_zone: 1,
    }
}

pub fn venus_seed() -> PlanetSeed {
    PlanetSeed {
        semi_major_axis: Length::from_au(0.723),
        eccentricity: 0.007,
        axial_tilt: 3.0,
        mass: Mass::from_earth_masses(0.815),
        gas_mass: Mass::zero(),
        gas_giant: false,
        orbit_zone: 1,
    }
}

pub fn mars_seed() -> PlanetSeed {
    PlanetSeed {
        semi_major_axis: Length::from_au(1.52),
        eccentricity: 0.093,
        axial_tilt: 25.0,
        mass: Mass::from_earth_masses(0.107),
        gas_mass: Mass::zero(),
        gas_giant: false,
        orbit_zone: 1,
    }
}

/// Jupiter, almost entirely captured gas
pub fn jupiter_seed() -> PlanetSeed {
    PlanetSeed {
        semi_major_axis: Length::from_au(5.2),
        eccentricity: 0.049,
        axial_tilt: 3.1,
        mass: Mass::from_earth_masses(317.8),
        gas_mass: Mass::from_earth_masses(300.0),
        gas_giant: true,
        orbit_zone: 2,
    }
}
