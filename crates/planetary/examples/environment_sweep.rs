//! Sweep rocky planets across the inner system and print their environments
//!
//! Usage: cargo run -p planetary --example environment_sweep
//!
//! Output: CSV with one row per planet

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use units::{Length, Mass};

use planetary::math::{random_axial_tilt, random_eccentricity};
use planetary::planet::{Planet, PlanetSeed};
use planetary::{EnvironmentConfig, HostStar, OrbitalZone};

fn main() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let star = HostStar::solar();
    let config = EnvironmentConfig::default();

    println!(
        "mass_earth,sma_au,ecc,day_h,gravity,pressure_mb,temp_k,albedo,hydro,cloud,ice,passes,breathability"
    );

    let mut failures = 0;
    for mass_earth in [0.3, 0.6, 1.0, 1.5, 2.0, 3.0] {
        for step in 0..21 {
            let a = 0.5 + 0.1 * step as f64;
            let semi_major_axis = Length::from_au(a);
            let seed = PlanetSeed {
                semi_major_axis,
                eccentricity: random_eccentricity(&mut rng),
                axial_tilt: random_axial_tilt(&mut rng, a),
                mass: Mass::from_earth_masses(mass_earth),
                gas_mass: Mass::zero(),
                gas_giant: false,
                orbit_zone: OrbitalZone::for_orbit(star.luminosity, semi_major_axis).number(),
            };

            let planet = match Planet::generate(seed, &star, &config, &mut rng) {
                Ok(planet) => planet,
                Err(e) => {
                    eprintln!("skipping {mass_earth} M⊕ at {a:.1} AU: {e}");
                    failures += 1;
                    continue;
                }
            };
            let Some(env) = planet.terrestrial() else {
                continue;
            };

            println!(
                "{:.2},{:.2},{:.4},{:.2},{:.3},{:.1},{:.1},{:.3},{:.3},{:.3},{:.3},{},{}",
                mass_earth,
                a,
                planet.seed.eccentricity,
                planet.rotation.day.to_hours(),
                planet.surface_gravity,
                env.atmosphere.surface_pressure.to_millibars(),
                env.climate.surface_temperature,
                env.climate.albedo,
                env.climate.cover.hydrosphere,
                env.climate.cover.cloud_cover,
                env.climate.cover.ice_cover,
                env.outcome.passes,
                env.breathability,
            );
        }
    }

    eprintln!("Done ({failures} failures)");
}
