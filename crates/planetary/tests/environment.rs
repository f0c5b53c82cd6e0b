//! Integration tests for the full environment pipeline.
//!
//! These tests drive whole planets through every model and check that the
//! results stay physically sane across a spread of orbits and masses.

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use units::{Length, Mass};

use planetary::math::{random_axial_tilt, random_eccentricity, random_number};
use planetary::planet::{Planet, PlanetSeed, earth_seed, generate_system, jupiter_seed};
use planetary::{Breathability, EnvironmentConfig, HostStar, OrbitalZone};

fn random_seed(rng: &mut ChaChaRng, star: &HostStar) -> PlanetSeed {
    let a = random_number(rng, 0.5, 2.5);
    let semi_major_axis = Length::from_au(a);
    PlanetSeed {
        semi_major_axis,
        eccentricity: random_eccentricity(rng),
        axial_tilt: random_axial_tilt(rng, a),
        mass: Mass::from_earth_masses(random_number(rng, 0.3, 3.0)),
        gas_mass: Mass::zero(),
        gas_giant: false,
        orbit_zone: OrbitalZone::for_orbit(star.luminosity, semi_major_axis).number(),
    }
}

fn assert_sane(planet: &Planet) {
    assert!(planet.radius.to_km() > 0.0);
    assert!(planet.surface_gravity.is_finite() && planet.surface_gravity > 0.0);
    assert!(planet.rotation.day.to_hours() > 0.0);

    let env = planet.terrestrial().expect("rocky seed");
    let cover = env.climate.cover;
    for fraction in [cover.hydrosphere, cover.cloud_cover, cover.ice_cover, env.climate.albedo] {
        assert!((0.0..=1.0).contains(&fraction), "fraction out of range: {:?}", env.climate);
    }

    let temperature = env.climate.surface_temperature;
    assert!(temperature.is_finite() && temperature > 0.0);
    let range = env.climate.range;
    assert!(range.min <= range.low && range.low <= range.high && range.high <= range.max);

    assert!(env.outcome.passes <= EnvironmentConfig::default().max_iterations);
    assert!(env.atmosphere.surface_pressure.to_millibars() >= 0.0);

    let total: f64 = env.atmosphere.gases.iter().map(|g| g.partial_pressure.to_millibars()).sum();
    if !env.atmosphere.gases.is_empty() {
        let surface = env.atmosphere.surface_pressure.to_millibars();
        assert!((total - surface).abs() <= surface * 1e-6 + 1e-9);
    }
}

#[test]
fn solar_system_replica() {
    let star = HostStar::solar();
    let config = EnvironmentConfig::default();
    let mut rng = ChaChaRng::seed_from_u64(42);

    let planets = generate_system(vec![earth_seed(), jupiter_seed()], &star, &config, &mut rng);
    let earth = planets[0].as_ref().unwrap();
    let jupiter = planets[1].as_ref().unwrap();

    assert_sane(earth);
    assert_eq!(earth.breathability(), Breathability::Breathable);
    assert!(jupiter.is_gas_giant());
    assert!(jupiter.radius > earth.radius);
    assert!(jupiter.temperature() < earth.temperature());

    println!("\n=== Earth ===");
    println!("Radius: {:.0} km", earth.radius.to_km());
    println!("Day: {:.2} h", earth.rotation.day.to_hours());
    println!("Temperature: {:.2} K", earth.temperature());
    println!("\n=== Jupiter ===");
    println!("Radius: {:.0} km", jupiter.radius.to_km());
    println!("Temperature: {:.2} K", jupiter.temperature());
}

#[test]
fn random_rocky_planets_stay_physical() {
    let star = HostStar::solar();
    let config = EnvironmentConfig::default();
    let mut rng = ChaChaRng::seed_from_u64(2024);

    let mut breathable = 0;
    for _ in 0..200 {
        let seed = random_seed(&mut rng, &star);
        let planet = Planet::generate(seed.clone(), &star, &config, &mut rng)
            .unwrap_or_else(|e| panic!("{:?} failed: {}", seed, e));
        assert_sane(&planet);
        if planet.breathability() == Breathability::Breathable {
            breathable += 1;
        }
    }
    println!("Breathable worlds: {breathable} of 200");
}

#[test]
fn dimmer_star_shifts_the_habitable_orbit() {
    let star = HostStar::from_mass(0.8, None).unwrap();
    let config = EnvironmentConfig::default();
    let mut rng = ChaChaRng::seed_from_u64(5);

    let at_one_au = Planet::generate(earth_seed(), &star, &config, &mut rng).unwrap();
    let inward = PlanetSeed {
        semi_major_axis: star.ecosphere_radius,
        ..earth_seed()
    };
    let at_ecosphere = Planet::generate(inward, &star, &config, &mut rng).unwrap();

    assert!(at_one_au.temperature() < at_ecosphere.temperature());
    assert_sane(&at_ecosphere);
}
