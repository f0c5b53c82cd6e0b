use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use units::{Length, Mass};

use crate::breathability::Breathability;
use crate::config::EnvironmentConfig;
use crate::error::EnvironmentError;
use crate::planet::{
    Environment, Planet, PlanetSeed, earth_seed, generate_system, jupiter_seed, mars_seed,
    venus_seed,
};
use crate::star::HostStar;

fn generate(seed: PlanetSeed) -> crate::Result<Planet> {
    let mut rng = ChaChaRng::seed_from_u64(42);
    Planet::generate(seed, &HostStar::solar(), &EnvironmentConfig::default(), &mut rng)
}

// ========== Solar System analogs ==========

#[test]
fn test_earth() {
    let earth = generate(earth_seed()).unwrap();
    assert!(!earth.is_gas_giant());

    let radius = earth.radius.to_km();
    assert!((radius - 6378.0).abs() < 64.0, "Earth radius: {} km", radius);
    let density = earth.density.to_grams_per_cm3();
    assert!(density > 5.4 && density < 5.6, "Earth density: {}", density);
    assert!((earth.surface_gravity - 1.0).abs() < 0.01);

    let day = earth.rotation.day.to_hours();
    assert!(day > 12.0 && day < 36.0, "Earth day: {} h", day);
    assert!(!earth.rotation.tidally_locked);

    let env = earth.terrestrial().unwrap();
    assert!((env.climate.surface_temperature - 288.0).abs() < 5.0);
    assert!((env.climate.albedo - 0.3).abs() < 0.03);
    assert!(env.outcome.converged);
    assert_eq!(env.breathability, Breathability::Breathable);
    assert!(env.habitability.habitable);
    assert!(env.habitability.earthlike);
}

#[test]
fn test_earth_atmosphere() {
    let earth = generate(earth_seed()).unwrap();
    let atmosphere = &earth.terrestrial().unwrap().atmosphere;

    let pressure = atmosphere.surface_pressure.to_atmospheres();
    assert!(pressure > 0.9 && pressure < 1.1, "Earth pressure: {} atm", pressure);
    assert!(!atmosphere.greenhouse);
    let boiling = atmosphere.boiling_point.unwrap();
    assert!((boiling - 373.0).abs() < 2.0);

    let leading: Vec<&str> = atmosphere
        .gases
        .iter()
        .take(2)
        .map(|g| g.species.properties().symbol)
        .collect();
    assert_eq!(leading, ["N", "O"]);
}

#[test]
fn test_venus_runaway_greenhouse() {
    let venus = generate(venus_seed()).unwrap();
    let env = venus.terrestrial().unwrap();
    assert!(env.atmosphere.greenhouse);
    assert!(env.atmosphere.surface_pressure.to_atmospheres() > 50.0);
    assert!(venus.temperature() > 600.0);
    assert_eq!(env.climate.cover.cloud_cover, 1.0);
    assert_ne!(env.breathability, Breathability::Breathable);
    assert!(!env.habitability.habitable);
}

#[test]
fn test_mars_is_cold_and_thin() {
    let mars = generate(mars_seed()).unwrap();
    let env = mars.terrestrial().unwrap();
    assert!(mars.temperature() < 250.0);
    assert!(env.atmosphere.surface_pressure.to_millibars() < 100.0);
    assert!(mars.surface_gravity < 0.6);
    assert!(!env.habitability.habitable);
}

#[test]
fn test_jupiter() {
    let jupiter = generate(jupiter_seed()).unwrap();
    assert!(jupiter.is_gas_giant());
    assert!(jupiter.terrestrial().is_none());
    assert_eq!(jupiter.breathability(), Breathability::None);

    let radius = jupiter.radius.to_km();
    assert!(radius > 50_000.0 && radius < 80_000.0, "Jupiter radius: {} km", radius);
    let temperature = jupiter.temperature();
    assert!(temperature > 100.0 && temperature < 130.0, "Jupiter temperature: {}", temperature);
    assert!(!jupiter.rotation.tidally_locked);

    match &jupiter.environment {
        Environment::GasGiant(env) => assert!(env.albedo >= 0.45 && env.albedo <= 0.55),
        Environment::Terrestrial(_) => panic!("Jupiter modelled as terrestrial"),
    }
}

#[test]
fn test_gas_giant_is_deterministic_per_seed() {
    let a = generate(jupiter_seed()).unwrap();
    let b = generate(jupiter_seed()).unwrap();
    assert_eq!(a, b);
}

// ========== Rotation ==========

#[test]
fn test_close_eccentric_planet_is_resonant() {
    let seed = PlanetSeed {
        semi_major_axis: Length::from_au(0.4),
        eccentricity: 0.2,
        axial_tilt: 0.0,
        mass: Mass::from_earth_masses(0.05),
        ..earth_seed()
    };
    let planet = generate(seed).unwrap();
    assert!(planet.rotation.tidally_locked);
    assert!(planet.rotation.resonant);
    assert!(planet.rotation.day < planet.orbital_period);
    assert!(!planet.terrestrial().unwrap().habitability.habitable);
}

// ========== Configuration ==========

#[test]
fn test_gases_disabled() {
    let config = EnvironmentConfig {
        compute_gases: false,
        ..Default::default()
    };
    let mut rng = ChaChaRng::seed_from_u64(7);
    let earth = Planet::generate(earth_seed(), &HostStar::solar(), &config, &mut rng).unwrap();
    let env = earth.terrestrial().unwrap();
    assert!(env.atmosphere.gases.is_empty());
    assert_eq!(env.breathability, Breathability::None);
    assert!(!env.habitability.habitable);
}

#[test]
fn test_unknown_star_age_uses_default_lifetime() {
    let star = HostStar::new(1.0, 1.0, None).unwrap();
    let mut rng = ChaChaRng::seed_from_u64(7);
    let earth = Planet::generate(earth_seed(), &star, &EnvironmentConfig::default(), &mut rng).unwrap();
    let temperature = earth.temperature();
    assert!((temperature - 288.0).abs() < 5.0, "Earth temperature: {}", temperature);
}

// ========== Errors ==========

#[test]
fn test_invalid_zone() {
    for zone in [0, 4] {
        let seed = PlanetSeed {
            orbit_zone: zone,
            ..earth_seed()
        };
        assert_eq!(generate(seed), Err(EnvironmentError::InvalidZone { zone }));
    }
}

#[test]
fn test_invalid_seeds() {
    let no_orbit = PlanetSeed {
        semi_major_axis: Length::zero(),
        ..earth_seed()
    };
    assert!(matches!(generate(no_orbit), Err(EnvironmentError::NonPositiveOrbit { .. })));

    let unbound = PlanetSeed {
        eccentricity: 1.0,
        ..earth_seed()
    };
    assert!(matches!(generate(unbound), Err(EnvironmentError::InvalidEccentricity { .. })));

    let massless = PlanetSeed {
        mass: Mass::zero(),
        ..earth_seed()
    };
    assert!(matches!(generate(massless), Err(EnvironmentError::NonPositiveMass { .. })));
}

#[test]
fn test_system_continues_past_failures() {
    let bad = PlanetSeed {
        orbit_zone: 9,
        ..mars_seed()
    };
    let mut rng = ChaChaRng::seed_from_u64(1);
    let planets = generate_system(
        vec![venus_seed(), earth_seed(), bad, mars_seed(), jupiter_seed()],
        &HostStar::solar(),
        &EnvironmentConfig::default(),
        &mut rng,
    );
    assert_eq!(planets.len(), 5);
    assert!(planets[2].is_err());
    assert_eq!(planets.iter().filter(|p| p.is_ok()).count(), 4);
    assert!(planets[4].as_ref().unwrap().is_gas_giant());
}

// ========== Serialization ==========

#[test]
fn test_planet_serializes() {
    let earth = generate(earth_seed()).unwrap();
    let value = serde_json::to_value(&earth).unwrap();
    assert_eq!(value["environment"]["kind"], "terrestrial");
    assert_eq!(value["environment"]["breathability"], "breathable");
    assert!(value["surfaceGravity"].is_number());

    let json = serde_json::to_string(&earth).unwrap();
    let back: Planet = serde_json::from_str(&json).unwrap();
    assert_eq!(back.seed, earth.seed);

    let jupiter = serde_json::to_value(generate(jupiter_seed()).unwrap()).unwrap();
    assert_eq!(jupiter["environment"]["kind"], "gasGiant");
}
