//! Tests for habitability assessment

use units::{Pressure, Time, Velocity};

use crate::atmosphere::Atmosphere;
use crate::breathability::Breathability;
use crate::climate::Climate;
use crate::habitability::Habitability;
use crate::physical::Rotation;
use crate::surface::SurfaceCover;
use crate::temperature::TemperatureRange;

fn earth_rotation() -> Rotation {
    Rotation {
        day: Time::from_hours(24.0),
        tidally_locked: false,
        resonant: false,
    }
}

fn earth_atmosphere() -> Atmosphere {
    Atmosphere {
        exospheric_temperature: 1273.0,
        rms_velocity: Velocity::from_cm_per_sec(1.06e5),
        min_molecular_weight: 6.4,
        volatile_inventory: 1000.0,
        surface_pressure: Pressure::from_millibars(1013.0),
        boiling_point: Some(373.2),
        greenhouse: false,
        gases: Vec::new(),
    }
}

fn earth_climate() -> Climate {
    Climate {
        surface_temperature: 288.0,
        range: TemperatureRange {
            high: 292.0,
            low: 283.0,
            max: 312.0,
            min: 261.0,
        },
        cover: SurfaceCover {
            hydrosphere: 0.71,
            cloud_cover: 0.52,
            ice_cover: 0.02,
        },
        albedo: 0.3,
        greenhouse_rise: 33.0,
    }
}

#[test]
fn test_earth_is_earthlike() {
    let result = Habitability::assess(
        &earth_rotation(),
        1.0,
        &earth_atmosphere(),
        &earth_climate(),
        Breathability::Breathable,
    );
    assert!(result.habitable);
    assert!(result.earthlike);
}

#[test]
fn test_unbreathable_is_not_habitable() {
    for breathability in [Breathability::None, Breathability::Unbreathable, Breathability::Poisonous] {
        let result = Habitability::assess(
            &earth_rotation(),
            1.0,
            &earth_atmosphere(),
            &earth_climate(),
            breathability,
        );
        assert!(!result.habitable);
        assert!(!result.earthlike);
    }
}

#[test]
fn test_locked_or_resonant_is_not_habitable() {
    let locked = Rotation {
        tidally_locked: true,
        ..earth_rotation()
    };
    let resonant = Rotation {
        tidally_locked: true,
        resonant: true,
        ..earth_rotation()
    };
    for rotation in [locked, resonant] {
        let result = Habitability::assess(
            &rotation,
            1.0,
            &earth_atmosphere(),
            &earth_climate(),
            Breathability::Breathable,
        );
        assert!(!result.habitable);
    }
}

#[test]
fn test_habitable_but_not_earthlike() {
    let assess = |gravity: f64, atmosphere: &Atmosphere, climate: &Climate| {
        Habitability::assess(&earth_rotation(), gravity, atmosphere, climate, Breathability::Breathable)
    };

    let heavy = assess(1.5, &earth_atmosphere(), &earth_climate());
    assert!(heavy.habitable && !heavy.earthlike);

    let warm = Climate {
        surface_temperature: 295.0,
        ..earth_climate()
    };
    assert!(!assess(1.0, &earth_atmosphere(), &warm).earthlike);

    let dense = Atmosphere {
        surface_pressure: Pressure::from_atmospheres(2.5),
        ..earth_atmosphere()
    };
    assert!(!assess(1.0, &dense, &earth_climate()).earthlike);

    let mut dry = earth_climate();
    dry.cover.hydrosphere = 0.3;
    assert!(!assess(1.0, &earth_atmosphere(), &dry).earthlike);

    let mut icy = earth_climate();
    icy.cover.ice_cover = 0.2;
    assert!(!assess(1.0, &earth_atmosphere(), &icy).earthlike);
}
