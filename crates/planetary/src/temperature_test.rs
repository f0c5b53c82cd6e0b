//! Tests for radiative temperatures and the temperature range

use approx::assert_relative_eq;
use units::{Length, Pressure, Time};

use crate::temperature::{
    TemperatureRange, effective_temperature, estimated_temperature, greenhouse_warming, lim,
    opacity, soft, surface_temperature,
};

// ========== Radiative Temperatures ==========

#[test]
fn test_effective_temperature_earth() {
    let one_au = Length::from_au(1.0);
    assert_relative_eq!(effective_temperature(one_au, one_au, 0.3), 250.0);
    assert_relative_eq!(estimated_temperature(one_au, one_au, 0.3), 287.15);
}

#[test]
fn test_effective_temperature_falls_with_distance_and_albedo() {
    let eco = Length::from_au(1.0);
    let near = effective_temperature(eco, Length::from_au(0.7), 0.3);
    let far = effective_temperature(eco, Length::from_au(1.5), 0.3);
    assert!(near > 250.0 && far < 250.0);

    let bright = effective_temperature(eco, eco, 0.7);
    assert!(bright < 250.0);
    // Four-fold distance halves the temperature
    assert_relative_eq!(effective_temperature(eco, Length::from_au(4.0), 0.3), 125.0);
}

// ========== Greenhouse ==========

#[test]
fn test_opacity_weight_bins() {
    let one_atm = Pressure::from_atmospheres(1.0);
    assert_eq!(opacity(5.0, one_atm), 3.0);
    assert_eq!(opacity(15.0, one_atm), 2.34);
    assert_eq!(opacity(25.0, one_atm), 1.0);
    assert_eq!(opacity(40.0, one_atm), 0.15);
    assert_eq!(opacity(60.0, one_atm), 0.05);
    assert_eq!(opacity(150.0, one_atm), 0.0);
}

#[test]
fn test_opacity_pressure_tiers() {
    let depth = |atm: f64| opacity(15.0, Pressure::from_atmospheres(atm));
    assert_relative_eq!(depth(4.9), 2.34);
    assert_relative_eq!(depth(5.0), 2.34 * 1.5);
    assert_relative_eq!(depth(10.0), 2.34 * 2.0);
    assert_relative_eq!(depth(30.0), 2.34 * 3.333);
    assert_relative_eq!(depth(50.0), 2.34 * 6.666);
    assert_relative_eq!(depth(93.0), 2.34 * 8.333);
}

#[test]
fn test_greenhouse_warming() {
    let one_atm = Pressure::from_atmospheres(1.0);
    let rise = greenhouse_warming(2.34, 250.0, one_atm);
    assert!(rise > 30.0 && rise < 45.0, "Earth-like greenhouse rise: {}", rise);

    assert_eq!(greenhouse_warming(2.34, 250.0, Pressure::zero()), 0.0);
    assert_eq!(greenhouse_warming(0.0, 250.0, one_atm), 0.0);

    let thick = greenhouse_warming(opacity(15.0, Pressure::from_atmospheres(90.0)), 250.0, Pressure::from_atmospheres(90.0));
    assert!(thick > rise * 5.0);
}

#[test]
fn test_surface_temperature_earth_baseline() {
    let one_au = Length::from_au(1.0);
    let t = surface_temperature(one_au, one_au, 0.3, 6.36, Pressure::from_millibars(1012.86));
    assert!((t - 288.0).abs() < 5.0, "Earth surface temp: {}", t);
}

// ========== Soft Limiting ==========

#[test]
fn test_lim_bounded() {
    for x in [-1.0e6, -10.0, -1.0, 0.0, 0.5, 1.0, 10.0, 1.0e6] {
        let y = lim(x);
        assert!(y.abs() <= 1.0, "lim({}) = {}", x, y);
    }
    assert_eq!(lim(0.0), 0.0);
}

#[test]
fn test_lim_saturates_for_huge_inputs() {
    assert_relative_eq!(lim(1.0e80), 1.0);
    assert_relative_eq!(lim(-1.0e200), -1.0);
    assert_relative_eq!(lim(2.0), 2.0 / 17.0_f64.powf(0.25), max_relative = 1e-12);
    assert_relative_eq!(lim(-0.5), -0.5 / 1.0625_f64.powf(0.25), max_relative = 1e-12);

    // Extreme inputs land on the nearest bound, not the midpoint
    assert_relative_eq!(soft(1.0e80, 400.0, 200.0), 400.0);
    assert_relative_eq!(soft(-1.0e200, 400.0, 200.0), 200.0);
}

#[test]
fn test_soft_stays_within_bounds() {
    let (max, min) = (400.0, 200.0);
    let mut v = -1.0e5;
    while v <= 1.0e5 {
        let s = soft(v, max, min);
        assert!(s >= min && s <= max, "soft({}) = {}", v, s);
        v += 137.0;
    }
    // Close to identity at the middle of the band
    assert_relative_eq!(soft(300.0, max, min), 300.0);
}

// ========== Temperature Range ==========

#[test]
fn test_earth_temperature_range_ordering() {
    let range = TemperatureRange::calculate(
        287.48,
        Pressure::from_millibars(1012.86),
        Time::from_hours(16.15),
        23.4,
        0.017,
    );
    assert!(range.min < range.low);
    assert!(range.low < 287.48 && 287.48 < range.high);
    assert!(range.high < range.max);
    assert!((range.high - 292.0).abs() < 1.0, "high: {}", range.high);
    assert!((range.min - 261.5).abs() < 1.0, "min: {}", range.min);
}

#[test]
fn test_thick_air_narrows_range() {
    let day = Time::from_hours(24.0);
    let thin = TemperatureRange::calculate(280.0, Pressure::from_millibars(10.0), day, 23.0, 0.0);
    let thick = TemperatureRange::calculate(280.0, Pressure::from_atmospheres(90.0), day, 23.0, 0.0);
    assert!(thick.max - thick.min < thin.max - thin.min);
}

#[test]
fn test_airless_range_non_negative() {
    let range = TemperatureRange::calculate(424.0, Pressure::zero(), Time::from_hours(1478.0), 0.0, 0.2);
    assert!(range.min >= 0.0);
    assert!(range.min < range.low && range.high < range.max);
}
