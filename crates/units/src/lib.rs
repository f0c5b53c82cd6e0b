pub mod acceleration;
pub mod density;
pub mod length;
pub mod mass;
pub mod pressure;
pub mod time;
pub mod velocity;

#[cfg(test)]
mod length_test;

pub use acceleration::{Acceleration, EARTH_ACCELERATION};
pub use density::{Density, EARTH_DENSITY};
pub use length::{Length, EARTH_RADIUS_KM};
pub use mass::{EARTH_MASS_G, EARTH_MASSES_PER_SOLAR, Mass, SOLAR_MASS_G};
pub use pressure::{EARTH_SURFACE_PRESSURE_MB, MMHG_TO_MB, Pressure};
pub use time::{DAYS_PER_YEAR, Time};
pub use velocity::Velocity;
