//! Planetary environment derivation
//!
//! Turns the orbital and bulk parameters of a freshly accreted planet into
//! a full environmental profile: radius, density, rotation, surface
//! gravity, atmospheric retention and pressure, the equilibrium climate,
//! the gas mixture and whether a human could breathe it.
//!
//! The entry point is [`Planet::generate`]; the individual models are
//! public for callers that only need one piece.

pub mod atmosphere;
pub mod breathability;
pub mod climate;
pub mod config;
pub mod constants;
pub mod error;
pub mod gases;
pub mod habitability;
pub mod math;
pub mod orbit;
pub mod physical;
pub mod planet;
pub mod star;
pub mod surface;
pub mod temperature;

// Re-export key types at crate root
pub use breathability::Breathability;
pub use climate::{Climate, SolveOutcome};
pub use config::EnvironmentConfig;
pub use error::{EnvironmentError, Result};
pub use gases::{GasComponent, GasSpecies};
pub use orbit::OrbitalZone;
pub use planet::{Environment, Planet, PlanetSeed};
pub use star::HostStar;

#[cfg(test)]
mod habitability_test;
#[cfg(test)]
mod planet_test;
#[cfg(test)]
mod temperature_test;
