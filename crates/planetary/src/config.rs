//! Tunables for the environment pipeline

use serde::{Deserialize, Serialize};

/// Settings consumed by value by [`crate::planet::Planet::generate`].
///
/// Missing fields fall back to the calibrated defaults, so a partial JSON
/// document is enough to override one knob:
///
/// ```
/// use planetary::config::EnvironmentConfig;
///
/// let config: EnvironmentConfig = serde_json::from_str(r#"{"maxIterations": 10}"#).unwrap();
/// assert_eq!(config.max_iterations, 10);
/// assert_eq!(config.convergence_threshold, 0.25);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnvironmentConfig {
    /// Cap on damped thermal passes after the initial one
    pub max_iterations: u32,
    /// Early exit once the surface temperature moves less than this (K)
    pub convergence_threshold: f64,
    /// Retention target when the star's age is unknown (years)
    pub default_gas_lifetime_years: f64,
    /// Derive the individual gas mixture and breathability
    pub compute_gases: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            max_iterations: 25,
            convergence_threshold: 0.25,
            default_gas_lifetime_years: 5.0e9,
            compute_gases: true,
        }
    }
}
