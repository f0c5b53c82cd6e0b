/// Mean density of the Earth in g/cm³
pub const EARTH_DENSITY: f64 = 5.52;

/// Volume density in g/cm³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Density(f64);

impl Density {
    pub fn from_grams_per_cm3(value: f64) -> Self {
        Self(value)
    }

    pub fn to_grams_per_cm3(&self) -> f64 {
        self.0
    }

    /// Ratio to the mean density of the Earth
    pub fn to_earth_densities(&self) -> f64 {
        self.0 / EARTH_DENSITY
    }
}
