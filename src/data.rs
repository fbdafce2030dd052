//! Site Measurement Data
//!
//! Soil and weather records describing one candidate restoration site.
//! Both are produced once per analysis (decoded from upstream responses or
//! filled with fallback values, see `sources`) and are read-only afterwards.
//!
//! Field names serialize in camelCase to match stored analysis documents.

use serde::{Deserialize, Serialize};

/// Texture label for sand-dominated soils
pub const SANDY: &str = "Sandy";
/// Texture label for clay-dominated soils
pub const CLAY: &str = "Clay";
/// Texture label for silt-dominated soils
pub const SILTY: &str = "Silty";
/// Texture label for balanced soils (also the fallback class)
pub const LOAM: &str = "Loam";

/// Particle size composition (%)
///
/// Values come straight from the upstream source and are not required to
/// sum to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SoilTexture {
    pub clay: f64,
    pub sand: f64,
    pub silt: f64,
}

/// Topsoil measurements for a site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilData {
    /// Soil pH (H2O), typically 3-10
    pub ph: f64,

    /// Organic matter (%)
    pub organic_matter: f64,

    /// Clay/sand/silt percentages
    pub texture: SoilTexture,

    /// Total nitrogen (g/kg)
    pub nitrogen: f64,

    /// Dominant texture label ("Sandy", "Clay", "Silty", "Loam", or other)
    pub classification: String,
}

/// Current weather snapshot for a site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    /// Air temperature (°C)
    pub temp: f64,

    /// Relative humidity (%)
    pub humidity: f64,

    /// Recent rainfall accumulation (mm, last 1-3h)
    pub rainfall: f64,

    /// Pressure (hPa), descriptive only
    pub pressure: f64,

    /// Cloud cover (%), descriptive only
    pub clouds: f64,

    pub description: String,
}

impl WeatherData {
    /// Neutral snapshot used when no weather response is available
    pub fn unavailable() -> Self {
        Self {
            temp: 25.0,
            humidity: 50.0,
            rainfall: 0.0,
            pressure: 1013.0,
            clouds: 20.0,
            description: "Data unavailable".to_string(),
        }
    }
}

/// Classify measured texture into a dominant label.
///
/// Thresholds are checked in order: sand > 50 → Sandy, clay > 40 → Clay,
/// silt > 50 → Silty, otherwise Loam.
pub fn classify_texture(texture: &SoilTexture) -> &'static str {
    if texture.sand > 50.0 {
        SANDY
    } else if texture.clay > 40.0 {
        CLAY
    } else if texture.silt > 50.0 {
        SILTY
    } else {
        LOAM
    }
}
