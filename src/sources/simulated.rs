//! Simulated Soil
//!
//! Deterministic stand-in soil used when no SoilGrids data is available.
//! Values are derived from the coordinates so nearby clicks on the map still
//! produce different, repeatable sites.

use crate::data::{SoilData, SoilTexture, CLAY, LOAM, SANDY};

/// Fractional part of `sin(seed + offset) * 10000`, in [0, 1)
fn pseudo_random(seed: f64, offset: f64) -> f64 {
    let x = (seed + offset).sin() * 10000.0;
    x - x.floor()
}

/// Plausible topsoil for a location
///
/// pH 5.5-8.5, clay 10-50%, sand 10-70%, organic matter 0.5-4.5%,
/// nitrogen 0.5-5.0 g/kg.
pub fn simulated_soil(lat: f64, lon: f64) -> SoilData {
    let seed = (lat * 1000.0 + lon * 1000.0).abs();
    let r = |offset: f64| pseudo_random(seed, offset);

    let ph = 5.5 + r(1.0) * 3.0;
    let clay = 10.0 + r(2.0) * 40.0;
    let sand = 10.0 + r(3.0) * 60.0;
    let silt = 100.0 - (clay + sand);

    // Coarser split than measured soils: no Silty class, clay threshold 35%
    let classification = if sand > 50.0 {
        SANDY
    } else if clay > 35.0 {
        CLAY
    } else {
        LOAM
    };

    SoilData {
        ph,
        organic_matter: 0.5 + r(4.0) * 4.0,
        texture: SoilTexture {
            clay,
            sand,
            silt: silt.max(0.0),
        },
        nitrogen: 0.5 + r(5.0) * 4.5,
        classification: classification.to_string(),
    }
}
