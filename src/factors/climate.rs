//! Climate Factor
//!
//! Combines a temperature similarity term with a coarse water-stress
//! penalty. Air temperature is a noisy snapshot, so the temperature term
//! uses a fixed wide tolerance for every species.
//!
//! `minTemp`/`maxTemp` on the species are not read here.

use super::gaussian::gaussian_score;
use crate::data::WeatherData;
use crate::knowledge_base::{PlantRequirement, WaterNeeds};

/// Tolerance (°C) for the temperature term, shared by all species
pub const TEMP_TOLERANCE: f64 = 10.0;

const TEMP_WEIGHT: f64 = 0.7;
const WATER_WEIGHT: f64 = 0.3;

/// Water score for thirsty species in dry, low-humidity conditions
pub const DROUGHT_STRESS: f64 = 0.4;
/// Water score for drought-adapted species after heavy rain
pub const ROOT_ROT_RISK: f64 = 0.6;

/// Water stress term in [0, 1]
///
/// High-need species score 0.4 when rainfall < 1 mm and humidity < 40%.
/// Low-need species score 0.6 when rainfall > 10 mm. Otherwise 1.0.
pub fn water_score(plant: &PlantRequirement, weather: &WeatherData) -> f64 {
    match plant.water_needs {
        WaterNeeds::High if weather.rainfall < 1.0 && weather.humidity < 40.0 => DROUGHT_STRESS,
        WaterNeeds::Low if weather.rainfall > 10.0 => ROOT_ROT_RISK,
        _ => 1.0,
    }
}

/// `0.7 * tempScore + 0.3 * waterScore`
pub fn climate_score(plant: &PlantRequirement, weather: &WeatherData) -> f64 {
    let temp_score = gaussian_score(weather.temp, plant.ideal_temp, TEMP_TOLERANCE);
    temp_score * TEMP_WEIGHT + water_score(plant, weather) * WATER_WEIGHT
}
