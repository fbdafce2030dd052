//! Remediation Advice
//!
//! Actionable recommendations derived from the measured site and the
//! species being considered. Conditions are evaluated independently and
//! appended in a fixed order: pH correction, organic matter, irrigation,
//! phosphorus lock-up. At most one of each pair (raise/lower pH,
//! iron/calcium lock-up) can fire, so a result holds 0 to 5 entries.

use crate::data::{SoilData, WeatherData};
use crate::knowledge_base::{PlantRequirement, WaterNeeds};

pub const RAISE_PH: &str = "Add Lime/Dolomite to raise pH";
pub const LOWER_PH: &str = "Add Sulfur/Peat Moss to lower pH";
pub const ADD_ORGANIC_MATTER: &str = "Low Organic Matter: Add Compost or Manure";
pub const IRRIGATE: &str = "Ensure regular irrigation";
pub const PHOSPHORUS_IRON_LOCK: &str = "Phosphorus likely locked by Iron/Aluminum. Add bone meal.";
pub const PHOSPHORUS_CALCIUM_LOCK: &str = "Phosphorus likely locked by Calcium. Use acidic fertilizer.";

/// pH score below which a pH correction is suggested
pub const PH_CORRECTION_THRESHOLD: f64 = 0.6;
/// Organic matter (%) below which compost is suggested
pub const MIN_ORGANIC_MATTER: f64 = 2.0;
/// Rainfall (mm) below which high-need species need irrigation
pub const IRRIGATION_RAINFALL: f64 = 2.0;
/// Soil pH below which phosphorus binds to iron/aluminium
pub const ACID_LOCK_PH: f64 = 5.5;
/// Soil pH above which phosphorus binds to calcium
pub const ALKALINE_LOCK_PH: f64 = 7.5;

/// Build the ordered recommendation list for one species at one site
pub fn recommendations(
    plant: &PlantRequirement,
    soil: &SoilData,
    weather: &WeatherData,
    ph_score: f64,
) -> Vec<String> {
    let mut advice = Vec::new();

    if ph_score < PH_CORRECTION_THRESHOLD {
        if soil.ph < plant.ideal_ph {
            advice.push(RAISE_PH);
        } else {
            advice.push(LOWER_PH);
        }
    }

    if soil.organic_matter < MIN_ORGANIC_MATTER {
        advice.push(ADD_ORGANIC_MATTER);
    }

    if plant.water_needs == WaterNeeds::High && weather.rainfall < IRRIGATION_RAINFALL {
        advice.push(IRRIGATE);
    }

    // Phosphorus availability
    if soil.ph < ACID_LOCK_PH {
        advice.push(PHOSPHORUS_IRON_LOCK);
    }
    if soil.ph > ALKALINE_LOCK_PH {
        advice.push(PHOSPHORUS_CALCIUM_LOCK);
    }

    advice.into_iter().map(String::from).collect()
}
