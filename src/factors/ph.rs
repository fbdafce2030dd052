//! pH Factor
//!
//! pH is the most permanent constraint on a site, so it carries the largest
//! weight in the composite (0.4).

use super::gaussian::gaussian_score;
use crate::data::SoilData;
use crate::knowledge_base::PlantRequirement;

/// Gaussian similarity of soil pH to the species' ideal pH
pub fn ph_score(plant: &PlantRequirement, soil: &SoilData) -> f64 {
    gaussian_score(soil.ph, plant.ideal_ph, plant.ph_tolerance)
}
