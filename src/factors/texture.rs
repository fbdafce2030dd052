//! Texture Factor
//!
//! Categorical match between the site's texture label and the species'
//! preferred textures. Deliberately coarse: preferred, loam fallback,
//! or poor. No graded similarity between classes.

use crate::data::LOAM;
use crate::knowledge_base::PlantRequirement;

/// Score when the classification is in the preference set
pub const PREFERRED: f64 = 1.0;
/// Score for unpreferred loam (workable for most species)
pub const LOAM_FALLBACK: f64 = 0.8;
/// Score for any other structural mismatch
pub const POOR_MATCH: f64 = 0.2;

/// Exact, case-sensitive texture compatibility
pub fn texture_score(plant: &PlantRequirement, classification: &str) -> f64 {
    if plant.prefers_texture(classification) {
        PREFERRED
    } else if classification == LOAM {
        LOAM_FALLBACK
    } else {
        POOR_MATCH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge_base::KnowledgeBase;

    #[test]
    fn test_preferred_texture() {
        let kb = KnowledgeBase::shared();
        let cactus = kb.get("Cactus (Opuntia)").unwrap();
        assert_eq!(texture_score(cactus, "Sandy"), 1.0);
    }

    #[test]
    fn test_loam_fallback() {
        // Cactus only lists Sandy
        let kb = KnowledgeBase::shared();
        let cactus = kb.get("Cactus (Opuntia)").unwrap();
        assert_eq!(texture_score(cactus, "Loam"), 0.8);
    }

    #[test]
    fn test_everything_else_is_flat() {
        let kb = KnowledgeBase::shared();
        let cactus = kb.get("Cactus (Opuntia)").unwrap();
        assert_eq!(texture_score(cactus, "Clay"), 0.2);
        assert_eq!(texture_score(cactus, "Silty"), 0.2);
        assert_eq!(texture_score(cactus, "Peat"), 0.2);

        // Case-sensitive: "sandy" is not "Sandy", "loam" is not "Loam"
        assert_eq!(texture_score(cactus, "sandy"), 0.2);
        assert_eq!(texture_score(cactus, "loam"), 0.2);
    }
}
