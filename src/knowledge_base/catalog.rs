//! Default Species Catalog
//!
//! Ten species suited to restoration work on the Indian subcontinent.
//! Kept in sync with `data/knowledge_base.json` (checked by tests).

use super::{PlantRequirement, WaterNeeds};

/// One row of the static catalog table
struct SpeciesRow {
    name: &'static str,
    ideal_ph: f64,
    ph_tolerance: f64,
    ideal_temp: f64,
    min_temp: f64,
    max_temp: f64,
    water_needs: WaterNeeds,
    textures: &'static [&'static str],
    description: &'static str,
}

// ============================================================================
// Catalog Table (declaration order is the ranking tie-break order)
// ============================================================================

static DEFAULT_SPECIES: &[SpeciesRow] = &[
    SpeciesRow {
        name: "Neem (Azadirachta indica)",
        ideal_ph: 7.0,
        ph_tolerance: 1.5,  // 5.5 - 8.5
        ideal_temp: 30.0,
        min_temp: 5.0,
        max_temp: 45.0,
        water_needs: WaterNeeds::Low,
        textures: &["Sandy", "Loam", "Clay"],
        description: " drought-resistant, nitrogen-fixing properties.",
    },
    SpeciesRow {
        name: "Tulsi (Ocimum tenuiflorum)",
        ideal_ph: 6.5,
        ph_tolerance: 1.0,
        ideal_temp: 25.0,
        min_temp: 10.0,
        max_temp: 35.0,
        water_needs: WaterNeeds::Moderate,
        textures: &["Loam", "Sandy"],
        description: "Medicinal herb, requires good drainage.",
    },
    SpeciesRow {
        name: "Bamboo (Bambusa vulgaris)",
        ideal_ph: 6.0,
        ph_tolerance: 1.0,
        ideal_temp: 25.0,
        min_temp: 15.0,
        max_temp: 38.0,
        water_needs: WaterNeeds::High,
        textures: &["Loam", "Clay"],
        description: "Fast growing, good for soil erosion control.",
    },
    SpeciesRow {
        name: "Mango (Mangifera indica)",
        ideal_ph: 6.0,
        ph_tolerance: 1.0,
        ideal_temp: 27.0,
        min_temp: 10.0,
        max_temp: 42.0,
        water_needs: WaterNeeds::Moderate,
        textures: &["Loam", "Clay"],
        description: "Fruit tree, needs deep well-drained soil.",
    },
    SpeciesRow {
        name: "Rose (Rosa)",
        ideal_ph: 6.5,
        ph_tolerance: 0.5,
        ideal_temp: 20.0,
        min_temp: 10.0,
        max_temp: 30.0,
        water_needs: WaterNeeds::Moderate,
        textures: &["Loam", "Clay"],
        description: "Ornamental, requires nutrient-rich soil.",
    },
    SpeciesRow {
        name: "Cactus (Opuntia)",
        ideal_ph: 7.5,
        ph_tolerance: 1.0,
        ideal_temp: 35.0,
        min_temp: 10.0,
        max_temp: 50.0,
        water_needs: WaterNeeds::Low,
        textures: &["Sandy"],
        description: "Desert specialist, requires sandy soil and low moisture.",
    },
    SpeciesRow {
        name: "Fern (Polypodiopsida)",
        ideal_ph: 5.5,
        ph_tolerance: 0.8,
        ideal_temp: 22.0,
        min_temp: 10.0,
        max_temp: 30.0,
        water_needs: WaterNeeds::High,
        textures: &["Loam", "Clay"],
        description: "Shade-loving, requires moist acidic soil.",
    },
    SpeciesRow {
        name: "Lavender (Lavandula)",
        ideal_ph: 7.5,
        ph_tolerance: 0.5,
        ideal_temp: 25.0,
        min_temp: 5.0,
        max_temp: 35.0,
        water_needs: WaterNeeds::Low,
        textures: &["Sandy", "Loam"],
        description: "Aromatic herb, thrives in alkaline, well-drained soil.",
    },
    SpeciesRow {
        name: "Blueberry (Vaccinium)",
        ideal_ph: 5.0,
        ph_tolerance: 0.5,
        ideal_temp: 20.0,
        min_temp: -5.0,
        max_temp: 30.0,
        water_needs: WaterNeeds::Moderate,
        textures: &["Loam", "Sandy"],
        description: "Acid-loving fruiting shrub.",
    },
    SpeciesRow {
        name: "Teak (Tectona grandis)",
        ideal_ph: 7.0,
        ph_tolerance: 0.5,
        ideal_temp: 30.0,
        min_temp: 15.0,
        max_temp: 40.0,
        water_needs: WaterNeeds::Moderate,
        textures: &["Loam", "Clay"],
        description: "High-value timber, prefers deep, fertile soil.",
    },
];

impl SpeciesRow {
    fn to_requirement(&self) -> PlantRequirement {
        PlantRequirement {
            name: self.name.to_string(),
            ideal_ph: self.ideal_ph,
            ph_tolerance: self.ph_tolerance,
            ideal_temp: self.ideal_temp,
            min_temp: self.min_temp,
            max_temp: self.max_temp,
            water_needs: self.water_needs,
            soil_texture_preferences: self.textures.iter().map(|t| t.to_string()).collect(),
            description: self.description.to_string(),
        }
    }
}

/// Owned copy of the default catalog in declaration order
pub fn default_species() -> Vec<PlantRequirement> {
    DEFAULT_SPECIES.iter().map(SpeciesRow::to_requirement).collect()
}
