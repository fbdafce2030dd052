//! Species Knowledge Base
//!
//! Static catalog of candidate species with their pH, temperature, water and
//! soil texture requirements. The default catalog ships as a constant table
//! (`catalog.rs`) and as a replaceable data file (`data/knowledge_base.json`).
//!
//! Entries are validated once at construction so that scoring stays total:
//! a catalog with `phTolerance <= 0` is rejected here instead of producing
//! NaN scores later.

pub mod catalog;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Relative water demand of a species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaterNeeds {
    Low,
    Moderate,
    High,
}

/// Growing requirements for one species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRequirement {
    /// Display name, unique within a catalog
    pub name: String,
    pub ideal_ph: f64,
    /// Half-width of the acceptable pH band (must be > 0)
    pub ph_tolerance: f64,
    pub ideal_temp: f64,
    /// Informational only, not used by scoring
    pub min_temp: f64,
    /// Informational only, not used by scoring
    pub max_temp: f64,
    pub water_needs: WaterNeeds,
    /// Texture classifications the species tolerates well
    pub soil_texture_preferences: SmallVec<[String; 3]>,
    pub description: String,
}

impl PlantRequirement {
    /// Exact, case-sensitive membership test against the preference set
    pub fn prefers_texture(&self, classification: &str) -> bool {
        self.soil_texture_preferences
            .iter()
            .any(|t| t == classification)
    }
}

#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("knowledge base contains no species")]
    Empty,

    #[error("duplicate species name: {0}")]
    DuplicateName(String),

    #[error("species '{name}' has invalid pH tolerance {tolerance} (must be finite and > 0)")]
    InvalidTolerance { name: String, tolerance: f64 },

    #[error("species '{name}' has non-finite value for {field}")]
    NonFiniteField { name: String, field: &'static str },

    #[error("failed to read knowledge base file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse knowledge base JSON")]
    Parse(#[from] serde_json::Error),
}

/// Validated, immutable species catalog
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    plants: Vec<PlantRequirement>,
    index: FxHashMap<String, usize>,
}

static SHARED: OnceLock<KnowledgeBase> = OnceLock::new();

impl KnowledgeBase {
    /// Build a catalog, checking every entry's preconditions
    pub fn new(plants: Vec<PlantRequirement>) -> Result<Self, KnowledgeBaseError> {
        if plants.is_empty() {
            return Err(KnowledgeBaseError::Empty);
        }

        for plant in &plants {
            validate(plant)?;
        }

        let mut index = FxHashMap::default();
        for (i, plant) in plants.iter().enumerate() {
            if index.insert(plant.name.clone(), i).is_some() {
                return Err(KnowledgeBaseError::DuplicateName(plant.name.clone()));
            }
        }

        Ok(Self { plants, index })
    }

    /// The built-in 10-species catalog
    pub fn default_catalog() -> Self {
        let plants = catalog::default_species();
        let index = plants
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.clone(), i))
            .collect();
        Self { plants, index }
    }

    /// Process-wide default catalog, built on first use
    pub fn shared() -> &'static KnowledgeBase {
        SHARED.get_or_init(Self::default_catalog)
    }

    /// Parse a JSON array of species
    pub fn from_json_str(json: &str) -> Result<Self, KnowledgeBaseError> {
        let plants: Vec<PlantRequirement> = serde_json::from_str(json)?;
        Self::new(plants)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self, KnowledgeBaseError> {
        let contents = fs::read_to_string(path).map_err(|source| KnowledgeBaseError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let kb = Self::from_json_str(&contents)?;
        tracing::info!("Loaded {} species from {:?}", kb.len(), path);
        Ok(kb)
    }

    pub fn get(&self, name: &str) -> Option<&PlantRequirement> {
        self.index.get(name).map(|&i| &self.plants[i])
    }

    /// Species in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, PlantRequirement> {
        self.plants.iter()
    }

    pub fn plants(&self) -> &[PlantRequirement] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::default_catalog()
    }
}

impl<'a> IntoIterator for &'a KnowledgeBase {
    type Item = &'a PlantRequirement;
    type IntoIter = std::slice::Iter<'a, PlantRequirement>;

    fn into_iter(self) -> Self::IntoIter {
        self.plants.iter()
    }
}

fn validate(plant: &PlantRequirement) -> Result<(), KnowledgeBaseError> {
    if !plant.ph_tolerance.is_finite() || plant.ph_tolerance <= 0.0 {
        return Err(KnowledgeBaseError::InvalidTolerance {
            name: plant.name.clone(),
            tolerance: plant.ph_tolerance,
        });
    }

    let fields = [
        ("idealPh", plant.ideal_ph),
        ("idealTemp", plant.ideal_temp),
        ("minTemp", plant.min_temp),
        ("maxTemp", plant.max_temp),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(KnowledgeBaseError::NonFiniteField {
                name: plant.name.clone(),
                field,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn plant(name: &str, ph_tolerance: f64) -> PlantRequirement {
        PlantRequirement {
            name: name.to_string(),
            ideal_ph: 6.5,
            ph_tolerance,
            ideal_temp: 25.0,
            min_temp: 10.0,
            max_temp: 35.0,
            water_needs: WaterNeeds::Moderate,
            soil_texture_preferences: smallvec!["Loam".to_string()],
            description: String::new(),
        }
    }

    #[test]
    fn test_default_catalog_passes_validation() {
        let kb = KnowledgeBase::new(catalog::default_species()).unwrap();
        assert_eq!(kb.len(), 10);
        assert!(kb.iter().all(|p| p.ph_tolerance > 0.0));
    }

    #[test]
    fn test_zero_tolerance_rejected() {
        let err = KnowledgeBase::new(vec![plant("Flat", 0.0)]).unwrap_err();
        assert!(matches!(err, KnowledgeBaseError::InvalidTolerance { .. }));

        let err = KnowledgeBase::new(vec![plant("Negative", -1.0)]).unwrap_err();
        assert!(matches!(err, KnowledgeBaseError::InvalidTolerance { .. }));
    }

    #[test]
    fn test_empty_and_duplicates_rejected() {
        assert!(matches!(
            KnowledgeBase::new(Vec::new()),
            Err(KnowledgeBaseError::Empty)
        ));

        let err = KnowledgeBase::new(vec![plant("Twin", 1.0), plant("Twin", 0.5)]).unwrap_err();
        assert!(matches!(err, KnowledgeBaseError::DuplicateName(name) if name == "Twin"));
    }

    #[test]
    fn test_non_finite_field_rejected() {
        let mut p = plant("Broken", 1.0);
        p.ideal_temp = f64::NAN;
        let err = KnowledgeBase::new(vec![p]).unwrap_err();
        assert!(matches!(err, KnowledgeBaseError::NonFiniteField { field: "idealTemp", .. }));
    }

    #[test]
    fn test_lookup_by_name() {
        let kb = KnowledgeBase::shared();
        let neem = kb.get("Neem (Azadirachta indica)").unwrap();
        assert_eq!(neem.water_needs, WaterNeeds::Low);
        assert!(neem.prefers_texture("Clay"));
        assert!(!neem.prefers_texture("clay"));
        assert!(kb.get("Oak").is_none());
    }

    #[test]
    fn test_json_round_trip_field_names() {
        let json = r#"[{
            "name": "Test",
            "idealPh": 6.0,
            "phTolerance": 1.0,
            "idealTemp": 20,
            "minTemp": 5,
            "maxTemp": 30,
            "waterNeeds": "High",
            "soilTexturePreferences": ["Loam", "Clay"],
            "description": "x"
        }]"#;

        let kb = KnowledgeBase::from_json_str(json).unwrap();
        let p = kb.get("Test").unwrap();
        assert_eq!(p.water_needs, WaterNeeds::High);
        assert_eq!(p.soil_texture_preferences.len(), 2);
        assert_eq!(p.ideal_temp, 20.0);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = KnowledgeBase::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, KnowledgeBaseError::Parse(_)));
    }
}
