//! Site Scorer - Main coordinator for species suitability
//!
//! Combines the pH, texture and climate factors into a weighted composite,
//! maps it to a suitability tier, attaches remediation advice, and ranks
//! every species in a knowledge base for one site.
//! Includes both sequential and parallel (Rayon) rankings.

use crate::advice;
use crate::data::{SoilData, WeatherData};
use crate::factors::{climate_score, ph_score, texture_score};
use crate::knowledge_base::{KnowledgeBase, PlantRequirement};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Composite weight for the pH factor
pub const PH_WEIGHT: f64 = 0.4;
/// Composite weight for the texture factor
pub const TEXTURE_WEIGHT: f64 = 0.3;
/// Composite weight for the climate factor
pub const CLIMATE_WEIGHT: f64 = 0.3;

/// Human-facing suitability tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suitability {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Suitability {
    /// Strict thresholds, high to low: > 0.85, > 0.70, > 0.50
    ///
    /// A score exactly on a threshold falls to the lower tier.
    pub fn from_score(score: f64) -> Self {
        if score > 0.85 {
            Suitability::Excellent
        } else if score > 0.70 {
            Suitability::Good
        } else if score > 0.50 {
            Suitability::Fair
        } else {
            Suitability::Poor
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            Suitability::Excellent => "Excellent",
            Suitability::Good => "Good",
            Suitability::Fair => "Fair",
            Suitability::Poor => "Poor",
        }
    }
}

impl fmt::Display for Suitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

/// Individual factor scores, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorScores {
    pub ph_score: f64,
    pub texture_score: f64,
    pub climate_score: f64,
}

impl FactorScores {
    /// Weighted composite: 0.4 pH + 0.3 texture + 0.3 climate
    pub fn weighted_total(&self) -> f64 {
        let total = self.ph_score * PH_WEIGHT
            + self.texture_score * TEXTURE_WEIGHT
            + self.climate_score * CLIMATE_WEIGHT;
        // Weights sum to 1; clamp only absorbs rounding at the top end
        total.clamp(0.0, 1.0)
    }
}

/// Suitability of one species at one site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Weighted composite score (0-1)
    pub score: f64,
    pub suitability: Suitability,
    pub factors: FactorScores,
    /// Ordered remediation advice (0-5 entries)
    pub recommendations: Vec<String>,
}

/// A species paired with its analysis, as returned by the rankers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMatch<'a> {
    pub plant: &'a PlantRequirement,
    pub result: AnalysisResult,
}

/// Score one species against one site's measurements
pub fn analyze_site(soil: &SoilData, weather: &WeatherData, plant: &PlantRequirement) -> AnalysisResult {
    let factors = FactorScores {
        ph_score: ph_score(plant, soil),
        texture_score: texture_score(plant, &soil.classification),
        climate_score: climate_score(plant, weather),
    };

    let score = factors.weighted_total();
    let recommendations = advice::recommendations(plant, soil, weather, factors.ph_score);

    AnalysisResult {
        score,
        suitability: Suitability::from_score(score),
        factors,
        recommendations,
    }
}

/// Rank the default catalog for one site
pub fn find_best_matches(soil: &SoilData, weather: &WeatherData) -> Vec<RankedMatch<'static>> {
    rank(KnowledgeBase::shared(), soil, weather)
}

/// Stable descending sort by score; ties keep catalog order
fn sort_descending(matches: &mut [RankedMatch<'_>]) {
    matches.sort_by(|a, b| b.result.score.total_cmp(&a.result.score));
}

fn rank<'a>(kb: &'a KnowledgeBase, soil: &SoilData, weather: &WeatherData) -> Vec<RankedMatch<'a>> {
    let mut matches: Vec<RankedMatch<'a>> = kb
        .iter()
        .map(|plant| RankedMatch {
            plant,
            result: analyze_site(soil, weather, plant),
        })
        .collect();

    sort_descending(&mut matches);
    log_top_match(&matches);
    matches
}

fn log_top_match(matches: &[RankedMatch<'_>]) {
    if let Some(top) = matches.first() {
        tracing::debug!(
            "Ranked {} species, top: {} ({:.3}, {})",
            matches.len(),
            top.plant.name,
            top.result.score,
            top.result.suitability
        );
    }
}

/// Site scorer bound to a knowledge base
pub struct SiteScorer {
    knowledge_base: KnowledgeBase,
}

impl SiteScorer {
    pub fn new(knowledge_base: KnowledgeBase) -> Self {
        Self { knowledge_base }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    /// Score every species and sort descending by score (sequential)
    pub fn find_best_matches(&self, soil: &SoilData, weather: &WeatherData) -> Vec<RankedMatch<'_>> {
        rank(&self.knowledge_base, soil, weather)
    }

    /// Same ranking as `find_best_matches`, scoring species in parallel
    ///
    /// Rayon's indexed collect keeps catalog order, so the stable sort that
    /// follows yields an identical result.
    pub fn find_best_matches_parallel(&self, soil: &SoilData, weather: &WeatherData) -> Vec<RankedMatch<'_>> {
        let mut matches: Vec<RankedMatch<'_>> = self
            .knowledge_base
            .plants()
            .par_iter()
            .map(|plant| RankedMatch {
                plant,
                result: analyze_site(soil, weather, plant),
            })
            .collect();

        sort_descending(&mut matches);
        log_top_match(&matches);
        matches
    }

    /// Score a single species by name
    pub fn analyze_species(
        &self,
        name: &str,
        soil: &SoilData,
        weather: &WeatherData,
    ) -> Option<RankedMatch<'_>> {
        let plant = self.knowledge_base.get(name)?;
        Some(RankedMatch {
            plant,
            result: analyze_site(soil, weather, plant),
        })
    }
}

impl Default for SiteScorer {
    fn default() -> Self {
        Self::new(KnowledgeBase::default_catalog())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SoilTexture;
    use approx::assert_relative_eq;

    fn soil(ph: f64, organic_matter: f64, classification: &str) -> SoilData {
        SoilData {
            ph,
            organic_matter,
            texture: SoilTexture { clay: 20.0, sand: 40.0, silt: 40.0 },
            nitrogen: 1.5,
            classification: classification.to_string(),
        }
    }

    fn weather(temp: f64, rainfall: f64, humidity: f64) -> WeatherData {
        WeatherData {
            temp,
            humidity,
            rainfall,
            pressure: 1010.0,
            clouds: 10.0,
            description: "haze".to_string(),
        }
    }

    fn species(name: &str) -> &'static PlantRequirement {
        KnowledgeBase::shared().get(name).unwrap()
    }

    #[test]
    fn test_suitability_thresholds() {
        assert_eq!(Suitability::from_score(0.851), Suitability::Excellent);
        assert_eq!(Suitability::from_score(0.85), Suitability::Good);
        assert_eq!(Suitability::from_score(0.70), Suitability::Fair);
        assert_eq!(Suitability::from_score(0.7001), Suitability::Good);
        assert_eq!(Suitability::from_score(0.50), Suitability::Poor);
        assert_eq!(Suitability::from_score(0.5001), Suitability::Fair);
        assert_eq!(Suitability::from_score(0.0), Suitability::Poor);
    }

    #[test]
    fn test_neem_perfect_site() {
        let result = analyze_site(
            &soil(7.0, 3.0, "Loam"),
            &weather(30.0, 0.0, 30.0),
            species("Neem (Azadirachta indica)"),
        );

        assert_relative_eq!(result.factors.ph_score, 1.0, epsilon = 1e-12);
        assert_eq!(result.factors.texture_score, 1.0);
        assert_relative_eq!(result.factors.climate_score, 1.0, epsilon = 1e-12);
        assert_relative_eq!(result.score, 1.0, epsilon = 1e-12);
        assert_eq!(result.suitability, Suitability::Excellent);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_bamboo_drought() {
        let result = analyze_site(
            &soil(6.0, 3.0, "Clay"),
            &weather(25.0, 0.0, 20.0),
            species("Bamboo (Bambusa vulgaris)"),
        );

        // 0.7 * 1.0 + 0.3 * 0.4
        assert_relative_eq!(result.factors.climate_score, 0.82, epsilon = 1e-12);
        // 0.4 + 0.3 + 0.3 * 0.82
        assert_relative_eq!(result.score, 0.946, epsilon = 1e-12);
        assert_eq!(result.recommendations, vec![advice::IRRIGATE]);
    }

    #[test]
    fn test_weighted_total() {
        let factors = FactorScores {
            ph_score: 0.5,
            texture_score: 0.2,
            climate_score: 0.8,
        };
        assert_relative_eq!(factors.weighted_total(), 0.2 + 0.06 + 0.24, epsilon = 1e-12);
    }

    #[test]
    fn test_find_best_matches_sorted_and_complete() {
        let matches = find_best_matches(&soil(6.5, 2.5, "Loam"), &weather(25.0, 0.5, 55.0));
        assert_eq!(matches.len(), KnowledgeBase::shared().len());
        assert!(matches
            .windows(2)
            .all(|w| w[0].result.score >= w[1].result.score));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let scorer = SiteScorer::default();
        let soil = soil(5.8, 1.2, "Sandy");
        let weather = weather(33.0, 12.0, 80.0);

        let sequential = scorer.find_best_matches(&soil, &weather);
        let parallel = scorer.find_best_matches_parallel(&soil, &weather);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_analyze_species() {
        let scorer = SiteScorer::default();
        let found = scorer
            .analyze_species("Lavender (Lavandula)", &soil(7.5, 3.0, "Sandy"), &weather(25.0, 0.0, 30.0))
            .unwrap();
        assert_eq!(found.plant.name, "Lavender (Lavandula)");
        assert_eq!(found.result.suitability, Suitability::Excellent);

        assert!(scorer
            .analyze_species("Oak", &soil(7.5, 3.0, "Sandy"), &weather(25.0, 0.0, 30.0))
            .is_none());
    }

    #[test]
    fn test_result_serializes_like_stored_documents() {
        let result = analyze_site(
            &soil(7.0, 3.0, "Loam"),
            &weather(30.0, 0.0, 30.0),
            species("Neem (Azadirachta indica)"),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["suitability"], "Excellent");
        assert!(json["factors"]["phScore"].is_number());
        assert!(json["factors"]["textureScore"].is_number());
        assert!(json["factors"]["climateScore"].is_number());
    }
}
