//! Analysis Records
//!
//! Persistence-shaped documents built from a ranking. Field names follow the
//! stored `analyses` documents consumed by dashboards and task generation,
//! so they must not change.

use crate::data::{SoilData, WeatherData};
use crate::scorer::{RankedMatch, Suitability};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Label used when neither geocoding nor site analysis named the location
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// One species' stored result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub plant_name: String,
    pub score: f64,
    pub suitability: Suitability,
    pub recommendations: Vec<String>,
}

impl From<&RankedMatch<'_>> for AnalysisRecord {
    fn from(m: &RankedMatch<'_>) -> Self {
        Self {
            plant_name: m.plant.name.clone(),
            score: m.result.score,
            suitability: m.result.suitability,
            recommendations: m.result.recommendations.clone(),
        }
    }
}

/// A complete site analysis document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteAnalysis {
    pub lat: f64,
    pub lon: f64,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    /// Externally computed Site Suitability Index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssi_score: Option<f64>,
    #[serde(rename = "soilData")]
    pub soil_data: SoilData,
    #[serde(rename = "weatherData")]
    pub weather_data: WeatherData,
    /// Ranked best-first
    pub results: Vec<AnalysisRecord>,
}

impl SiteAnalysis {
    /// Build a document from a ranking, stamped with the current time
    pub fn from_matches(
        lat: f64,
        lon: f64,
        soil: &SoilData,
        weather: &WeatherData,
        matches: &[RankedMatch<'_>],
    ) -> Self {
        Self {
            lat,
            lon,
            timestamp: Utc::now().timestamp_millis(),
            site_name: None,
            ssi_score: None,
            soil_data: soil.clone(),
            weather_data: weather.clone(),
            results: matches.iter().map(AnalysisRecord::from).collect(),
        }
    }

    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = Some(site_name.into());
        self
    }

    pub fn with_ssi_score(mut self, ssi_score: f64) -> Self {
        self.ssi_score = Some(ssi_score);
        self
    }

    /// Highest-scoring species, if any
    pub fn top_match(&self) -> Option<&AnalysisRecord> {
        self.results.first()
    }
}

/// Pick a display label: geocoded name, then site-analysis name, then unknown
pub fn resolve_site_name(geocoded: Option<&str>, site_analysis: Option<&str>) -> String {
    geocoded
        .filter(|name| !name.is_empty())
        .or(site_analysis.filter(|name| !name.is_empty()))
        .unwrap_or(UNKNOWN_LOCATION)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SoilTexture;
    use crate::scorer::find_best_matches;

    fn site() -> (SoilData, WeatherData) {
        let soil = SoilData {
            ph: 7.0,
            organic_matter: 1.5,
            texture: SoilTexture { clay: 30.0, sand: 35.0, silt: 35.0 },
            nitrogen: 1.1,
            classification: "Loam".to_string(),
        };
        (soil, WeatherData::unavailable())
    }

    #[test]
    fn test_records_follow_ranking() {
        let (soil, weather) = site();
        let matches = find_best_matches(&soil, &weather);
        let analysis = SiteAnalysis::from_matches(12.9, 77.6, &soil, &weather, &matches);

        assert_eq!(analysis.results.len(), matches.len());
        for (record, m) in analysis.results.iter().zip(&matches) {
            assert_eq!(record.plant_name, m.plant.name);
            assert_eq!(record.score, m.result.score);
            assert_eq!(record.suitability, m.result.suitability);
            assert_eq!(record.recommendations, m.result.recommendations);
        }
        assert_eq!(analysis.top_match().unwrap().plant_name, matches[0].plant.name);
        assert!(analysis.timestamp > 0);
    }

    #[test]
    fn test_stored_field_names() {
        let (soil, weather) = site();
        let matches = find_best_matches(&soil, &weather);
        let analysis = SiteAnalysis::from_matches(12.9, 77.6, &soil, &weather, &matches)
            .with_site_name("Bengaluru")
            .with_ssi_score(0.72);

        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["site_name"], "Bengaluru");
        assert_eq!(json["ssi_score"], 0.72);
        assert_eq!(json["soilData"]["organicMatter"], 1.5);
        assert_eq!(json["weatherData"]["description"], "Data unavailable");

        let first = &json["results"][0];
        assert!(first["plantName"].is_string());
        assert!(first["score"].is_number());
        assert!(first["suitability"].is_string());
        assert!(first["recommendations"].is_array());
    }

    #[test]
    fn test_optional_fields_omitted() {
        let (soil, weather) = site();
        let analysis = SiteAnalysis::from_matches(0.0, 0.0, &soil, &weather, &[]);
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("site_name").is_none());
        assert!(json.get("ssi_score").is_none());
        assert!(analysis.top_match().is_none());
    }

    #[test]
    fn test_resolve_site_name() {
        assert_eq!(resolve_site_name(Some("Pune, India"), Some("Site 4")), "Pune, India");
        assert_eq!(resolve_site_name(None, Some("Site 4")), "Site 4");
        assert_eq!(resolve_site_name(Some(""), None), UNKNOWN_LOCATION);
        assert_eq!(resolve_site_name(None, None), UNKNOWN_LOCATION);
    }
}
