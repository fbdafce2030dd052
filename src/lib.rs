//! Site Scorer Rust Implementation
//!
//! Ranks candidate restoration species against one site's measured soil and
//! weather using a weighted, multi-factor expert system.
//!
//! - `data`: soil and weather measurement records
//! - `knowledge_base`: validated species catalog (default 10 species)
//! - `factors`: pH, texture and climate factor scores (each 0-1)
//! - `advice`: remediation recommendations
//! - `scorer`: composite score, suitability tier, ranking (sequential + Rayon)
//! - `record`: persistence-shaped analysis documents
//! - `sources`: decoders and fallbacks for upstream soil/weather responses

pub mod data;
pub mod knowledge_base;
pub mod factors;
pub mod advice;
pub mod scorer;
pub mod record;
pub mod sources;

// Re-export commonly used types
pub use data::{SoilData, SoilTexture, WeatherData};
pub use knowledge_base::{KnowledgeBase, KnowledgeBaseError, PlantRequirement, WaterNeeds};
pub use scorer::{
    analyze_site, find_best_matches, AnalysisResult, FactorScores, RankedMatch, SiteScorer,
    Suitability,
};
pub use record::{AnalysisRecord, SiteAnalysis};
