// Rank the species catalog for one site and print the analysis document.
//
// Usage: rank_site <lat> <lon> [soilgrids_response.json] [openweather_response.json]
//
// Missing or unreadable responses fall back to simulated soil / a neutral
// weather snapshot, so the command always produces a ranking.

use anyhow::{bail, Context, Result};
use site_scorer_rust::record::resolve_site_name;
use site_scorer_rust::sources::{soil_or_simulated, weather_or_unavailable};
use site_scorer_rust::{KnowledgeBase, SiteAnalysis, SiteScorer};
use std::fs;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn read_optional(path: Option<&String>) -> Result<Option<String>> {
    match path {
        Some(p) => fs::read_to_string(p)
            .map(Some)
            .with_context(|| format!("Failed to read response file: {}", p)),
        None => Ok(None),
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "site_scorer_rust=info,rank_site=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        bail!("Usage: {} <lat> <lon> [soilgrids.json] [openweather.json]", args[0]);
    }

    let lat: f64 = args[1].parse().with_context(|| format!("Invalid latitude: {}", args[1]))?;
    let lon: f64 = args[2].parse().with_context(|| format!("Invalid longitude: {}", args[2]))?;

    // Configuration from environment variables
    let knowledge_base_path = std::env::var("KNOWLEDGE_BASE_PATH").ok();
    let site_name = std::env::var("SITE_NAME").ok();
    let ssi_score: Option<f64> = std::env::var("SSI_SCORE").ok().and_then(|s| s.parse().ok());
    let parallel = std::env::var("PARALLEL").map(|v| v == "1").unwrap_or(false);

    tracing::info!("Configuration:");
    tracing::info!("  KNOWLEDGE_BASE_PATH: {}", knowledge_base_path.as_deref().unwrap_or("(built-in)"));
    tracing::info!("  PARALLEL: {}", parallel);

    let knowledge_base = match &knowledge_base_path {
        Some(path) => KnowledgeBase::load(Path::new(path))
            .with_context(|| format!("Failed to load knowledge base: {}", path))?,
        None => KnowledgeBase::default_catalog(),
    };
    let scorer = SiteScorer::new(knowledge_base);

    let soil_body = read_optional(args.get(3))?;
    let weather_body = read_optional(args.get(4))?;

    let soil = soil_or_simulated(soil_body.as_deref(), lat, lon);
    let weather = weather_or_unavailable(weather_body.as_deref());

    let matches = if parallel {
        scorer.find_best_matches_parallel(&soil, &weather)
    } else {
        scorer.find_best_matches(&soil, &weather)
    };

    let mut analysis = SiteAnalysis::from_matches(lat, lon, &soil, &weather, &matches)
        .with_site_name(resolve_site_name(site_name.as_deref(), None));
    if let Some(ssi) = ssi_score {
        analysis = analysis.with_ssi_score(ssi);
    }

    if let Some(top) = analysis.top_match() {
        tracing::info!(
            "Best match for ({}, {}): {} ({:.2}, {})",
            lat,
            lon,
            top.plant_name,
            top.score,
            top.suitability
        );
    }

    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}
