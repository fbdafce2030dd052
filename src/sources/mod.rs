//! Site Data Sources
//!
//! Pure decoders for the upstream soil and weather responses, plus the
//! fallback values used when a response is missing or unreadable. Fetching
//! happens outside this crate; callers pass the raw response body (if any).

pub mod soilgrids;
pub mod openweather;
pub mod simulated;

use crate::data::{SoilData, WeatherData};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("malformed response JSON")]
    Json(#[from] serde_json::Error),

    #[error("response is missing {0}")]
    MissingField(&'static str),

    #[error("layer '{layer}' has invalid scale factor {d_factor}")]
    InvalidScale { layer: String, d_factor: f64 },
}

/// Decode a SoilGrids body, falling back to simulated soil for this location
pub fn soil_or_simulated(body: Option<&str>, lat: f64, lon: f64) -> SoilData {
    let Some(body) = body else {
        tracing::warn!("No soil response for ({}, {}), using simulated soil", lat, lon);
        return simulated::simulated_soil(lat, lon);
    };

    match soilgrids::decode(body) {
        Ok(soil) => soil,
        Err(e) => {
            tracing::warn!("Failed to decode soil data, using simulated soil: {}", e);
            simulated::simulated_soil(lat, lon)
        }
    }
}

/// Decode an OpenWeatherMap body, falling back to a neutral snapshot
pub fn weather_or_unavailable(body: Option<&str>) -> WeatherData {
    let Some(body) = body else {
        tracing::warn!("No weather response, using default snapshot");
        return WeatherData::unavailable();
    };

    match openweather::decode(body) {
        Ok(weather) => weather,
        Err(e) => {
            tracing::warn!("Failed to decode weather data, using default snapshot: {}", e);
            WeatherData::unavailable()
        }
    }
}
