//! SoilGrids v2 Response Decoding
//!
//! Converts a `properties/query` response into `SoilData`. Each property is
//! averaged over the queried topsoil depths and rescaled by the layer's
//! `d_factor` (e.g. pH 70 → 7.0).

use super::SourceError;
use crate::data::{classify_texture, SoilData, SoilTexture};
use serde::Deserialize;

pub const QUERY_ENDPOINT: &str = "https://rest.isric.org/soilgrids/v2.0/properties/query";

/// Properties requested for topsoil analysis
pub const PROPERTIES: [&str; 5] = ["phh2o", "clay", "sand", "soc", "nitrogen"];

/// Topsoil depths averaged together
pub const DEPTHS: [&str; 2] = ["0-5cm", "5-15cm"];

/// Van Bemmelen factor (organic carbon → organic matter)
const VAN_BEMMELEN: f64 = 1.72;

#[derive(Debug, Clone, Deserialize)]
pub struct SoilGridsResponse {
    pub properties: LayerSet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayerSet {
    pub layers: Vec<SoilGridLayer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SoilGridLayer {
    pub name: String,
    pub unit_measure: UnitMeasure,
    pub depths: Vec<DepthValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnitMeasure {
    pub d_factor: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DepthValue {
    #[serde(default)]
    pub label: Option<String>,
    pub values: DepthStatistics,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DepthStatistics {
    /// Null where SoilGrids has no prediction (water, urban areas)
    pub mean: Option<f64>,
}

/// Query string for one location
pub fn query_url(lat: f64, lon: f64) -> String {
    let mut url = format!("{}?lat={}&lon={}", QUERY_ENDPOINT, lat, lon);
    for property in PROPERTIES {
        url.push_str("&property=");
        url.push_str(property);
    }
    for depth in DEPTHS {
        url.push_str("&depth=");
        url.push_str(depth);
    }
    url.push_str("&value=mean");
    url
}

/// Decode a raw response body
pub fn decode(body: &str) -> Result<SoilData, SourceError> {
    let response: SoilGridsResponse = serde_json::from_str(body)?;
    to_soil_data(&response)
}

/// Convert a parsed response into site soil measurements
///
/// Missing layers read as 0. Organic matter % = (SOC g/kg / 10) × 1.72,
/// nitrogen cg/kg → g/kg, silt is the remainder of clay and sand.
pub fn to_soil_data(response: &SoilGridsResponse) -> Result<SoilData, SourceError> {
    let layers = &response.properties.layers;

    let ph = layer_mean(layers, "phh2o")?;
    let clay = layer_mean(layers, "clay")?;
    let sand = layer_mean(layers, "sand")?;
    let soc = layer_mean(layers, "soc")?;
    let nitrogen = layer_mean(layers, "nitrogen")?;

    let texture = SoilTexture {
        clay,
        sand,
        silt: 100.0 - (clay + sand),
    };

    Ok(SoilData {
        ph,
        organic_matter: (soc / 10.0) * VAN_BEMMELEN,
        texture,
        nitrogen: nitrogen / 10.0,
        classification: classify_texture(&texture).to_string(),
    })
}

/// Depth-averaged mean for a property, divided by its scale factor
fn layer_mean(layers: &[SoilGridLayer], property: &str) -> Result<f64, SourceError> {
    let Some(layer) = layers.iter().find(|l| l.name == property) else {
        return Ok(0.0);
    };

    if layer.depths.is_empty() {
        return Ok(0.0);
    }

    let d_factor = layer.unit_measure.d_factor;
    if !d_factor.is_finite() || d_factor == 0.0 {
        return Err(SourceError::InvalidScale {
            layer: layer.name.clone(),
            d_factor,
        });
    }

    let sum: f64 = layer.depths.iter().map(|d| d.values.mean.unwrap_or(0.0)).sum();
    let avg = sum / layer.depths.len() as f64;
    Ok(avg / d_factor)
}
