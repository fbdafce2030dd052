//! OpenWeatherMap Current Weather Decoding

use super::SourceError;
use crate::data::WeatherData;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    pub main: MainReadings,
    #[serde(default)]
    pub rain: Option<RainVolume>,
    pub clouds: CloudCover,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub humidity: f64,
    pub pressure: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RainVolume {
    #[serde(rename = "1h")]
    pub last_hour: Option<f64>,
    #[serde(rename = "3h")]
    pub last_three_hours: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloudCover {
    pub all: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub description: String,
}

impl RainVolume {
    /// 1h accumulation when non-zero, else 3h, else 0
    pub fn recent(&self) -> f64 {
        self.last_hour
            .filter(|mm| *mm != 0.0)
            .or(self.last_three_hours)
            .unwrap_or(0.0)
    }
}

/// Decode a raw response body (metric units)
pub fn decode(body: &str) -> Result<WeatherData, SourceError> {
    let response: CurrentWeatherResponse = serde_json::from_str(body)?;
    to_weather_data(response)
}

pub fn to_weather_data(response: CurrentWeatherResponse) -> Result<WeatherData, SourceError> {
    let description = response
        .weather
        .into_iter()
        .next()
        .map(|c| c.description)
        .ok_or(SourceError::MissingField("weather[0].description"))?;

    Ok(WeatherData {
        temp: response.main.temp,
        humidity: response.main.humidity,
        rainfall: response.rain.as_ref().map_or(0.0, RainVolume::recent),
        pressure: response.main.pressure,
        clouds: response.clouds.all,
        description,
    })
}
