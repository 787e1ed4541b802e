use serde::{Deserialize, Serialize};

/// Already-resolved conditions for a location. Temperatures are Fahrenheit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temp_f: f64,
    #[serde(default)]
    pub condition: Option<String>,
}

/// Resolves a free-form location to current conditions (geocoding, forecast lookup).
pub trait WeatherProvider: Send + Sync {
    fn current(&self, location: &str) -> Result<WeatherSnapshot, WeatherError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("location '{0}' not found")]
    LocationNotFound(String),
    #[error("weather upstream error: {0}")]
    Upstream(String),
}

/// Stand-in used when no forecast source is configured; every lookup fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWeather;

impl WeatherProvider for NoWeather {
    fn current(&self, location: &str) -> Result<WeatherSnapshot, WeatherError> {
        Err(WeatherError::LocationNotFound(location.to_string()))
    }
}
