use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{error::ReportError, model::WeatherSnapshot};

const WEATHERAPI_BASE_URL: &str = "http://api.weatherapi.com/v1";

/// Anything that can resolve a location query to current conditions.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn current(&self, location: &str) -> Result<WeatherSnapshot, ReportError>;
}

/// WeatherAPI.com client for the `current.json` endpoint.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, WEATHERAPI_BASE_URL)
    }

    /// Same client against a different host. Tests point this at a local
    /// mock server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), base_url: base_url.into(), http: Client::new() }
    }
}

#[async_trait]
impl WeatherSource for WeatherApiClient {
    async fn current(&self, location: &str) -> Result<WeatherSnapshot, ReportError> {
        let url = format!("{}/current.json", self.base_url);
        debug!(%location, "requesting current conditions");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", location), ("aqi", "no")])
            .send()
            .await
            .map_err(ReportError::fetch_transport)?;

        let status = res.status();
        let body = res.text().await.map_err(ReportError::fetch_transport)?;

        if !status.is_success() {
            warn!(status = status.as_u16(), %body, "weather provider rejected the request");
            return Err(ReportError::FetchStatus { status: status.as_u16(), body });
        }

        let parsed: CurrentResponse =
            serde_json::from_str(&body).map_err(ReportError::fetch_transport)?;

        Ok(WeatherSnapshot {
            temperature_c: parsed.current.temp_c,
            humidity_pct: parsed.current.humidity,
            condition: parsed.current.condition.text,
            wind_kph: parsed.current.wind_kph,
        })
    }
}

// Only the four paths the snapshot needs; everything else in the payload is
// ignored.
#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temp_c: f64,
    humidity: u8,
    wind_kph: f64,
    condition: ConditionText,
}

#[derive(Debug, Deserialize)]
struct ConditionText {
    text: String,
}
