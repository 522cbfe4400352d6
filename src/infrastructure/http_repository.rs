// HTTP repository implementation - polls the flood forecast backend
use crate::application::telemetry_repository::TelemetryRepository;
use crate::domain::reading;
use crate::domain::telemetry::ForecastFeed;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Fetch failures, per class. All three degrade the same way upstream:
/// log and keep the previous telemetry snapshot.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("backend returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response body: {0}")]
    Body(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct HttpTelemetryRepository {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ForecastBody {
    forecast_10min: Option<f64>,
    timestamp_10min: Option<String>,
    forecast_30min: Option<f64>,
    timestamp_30min: Option<String>,
    forecast_60min: Option<f64>,
    timestamp_60min: Option<String>,
}

impl HttpTelemetryRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        response.json::<T>().await.map_err(FetchError::Body)
    }
}

#[async_trait]
impl TelemetryRepository for HttpTelemetryRepository {
    async fn latest_readings(&self) -> Result<Vec<Option<f64>>> {
        // The feed is an ordered array; tolerate non-numeric entries by
        // passing them through as empty slots
        let feeds: Vec<Value> = self
            .get_json("get_latest")
            .await
            .context("fetching latest readings")?;

        Ok(feeds.iter().map(reading::numeric).collect())
    }

    async fn forecast(&self) -> Result<ForecastFeed> {
        let body: ForecastBody = self
            .get_json("forecast_data")
            .await
            .context("fetching forecast")?;

        Ok(ForecastFeed {
            forecast_10min: body.forecast_10min,
            timestamp_10min: body.timestamp_10min,
            forecast_30min: body.forecast_30min,
            timestamp_30min: body.timestamp_30min,
            forecast_60min: body.forecast_60min,
            timestamp_60min: body.timestamp_60min,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let repository = HttpTelemetryRepository::new("http://127.0.0.1:5000/".to_string());
        assert_eq!(repository.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_forecast_body_tolerates_missing_fields() {
        let body: ForecastBody = serde_json::from_str(
            r#"{"forecast_10min": 40.0, "timestamp_10min": "2024-11-03 12:10"}"#,
        )
        .unwrap();

        assert_eq!(body.forecast_10min, Some(40.0));
        assert_eq!(body.forecast_30min, None);
        assert_eq!(body.timestamp_60min, None);
    }
}
