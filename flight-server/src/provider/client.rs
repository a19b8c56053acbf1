//! Flight-events HTTP client.
//!
//! Queries the external flight-events API for the segments flown on a
//! given date and route. Handles authentication and concurrency capping,
//! and validates the response into domain types before handing it on.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::FlightEvent;
use crate::planner::FlightEventsProvider;

use super::convert::convert_events;
use super::error::ProviderError;
use super::types::FlightEventRecord;

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the flight-events client.
#[derive(Debug, Clone)]
pub struct FlightsApiConfig {
    /// Base URL of the API
    pub base_url: String,
    /// API key for authentication
    pub api_key: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FlightsApiConfig {
    /// Create a new config with the given base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Flight-events API client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct FlightsApiClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl FlightsApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: FlightsApiConfig) -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| ProviderError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert("x-api-key", api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Fetch the raw flight-event records for a date and route.
    async fn fetch(
        &self,
        date: &str,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<FlightEventRecord>, ProviderError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| ProviderError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/flight-events", self.base_url);

        debug!(%url, date, origin, destination, "fetching flight events");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("date", date),
                ("origin", origin),
                ("destination", destination),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ProviderError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ProviderError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl FlightEventsProvider for FlightsApiClient {
    async fn flight_events(
        &self,
        date: &str,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<FlightEvent>, ProviderError> {
        let records = self.fetch(date, origin, destination).await?;
        Ok(convert_events(&records)?)
    }
}
