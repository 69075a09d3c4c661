//! disease.sh REST API Client
//!
//! HTTP client for the public disease.sh COVID-19 endpoints:
//!
//! - `GET /all` - global snapshot
//! - `GET /countries` - per-country snapshots
//! - `GET /countries/{id}` - one country
//! - `GET /historical/all?lastdays=N` - global history
//! - `GET /historical/{id}?lastdays=N` - one country's history

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::wire::{WireCountry, WireGlobal};
use super::{SourceError, SourceResult, StatsSource};
use crate::config::SourceConfig;
use crate::model::{CountrySnapshot, GlobalSnapshot, HistoricalPayload, Scope};

/// disease.sh API client
pub struct DiseaseShClient {
    client: Client,
    config: SourceConfig,
}

impl DiseaseShClient {
    /// Create a new client with the given configuration
    pub fn new(config: SourceConfig) -> SourceResult<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn country_url(&self, id: &str) -> String {
        self.url(&format!("countries/{}", urlencoding::encode(id)))
    }

    fn historical_url(&self, scope: &Scope, last_days: u32) -> String {
        let target = match scope {
            Scope::Worldwide => "all".to_string(),
            Scope::Country(id) => urlencoding::encode(id).into_owned(),
        };
        self.url(&format!("historical/{}?lastdays={}", target, last_days))
    }

    async fn send(&self, url: &str) -> SourceResult<Response> {
        tracing::debug!(url = %url, "Requesting statistics");

        self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::Timeout
            } else if e.is_connect() {
                SourceError::Unavailable
            } else {
                SourceError::Request(e)
            }
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> SourceResult<T> {
        let response = self.send(url).await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Error for a non-success status, using the body's `message` when present
fn status_error(status: StatusCode, body: &str) -> SourceError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.chars().take(200).collect());

    if status == StatusCode::NOT_FOUND {
        SourceError::NotFound(message)
    } else {
        SourceError::Status {
            status: status.as_u16(),
            message,
        }
    }
}

/// Historical bodies are accepted on 404 when they carry the `message`
/// marker; the dashboard shows that as "no data".
fn parse_historical(status: StatusCode, body: &str) -> SourceResult<HistoricalPayload> {
    if status.is_success() {
        return Ok(serde_json::from_str(body)?);
    }

    if status == StatusCode::NOT_FOUND {
        let parsed = serde_json::from_str::<HistoricalPayload>(body);
        if let Ok(payload @ HistoricalPayload::Message { .. }) = parsed {
            return Ok(payload);
        }
    }

    Err(status_error(status, body))
}

#[async_trait]
impl StatsSource for DiseaseShClient {
    fn name(&self) -> &str {
        "disease.sh"
    }

    async fn global_snapshot(&self) -> SourceResult<GlobalSnapshot> {
        let wire: WireGlobal = self.get_json(&self.url("all")).await?;
        Ok(wire.into())
    }

    async fn countries(&self) -> SourceResult<Vec<CountrySnapshot>> {
        let wire: Vec<WireCountry> = self.get_json(&self.url("countries")).await?;
        let total = wire.len();

        let snapshots: Vec<CountrySnapshot> =
            wire.into_iter().filter_map(WireCountry::into_snapshot).collect();

        if snapshots.len() < total {
            tracing::warn!(
                dropped = total - snapshots.len(),
                "Skipped country records without a name"
            );
        }

        Ok(snapshots)
    }

    async fn country_snapshot(&self, id: &str) -> SourceResult<CountrySnapshot> {
        let wire: WireCountry = self.get_json(&self.country_url(id)).await?;
        wire.into_snapshot()
            .ok_or_else(|| SourceError::NotFound(format!("Country '{}' has no name", id)))
    }

    async fn historical(&self, scope: &Scope, last_days: u32) -> SourceResult<HistoricalPayload> {
        let response = self.send(&self.historical_url(scope, last_days)).await?;
        let status = response.status();
        let body = response.text().await?;

        let payload = parse_historical(status, &body)?;
        if let HistoricalPayload::Message { message } = &payload {
            tracing::info!(scope = %scope, message = %message, "No historical data");
        }

        Ok(payload)
    }
}
