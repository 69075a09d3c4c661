//! Statistics Source
//!
//! Everything the dashboard knows arrives through [`StatsSource`]: the global
//! snapshot, per-country snapshots and historical series. The production
//! implementation talks to disease.sh; tests plug in an in-memory source.

mod disease_sh;
mod wire;

#[cfg(test)]
pub(crate) mod testing;

pub use disease_sh::DiseaseShClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{CountrySnapshot, GlobalSnapshot, HistoricalPayload, Scope};

/// Remote source of pandemic statistics
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Short name for logs and health output
    fn name(&self) -> &str;

    /// Current global counts
    async fn global_snapshot(&self) -> SourceResult<GlobalSnapshot>;

    /// Current counts for every country, in source order
    async fn countries(&self) -> SourceResult<Vec<CountrySnapshot>>;

    /// Current counts for one country
    async fn country_snapshot(&self, id: &str) -> SourceResult<CountrySnapshot>;

    /// Cumulative history for a scope, bounded to the last `last_days` days.
    ///
    /// A "no data" answer from the source comes back as
    /// `HistoricalPayload::Message`, not as an error.
    async fn historical(&self, scope: &Scope, last_days: u32) -> SourceResult<HistoricalPayload>;
}

/// Errors that can occur when talking to the statistics source
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Statistics source unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Source returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(err.to_string())
    }
}

/// Result type alias for source operations
pub type SourceResult<T> = Result<T, SourceError>;
