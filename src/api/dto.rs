//! Data Transfer Objects
//!
//! Query parameters and response bodies for the API endpoints.

use serde::{Deserialize, Serialize};

use crate::dashboard::{CountryOption, SummaryTile};
use crate::model::{CaseMetric, CountrySnapshot, Selection};

// ============================================
// SELECTION DTOs
// ============================================

/// Query parameters naming a selection; omitted values use the configured defaults
#[derive(Debug, Default, Deserialize)]
pub struct SelectionParams {
    /// `worldwide` or a country identifier
    #[serde(default)]
    pub country: Option<String>,
    /// cases, recovered or deaths
    #[serde(default)]
    pub metric: Option<String>,
}

// ============================================
// COUNTRY DTOs
// ============================================

/// Dropdown options response
#[derive(Debug, Serialize)]
pub struct CountryListResponse {
    pub countries: Vec<CountryOption>,
    pub total: usize,
}

// ============================================
// TABLE DTOs
// ============================================

/// Table query parameters
#[derive(Debug, Default, Deserialize)]
pub struct TableParams {
    /// Metric to rank by (default: the configured default metric)
    #[serde(default)]
    pub metric: Option<String>,
    /// Maximum rows returned
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Ranked table response
#[derive(Debug, Serialize)]
pub struct TableResponse {
    pub metric: CaseMetric,
    pub rows: Vec<CountrySnapshot>,
    /// Countries before `limit` was applied
    pub total: usize,
}

// ============================================
// SUMMARY DTOs
// ============================================

/// Summary tiles response
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub selection: Selection,
    pub tiles: Vec<SummaryTile>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or degraded
    pub status: String,
    /// Statistics source name
    pub source: String,
    /// Source status: ok or error
    pub source_status: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
