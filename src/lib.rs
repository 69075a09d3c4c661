//! # Outbreak
//!
//! Pandemic statistics dashboard backend. Pulls current snapshots and
//! cumulative time series from the disease.sh API and turns them into what a
//! dashboard renders: a ranked country table, a daily-change chart, summary
//! tiles and map markers.
//!
//! ## Modules
//!
//! - [`model`]: Snapshots, time series and the user's selection
//! - [`transform`]: Pure ranking, delta and formatting functions
//! - [`source`]: Statistics source trait and the disease.sh client
//! - [`dashboard`]: Fetch orchestration and display-ready views
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use outbreak::config::Config;
//! use outbreak::dashboard::Dashboard;
//! use outbreak::model::{CaseMetric, Scope, Selection};
//! use outbreak::source::DiseaseShClient;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let source = Arc::new(DiseaseShClient::new(config.source.clone())?);
//!     let dashboard = Dashboard::new(source, config.dashboard, config.source.lookback_days);
//!
//!     let selection = Selection::new(Scope::country("DE"), CaseMetric::Deaths);
//!     let chart = dashboard.chart(&selection).await?;
//!
//!     for (point, tooltip) in chart.points.iter().zip(&chart.tooltips) {
//!         println!("{} {}", point.x, tooltip);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod model;
pub mod source;
pub mod transform;

// Re-export top-level types for convenience
pub use model::{
    CaseMetric, ChartPoint, CountrySnapshot, Counts, GlobalSnapshot, HistoricalPayload, MapView,
    Scope, Selection, TimeSeries, Timeline,
};

pub use transform::{format_delta, pretty_print_stat, rank, rank_by, to_deltas, with_separators};

pub use source::{DiseaseShClient, SourceError, SourceResult, StatsSource};

pub use dashboard::{Dashboard, DashboardView};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, DashboardConfig, LoggingConfig, SourceConfig};
