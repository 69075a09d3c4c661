//! Outbreak data model
//!
//! Domain types shared by the source adapter, the transformers and the
//! display layer:
//!
//! - **selection**: `CaseMetric`, `Scope`, `Selection` and the map camera
//! - **snapshot**: point-in-time counts for the world or one country
//! - **series**: ordered cumulative time series and chart points

pub mod selection;
pub mod series;
pub mod snapshot;

pub use selection::{CaseMetric, ChartColors, LatLng, MapView, ParseError, Scope, Selection};
pub use series::{ChartPoint, HistoricalPayload, TimeSeries, Timeline};
pub use snapshot::{CountrySnapshot, Counts, GlobalSnapshot};
