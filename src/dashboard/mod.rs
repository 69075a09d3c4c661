//! Dashboard orchestration
//!
//! Turns a [`Selection`] into display-ready data. Every call fetches fresh
//! data from the [`StatsSource`] and runs the pure transformers on it; no
//! state survives between calls.
//!
//! ```text
//! Selection → fetch (snapshot, countries, history) → rank / to_deltas / format → view
//! ```

pub mod view;

pub use view::{
    ChartData, CountryOption, CurrentSnapshot, DashboardView, MapData, MapMarker, SummaryTile,
    WORLDWIDE_LABEL,
};

use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::model::{CaseMetric, CountrySnapshot, HistoricalPayload, ParseError, Scope, Selection};
use crate::source::{SourceResult, StatsSource};
use crate::transform::rank_by;

/// Fetches and shapes dashboard data
pub struct Dashboard {
    source: Arc<dyn StatsSource>,
    config: DashboardConfig,
    lookback_days: u32,
}

impl Dashboard {
    pub fn new(source: Arc<dyn StatsSource>, config: DashboardConfig, lookback_days: u32) -> Self {
        Self {
            source,
            config,
            lookback_days,
        }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    pub fn placeholder(&self) -> &str {
        &self.config.placeholder
    }

    /// Selection used when a request names neither scope nor metric
    pub fn default_selection(&self) -> Selection {
        Selection::new(
            self.config.default_country.clone(),
            self.config.default_metric,
        )
    }

    /// Build a selection from optional user input, filling in defaults
    pub fn resolve(&self, country: Option<&str>, metric: Option<&str>) -> Result<Selection, ParseError> {
        let defaults = self.default_selection();

        let scope = match country {
            Some(c) => c.parse()?,
            None => defaults.scope,
        };
        let metric = match metric {
            Some(m) => m.parse()?,
            None => defaults.metric,
        };

        Ok(Selection::new(scope, metric))
    }

    /// Current snapshot for a scope
    pub async fn current(&self, scope: &Scope) -> SourceResult<CurrentSnapshot> {
        match scope {
            Scope::Worldwide => Ok(CurrentSnapshot::Worldwide(self.source.global_snapshot().await?)),
            Scope::Country(id) => Ok(CurrentSnapshot::Country(self.source.country_snapshot(id).await?)),
        }
    }

    async fn history(&self, scope: &Scope) -> SourceResult<HistoricalPayload> {
        self.source.historical(scope, self.lookback_days).await
    }

    /// Dropdown options
    pub async fn countries(&self) -> SourceResult<Vec<CountryOption>> {
        let countries = self.source.countries().await?;
        Ok(CountryOption::list(&countries))
    }

    /// Countries ranked by a metric's total; `rank` order for cases
    pub async fn table(&self, metric: CaseMetric) -> SourceResult<Vec<CountrySnapshot>> {
        let countries = self.source.countries().await?;
        Ok(rank_by(&countries, metric))
    }

    /// Chart for a selection, headed by the scope's display name
    pub async fn chart(&self, selection: &Selection) -> SourceResult<ChartData> {
        let (current, payload) = tokio::try_join!(
            self.current(&selection.scope),
            self.history(&selection.scope),
        )?;

        Ok(ChartData::build(selection, current.display_name(), &payload))
    }

    /// Summary tiles for a selection
    pub async fn summary(&self, selection: &Selection) -> SourceResult<Vec<SummaryTile>> {
        let current = self.current(&selection.scope).await?;
        Ok(SummaryTile::build_all(
            current.counts(),
            selection.metric,
            self.placeholder(),
        ))
    }

    /// Map camera and markers for a selection
    pub async fn map(&self, selection: &Selection) -> SourceResult<MapData> {
        let (current, countries) =
            tokio::try_join!(self.current(&selection.scope), self.source.countries())?;

        Ok(MapData::build(
            selection,
            current.country(),
            &countries,
            self.placeholder(),
        ))
    }

    /// Everything for one selection, fetched concurrently
    pub async fn load(&self, selection: Selection) -> SourceResult<DashboardView> {
        tracing::debug!(scope = %selection.scope, metric = %selection.metric, "Loading dashboard");

        let (current, countries, history) = tokio::try_join!(
            self.current(&selection.scope),
            self.source.countries(),
            self.history(&selection.scope),
        )?;

        let view = DashboardView::build(
            selection,
            &current,
            &countries,
            &history,
            self.placeholder(),
        );

        tracing::info!(
            scope = %view.selection.scope,
            metric = %view.selection.metric,
            countries = view.table.len(),
            chart_points = view.chart.points.len(),
            "Dashboard loaded"
        );

        Ok(view)
    }
}
