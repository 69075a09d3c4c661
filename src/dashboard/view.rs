//! Display-ready views
//!
//! Pure builders from source data to what each widget renders. The
//! `Dashboard` fetches; everything here only reshapes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{
    CaseMetric, ChartColors, ChartPoint, CountrySnapshot, Counts, GlobalSnapshot,
    HistoricalPayload, LatLng, MapView, Scope, Selection,
};
use crate::transform::{format_delta, pretty_print_stat, rank_by, to_deltas};

/// Display name of the global scope
pub const WORLDWIDE_LABEL: &str = "Worldwide";

/// Current snapshot for whichever scope is selected
#[derive(Debug, Clone)]
pub enum CurrentSnapshot {
    Worldwide(GlobalSnapshot),
    Country(CountrySnapshot),
}

impl CurrentSnapshot {
    pub fn counts(&self) -> &Counts {
        match self {
            CurrentSnapshot::Worldwide(g) => &g.counts,
            CurrentSnapshot::Country(c) => &c.counts,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            CurrentSnapshot::Worldwide(_) => WORLDWIDE_LABEL,
            CurrentSnapshot::Country(c) => &c.name,
        }
    }

    pub fn country(&self) -> Option<&CountrySnapshot> {
        match self {
            CurrentSnapshot::Worldwide(_) => None,
            CurrentSnapshot::Country(c) => Some(c),
        }
    }
}

/// Dropdown entry
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CountryOption {
    pub name: String,
    pub value: String,
}

impl CountryOption {
    /// Worldwide first, then countries in source order
    pub fn list(countries: &[CountrySnapshot]) -> Vec<CountryOption> {
        std::iter::once(CountryOption {
            name: WORLDWIDE_LABEL.to_string(),
            value: Scope::Worldwide.id().to_string(),
        })
        .chain(countries.iter().map(|c| CountryOption {
            name: c.name.clone(),
            value: c.iso_code.clone(),
        }))
        .collect()
    }
}

/// One summary tile per metric
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SummaryTile {
    pub metric: CaseMetric,
    pub title: &'static str,
    /// New today, formatted
    pub today: String,
    /// Running total, formatted
    pub total: String,
    /// Whether this tile's metric is the selected one
    pub active: bool,
}

impl SummaryTile {
    pub fn build_all(counts: &Counts, active: CaseMetric, placeholder: &str) -> Vec<SummaryTile> {
        CaseMetric::all()
            .iter()
            .map(|&metric| SummaryTile {
                metric,
                title: metric.title(),
                today: pretty_print_stat(counts.today(metric), placeholder),
                total: pretty_print_stat(counts.total(metric), placeholder),
                active: metric == active,
            })
            .collect()
    }
}

/// Line chart data for one metric and scope
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartData {
    /// Heading, e.g. "Worldwide new cases"
    pub label: String,
    pub metric: CaseMetric,
    pub colors: ChartColors,
    /// Daily deltas; empty means "no data", and the chart is not drawn
    pub points: Vec<ChartPoint>,
    /// Signed tooltip text, one per point
    pub tooltips: Vec<String>,
}

impl ChartData {
    pub fn build(selection: &Selection, scope_name: &str, payload: &HistoricalPayload) -> Self {
        let points = to_deltas(payload, &selection.scope, selection.metric);
        let tooltips = points.iter().map(|p| format_delta(p.y)).collect();

        Self {
            label: format!("{} new {}", scope_name, selection.metric),
            metric: selection.metric,
            colors: selection.metric.colors(),
            points,
            tooltips,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One country on the map
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapMarker {
    pub name: String,
    pub iso_code: String,
    pub location: LatLng,
    pub flag: Option<String>,
    /// Selected metric's total
    pub value: Option<u64>,
    pub tiles: Vec<SummaryTile>,
}

/// Map camera plus markers
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapData {
    pub view: MapView,
    pub metric: CaseMetric,
    pub markers: Vec<MapMarker>,
}

impl MapData {
    /// Countries without coordinates get no marker.
    pub fn build(
        selection: &Selection,
        selected: Option<&CountrySnapshot>,
        countries: &[CountrySnapshot],
        placeholder: &str,
    ) -> Self {
        let markers = countries
            .iter()
            .filter_map(|c| {
                let location = c.location?;
                Some(MapMarker {
                    name: c.name.clone(),
                    iso_code: c.iso_code.clone(),
                    location,
                    flag: c.flag.clone(),
                    value: c.counts.total(selection.metric),
                    tiles: SummaryTile::build_all(&c.counts, selection.metric, placeholder),
                })
            })
            .collect();

        Self {
            view: MapView::for_scope(&selection.scope, selected),
            metric: selection.metric,
            markers,
        }
    }
}

/// Everything the dashboard shows for one selection
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub selection: Selection,
    /// Display name of the selected scope
    pub title: String,
    pub updated: Option<DateTime<Utc>>,
    pub tiles: Vec<SummaryTile>,
    /// Countries ranked by the selected metric's total
    pub table: Vec<CountrySnapshot>,
    pub chart: ChartData,
    pub map: MapData,
    pub countries: Vec<CountryOption>,
}

impl DashboardView {
    pub fn build(
        selection: Selection,
        current: &CurrentSnapshot,
        countries: &[CountrySnapshot],
        history: &HistoricalPayload,
        placeholder: &str,
    ) -> Self {
        let counts = current.counts();

        Self {
            title: current.display_name().to_string(),
            updated: counts.updated_at(),
            tiles: SummaryTile::build_all(counts, selection.metric, placeholder),
            table: rank_by(countries, selection.metric),
            chart: ChartData::build(&selection, current.display_name(), history),
            map: MapData::build(&selection, current.country(), countries, placeholder),
            countries: CountryOption::list(countries),
            selection,
        }
    }
}
