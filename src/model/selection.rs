//! Selection types
//!
//! What the user is looking at: which metric (`CaseMetric`) for which
//! scope (`Scope`). Both are plain values; a change of either produces a new
//! `Selection` and a fresh fetch.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::snapshot::CountrySnapshot;

/// Sentinel identifier for the global scope
pub const WORLDWIDE: &str = "worldwide";

/// Map center used for the global scope
pub const WORLD_CENTER: LatLng = LatLng {
    lat: 34.80746,
    lng: -40.4796,
};

/// Zoom level for the global scope
pub const WORLD_ZOOM: u8 = 3;

/// Zoom level when a single country is selected
pub const COUNTRY_ZOOM: u8 = 5;

/// Errors parsing selector values from user input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown metric '{0}' (expected cases, recovered or deaths)")]
    UnknownMetric(String),

    #[error("Empty country identifier")]
    EmptyScope,
}

/// Which sub-series of snapshots and timelines is active
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CaseMetric {
    /// Confirmed cases
    #[default]
    Cases,
    /// Recovered patients
    Recovered,
    /// Deaths
    Deaths,
}

/// Fill and stroke colors for a metric's chart line
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ChartColors {
    pub background: &'static str,
    pub border: &'static str,
}

impl CaseMetric {
    /// All metrics in display order
    pub fn all() -> &'static [CaseMetric] {
        &[CaseMetric::Cases, CaseMetric::Recovered, CaseMetric::Deaths]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseMetric::Cases => "cases",
            CaseMetric::Recovered => "recovered",
            CaseMetric::Deaths => "deaths",
        }
    }

    /// Title shown on the metric's summary tile
    pub fn title(&self) -> &'static str {
        match self {
            CaseMetric::Cases => "Coronavirus Cases",
            CaseMetric::Recovered => "Recovered",
            CaseMetric::Deaths => "Deaths",
        }
    }

    /// Fixed palette, one color pair per metric
    pub fn colors(&self) -> ChartColors {
        match self {
            CaseMetric::Cases => ChartColors {
                background: "rgba(153, 102, 255, 0.2)",
                border: "rgba(153, 102, 255, 1)",
            },
            CaseMetric::Recovered => ChartColors {
                background: "rgba(75, 192, 192, 0.2)",
                border: "rgba(75, 192, 192, 1)",
            },
            CaseMetric::Deaths => ChartColors {
                background: "rgba(255, 99, 132, 0.2)",
                border: "rgba(255, 99, 132, 1)",
            },
        }
    }
}

impl std::fmt::Display for CaseMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseMetric {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cases" => Ok(CaseMetric::Cases),
            "recovered" => Ok(CaseMetric::Recovered),
            "deaths" => Ok(CaseMetric::Deaths),
            other => Err(ParseError::UnknownMetric(other.to_string())),
        }
    }
}

/// Selection granularity: the whole world or one country
///
/// Serialized as the selector value: `"worldwide"` or the country identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Scope {
    #[default]
    Worldwide,
    /// ISO code or name accepted by the statistics source
    Country(String),
}

impl Scope {
    pub fn country(id: impl Into<String>) -> Self {
        Scope::Country(id.into())
    }

    pub fn is_worldwide(&self) -> bool {
        matches!(self, Scope::Worldwide)
    }

    /// Selector value as sent by the dropdown
    pub fn id(&self) -> &str {
        match self {
            Scope::Worldwide => WORLDWIDE,
            Scope::Country(id) => id,
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Scope {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            Err(ParseError::EmptyScope)
        } else if s.eq_ignore_ascii_case(WORLDWIDE) {
            Ok(Scope::Worldwide)
        } else {
            Ok(Scope::Country(s.to_string()))
        }
    }
}

impl From<Scope> for String {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::Worldwide => WORLDWIDE.to_string(),
            Scope::Country(id) => id,
        }
    }
}

impl TryFrom<String> for Scope {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The dashboard's whole selection state
///
/// Replaced, never mutated: every change builds a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub scope: Scope,
    pub metric: CaseMetric,
}

impl Selection {
    pub fn new(scope: Scope, metric: CaseMetric) -> Self {
        Self { scope, metric }
    }

    /// Same metric, different scope
    pub fn with_scope(&self, scope: Scope) -> Self {
        Self {
            scope,
            metric: self.metric,
        }
    }

    /// Same scope, different metric
    pub fn with_metric(&self, metric: CaseMetric) -> Self {
        Self {
            scope: self.scope.clone(),
            metric,
        }
    }
}

/// Geographic coordinate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Map camera for a scope
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
}

impl MapView {
    /// Camera for the global scope
    pub fn world() -> Self {
        Self {
            center: WORLD_CENTER,
            zoom: WORLD_ZOOM,
        }
    }

    /// Camera for a scope; a country without known coordinates gets the world view.
    pub fn for_scope(scope: &Scope, country: Option<&CountrySnapshot>) -> Self {
        match (scope, country.and_then(|c| c.location)) {
            (Scope::Country(_), Some(center)) => Self {
                center,
                zoom: COUNTRY_ZOOM,
            },
            _ => Self::world(),
        }
    }
}
