//! Time series types
//!
//! The statistics source reports history as JSON objects keyed by date
//! (`"M/D/YY"`) in chronological order. `TimeSeries` keeps that order
//! exactly as delivered, so dates never need to be parsed or sorted.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::selection::CaseMetric;

/// Cumulative counts keyed by date, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeSeries {
    entries: Vec<(String, i64)>,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in source order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.entries.iter().map(|(d, v)| (d.as_str(), *v))
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(d, _)| d.as_str())
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<(&str, i64)> {
        self.entries.last().map(|(d, v)| (d.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(d, v)| (d.into(), v)).collect(),
        }
    }
}

impl Serialize for TimeSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (date, value) in &self.entries {
            map.serialize_entry(date, value)?;
        }
        map.end()
    }
}

struct TimeSeriesVisitor;

impl<'de> Visitor<'de> for TimeSeriesVisitor {
    type Value = TimeSeries;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping dates to cumulative counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((date, value)) = access.next_entry::<String, i64>()? {
            entries.push((date, value));
        }
        Ok(TimeSeries { entries })
    }
}

impl<'de> Deserialize<'de> for TimeSeries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TimeSeriesVisitor)
    }
}

/// One series per metric; missing ones are empty
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Timeline {
    #[serde(default)]
    pub cases: TimeSeries,
    #[serde(default)]
    pub deaths: TimeSeries,
    #[serde(default)]
    pub recovered: TimeSeries,
}

impl Timeline {
    pub fn series(&self, metric: CaseMetric) -> &TimeSeries {
        match metric {
            CaseMetric::Cases => &self.cases,
            CaseMetric::Recovered => &self.recovered,
            CaseMetric::Deaths => &self.deaths,
        }
    }
}

/// Historical response in any of the shapes the source returns
///
/// Variant order matters for deserialization: a `message` marker wins over
/// everything, then the nested per-country shape, then the flat global one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum HistoricalPayload {
    /// Error or placeholder response carrying no data
    Message { message: String },
    /// Single-country history, nested under `timeline`
    Country {
        #[serde(default)]
        country: Option<String>,
        timeline: Timeline,
    },
    /// Global history, flat
    Worldwide(Timeline),
}

impl HistoricalPayload {
    pub fn is_message(&self) -> bool {
        matches!(self, HistoricalPayload::Message { .. })
    }
}

/// One plotted point: a date and the change since the previous date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartPoint {
    pub x: String,
    pub y: i64,
}

impl ChartPoint {
    pub fn new(x: impl Into<String>, y: i64) -> Self {
        Self { x: x.into(), y }
    }
}
