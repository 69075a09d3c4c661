//! Point-in-time snapshots
//!
//! A snapshot is the current set of counts for one scope. Every count is
//! optional: the source leaves some of them null, and the absence is kept
//! on the record. Display code decides what an absent count looks like.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::selection::{CaseMetric, LatLng};

/// Counts shared by global and per-country snapshots
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Counts {
    #[serde(default)]
    pub cases: Option<u64>,
    #[serde(default)]
    pub today_cases: Option<u64>,
    #[serde(default)]
    pub recovered: Option<u64>,
    #[serde(default)]
    pub today_recovered: Option<u64>,
    #[serde(default)]
    pub deaths: Option<u64>,
    #[serde(default)]
    pub today_deaths: Option<u64>,
    #[serde(default)]
    pub active: Option<u64>,
    #[serde(default)]
    pub critical: Option<u64>,
    #[serde(default)]
    pub population: Option<u64>,
    /// Source update time, Unix milliseconds
    #[serde(default)]
    pub updated: Option<i64>,
}

impl Counts {
    /// Running total for a metric
    pub fn total(&self, metric: CaseMetric) -> Option<u64> {
        match metric {
            CaseMetric::Cases => self.cases,
            CaseMetric::Recovered => self.recovered,
            CaseMetric::Deaths => self.deaths,
        }
    }

    /// New occurrences reported for the current day
    pub fn today(&self, metric: CaseMetric) -> Option<u64> {
        match metric {
            CaseMetric::Cases => self.today_cases,
            CaseMetric::Recovered => self.today_recovered,
            CaseMetric::Deaths => self.today_deaths,
        }
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated.and_then(DateTime::from_timestamp_millis)
    }
}

/// Current metrics for a single country
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountrySnapshot {
    /// Display name
    pub name: String,
    /// Selector value used to re-query this country
    pub iso_code: String,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub location: Option<LatLng>,
    /// Flag image URL
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(flatten)]
    pub counts: Counts,
}

/// Current metrics for the whole world
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlobalSnapshot {
    #[serde(flatten)]
    pub counts: Counts,
    #[serde(default)]
    pub affected_countries: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts() -> Counts {
        Counts {
            cases: Some(1_000),
            today_cases: Some(12),
            recovered: Some(900),
            today_recovered: None,
            deaths: Some(20),
            today_deaths: Some(1),
            updated: Some(1_700_000_000_000),
            ..Default::default()
        }
    }

    #[test]
    fn test_metric_accessors() {
        let c = counts();
        assert_eq!(c.total(CaseMetric::Cases), Some(1_000));
        assert_eq!(c.total(CaseMetric::Recovered), Some(900));
        assert_eq!(c.today(CaseMetric::Deaths), Some(1));
        assert_eq!(c.today(CaseMetric::Recovered), None);
    }

    #[test]
    fn test_updated_at() {
        let c = counts();
        let at = c.updated_at().unwrap();
        assert_eq!(at.timestamp_millis(), 1_700_000_000_000);

        assert!(Counts::default().updated_at().is_none());
    }

    #[test]
    fn test_country_snapshot_flattens_counts() {
        let snapshot = CountrySnapshot {
            name: "Chile".to_string(),
            iso_code: "CL".to_string(),
            continent: Some("South America".to_string()),
            location: None,
            flag: None,
            counts: counts(),
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["cases"], 1_000);
        assert!(json["today_recovered"].is_null());

        let restored: CountrySnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(restored, snapshot);
    }
}
