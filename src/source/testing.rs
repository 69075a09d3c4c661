//! In-memory statistics source for tests

use async_trait::async_trait;
use std::collections::HashMap;

use super::{SourceError, SourceResult, StatsSource};
use crate::model::{
    CountrySnapshot, Counts, GlobalSnapshot, HistoricalPayload, LatLng, Scope, TimeSeries,
    Timeline,
};

/// Serves fixed fixtures; unknown countries behave like the real API.
pub(crate) struct StaticSource {
    pub global: GlobalSnapshot,
    pub countries: Vec<CountrySnapshot>,
    pub history: HashMap<String, HistoricalPayload>,
    /// Every call fails with `Unavailable` when set
    pub offline: bool,
}

pub(crate) fn country(name: &str, iso: &str, cases: Option<u64>) -> CountrySnapshot {
    CountrySnapshot {
        name: name.to_string(),
        iso_code: iso.to_string(),
        continent: None,
        location: Some(LatLng { lat: 10.0, lng: 20.0 }),
        flag: None,
        counts: Counts {
            cases,
            today_cases: cases.map(|c| c / 100),
            deaths: cases.map(|c| c / 50),
            recovered: cases.map(|c| c / 2),
            ..Default::default()
        },
    }
}

fn series(entries: &[(&str, i64)]) -> TimeSeries {
    entries.iter().map(|(d, v)| (*d, *v)).collect()
}

impl StaticSource {
    /// Three countries, a worldwide history and a history for "B"
    pub(crate) fn sample() -> Self {
        let countries = vec![
            country("Alpha", "A", Some(5)),
            country("Beta", "B", None),
            country("Gamma", "C", Some(5_000)),
        ];

        let global = GlobalSnapshot {
            counts: Counts {
                cases: Some(1_234_567),
                today_cases: Some(890),
                deaths: Some(4_321),
                today_deaths: None,
                recovered: Some(1_000_000),
                today_recovered: Some(12),
                ..Default::default()
            },
            affected_countries: Some(3),
        };

        let mut history = HashMap::new();
        history.insert(
            "worldwide".to_string(),
            HistoricalPayload::Worldwide(Timeline {
                cases: series(&[("1/1/21", 10), ("1/2/21", 15), ("1/3/21", 12)]),
                deaths: series(&[("1/1/21", 1), ("1/2/21", 2), ("1/3/21", 4)]),
                recovered: series(&[("1/1/21", 0)]),
            }),
        );
        history.insert(
            "B".to_string(),
            HistoricalPayload::Country {
                country: Some("Beta".to_string()),
                timeline: Timeline {
                    cases: series(&[("2/1/21", 100), ("2/2/21", 130)]),
                    ..Default::default()
                },
            },
        );

        Self {
            global,
            countries,
            history,
            offline: false,
        }
    }

    fn check_online(&self) -> SourceResult<()> {
        if self.offline {
            Err(SourceError::Unavailable)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl StatsSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn global_snapshot(&self) -> SourceResult<GlobalSnapshot> {
        self.check_online()?;
        Ok(self.global.clone())
    }

    async fn countries(&self) -> SourceResult<Vec<CountrySnapshot>> {
        self.check_online()?;
        Ok(self.countries.clone())
    }

    async fn country_snapshot(&self, id: &str) -> SourceResult<CountrySnapshot> {
        self.check_online()?;
        self.countries
            .iter()
            .find(|c| c.iso_code.eq_ignore_ascii_case(id))
            .cloned()
            .ok_or_else(|| SourceError::NotFound("Country not found or doesn't have any cases".into()))
    }

    async fn historical(&self, scope: &Scope, _last_days: u32) -> SourceResult<HistoricalPayload> {
        self.check_online()?;
        Ok(self
            .history
            .get(scope.id())
            .cloned()
            .unwrap_or_else(|| HistoricalPayload::Message {
                message: "Country not found or doesn't have any historical data".to_string(),
            }))
    }
}
