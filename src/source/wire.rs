//! disease.sh wire format
//!
//! JSON shapes as the API sends them (camelCase, country details nested under
//! `countryInfo`) and their conversion into the domain snapshots.

use serde::Deserialize;

use crate::model::{CountrySnapshot, Counts, GlobalSnapshot, LatLng};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireCounts {
    #[serde(default)]
    updated: Option<i64>,
    #[serde(default)]
    cases: Option<i64>,
    #[serde(default)]
    today_cases: Option<i64>,
    #[serde(default)]
    deaths: Option<i64>,
    #[serde(default)]
    today_deaths: Option<i64>,
    #[serde(default)]
    recovered: Option<i64>,
    #[serde(default)]
    today_recovered: Option<i64>,
    #[serde(default)]
    active: Option<i64>,
    #[serde(default)]
    critical: Option<i64>,
    #[serde(default)]
    population: Option<i64>,
}

/// Counts are non-negative; anything else is treated as unreported.
fn count(value: Option<i64>) -> Option<u64> {
    value.and_then(|v| u64::try_from(v).ok())
}

impl From<WireCounts> for Counts {
    fn from(w: WireCounts) -> Self {
        Counts {
            cases: count(w.cases),
            today_cases: count(w.today_cases),
            recovered: count(w.recovered),
            today_recovered: count(w.today_recovered),
            deaths: count(w.deaths),
            today_deaths: count(w.today_deaths),
            active: count(w.active),
            critical: count(w.critical),
            population: count(w.population),
            updated: w.updated,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireGlobal {
    #[serde(flatten)]
    counts: WireCounts,
    #[serde(default)]
    affected_countries: Option<u32>,
}

impl From<WireGlobal> for GlobalSnapshot {
    fn from(w: WireGlobal) -> Self {
        GlobalSnapshot {
            counts: w.counts.into(),
            affected_countries: w.affected_countries,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireCountryInfo {
    #[serde(default)]
    iso2: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    long: Option<f64>,
    #[serde(default)]
    flag: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireCountry {
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    country_info: Option<WireCountryInfo>,
    #[serde(default)]
    continent: Option<String>,
    #[serde(flatten)]
    counts: WireCounts,
}

impl WireCountry {
    /// Domain snapshot, or `None` when the record has no name.
    ///
    /// Some territories have no ISO code; their name doubles as the
    /// selector value since the source accepts names too.
    pub(crate) fn into_snapshot(self) -> Option<CountrySnapshot> {
        let name = self.country.filter(|n| !n.trim().is_empty())?;
        let info = self.country_info.unwrap_or_default();

        let iso_code = info
            .iso2
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| name.clone());

        let location = match (info.lat, info.long) {
            (Some(lat), Some(lng)) => Some(LatLng { lat, lng }),
            _ => None,
        };

        Some(CountrySnapshot {
            name,
            iso_code,
            continent: self.continent,
            location,
            flag: info.flag,
            counts: self.counts.into(),
        })
    }
}
