//! Daily deltas for the line chart
//!
//! The source reports running totals. The chart plots new occurrences per
//! day, so each point is the difference between a date's total and the
//! previous date's total. The first date only seeds the baseline.

use crate::model::{CaseMetric, ChartPoint, HistoricalPayload, Scope, TimeSeries};

/// Daily deltas of one metric for a scope.
///
/// Returns an empty vector when the payload is a `message` response, when
/// its shape does not belong to the scope (flat for worldwide, nested for a
/// country), or when the series has fewer than two entries.
pub fn to_deltas(payload: &HistoricalPayload, scope: &Scope, metric: CaseMetric) -> Vec<ChartPoint> {
    let timeline = match (scope, payload) {
        (_, HistoricalPayload::Message { message }) => {
            tracing::debug!(scope = %scope, message = %message, "Historical payload carries no data");
            return Vec::new();
        }
        (Scope::Worldwide, HistoricalPayload::Worldwide(timeline)) => timeline,
        (Scope::Country(_), HistoricalPayload::Country { timeline, .. }) => timeline,
        _ => {
            tracing::debug!(scope = %scope, "Historical payload shape does not match scope");
            return Vec::new();
        }
    };

    series_deltas(timeline.series(metric))
}

/// Differences between consecutive entries, in series order.
///
/// Negative differences (downward corrections at the source) are kept.
pub fn series_deltas(series: &TimeSeries) -> Vec<ChartPoint> {
    let mut points = Vec::with_capacity(series.len().saturating_sub(1));
    let mut previous: Option<i64> = None;

    for (date, value) in series.iter() {
        if let Some(prev) = previous {
            points.push(ChartPoint::new(date, value.saturating_sub(prev)));
        }
        previous = Some(value);
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Timeline;
    use proptest::prelude::*;

    fn series(entries: &[(&str, i64)]) -> TimeSeries {
        entries.iter().map(|(d, v)| (*d, *v)).collect()
    }

    fn worldwide(cases: TimeSeries) -> HistoricalPayload {
        HistoricalPayload::Worldwide(Timeline {
            cases,
            ..Default::default()
        })
    }

    fn country(cases: TimeSeries) -> HistoricalPayload {
        HistoricalPayload::Country {
            country: Some("Peru".to_string()),
            timeline: Timeline {
                cases,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_positive_and_negative_deltas() {
        let payload = worldwide(series(&[("1/1/21", 10), ("1/2/21", 15), ("1/3/21", 12)]));
        let points = to_deltas(&payload, &Scope::Worldwide, CaseMetric::Cases);

        assert_eq!(
            points,
            vec![ChartPoint::new("1/2/21", 5), ChartPoint::new("1/3/21", -3)]
        );
    }

    #[test]
    fn test_country_scope_reads_nested_timeline() {
        let payload = country(series(&[("3/1/21", 100), ("3/2/21", 130)]));
        let points = to_deltas(&payload, &Scope::country("PE"), CaseMetric::Cases);

        assert_eq!(points, vec![ChartPoint::new("3/2/21", 30)]);
    }

    #[test]
    fn test_selects_metric_series() {
        let payload = HistoricalPayload::Worldwide(Timeline {
            cases: series(&[("1/1/21", 1), ("1/2/21", 2)]),
            deaths: series(&[("1/1/21", 10), ("1/2/21", 40)]),
            recovered: TimeSeries::new(),
        });

        let points = to_deltas(&payload, &Scope::Worldwide, CaseMetric::Deaths);
        assert_eq!(points, vec![ChartPoint::new("1/2/21", 30)]);

        assert!(to_deltas(&payload, &Scope::Worldwide, CaseMetric::Recovered).is_empty());
    }

    #[test]
    fn test_message_payload_yields_nothing() {
        let payload = HistoricalPayload::Message {
            message: "Country not found or doesn't have any historical data".to_string(),
        };

        assert!(to_deltas(&payload, &Scope::country("XX"), CaseMetric::Cases).is_empty());
        assert!(to_deltas(&payload, &Scope::Worldwide, CaseMetric::Cases).is_empty());
    }

    #[test]
    fn test_shape_mismatch_yields_nothing() {
        let flat = worldwide(series(&[("1/1/21", 1), ("1/2/21", 2)]));
        assert!(to_deltas(&flat, &Scope::country("PE"), CaseMetric::Cases).is_empty());

        let nested = country(series(&[("1/1/21", 1), ("1/2/21", 2)]));
        assert!(to_deltas(&nested, &Scope::Worldwide, CaseMetric::Cases).is_empty());
    }

    #[test]
    fn test_short_series() {
        assert!(series_deltas(&TimeSeries::new()).is_empty());
        assert!(series_deltas(&series(&[("1/1/21", 42)])).is_empty());
    }

    #[test]
    fn test_zero_baseline_still_counts() {
        let points = series_deltas(&series(&[("1/1/21", 0), ("1/2/21", 5), ("1/3/21", 5)]));
        assert_eq!(
            points,
            vec![ChartPoint::new("1/2/21", 5), ChartPoint::new("1/3/21", 0)]
        );
    }

    fn arb_series() -> impl Strategy<Value = TimeSeries> {
        // Cumulative counts that may fall as well as rise
        proptest::collection::vec(-1_000_000_000_000i64..1_000_000_000_000, 0..90).prop_map(|values| {
            values
                .into_iter()
                .enumerate()
                .map(|(i, v)| (format!("{}/{}/21", i / 28 + 1, i % 28 + 1), v))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn deltas_drop_only_the_first_entry(input in arb_series()) {
            let points = to_deltas(&worldwide(input.clone()), &Scope::Worldwide, CaseMetric::Cases);

            prop_assert_eq!(points.len(), input.len().saturating_sub(1));
            let xs: Vec<&str> = points.iter().map(|p| p.x.as_str()).collect();
            let expected: Vec<&str> = input.dates().skip(1).collect();
            prop_assert_eq!(xs, expected);
        }

        #[test]
        fn deltas_are_consecutive_differences(input in arb_series()) {
            let values: Vec<i64> = input.iter().map(|(_, v)| v).collect();
            let points = to_deltas(&country(input), &Scope::country("PE"), CaseMetric::Cases);

            for (point, pair) in points.iter().zip(values.windows(2)) {
                prop_assert_eq!(point.y, pair[1] - pair[0]);
            }
        }
    }
}
