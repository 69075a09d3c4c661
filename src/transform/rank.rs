//! Table ranking

use std::cmp::Reverse;

use crate::model::{CaseMetric, CountrySnapshot};

/// Order countries by total cases, highest first.
///
/// Countries without a case count go last. Equal counts keep their input
/// order.
pub fn rank(records: &[CountrySnapshot]) -> Vec<CountrySnapshot> {
    rank_by(records, CaseMetric::Cases)
}

/// Order countries by a metric's total, highest first.
pub fn rank_by(records: &[CountrySnapshot], metric: CaseMetric) -> Vec<CountrySnapshot> {
    let mut ranked = records.to_vec();
    // `None < Some(_)`, so reversing the key puts absent counts last.
    // `sort_by_key` is stable.
    ranked.sort_by_key(|r| Reverse(r.counts.total(metric)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Counts;
    use proptest::prelude::*;

    fn country(name: &str, cases: Option<u64>) -> CountrySnapshot {
        CountrySnapshot {
            name: name.to_string(),
            iso_code: name.to_string(),
            continent: None,
            location: None,
            flag: None,
            counts: Counts {
                cases,
                ..Default::default()
            },
        }
    }

    fn names(records: &[CountrySnapshot]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_rank_ties_and_missing() {
        let input = vec![country("A", Some(5)), country("B", None), country("C", Some(5))];
        let ranked = rank(&input);

        assert_eq!(names(&ranked), vec!["A", "C", "B"]);
        // Input untouched
        assert_eq!(names(&input), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_rank_descending() {
        let input = vec![
            country("low", Some(1)),
            country("high", Some(1_000_000)),
            country("none", None),
            country("mid", Some(500)),
            country("zero", Some(0)),
        ];
        let ranked = rank(&input);

        assert_eq!(names(&ranked), vec!["high", "mid", "low", "zero", "none"]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(&[]).is_empty());
    }

    #[test]
    fn test_rank_by_deaths() {
        let mut a = country("A", Some(10));
        a.counts.deaths = Some(1);
        let mut b = country("B", Some(5));
        b.counts.deaths = Some(3);
        let c = country("C", Some(50));

        let ranked = rank_by(&[a, b, c], CaseMetric::Deaths);
        assert_eq!(names(&ranked), vec!["B", "A", "C"]);
    }

    /// Narrow value range so ties are common; about one in five is absent
    fn arb_cases() -> impl Strategy<Value = Vec<Option<u64>>> {
        proptest::collection::vec(prop::option::weighted(0.8, 0u64..6), 0..64)
    }

    fn indexed(cases: &[Option<u64>]) -> Vec<CountrySnapshot> {
        cases
            .iter()
            .enumerate()
            .map(|(i, c)| country(&i.to_string(), *c))
            .collect()
    }

    fn index_of(record: &CountrySnapshot) -> usize {
        record.name.parse().unwrap()
    }

    proptest! {
        #[test]
        fn rank_is_a_permutation(cases in arb_cases()) {
            let input = indexed(&cases);
            let ranked = rank(&input);

            let mut seen: Vec<usize> = ranked.iter().map(index_of).collect();
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..input.len()).collect::<Vec<_>>());
        }

        #[test]
        fn rank_orders_descending_with_absent_last(cases in arb_cases()) {
            let ranked = rank(&indexed(&cases));

            for pair in ranked.windows(2) {
                match (pair[0].counts.cases, pair[1].counts.cases) {
                    (Some(a), Some(b)) => prop_assert!(a >= b),
                    (None, Some(_)) => prop_assert!(false, "absent count ranked above a present one"),
                    _ => {}
                }
            }
        }

        #[test]
        fn rank_keeps_input_order_among_ties(cases in arb_cases()) {
            let ranked = rank(&indexed(&cases));

            for pair in ranked.windows(2) {
                if pair[0].counts.cases == pair[1].counts.cases {
                    prop_assert!(index_of(&pair[0]) < index_of(&pair[1]));
                }
            }
        }

        #[test]
        fn rank_is_idempotent(cases in arb_cases()) {
            let once = rank(&indexed(&cases));
            prop_assert_eq!(rank(&once), once.clone());
        }
    }
}
