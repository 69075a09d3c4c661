//! Number formatting for display
//!
//! Tiles show totals with thousands separators, tooltips show signed daily
//! changes, and chart axes use compact suffixes.

const COMPACT_UNITS: [(f64, &str); 4] = [(1e3, "k"), (1e6, "m"), (1e9, "b"), (1e12, "t")];

/// Adds thousands separators: `1234567` becomes `1,234,567`.
pub fn with_separators(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Tile value: separated digits, or `placeholder` when the source reported nothing.
pub fn pretty_print_stat(value: Option<u64>, placeholder: &str) -> String {
    match value {
        Some(v) => with_separators(v),
        None => placeholder.to_string(),
    }
}

/// Today's count with a leading `+`, or `placeholder` when unreported.
pub fn pretty_print_today(value: Option<u64>, placeholder: &str) -> String {
    match value {
        Some(v) => format!("+{}", with_separators(v)),
        None => placeholder.to_string(),
    }
}

/// Signed daily change for tooltips, e.g. `+1,234` or `-3`.
pub fn format_delta(delta: i64) -> String {
    let sign = if delta < 0 { '-' } else { '+' };
    format!("{}{}", sign, with_separators(delta.unsigned_abs()))
}

/// Compact axis label, e.g. `950`, `15k`, `1.2m`.
pub fn format_compact(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let abs = value.unsigned_abs() as f64;

    if abs < COMPACT_UNITS[0].0 {
        return value.to_string();
    }

    let mut unit = 0;
    while unit + 1 < COMPACT_UNITS.len() && abs >= COMPACT_UNITS[unit + 1].0 {
        unit += 1;
    }

    let (divisor, mut suffix) = COMPACT_UNITS[unit];
    let mut scaled = (abs / divisor * 10.0).round() / 10.0;

    // 999_990 rounds to 1000.0k; promote to the next unit
    if scaled >= 1000.0 && unit + 1 < COMPACT_UNITS.len() {
        scaled /= 1000.0;
        suffix = COMPACT_UNITS[unit + 1].1;
    }

    let number = format!("{:.1}", scaled);
    let number = number.strip_suffix(".0").unwrap_or(&number);
    format!("{}{}{}", sign, number, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_separators() {
        assert_eq!(with_separators(0), "0");
        assert_eq!(with_separators(999), "999");
        assert_eq!(with_separators(1_000), "1,000");
        assert_eq!(with_separators(12_345), "12,345");
        assert_eq!(with_separators(123_456), "123,456");
        assert_eq!(with_separators(1_234_567), "1,234,567");
        assert_eq!(with_separators(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_pretty_print_stat() {
        assert_eq!(pretty_print_stat(Some(1_234_567), "0"), "1,234,567");
        assert_eq!(pretty_print_stat(Some(0), "n/a"), "0");
        assert_eq!(pretty_print_stat(None, "0"), "0");
        assert_eq!(pretty_print_stat(None, "n/a"), "n/a");
    }

    #[test]
    fn test_pretty_print_today_signs_reported_counts_only() {
        assert_eq!(pretty_print_today(Some(0), "n/a"), "+0");
        assert_eq!(pretty_print_today(Some(12_345), "n/a"), "+12,345");
        assert_eq!(pretty_print_today(None, "n/a"), "n/a");
        assert_eq!(pretty_print_today(None, "0"), "0");
    }

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(0), "+0");
        assert_eq!(format_delta(1_234), "+1,234");
        assert_eq!(format_delta(-3), "-3");
        assert_eq!(format_delta(-45_000), "-45,000");
        assert_eq!(format_delta(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(0), "0");
        assert_eq!(format_compact(950), "950");
        assert_eq!(format_compact(-950), "-950");
        assert_eq!(format_compact(1_000), "1k");
        assert_eq!(format_compact(15_000), "15k");
        assert_eq!(format_compact(15_430), "15.4k");
        assert_eq!(format_compact(1_200_000), "1.2m");
        assert_eq!(format_compact(-2_500_000), "-2.5m");
        assert_eq!(format_compact(3_000_000_000), "3b");
        assert_eq!(format_compact(999_990), "1m");
    }
}
