//! Display rules shared by statistics, county cards, axis ticks and tooltips.
//!
//! Every rule renders a missing value as [`PLACEHOLDER`].

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Shown in place of a missing value.
pub const PLACEHOLDER: &str = "--";

/// Values at or above this render with the `M` suffix.
pub const MEGA: f64 = 1_000_000.0;

/// Named formatting rule, referenced by chart specs so that the chart
/// callbacks call back into the same functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatRule {
    Number,
    Money,
    Date,
}

impl FormatRule {
    /// Apply the rule to a numeric value. Dates are epoch milliseconds.
    pub fn format_value(self, value: Option<f64>) -> String {
        match self {
            FormatRule::Number => format_number(value),
            FormatRule::Money => format_money(value),
            FormatRule::Date => match value {
                Some(ms) if ms.is_finite() => format_timestamp_millis(ms as i64),
                _ => PLACEHOLDER.to_string(),
            },
        }
    }
}

/// Round half up and group thousands with commas: `1234.6` → `"1,235"`.
pub fn format_number(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return PLACEHOLDER.to_string();
    };
    let rounded = (value + 0.5).floor();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_thousands(&digits);
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Megascale abbreviation from one million up, grouped integer below it.
pub fn format_money(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        None => PLACEHOLDER.to_string(),
        Some(amount) if amount >= MEGA => format!("{:.1}M", amount / MEGA),
        Some(amount) => format_number(Some(amount)),
    }
}

/// `"2020-03-15"` → `"March 2020"`. Anything after the date part is ignored.
pub fn format_date(value: Option<&str>) -> String {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return PLACEHOLDER.to_string();
    };
    let date_part = value.get(..10).unwrap_or(value);
    match NaiveDate::parse_from_str(date_part, hsnap_data::dates::ISO_FORMAT) {
        Ok(date) => month_year(&date),
        Err(e) => {
            log::warn!("format_date: cannot parse {:?}: {}", value, e);
            PLACEHOLDER.to_string()
        }
    }
}

/// Month and year of a UTC epoch-milliseconds timestamp.
pub fn format_timestamp_millis(ms: i64) -> String {
    match DateTime::from_timestamp_millis(ms) {
        Some(dt) => month_year(&dt.date_naive()),
        None => PLACEHOLDER.to_string(),
    }
}

/// `+2.1%` for growth, `-1.25%` for decline.
pub fn format_percent_change(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        None => PLACEHOLDER.to_string(),
        Some(pct) if pct >= 0.0 => format!("+{}%", plain_number(pct)),
        Some(pct) => format!("{}%", plain_number(pct)),
    }
}

/// A value as written in the source document, without grouping.
pub fn format_plain(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        None => PLACEHOLDER.to_string(),
        Some(v) => plain_number(v),
    }
}

fn month_year(date: &NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

fn plain_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(None), "--");
        assert_eq!(format_number(Some(1234.6)), "1,235");
        assert_eq!(format_number(Some(0.0)), "0");
        assert_eq!(format_number(Some(999.4)), "999");
        assert_eq!(format_number(Some(1_000_000.0)), "1,000,000");
        assert_eq!(format_number(Some(2.5)), "3");
        assert_eq!(format_number(Some(-1234.4)), "-1,234");
        assert_eq!(format_number(Some(f64::NAN)), "--");
    }

    #[test]
    fn test_format_money_boundary() {
        assert_eq!(format_money(None), "--");
        assert_eq!(format_money(Some(1_000_000.0)), "1.0M");
        assert_eq!(format_money(Some(999_999.0)), "999,999");
        assert_eq!(format_money(Some(55_123_456.0)), "55.1M");
        assert_eq!(format_money(Some(302.25)), "302");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2020-03-15")), "March 2020");
        assert_eq!(format_date(Some("2020-03-01")), "March 2020");
        assert_eq!(format_date(Some("1999-12-01T00:00:00")), "December 1999");
        assert_eq!(format_date(None), "--");
        assert_eq!(format_date(Some("")), "--");
        assert_eq!(format_date(Some("soon")), "--");
    }

    #[test]
    fn test_format_timestamp_millis() {
        // 2020-03-01T00:00:00Z
        assert_eq!(format_timestamp_millis(1_583_020_800_000), "March 2020");
        assert_eq!(
            FormatRule::Date.format_value(Some(1_583_020_800_000.0)),
            "March 2020"
        );
    }

    #[test]
    fn test_format_percent_change() {
        assert_eq!(format_percent_change(Some(2.1)), "+2.1%");
        assert_eq!(format_percent_change(Some(0.0)), "+0%");
        assert_eq!(format_percent_change(Some(-1.25)), "-1.25%");
        assert_eq!(format_percent_change(None), "--");
    }

    #[test]
    fn test_rules_dispatch_to_formatters() {
        assert_eq!(FormatRule::Number.format_value(Some(61000.0)), "61,000");
        assert_eq!(FormatRule::Money.format_value(Some(18_361_000.0)), "18.4M");
        assert_eq!(FormatRule::Money.format_value(None), "--");
    }

    #[test]
    fn test_rule_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&FormatRule::Money).unwrap(), "\"money\"");
    }
}
