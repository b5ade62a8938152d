//! Data-quality checks for a loaded `Dataset`.
//!
//! Checks never reject a dataset; they report findings. An `Issue` breaks an
//! invariant the charts rely on (parallel lengths, ordered ISO labels). A
//! `Warning` is suspicious but renderable.

use crate::dates;
use crate::loader::Dataset;
use chrono::NaiveDate;
use std::fmt;

/// Gap between consecutive monthly labels considered a hole in the data.
pub const MAX_GAP_DAYS: i64 = 60;

/// Age of the latest period that triggers a staleness warning.
pub const STALE_AFTER_DAYS: i64 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Issue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    /// Document the finding refers to (`monthly`, `county`, `trends`)
    pub document: &'static str,
    pub message: String,
}

impl Finding {
    fn issue(document: &'static str, message: String) -> Self {
        Self {
            severity: Severity::Issue,
            document,
            message,
        }
    }

    fn warning(document: &'static str, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            document,
            message,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Issue => "issue",
            Severity::Warning => "warning",
        };
        write!(f, "[{}] {}: {}", tag, self.document, self.message)
    }
}

impl Dataset {
    /// Run every check. `today` anchors the staleness check.
    pub fn validate(&self, today: NaiveDate) -> Vec<Finding> {
        let mut findings = Vec::new();

        let monthly = &self.monthly;
        check_labels("monthly", &monthly.labels, &mut findings);
        for (name, series) in monthly.datasets.named() {
            // avgBenefitPerPerson is optional in older documents
            if series.is_empty() && name == "avgBenefitPerPerson" {
                continue;
            }
            check_series("monthly", name, &monthly.labels, series, &mut findings);
        }
        check_currency(&monthly.labels, today, &mut findings);

        let recent = &self.trends.recent_data;
        check_labels("trends", &recent.labels, &mut findings);
        check_series("trends", "households", &recent.labels, &recent.households, &mut findings);
        check_series(
            "trends",
            "avgBenefitPerHousehold",
            &recent.labels,
            &recent.avg_benefit_per_household,
            &mut findings,
        );
        if !recent.persons.is_empty() {
            check_series("trends", "persons", &recent.labels, &recent.persons, &mut findings);
        }

        for county in &self.county.counties {
            if county.persons.total_mismatch() {
                findings.push(Finding::warning(
                    "county",
                    format!("{}: PA + non-PA persons does not match total", county.name),
                ));
            }
            if county.households.total_mismatch() {
                findings.push(Finding::warning(
                    "county",
                    format!("{}: PA + non-PA households does not match total", county.name),
                ));
            }
        }

        findings
    }
}

/// True when any finding is an `Issue`.
pub fn has_issues(findings: &[Finding]) -> bool {
    findings.iter().any(|f| f.severity == Severity::Issue)
}

fn check_labels(document: &'static str, labels: &[String], findings: &mut Vec<Finding>) {
    let invalid = labels.iter().filter(|l| !dates::is_iso_label(l)).count();
    if invalid > 0 {
        findings.push(Finding::issue(
            document,
            format!("{} labels are not ISO dates", invalid),
        ));
    }

    let duplicates = labels.windows(2).filter(|w| w[0] == w[1]).count();
    if duplicates > 0 {
        findings.push(Finding::warning(
            document,
            format!("{} duplicate labels", duplicates),
        ));
    }

    let out_of_order = labels.windows(2).filter(|w| w[0] > w[1]).count();
    if out_of_order > 0 {
        findings.push(Finding::issue(
            document,
            format!("labels are not ascending ({} inversions)", out_of_order),
        ));
    }

    let parsed: Vec<NaiveDate> = labels
        .iter()
        .filter_map(|l| dates::parse_iso(l).ok())
        .collect();
    let gaps = parsed
        .windows(2)
        .filter(|w| (w[1] - w[0]).num_days() > MAX_GAP_DAYS)
        .count();
    if gaps > 0 {
        findings.push(Finding::warning(
            document,
            format!("{} gaps longer than {} days", gaps, MAX_GAP_DAYS),
        ));
    }
}

fn check_series(
    document: &'static str,
    name: &str,
    labels: &[String],
    series: &[Option<f64>],
    findings: &mut Vec<Finding>,
) {
    if series.len() != labels.len() {
        findings.push(Finding::issue(
            document,
            format!(
                "{} has {} values for {} labels",
                name,
                series.len(),
                labels.len()
            ),
        ));
    }

    let negatives = series.iter().flatten().filter(|v| **v < 0.0).count();
    if negatives > 0 {
        findings.push(Finding::warning(
            document,
            format!("{}: {} negative values", name, negatives),
        ));
    }

    let missing = series.iter().filter(|v| v.is_none()).count();
    if missing > 0 {
        findings.push(Finding::warning(
            document,
            format!("{}: {} missing values", name, missing),
        ));
    }
}

fn check_currency(labels: &[String], today: NaiveDate, findings: &mut Vec<Finding>) {
    let Some(latest) = labels.iter().filter_map(|l| dates::parse_iso(l).ok()).max() else {
        findings.push(Finding::issue("monthly", "no periods".to_string()));
        return;
    };
    let days_old = (today - latest).num_days();
    if days_old > 365 {
        findings.push(Finding::warning(
            "monthly",
            format!(
                "data is {:.1} years out of date (latest: {})",
                days_old as f64 / 365.0,
                latest
            ),
        ));
    } else if days_old > STALE_AFTER_DAYS {
        findings.push(Finding::warning(
            "monthly",
            format!("data is {} days out of date (latest: {})", days_old, latest),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_clean_dataset_has_no_findings() {
        let dataset = testing::dataset();
        let findings = dataset.validate(day(1999, 3, 1));
        assert!(findings.is_empty(), "unexpected findings: {:?}", findings);
    }

    #[test]
    fn test_length_mismatch_is_an_issue() {
        let mut dataset = testing::dataset();
        dataset.monthly.datasets.persons.pop();
        let findings = dataset.validate(day(1999, 3, 1));
        assert!(has_issues(&findings));
        assert!(findings
            .iter()
            .any(|f| f.message == "persons has 2 values for 3 labels"));
    }

    #[test]
    fn test_unordered_and_malformed_labels() {
        let mut dataset = testing::dataset();
        dataset.monthly.labels = vec![
            "1999-02-01".to_string(),
            "1999-01-01".to_string(),
            "Feb 1999".to_string(),
        ];
        let findings = dataset.validate(day(1999, 3, 1));
        let issues: Vec<&Finding> = findings
            .iter()
            .filter(|f| f.severity == Severity::Issue)
            .collect();
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn test_gap_and_staleness_warnings() {
        let mut dataset = testing::dataset();
        dataset.monthly.labels[2] = "1999-06-01".to_string();
        let findings = dataset.validate(day(2001, 1, 1));
        assert!(!has_issues(&findings));
        assert!(findings.iter().any(|f| f.message.contains("gaps longer than 60 days")));
        assert!(findings.iter().any(|f| f.message.contains("years out of date")));
    }

    #[test]
    fn test_county_total_mismatch_is_a_warning() {
        let mut dataset = testing::dataset();
        dataset.county.counties[1].persons.total = Some(1.0);
        let findings = dataset.validate(day(1999, 3, 1));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings[0].document, "county");
        assert!(findings[0].message.starts_with("Honolulu"));
    }

    #[test]
    fn test_finding_display() {
        let finding = Finding::issue("monthly", "no periods".to_string());
        assert_eq!(finding.to_string(), "[issue] monthly: no periods");
    }
}
