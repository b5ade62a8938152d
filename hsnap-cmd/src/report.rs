//! `validate` and `summary`: read a data directory through the same
//! all-or-nothing loader the dashboard uses and report on it.

use crate::fs::{sources_in, FsFetcher};
use chrono::Local;
use hsnap_data::validate::{has_issues, Finding, Severity};
use hsnap_data::Dataset;
use hsnap_view::stats::Statistics;
use log::info;

async fn load_dir(dir: &str) -> anyhow::Result<Dataset> {
    let dataset = hsnap_data::load(&FsFetcher, &sources_in(dir)).await?;
    info!("Loaded documents from {}", dir);
    Ok(dataset)
}

/// One line per finding, then a count of each severity.
pub fn validation_report(findings: &[Finding]) -> Vec<String> {
    let issues = findings
        .iter()
        .filter(|f| f.severity == Severity::Issue)
        .count();
    let warnings = findings.len() - issues;

    let mut lines: Vec<String> = findings.iter().map(|f| f.to_string()).collect();
    if findings.is_empty() {
        lines.push("All checks passed".to_string());
    } else {
        lines.push(format!("{} issues, {} warnings", issues, warnings));
    }
    lines
}

/// Print data-quality findings; fail if any of them is an issue.
pub async fn run_validate(dir: &str) -> anyhow::Result<()> {
    let dataset = load_dir(dir).await?;
    let findings = dataset.validate(Local::now().date_naive());
    for line in validation_report(&findings) {
        println!("{}", line);
    }
    if has_issues(&findings) {
        anyhow::bail!("validation found issues in {}", dir);
    }
    Ok(())
}

/// Headline statistics with the dashboard's formatting.
pub fn summary_lines(dataset: &Dataset) -> Vec<String> {
    let stats = Statistics::from_dataset(dataset);
    let meta = &dataset.metadata;
    let mut lines = vec![
        format!("Persons:            {} ({})", stats.persons, stats.persons_date),
        format!("Households:         {} ({})", stats.households, stats.households_date),
        format!("Avg benefit:        {} {}", stats.benefit, stats.benefit_date),
        format!("Monthly cost:       {} {}", stats.cost, stats.cost_date),
        format!("Average persons:    {}", stats.avg_persons),
        format!("Peak persons:       {} in {}", stats.peak_persons, stats.peak_date),
        format!("Year over year:     {}", stats.yoy_change),
        format!("Pre-COVID average:  {} households", stats.pre_covid_households),
        format!(
            "COVID peak:         {} households in {}",
            stats.peak_covid_households, stats.peak_covid_date
        ),
        format!(
            "COVID increase:     {} ({}%)",
            stats.covid_increase, stats.covid_increase_pct
        ),
        format!("Counties:           {}", dataset.county.counties.len()),
    ];
    if let Some(version) = &meta.data_version {
        lines.push(format!("Data version:       {}", version));
    }
    if let Some(generated) = &meta.generated {
        lines.push(format!("Generated:          {}", generated));
    }
    if let Some(note) = &meta.note {
        lines.push(note.clone());
    }
    lines
}

pub async fn run_summary(dir: &str) -> anyhow::Result<()> {
    let dataset = load_dir(dir).await?;
    for line in summary_lines(&dataset) {
        println!("{}", line);
    }
    Ok(())
}
