//! Build the four dashboard documents from the upstream spreadsheets.
//!
//! Inputs are the statewide monthly CSV (`Date, Household, Persons,
//! Per Household, Per Person, Cost`) and the county bi-annual CSV. Counts
//! are truncated toward zero; benefit averages and percentages are rounded
//! to two decimals.

use anyhow::Context;
use chrono::{Local, NaiveDate};
use hsnap_data::county::{Breakdown, CountyRecord, CountyTimeSeries, StateTotal};
use hsnap_data::dates::{format_iso, parse_csv_date, parse_iso};
use hsnap_data::monthly::{
    Averages, Change, MonthlyDatasets, MonthlyMetadata, MonthlySummary, Peak, Peaks, YearOverYear,
};
use hsnap_data::trends::{CovidImpact, PeakIncrease, PeriodAggregate, Periods, RecentData};
use hsnap_data::{CountySnapshot, Metadata, MonthlySeries, TrendsSummary};
use hsnap_view::format::{format_date, format_number};
use log::info;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// First month of the recent window used for the COVID comparison.
pub const RECENT_START: &str = "2019-01-01";
/// Months before this are the pre-COVID baseline.
pub const COVID_START: &str = "2020-03-01";
/// The COVID peak is searched in `[PEAK_WINDOW_START, PEAK_WINDOW_END)`.
pub const PEAK_WINDOW_START: &str = "2021-01-01";
pub const PEAK_WINDOW_END: &str = "2021-09-01";

#[derive(Debug, Deserialize)]
struct RawMonthlyRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Household")]
    households: Option<f64>,
    #[serde(rename = "Persons")]
    persons: Option<f64>,
    #[serde(rename = "Per Household")]
    per_household: Option<f64>,
    #[serde(rename = "Per Person")]
    per_person: Option<f64>,
    #[serde(rename = "Cost")]
    cost: Option<f64>,
}

/// One statewide month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRow {
    pub date: NaiveDate,
    pub households: Option<f64>,
    pub persons: Option<f64>,
    pub per_household: Option<f64>,
    pub per_person: Option<f64>,
    pub cost: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawCountyRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "County")]
    county: String,
    #[serde(rename = "FIPS", default)]
    fips: Option<String>,
    #[serde(rename = "SNAP All Persons Public Assistance Participation")]
    persons_pa: Option<f64>,
    #[serde(rename = "SNAP All Persons Non-Public Assistance Participation")]
    persons_non_pa: Option<f64>,
    #[serde(rename = "Calc: SNAP Total PA and Non-PA People")]
    persons_total: Option<f64>,
    #[serde(rename = "SNAP All Households Public Assistance Participation")]
    households_pa: Option<f64>,
    #[serde(rename = "SNAP All Households Non-Public Assistance Participation")]
    households_non_pa: Option<f64>,
    #[serde(rename = "Calc: SNAP Total PA and Non-PA Households")]
    households_total: Option<f64>,
    #[serde(rename = "SNAP All Total Actual PA & Non-PA Issuance")]
    issuance: Option<f64>,
}

/// One county on one reporting date.
#[derive(Debug, Clone, PartialEq)]
pub struct CountyRow {
    pub date: NaiveDate,
    pub county: String,
    pub fips: Option<String>,
    pub persons: Breakdown,
    pub households: Breakdown,
    pub issuance: Option<f64>,
}

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input)
}

/// Parse the statewide monthly CSV, sorted by date.
pub fn read_monthly<R: Read>(input: R) -> anyhow::Result<Vec<MonthlyRow>> {
    let mut rows = Vec::new();
    for (i, result) in reader(input).deserialize::<RawMonthlyRow>().enumerate() {
        let raw = result.with_context(|| format!("monthly row {}", i + 1))?;
        rows.push(MonthlyRow {
            date: parse_csv_date(&raw.date).with_context(|| format!("monthly row {}", i + 1))?,
            households: raw.households,
            persons: raw.persons,
            per_household: raw.per_household,
            per_person: raw.per_person,
            cost: raw.cost,
        });
    }
    rows.sort_by_key(|r| r.date);
    Ok(rows)
}

/// Parse the county bi-annual CSV, keeping file order.
pub fn read_county<R: Read>(input: R) -> anyhow::Result<Vec<CountyRow>> {
    let mut rows = Vec::new();
    for (i, result) in reader(input).deserialize::<RawCountyRow>().enumerate() {
        let raw = result.with_context(|| format!("county row {}", i + 1))?;
        rows.push(CountyRow {
            date: parse_csv_date(&raw.date).with_context(|| format!("county row {}", i + 1))?,
            county: raw.county,
            fips: raw.fips.filter(|f| !f.is_empty()),
            persons: Breakdown {
                public_assistance: truncate(raw.persons_pa),
                non_public_assistance: truncate(raw.persons_non_pa),
                total: truncate(raw.persons_total),
            },
            households: Breakdown {
                public_assistance: truncate(raw.households_pa),
                non_public_assistance: truncate(raw.households_non_pa),
                total: truncate(raw.households_total),
            },
            issuance: truncate(raw.issuance),
        });
    }
    Ok(rows)
}

fn truncate(value: Option<f64>) -> Option<f64> {
    value.map(f64::trunc)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn mean(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let (sum, count) = values
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Largest value and the date of its first occurrence.
fn max_with_date<'a, I>(rows: I, field: fn(&MonthlyRow) -> Option<f64>) -> Option<(f64, NaiveDate)>
where
    I: IntoIterator<Item = &'a MonthlyRow>,
{
    let mut best: Option<(f64, NaiveDate)> = None;
    for row in rows {
        if let Some(v) = field(row) {
            if best.map_or(true, |(b, _)| v > b) {
                best = Some((v, row.date));
            }
        }
    }
    best
}

fn peak(rows: &[MonthlyRow], field: fn(&MonthlyRow) -> Option<f64>, truncated: bool) -> Peak {
    match max_with_date(rows, field) {
        Some((value, at)) => Peak {
            value: Some(if truncated { value.trunc() } else { value }),
            date: Some(format_iso(&at)),
        },
        None => Peak::default(),
    }
}

fn change(latest: Option<f64>, year_ago: Option<f64>) -> Change {
    let diff = latest.zip(year_ago).map(|(l, y)| l - y);
    Change {
        current: truncate(latest),
        year_ago: truncate(year_ago),
        change: truncate(diff),
        percent_change: diff
            .zip(year_ago)
            .filter(|(_, y)| *y != 0.0)
            .map(|(d, y)| round2(d / y * 100.0)),
    }
}

/// The monthly document: series, latest values, peaks, means and
/// year-over-year change against the row twelve months back.
pub fn monthly_series(rows: &[MonthlyRow]) -> anyhow::Result<MonthlySeries> {
    let (Some(first), Some(latest)) = (rows.first(), rows.last()) else {
        anyhow::bail!("monthly CSV has no rows");
    };
    let year_ago = &rows[rows.len().saturating_sub(13)];

    let column = |field: fn(&MonthlyRow) -> Option<f64>| rows.iter().map(field).collect::<Vec<_>>();

    Ok(MonthlySeries {
        labels: rows.iter().map(|r| format_iso(&r.date)).collect(),
        datasets: MonthlyDatasets {
            households: column(|r| r.households),
            persons: column(|r| r.persons),
            avg_benefit_per_household: column(|r| r.per_household),
            avg_benefit_per_person: column(|r| r.per_person),
            total_cost: column(|r| r.cost),
        },
        metadata: MonthlyMetadata {
            start_date: Some(format_iso(&first.date)),
            end_date: Some(format_iso(&latest.date)),
            total_months: Some(rows.len() as u32),
            latest_households: truncate(latest.households),
            latest_persons: truncate(latest.persons),
            latest_avg_benefit_per_household: latest.per_household,
            latest_avg_benefit_per_person: latest.per_person,
            latest_total_cost: truncate(latest.cost),
        },
        summary: MonthlySummary {
            peak: Peaks {
                households: peak(rows, |r| r.households, true),
                persons: peak(rows, |r| r.persons, true),
                avg_benefit_per_household: peak(rows, |r| r.per_household, false),
                total_cost: peak(rows, |r| r.cost, true),
            },
            averages: Averages {
                households: truncate(mean(rows.iter().map(|r| r.households))),
                persons: truncate(mean(rows.iter().map(|r| r.persons))),
                avg_benefit_per_household: mean(rows.iter().map(|r| r.per_household)).map(round2),
                avg_benefit_per_person: mean(rows.iter().map(|r| r.per_person)).map(round2),
                total_cost: truncate(mean(rows.iter().map(|r| r.cost))),
            },
        },
        year_over_year: YearOverYear {
            households: change(latest.households, year_ago.households),
            persons: change(latest.persons, year_ago.persons),
        },
    })
}

fn fips_value(fips: Option<&str>) -> Option<serde_json::Value> {
    fips.map(|f| match f.parse::<i64>() {
        Ok(n) => serde_json::Value::from(n),
        Err(_) => serde_json::Value::from(f),
    })
}

/// The county document: the latest reporting date's rows, their totals and
/// every county's history.
pub fn county_snapshot(rows: &[CountyRow]) -> anyhow::Result<CountySnapshot> {
    let Some(latest_date) = rows.iter().map(|r| r.date).max() else {
        anyhow::bail!("county CSV has no rows");
    };
    let latest: Vec<&CountyRow> = rows.iter().filter(|r| r.date == latest_date).collect();

    let counties: Vec<CountyRecord> = latest
        .iter()
        .map(|row| CountyRecord {
            name: row.county.clone(),
            fips: fips_value(row.fips.as_deref()),
            persons: row.persons.clone(),
            households: row.households.clone(),
            total_issuance: row.issuance,
        })
        .collect();

    let sum = |field: fn(&CountyRecord) -> Option<f64>| -> f64 {
        counties.iter().filter_map(field).sum()
    };
    let state_total = StateTotal {
        persons: sum(|c| c.persons.total),
        households: sum(|c| c.households.total),
        total_issuance: sum(|c| c.total_issuance),
    };

    let mut time_series = BTreeMap::new();
    for row in &latest {
        if time_series.contains_key(&row.county) {
            continue;
        }
        let mut history: Vec<&CountyRow> = rows.iter().filter(|r| r.county == row.county).collect();
        history.sort_by_key(|r| r.date);
        time_series.insert(
            row.county.clone(),
            CountyTimeSeries {
                dates: history.iter().map(|r| format_iso(&r.date)).collect(),
                persons: history.iter().map(|r| r.persons.total).collect(),
                households: history.iter().map(|r| r.households.total).collect(),
            },
        );
    }

    Ok(CountySnapshot {
        as_of_date: Some(format_iso(&latest_date)),
        counties,
        state_total: Some(state_total),
        time_series,
    })
}

/// The trends document: pre-COVID baseline, COVID peak, latest month and
/// the recent window plotted on the COVID chart.
pub fn trends_summary(rows: &[MonthlyRow]) -> anyhow::Result<TrendsSummary> {
    let recent_start = parse_iso(RECENT_START)?;
    let covid_start = parse_iso(COVID_START)?;
    let window_start = parse_iso(PEAK_WINDOW_START)?;
    let window_end = parse_iso(PEAK_WINDOW_END)?;

    let recent: Vec<&MonthlyRow> = rows.iter().filter(|r| r.date >= recent_start).collect();
    let Some(latest) = recent.last() else {
        anyhow::bail!("no monthly rows on or after {}", RECENT_START);
    };
    let pre_covid: Vec<&MonthlyRow> = recent
        .iter()
        .copied()
        .filter(|r| r.date < covid_start)
        .collect();
    let peak_window: Vec<&MonthlyRow> = recent
        .iter()
        .copied()
        .filter(|r| r.date >= window_start && r.date < window_end)
        .collect();
    if pre_covid.is_empty() || peak_window.is_empty() {
        log::warn!("prepare: pre-COVID or peak window has no rows, COVID figures left empty");
    }

    let baseline_households = mean(pre_covid.iter().map(|r| r.households));
    let baseline_persons = mean(pre_covid.iter().map(|r| r.persons));
    let peak_households = max_with_date(peak_window.iter().copied(), |r| r.households);
    let peak_persons = max_with_date(peak_window.iter().copied(), |r| r.persons).map(|(v, _)| v);
    let peak_benefit = max_with_date(peak_window.iter().copied(), |r| r.per_household).map(|(v, _)| v);

    let increase = |peak: Option<f64>, base: Option<f64>| peak.zip(base).map(|(p, b)| p - b);
    let percent = |peak: Option<f64>, base: Option<f64>| {
        peak.zip(base)
            .filter(|(_, b)| *b != 0.0)
            .map(|(p, b)| round2((p - b) / b * 100.0))
    };
    let peak_households_value = peak_households.map(|(v, _)| v);

    Ok(TrendsSummary {
        periods: Periods {
            pre_covid_avg: PeriodAggregate {
                households: truncate(baseline_households),
                persons: truncate(baseline_persons),
                avg_benefit_per_household: mean(pre_covid.iter().map(|r| r.per_household)).map(round2),
                date: None,
            },
            covid_peak: PeriodAggregate {
                households: truncate(peak_households_value),
                persons: truncate(peak_persons),
                avg_benefit_per_household: peak_benefit.map(round2),
                date: peak_households.map(|(_, at)| format_iso(&at)),
            },
            latest: PeriodAggregate {
                households: truncate(latest.households),
                persons: truncate(latest.persons),
                avg_benefit_per_household: latest.per_household.map(round2),
                date: Some(format_iso(&latest.date)),
            },
        },
        covid_impact: CovidImpact {
            peak_increase: PeakIncrease {
                households: truncate(increase(peak_households_value, baseline_households)),
                households_percent: percent(peak_households_value, baseline_households),
                persons: truncate(increase(peak_persons, baseline_persons)),
                persons_percent: percent(peak_persons, baseline_persons),
            },
        },
        recent_data: RecentData {
            labels: recent.iter().map(|r| format_iso(&r.date)).collect(),
            households: recent.iter().map(|r| r.households).collect(),
            persons: recent.iter().map(|r| r.persons).collect(),
            avg_benefit_per_household: recent.iter().map(|r| r.per_household).collect(),
        },
    })
}

/// The metadata document, summarising the monthly coverage.
pub fn metadata(monthly: &MonthlySeries, data_version: &str, generated: &str) -> anyhow::Result<Metadata> {
    let sources = [
        ("monthly", "USDA FNS SNAP Data Tables"),
        ("county", "USDA FNS Bi-Annual County Data"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    Ok(Metadata {
        generated: Some(generated.to_string()),
        data_version: Some(data_version.to_string()),
        note: Some(format!(
            "Data current through {}.",
            format_date(monthly.metadata.end_date.as_deref())
        )),
        sources,
        summary: serde_json::to_value(&monthly.metadata)?,
    })
}

async fn write_json<T: serde::Serialize>(dir: &Path, name: &str, document: &T) -> anyhow::Result<()> {
    let path = dir.join(name);
    let body = serde_json::to_string_pretty(document)?;
    tokio::fs::write(&path, body)
        .await
        .with_context(|| format!("writing {}", path.display()))?;
    info!("Saved {}", path.display());
    Ok(())
}

/// Read both spreadsheets and write `monthly.json`, `county.json`,
/// `trends.json` and `metadata.json` into `out_dir`.
pub async fn run_prepare(
    monthly_csv: &str,
    county_csv: &str,
    out_dir: &str,
    data_version: &str,
) -> anyhow::Result<()> {
    let monthly_text = tokio::fs::read_to_string(monthly_csv)
        .await
        .with_context(|| format!("reading {}", monthly_csv))?;
    let county_text = tokio::fs::read_to_string(county_csv)
        .await
        .with_context(|| format!("reading {}", county_csv))?;

    let monthly_rows = read_monthly(monthly_text.as_bytes())?;
    let county_rows = read_county(county_text.as_bytes())?;
    info!(
        "Read {} monthly rows and {} county rows",
        monthly_rows.len(),
        county_rows.len()
    );

    let monthly = monthly_series(&monthly_rows)?;
    let county = county_snapshot(&county_rows)?;
    let trends = trends_summary(&monthly_rows)?;
    let generated = Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S").to_string();
    let meta = metadata(&monthly, data_version, &generated)?;

    let out = Path::new(out_dir);
    tokio::fs::create_dir_all(out)
        .await
        .with_context(|| format!("creating {}", out.display()))?;
    write_json(out, "monthly.json", &monthly).await?;
    write_json(out, "county.json", &county).await?;
    write_json(out, "trends.json", &trends).await?;
    write_json(out, "metadata.json", &meta).await?;

    println!(
        "Latest participation: {} persons",
        format_number(monthly.metadata.latest_persons)
    );
    println!(
        "Latest households: {}",
        format_number(monthly.metadata.latest_households)
    );
    println!(
        "Date range: {} to {}",
        monthly.metadata.start_date.as_deref().unwrap_or("--"),
        monthly.metadata.end_date.as_deref().unwrap_or("--")
    );
    println!("Total counties: {}", county.counties.len());
    Ok(())
}
