//! Headline statistics shown above the charts and in the COVID panel.

use crate::format::{
    format_date, format_money, format_number, format_percent_change, format_plain,
};
use hsnap_data::Dataset;

/// Formatted text for every statistic target on the page.
///
/// Field names follow the element ids (`stat-persons` → `persons`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub persons: String,
    pub persons_date: String,
    pub households: String,
    pub households_date: String,
    pub benefit: String,
    pub benefit_date: String,
    pub cost: String,
    pub cost_date: String,
    pub avg_persons: String,
    pub peak_date: String,
    pub peak_persons: String,
    pub latest_persons: String,
    pub latest_households: String,
    pub yoy_change: String,
    pub pre_covid_households: String,
    pub peak_covid_households: String,
    pub peak_covid_date: String,
    pub covid_increase: String,
    /// Raw percent, the page supplies the `%` sign
    pub covid_increase_pct: String,
}

impl Statistics {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let meta = &dataset.monthly.metadata;
        let summary = &dataset.monthly.summary;
        let periods = &dataset.trends.periods;
        let increase = &dataset.trends.covid_impact.peak_increase;
        let as_of = format!("as of {}", format_date(meta.end_date.as_deref()));

        Self {
            persons: format_number(meta.latest_persons),
            persons_date: as_of.clone(),
            households: format_number(meta.latest_households),
            households_date: as_of,
            benefit: format!("${}", format_number(meta.latest_avg_benefit_per_household)),
            benefit_date: "per month".to_string(),
            cost: format!("${}", format_money(meta.latest_total_cost)),
            cost_date: "total benefits".to_string(),
            avg_persons: format_number(summary.averages.persons),
            peak_date: format_date(summary.peak.persons.date.as_deref()),
            peak_persons: format_number(summary.peak.persons.value),
            latest_persons: format_number(meta.latest_persons),
            latest_households: format_number(meta.latest_households),
            yoy_change: format_percent_change(dataset.monthly.year_over_year.persons.percent_change),
            pre_covid_households: format_number(periods.pre_covid_avg.households),
            peak_covid_households: format_number(periods.covid_peak.households),
            peak_covid_date: format_date(periods.covid_peak.date.as_deref()),
            covid_increase: format!("+{}", format_number(increase.households)),
            covid_increase_pct: format_plain(increase.households_percent),
        }
    }
}
