use serde::{Deserialize, Serialize};

/// Period aggregates around the COVID-19 response (`trends.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendsSummary {
    pub periods: Periods,
    pub covid_impact: CovidImpact,
    /// Months from 2019 onward, used by the dedicated COVID chart
    pub recent_data: RecentData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Periods {
    #[serde(default)]
    pub pre_covid_avg: PeriodAggregate,
    #[serde(default)]
    pub covid_peak: PeriodAggregate,
    #[serde(default)]
    pub latest: PeriodAggregate,
}

/// Households, persons and benefit for a named period. `date` is set for
/// aggregates that point at a single month (peak, latest).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodAggregate {
    #[serde(default)]
    pub households: Option<f64>,
    #[serde(default)]
    pub persons: Option<f64>,
    #[serde(default)]
    pub avg_benefit_per_household: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CovidImpact {
    #[serde(default)]
    pub peak_increase: PeakIncrease,
}

/// COVID peak minus the pre-COVID average.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakIncrease {
    #[serde(default)]
    pub households: Option<f64>,
    #[serde(default)]
    pub households_percent: Option<f64>,
    #[serde(default)]
    pub persons: Option<f64>,
    #[serde(default)]
    pub persons_percent: Option<f64>,
}

/// Parallel recent-month sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentData {
    pub labels: Vec<String>,
    pub households: Vec<Option<f64>>,
    #[serde(default)]
    pub persons: Vec<Option<f64>>,
    pub avg_benefit_per_household: Vec<Option<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trends_document() {
        let json = r#"{
            "periods": {
                "preCovidAvg": {"households": 80000, "persons": 150000, "avgBenefitPerHousehold": 450.12},
                "covidPeak": {"households": 101000, "persons": 190000, "avgBenefitPerHousehold": 800.0, "date": "2021-05-01"}
            },
            "covidImpact": {"peakIncrease": {"households": 21000, "householdsPercent": 26.25}},
            "recentData": {
                "labels": ["2020-02-01", "2020-03-01"],
                "households": [80000, 82000],
                "avgBenefitPerHousehold": [450.0, 460.0]
            }
        }"#;
        let trends: TrendsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(trends.periods.covid_peak.date.as_deref(), Some("2021-05-01"));
        assert_eq!(trends.periods.pre_covid_avg.date, None);
        assert_eq!(trends.periods.latest, PeriodAggregate::default());
        assert_eq!(trends.covid_impact.peak_increase.households_percent, Some(26.25));
        assert!(trends.recent_data.persons.is_empty());
    }
}
