use serde::{Deserialize, Serialize};

/// Statewide monthly participation series (`monthly.json`).
///
/// `labels` and every sequence in `datasets` are parallel: index `i` of each
/// series belongs to the period `labels[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySeries {
    /// ISO period labels, ascending
    pub labels: Vec<String>,
    pub datasets: MonthlyDatasets,
    pub metadata: MonthlyMetadata,
    pub summary: MonthlySummary,
    pub year_over_year: YearOverYear,
}

/// The parallel value sequences of a `MonthlySeries`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyDatasets {
    pub households: Vec<Option<f64>>,
    pub persons: Vec<Option<f64>>,
    pub avg_benefit_per_household: Vec<Option<f64>>,
    #[serde(default)]
    pub avg_benefit_per_person: Vec<Option<f64>>,
    pub total_cost: Vec<Option<f64>>,
}

impl MonthlyDatasets {
    /// Every series with its field name, for checks that treat them alike.
    pub fn named(&self) -> [(&'static str, &[Option<f64>]); 5] {
        [
            ("households", &self.households),
            ("persons", &self.persons),
            ("avgBenefitPerHousehold", &self.avg_benefit_per_household),
            ("avgBenefitPerPerson", &self.avg_benefit_per_person),
            ("totalCost", &self.total_cost),
        ]
    }
}

/// Latest values and the covered date range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyMetadata {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub total_months: Option<u32>,
    #[serde(default)]
    pub latest_households: Option<f64>,
    #[serde(default)]
    pub latest_persons: Option<f64>,
    #[serde(default)]
    pub latest_avg_benefit_per_household: Option<f64>,
    #[serde(default)]
    pub latest_avg_benefit_per_person: Option<f64>,
    #[serde(default)]
    pub latest_total_cost: Option<f64>,
}

/// A maximum and the period it occurred in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Peaks {
    #[serde(default)]
    pub households: Peak,
    #[serde(default)]
    pub persons: Peak,
    #[serde(default)]
    pub avg_benefit_per_household: Peak,
    #[serde(default)]
    pub total_cost: Peak,
}

/// Whole-series means.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Averages {
    #[serde(default)]
    pub households: Option<f64>,
    #[serde(default)]
    pub persons: Option<f64>,
    #[serde(default)]
    pub avg_benefit_per_household: Option<f64>,
    #[serde(default)]
    pub avg_benefit_per_person: Option<f64>,
    #[serde(default)]
    pub total_cost: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    #[serde(default)]
    pub peak: Peaks,
    #[serde(default)]
    pub averages: Averages,
}

/// Latest period compared with the period twelve months earlier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    #[serde(default)]
    pub current: Option<f64>,
    #[serde(default)]
    pub year_ago: Option<f64>,
    #[serde(default)]
    pub change: Option<f64>,
    #[serde(default)]
    pub percent_change: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearOverYear {
    #[serde(default)]
    pub households: Change,
    #[serde(default)]
    pub persons: Change,
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONTHLY_JSON: &str = r#"{
        "labels": ["2021-11-01", "2021-12-01", "2022-01-01"],
        "datasets": {
            "households": [94000, 95000, null],
            "persons": [170000, 171500, 172000],
            "avgBenefitPerHousehold": [560.5, 571.25, 580],
            "avgBenefitPerPerson": [310.1, 311.2, 312.3],
            "totalCost": [52700000, 54200000, 55100000]
        },
        "metadata": {
            "startDate": "2021-11-01",
            "endDate": "2022-01-01",
            "totalMonths": 3,
            "latestHouseholds": 95500,
            "latestPersons": 172000,
            "latestAvgBenefitPerHousehold": 580.0,
            "latestTotalCost": 55100000
        },
        "summary": {
            "peak": {"persons": {"value": 172000, "date": "2022-01-01"}},
            "averages": {"persons": 171166}
        },
        "yearOverYear": {"persons": {"percentChange": -1.25}}
    }"#;

    #[test]
    fn test_parse_monthly_document() {
        let monthly: MonthlySeries = serde_json::from_str(MONTHLY_JSON).unwrap();
        assert_eq!(monthly.labels.len(), 3);
        assert_eq!(monthly.datasets.households[2], None);
        assert_eq!(monthly.datasets.total_cost[0], Some(52_700_000.0));
        assert_eq!(monthly.metadata.latest_avg_benefit_per_person, None);
        assert_eq!(monthly.summary.peak.persons.date.as_deref(), Some("2022-01-01"));
        assert_eq!(monthly.summary.peak.households, Peak::default());
        assert_eq!(monthly.year_over_year.persons.percent_change, Some(-1.25));
    }

    #[test]
    fn test_missing_labels_is_an_error() {
        let err = serde_json::from_str::<MonthlySeries>(r#"{"datasets": {}}"#);
        assert!(err.is_err());
    }
}
