use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Latest bi-annual county figures (`county.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountySnapshot {
    #[serde(default)]
    pub as_of_date: Option<String>,
    /// County records in display order
    pub counties: Vec<CountyRecord>,
    #[serde(default)]
    pub state_total: Option<StateTotal>,
    /// Per-county history keyed by county name
    #[serde(default)]
    pub time_series: BTreeMap<String, CountyTimeSeries>,
}

/// One county's participation and issuance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyRecord {
    pub name: String,
    #[serde(default)]
    pub fips: Option<serde_json::Value>,
    pub persons: Breakdown,
    pub households: Breakdown,
    #[serde(default)]
    pub total_issuance: Option<f64>,
}

/// Public-assistance / non-public-assistance split with its total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    #[serde(default)]
    pub public_assistance: Option<f64>,
    #[serde(default)]
    pub non_public_assistance: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
}

impl Breakdown {
    /// True when both parts and the total are present and disagree.
    pub fn total_mismatch(&self) -> bool {
        match (self.public_assistance, self.non_public_assistance, self.total) {
            (Some(pa), Some(non_pa), Some(total)) => (pa + non_pa - total).abs() > 0.5,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateTotal {
    pub persons: f64,
    pub households: f64,
    pub total_issuance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountyTimeSeries {
    pub dates: Vec<String>,
    pub persons: Vec<Option<f64>>,
    pub households: Vec<Option<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_county_document() {
        let json = r#"{
            "asOfDate": "2021-07-01",
            "counties": [
                {
                    "name": "Honolulu",
                    "fips": 15003,
                    "persons": {"publicAssistance": 20000, "nonPublicAssistance": 80000, "total": 100000},
                    "households": {"publicAssistance": 9000, "nonPublicAssistance": 41000, "total": 50000},
                    "totalIssuance": 31000000
                },
                {
                    "name": "Kauai",
                    "persons": {"total": 9000},
                    "households": {"total": 4500}
                }
            ]
        }"#;
        let snapshot: CountySnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.counties.len(), 2);
        assert_eq!(snapshot.counties[0].name, "Honolulu");
        assert_eq!(snapshot.counties[0].total_issuance, Some(31_000_000.0));
        assert_eq!(snapshot.counties[1].persons.public_assistance, None);
        assert_eq!(snapshot.counties[1].total_issuance, None);
        assert!(snapshot.time_series.is_empty());
    }

    #[test]
    fn test_breakdown_total_mismatch() {
        let consistent = Breakdown {
            public_assistance: Some(10.0),
            non_public_assistance: Some(30.0),
            total: Some(40.0),
        };
        assert!(!consistent.total_mismatch());

        let inconsistent = Breakdown {
            total: Some(41.0),
            ..consistent.clone()
        };
        assert!(inconsistent.total_mismatch());

        let partial = Breakdown {
            public_assistance: None,
            ..inconsistent
        };
        assert!(!partial.total_mismatch());
    }
}
