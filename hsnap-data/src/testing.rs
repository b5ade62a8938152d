//! Sample documents and an in-memory `Fetcher` for tests.
//!
//! Compiled for this crate's tests and for downstream crates that enable the
//! `testing` feature in their dev-dependencies.

use crate::error::{LoadError, Result};
use crate::loader::{DataSources, Dataset, Fetcher};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;

pub const MONTHLY: &str = r#"{
    "labels": ["1998-12-01", "1999-01-01", "1999-02-01"],
    "datasets": {
        "households": [60000, 61000, 62000],
        "persons": [120000, 121000, 122500],
        "avgBenefitPerHousehold": [300.5, 301.0, 302.25],
        "avgBenefitPerPerson": [150.0, 151.0, 152.0],
        "totalCost": [18030000, 18361000, 18739500]
    },
    "metadata": {
        "startDate": "1998-12-01",
        "endDate": "1999-02-01",
        "totalMonths": 3,
        "latestHouseholds": 62000,
        "latestPersons": 122500,
        "latestAvgBenefitPerHousehold": 302.25,
        "latestTotalCost": 18739500
    },
    "summary": {
        "peak": {"persons": {"value": 122500, "date": "1999-02-01"}},
        "averages": {"persons": 121166}
    },
    "yearOverYear": {"persons": {"percentChange": 2.1}}
}"#;

pub const COUNTY: &str = r#"{
    "asOfDate": "1999-01-01",
    "counties": [
        {"name": "Hawaii", "persons": {"publicAssistance": 5000, "nonPublicAssistance": 20000, "total": 25000},
         "households": {"publicAssistance": 2000, "nonPublicAssistance": 9000, "total": 11000}, "totalIssuance": 4100000},
        {"name": "Honolulu", "persons": {"publicAssistance": 15000, "nonPublicAssistance": 70000, "total": 85000},
         "households": {"publicAssistance": 6000, "nonPublicAssistance": 34000, "total": 40000}, "totalIssuance": 12500000}
    ]
}"#;

pub const TRENDS: &str = r#"{
    "periods": {
        "preCovidAvg": {"households": 80000, "persons": 150000, "avgBenefitPerHousehold": 450.12},
        "covidPeak": {"households": 101000, "persons": 190000, "avgBenefitPerHousehold": 800.0, "date": "2021-05-01"}
    },
    "covidImpact": {"peakIncrease": {"households": 21000, "householdsPercent": 26.25}},
    "recentData": {
        "labels": ["2020-02-01", "2020-03-01", "2020-04-01"],
        "households": [80000, 82000, 90000],
        "avgBenefitPerHousehold": [450.0, 460.0, 510.0]
    }
}"#;

pub const METADATA: &str = r#"{"dataVersion": "2022-01"}"#;

/// Fetcher answering from an in-memory map and recording every request.
#[derive(Default)]
pub struct MapFetcher {
    pub documents: HashMap<String, String>,
    pub requested: RefCell<Vec<String>>,
}

impl MapFetcher {
    pub fn complete() -> Self {
        let sources = DataSources::default();
        let mut documents = HashMap::new();
        documents.insert(sources.monthly.clone(), MONTHLY.to_string());
        documents.insert(sources.county.clone(), COUNTY.to_string());
        documents.insert(sources.trends.clone(), TRENDS.to_string());
        documents.insert(sources.metadata.clone(), METADATA.to_string());
        Self {
            documents,
            requested: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl Fetcher for MapFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        self.requested.borrow_mut().push(path.to_string());
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| LoadError::Status {
                path: path.to_string(),
                status: 404,
            })
    }
}

pub fn dataset() -> Dataset {
    Dataset {
        monthly: serde_json::from_str(MONTHLY).unwrap(),
        county: serde_json::from_str(COUNTY).unwrap(),
        trends: serde_json::from_str(TRENDS).unwrap(),
        metadata: serde_json::from_str(METADATA).unwrap(),
    }
}
