//! All-or-nothing loading of the four dashboard documents.
//!
//! The four requests are issued together and the load completes when all of
//! them succeed, or fails on the first error. Nothing from a failed load is
//! kept: callers get either a complete `Dataset` or a `LoadError`.

use crate::error::{LoadError, Result};
use crate::{CountySnapshot, Metadata, MonthlySeries, TrendsSummary};
use async_trait::async_trait;
use futures_util::future::try_join4;
use serde::de::DeserializeOwned;

/// Source of raw document text, addressed by path.
///
/// Implemented over `fetch` in the browser and over the filesystem in the
/// CLI. Futures are not required to be `Send` since the browser is
/// single-threaded.
#[async_trait(?Send)]
pub trait Fetcher {
    async fn fetch_text(&self, path: &str) -> Result<String>;
}

/// Where the four documents live, relative to `base`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    /// Prefix joined to every path (empty for page-relative URLs)
    pub base: String,
    pub monthly: String,
    pub county: String,
    pub trends: String,
    pub metadata: String,
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            base: String::new(),
            monthly: "data/monthly.json".to_string(),
            county: "data/county.json".to_string(),
            trends: "data/trends.json".to_string(),
            metadata: "data/metadata.json".to_string(),
        }
    }
}

impl DataSources {
    /// Sources with the default file names under `base`.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            ..Self::default()
        }
    }

    /// Full path of one document.
    pub fn resolve(&self, path: &str) -> String {
        if self.base.is_empty() {
            path.to_string()
        } else {
            format!("{}/{}", self.base.trim_end_matches('/'), path)
        }
    }
}

/// The four loaded documents. Read-only for the rest of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub monthly: MonthlySeries,
    pub county: CountySnapshot,
    pub trends: TrendsSummary,
    pub metadata: Metadata,
}

/// Fetch and parse one document.
async fn fetch_document<F, T>(fetcher: &F, path: String) -> Result<T>
where
    F: Fetcher + ?Sized,
    T: DeserializeOwned,
{
    let body = fetcher.fetch_text(&path).await?;
    serde_json::from_str(&body).map_err(|source| LoadError::Parse { path, source })
}

/// Load all four documents concurrently.
pub async fn load<F: Fetcher + ?Sized>(fetcher: &F, sources: &DataSources) -> Result<Dataset> {
    let (monthly, county, trends, metadata) = try_join4(
        fetch_document::<F, MonthlySeries>(fetcher, sources.resolve(&sources.monthly)),
        fetch_document::<F, CountySnapshot>(fetcher, sources.resolve(&sources.county)),
        fetch_document::<F, TrendsSummary>(fetcher, sources.resolve(&sources.trends)),
        fetch_document::<F, Metadata>(fetcher, sources.resolve(&sources.metadata)),
    )
    .await?;

    log::info!(
        "loader: {} months, {} counties, {} recent months",
        monthly.labels.len(),
        county.counties.len(),
        trends.recent_data.labels.len()
    );

    Ok(Dataset {
        monthly,
        county,
        trends,
        metadata,
    })
}

#[cfg(test)]
mod tests {
    use crate::testing::MapFetcher;
    use super::*;

    #[tokio::test]
    async fn test_load_all_documents() {
        let fetcher = MapFetcher::complete();
        let dataset = load(&fetcher, &DataSources::default()).await.unwrap();
        assert_eq!(dataset.monthly.labels.len(), 3);
        assert_eq!(dataset.county.counties.len(), 2);
        assert_eq!(dataset.trends.recent_data.labels.len(), 3);
        assert_eq!(dataset.metadata.data_version.as_deref(), Some("2022-01"));
        assert_eq!(fetcher.requested.borrow().len(), 4);
    }

    #[tokio::test]
    async fn test_missing_document_fails_whole_load() {
        let mut fetcher = MapFetcher::complete();
        fetcher.documents.remove("data/trends.json");
        let err = load(&fetcher, &DataSources::default()).await.unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_malformed_document_fails_whole_load() {
        let mut fetcher = MapFetcher::complete();
        fetcher
            .documents
            .insert("data/county.json".to_string(), "<html>not json</html>".to_string());
        let err = load(&fetcher, &DataSources::default()).await.unwrap_err();
        match err {
            LoadError::Parse { path, .. } => assert_eq!(path, "data/county.json"),
            other => panic!("expected parse error, got {other}"),
        }
    }

    #[test]
    fn test_sources_resolve_against_base() {
        let sources = DataSources::with_base("web/");
        assert_eq!(sources.resolve(&sources.monthly), "web/data/monthly.json");
        assert_eq!(
            DataSources::default().resolve("data/county.json"),
            "data/county.json"
        );
    }
}
