//! Document fetcher over the local filesystem.

use async_trait::async_trait;
use hsnap_data::error::{LoadError, Result};
use hsnap_data::{DataSources, Fetcher};

/// Reads documents from disk; paths are used as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFetcher;

#[async_trait(?Send)]
impl Fetcher for FsFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LoadError::Fetch {
                path: path.to_string(),
                reason: e.to_string(),
            })
    }
}

/// The four documents directly inside `dir`, as written by `prepare`.
pub fn sources_in(dir: &str) -> DataSources {
    DataSources {
        base: dir.to_string(),
        monthly: "monthly.json".to_string(),
        county: "county.json".to_string(),
        trends: "trends.json".to_string(),
        metadata: "metadata.json".to_string(),
    }
}
