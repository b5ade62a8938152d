use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Provenance of the generated documents (`metadata.json`).
///
/// The dashboard loads it alongside the other documents but renders nothing
/// from it; the CLI prints it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub generated: Option<String>,
    #[serde(default)]
    pub data_version: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    /// Source name to description or URL
    #[serde(default)]
    pub sources: BTreeMap<String, String>,
    /// Copy of the monthly metadata block
    #[serde(default)]
    pub summary: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metadata_document() {
        let json = r#"{
            "generated": "2025-06-01T10:00:00",
            "dataVersion": "2022-01",
            "sources": {"monthly": "USDA FNS SNAP Data Tables"},
            "summary": {"totalMonths": 400}
        }"#;
        let metadata: Metadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.data_version.as_deref(), Some("2022-01"));
        assert_eq!(metadata.sources["monthly"], "USDA FNS SNAP Data Tables");
        assert_eq!(metadata.note, None);
        assert_eq!(metadata.summary["totalMonths"], 400);
    }

    #[test]
    fn test_empty_metadata_is_accepted() {
        let metadata: Metadata = serde_json::from_str("{}").unwrap();
        assert_eq!(metadata, Metadata::default());
    }
}
