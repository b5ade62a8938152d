/// Error types for loading the dashboard documents
use thiserror::Error;

/// Failure to fetch or parse one of the four documents.
///
/// The variants exist for logging; callers showing the page treat them all
/// as the same data-load failure.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The request could not be issued or did not complete
    #[error("failed to fetch {path}: {reason}")]
    Fetch { path: String, reason: String },

    /// The server answered with a non-success status
    #[error("failed to fetch {path}: HTTP {status}")]
    Status { path: String, status: u16 },

    /// The body was not the expected JSON document
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
