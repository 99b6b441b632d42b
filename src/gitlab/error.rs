//! Error types exposed around the normalisation layer.
//!
//! The state mapper and record builder cannot fail. These variants cover the
//! edges: parsing the remote URL, loading configuration, and decoding raw
//! payloads before they reach the builder.

use thiserror::Error;

/// Errors surfaced while resolving inputs for normalisation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// No payload source was configured.
    #[error("merge request payload input is required (use --input or -i)")]
    MissingInput,

    /// No GitLab remote URL was configured.
    #[error("GitLab project URL is required (use --remote-url or -r)")]
    MissingRemoteUrl,

    /// The remote URL could not be parsed.
    #[error("GitLab project URL is invalid: {0}")]
    InvalidRemoteUrl(String),

    /// The remote URL does not name a project.
    #[error("GitLab project URL must match /<group>/<project>")]
    MissingProjectPath,

    /// The payload was not valid merge request JSON.
    #[error("merge request payload could not be decoded: {message}")]
    Payload {
        /// Decoder error detail, including line and column.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl From<serde_json::Error> for NormalizeError {
    fn from(error: serde_json::Error) -> Self {
        Self::Payload {
            message: error.to_string(),
        }
    }
}
