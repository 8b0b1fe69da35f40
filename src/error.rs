use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status; `message` is the body's `error` field or the caller's fallback.
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid API base URL `{0}`")]
    InvalidBaseUrl(String),

    #[error("Invalid header `{name}`: {reason}")]
    InvalidHeader { name: String, reason: String },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionImportError {
    #[error("Could not find a request URL in the curl command")]
    MissingUrl,

    #[error("The curl command does not target /api/directory/")]
    NotDirectoryEndpoint,
}
