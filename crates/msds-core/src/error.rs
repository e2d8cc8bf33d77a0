use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MsdsError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to load records from {path}: {reason}")]
    RecordsLoad { path: PathBuf, reason: String },

    #[error("unsupported records document: {0}")]
    UnsupportedDocument(String),

    #[error("MSDS '{mid}' not found")]
    RecordNotFound { mid: String },

    #[error("failed to load config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("attachment import failed: {0}")]
    Import(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
