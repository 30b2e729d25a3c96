use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CurvaError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to load config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("no products detected. Check that this is a standard 'Curva ABC' report")]
    NoProducts,

    #[error("product '{0}' was not found in the report")]
    UnknownProduct(String),

    #[error("select at least one product")]
    EmptySelection,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
