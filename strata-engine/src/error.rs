use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Dataset not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    #[error("Dataset contains no records")]
    EmptyDataset,

    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
