// crates/districts-core/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DistrictError>;

#[derive(Debug, Error)]
pub enum DistrictError {
    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(std::io::Error),

    #[error("JSON error: {0}")]
    Json(serde_json::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),
}
