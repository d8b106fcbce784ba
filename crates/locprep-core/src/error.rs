// crates/locprep-core/src/error.rs
use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by the preparation pipelines.
///
/// Data-shape problems inside individual rows (short lines, blank numbers)
/// never surface here; they are absorbed where they are parsed.
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("download failed: {0}")]
    Http(#[source] BoxedSource),

    #[error("archive error: {0}")]
    Archive(#[source] BoxedSource),

    #[error("input is missing required column '{0}'")]
    MissingColumn(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

#[cfg(feature = "fetch")]
impl From<reqwest::Error> for PrepError {
    fn from(e: reqwest::Error) -> Self {
        PrepError::Http(Box::new(e))
    }
}

#[cfg(feature = "archive")]
impl From<zip::result::ZipError> for PrepError {
    fn from(e: zip::result::ZipError) -> Self {
        PrepError::Archive(Box::new(e))
    }
}

pub type Result<T> = std::result::Result<T, PrepError>;
