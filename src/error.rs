use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid coefficients: {0}")]
    InvalidCoefficients(String),

    #[error("Cannot read {}: {source}", .path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed coefficient {token:?} on line {line}")]
    FileParseError { line: usize, token: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FilterError {
    /// Returns `true` if the coefficients themselves were rejected.
    pub fn is_invalid_coefficients(&self) -> bool {
        matches!(self, FilterError::InvalidCoefficients(_))
    }

    /// Returns `true` if a coefficient file could not be read or parsed.
    pub fn is_file_error(&self) -> bool {
        matches!(
            self,
            FilterError::FileUnavailable { .. } | FilterError::FileParseError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
