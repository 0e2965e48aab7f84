//! Declarative filter descriptions.
//!
//! A coefficient file can only describe an FIR filter. A TOML description
//! covers the general case:
//!
//! ```toml
//! b = [1.0, 0.2, 0.1, 0.1, 0.1]
//! a = [1.0, 0.3, 0.2, 0.1, 0.0]
//! ```
//!
//! or points at a coefficient file for the numerator:
//!
//! ```toml
//! b_file = "coefficients.txt"
//! a = [1.0, -0.9]
//! ```
//!
//! # Example
//! ```
//! use lti_filter::{DigitalFilter, FilterConfig};
//!
//! let config = FilterConfig::from_toml_str("b = [0.5, 0.5]").unwrap();
//! let mut filter = DigitalFilter::<f64>::from_config(&config).unwrap();
//! assert_eq!(filter.filter(1.0), 0.5);
//! ```

use crate::error::{FilterError, Result};
use std::path::{Path, PathBuf};

/// Filter description as read from TOML
///
/// Exactly one of `b` and `b_file` must be set. A missing `a` means `[1.0]`.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Numerator coefficients `b0, b1, ...`
    pub b: Option<Vec<f64>>,
    /// Denominator coefficients `a0, a1, ...`
    pub a: Option<Vec<f64>>,
    /// Coefficient file holding the numerator
    pub b_file: Option<PathBuf>,
}

impl FilterConfig {
    /// Parse a TOML description
    ///
    /// A relative `b_file` is kept as written, i.e. relative to the current
    /// directory.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FilterError::Config(e.to_string()))
    }

    /// Read a TOML description from disk
    ///
    /// A relative `b_file` is resolved against the directory holding the
    /// description.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| FilterError::FileUnavailable {
                path: path.to_path_buf(),
                source,
            })?;

        let mut config = Self::from_toml_str(&content)?;
        if let Some(dir) = path.parent()
            && let Some(b_file) = config.b_file.as_mut().filter(|f| f.is_relative())
        {
            *b_file = dir.join(&*b_file);
        }

        log::debug!("Loaded filter description from {}", path.display());
        Ok(config)
    }
}
