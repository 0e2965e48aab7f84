//! Transfer function coefficients and the coefficient file loader.
//!
//! A transfer function
//!
//! ```text
//!         b0 + b1*z^-1 + b2*z^-2 + ...
//! H(z) = ------------------------------
//!         a0 + a1*z^-1 + a2*z^-2 + ...
//! ```
//!
//! is stored normalized by `a0`, so the leading denominator term is always 1.
//!
//! ## Coefficient files
//!
//! Plain text, whitespace or newline separated real numbers, read in order as
//! `b0, b1, ...`. There is no header and no denominator section; a file always
//! describes an FIR filter.

use crate::error::{FilterError, Result};
use num_traits::Float;
use std::path::Path;
use std::str::FromStr;

/// Normalized numerator/denominator pair
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients<T> {
    b: Vec<T>,
    a: Vec<T>,
}

impl<T: Float> Coefficients<T> {
    /// Numerator-only coefficients; the denominator is `[1]`
    pub fn fir(b: &[T]) -> Result<Self> {
        Self::new(b, &[T::one()])
    }

    /// Normalize `b` and `a` by `a[0]`
    ///
    /// # Errors
    /// Returns `FilterError::InvalidCoefficients` if either slice is empty or
    /// `a[0]` is zero or not finite.
    pub fn new(b: &[T], a: &[T]) -> Result<Self> {
        if b.is_empty() {
            return Err(FilterError::InvalidCoefficients(
                "numerator has no coefficients".to_string(),
            ));
        }
        let a0 = match a.first() {
            Some(&a0) => a0,
            None => {
                return Err(FilterError::InvalidCoefficients(
                    "denominator has no coefficients".to_string(),
                ));
            }
        };
        if a0 == T::zero() || !a0.is_finite() {
            return Err(FilterError::InvalidCoefficients(format!(
                "leading denominator coefficient must be finite and non-zero, got {}",
                a0.to_f64().unwrap_or(f64::NAN)
            )));
        }

        Ok(Self {
            b: b.iter().map(|&v| v / a0).collect(),
            a: a.iter().map(|&v| v / a0).collect(),
        })
    }

    /// Normalized numerator
    pub fn b(&self) -> &[T] {
        &self.b
    }

    /// Normalized denominator, `a()[0] == 1`
    pub fn a(&self) -> &[T] {
        &self.a
    }

    /// Feedback taps `a[1..]`
    pub fn feedback(&self) -> &[T] {
        &self.a[1..]
    }
}

/// Parse coefficient text into `b0, b1, ...`
///
/// Every whitespace-separated token must be a finite real number. Parsing
/// stops when the text runs out; trailing newlines and blank lines are fine.
///
/// # Errors
/// - `FilterError::FileParseError` for the first token that does not parse
/// - `FilterError::InvalidCoefficients` if the text holds no tokens at all
pub fn parse_coefficients<T: Float + FromStr>(text: &str) -> Result<Vec<T>> {
    parse_coefficient_bytes(text.as_bytes())
}

/// Same as `parse_coefficients`, over raw file contents
///
/// A token that is not valid UTF-8 is reported as a `FileParseError` on its
/// line, like any other malformed token.
fn parse_coefficient_bytes<T: Float + FromStr>(bytes: &[u8]) -> Result<Vec<T>> {
    let mut coeffs = Vec::new();

    for (line_idx, line) in bytes.split(|&b| b == b'\n').enumerate() {
        let tokens = line
            .split(|b| b.is_ascii_whitespace())
            .filter(|t| !t.is_empty());

        for raw in tokens {
            let value = std::str::from_utf8(raw)
                .ok()
                .and_then(|token| token.parse::<T>().ok())
                .filter(|v| v.is_finite())
                .ok_or_else(|| FilterError::FileParseError {
                    line: line_idx + 1,
                    token: String::from_utf8_lossy(raw).into_owned(),
                })?;
            coeffs.push(value);
        }
    }

    if coeffs.is_empty() {
        return Err(FilterError::InvalidCoefficients(
            "no coefficients found".to_string(),
        ));
    }

    log::trace!("Parsed {} coefficients", coeffs.len());
    Ok(coeffs)
}

/// Read and parse a coefficient file
///
/// # Errors
/// - `FilterError::FileUnavailable` if the file cannot be read
/// - anything `parse_coefficients` returns
pub fn load_coefficients<T: Float + FromStr>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| FilterError::FileUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let coeffs = parse_coefficient_bytes(&bytes)?;
    log::debug!(
        "Loaded {} coefficients from {}",
        coeffs.len(),
        path.display()
    );
    Ok(coeffs)
}
