use crate::config::FilterConfig;
use crate::error::{FilterError, Result};
use crate::signal_processing::coefficients::{self, Coefficients};
use crate::signal_processing::delay_line::DelayLine;
use crate::signal_processing::filter::Filter;
use num_traits::Float;
use std::path::Path;
use std::str::FromStr;

/// FIR/IIR filter evaluating a rational transfer function one sample at a time
///
/// Implements the difference equation
///
/// ```text
/// y[n] = sum(b[i] * x[n-i], i = 0..b_len) - sum(a[i] * y[n-i], i = 1..a_len)
/// ```
///
/// with coefficients normalized so that `a[0] == 1`. A pure FIR filter is the
/// special case `a == [1]`.
///
/// # Example
/// ```
/// use lti_filter::DigitalFilter;
///
/// let mut filter = DigitalFilter::fir(&[1.0, 0.5]).unwrap();
/// assert_eq!(filter.filter(1.0), 1.0);
/// assert_eq!(filter.filter(0.0), 0.5);
/// assert_eq!(filter.filter(0.0), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct DigitalFilter<T> {
    coeffs: Coefficients<T>,
    input_history: DelayLine<T>,
    output_history: DelayLine<T>,
}

impl<T: Float> DigitalFilter<T> {
    /// Create an FIR filter from numerator coefficients `b0, b1, ...`
    ///
    /// # Errors
    /// Returns `FilterError::InvalidCoefficients` if `b` is empty.
    pub fn fir(b: &[T]) -> Result<Self> {
        Ok(Self::from_coefficients(
            Coefficients::fir(b).inspect_err(log_rejected)?,
        ))
    }

    /// Create an IIR filter from numerator `b` and denominator `a`
    ///
    /// # Errors
    /// Returns `FilterError::InvalidCoefficients` if either slice is empty or
    /// `a[0]` is zero or not finite.
    pub fn iir(b: &[T], a: &[T]) -> Result<Self> {
        Ok(Self::from_coefficients(
            Coefficients::new(b, a).inspect_err(log_rejected)?,
        ))
    }

    /// Create a filter from already normalized coefficients
    pub fn from_coefficients(coeffs: Coefficients<T>) -> Self {
        let b_len = coeffs.b().len();
        let a_len = coeffs.a().len();
        log::debug!(
            "Creating {} filter: {} numerator taps, {} denominator taps",
            if a_len == 1 { "FIR" } else { "IIR" },
            b_len,
            a_len
        );

        Self {
            input_history: DelayLine::new(b_len),
            output_history: DelayLine::new(a_len),
            coeffs,
        }
    }

    /// Filter one input sample and return the corresponding output
    ///
    /// Advances both histories by exactly one step. Never fails; non-finite
    /// values simply propagate.
    pub fn filter(&mut self, input: T) -> T {
        self.input_history.push(input);

        let output = self.input_history.dot(self.coeffs.b())
            - self.output_history.dot(self.coeffs.feedback());

        self.output_history.push(output);
        output
    }

    /// Zero both histories; coefficients are kept
    pub fn reset(&mut self) {
        self.input_history.clear();
        self.output_history.clear();
    }

    /// Normalized numerator coefficients
    pub fn b(&self) -> &[T] {
        self.coeffs.b()
    }

    /// Normalized denominator coefficients (`a()[0] == 1`)
    pub fn a(&self) -> &[T] {
        self.coeffs.a()
    }

    pub fn coefficients(&self) -> &Coefficients<T> {
        &self.coeffs
    }

    /// Past inputs, most-recent-first, `b().len()` long
    pub fn input_history(&self) -> &DelayLine<T> {
        &self.input_history
    }

    /// Past outputs, most-recent-first, `a().len()` long
    pub fn output_history(&self) -> &DelayLine<T> {
        &self.output_history
    }

    /// `true` when every feedback tap is zero
    pub fn is_fir(&self) -> bool {
        self.coeffs.feedback().iter().all(|a| a.is_zero())
    }

    /// Filter order, the longest delay in the difference equation
    pub fn order(&self) -> usize {
        self.coeffs.b().len().max(self.coeffs.a().len()) - 1
    }

    /// First `len` samples of the impulse response
    ///
    /// Runs on a zeroed copy, so `self` is left untouched.
    pub fn impulse_response(&self, len: usize) -> Vec<T> {
        let mut fresh = self.fresh_copy();
        (0..len)
            .map(|n| fresh.filter(if n == 0 { T::one() } else { T::zero() }))
            .collect()
    }

    /// First `len` samples of the unit step response
    ///
    /// Runs on a zeroed copy, so `self` is left untouched.
    pub fn step_response(&self, len: usize) -> Vec<T> {
        let mut fresh = self.fresh_copy();
        (0..len).map(|_| fresh.filter(T::one())).collect()
    }

    fn fresh_copy(&self) -> Self {
        let mut copy = self.clone();
        copy.reset();
        copy
    }
}

impl<T: Float + FromStr> DigitalFilter<T> {
    /// Create an FIR filter from a coefficient file
    ///
    /// The file holds `b0, b1, ...` separated by whitespace or newlines. The
    /// denominator is always `[1]`.
    ///
    /// # Errors
    /// - `FilterError::FileUnavailable` if the file cannot be read
    /// - `FilterError::FileParseError` on a token that is not a finite number
    /// - `FilterError::InvalidCoefficients` if the file holds no coefficients
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let b = coefficients::load_coefficients(path).inspect_err(log_rejected)?;
        Self::fir(&b)
    }

    /// Create a filter from a TOML filter description
    ///
    /// # Errors
    /// Returns `FilterError::Config` if the description is inconsistent, plus
    /// any error of the construction it resolves to.
    pub fn from_config(config: &FilterConfig) -> Result<Self> {
        let b = match (&config.b, &config.b_file) {
            (Some(b), None) => cast_all(b),
            (None, Some(path)) => coefficients::load_coefficients(path),
            (Some(_), Some(_)) => Err(FilterError::Config(
                "specify either `b` or `b_file`, not both".to_string(),
            )),
            (None, None) => Err(FilterError::Config(
                "missing numerator: set `b` or `b_file`".to_string(),
            )),
        }
        .inspect_err(log_rejected)?;

        match &config.a {
            Some(a) => Self::iir(&b, &cast_all(a).inspect_err(log_rejected)?),
            None => Self::fir(&b),
        }
    }
}

impl<T: Float> Filter<T> for DigitalFilter<T> {
    fn process(&mut self, sample: T) -> T {
        self.filter(sample)
    }

    fn reset(&mut self) {
        DigitalFilter::reset(self);
    }
}

fn cast_all<T: Float>(values: &[f64]) -> Result<Vec<T>> {
    values
        .iter()
        .map(|&v| {
            T::from(v).ok_or_else(|| {
                FilterError::InvalidCoefficients(format!("{} is not representable", v))
            })
        })
        .collect()
}

fn log_rejected(err: &FilterError) {
    log::warn!("Rejected filter construction: {}", err);
}
