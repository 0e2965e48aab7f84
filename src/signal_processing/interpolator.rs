//! Piecewise-polynomial interpolation filters for fractional sample timing.
//!
//! Both filters keep the four most recent samples `s[0]` (newest) to `s[3]`
//! and fit a polynomial in `mu` through them. `interpolate(0)` returns `s[2]`,
//! `interpolate(1)` returns `s[1]`, and a fractional `mu` lands in between.
//! This is the interpolator of a symbol timing recovery loop, where the
//! extremum search locates the peak of a pulse between two samples.

use crate::signal_processing::filter::Filter;
use num_traits::Float;

const SAMPLES: usize = 4;

/// Local extremum of the interpolating polynomial within `mu` in `[0, 1)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extremum<T> {
    /// No extremum in `[0, 1)`
    None,
    Min(T),
    Max(T),
}

/// Common operations of the interpolation filters
pub trait Interpolator<T> {
    /// Shift a new sample in, dropping the oldest
    fn add_sample(&mut self, sample: T);

    /// Value at fraction `mu` between the third and second newest samples
    fn interpolate(&self, mu: T) -> T;

    /// Extremum of the current polynomial in `[0, 1)`, minimum first
    fn find_extremum(&self) -> Extremum<T>;

    /// Zero all stored samples
    fn reset(&mut self);
}

/// Below this magnitude a polynomial coefficient counts as zero
fn degenerate_threshold<T: Float>() -> T {
    T::from(1e-4).unwrap_or_else(T::epsilon)
}

fn push_sample<T: Float>(samples: &mut [T; SAMPLES], sample: T) {
    samples.rotate_right(1);
    samples[0] = sample;
}

/// Extremum of `c2*mu^2 + c1*mu + c0`
fn parabola_extremum<T: Float>(c2: T, c1: T) -> Extremum<T> {
    let two = T::one() + T::one();
    let mu = -c1 / two / c2;
    if !in_unit_interval(mu) {
        Extremum::None
    } else if c2 > T::zero() {
        Extremum::Min(mu)
    } else {
        Extremum::Max(mu)
    }
}

fn in_unit_interval<T: Float>(mu: T) -> bool {
    mu >= T::zero() && mu < T::one()
}

/// Cubic (Lagrange) interpolation filter
///
/// The cubic passes exactly through all four stored samples, placed at
/// `mu = 2, 1, 0, -1` from newest to oldest.
///
/// # Example
/// ```
/// use lti_filter::signal_processing::{CubicInterpolator, Interpolator};
///
/// let mut cubic = CubicInterpolator::new();
/// for x in [3.0, 2.0, 2.2, 0.0] {
///     cubic.add_sample(x);
/// }
/// assert_eq!(cubic.interpolate(0.0), 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct CubicInterpolator<T> {
    samples: [T; SAMPLES],
    coeffs: [T; 4],
}

impl<T: Float> CubicInterpolator<T> {
    pub fn new() -> Self {
        Self {
            samples: [T::zero(); SAMPLES],
            coeffs: [T::zero(); 4],
        }
    }

    /// Polynomial coefficients `[c0, c1, c2, c3]` of `c3*mu^3 + ... + c0`
    pub fn coefficients(&self) -> &[T; 4] {
        &self.coeffs
    }

    fn update_coefficients(&mut self) {
        let [s0, s1, s2, s3] = self.samples;
        let one = T::one();
        let two = one + one;
        let three = two + one;
        let six = two * three;

        self.coeffs[3] = s0 / six - s1 / two + s2 / two - s3 / six;
        self.coeffs[2] = s1 / two - s2 + s3 / two;
        self.coeffs[1] = -s0 / six + s1 - s2 / two - s3 / three;
        self.coeffs[0] = s2;
    }
}

impl<T: Float> Default for CubicInterpolator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Interpolator<T> for CubicInterpolator<T> {
    fn add_sample(&mut self, sample: T) {
        push_sample(&mut self.samples, sample);
        self.update_coefficients();
    }

    fn interpolate(&self, mu: T) -> T {
        let [c0, c1, c2, c3] = self.coeffs;
        ((c3 * mu + c2) * mu + c1) * mu + c0
    }

    fn find_extremum(&self) -> Extremum<T> {
        let [_, c1, c2, c3] = self.coeffs;
        let eps = degenerate_threshold();

        if c3.abs() < eps {
            if c2.abs() < eps {
                // linear
                return Extremum::None;
            }
            return parabola_extremum(c2, c1);
        }

        // Roots of the derivative 3*c3*mu^2 + 2*c2*mu + c1
        let three = T::one() + T::one() + T::one();
        let discriminant = c2 * c2 - three * c3 * c1;
        if discriminant < T::zero() {
            // monotonic
            return Extremum::None;
        }
        let root = discriminant.sqrt();
        // Second derivative is +2*root at `min` and -2*root at `max`
        let min = (-c2 + root) / three / c3;
        let max = (-c2 - root) / three / c3;

        if in_unit_interval(min) {
            Extremum::Min(min)
        } else if in_unit_interval(max) {
            Extremum::Max(max)
        } else {
            Extremum::None
        }
    }

    fn reset(&mut self) {
        self.samples = [T::zero(); SAMPLES];
        self.coeffs = [T::zero(); 4];
    }
}

/// Parabolic (Farrow) interpolation filter
///
/// `alpha` is a free design parameter; the default of 0.5 makes
/// `interpolate(1)` return the second newest sample exactly.
#[derive(Debug, Clone)]
pub struct ParabolicInterpolator<T> {
    samples: [T; SAMPLES],
    coeffs: [T; 3],
    alpha: T,
}

impl<T: Float> ParabolicInterpolator<T> {
    pub fn new() -> Self {
        let half = T::one() / (T::one() + T::one());
        Self::with_alpha(half)
    }

    pub fn with_alpha(alpha: T) -> Self {
        Self {
            samples: [T::zero(); SAMPLES],
            coeffs: [T::zero(); 3],
            alpha,
        }
    }

    /// Change `alpha`; takes effect from the next `add_sample`
    pub fn set_alpha(&mut self, alpha: T) {
        self.alpha = alpha;
    }

    pub fn alpha(&self) -> T {
        self.alpha
    }

    /// Polynomial coefficients `[c0, c1, c2]` of `c2*mu^2 + c1*mu + c0`
    pub fn coefficients(&self) -> &[T; 3] {
        &self.coeffs
    }

    fn update_coefficients(&mut self) {
        let [s0, s1, s2, s3] = self.samples;
        let alpha = self.alpha;

        self.coeffs[2] = -alpha * (-s0 + s1 + s2 - s3);
        self.coeffs[1] = -alpha * (s0 - s1 + s2 + s3) + s1;
        self.coeffs[0] = s2;
    }
}

impl<T: Float> Default for ParabolicInterpolator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Interpolator<T> for ParabolicInterpolator<T> {
    fn add_sample(&mut self, sample: T) {
        push_sample(&mut self.samples, sample);
        self.update_coefficients();
    }

    fn interpolate(&self, mu: T) -> T {
        let [c0, c1, c2] = self.coeffs;
        (c2 * mu + c1) * mu + c0
    }

    fn find_extremum(&self) -> Extremum<T> {
        let [_, c1, c2] = self.coeffs;
        if c2.abs() < degenerate_threshold() {
            return Extremum::None;
        }
        parabola_extremum(c2, c1)
    }

    fn reset(&mut self) {
        self.samples = [T::zero(); SAMPLES];
        self.coeffs = [T::zero(); 3];
    }
}

/// Fractional delay built on an interpolator
///
/// Each input sample is pushed into the interpolator and the value at a fixed
/// `mu` is emitted, delaying the signal by `2 - mu` samples.
#[derive(Debug, Clone)]
pub struct SampleShifter<T, I> {
    interpolator: I,
    mu: T,
}

impl<T: Float, I: Interpolator<T>> SampleShifter<T, I> {
    pub fn new(interpolator: I, mu: T) -> Self {
        Self { interpolator, mu }
    }

    pub fn mu(&self) -> T {
        self.mu
    }

    pub fn interpolator(&self) -> &I {
        &self.interpolator
    }
}

impl<T: Float, I: Interpolator<T>> Filter<T> for SampleShifter<T, I> {
    fn process(&mut self, sample: T) -> T {
        self.interpolator.add_sample(sample);
        self.interpolator.interpolate(self.mu)
    }

    fn reset(&mut self) {
        self.interpolator.reset();
    }
}
