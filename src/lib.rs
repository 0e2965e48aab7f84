pub mod config;
pub mod error;
pub mod signal_processing;

#[cfg(test)]
mod test_utils;

pub use config::FilterConfig;
pub use error::{FilterError, Result};
pub use signal_processing::{
    Coefficients, CubicInterpolator, DelayLine, DigitalFilter, Extremum, Filter, Interpolator,
    ParabolicInterpolator, SampleShifter,
};
