pub mod coefficients;
pub mod delay_line;
pub mod digital_filter;
pub mod filter;
pub mod interpolator;

pub use coefficients::{Coefficients, load_coefficients, parse_coefficients};
pub use delay_line::DelayLine;
pub use digital_filter::DigitalFilter;
pub use filter::Filter;
pub use interpolator::{
    CubicInterpolator, Extremum, Interpolator, ParabolicInterpolator, SampleShifter,
};
