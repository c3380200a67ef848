//! Error type reported by the validating entry points.
//!
//! The evaluators in [`crate::goertzel`] never fail; these variants describe
//! the arguments [`crate::checked`] and [`crate::shorttime`] refuse to pass on.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoertzelError {
    /// The sample buffer is empty.
    EmptyInput,
    /// The sample rate is zero.
    InvalidSampleRate,
    /// The filter size or block width is zero.
    InvalidFilterSize,
    /// The block width exceeds the number of samples.
    FilterTooLarge { filter_size: u32, len: usize },
    /// A frequency or band width is NaN or infinite.
    NonFinite,
    /// Output and target lists differ in length.
    MismatchedLengths,
}

impl fmt::Display for GoertzelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => f.write_str("sample buffer is empty"),
            Self::InvalidSampleRate => f.write_str("sample rate must be positive"),
            Self::InvalidFilterSize => f.write_str("filter size must be positive"),
            Self::FilterTooLarge { filter_size, len } => write!(
                f,
                "filter size {filter_size} exceeds data length {len}"
            ),
            Self::NonFinite => f.write_str("frequency arguments must be finite"),
            Self::MismatchedLengths => {
                f.write_str("output length does not match the number of target frequencies")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GoertzelError {}
