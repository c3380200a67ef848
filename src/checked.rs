//! Validating wrappers around the Goertzel evaluators.
//!
//! Every function checks its arguments, then calls the matching evaluator in
//! [`crate::goertzel`] unchanged, so an accepted call returns exactly the same
//! bits as the unchecked one.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::GoertzelError;
use crate::goertzel as core_eval;

/// Reject the inputs the evaluators cannot give a meaningful answer for.
///
/// A `filter_size` longer than `data` is refused as well: the bin grid would
/// be finer than the buffer can resolve.
pub fn validate(data: &[f64], fs: u32, filter_size: u32) -> Result<(), GoertzelError> {
    let err = if data.is_empty() {
        GoertzelError::EmptyInput
    } else if fs == 0 {
        GoertzelError::InvalidSampleRate
    } else if filter_size == 0 {
        GoertzelError::InvalidFilterSize
    } else if filter_size as usize > data.len() {
        GoertzelError::FilterTooLarge {
            filter_size,
            len: data.len(),
        }
    } else {
        return Ok(());
    };
    debug!("rejecting goertzel arguments: {}", err);
    Err(err)
}

pub(crate) fn finite(values: &[f64]) -> Result<(), GoertzelError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        debug!("rejecting non-finite frequency argument");
        Err(GoertzelError::NonFinite)
    }
}

pub(crate) fn output_len(mag: &[f64], ft: &[f64]) -> Result<(), GoertzelError> {
    if mag.len() == ft.len() {
        return Ok(());
    }
    debug!(
        "output holds {} values for {} targets",
        mag.len(),
        ft.len()
    );
    Err(GoertzelError::MismatchedLengths)
}

/// Checked [`crate::goertzel::goertzel`].
///
/// # Examples
/// ```
/// use gofft::checked::goertzel;
/// use gofft::GoertzelError;
/// assert_eq!(goertzel(&[], 8000, 1000.0, 400), Err(GoertzelError::EmptyInput));
/// ```
pub fn goertzel(data: &[f64], fs: u32, ft: f64, filter_size: u32) -> Result<f64, GoertzelError> {
    validate(data, fs, filter_size)?;
    finite(&[ft])?;
    Ok(core_eval::goertzel(data, fs, ft, filter_size))
}

/// Checked [`crate::goertzel::goertzel_m`]. `mag` must be exactly as long as `ft`.
pub fn goertzel_m(
    data: &[f64],
    fs: u32,
    ft: &[f64],
    filter_size: u32,
    mag: &mut [f64],
) -> Result<(), GoertzelError> {
    validate(data, fs, filter_size)?;
    finite(ft)?;
    output_len(mag, ft)?;
    core_eval::goertzel_m(data, fs, ft, filter_size, mag);
    Ok(())
}

/// Like [`goertzel_m`] but allocates the output.
pub fn goertzel_m_vec(
    data: &[f64],
    fs: u32,
    ft: &[f64],
    filter_size: u32,
) -> Result<Vec<f64>, GoertzelError> {
    let mut mag = vec![0.0; ft.len()];
    goertzel_m(data, fs, ft, filter_size, &mut mag)?;
    Ok(mag)
}

/// Checked [`crate::goertzel::goertzel_rng`].
pub fn goertzel_rng(
    data: &[f64],
    fs: u32,
    ft: f64,
    filter_size: u32,
    rng: f64,
) -> Result<f64, GoertzelError> {
    validate(data, fs, filter_size)?;
    finite(&[ft, rng])?;
    Ok(core_eval::goertzel_rng(data, fs, ft, filter_size, rng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_order() {
        assert_eq!(validate(&[], 0, 0), Err(GoertzelError::EmptyInput));
        assert_eq!(validate(&[1.0], 0, 0), Err(GoertzelError::InvalidSampleRate));
        assert_eq!(validate(&[1.0], 1, 0), Err(GoertzelError::InvalidFilterSize));
        assert_eq!(
            validate(&[1.0], 1, 2),
            Err(GoertzelError::FilterTooLarge {
                filter_size: 2,
                len: 1
            })
        );
        assert_eq!(validate(&[1.0], 1, 1), Ok(()));
    }

    #[test]
    fn filter_longer_than_data_is_rejected() {
        assert_eq!(
            goertzel(&[1.0, 0.0], 8, 1.0, 64),
            Err(GoertzelError::FilterTooLarge {
                filter_size: 64,
                len: 2
            })
        );
    }

    #[test]
    fn output_len_must_match() {
        assert_eq!(output_len(&[0.0; 2], &[1.0]), Err(GoertzelError::MismatchedLengths));
        assert_eq!(output_len(&[0.0], &[1.0]), Ok(()));
    }
}
