//! Short-time Goertzel evaluation.
//!
//! The signal is cut into consecutive, non-overlapping blocks of `width`
//! samples. Every block is evaluated with `filter_size = width` and the block
//! magnitudes are averaged. A trailing partial block is either dropped or
//! zero-padded to `width`, see [`Padding`].

use alloc::vec;
use alloc::vec::Vec;

use crate::checked;
use crate::error::GoertzelError;
use crate::goertzel::goertzel;

/// Treatment of the samples left over after the last full block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    /// Ignore the remainder.
    #[default]
    Drop,
    /// Zero-pad the remainder to a full block and include it in the average.
    Zero,
}

/// Block layout of a signal for a given width.
#[derive(Debug, Clone, PartialEq)]
struct Blocks<'a> {
    data: &'a [f64],
    width: usize,
    tail: Option<Vec<f64>>,
}

impl<'a> Blocks<'a> {
    fn new(data: &'a [f64], width: usize, padding: Padding) -> Self {
        let rem = data.len() % width;
        let tail = match padding {
            Padding::Zero if rem != 0 => {
                let mut block = vec![0.0; width];
                block[..rem].copy_from_slice(&data[data.len() - rem..]);
                Some(block)
            }
            _ => None,
        };
        Self { data, width, tail }
    }

    fn count(&self) -> usize {
        self.data.len() / self.width + usize::from(self.tail.is_some())
    }

    fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.data
            .chunks_exact(self.width)
            .chain(self.tail.as_deref())
    }
}

fn validate(
    data: &[f64],
    fs: u32,
    ft: &[f64],
    width: u32,
    mag: &[f64],
) -> Result<(), GoertzelError> {
    checked::validate(data, fs, width)?;
    checked::finite(ft)?;
    checked::output_len(mag, ft)
}

/// Average Goertzel magnitude of `ft` over consecutive blocks of `width` samples.
///
/// Returns [`GoertzelError::FilterTooLarge`] if `width` exceeds `data.len()`.
///
/// # Examples
/// ```
/// use gofft::shorttime::{goertzel_st, Padding};
/// use gofft::signal::sine;
/// let tone = sine(60.0, 1000, 2000, 1.0);
/// let mag = goertzel_st(&tone, 1000, 60.0, 1000, Padding::Drop).unwrap();
/// assert!((mag - 0.5).abs() < 1e-6);
/// ```
pub fn goertzel_st(
    data: &[f64],
    fs: u32,
    ft: f64,
    width: u32,
    padding: Padding,
) -> Result<f64, GoertzelError> {
    let mut mag = [0.0];
    goertzel_st_m(data, fs, &[ft], width, padding, &mut mag)?;
    Ok(mag[0])
}

/// Short-time average for every frequency in `ft`; `mag` must match `ft` in length.
pub fn goertzel_st_m(
    data: &[f64],
    fs: u32,
    ft: &[f64],
    width: u32,
    padding: Padding,
    mag: &mut [f64],
) -> Result<(), GoertzelError> {
    validate(data, fs, ft, width, mag)?;
    let blocks = Blocks::new(data, width as usize, padding);
    let count = blocks.count();
    trace!(
        "short-time goertzel: {} blocks of {} samples, padded tail: {}",
        count,
        width,
        blocks.tail.is_some()
    );
    for (out, &f) in mag.iter_mut().zip(ft) {
        let sum = blocks
            .iter()
            .fold(0.0, |acc, block| acc + goertzel(block, fs, f, width));
        *out = sum / count as f64;
    }
    Ok(())
}
