//! Goertzel algorithm: efficient single-bin DFT magnitudes.
//! no_std compatible, allocation free.
//!
//! A target frequency `ft` is mapped to the bin
//! `k = floor(0.5 + filter_size * ft / fs)` of a notional `filter_size`-point
//! DFT. The resonator then runs over the whole sample buffer, which does not
//! have to be `filter_size` long.

use core::f64::consts::PI;

use libm::floor;

use crate::kernel::BinCoeffs;

/// Round half up, `floor(0.5 + x)`. Exact halves always move to the larger
/// bin, unlike `f64::round_ties_even`.
#[inline]
pub fn quantize(x: f64) -> f64 {
    floor(0.5 + x)
}

/// Bin index selected for `ft` at sample rate `fs` and filter size `filter_size`.
#[inline]
pub fn bin_index(fs: u32, ft: f64, filter_size: u32) -> f64 {
    quantize(f64::from(filter_size) * ft / f64::from(fs))
}

/// Compute the magnitude at the DFT bin closest to `ft` using the Goertzel algorithm.
/// - `data`: real-valued signal, at least one sample
/// - `fs`: sample rate in Hz
/// - `ft`: frequency to detect in Hz
/// - `filter_size`: DFT length used to quantize `ft`
///
/// The result is normalized by `data.len()`; a unit sine sitting exactly on
/// the bin reads `0.5`. Empty input or a zero rate give NaN or infinity.
///
/// # Examples
/// ```
/// use gofft::goertzel;
/// use gofft::signal::sine;
/// let tone = sine(1000.0, 8000, 400, 1.0);
/// let mag = goertzel(&tone, 8000, 1000.0, 400);
/// assert!((mag - 0.5).abs() < 1e-6);
/// ```
pub fn goertzel(data: &[f64], fs: u32, ft: f64, filter_size: u32) -> f64 {
    let k = bin_index(fs, ft, filter_size);
    let omega = 2.0 * PI * k / f64::from(filter_size);
    BinCoeffs::new(omega).magnitude(data)
}

/// Evaluate [`goertzel`] for every frequency in `ft`, writing `mag[c]` for `ft[c]`.
///
/// Each entry is computed independently and is bit-identical to a separate
/// [`goertzel`] call. `mag` must hold at least `ft.len()` values; only the
/// first `ft.len()` are written.
///
/// # Panics
/// If `mag` is shorter than `ft`.
pub fn goertzel_m(data: &[f64], fs: u32, ft: &[f64], filter_size: u32, mag: &mut [f64]) {
    for (out, &f) in mag[..ft.len()].iter_mut().zip(ft) {
        *out = goertzel(data, fs, f, filter_size);
    }
}

/// Sum of the bin magnitudes covering the band `[ft, ft + rng)`.
///
/// Both band edges are quantized with [`quantize`] on the bin spacing
/// `fs / filter_size` and every bin in `[k_s, k_e)` is evaluated with a fresh
/// resonator. Magnitudes are added in ascending bin order. An empty band
/// returns `0.0`. The result is a sum, not an average: divide by
/// [`BinSpan::len`] for a per-bin figure.
///
/// # Examples
/// ```
/// use gofft::{goertzel, goertzel_rng};
/// use gofft::signal::sine;
/// let tone = sine(1000.0, 8000, 400, 1.0);
/// let band = goertzel_rng(&tone, 8000, 900.0, 400, 200.0);
/// assert!((band - goertzel(&tone, 8000, 1000.0, 400)).abs() < 1e-6);
/// ```
pub fn goertzel_rng(data: &[f64], fs: u32, ft: f64, filter_size: u32, rng: f64) -> f64 {
    let span = BinSpan::new(fs, ft, filter_size, rng);
    span.bins().fold(0.0, |acc, k| acc + span.bin_magnitude(data, k))
}

/// Contiguous run of bins `[start, end)` selected by a frequency band.
///
/// Indices stay `f64` and advance by exactly `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinSpan {
    pub start: f64,
    pub end: f64,
    step_normalized: f64,
}

impl BinSpan {
    /// Quantize the band `[ft, ft + rng)` at sample rate `fs` and filter size `filter_size`.
    pub fn new(fs: u32, ft: f64, filter_size: u32, rng: f64) -> Self {
        let f_step = f64::from(fs) / f64::from(filter_size);
        Self {
            start: quantize(ft / f_step),
            end: quantize((ft + rng) / f_step),
            step_normalized: 1.0 / f64::from(filter_size),
        }
    }

    /// Also true when either edge is NaN.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn is_empty(&self) -> bool {
        !(self.start < self.end)
    }

    /// Number of bins in the span.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start) as usize
        }
    }

    /// Bin indices in ascending order.
    pub fn bins(&self) -> impl Iterator<Item = f64> {
        let end = self.end;
        core::iter::successors(Some(self.start), |k| Some(k + 1.0)).take_while(move |&k| k < end)
    }

    /// Angular frequency of bin `k`.
    #[inline]
    pub fn omega(&self, k: f64) -> f64 {
        2.0 * PI * (k * self.step_normalized)
    }

    /// Magnitude of bin `k` over `data`.
    #[inline]
    pub fn bin_magnitude(&self, data: &[f64], k: f64) -> f64 {
        BinCoeffs::new(self.omega(k)).magnitude(data)
    }
}
