//! Direct DFT evaluation of individual bins.
//!
//! `O(N)` per bin with one `sin`/`cos` pair per sample, so it is much slower
//! than the resonator, but it follows the DFT definition literally and has no
//! recursion error to accumulate. Tests and benches use it as ground truth.

use alloc::vec::Vec;
use core::f64::consts::PI;

use libm::{cos, sin, sqrt};

use crate::goertzel::bin_index;

/// `|X[k]| / N` where `X[k] = Σ x[n]·e^{-2πi·k·n/filter_size}`.
pub fn dft_magnitude(data: &[f64], k: f64, filter_size: u32) -> f64 {
    let step = 2.0 * PI * k / f64::from(filter_size);
    let (re, im) = data
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(re, im), (n, &x)| {
            let phase = step * n as f64;
            (re + x * cos(phase), im - x * sin(phase))
        });
    let n = data.len() as f64;
    sqrt(re * re + im * im) / n
}

/// [`dft_magnitude`] at the bin [`crate::goertzel`] would pick for each target.
pub fn dft_magnitudes(data: &[f64], fs: u32, ft: &[f64], filter_size: u32) -> Vec<f64> {
    ft.iter()
        .map(|&f| dft_magnitude(data, bin_index(fs, f, filter_size), filter_size))
        .collect()
}
