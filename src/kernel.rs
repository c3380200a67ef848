//! Goertzel resonator: the recursive single-bin DFT filter.
//!
//! The filter runs `q0 = coeff * q1 - q2 + x[n]` over a block of samples and
//! returns the last two states `(q1, q2)`. [`magnitude`] reduces that pair to
//! the normalized magnitude of the bin. No state survives between calls.

use libm::{cos, sin, sqrt};

/// Trigonometric coefficients for one DFT bin at angular frequency `omega`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinCoeffs {
    pub cosine: f64,
    pub sine: f64,
    /// `2 * cos(omega)`, the feedback term of the resonator.
    pub coeff: f64,
}

impl BinCoeffs {
    pub fn new(omega: f64) -> Self {
        let cosine = cos(omega);
        Self {
            cosine,
            sine: sin(omega),
            coeff: 2.0 * cosine,
        }
    }

    /// Run the resonator over `data` and reduce the final state to a magnitude.
    #[inline]
    pub fn magnitude(&self, data: &[f64]) -> f64 {
        let (q1, q2) = resonate(data, self.coeff);
        magnitude(q1, q2, self, data.len())
    }
}

/// Feed every sample of `data` through the resonator, three samples per step.
///
/// Each group of three performs the same dependent updates as three calls of
/// the single-step recurrence, with the state names rotated instead of
/// copied. The `len % 3` tail falls back to the single-step form, so the
/// result matches [`resonate_scalar`] bit for bit.
#[inline]
pub fn resonate(data: &[f64], coeff: f64) -> (f64, f64) {
    let mut q1 = 0.0;
    let mut q2 = 0.0;
    let mut chunks = data.chunks_exact(3);
    for c in &mut chunks {
        let q0 = coeff * q1 - q2 + c[0];
        q2 = coeff * q0 - q1 + c[1];
        q1 = coeff * q2 - q0 + c[2];
    }
    for &x in chunks.remainder() {
        let q0 = coeff * q1 - q2 + x;
        q2 = q1;
        q1 = q0;
    }
    (q1, q2)
}

/// Single-step form of [`resonate`].
pub fn resonate_scalar(data: &[f64], coeff: f64) -> (f64, f64) {
    let mut q1 = 0.0;
    let mut q2 = 0.0;
    for &x in data {
        let q0 = coeff * q1 - q2 + x;
        q2 = q1;
        q1 = q0;
    }
    (q1, q2)
}

/// Magnitude of the bin described by `bin` after `len` samples.
///
/// Both components are divided by `len` (the sample count), not by the
/// filter size. `len == 0` yields NaN.
#[inline]
pub fn magnitude(q1: f64, q2: f64, bin: &BinCoeffs, len: usize) -> f64 {
    let n = len as f64;
    let real = (q1 - q2 * bin.cosine) / n;
    let imag = (q2 * bin.sine) / n;
    sqrt(real * real + imag * imag)
}
