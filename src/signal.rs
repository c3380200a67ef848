//! Sinusoid generators for examples, tests and benches.

use alloc::vec::Vec;
use core::f64::consts::PI;

use libm::sin;

/// `amplitude * sin(2π * freq * i / fs)` for `i in 0..len`.
pub fn sine(freq: f64, fs: u32, len: usize, amplitude: f64) -> Vec<f64> {
    let fs = f64::from(fs);
    (0..len)
        .map(|i| amplitude * sin(2.0 * PI * freq * i as f64 / fs))
        .collect()
}

/// `count` evenly spaced instants from `0` to `duration` inclusive.
pub fn linspace(duration: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => alloc::vec![0.0],
        _ => {
            let step = duration / (count - 1) as f64;
            (0..count).map(|i| i as f64 * step).collect()
        }
    }
}

/// Unit sine of `freq` Hz sampled on [`linspace`]`(duration, count)`.
///
/// The endpoint is included, so the effective rate is `(count - 1) / duration`
/// rather than `count / duration`.
pub fn linspace_sine(freq: f64, duration: f64, count: usize) -> Vec<f64> {
    linspace(duration, count)
        .into_iter()
        .map(|t| sin(2.0 * PI * freq * t))
        .collect()
}

/// Sample-wise sum of `parts`; shorter parts count as zero past their end.
pub fn mix(parts: &[&[f64]]) -> Vec<f64> {
    let len = parts.iter().map(|p| p.len()).max().unwrap_or(0);
    let mut out = alloc::vec![0.0; len];
    for part in parts {
        for (o, &x) in out.iter_mut().zip(part.iter()) {
            *o += x;
        }
    }
    out
}
