// Test intent: verifies the unrolled resonator agrees with the single-step recurrence.

use gofft::kernel::{magnitude, resonate, resonate_scalar, BinCoeffs};
use gofft::reference::dft_magnitude;
use gofft::signal::sine;

/// Longest block checked, covering every `len % 3` tail several times.
const MAX_LEN: usize = 31;

#[test]
fn unrolled_matches_scalar_bitwise() {
    let signal = sine(123.0, 1000, MAX_LEN, 0.7);
    for coeff in [-2.0, -0.3, 0.0, 1.2, 2.0] {
        for len in 0..=MAX_LEN {
            let (a1, a2) = resonate(&signal[..len], coeff);
            let (b1, b2) = resonate_scalar(&signal[..len], coeff);
            assert_eq!(a1.to_bits(), b1.to_bits(), "len={len} coeff={coeff}");
            assert_eq!(a2.to_bits(), b2.to_bits(), "len={len} coeff={coeff}");
        }
    }
}

#[test]
fn state_reduces_to_dft_magnitude() {
    let signal = sine(50.0, 1000, 200, 1.0);
    let omega = 2.0 * std::f64::consts::PI * 10.0 / 200.0;
    let bin = BinCoeffs::new(omega);
    let (q1, q2) = resonate(&signal, bin.coeff);
    let mag = magnitude(q1, q2, &bin, signal.len());
    assert!((mag - dft_magnitude(&signal, 10.0, 200)).abs() < 1e-12);
    assert_eq!(mag, bin.magnitude(&signal));
}

#[test]
fn single_sample_block() {
    let bin = BinCoeffs::new(1.0);
    assert_eq!(resonate(&[4.0], bin.coeff), (4.0, 0.0));
    assert!((bin.magnitude(&[4.0]) - 4.0).abs() < 1e-12);
}
