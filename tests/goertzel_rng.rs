// Test intent: verifies band-summed goertzel_rng including empty and single-bin bands.

use gofft::reference::dft_magnitude;
use gofft::signal::{mix, sine};
use gofft::{goertzel, goertzel_rng, BinSpan};

/// Sample rate used throughout.
const FS: u32 = 8000;
/// Samples per signal and filter size; 20 Hz per bin.
const LEN: usize = 400;

fn two_tones() -> Vec<f64> {
    // Bins 50 (amplitude 1.0) and 55 (amplitude 0.5).
    mix(&[
        &sine(1000.0, FS, LEN, 1.0)[..],
        &sine(1100.0, FS, LEN, 0.5)[..],
    ])
}

#[test]
fn band_around_tone_matches_single_bin() {
    let tone = sine(1000.0, FS, LEN, 1.0);
    let band = goertzel_rng(&tone, FS, 900.0, LEN as u32, 200.0);
    assert!((band - 0.5).abs() < 1e-6);
    assert!((band - goertzel(&tone, FS, 1000.0, LEN as u32)).abs() < 1e-6);
}

#[test]
fn single_bin_band_equals_single_evaluation() {
    let signal = two_tones();
    // [990, 1010) quantizes to bins [50, 51).
    assert_eq!(BinSpan::new(FS, 990.0, LEN as u32, 20.0).len(), 1);
    let band = goertzel_rng(&signal, FS, 990.0, LEN as u32, 20.0);
    let single = goertzel(&signal, FS, 1000.0, LEN as u32);
    assert!((band - single).abs() < 1e-12);
}

#[test]
fn single_bin_band_off_grid() {
    let signal = sine(1000.0, FS, 300, 1.0);
    let f_step = f64::from(FS) / 300.0;
    for k in [30.0, 37.0, 38.0, 45.0] {
        let band = goertzel_rng(&signal, FS, k * f_step, 300, f_step);
        let single = goertzel(&signal, FS, k * f_step, 300);
        assert!((band - single).abs() < 1e-12, "bin {k}");
        assert!((band - dft_magnitude(&signal, k, 300)).abs() < 1e-12);
    }
}

#[test]
fn sums_instead_of_averaging() {
    let signal = two_tones();
    // [990, 1110) covers bins 50..=55.
    let span = BinSpan::new(FS, 990.0, LEN as u32, 120.0);
    assert_eq!((span.start, span.end), (50.0, 56.0));
    let band = goertzel_rng(&signal, FS, 990.0, LEN as u32, 120.0);
    assert!((band - 0.75).abs() < 1e-6);
}

#[test]
fn sum_follows_ascending_bins() {
    let signal = two_tones();
    let span = BinSpan::new(FS, 700.0, LEN as u32, 600.0);
    let expected = span
        .bins()
        .map(|k| span.bin_magnitude(&signal, k))
        .fold(0.0, |acc, m| acc + m);
    let band = goertzel_rng(&signal, FS, 700.0, LEN as u32, 600.0);
    assert_eq!(band.to_bits(), expected.to_bits());
}

#[test]
fn empty_band_is_exactly_zero() {
    let signal = two_tones();
    for (ft, rng) in [(1000.0, 0.0), (1000.0, -50.0), (1000.0, 5.0)] {
        let band = goertzel_rng(&signal, FS, ft, LEN as u32, rng);
        assert_eq!(band.to_bits(), 0.0f64.to_bits(), "ft={ft} rng={rng}");
    }
}

#[test]
fn off_grid_scenario_matches_direct_dft() {
    // [900, 1100) at 300-point resolution covers bins 34..41.
    let tone = sine(1000.0, FS, 300, 1.0);
    let band = goertzel_rng(&tone, FS, 900.0, 300, 200.0);
    let expected: f64 = (34..41)
        .map(|k| dft_magnitude(&tone, f64::from(k), 300))
        .sum();
    assert!((band - expected).abs() < 1e-10);
}
