//! Goertzel algorithm example.
//!
//! Detects the magnitude of a few target frequencies in a two-tone signal.

use gofft::signal::{mix, sine};
use gofft::{goertzel, goertzel_m};

fn main() {
    println!("=== Goertzel example ===\n");

    let sample_rate = 8000;
    let filter_size = 400;
    let signal = mix(&[
        &sine(1000.0, sample_rate, 400, 1.0)[..],
        &sine(1500.0, sample_rate, 400, 0.25)[..],
    ]);

    let target_freq = 1000.0;
    let magnitude = goertzel(&signal, sample_rate, target_freq, filter_size);
    println!("Magnitude at {target_freq} Hz: {magnitude:.3}");

    let targets = [500.0, 1000.0, 1500.0, 2000.0];
    let mut mags = [0.0; 4];
    goertzel_m(&signal, sample_rate, &targets, filter_size, &mut mags);
    for (f, m) in targets.iter().zip(&mags) {
        println!("  {f:>6.1} Hz -> {m:.4}");
    }
}
