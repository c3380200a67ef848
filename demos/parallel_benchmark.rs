//! Compare serial and Rayon-backed batch evaluation.

use std::time::Instant;

use gofft::parallel::{goertzel_m_parallel, goertzel_rng_parallel};
use gofft::signal::sine;
use gofft::{goertzel_m, goertzel_rng};

fn main() {
    let fs = 44_100;
    let signal = sine(440.0, fs, 1 << 16, 1.0);
    let targets: Vec<f64> = (0..256).map(|i| 20.0 + 80.0 * i as f64).collect();
    let mut mags = vec![0.0; targets.len()];

    let start = Instant::now();
    goertzel_m(&signal, fs, &targets, 4096, &mut mags);
    println!("goertzel_m serial:   {:?}", start.elapsed());

    let start = Instant::now();
    goertzel_m_parallel(&signal, fs, &targets, 4096, &mut mags);
    println!("goertzel_m parallel: {:?}", start.elapsed());

    let start = Instant::now();
    let serial = goertzel_rng(&signal, fs, 0.0, 4096, 5000.0);
    println!("goertzel_rng serial:   {:?}", start.elapsed());

    let start = Instant::now();
    let parallel = goertzel_rng_parallel(&signal, fs, 0.0, 4096, 5000.0);
    println!("goertzel_rng parallel: {:?}", start.elapsed());
    assert_eq!(serial.to_bits(), parallel.to_bits());
}
