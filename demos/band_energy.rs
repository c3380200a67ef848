//! Band-summed magnitudes with `goertzel_rng` and short-time averaging.

use gofft::goertzel_rng;
use gofft::shorttime::{goertzel_st, Padding};
use gofft::signal::{linspace_sine, mix, sine};
use gofft::BinSpan;

fn main() {
    let fs = 8000;
    let filter_size = 400;
    let signal = mix(&[
        &sine(1000.0, fs, 4000, 1.0)[..],
        &sine(1100.0, fs, 4000, 0.5)[..],
    ]);

    for (ft, rng) in [(900.0, 100.0), (990.0, 120.0), (2000.0, 500.0)] {
        let span = BinSpan::new(fs, ft, filter_size, rng);
        let total = goertzel_rng(&signal, fs, ft, filter_size, rng);
        println!(
            "[{ft}, {}) Hz -> bins {}..{} ({} bins), sum {total:.4}",
            ft + rng,
            span.start,
            span.end,
            span.len()
        );
    }

    let ecg_like = linspace_sine(60.0, 10.0, 10_000);
    match goertzel_st(&ecg_like, 1000, 60.0, 1000, Padding::Zero) {
        Ok(m) => println!("short-time 60 Hz magnitude: {m:.4}"),
        Err(e) => eprintln!("short-time evaluation failed: {e}"),
    }
}
