//! Demonstrates enabling verbose logging for gofft.
use gofft::checked;
use gofft::shorttime::{goertzel_st, Padding};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let signal = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let _ = goertzel_st(&signal, 8, 2.0, 2, Padding::Zero);
    let _ = checked::goertzel(&signal, 0, 2.0, 4);
}
