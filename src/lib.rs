//! # gofft - Goertzel spectral magnitudes for Rust
//!
//! Evaluate the DFT magnitude of a real signal at a handful of frequencies
//! without paying for a full transform. Every evaluator runs the same
//! second-order Goertzel resonator and differs only in which bins it visits.
//!
//! ## Features
//!
//! - **Single bin**: [`goertzel`] quantizes one target frequency to a bin.
//! - **Many bins**: [`goertzel_m`] evaluates a list of targets into a caller buffer.
//! - **Band sum**: [`goertzel_rng`] sums the magnitude of every bin in `[ft, ft + rng)`.
//! - **Short-time averaging**: [`shorttime`] averages over consecutive blocks.
//! - **Validated entry points**: [`checked`] reports bad arguments as [`GoertzelError`].
//! - **Parallel batches** (optional): [`parallel`] spreads bins across Rayon workers.
//!
//! ## Cargo Features
//!
//! - `std` (default): enable standard library features and environment configuration
//! - `parallel`: enable parallel batch evaluation with Rayon
//! - `verbose-logging`: emit diagnostics through the [`log`](https://crates.io/crates/log) facade
//! - `internal-tests`: property tests and randomized signals
//!
//! ## Numerics
//!
//! Results are normalized by the number of samples `N`, not by the filter
//! size, and bins are chosen with `floor(0.5 + x)` so exact halves round up.
//! All transcendental functions come from `libm`, so `std` and `no_std`
//! builds produce the same bits.
//!
//! ## Examples
//!
//! Run the examples with:
//! ```bash
//! cargo run --example goertzel
//! cargo run --example band_energy
//! cargo run --example parallel_benchmark --features parallel
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "verbose-logging")]
macro_rules! debug {
    ($($arg:tt)+) => { log::debug!($($arg)+) };
}
#[cfg(not(feature = "verbose-logging"))]
macro_rules! debug {
    ($($arg:tt)+) => {};
}

#[cfg(feature = "verbose-logging")]
macro_rules! trace {
    ($($arg:tt)+) => { log::trace!($($arg)+) };
}
#[cfg(not(feature = "verbose-logging"))]
macro_rules! trace {
    ($($arg:tt)+) => {};
}

/// Second-order resonator shared by every evaluator.
pub mod kernel;

/// Goertzel evaluators
///
/// Single-frequency, multi-frequency and band-summed magnitudes.
pub mod goertzel;

pub mod error;

/// Argument validation in front of the evaluators.
pub mod checked;

/// Short-time Goertzel
///
/// Block-wise evaluation averaged over consecutive windows of a long signal.
pub mod shorttime;

/// Test signal generators.
pub mod signal;

/// Direct DFT evaluation used to cross-check the recursion.
pub mod reference;

/// Parallel batch evaluation
///
/// Requires the `parallel` feature.
#[cfg(feature = "parallel")]
pub mod parallel;

pub use error::GoertzelError;
pub use goertzel::{goertzel, goertzel_m, goertzel_rng, BinSpan};
