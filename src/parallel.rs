//! Rayon-backed batch evaluation.
//!
//! Every frequency of [`goertzel_m_parallel`] and every bin of
//! [`goertzel_rng_parallel`] runs its own resonator over the shared,
//! read-only sample buffer, so the work splits without locks. Results are
//! bit-identical to the serial evaluators: the multi-frequency outputs land
//! in disjoint slots and the band sum is reduced serially in ascending bin
//! order after the bins have been evaluated in parallel.
//!
//! Small jobs stay on the calling thread. A job is dispatched to Rayon when
//! `bins * samples` reaches the parallel threshold, which is resolved in
//! this order:
//!
//! 1. [`set_parallel_threshold`], when non-zero;
//! 2. the `GOFFT_PAR_THRESHOLD` environment variable (`std` only);
//! 3. `per_core_work * threads`, with `per_core_work` from
//!    [`set_parallel_per_core_work`] or `GOFFT_PAR_PER_CORE_WORK` and
//!    `threads` from [`set_parallel_threads`], `GOFFT_PAR_THREADS` or
//!    `num_cpus::get()`.

use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

#[cfg(feature = "std")]
use std::sync::OnceLock;

use crate::goertzel::{goertzel, BinSpan};

/// Resonator updates each worker should own before splitting pays off.
const DEFAULT_PER_CORE_WORK: usize = 1 << 16;

/// `0` means no override.
static PARALLEL_THRESHOLD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
static PARALLEL_PER_CORE_WORK_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
static PARALLEL_THREAD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);

#[cfg(feature = "std")]
static PARALLEL_ENV: OnceLock<ParallelEnv> = OnceLock::new();

#[cfg(feature = "std")]
struct ParallelEnv {
    threshold: usize,
    per_core_work: usize,
    threads: usize,
}

#[cfg(feature = "std")]
fn env_usize(name: &str) -> Option<usize> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<usize>() {
        Ok(v) => Some(v),
        Err(_) => {
            debug!("ignoring {}={:?}: not an unsigned integer", name, raw);
            None
        }
    }
}

#[cfg(feature = "std")]
fn parallel_env() -> &'static ParallelEnv {
    PARALLEL_ENV.get_or_init(|| {
        let env = ParallelEnv {
            threshold: env_usize("GOFFT_PAR_THRESHOLD").unwrap_or(0),
            per_core_work: env_usize("GOFFT_PAR_PER_CORE_WORK")
                .filter(|&w| w != 0)
                .unwrap_or(DEFAULT_PER_CORE_WORK),
            threads: env_usize("GOFFT_PAR_THREADS")
                .filter(|&t| t != 0)
                .unwrap_or_else(|| num_cpus::get().max(1)),
        };
        debug!(
            "parallel goertzel env: threshold={} per_core_work={} threads={}",
            env.threshold,
            env.per_core_work,
            env.threads
        );
        env
    })
}

/// Set the minimum `bins * samples` product dispatched to Rayon.
///
/// Passing `0` reverts to the environment or the built-in heuristic.
pub fn set_parallel_threshold(work: usize) {
    PARALLEL_THRESHOLD_OVERRIDE.store(work, Ordering::Relaxed);
}

/// Set the number of resonator updates each thread should receive.
/// `0` reverts to the default or environment variable.
pub fn set_parallel_per_core_work(work: usize) {
    PARALLEL_PER_CORE_WORK_OVERRIDE.store(work, Ordering::Relaxed);
}

/// Override the thread count assumed by the heuristic. `0` uses the
/// environment or the number of CPUs.
pub fn set_parallel_threads(threads: usize) {
    PARALLEL_THREAD_OVERRIDE.store(threads, Ordering::Relaxed);
}

fn override_or(slot: &AtomicUsize, fallback: impl FnOnce() -> usize) -> usize {
    match slot.load(Ordering::Relaxed) {
        0 => fallback(),
        v => v,
    }
}

fn parallel_threads() -> usize {
    override_or(&PARALLEL_THREAD_OVERRIDE, || {
        #[cfg(feature = "std")]
        {
            parallel_env().threads
        }
        #[cfg(not(feature = "std"))]
        {
            1
        }
    })
}

fn parallel_per_core_work() -> usize {
    override_or(&PARALLEL_PER_CORE_WORK_OVERRIDE, || {
        #[cfg(feature = "std")]
        {
            parallel_env().per_core_work
        }
        #[cfg(not(feature = "std"))]
        {
            DEFAULT_PER_CORE_WORK
        }
    })
}

/// Threshold currently in effect, see the module docs for the resolution order.
pub fn parallel_threshold() -> usize {
    override_or(&PARALLEL_THRESHOLD_OVERRIDE, || {
        #[cfg(feature = "std")]
        let from_env = parallel_env().threshold;
        #[cfg(not(feature = "std"))]
        let from_env = 0;
        if from_env != 0 {
            from_env
        } else {
            parallel_per_core_work().saturating_mul(parallel_threads())
        }
    })
}

fn should_parallelize(bins: usize, samples: usize) -> bool {
    let threshold = parallel_threshold();
    let parallel = bins > 1 && bins.saturating_mul(samples) >= threshold;
    trace!(
        "goertzel batch of {} bins x {} samples: {} (threshold {})",
        bins,
        samples,
        if parallel { "parallel" } else { "serial" },
        threshold
    );
    parallel
}

/// Parallel [`crate::goertzel::goertzel_m`].
///
/// Requires the `parallel` feature, which enables the [`rayon`](https://crates.io/crates/rayon) dependency.
///
/// # Panics
/// If `mag` is shorter than `ft`.
///
/// # Examples
/// ```
/// use gofft::parallel::goertzel_m_parallel;
/// use gofft::signal::sine;
/// let tone = sine(1000.0, 8000, 400, 1.0);
/// let mut mag = [0.0; 3];
/// goertzel_m_parallel(&tone, 8000, &[1000.0, 2000.0, 3000.0], 400, &mut mag);
/// assert!((mag[0] - 0.5).abs() < 1e-6);
/// ```
pub fn goertzel_m_parallel(
    data: &[f64],
    fs: u32,
    ft: &[f64],
    filter_size: u32,
    mag: &mut [f64],
) {
    let mag = &mut mag[..ft.len()];
    if !should_parallelize(ft.len(), data.len()) {
        crate::goertzel::goertzel_m(data, fs, ft, filter_size, mag);
        return;
    }
    mag.par_iter_mut()
        .zip(ft.par_iter())
        .for_each(|(out, &f)| *out = goertzel(data, fs, f, filter_size));
}

/// Parallel [`crate::goertzel::goertzel_rng`].
///
/// Bins are evaluated concurrently, then summed on the calling thread from
/// the lowest bin upwards, matching the serial rounding exactly.
pub fn goertzel_rng_parallel(data: &[f64], fs: u32, ft: f64, filter_size: u32, rng: f64) -> f64 {
    let span = BinSpan::new(fs, ft, filter_size, rng);
    if !should_parallelize(span.len(), data.len()) {
        return crate::goertzel::goertzel_rng(data, fs, ft, filter_size, rng);
    }
    let bins: Vec<f64> = span.bins().collect();
    let mags: Vec<f64> = bins
        .par_iter()
        .map(|&k| span.bin_magnitude(data, k))
        .collect();
    mags.iter().fold(0.0, |acc, &m| acc + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_bin_never_splits() {
        assert!(!should_parallelize(1, usize::MAX));
    }

    #[test]
    fn override_wins_over_heuristic() {
        set_parallel_threshold(10);
        assert_eq!(parallel_threshold(), 10);
        assert!(should_parallelize(2, 5));
        assert!(!should_parallelize(2, 4));
        set_parallel_threshold(0);
        assert_ne!(parallel_threshold(), 0);
    }
}
