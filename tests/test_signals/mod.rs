#![allow(dead_code)]

use rand::{RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Unit impulse of `len` samples
pub fn impulse(len: usize) -> Vec<f64> {
    (0..len).map(|n| if n == 0 { 1.0 } else { 0.0 }).collect()
}

/// Seeded uniform noise in [-1, 1)
pub fn noise(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(-1.0..1.0)).collect()
}

/// Sine at `freq` cycles per sample
pub fn sine(len: usize, freq: f64) -> Vec<f64> {
    (0..len)
        .map(|n| (2.0 * std::f64::consts::PI * freq * n as f64).sin())
        .collect()
}

/// Unique scratch path under the system temp directory
pub fn scratch_path(name: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("lti_filter_{}_{}_{}", std::process::id(), n, name))
}

/// Write coefficients one per line
pub fn write_coefficients(name: &str, coeffs: &[f64]) -> PathBuf {
    let path = scratch_path(name);
    let text: String = coeffs.iter().map(|c| format!("{}\n", c)).collect();
    std::fs::write(&path, text).expect("failed to write coefficient file");
    path
}
