//! Multiplicative noise with exact total preservation.
//!
//! The rescaler is the one step with real invariants: whatever jitter is
//! injected, the output must sum back to the authoritative total, with
//! rounding drift absorbed by the last bucket so reruns are reproducible.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Jitter applied to each hourly slice before rescaling.
pub const HOURLY_JITTER_SD: f64 = 0.25;

/// Substitute for a zero-sum noised sequence to avoid dividing by zero.
const ZERO_SUM_EPSILON: f64 = 1e-9;

/// Round `value` to `decimals` fractional digits (half away from zero).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Jitter `slices` multiplicatively and rescale so the result sums to `total`.
///
/// The RNG seed derives from (`seed`, `total`, slice count) alone, so each
/// warehouse-day gets distinct-looking noise while staying reproducible
/// across runs and independent of generation order. Each element is drawn
/// from Normal(1.0, `jitter_sd`), clamped at zero, rescaled to `total`,
/// then rounded to `decimals` digits. The rounding drift is added entirely
/// to the last element, floored at zero.
pub fn jitter_preserving_total(
    slices: &[f64],
    total: f64,
    jitter_sd: f64,
    decimals: u32,
    seed: u64,
) -> Vec<f64> {
    if slices.is_empty() {
        return Vec::new();
    }

    let local_seed = seed ^ ((total * 1000.0) as u64) ^ (slices.len() as u64);
    let mut rng = StdRng::seed_from_u64(local_seed);
    let normal = Normal::new(1.0, jitter_sd.max(0.0)).expect("finite non-negative std dev");

    let noisy: Vec<f64> = slices
        .iter()
        .map(|s| (s * normal.sample(&mut rng)).max(0.0))
        .collect();

    let mut sum: f64 = noisy.iter().sum();
    if sum == 0.0 {
        sum = ZERO_SUM_EPSILON;
    }

    let mut rounded: Vec<f64> = noisy
        .iter()
        .map(|x| round_to(x * (total / sum), decimals).max(0.0))
        .collect();

    let drift = total - rounded.iter().sum::<f64>();
    if let Some(last) = rounded.last_mut() {
        *last = (*last + drift).max(0.0);
    }
    rounded
}
