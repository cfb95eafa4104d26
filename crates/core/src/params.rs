//! Lenient readers for the free-form `params` object of a [`SynthConfig`](crate::config::SynthConfig).
//!
//! A missing key, a value of the wrong JSON type or a non-finite number all
//! yield the caller's default. Tuning knobs can never make synthesis fail.

use serde_json::Value;

/// Finite number at `params[name]`, integers included.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params
        .get(name)
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

/// Non-negative integer at `params[name]`.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

/// Half-open range read from a `min_key`/`max_key` pair.
///
/// Each bound falls back independently; swapped bounds are reordered and
/// negative bounds are raised to zero.
pub fn param_range(params: &Value, min_key: &str, max_key: &str, default: (f64, f64)) -> (f64, f64) {
    let lo = param_f64(params, min_key, default.0).max(0.0);
    let hi = param_f64(params, max_key, default.1).max(0.0);
    if lo <= hi {
        (lo, hi)
    } else {
        (hi, lo)
    }
}
