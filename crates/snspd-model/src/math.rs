/// Clamps into `[lo, hi]`; NaN lands on `lo`.
pub(crate) fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Evenly spaced samples from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (samples - 1) as f64;
            let mut values: Vec<f64> = (0..samples).map(|idx| start + idx as f64 * step).collect();
            values[samples - 1] = end;
            values
        }
    }
}
