//! Scalar statistics over grid cell slices.
//!
//! Accumulation happens in f64 even though grid cells are f32; at a million
//! cells the f32 running sum loses enough precision to show up in the
//! rounded wire values.

/// Arithmetic mean. Returns `None` for an empty slice.
pub fn mean(values: &[f32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().map(|&v| v as f64).sum();
    Some(sum / values.len() as f64)
}

/// Pearson correlation coefficient between two equal-length samples.
///
/// Returns `None` when the slices are empty, their lengths differ, or either
/// sample has zero variance (correlation is undefined there, not zero).
pub fn pearson(a: &[f32], b: &[f32]) -> Option<f64> {
    if a.is_empty() || a.len() != b.len() {
        return None;
    }

    let mean_a = mean(a)?;
    let mean_b = mean(b)?;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let dx = x as f64 - mean_a;
        let dy = y as f64 - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }

    if var_a == 0.0 || var_b == 0.0 {
        return None;
    }

    Some(cov / (var_a.sqrt() * var_b.sqrt()))
}
