//! Digital Signal Processing utilities

pub mod fft;

pub use fft::FftProcessor;

/// Signed DFT bin frequencies for `n` samples spaced `sample_spacing` seconds
/// apart: `[0, 1, ..., (n-1)/2, -(n/2), ..., -1] / (n * sample_spacing)`
pub fn fft_frequencies(n: usize, sample_spacing: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }

    let scale = 1.0 / (n as f64 * sample_spacing);
    let positive_end = (n - 1) / 2 + 1;

    (0..n)
        .map(|k| {
            if k < positive_end {
                k as f64 * scale
            } else {
                -((n - k) as f64) * scale
            }
        })
        .collect()
}

/// Index of the largest magnitude among bins with frequency > 0.
///
/// Ties resolve to the lowest index. `None` when no bin is strictly positive.
pub fn positive_peak(frequencies: &[f64], magnitudes: &[f64]) -> Option<usize> {
    frequencies
        .iter()
        .zip(magnitudes.iter())
        .enumerate()
        .filter(|(_, (freq, _))| **freq > 0.0)
        .fold(None, |best: Option<(usize, f64)>, (i, (_, &mag))| match best {
            Some((_, best_mag)) if mag <= best_mag || mag.is_nan() => best,
            _ => Some((i, mag)),
        })
        .map(|(i, _)| i)
}
