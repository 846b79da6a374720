//! Full-length FFT magnitudes

use num_complex::Complex;
use rustfft::FftPlanner;

/// Unwindowed FFT over the whole signal
pub struct FftProcessor {
    planner: FftPlanner<f64>,
}

impl FftProcessor {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Complex spectrum, one coefficient per input sample
    pub fn complex_spectrum(&mut self, samples: &[f64]) -> Vec<Complex<f64>> {
        let mut buffer: Vec<Complex<f64>> =
            samples.iter().map(|&s| Complex::new(s, 0.0)).collect();

        if buffer.is_empty() {
            return buffer;
        }

        let fft = self.planner.plan_fft_forward(buffer.len());
        fft.process(&mut buffer);
        buffer
    }

    /// `|X[k]|` for every `k` in `0..samples.len()`
    pub fn magnitude_spectrum(&mut self, samples: &[f64]) -> Vec<f64> {
        self.complex_spectrum(samples)
            .iter()
            .map(|c| c.norm())
            .collect()
    }
}

impl Default for FftProcessor {
    fn default() -> Self {
        Self::new()
    }
}
