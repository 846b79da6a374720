// src/core/spectrum.rs
//
// One-sided magnitude spectrum and the note estimate derived from it.

use serde::Serialize;

use crate::config::NoteName;

/// Non-negative half of a real signal's DFT
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spectrum {
    frequencies: Vec<f64>,
    magnitudes: Vec<f64>,
}

impl Spectrum {
    /// Pair bin frequencies with magnitudes; the longer input is cut to the
    /// shorter one's length
    pub fn new(mut frequencies: Vec<f64>, mut magnitudes: Vec<f64>) -> Self {
        let len = frequencies.len().min(magnitudes.len());
        frequencies.truncate(len);
        magnitudes.truncate(len);
        Self {
            frequencies,
            magnitudes,
        }
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Spacing between adjacent bins in Hz
    pub fn resolution(&self) -> Option<f64> {
        self.frequencies
            .get(1)
            .map(|&f1| f1 - self.frequencies[0])
    }

    /// Bins with `center - half_width <= f <= center + half_width`
    pub fn window(&self, center: f64, half_width: f64) -> SpectrumWindow<'_> {
        let low = center - half_width;
        let high = center + half_width;
        let start = self.frequencies.partition_point(|&f| f < low);
        let end = self.frequencies.partition_point(|&f| f <= high).max(start);

        SpectrumWindow {
            low_hz: low,
            high_hz: high,
            frequencies: &self.frequencies[start..end],
            magnitudes: &self.magnitudes[start..end],
        }
    }
}

/// Borrowed slice of a spectrum, used for plotting around the peak
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpectrumWindow<'a> {
    pub low_hz: f64,
    pub high_hz: f64,
    pub frequencies: &'a [f64],
    pub magnitudes: &'a [f64],
}

impl<'a> SpectrumWindow<'a> {
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

/// Dominant frequency and its note name
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NoteEstimate {
    /// Hz, always > 0
    pub peak_frequency: f64,
    pub note_name: NoteName,
}

impl NoteEstimate {
    /// Peak frequency rounded to two decimals, e.g. `"440.00 Hz"`
    pub fn display_frequency(&self) -> String {
        format!("{:.2} Hz", self.peak_frequency)
    }
}
