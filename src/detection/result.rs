//! Per-file recognition report handed to the presentation layer

use serde::Serialize;

use crate::config::NoteName;
use crate::core::{Recognition, SpectralAnalyzer};

/// Points of the spectrum shown around the peak
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotData {
    pub low_hz: f64,
    pub high_hz: f64,
    pub frequencies: Vec<f64>,
    pub magnitudes: Vec<f64>,
}

/// Everything a display needs for one analysed file
#[derive(Debug, Clone, Serialize)]
pub struct NoteReport {
    pub file_path: String,
    pub sample_rate: u32,
    pub sample_count: usize,
    pub duration_secs: f64,
    pub peak_frequency: f64,
    pub note: NoteName,
    pub spectrum_bins: usize,
    pub resolution_hz: Option<f64>,
    pub plot: PlotData,
}

impl NoteReport {
    pub fn new(
        file_path: impl Into<String>,
        recognition: &Recognition,
        analyzer: &SpectralAnalyzer,
    ) -> Self {
        let window = analyzer.display_window(&recognition.spectrum, &recognition.estimate);

        Self {
            file_path: file_path.into(),
            sample_rate: recognition.sample_rate,
            sample_count: recognition.sample_count,
            duration_secs: recognition.duration_secs,
            peak_frequency: recognition.estimate.peak_frequency,
            note: recognition.estimate.note_name,
            spectrum_bins: recognition.spectrum.len(),
            resolution_hz: recognition.spectrum.resolution(),
            plot: PlotData {
                low_hz: window.low_hz,
                high_hz: window.high_hz,
                frequencies: window.frequencies.to_vec(),
                magnitudes: window.magnitudes.to_vec(),
            },
        }
    }

    pub fn is_identified(&self) -> bool {
        self.note.is_identified()
    }

    /// `"A (440.00 Hz)"`
    pub fn summary(&self) -> String {
        format!("{} ({:.2} Hz)", self.note, self.peak_frequency)
    }
}
