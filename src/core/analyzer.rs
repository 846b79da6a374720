// src/core/analyzer.rs
//
// Spectral analysis and note classification, with builder-style setup.

use log::debug;
use std::path::Path;

use super::decoder::{load_waveform, Waveform};
use super::dsp::{fft_frequencies, positive_peak, FftProcessor};
use super::spectrum::{NoteEstimate, Spectrum, SpectrumWindow};
use crate::config::BandTable;
use crate::error::{AnalysisError, Result};

/// Default half width of the plot window around the peak, in Hz
pub const DEFAULT_DISPLAY_HALF_WIDTH: f64 = 225.0;

/// Builder for SpectralAnalyzer configuration
pub struct AnalyzerBuilder {
    bands: BandTable,
    display_half_width: f64,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            bands: BandTable::standard(),
            display_half_width: DEFAULT_DISPLAY_HALF_WIDTH,
        }
    }

    pub fn bands(mut self, bands: BandTable) -> Self {
        self.bands = bands;
        self
    }

    pub fn display_half_width(mut self, hz: f64) -> Self {
        self.display_half_width = hz;
        self
    }

    pub fn build(self) -> Result<SpectralAnalyzer> {
        if !self.display_half_width.is_finite() || self.display_half_width <= 0.0 {
            return Err(AnalysisError::InvalidSetting(format!(
                "display half width must be positive, got {}",
                self.display_half_width
            )));
        }
        Ok(SpectralAnalyzer {
            bands: self.bands,
            display_half_width: self.display_half_width,
        })
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything produced for one file
#[derive(Debug, Clone)]
pub struct Recognition {
    pub sample_rate: u32,
    pub sample_count: usize,
    pub duration_secs: f64,
    pub spectrum: Spectrum,
    pub estimate: NoteEstimate,
}

/// Stateless DFT peak picker; safe to share across threads
#[derive(Debug, Clone)]
pub struct SpectralAnalyzer {
    bands: BandTable,
    display_half_width: f64,
}

impl Default for SpectralAnalyzer {
    fn default() -> Self {
        Self {
            bands: BandTable::standard(),
            display_half_width: DEFAULT_DISPLAY_HALF_WIDTH,
        }
    }
}

impl SpectralAnalyzer {
    /// Analyzer with the standard band table
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    pub fn bands(&self) -> &BandTable {
        &self.bands
    }

    pub fn display_half_width(&self) -> f64 {
        self.display_half_width
    }

    /// One-sided spectrum plus the dominant positive frequency and its note
    pub fn analyze(&self, waveform: &Waveform) -> Result<(Spectrum, NoteEstimate)> {
        if waveform.sample_rate == 0 {
            return Err(AnalysisError::InvalidWaveform(
                "sample rate must be positive".to_string(),
            ));
        }
        if waveform.is_empty() {
            return Err(AnalysisError::InvalidWaveform(
                "waveform has no samples".to_string(),
            ));
        }

        let n = waveform.len();
        let period = 1.0 / waveform.sample_rate as f64;

        let samples = waveform.samples.to_f64();
        let magnitudes = FftProcessor::new().magnitude_spectrum(&samples);
        let frequencies = fft_frequencies(n, period);

        let peak = positive_peak(&frequencies, &magnitudes).ok_or_else(|| {
            AnalysisError::InvalidWaveform(format!(
                "{} sample(s) leave no positive frequency bin",
                n
            ))
        })?;

        let peak_frequency = frequencies[peak];
        let note_name = self.bands.classify(peak_frequency);

        debug!(
            "N={} ({:.3} s), bin width {:.4} Hz, peak bin {} at {:.2} Hz -> {}",
            n,
            waveform.duration_secs(),
            waveform.sample_rate as f64 / n as f64,
            peak,
            peak_frequency,
            note_name
        );

        let half = n / 2;
        let spectrum = Spectrum::new(frequencies[..half].to_vec(), magnitudes[..half].to_vec());

        Ok((
            spectrum,
            NoteEstimate {
                peak_frequency,
                note_name,
            },
        ))
    }

    /// Load a wave file and analyze it
    pub fn recognize_file(&self, path: &Path) -> Result<Recognition> {
        let waveform = load_waveform(path)?;
        let (spectrum, estimate) = self.analyze(&waveform)?;

        Ok(Recognition {
            sample_rate: waveform.sample_rate,
            sample_count: waveform.len(),
            duration_secs: waveform.duration_secs(),
            spectrum,
            estimate,
        })
    }

    /// Plot window centered on the peak
    pub fn display_window<'a>(
        &self,
        spectrum: &'a Spectrum,
        estimate: &NoteEstimate,
    ) -> SpectrumWindow<'a> {
        spectrum.window(estimate.peak_frequency, self.display_half_width)
    }
}
