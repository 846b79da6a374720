//! Note Recognizer - name the dominant pitch of a wave file
//!
//! Loads a PCM wave file, takes the DFT of the whole signal, picks the
//! strongest strictly-positive frequency bin and maps it onto a note name
//! through a table of half-open frequency bands.
//!
//! ## Module Structure
//!
//! - `core` - Wave loading, FFT and peak picking
//! - `config` - Note names and the band table
//! - `detection` - Per-file report types
//! - `cli` - Command-line interface
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use note_recognizer::{analyze, load};
//!
//! let waveform = load("tuning_fork.wav")?;
//! let (spectrum, estimate) = analyze(&waveform)?;
//!
//! println!("{} at {}", estimate.note_name, estimate.display_frequency());
//! ```
//!
//! ## Note Bands
//!
//! | Band (Hz)       | Note |
//! |-----------------|------|
//! | [390, 403.5)    | G    |
//! | [403.5, 427.5)  | G#   |
//! | [427.5, 451.5)  | A    |
//! | [451.5, 479.5)  | A#   |
//! | [479.5, 508)    | B    |
//! | [508, 538.5)    | C    |
//! | [538.5, 570.5)  | C#   |
//! | [570.5, 604.5)  | D    |
//! | [604.5, 640.5)  | D#   |
//! | [640.5, 678.5)  | E    |
//! | [678.5, 719)    | F    |
//! | [719, 762)      | F#   |
//! | [762, 790)      | A    |
//!
//! Anything else is `Unidentified`.

use std::path::Path;

// Core analysis functionality
pub mod core;

// Command-line interface
pub mod cli;

// Band table configuration
pub mod config;

// Report types
pub mod detection;

pub mod error;

pub use crate::config::{BandTable, NoteBand, NoteName};
pub use crate::core::{
    AnalyzerBuilder, NoteEstimate, Recognition, SampleData, SpectralAnalyzer, Spectrum,
    SpectrumWindow, Waveform,
};
pub use crate::detection::{NoteReport, PlotData};
pub use crate::error::{AnalysisError, Result};

/// Decode a wave file into a mono waveform
pub fn load<P: AsRef<Path>>(path: P) -> Result<Waveform> {
    crate::core::load_waveform(path.as_ref())
}

/// Spectrum and note estimate using the standard band table
pub fn analyze(waveform: &Waveform) -> Result<(Spectrum, NoteEstimate)> {
    SpectralAnalyzer::new().analyze(waveform)
}
