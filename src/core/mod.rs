//! Core loading and analysis modules

pub mod analyzer;
pub mod decoder;
pub mod dsp;
pub mod spectrum;

pub use analyzer::{AnalyzerBuilder, Recognition, SpectralAnalyzer, DEFAULT_DISPLAY_HALF_WIDTH};
pub use decoder::{extract_channel, load_waveform, read_wav, SampleData, Waveform};
pub use spectrum::{NoteEstimate, Spectrum, SpectrumWindow};
