// src/error.rs
//
// Error taxonomy for loading and analysing waveforms.

use std::path::PathBuf;
use thiserror::Error;

/// Boxed decoder error (hound or symphonia)
pub type DecoderError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// File missing, unreadable, or not a recognisable wave container
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecoderError,
    },

    /// Container decoded fine but held no samples
    #[error("no audio samples decoded from {}", .path.display())]
    EmptyData { path: PathBuf },

    #[error("invalid waveform: {0}")]
    InvalidWaveform(String),

    #[error("invalid note band table: {0}")]
    InvalidBandTable(String),

    #[error("invalid analyzer setting: {0}")]
    InvalidSetting(String),

    #[error("failed to read band table {}: {source}", .path.display())]
    BandTableIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse band table {}: {source}", .path.display())]
    BandTableParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl AnalysisError {
    pub(crate) fn decode(path: impl Into<PathBuf>, source: impl Into<DecoderError>) -> Self {
        AnalysisError::Decode {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
