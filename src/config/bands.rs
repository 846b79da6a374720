// src/config/bands.rs
//
// Frequency-band table used to name the dominant pitch.

use std::fmt;
use std::path::Path;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::{AnalysisError, Result};

/// Pitch-class label assigned to a peak frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NoteName {
    G,
    #[serde(rename = "G#")]
    GSharp,
    A,
    #[serde(rename = "A#")]
    ASharp,
    B,
    C,
    #[serde(rename = "C#")]
    CSharp,
    D,
    #[serde(rename = "D#")]
    DSharp,
    E,
    F,
    #[serde(rename = "F#")]
    FSharp,
    Unidentified,
}

impl NoteName {
    pub fn all() -> Vec<Self> {
        vec![
            Self::G,
            Self::GSharp,
            Self::A,
            Self::ASharp,
            Self::B,
            Self::C,
            Self::CSharp,
            Self::D,
            Self::DSharp,
            Self::E,
            Self::F,
            Self::FSharp,
            Self::Unidentified,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            NoteName::G => "G",
            NoteName::GSharp => "G#",
            NoteName::A => "A",
            NoteName::ASharp => "A#",
            NoteName::B => "B",
            NoteName::C => "C",
            NoteName::CSharp => "C#",
            NoteName::D => "D",
            NoteName::DSharp => "D#",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::FSharp => "F#",
            NoteName::Unidentified => "Unidentified",
        }
    }

    /// Parse a label; accepts the flat spelling `Ab` for `G#`
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Ab" | "A♭" => Some(NoteName::GSharp),
            other => Self::all().into_iter().find(|n| n.label() == other),
        }
    }

    pub fn is_identified(&self) -> bool {
        *self != NoteName::Unidentified
    }
}

// Band files go through `from_label`, so flat spellings are accepted there too
impl<'de> Deserialize<'de> for NoteName {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        NoteName::from_label(&label)
            .ok_or_else(|| de::Error::custom(format!("unknown note label `{}`", label)))
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Half-open interval `[low_hz, high_hz)` mapped to a note
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoteBand {
    pub low_hz: f64,
    pub high_hz: f64,
    pub note: NoteName,
}

impl NoteBand {
    pub const fn new(low_hz: f64, high_hz: f64, note: NoteName) -> Self {
        Self { low_hz, high_hz, note }
    }

    pub fn contains(&self, freq: f64) -> bool {
        freq >= self.low_hz && freq < self.high_hz
    }
}

/// The fixed table; `[762, 790)` is labelled `A` again (one octave above
/// the `[427.5, 451.5)` band, no octave number is tracked).
const STANDARD_BANDS: [NoteBand; 13] = [
    NoteBand::new(390.0, 403.5, NoteName::G),
    NoteBand::new(403.5, 427.5, NoteName::GSharp),
    NoteBand::new(427.5, 451.5, NoteName::A),
    NoteBand::new(451.5, 479.5, NoteName::ASharp),
    NoteBand::new(479.5, 508.0, NoteName::B),
    NoteBand::new(508.0, 538.5, NoteName::C),
    NoteBand::new(538.5, 570.5, NoteName::CSharp),
    NoteBand::new(570.5, 604.5, NoteName::D),
    NoteBand::new(604.5, 640.5, NoteName::DSharp),
    NoteBand::new(640.5, 678.5, NoteName::E),
    NoteBand::new(678.5, 719.0, NoteName::F),
    NoteBand::new(719.0, 762.0, NoteName::FSharp),
    NoteBand::new(762.0, 790.0, NoteName::A),
];

/// Validated, sorted, non-overlapping list of note bands
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BandTable {
    bands: Vec<NoteBand>,
}

impl Default for BandTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl BandTable {
    /// Build a table, rejecting anything that is not sorted and disjoint
    pub fn new(bands: Vec<NoteBand>) -> Result<Self> {
        validate(&bands)?;
        Ok(Self { bands })
    }

    pub fn standard() -> Self {
        Self {
            bands: STANDARD_BANDS.to_vec(),
        }
    }

    pub fn from_json_str(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let bands: Vec<NoteBand> = serde_json::from_str(json)?;
        Self::new(bands).map_err(serde::de::Error::custom)
    }

    /// Load a JSON array of `{ "low_hz", "high_hz", "note" }` objects
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| AnalysisError::BandTableIo {
            path: path.to_path_buf(),
            source,
        })?;
        let bands: Vec<NoteBand> =
            serde_json::from_str(&json).map_err(|source| AnalysisError::BandTableParse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(bands)
    }

    /// Name the band containing `freq`, first match wins
    pub fn classify(&self, freq: f64) -> NoteName {
        self.bands
            .iter()
            .find(|band| band.contains(freq))
            .map(|band| band.note)
            .unwrap_or(NoteName::Unidentified)
    }

    pub fn bands(&self) -> &[NoteBand] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Lowest and highest frequency covered by any band
    pub fn range(&self) -> Option<(f64, f64)> {
        match (self.bands.first(), self.bands.last()) {
            (Some(first), Some(last)) => Some((first.low_hz, last.high_hz)),
            _ => None,
        }
    }
}

fn validate(bands: &[NoteBand]) -> Result<()> {
    if bands.is_empty() {
        return Err(AnalysisError::InvalidBandTable("table has no bands".to_string()));
    }

    for (i, band) in bands.iter().enumerate() {
        if !band.low_hz.is_finite() || !band.high_hz.is_finite() {
            return Err(AnalysisError::InvalidBandTable(format!(
                "band {} ({}) has a non-finite bound",
                i, band.note
            )));
        }
        if band.low_hz >= band.high_hz {
            return Err(AnalysisError::InvalidBandTable(format!(
                "band {} ({}) is empty or inverted: [{}, {})",
                i, band.note, band.low_hz, band.high_hz
            )));
        }
        if !band.note.is_identified() {
            return Err(AnalysisError::InvalidBandTable(format!(
                "band {} is labelled {}",
                i,
                NoteName::Unidentified
            )));
        }
    }

    for (i, pair) in bands.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.low_hz < prev.low_hz {
            return Err(AnalysisError::InvalidBandTable(format!(
                "bands {} and {} are out of order ({} Hz before {} Hz)",
                i,
                i + 1,
                prev.low_hz,
                next.low_hz
            )));
        }
        if prev.high_hz > next.low_hz {
            return Err(AnalysisError::InvalidBandTable(format!(
                "bands {} ({}) and {} ({}) overlap at {} Hz",
                i,
                prev.note,
                i + 1,
                next.note,
                next.low_hz
            )));
        }
    }

    Ok(())
}
