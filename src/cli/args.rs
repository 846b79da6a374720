//! CLI argument parsing

use clap::Parser;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::BandTable;
use crate::core::{SpectralAnalyzer, DEFAULT_DISPLAY_HALF_WIDTH};
use crate::error::Result;

#[derive(Parser, Debug)]
#[command(name = "note-recognizer", version)]
#[command(about = "Name the dominant musical note of PCM wave files")]
pub struct Args {
    /// Wave files or directories (searched recursively for .wav)
    #[arg(required_unless_present = "list_bands")]
    pub inputs: Vec<PathBuf>,

    /// JSON band table to use instead of the standard one
    #[arg(short, long, env = "NOTE_RECOGNIZER_BANDS")]
    pub bands: Option<PathBuf>,

    /// Half width of the plot window around the peak, in Hz
    #[arg(short, long, default_value_t = DEFAULT_DISPLAY_HALF_WIDTH)]
    pub window: f64,

    /// Print the spectrum points inside the plot window
    #[arg(short, long)]
    pub plot: bool,

    /// Output reports as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the active band table and exit
    #[arg(long)]
    pub list_bands: bool,

    /// Verbose output (debug logging, spectrum details)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn build_analyzer(&self) -> Result<SpectralAnalyzer> {
        let bands = match &self.bands {
            Some(path) => BandTable::from_json_file(path)?,
            None => BandTable::standard(),
        };

        SpectralAnalyzer::builder()
            .bands(bands)
            .display_half_width(self.window)
            .build()
    }
}

fn is_wav(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("wav"))
        .unwrap_or(false)
}

/// Expand directories into the .wav files they contain.
///
/// Paths that are not directories are kept as given so that missing or
/// mislabelled files surface as decode errors.
pub fn collect_wav_files(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(input)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file() && is_wav(e.path()))
                .map(|e| e.into_path())
                .collect();
            found.sort();
            files.extend(found);
        } else {
            files.push(input.clone());
        }
    }

    files
}
