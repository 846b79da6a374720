// src/cli/mod.rs
//
// Command-line interface module

mod args;
mod output;

pub use args::{collect_wav_files, Args};
pub use output::{format_bands, format_error, format_json, format_report, format_summary};

use anyhow::{bail, Context};
use clap::Parser;
use colorful::Colorful;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::core::SpectralAnalyzer;
use crate::detection::NoteReport;
use crate::error::Result;

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let analyzer = args
        .build_analyzer()
        .context("Failed to configure the analyzer")?;

    if args.list_bands {
        print!("{}", format_bands(analyzer.bands()));
        return Ok(());
    }

    let files = collect_wav_files(&args.inputs);
    if files.is_empty() {
        println!("{}", "No wave files found!".red());
        return Ok(());
    }
    info!("Found {} wave file(s)", files.len());

    let outcomes = analyze_files(&analyzer, &files, files.len() > 1 && !args.json);

    let mut reports = Vec::with_capacity(outcomes.len());
    let mut failed = 0;
    for (path, outcome) in &outcomes {
        match outcome {
            Ok(report) => {
                if !args.json {
                    println!("{}", format_report(report, args.verbose, args.plot));
                }
                reports.push(report.clone());
            }
            Err(e) => {
                failed += 1;
                eprintln!("{}", format_error(path, e));
            }
        }
    }

    if args.json {
        println!("{}", format_json(&reports).context("Failed to serialize reports")?);
    } else if outcomes.len() > 1 {
        print!("{}", format_summary(reports.len(), failed));
    }

    if failed > 0 {
        bail!("{} of {} file(s) could not be analyzed", failed, outcomes.len());
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .try_init();
}

/// Analyze one file end to end
pub fn analyze_file(analyzer: &SpectralAnalyzer, path: &Path) -> Result<NoteReport> {
    let recognition = analyzer.recognize_file(path)?;
    Ok(NoteReport::new(
        path.display().to_string(),
        &recognition,
        analyzer,
    ))
}

/// Analyze files in parallel; each file gets its own waveform and spectrum.
/// Results keep the input order.
pub fn analyze_files(
    analyzer: &SpectralAnalyzer,
    files: &[PathBuf],
    show_progress: bool,
) -> Vec<(PathBuf, Result<NoteReport>)> {
    let progress = if show_progress {
        let style = ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        ProgressBar::new(files.len() as u64).with_style(style)
    } else {
        ProgressBar::hidden()
    };

    let outcomes = files
        .par_iter()
        .progress_with(progress.clone())
        .map(|path| (path.clone(), analyze_file(analyzer, path)))
        .collect();

    progress.finish_and_clear();
    outcomes
}
