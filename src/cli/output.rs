//! Output formatting for CLI results

use colorful::Colorful;
use std::path::Path;

use crate::config::BandTable;
use crate::detection::NoteReport;
use crate::error::AnalysisError;

/// Format a report for terminal output
pub fn format_report(report: &NoteReport, verbose: bool, plot: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("Analyzing: {}\n", report.file_path.clone().cyan()));
    output.push_str(&format!("  Sample Rate: {} Hz\n", report.sample_rate));
    output.push_str(&format!(
        "  Duration: {:.2}s ({} samples)\n",
        report.duration_secs, report.sample_count
    ));
    output.push_str(&format!("  Peak Frequency: {:.2} Hz\n", report.peak_frequency));

    let note = if report.is_identified() {
        report.note.label().green()
    } else {
        report.note.label().yellow()
    };
    output.push_str(&format!("  Note: {}\n", note));

    if verbose {
        output.push_str("\n  Technical Details:\n");
        output.push_str(&format!("    Spectrum Bins: {}\n", report.spectrum_bins));
        if let Some(resolution) = report.resolution_hz {
            output.push_str(&format!("    Resolution: {:.4} Hz\n", resolution));
        }
        output.push_str(&format!(
            "    Plot Window: {:.2} - {:.2} Hz ({} points)\n",
            report.plot.low_hz,
            report.plot.high_hz,
            report.plot.frequencies.len()
        ));
    }

    if plot {
        output.push_str("\n  Frequency (Hz)    Magnitude\n");
        for (freq, mag) in report
            .plot
            .frequencies
            .iter()
            .zip(report.plot.magnitudes.iter())
        {
            output.push_str(&format!("  {:>14.2}    {:.4}\n", freq, mag));
        }
    }

    output
}

pub fn format_error(path: &Path, error: &AnalysisError) -> String {
    format!(
        "Analyzing: {}\n  {} {}\n",
        path.display().to_string().cyan(),
        "✗".red(),
        error.to_string().red()
    )
}

/// Reports as a pretty-printed JSON array
pub fn format_json(reports: &[NoteReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

pub fn format_bands(bands: &BandTable) -> String {
    let mut output = String::from("Note bands (lower bound inclusive, upper exclusive):\n\n");
    for band in bands.bands() {
        output.push_str(&format!(
            "  [{:>7.1}, {:>7.1})  {}\n",
            band.low_hz, band.high_hz, band.note
        ));
    }
    output.push_str("  otherwise           Unidentified\n");
    output
}

pub fn format_summary(analyzed: usize, failed: usize) -> String {
    let mut output = format!("{} file(s) analyzed", analyzed);
    if failed > 0 {
        output.push_str(&format!(", {}", format!("{} failed", failed).red()));
    }
    output.push('\n');
    output
}
