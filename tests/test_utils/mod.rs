// tests/test_utils/mod.rs
//
// Shared helpers: synthetic tones written to temporary WAV fixtures.

#![allow(dead_code)]

use std::f64::consts::PI;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use uuid::Uuid;

pub fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_note-recognizer"))
}

pub fn run_note_recognizer() -> Command {
    Command::new(binary_path())
}

/// Fresh directory under the OS temp dir, removed on drop
pub struct FixtureDir {
    path: PathBuf,
}

impl FixtureDir {
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("note-recognizer-test-{}", Uuid::new_v4()));
        fs::create_dir_all(&path).expect("Failed to create fixture directory");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for FixtureDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

pub fn sine(freq: f64, sample_rate: u32, n: usize, amplitude: f64) -> Vec<f64> {
    (0..n)
        .map(|i| amplitude * (2.0 * PI * freq * i as f64 / sample_rate as f64).sin())
        .collect()
}

fn int_spec(channels: u16, sample_rate: u32, bits: u16) -> hound::WavSpec {
    hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: bits,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Mono 16-bit tone
pub fn write_tone_i16(path: &Path, freq: f64, sample_rate: u32, n: usize) {
    let mut writer =
        hound::WavWriter::create(path, int_spec(1, sample_rate, 16)).expect("create wav");
    for s in sine(freq, sample_rate, n, 20_000.0) {
        writer.write_sample(s.round() as i16).expect("write sample");
    }
    writer.finalize().expect("finalize wav");
}

/// Mono 32-bit float tone
pub fn write_tone_f32(path: &Path, freq: f64, sample_rate: u32, n: usize) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("create wav");
    for s in sine(freq, sample_rate, n, 0.8) {
        writer.write_sample(s as f32).expect("write sample");
    }
    writer.finalize().expect("finalize wav");
}

/// Interleaved 16-bit stereo; returns the samples written to channel 0
pub fn write_stereo_i16(
    path: &Path,
    left_freq: f64,
    right_freq: f64,
    sample_rate: u32,
    n: usize,
) -> Vec<i16> {
    let left: Vec<i16> = sine(left_freq, sample_rate, n, 12_000.0)
        .into_iter()
        .map(|s| s.round() as i16)
        .collect();
    let right: Vec<i16> = sine(right_freq, sample_rate, n, 30_000.0)
        .into_iter()
        .map(|s| s.round() as i16)
        .collect();

    let mut writer =
        hound::WavWriter::create(path, int_spec(2, sample_rate, 16)).expect("create wav");
    for (l, r) in left.iter().zip(right.iter()) {
        writer.write_sample(*l).expect("write sample");
        writer.write_sample(*r).expect("write sample");
    }
    writer.finalize().expect("finalize wav");

    left
}

/// G.711 A-law encoding of one 16-bit sample
fn linear_to_alaw(sample: i16) -> u8 {
    const SEG_END: [i32; 8] = [0x1F, 0x3F, 0x7F, 0xFF, 0x1FF, 0x3FF, 0x7FF, 0xFFF];

    let mut pcm = (sample as i32) >> 3;
    let mask = if pcm >= 0 {
        0xD5
    } else {
        pcm = -pcm - 1;
        0x55
    };

    let seg = SEG_END.iter().position(|&end| pcm <= end).unwrap_or(8);
    if seg >= 8 {
        return 0x7F ^ mask;
    }
    let quant = (if seg < 2 { pcm >> 1 } else { pcm >> seg }) & 0x0F;
    (((seg as i32) << 4 | quant) as u8) ^ mask
}

/// Interleaved 8-bit A-law stereo (format tag 6), which hound refuses to
/// read. Returns the 16-bit samples encoded into channel 0.
pub fn write_stereo_alaw(
    path: &Path,
    left_freq: f64,
    right_freq: f64,
    sample_rate: u32,
    n: usize,
) -> Vec<i16> {
    let left: Vec<i16> = sine(left_freq, sample_rate, n, 12_000.0)
        .into_iter()
        .map(|s| s.round() as i16)
        .collect();
    let right: Vec<i16> = sine(right_freq, sample_rate, n, 30_000.0)
        .into_iter()
        .map(|s| s.round() as i16)
        .collect();

    let channels: u16 = 2;
    let data: Vec<u8> = left
        .iter()
        .zip(right.iter())
        .flat_map(|(&l, &r)| [linear_to_alaw(l), linear_to_alaw(r)])
        .collect();

    let mut bytes = Vec::with_capacity(46 + data.len());
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(38 + data.len() as u32).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");

    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&18u32.to_le_bytes());
    bytes.extend_from_slice(&6u16.to_le_bytes());
    bytes.extend_from_slice(&channels.to_le_bytes());
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * channels as u32).to_le_bytes());
    bytes.extend_from_slice(&channels.to_le_bytes());
    bytes.extend_from_slice(&8u16.to_le_bytes());
    bytes.extend_from_slice(&0u16.to_le_bytes());

    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&(data.len() as u32).to_le_bytes());
    bytes.extend_from_slice(&data);

    fs::write(path, bytes).expect("write a-law wav");
    left
}

/// Valid header, zero samples
pub fn write_empty(path: &Path) {
    let writer = hound::WavWriter::create(path, int_spec(1, 44100, 16)).expect("create wav");
    writer.finalize().expect("finalize wav");
}
