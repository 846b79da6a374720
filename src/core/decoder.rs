// src/core/decoder.rs
//
// Wave file loading. Hound reads PCM containers in their native sample
// format; encodings hound rejects fall back to Symphonia.

use log::{debug, warn};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::{AnalysisError, Result};

/// Mono samples in the precision they were stored with
#[derive(Debug, Clone, PartialEq)]
pub enum SampleData {
    I8(Vec<i8>),
    I16(Vec<i16>),
    /// 24- and 32-bit integer PCM
    I32(Vec<i32>),
    F32(Vec<f32>),
}

impl SampleData {
    pub fn len(&self) -> usize {
        match self {
            SampleData::I8(s) => s.len(),
            SampleData::I16(s) => s.len(),
            SampleData::I32(s) => s.len(),
            SampleData::F32(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Widen every sample to `f64` without rescaling
    pub fn to_f64(&self) -> Vec<f64> {
        match self {
            SampleData::I8(s) => s.iter().map(|&x| x as f64).collect(),
            SampleData::I16(s) => s.iter().map(|&x| x as f64).collect(),
            SampleData::I32(s) => s.iter().map(|&x| x as f64).collect(),
            SampleData::F32(s) => s.iter().map(|&x| x as f64).collect(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SampleData::I8(_) => "i8",
            SampleData::I16(_) => "i16",
            SampleData::I32(_) => "i32",
            SampleData::F32(_) => "f32",
        }
    }
}

/// Decoded single-channel audio
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    /// Sample rate in Hz
    pub sample_rate: u32,
    pub samples: SampleData,
}

impl Waveform {
    pub fn new(sample_rate: u32, samples: SampleData) -> Self {
        Self {
            sample_rate,
            samples,
        }
    }

    pub fn from_f32(sample_rate: u32, samples: Vec<f32>) -> Self {
        Self::new(sample_rate, SampleData::F32(samples))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds, zero when the sample rate is zero
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.len() as f64 / self.sample_rate as f64
    }
}

/// Load a wave file, keeping only the first channel
pub fn load_waveform(path: &Path) -> Result<Waveform> {
    debug!("Decoding wave file: {}", path.display());

    let file = File::open(path).map_err(|e| AnalysisError::decode(path, e))?;
    let waveform = match read_wav(BufReader::new(file)) {
        Ok(waveform) => waveform,
        Err(hound::Error::Unsupported) => {
            warn!(
                "{}: encoding not supported natively, decoding through symphonia",
                path.display()
            );
            decode_with_symphonia(path)?
        }
        Err(e) => return Err(AnalysisError::decode(path, e)),
    };

    if waveform.is_empty() {
        return Err(AnalysisError::EmptyData {
            path: path.to_path_buf(),
        });
    }

    Ok(waveform)
}

/// Decode a PCM wave stream held in any reader
pub fn read_wav<R: Read>(reader: R) -> std::result::Result<Waveform, hound::Error> {
    let mut reader = hound::WavReader::new(reader)?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    debug!(
        "WAV: {} Hz, {} channel(s), {}-bit {:?}, {} frames",
        spec.sample_rate,
        spec.channels,
        spec.bits_per_sample,
        spec.sample_format,
        reader.duration()
    );
    if channels > 1 {
        warn!("Reducing {} channels to channel 0", channels);
    }

    let samples = match (spec.sample_format, spec.bits_per_sample) {
        (hound::SampleFormat::Float, 32) => {
            SampleData::F32(first_channel_of(reader.samples::<f32>(), channels)?)
        }
        (hound::SampleFormat::Int, 8) => {
            SampleData::I8(first_channel_of(reader.samples::<i8>(), channels)?)
        }
        (hound::SampleFormat::Int, 16) => {
            SampleData::I16(first_channel_of(reader.samples::<i16>(), channels)?)
        }
        (hound::SampleFormat::Int, bits) if bits <= 32 => {
            SampleData::I32(first_channel_of(reader.samples::<i32>(), channels)?)
        }
        _ => return Err(hound::Error::Unsupported),
    };

    Ok(Waveform::new(spec.sample_rate, samples))
}

fn first_channel_of<T, I>(samples: I, channels: usize) -> std::result::Result<Vec<T>, hound::Error>
where
    I: Iterator<Item = std::result::Result<T, hound::Error>>,
{
    samples.step_by(channels).collect()
}

/// Keep one channel of an interleaved buffer
pub fn extract_channel<T: Copy>(interleaved: &[T], channels: usize, channel: usize) -> Vec<T> {
    if channels <= 1 {
        return interleaved.to_vec();
    }
    interleaved
        .chunks_exact(channels)
        .filter_map(|frame| frame.get(channel).copied())
        .collect()
}

/// Fallback for wave encodings hound does not read (A-law, mu-law, f64 ...)
fn decode_with_symphonia(path: &Path) -> Result<Waveform> {
    let file = File::open(path).map_err(|e| AnalysisError::decode(path, e))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    hint.with_extension("wav");

    let mut probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| AnalysisError::decode(path, e))?;

    let track = probed
        .format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| AnalysisError::decode(path, "no supported audio track found"))?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| AnalysisError::decode(path, "file does not specify a sample rate"))?;
    let channels = track
        .codec_params
        .channels
        .map(|c| c.count())
        .unwrap_or(1);

    if channels == 0 {
        return Err(AnalysisError::decode(path, "file reports 0 audio channels"));
    }
    debug!(
        "Symphonia: {:?}, {} Hz, {} channel(s)",
        track.codec_params.codec, sample_rate, channels
    );

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| AnalysisError::decode(path, e))?;

    let mut interleaved: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match probed.format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break
            }
            Err(symphonia::core::errors::Error::ResetRequired) => {
                decoder.reset();
                continue;
            }
            Err(e) => return Err(AnalysisError::decode(path, e)),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(buf) => buf,
            Err(symphonia::core::errors::Error::DecodeError(msg)) => {
                debug!("Skipping undecodable packet: {}", msg);
                continue;
            }
            Err(e) => return Err(AnalysisError::decode(path, e)),
        };

        if sample_buf.is_none() {
            let spec = *decoded.spec();
            let capacity = decoded.capacity() as u64;
            sample_buf = Some(SampleBuffer::new(capacity, spec));
        }

        if let Some(ref mut buf) = sample_buf {
            buf.copy_interleaved_ref(decoded);
            interleaved.extend_from_slice(buf.samples());
        }
    }

    Ok(Waveform::from_f32(
        sample_rate,
        extract_channel(&interleaved, channels, 0),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn wav_bytes<F>(spec: hound::WavSpec, write: F) -> Vec<u8>
    where
        F: FnOnce(&mut hound::WavWriter<&mut Cursor<Vec<u8>>>),
    {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            write(&mut writer);
            writer.finalize().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_extract_channel() {
        let interleaved = [1, -1, 2, -2, 3, -3];
        assert_eq!(extract_channel(&interleaved, 2, 0), vec![1, 2, 3]);
        assert_eq!(extract_channel(&interleaved, 2, 1), vec![-1, -2, -3]);
        assert_eq!(extract_channel(&interleaved, 1, 0), interleaved.to_vec());
    }

    #[test]
    fn test_read_stereo_keeps_first_channel() {
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let bytes = wav_bytes(spec, |w| {
            for i in 0..4i16 {
                w.write_sample(i * 100).unwrap();
                w.write_sample(-i * 100 - 7).unwrap();
            }
        });

        let waveform = read_wav(Cursor::new(bytes)).unwrap();
        assert_eq!(waveform.sample_rate, 8000);
        assert_eq!(waveform.samples, SampleData::I16(vec![0, 100, 200, 300]));
    }

    #[test]
    fn test_read_keeps_native_precision() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 48000,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let bytes = wav_bytes(spec, |w| {
            w.write_sample(0.25f32).unwrap();
            w.write_sample(-0.5f32).unwrap();
        });
        let waveform = read_wav(Cursor::new(bytes)).unwrap();
        assert_eq!(waveform.samples, SampleData::F32(vec![0.25, -0.5]));

        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 48000,
            bits_per_sample: 24,
            sample_format: hound::SampleFormat::Int,
        };
        let bytes = wav_bytes(spec, |w| {
            w.write_sample(8_000_000i32).unwrap();
            w.write_sample(-8_000_000i32).unwrap();
        });
        let waveform = read_wav(Cursor::new(bytes)).unwrap();
        assert_eq!(waveform.samples, SampleData::I32(vec![8_000_000, -8_000_000]));
        assert_eq!(waveform.samples.kind(), "i32");
    }

    #[test]
    fn test_read_rejects_garbage() {
        assert!(read_wav(Cursor::new(b"definitely not a wave file".to_vec())).is_err());
    }

    #[test]
    fn test_missing_file_is_decode_error() {
        let err = load_waveform(Path::new("/nonexistent/never/here.wav")).unwrap_err();
        assert!(matches!(err, AnalysisError::Decode { .. }));
    }

    #[test]
    fn test_duration() {
        let waveform = Waveform::from_f32(4, vec![0.0; 10]);
        assert!((waveform.duration_secs() - 2.5).abs() < 1e-12);
        assert_eq!(Waveform::from_f32(0, vec![0.0]).duration_secs(), 0.0);
    }
}
