//! RIFF/WAVE chunk walking
//!
//! The scanner validates the container header and then walks top-level chunks
//! until it reaches `data`. The `fmt ` chunk is parsed on the way; every other
//! chunk is skipped together with its pad byte. On success the reader is left on
//! the first sample byte.

use std::io::{Read, Seek};
use std::time::Duration;

use super::chunk::{ChunkHeader, FourCc, padded_len};
use super::reader::ByteReader;
use crate::audio::SampleFormat;
use crate::error::{FormatError, Result};

/// Number of bytes of the `fmt ` chunk that are interpreted
pub const FORMAT_CHUNK_MIN_SIZE: u32 = 16;

/// Fixed fields of a `fmt ` chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatChunk {
    /// Codec tag (1 = PCM, 3 = IEEE float)
    pub codec_tag: u16,
    /// Interleaved channel count
    pub channels: u16,
    /// Frames per second
    pub frame_rate: u32,
    /// Average bytes per second (informational)
    pub byte_rate: u32,
    /// Bytes per frame (block align)
    pub frame_size: u16,
    /// Declared bits per sample
    pub bits_per_sample: u16,
}

impl FormatChunk {
    /// Read the fixed fields, then skip the rest of a chunk of `size` bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the chunk is shorter than 16 bytes or the read fails
    pub fn read<R: Read + Seek>(reader: &mut ByteReader<R>, size: u32) -> Result<Self> {
        if size < FORMAT_CHUNK_MIN_SIZE {
            return Err(FormatError::FormatChunkTooShort(size).into());
        }

        let chunk = Self {
            codec_tag: reader.read_u16()?,
            channels: reader.read_u16()?,
            frame_rate: reader.read_u32()?,
            byte_rate: reader.read_u32()?,
            frame_size: reader.read_u16()?,
            bits_per_sample: reader.read_u16()?,
        };

        // Extension bytes (cbSize and friends) are not interpreted
        reader.skip_bytes(padded_len(size) - u64::from(FORMAT_CHUNK_MIN_SIZE))?;

        Ok(chunk)
    }

    /// Derive and validate the sample format
    ///
    /// # Errors
    ///
    /// Returns an error for unsupported codecs or depths, zero channels or rate,
    /// or a frame size that disagrees with the sample width
    pub fn sample_format(&self) -> Result<SampleFormat, FormatError> {
        let format = SampleFormat::from_codec(self.codec_tag, self.bits_per_sample)?;

        if self.channels == 0 {
            return Err(FormatError::ZeroChannels);
        }

        let bytes_per_sample = format.bytes_per_sample();
        if u32::from(bytes_per_sample) * u32::from(self.channels) != u32::from(self.frame_size) {
            return Err(FormatError::UnsupportedSampleOrganization {
                channels: self.channels,
                bytes_per_sample,
                frame_size: self.frame_size,
            });
        }

        if self.frame_rate == 0 {
            return Err(FormatError::ZeroFrameRate);
        }

        Ok(format)
    }
}

/// Everything the scanner learned about the stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveSpec {
    /// Frames per second
    pub frame_rate: u32,
    /// Interleaved channel count
    pub channels: u16,
    /// Sample encoding
    pub sample_format: SampleFormat,
    /// Bits per sample as declared in the file
    pub bits_per_sample: u16,
    /// Whole frames in the data chunk
    pub frame_count: u64,
    /// Samples in the data chunk (all channels)
    pub sample_count: u64,
    /// Absolute offset of the first sample byte
    pub data_offset: u64,
    /// Declared data chunk length in bytes
    pub data_len: u32,
}

impl WaveSpec {
    /// Bytes of one sample of one channel
    #[must_use]
    pub fn bytes_per_sample(&self) -> u16 {
        self.sample_format.bytes_per_sample()
    }

    /// Bytes of one frame across all channels
    #[must_use]
    pub fn frame_size(&self) -> u32 {
        u32::from(self.bytes_per_sample()) * u32::from(self.channels)
    }

    /// Playing time of the whole data chunk
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.frame_count as f64 / f64::from(self.frame_rate))
    }
}

/// Walks top-level chunks of a RIFF/WAVE container
pub struct ChunkScanner<'a, R> {
    reader: &'a mut ByteReader<R>,
    format: Option<(FormatChunk, SampleFormat)>,
}

impl<'a, R: Read + Seek> ChunkScanner<'a, R> {
    /// Create a scanner over a reader positioned at the `RIFF` signature
    pub fn new(reader: &'a mut ByteReader<R>) -> Self {
        Self {
            reader,
            format: None,
        }
    }

    /// Validate the 12-byte RIFF/WAVE header
    ///
    /// # Errors
    ///
    /// Returns an error if the signature is not `RIFF`, the form type is not
    /// `WAVE`, or the source is shorter than 12 bytes
    pub fn read_header(&mut self) -> Result<()> {
        let signature = self.reader.read_fourcc()?;
        if signature != FourCc::RIFF {
            return Err(FormatError::InvalidSignature(signature).into());
        }

        // Container size is not trusted; the walk stops at `data`
        let _riff_size = self.reader.read_u32()?;

        let form = self.reader.read_fourcc()?;
        if form != FourCc::WAVE {
            return Err(FormatError::NotWave(form).into());
        }

        Ok(())
    }

    /// Read headers until the data chunk, consuming everything in between
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid format chunk, a data chunk without a
    /// preceding format chunk, or a source that ends before `data`
    pub fn scan(mut self) -> Result<WaveSpec> {
        self.read_header()?;

        loop {
            let header = self.reader.read_chunk_header()?;
            tracing::trace!(id = %header.id, size = header.size, "RIFF chunk");

            match header.id {
                FourCc::FMT => {
                    let chunk = FormatChunk::read(self.reader, header.size)?;
                    let sample_format = chunk.sample_format()?;
                    self.format = Some((chunk, sample_format));
                }
                FourCc::DATA => return self.finish(header),
                _ => self.skip_chunk(&header)?,
            }
        }
    }

    fn skip_chunk(&mut self, header: &ChunkHeader) -> Result<()> {
        tracing::trace!(
            id = %header.id,
            skipped = header.padded_size(),
            "Skipping chunk"
        );
        self.reader.skip_bytes(header.padded_size())?;
        Ok(())
    }

    fn finish(self, data: ChunkHeader) -> Result<WaveSpec> {
        let (chunk, sample_format) = self.format.ok_or(FormatError::MissingFormatChunk)?;

        let bytes_per_sample = u64::from(sample_format.bytes_per_sample());
        let sample_count = u64::from(data.size) / bytes_per_sample;
        let frame_count = sample_count / u64::from(chunk.channels);

        let spec = WaveSpec {
            frame_rate: chunk.frame_rate,
            channels: chunk.channels,
            sample_format,
            bits_per_sample: chunk.bits_per_sample,
            frame_count,
            sample_count,
            data_offset: self.reader.position()?,
            data_len: data.size,
        };

        if u64::from(data.size) % u64::from(spec.frame_size()) != 0 {
            tracing::warn!(
                data_len = data.size,
                frame_size = spec.frame_size(),
                "Data chunk is not a whole number of frames"
            );
        }

        tracing::debug!(
            frame_rate = spec.frame_rate,
            channels = spec.channels,
            format = ?spec.sample_format,
            frames = spec.frame_count,
            "WAVE header accepted"
        );

        Ok(spec)
    }
}
