//! One-sample-at-a-time decoding of the data chunk

use std::io::{Read, Seek};

use crate::audio::{SampleFormat, i16_to_f32, i24_to_f32, sign_extend_24, u8_to_f32};
use crate::error::Result;
use crate::riff::ByteReader;

/// Decodes raw samples into normalized `f32` and counts down what is left
#[derive(Debug, Clone)]
pub struct SampleDecoder {
    format: SampleFormat,
    remaining: u64,
}

impl SampleDecoder {
    /// Create a decoder for `sample_count` samples of `format`
    #[must_use]
    pub fn new(format: SampleFormat, sample_count: u64) -> Self {
        Self {
            format,
            remaining: sample_count,
        }
    }

    /// Active sample encoding
    #[must_use]
    pub fn format(&self) -> SampleFormat {
        self.format
    }

    /// Samples not yet decoded
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Decode the sample under the reader's cursor.
    ///
    /// Returns `Ok(None)` once every sample has been handed out. The counter
    /// is decremented before reading, so a failed read still consumes a slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the source ends or fails mid-sample
    pub fn decode<R: Read + Seek>(&mut self, reader: &mut ByteReader<R>) -> Result<Option<f32>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;

        let sample = match self.format {
            SampleFormat::UInt8 => u8_to_f32(reader.read_u8()?),
            SampleFormat::Int16 => i16_to_f32(reader.read_i16()?),
            SampleFormat::Int24 => i24_to_f32(sign_extend_24(reader.read_u24()?)),
            // Float data is trusted to be in range and passed through as-is
            SampleFormat::Float32 => reader.read_f32()?,
        };

        Ok(Some(sample))
    }
}
