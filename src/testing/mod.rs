//! In-memory RIFF/WAVE fixtures for tests and benchmarks.
//!
//! [`WavFixture`] lays out chunks exactly as given, so tests can build
//! malformed or unusual containers (odd-length chunks, `data` before `fmt `,
//! truncated payloads) as easily as well-formed ones.

#[cfg(test)]
mod tests;

use std::io::Cursor;

use crate::audio::Codec;

struct FixtureChunk {
    id: [u8; 4],
    declared_size: u32,
    payload: Vec<u8>,
}

/// Builder for RIFF/WAVE byte images
pub struct WavFixture {
    signature: [u8; 4],
    form_type: [u8; 4],
    chunks: Vec<FixtureChunk>,
}

impl Default for WavFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl WavFixture {
    /// Empty `RIFF`/`WAVE` container with no chunks
    #[must_use]
    pub fn new() -> Self {
        Self {
            signature: *b"RIFF",
            form_type: *b"WAVE",
            chunks: Vec::new(),
        }
    }

    /// Container with an integer PCM format chunk
    #[must_use]
    pub fn pcm(channels: u16, frame_rate: u32, bits_per_sample: u16) -> Self {
        let frame_size = bits_per_sample.div_ceil(8).max(1) * channels;
        Self::new().format_chunk(
            Codec::Pcm as u16,
            channels,
            frame_rate,
            frame_size,
            bits_per_sample,
        )
    }

    /// Container with a 32-bit float format chunk
    #[must_use]
    pub fn float32(channels: u16, frame_rate: u32) -> Self {
        Self::new().format_chunk(Codec::IeeeFloat as u16, channels, frame_rate, 4 * channels, 32)
    }

    /// Override the 4-byte signature
    #[must_use]
    pub fn signature(mut self, signature: [u8; 4]) -> Self {
        self.signature = signature;
        self
    }

    /// Override the form type
    #[must_use]
    pub fn form_type(mut self, form_type: [u8; 4]) -> Self {
        self.form_type = form_type;
        self
    }

    /// Append a 16-byte `fmt ` chunk with explicit fields
    #[must_use]
    pub fn format_chunk(
        self,
        codec_tag: u16,
        channels: u16,
        frame_rate: u32,
        frame_size: u16,
        bits_per_sample: u16,
    ) -> Self {
        let byte_rate = frame_rate.wrapping_mul(u32::from(frame_size));
        let mut payload = Vec::with_capacity(16);
        payload.extend_from_slice(&codec_tag.to_le_bytes());
        payload.extend_from_slice(&channels.to_le_bytes());
        payload.extend_from_slice(&frame_rate.to_le_bytes());
        payload.extend_from_slice(&byte_rate.to_le_bytes());
        payload.extend_from_slice(&frame_size.to_le_bytes());
        payload.extend_from_slice(&bits_per_sample.to_le_bytes());
        self.chunk(*b"fmt ", payload)
    }

    /// Append a chunk whose declared size matches its payload
    ///
    /// # Panics
    ///
    /// Panics if the payload is larger than `u32::MAX` bytes
    #[must_use]
    pub fn chunk(self, id: [u8; 4], payload: impl Into<Vec<u8>>) -> Self {
        let payload = payload.into();
        let size = u32::try_from(payload.len()).expect("fixture chunk too large");
        self.chunk_with_size(id, size, payload)
    }

    /// Append a chunk whose declared size may disagree with its payload.
    ///
    /// The payload is emitted verbatim. A pad byte follows only when the
    /// declared size equals an odd payload length.
    #[must_use]
    pub fn chunk_with_size(mut self, id: [u8; 4], declared_size: u32, payload: Vec<u8>) -> Self {
        self.chunks.push(FixtureChunk {
            id,
            declared_size,
            payload,
        });
        self
    }

    /// Append a `data` chunk
    #[must_use]
    pub fn data(self, payload: impl Into<Vec<u8>>) -> Self {
        self.chunk(*b"data", payload)
    }

    /// Append a `data` chunk from `f32` samples
    #[must_use]
    pub fn data_f32(self, samples: &[f32]) -> Self {
        let payload: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
        self.data(payload)
    }

    /// Append a `data` chunk from `i16` samples
    #[must_use]
    pub fn data_i16(self, samples: &[i16]) -> Self {
        let payload: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
        self.data(payload)
    }

    /// Serialize to bytes
    #[must_use]
    pub fn build(&self) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(&self.form_type);

        for chunk in &self.chunks {
            body.extend_from_slice(&chunk.id);
            body.extend_from_slice(&chunk.declared_size.to_le_bytes());
            body.extend_from_slice(&chunk.payload);
            let declared_here = u32::try_from(chunk.payload.len()).ok() == Some(chunk.declared_size);
            if declared_here && chunk.payload.len() % 2 == 1 {
                body.push(0);
            }
        }

        let riff_size = u32::try_from(body.len()).unwrap_or(u32::MAX);
        let mut out = Vec::with_capacity(body.len() + 8);
        out.extend_from_slice(&self.signature);
        out.extend_from_slice(&riff_size.to_le_bytes());
        out.extend_from_slice(&body);
        out
    }

    /// Serialize into an in-memory seekable source
    #[must_use]
    pub fn cursor(&self) -> Cursor<Vec<u8>> {
        Cursor::new(self.build())
    }
}
