use std::io;

use thiserror::Error;

use crate::riff::FourCc;

/// Container-level errors: the bytes were readable but violate RIFF/WAVE rules
#[derive(Debug, Error)]
pub enum FormatError {
    /// The file does not start with a `RIFF` signature
    #[error("unknown file format: expected 'RIFF' signature, got '{0}'")]
    InvalidSignature(FourCc),

    /// The RIFF form type is something other than `WAVE`
    #[error("file format is not WAVE, but '{0}'")]
    NotWave(FourCc),

    /// The `fmt ` chunk declares fewer bytes than its fixed fields need
    #[error("format chunk too short: {0} bytes, need at least 16")]
    FormatChunkTooShort(u32),

    /// Codec tag is neither PCM nor IEEE float
    #[error("unsupported codec tag 0x{0:04x}: only uncompressed formats are supported")]
    UnsupportedCodec(u16),

    /// PCM data wider than 24 bits
    #[error("unsupported sample format: {0}-bit integer samples")]
    UnsupportedIntegerDepth(u16),

    /// Float data that is not 32 bits wide
    #[error("unsupported sample format: {0}-bit floating-point samples")]
    UnsupportedFloatDepth(u16),

    /// Declared frame size disagrees with the derived sample width
    #[error(
        "unsupported sample organization: {channels} channel(s) of {bytes_per_sample} byte(s) \
         do not fill a {frame_size}-byte frame"
    )]
    UnsupportedSampleOrganization {
        /// Channel count from the format chunk
        channels: u16,
        /// Bytes per sample derived from codec and bit depth
        bytes_per_sample: u16,
        /// Frame size (block align) from the format chunk
        frame_size: u16,
    },

    /// The format chunk declares zero channels
    #[error("format chunk declares zero channels")]
    ZeroChannels,

    /// The format chunk declares a zero frame rate
    #[error("format chunk declares a frame rate of 0 Hz")]
    ZeroFrameRate,

    /// A `data` chunk appeared before any `fmt ` chunk
    #[error("data chunk found before format chunk")]
    MissingFormatChunk,
}

/// Errors that can occur while opening or decoding a WAVE stream
#[derive(Debug, Error)]
pub enum WavError {
    /// Underlying read or seek failed, including a truncated source
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Container is well-formed bytes but semantically invalid
    #[error("format error: {0}")]
    Format(#[from] FormatError),
}

impl WavError {
    /// Check if this error came from the container rules rather than I/O
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Check if this error came from the byte source
    #[must_use]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Check if the source ended before the requested bytes were available
    #[must_use]
    pub fn is_unexpected_eof(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}

/// Result alias used throughout the crate
pub type Result<T, E = WavError> = std::result::Result<T, E>;
