//! Audio format definitions

use crate::error::FormatError;

/// Codec tag from the `fmt ` chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Codec {
    /// Uncompressed integer PCM
    Pcm = 0x0001,
    /// Uncompressed IEEE-754 float
    IeeeFloat = 0x0003,
}

impl Codec {
    /// Parse from the raw tag
    #[must_use]
    pub fn from_tag(tag: u16) -> Option<Self> {
        match tag {
            0x0001 => Some(Self::Pcm),
            0x0003 => Some(Self::IeeeFloat),
            _ => None,
        }
    }
}

/// On-disk sample encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    /// 8-bit unsigned integer (offset binary)
    UInt8,
    /// 16-bit signed integer
    Int16,
    /// 24-bit signed integer (packed)
    Int24,
    /// 32-bit float
    Float32,
}

impl SampleFormat {
    /// Get bytes per sample
    #[must_use]
    pub fn bytes_per_sample(self) -> u16 {
        match self {
            SampleFormat::UInt8 => 1,
            SampleFormat::Int16 => 2,
            SampleFormat::Int24 => 3,
            SampleFormat::Float32 => 4,
        }
    }

    /// Get the container width in bits
    #[must_use]
    pub fn container_bits(self) -> u16 {
        self.bytes_per_sample() * 8
    }

    /// Pick the sample format for a codec and declared bit depth.
    ///
    /// Integer depths that are not a multiple of 8 (e.g. 12-bit) are stored in
    /// the next larger byte size, so they resolve to that container.
    ///
    /// # Errors
    ///
    /// Returns an error for compressed codecs, integer depths above 24 bits and
    /// float depths other than 32 bits.
    pub fn from_codec(codec_tag: u16, bits_per_sample: u16) -> Result<Self, FormatError> {
        match Codec::from_tag(codec_tag) {
            Some(Codec::Pcm) => match bits_per_sample {
                0..=8 => Ok(SampleFormat::UInt8),
                9..=16 => Ok(SampleFormat::Int16),
                17..=24 => Ok(SampleFormat::Int24),
                _ => Err(FormatError::UnsupportedIntegerDepth(bits_per_sample)),
            },
            Some(Codec::IeeeFloat) if bits_per_sample == 32 => Ok(SampleFormat::Float32),
            Some(Codec::IeeeFloat) => Err(FormatError::UnsupportedFloatDepth(bits_per_sample)),
            None => Err(FormatError::UnsupportedCodec(codec_tag)),
        }
    }

    /// Integer range covered by this format, `None` for float
    #[must_use]
    pub fn integer_range(self) -> Option<(i32, i32)> {
        match self {
            SampleFormat::UInt8 => Some((0, i32::from(u8::MAX))),
            SampleFormat::Int16 => Some((i32::from(i16::MIN), i32::from(i16::MAX))),
            SampleFormat::Int24 => Some((INT24_MIN, INT24_MAX)),
            SampleFormat::Float32 => None,
        }
    }
}

/// Smallest value of a packed 24-bit signed sample
pub const INT24_MIN: i32 = -8_388_608;

/// Largest value of a packed 24-bit signed sample
pub const INT24_MAX: i32 = 8_388_607;
