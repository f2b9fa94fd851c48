use std::fmt;

/// Four-character code identifying a RIFF chunk or form type
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCc([u8; 4]);

impl FourCc {
    /// `RIFF` container signature
    pub const RIFF: Self = Self(*b"RIFF");
    /// `WAVE` form type
    pub const WAVE: Self = Self(*b"WAVE");
    /// Format description chunk
    pub const FMT: Self = Self(*b"fmt ");
    /// Sample payload chunk
    pub const DATA: Self = Self(*b"data");

    /// Wrap raw bytes
    #[must_use]
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Raw bytes as read from the stream
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", std::ascii::escape_default(b))?;
        }
        Ok(())
    }
}

impl fmt::Debug for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourCc(\"{self}\")")
    }
}

impl From<[u8; 4]> for FourCc {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

/// Chunk header: id plus declared payload length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    /// Chunk identifier
    pub id: FourCc,
    /// Declared payload size, excluding the pad byte
    pub size: u32,
}

impl ChunkHeader {
    /// Encoded header size
    pub const SIZE: u64 = 8;

    /// Payload size including the pad byte RIFF adds after odd-length chunks
    #[must_use]
    pub fn padded_size(&self) -> u64 {
        padded_len(self.size)
    }
}

/// Round a chunk length up to the next even byte count
#[must_use]
pub fn padded_len(size: u32) -> u64 {
    (u64::from(size) + 1) & !1
}
