//! Little-endian byte reader over a seekable source

use std::io::{self, Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

use super::chunk::{ChunkHeader, FourCc};

/// Fixed-width little-endian reads and relative seeks.
///
/// Every read is exact: a source that ends early yields
/// [`io::ErrorKind::UnexpectedEof`].
#[derive(Debug)]
pub struct ByteReader<R> {
    inner: R,
}

impl<R: Read + Seek> ByteReader<R> {
    /// Wrap a source; reads start at its current position
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Read a four-character code
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 4 bytes remain
    pub fn read_fourcc(&mut self) -> io::Result<FourCc> {
        let mut bytes = [0u8; 4];
        self.inner.read_exact(&mut bytes)?;
        Ok(FourCc::new(bytes))
    }

    /// Read a chunk id and its declared size
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 8 bytes remain
    pub fn read_chunk_header(&mut self) -> io::Result<ChunkHeader> {
        let id = self.read_fourcc()?;
        let size = self.read_u32()?;
        Ok(ChunkHeader { id, size })
    }

    /// Read one unsigned byte
    ///
    /// # Errors
    ///
    /// Returns an error at end of stream
    pub fn read_u8(&mut self) -> io::Result<u8> {
        self.inner.read_u8()
    }

    /// Read a little-endian `u16`
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 bytes remain
    pub fn read_u16(&mut self) -> io::Result<u16> {
        self.inner.read_u16::<LittleEndian>()
    }

    /// Read a little-endian `i16`
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 bytes remain
    pub fn read_i16(&mut self) -> io::Result<i16> {
        self.inner.read_i16::<LittleEndian>()
    }

    /// Read 3 little-endian bytes zero-extended into a `u32`.
    ///
    /// No sign extension happens here; bits 24..31 are always clear.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 bytes remain
    pub fn read_u24(&mut self) -> io::Result<u32> {
        self.inner.read_u24::<LittleEndian>()
    }

    /// Read a little-endian `u32`
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 4 bytes remain
    pub fn read_u32(&mut self) -> io::Result<u32> {
        self.inner.read_u32::<LittleEndian>()
    }

    /// Read a little-endian IEEE-754 `f32`
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 4 bytes remain
    pub fn read_f32(&mut self) -> io::Result<f32> {
        self.inner.read_f32::<LittleEndian>()
    }

    /// Move the cursor forward (or back) relative to the current position
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying seek fails
    pub fn skip(&mut self, offset: i64) -> io::Result<u64> {
        self.inner.seek(SeekFrom::Current(offset))
    }

    /// Skip `len` bytes forward
    ///
    /// # Errors
    ///
    /// Returns an error if `len` does not fit a seek offset or the seek fails
    pub fn skip_bytes(&mut self, len: u64) -> io::Result<u64> {
        let offset = i64::try_from(len).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidInput, "skip length exceeds i64::MAX")
        })?;
        self.skip(offset)
    }

    /// Current absolute byte offset
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying seek fails
    pub fn position(&mut self) -> io::Result<u64> {
        self.inner.stream_position()
    }
}

impl<R> ByteReader<R> {
    /// Borrow the underlying source
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Recover the underlying source
    pub fn into_inner(self) -> R {
        self.inner
    }
}
