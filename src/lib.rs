//! # wavstream
//!
//! Streaming reader for RIFF/WAVE files that yields normalized `f32` samples.
//!
//! ## Features
//!
//! - 8-bit unsigned, 16-bit and 24-bit signed PCM, and 32-bit IEEE float
//! - Odd PCM bit depths (e.g. 12-bit) read from their byte-aligned container
//! - Unknown chunks (`LIST`, `fact`, ...) skipped with RIFF pad-byte handling
//! - One-sample-at-a-time decoding over any `Read + Seek` source
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use wavstream::WaveStream;
//! use wavstream::testing::WavFixture;
//!
//! # fn main() -> Result<(), wavstream::WavError> {
//! let bytes = WavFixture::pcm(1, 8000, 8).data(vec![0x00, 0xFF]).build();
//! let mut stream = WaveStream::new(Cursor::new(bytes))?;
//!
//! assert_eq!(stream.frame_rate(), 8000);
//! assert_eq!(stream.next_sample()?, Some(-1.0));
//! assert_eq!(stream.next_sample()?, Some(1.0));
//! assert_eq!(stream.next_sample()?, None);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **High-level**: [`WaveStream`] - open, query, pull samples
//! - **Mid-level**: [`riff::ChunkScanner`] and [`streaming::SampleDecoder`]
//! - **Low-level**: [`riff::ByteReader`] - little-endian reads and seeks
//!
//! The crate logs through `tracing` and never installs a subscriber.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Error types
pub mod error;

pub mod audio;
pub mod riff;
pub mod streaming;

pub mod testing;


// Re-exports
pub use audio::SampleFormat;
pub use error::{FormatError, WavError};
pub use riff::WaveSpec;
pub use streaming::{ReaderConfig, SampleSource, WaveStream};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude for common imports
///
/// Convenient re-exports
pub mod prelude {
    pub use crate::{
        FormatError, ReaderConfig, SampleFormat, SampleSource, WavError, WaveSpec, WaveStream,
    };
}
