//! RIFF container parsing

mod chunk;
pub mod reader;
pub mod scanner;


pub use chunk::{ChunkHeader, FourCc, padded_len};
pub use reader::ByteReader;
pub use scanner::{ChunkScanner, FORMAT_CHUNK_MIN_SIZE, FormatChunk, WaveSpec};
