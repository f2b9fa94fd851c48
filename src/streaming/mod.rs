//! Sample streaming from a parsed container

pub mod config;
mod decoder;
mod source;
mod wave;


pub use config::{DEFAULT_BUFFER_CAPACITY, ReaderConfig};
pub use decoder::SampleDecoder;
pub use source::SampleSource;
pub use wave::WaveStream;
