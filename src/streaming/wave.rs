//! Decode-ready WAVE stream

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use std::time::Duration;

use super::config::ReaderConfig;
use super::decoder::SampleDecoder;
use super::source::SampleSource;
use crate::audio::SampleFormat;
use crate::error::{Result, WavError};
use crate::riff::{ByteReader, ChunkScanner, WaveSpec};

/// A parsed RIFF/WAVE stream yielding normalized samples.
///
/// Construction scans the container up to the `data` chunk; nothing is ever
/// returned for a malformed header. Samples are then pulled one at a time in
/// file order (interleaved, frame-major).
///
/// ```no_run
/// use wavstream::WaveStream;
///
/// # fn main() -> Result<(), wavstream::WavError> {
/// let mut stream = WaveStream::open("input.wav")?;
/// println!("{} Hz, {} channel(s)", stream.frame_rate(), stream.channel_count());
///
/// while let Some(sample) = stream.next_sample()? {
///     // sample is in -1.0..=1.0 for integer formats
///     let _ = sample;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WaveStream<R> {
    reader: ByteReader<R>,
    spec: WaveSpec,
    decoder: SampleDecoder,
}

impl WaveStream<BufReader<File>> {
    /// Open a WAVE file with the default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or its header is invalid
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_config(path, &ReaderConfig::default())
    }

    /// Open a WAVE file with an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or its header is invalid
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: &ReaderConfig) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Opening WAVE file");

        let file = File::open(path)?;
        Self::new(BufReader::with_capacity(config.buffer_capacity, file))
    }
}

impl<R: Read + Seek> WaveStream<R> {
    /// Scan `inner` from its current position up to the first sample
    ///
    /// # Errors
    ///
    /// Returns [`WavError::Format`] for an invalid container and
    /// [`WavError::Io`] if the source fails or ends before the `data` chunk
    pub fn new(inner: R) -> Result<Self> {
        let mut reader = ByteReader::new(inner);
        let spec = ChunkScanner::new(&mut reader).scan()?;
        let decoder = SampleDecoder::new(spec.sample_format, spec.sample_count);

        Ok(Self {
            reader,
            spec,
            decoder,
        })
    }

    /// Decode the next sample, or `None` once the data chunk is exhausted
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails or ends mid-sample
    pub fn next_sample(&mut self) -> Result<Option<f32>> {
        self.decoder.decode(&mut self.reader)
    }
}

impl<R> WaveStream<R> {
    /// Frames per second
    #[must_use]
    pub fn frame_rate(&self) -> u32 {
        self.spec.frame_rate
    }

    /// Whole frames in the data chunk
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.spec.frame_count
    }

    /// Interleaved channel count
    #[must_use]
    pub fn channel_count(&self) -> u16 {
        self.spec.channels
    }

    /// On-disk sample encoding
    #[must_use]
    pub fn sample_format(&self) -> SampleFormat {
        self.spec.sample_format
    }

    /// Bits per sample as declared in the format chunk
    #[must_use]
    pub fn bits_per_sample(&self) -> u16 {
        self.spec.bits_per_sample
    }

    /// Samples in the data chunk across all channels
    #[must_use]
    pub fn total_samples(&self) -> u64 {
        self.spec.sample_count
    }

    /// Samples not yet decoded
    #[must_use]
    pub fn remaining_samples(&self) -> u64 {
        self.decoder.remaining()
    }

    /// Playing time of the data chunk
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.spec.duration()
    }

    /// Everything learned from the header
    #[must_use]
    pub fn spec(&self) -> &WaveSpec {
        &self.spec
    }

    /// Borrow the underlying source
    pub fn get_ref(&self) -> &R {
        self.reader.get_ref()
    }

    /// Release the underlying source, positioned after the last decoded sample
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

impl<R: Read + Seek> SampleSource for WaveStream<R> {
    fn spec(&self) -> WaveSpec {
        self.spec
    }

    fn next_sample(&mut self) -> Result<Option<f32>, WavError> {
        self.decoder.decode(&mut self.reader)
    }

    #[allow(clippy::cast_precision_loss)]
    fn position(&self) -> Duration {
        let decoded = self.spec.sample_count - self.decoder.remaining();
        let frames = decoded / u64::from(self.spec.channels);
        Duration::from_secs_f64(frames as f64 / f64::from(self.spec.frame_rate))
    }
}

impl<R: Read + Seek> Iterator for WaveStream<R> {
    type Item = Result<f32>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_sample().transpose()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.decoder.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<R: Read + Seek> std::iter::FusedIterator for WaveStream<R> {}
