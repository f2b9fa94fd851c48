//! Sample source abstraction

use std::time::Duration;

use crate::error::WavError;
use crate::riff::WaveSpec;

/// Pull-based source of normalized samples
pub trait SampleSource {
    /// Stream parameters, fixed for the lifetime of the source
    fn spec(&self) -> WaveSpec;

    /// Decode the next interleaved sample
    ///
    /// Returns `Ok(None)` when the source is exhausted
    ///
    /// # Errors
    ///
    /// Returns an error if reading the underlying bytes fails
    fn next_sample(&mut self) -> Result<Option<f32>, WavError>;

    /// Fill `buffer` with as many samples as are available
    ///
    /// Returns the number of samples written, or 0 when exhausted
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails; samples decoded before the failure
    /// are left in `buffer`
    fn read_samples(&mut self, buffer: &mut [f32]) -> Result<usize, WavError> {
        let mut written = 0;
        for slot in buffer.iter_mut() {
            match self.next_sample()? {
                Some(sample) => {
                    *slot = sample;
                    written += 1;
                }
                None => break,
            }
        }
        Ok(written)
    }

    /// Get total duration if known
    fn duration(&self) -> Option<Duration> {
        Some(self.spec().duration())
    }

    /// Get current position
    fn position(&self) -> Duration {
        Duration::ZERO
    }
}
