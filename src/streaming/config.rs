//! Reader configuration

/// Default read buffer for file-backed streams
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// Options for opening a WAVE file from a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Capacity of the `BufReader` wrapped around the file
    pub buffer_capacity: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl ReaderConfig {
    /// Set buffer capacity (clamped to at least one byte)
    #[must_use]
    pub fn buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity.max(1);
        self
    }
}
