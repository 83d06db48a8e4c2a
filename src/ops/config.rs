/// Rows per rayon task unless configured otherwise.
pub const DEFAULT_CHUNK_SIZE: usize = 64;

/// Scheduling knobs of the batch driver. Results do not depend on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationConfig {
    /// Minimum number of rows handed to one rayon task. `0` acts as `1`.
    pub chunk_size: usize,
    /// Run the batch in a dedicated pool of this many threads instead of the
    /// global rayon pool. The pool is built and torn down on every call.
    pub num_threads: Option<usize>,
}

impl RotationConfig {
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size,
            num_threads: None,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Each batch call with this set builds its own rayon pool; callers that
    /// rotate many small batches should leave it unset and size the global
    /// pool instead.
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    #[inline]
    pub fn min_len(&self) -> usize {
        self.chunk_size.max(1)
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}
