//! Knobs for the chunk stream reader.

/// What to do with a chunk whose stored CRC doesn't match its contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CrcPolicy {
  /// Stop with an integrity error.
  #[default]
  Strict,
  /// Log the chunk and leave it out, then keep reading.
  SkipCorrupt,
}

/// Chunk count used when none is configured.
pub const DEFAULT_MAX_CHUNKS: usize = 1 << 16;

/// At most this much is reserved for a payload before any of it is read.
/// Larger payloads grow the buffer as bytes actually arrive.
pub const DEFAULT_MAX_PAYLOAD_PREALLOC: usize = 1 << 20;

/// Options for reading a chunk stream.
///
/// ```
/// use pnginfo::{CrcPolicy, DecodeOptions};
/// let opts =
///   DecodeOptions::default().with_max_chunks(Some(256)).with_crc_policy(CrcPolicy::Strict);
/// assert_eq!(opts.max_chunks(), Some(256));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodeOptions {
  max_chunks: Option<usize>,
  crc_policy: CrcPolicy,
  max_payload_prealloc: usize,
}
impl Default for DecodeOptions {
  #[inline]
  fn default() -> Self {
    Self {
      max_chunks: Some(DEFAULT_MAX_CHUNKS),
      crc_policy: CrcPolicy::Strict,
      max_payload_prealloc: DEFAULT_MAX_PAYLOAD_PREALLOC,
    }
  }
}
impl DecodeOptions {
  /// Upper bound on the number of chunks, `None` for no bound.
  #[inline]
  #[must_use]
  pub const fn max_chunks(&self) -> Option<usize> {
    self.max_chunks
  }

  #[inline]
  #[must_use]
  pub const fn crc_policy(&self) -> CrcPolicy {
    self.crc_policy
  }

  #[inline]
  #[must_use]
  pub const fn max_payload_prealloc(&self) -> usize {
    self.max_payload_prealloc
  }

  #[inline]
  #[must_use]
  pub const fn with_max_chunks(mut self, max_chunks: Option<usize>) -> Self {
    self.max_chunks = max_chunks;
    self
  }

  #[inline]
  #[must_use]
  pub const fn with_crc_policy(mut self, crc_policy: CrcPolicy) -> Self {
    self.crc_policy = crc_policy;
    self
  }

  #[inline]
  #[must_use]
  pub const fn with_max_payload_prealloc(mut self, bytes: usize) -> Self {
    self.max_payload_prealloc = bytes;
    self
  }
}
