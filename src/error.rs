use std::collections::TryReserveError;

use thiserror::Error;

use crate::png::ChunkTy;

/// Shorthand for results with a [`PngError`].
pub type PngResult<T> = Result<T, PngError>;

/// The broad categories that every [`PngError`] falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
  /// The underlying reader or file failed.
  Io,
  /// The byte stream isn't laid out like a PNG.
  Format,
  /// A chunk's checksum doesn't match its contents.
  Integrity,
  /// A chunk is structurally fine but its contents break a rule.
  Validation,
  /// Memory for a payload couldn't be obtained.
  Resource,
}

/// How long a chunk's payload is allowed to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthRule {
  /// Exactly this many bytes.
  Exactly(u32),
  /// This many bytes or more.
  AtLeast(u32),
  /// Any multiple of this many bytes.
  MultipleOf(u32),
  /// This many bytes or fewer.
  AtMost(u32),
}
impl LengthRule {
  /// Checks a payload length against the rule.
  #[inline]
  #[must_use]
  pub const fn allows(self, len: u32) -> bool {
    match self {
      Self::Exactly(n) => len == n,
      Self::AtLeast(n) => len >= n,
      Self::MultipleOf(n) => n != 0 && len % n == 0,
      Self::AtMost(n) => len <= n,
    }
  }
}
impl core::fmt::Display for LengthRule {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::Exactly(n) => write!(f, "exactly {n}"),
      Self::AtLeast(n) => write!(f, "at least {n}"),
      Self::MultipleOf(n) => write!(f, "a multiple of {n}"),
      Self::AtMost(n) => write!(f, "at most {n}"),
    }
  }
}

/// An error from decoding a PNG chunk stream.
///
/// Every error is terminal: the decode that produced it stops, and whatever
/// reports were already produced for earlier chunks remain valid.
#[derive(Debug, Error)]
pub enum PngError {
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("not a PNG file (signature mismatch)")]
  NotAPngFile,

  #[error("first chunk is {found}, expected IHDR")]
  FirstChunkNotHeader { found: ChunkTy },

  #[error("{ty}: declared length {length} exceeds 2^31-1")]
  LengthOutOfRange { ty: ChunkTy, length: u32 },

  #[error("more than {limit} chunks in the stream")]
  ExcessiveChunkCount { limit: usize },

  #[error("truncated data: {what}")]
  Truncated { what: &'static str },

  #[error("chunk {ty} has corrupted CRC: expected {expected:08x}, got {actual:08x}")]
  CrcMismatch { ty: ChunkTy, expected: u32, actual: u32 },

  #[error("{ty}: corrupted chunk length, expected {expected} but found {actual}")]
  WrongChunkLength { ty: ChunkTy, expected: LengthRule, actual: u32 },

  #[error("{ty}: {field} has illegal value {value}")]
  ValueOutOfRange { ty: ChunkTy, field: &'static str, value: u32 },

  #[error("IHDR: invalid color type {0}")]
  InvalidColorType(u8),

  #[error("IHDR: bit depth {bit_depth} is not allowed for color type {color_type}")]
  InvalidBitDepth { color_type: u8, bit_depth: u8 },

  #[error("PLTE: {entries} entries is more than the {max} allowed")]
  PaletteTooLarge { entries: usize, max: usize },

  #[error("{ty}: cannot find PLTE chunk")]
  PaletteMissing { ty: ChunkTy },

  #[error("image header has not been seen yet")]
  HeaderNotYetSeen,

  #[error("{ty}: malformed text field: {reason}")]
  MalformedText { ty: ChunkTy, reason: &'static str },

  #[error("cHRM: {field} is outside the legal chromaticity range")]
  InvalidChromaticity { field: &'static str },

  #[error("{ty}: chunk may only appear once")]
  DuplicateChunk { ty: ChunkTy },

  #[error("{ty}: chunk not allowed {reason}")]
  UnexpectedChunk { ty: ChunkTy, reason: &'static str },

  #[error("failed to allocate chunk data")]
  Alloc(#[from] TryReserveError),
}
impl PngError {
  /// Which category this error belongs to.
  #[must_use]
  pub const fn kind(&self) -> ErrorKind {
    match self {
      Self::Io(_) => ErrorKind::Io,
      Self::NotAPngFile
      | Self::FirstChunkNotHeader { .. }
      | Self::LengthOutOfRange { .. }
      | Self::ExcessiveChunkCount { .. }
      | Self::Truncated { .. } => ErrorKind::Format,
      Self::CrcMismatch { .. } => ErrorKind::Integrity,
      Self::WrongChunkLength { .. }
      | Self::ValueOutOfRange { .. }
      | Self::InvalidColorType(_)
      | Self::InvalidBitDepth { .. }
      | Self::PaletteTooLarge { .. }
      | Self::PaletteMissing { .. }
      | Self::HeaderNotYetSeen
      | Self::MalformedText { .. }
      | Self::InvalidChromaticity { .. }
      | Self::DuplicateChunk { .. }
      | Self::UnexpectedChunk { .. } => ErrorKind::Validation,
      Self::Alloc(_) => ErrorKind::Resource,
    }
  }

  /// Reads that ran out of bytes surface as truncation rather than as a raw
  /// I/O error.
  pub(crate) fn from_read(err: std::io::Error, what: &'static str) -> Self {
    if err.kind() == std::io::ErrorKind::UnexpectedEof {
      Self::Truncated { what }
    } else {
      Self::Io(err)
    }
  }
}
