use std::{fs::File, io::BufReader, io::Read, path::Path};

use tracing::info;

use super::*;
use crate::options::{CrcPolicy, DecodeOptions};

/// Accumulation mode: every chunk of a PNG, read up front and kept in order.
///
/// No chunk's data is interpreted. Unless the options say otherwise, chunks
/// with a corrupted CRC are left out and reading continues.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkList {
  chunks: Vec<RawChunk>,
}
impl ChunkList {
  /// Options used by [`open`](Self::open) when the caller has no opinion.
  #[inline]
  #[must_use]
  pub fn default_options() -> DecodeOptions {
    DecodeOptions::default().with_crc_policy(CrcPolicy::SkipCorrupt)
  }

  /// Reads every chunk of the file at `path`.
  pub fn open(path: impl AsRef<Path>, options: DecodeOptions) -> PngResult<Self> {
    let path = path.as_ref();
    let list = Self::from_reader(BufReader::new(File::open(path)?), options)?;
    info!(path = %path.display(), chunks = list.len(), "read chunk list");
    Ok(list)
  }

  /// Reads every chunk from a reader.
  pub fn from_reader<R: Read>(reader: R, options: DecodeOptions) -> PngResult<Self> {
    let chunks = ChunkStream::new(reader, options).collect::<PngResult<Vec<_>>>()?;
    Ok(Self { chunks })
  }

  /// Releases the chunks.
  #[inline]
  pub fn close(self) {
    drop(self)
  }

  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.chunks.len()
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.chunks.is_empty()
  }

  #[inline]
  pub fn iter(&self) -> core::slice::Iter<'_, RawChunk> {
    self.chunks.iter()
  }

  /// The first chunk of the given type.
  #[inline]
  #[must_use]
  pub fn find(&self, ty: ChunkTy) -> Option<&RawChunk> {
    self.chunks.iter().find(|c| c.ty() == ty)
  }

  #[inline]
  #[must_use]
  pub fn as_slice(&self) -> &[RawChunk] {
    &self.chunks
  }
}
impl<'a> IntoIterator for &'a ChunkList {
  type Item = &'a RawChunk;
  type IntoIter = core::slice::Iter<'a, RawChunk>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
impl IntoIterator for ChunkList {
  type Item = RawChunk;
  type IntoIter = std::vec::IntoIter<RawChunk>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.chunks.into_iter()
  }
}
