use std::io::Read;

use tracing::{trace, warn};

use super::*;
use crate::options::{CrcPolicy, DecodeOptions};

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Chunk lengths are limited to what fits in an `i32`.
pub const MAX_CHUNK_LENGTH: u32 = (1 << 31) - 1;

/// Where a [`ChunkStream`] is in the datastream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamState {
  /// Nothing read yet, the signature comes next.
  Start,
  /// Signature is fine, the `IHDR` chunk must come next.
  AwaitingHeader,
  /// Reading chunks until `IEND`.
  Streaming,
  /// `IEND` was read. Nothing else will be read.
  Done,
  /// An error was returned. Nothing else will be read.
  Failed,
}

/// Reads raw chunks out of a PNG datastream, one record at a time.
///
/// The signature, the header-first rule, chunk lengths, and every chunk's CRC
/// are checked here. Nothing looks inside a chunk's data. As an iterator it
/// yields each chunk as soon as its record is validated, and stops for good
/// after `IEND` or after the first error.
#[derive(Debug)]
pub struct ChunkStream<R> {
  reader: R,
  options: DecodeOptions,
  state: StreamState,
  offset: u64,
  chunks_read: usize,
}
impl<R: Read> ChunkStream<R> {
  #[inline]
  pub fn new(reader: R, options: DecodeOptions) -> Self {
    Self { reader, options, state: StreamState::Start, offset: 0, chunks_read: 0 }
  }

  #[inline]
  #[must_use]
  pub fn state(&self) -> StreamState {
    self.state
  }

  /// How many records have been read, including any skipped as corrupt.
  #[inline]
  #[must_use]
  pub fn chunks_read(&self) -> usize {
    self.chunks_read
  }

  #[inline]
  pub fn into_inner(self) -> R {
    self.reader
  }

  /// Reads the next valid chunk, or `None` once `IEND` has been read.
  pub fn next_chunk(&mut self) -> PngResult<Option<RawChunk>> {
    match self.advance() {
      Ok(out) => Ok(out),
      Err(e) => {
        self.state = StreamState::Failed;
        Err(e)
      }
    }
  }

  fn advance(&mut self) -> PngResult<Option<RawChunk>> {
    loop {
      match self.state {
        StreamState::Done | StreamState::Failed => return Ok(None),
        StreamState::Start => {
          self.read_signature()?;
          self.state = StreamState::AwaitingHeader;
        }
        StreamState::AwaitingHeader | StreamState::Streaming => {
          let chunk = self.read_record()?;
          let expected = chunk.actual_crc();
          if chunk.declared_crc != expected {
            let actual = chunk.declared_crc;
            match self.options.crc_policy() {
              CrcPolicy::Strict => {
                return Err(PngError::CrcMismatch { ty: chunk.ty, expected, actual });
              }
              CrcPolicy::SkipCorrupt => {
                warn!(ty = %chunk.ty, expected, actual, "skipping chunk with corrupted CRC");
                if chunk.ty == ChunkTy::IEND {
                  self.state = StreamState::Done;
                }
                continue;
              }
            }
          }
          if self.state == StreamState::AwaitingHeader {
            if chunk.ty != ChunkTy::IHDR {
              return Err(PngError::FirstChunkNotHeader { found: chunk.ty });
            }
            self.state = StreamState::Streaming;
          }
          if chunk.ty == ChunkTy::IEND {
            self.state = StreamState::Done;
          }
          return Ok(Some(chunk));
        }
      }
    }
  }

  fn read_signature(&mut self) -> PngResult<()> {
    let mut sig = [0_u8; 8];
    match self.reader.read_exact(&mut sig) {
      Ok(()) => (),
      Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
        return Err(PngError::NotAPngFile)
      }
      Err(e) => return Err(PngError::Io(e)),
    }
    if sig != PNG_SIGNATURE {
      return Err(PngError::NotAPngFile);
    }
    self.offset = PNG_SIGNATURE.len() as u64;
    Ok(())
  }

  fn read_array<const N: usize>(&mut self, what: &'static str) -> PngResult<[u8; N]> {
    let mut a = [0_u8; N];
    self.reader.read_exact(&mut a).map_err(|e| PngError::from_read(e, what))?;
    Ok(a)
  }

  fn read_record(&mut self) -> PngResult<RawChunk> {
    if let Some(limit) = self.options.max_chunks() {
      if self.chunks_read >= limit {
        return Err(PngError::ExcessiveChunkCount { limit });
      }
    }
    let offset = self.offset;
    let length = u32::from_be_bytes(self.read_array(
      "chunk length (stream ended before IEND)",
    )?);
    let ty = ChunkTy(self.read_array("chunk type")?);
    if length > MAX_CHUNK_LENGTH {
      return Err(PngError::LengthOutOfRange { ty, length });
    }
    trace!(%ty, length, offset, "chunk record");

    let mut data = Vec::new();
    data.try_reserve_exact((length as usize).min(self.options.max_payload_prealloc()))?;
    let got = Read::by_ref(&mut self.reader)
      .take(u64::from(length))
      .read_to_end(&mut data)
      .map_err(|e| PngError::from_read(e, "chunk data"))?;
    if got != length as usize {
      return Err(PngError::Truncated { what: "chunk data shorter than its declared length" });
    }
    let declared_crc = u32::from_be_bytes(self.read_array("chunk CRC")?);

    self.chunks_read += 1;
    self.offset += 12 + u64::from(length);
    Ok(RawChunk { ty, data, declared_crc, offset })
  }
}
impl<R: Read> Iterator for ChunkStream<R> {
  type Item = PngResult<RawChunk>;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    self.next_chunk().transpose()
  }
}
impl<R: Read> core::iter::FusedIterator for ChunkStream<R> {}
