use core::fmt::{Display, Formatter};

use super::*;

/// Everything shown about one chunk.
///
/// The `Display` layout is:
///
/// ```text
/// 1. Type = IHDR, Length = 13, Offset = 8
///    Data =
///   Width       = 1
///   ...
///    CRC  = 907753de
/// ```
///
/// with a tab in front of each field line.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkReport {
  /// Position in the stream, starting at 1.
  pub index: usize,
  pub ty: ChunkTy,
  pub length: u32,
  /// Byte offset of the record from the start of the file.
  pub offset: u64,
  pub crc: u32,
  pub data: ChunkData,
}
impl Display for ChunkReport {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    writeln!(
      f,
      "{}. Type = {}, Length = {}, Offset = {}",
      self.index, self.ty, self.length, self.offset
    )?;
    if self.length == 0 {
      writeln!(f, "   Data = no data")?;
    } else {
      writeln!(f, "   Data = {}", self.data)?;
    }
    write!(f, "   CRC  = {:08x}", self.crc)
  }
}
