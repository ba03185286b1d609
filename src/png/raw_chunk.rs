use core::fmt::{Debug, Display, Write};

use super::*;

/// The four byte type tag of a chunk.
///
/// The case of each letter carries a property bit, but for dispatch the tag
/// is just an opaque value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChunkTy(pub [u8; 4]);
#[allow(nonstandard_style)]
impl ChunkTy {
  pub const IHDR: Self = Self(*b"IHDR");
  pub const PLTE: Self = Self(*b"PLTE");
  pub const IDAT: Self = Self(*b"IDAT");
  pub const IEND: Self = Self(*b"IEND");
  pub const tIME: Self = Self(*b"tIME");
  pub const pHYs: Self = Self(*b"pHYs");
  pub const sRGB: Self = Self(*b"sRGB");
  pub const gAMA: Self = Self(*b"gAMA");
  pub const cHRM: Self = Self(*b"cHRM");
  pub const iCCP: Self = Self(*b"iCCP");
  pub const tEXt: Self = Self(*b"tEXt");
  pub const zTXt: Self = Self(*b"zTXt");
  pub const iTXt: Self = Self(*b"iTXt");
  pub const bKGD: Self = Self(*b"bKGD");
  pub const sBIT: Self = Self(*b"sBIT");
  pub const tRNS: Self = Self(*b"tRNS");
  pub const sPLT: Self = Self(*b"sPLT");
  pub const hIST: Self = Self(*b"hIST");
  pub const oFFs: Self = Self(*b"oFFs");
  pub const sCAL: Self = Self(*b"sCAL");
  pub const pCAL: Self = Self(*b"pCAL");
  pub const acTL: Self = Self(*b"acTL");
  pub const fcTL: Self = Self(*b"fcTL");

  const PROPERTY_BIT: u8 = 1 << 5;

  /// The raw tag bytes.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 4] {
    &self.0
  }

  /// Critical chunks are required to display the image (uppercase first
  /// letter).
  #[inline]
  #[must_use]
  pub const fn is_critical(self) -> bool {
    self.0[0] & Self::PROPERTY_BIT == 0
  }

  /// Public chunks are defined by the standard or registered (uppercase second
  /// letter).
  #[inline]
  #[must_use]
  pub const fn is_public(self) -> bool {
    self.0[1] & Self::PROPERTY_BIT == 0
  }

  /// Safe-to-copy chunks may be carried over by editors that don't know them
  /// (lowercase fourth letter).
  #[inline]
  #[must_use]
  pub const fn is_safe_to_copy(self) -> bool {
    self.0[3] & Self::PROPERTY_BIT != 0
  }
}
impl Debug for ChunkTy {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('"')?;
    Display::fmt(self, f)?;
    f.write_char('"')
  }
}
impl Display for ChunkTy {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    // tags read from a damaged file can hold anything, keep the output sane
    for ch in self.0.iter().copied().map(|u| if u.is_ascii_graphic() { u as char } else { '?' }) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}
impl From<[u8; 4]> for ChunkTy {
  #[inline]
  fn from(bytes: [u8; 4]) -> Self {
    Self(bytes)
  }
}

/// A chunk as read from the stream, before any interpretation of its data.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RawChunk {
  pub(crate) ty: ChunkTy,
  pub(crate) data: Vec<u8>,
  pub(crate) declared_crc: u32,
  pub(crate) offset: u64,
}
impl Debug for RawChunk {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("RawChunk")
      .field("ty", &self.ty)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .field("offset", &self.offset)
      .finish()
  }
}
impl RawChunk {
  /// Builds a chunk whose declared CRC is correct for its contents.
  #[must_use]
  pub fn new(ty: ChunkTy, data: Vec<u8>) -> Self {
    let declared_crc = png_crc(ty, &data);
    Self { ty, data, declared_crc, offset: 0 }
  }

  /// The chunk's type tag.
  #[inline]
  #[must_use]
  pub const fn ty(&self) -> ChunkTy {
    self.ty
  }

  /// The chunk's payload.
  #[inline]
  #[must_use]
  pub fn data(&self) -> &[u8] {
    &self.data
  }

  /// Payload length, as declared in the stream.
  #[inline]
  #[must_use]
  pub fn length(&self) -> u32 {
    // the stream reader caps lengths at 2^31-1, so this can't truncate
    self.data.len() as u32
  }

  /// The CRC stored after the payload.
  #[inline]
  #[must_use]
  pub const fn declared_crc(&self) -> u32 {
    self.declared_crc
  }

  /// Byte offset of the chunk's length field from the start of the file.
  #[inline]
  #[must_use]
  pub const fn offset(&self) -> u64 {
    self.offset
  }

  /// Recomputes the CRC over type and payload.
  #[inline]
  #[must_use]
  pub fn actual_crc(&self) -> u32 {
    png_crc(self.ty, &self.data)
  }

  /// The whole record (length, type, payload, CRC) as it appears on disk.
  #[must_use]
  pub fn to_bytes(&self) -> Vec<u8> {
    let mut out = Vec::with_capacity(12 + self.data.len());
    out.extend_from_slice(&self.length().to_be_bytes());
    out.extend_from_slice(self.ty.as_bytes());
    out.extend_from_slice(&self.data);
    out.extend_from_slice(&self.declared_crc.to_be_bytes());
    out
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_property_bits() {
    assert!(ChunkTy::IHDR.is_critical());
    assert!(ChunkTy::IHDR.is_public());
    assert!(!ChunkTy::IHDR.is_safe_to_copy());

    assert!(!ChunkTy::tEXt.is_critical());
    assert!(ChunkTy::tEXt.is_safe_to_copy());

    let private = ChunkTy(*b"prIv");
    assert!(!private.is_public());
  }

  #[test]
  fn test_display_masks_junk() {
    assert_eq!(ChunkTy::IHDR.to_string(), "IHDR");
    assert_eq!(ChunkTy([b'a', 0, b'\n', b'z']).to_string(), "a??z");
    assert_eq!(format!("{:?}", ChunkTy::gAMA), "\"gAMA\"");
  }

  #[test]
  fn test_ty_from_bytes() {
    assert_eq!(ChunkTy::from(*b"sRGB"), ChunkTy::sRGB);
    let ty: ChunkTy = [b'a', b'b', b'c', b'd'].into();
    assert_eq!(ty.as_bytes(), b"abcd");
  }

  #[test]
  fn test_raw_chunk_record_bytes() {
    let iend = RawChunk::new(ChunkTy::IEND, Vec::new());
    assert_eq!(iend.to_bytes(), [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]);
    assert_eq!(iend.actual_crc(), iend.declared_crc());
  }
}
