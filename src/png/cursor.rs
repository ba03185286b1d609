//! A bounded reader over a chunk's payload.
//!
//! All integers in PNG are big-endian. Every read checks the remaining length
//! first, so a decoder can never look past the end of its payload, and a
//! failed read leaves the position where it was.

use crate::error::{PngError, PngResult};

/// Cursor over a payload slice.
#[derive(Debug, Clone)]
pub struct ByteCursor<'b> {
  bytes: &'b [u8],
  pos: usize,
}
impl<'b> ByteCursor<'b> {
  #[inline]
  #[must_use]
  pub const fn new(bytes: &'b [u8]) -> Self {
    Self { bytes, pos: 0 }
  }

  /// Bytes consumed so far.
  #[inline]
  #[must_use]
  pub const fn position(&self) -> usize {
    self.pos
  }

  /// Bytes left to read.
  #[inline]
  #[must_use]
  pub const fn remaining(&self) -> usize {
    self.bytes.len() - self.pos
  }

  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.remaining() == 0
  }

  /// Everything not read yet, without consuming it.
  #[inline]
  #[must_use]
  pub fn peek_rest(&self) -> &'b [u8] {
    &self.bytes[self.pos..]
  }

  /// Consumes and returns everything not read yet.
  #[inline]
  pub fn rest(&mut self) -> &'b [u8] {
    let out = self.peek_rest();
    self.pos = self.bytes.len();
    out
  }

  /// Consumes exactly `n` bytes.
  #[inline]
  pub fn take(&mut self, n: usize) -> PngResult<&'b [u8]> {
    if n > self.remaining() {
      return Err(PngError::Truncated { what: "chunk field" });
    }
    let out = &self.bytes[self.pos..self.pos + n];
    self.pos += n;
    Ok(out)
  }

  /// Moves past `n` bytes without looking at them.
  #[inline]
  pub fn skip(&mut self, n: usize) -> PngResult<()> {
    self.take(n).map(|_| ())
  }

  #[inline]
  pub fn read_array<const N: usize>(&mut self) -> PngResult<[u8; N]> {
    let mut a = [0_u8; N];
    a.copy_from_slice(self.take(N)?);
    Ok(a)
  }

  #[inline]
  pub fn read_u8(&mut self) -> PngResult<u8> {
    self.read_array::<1>().map(|[u]| u)
  }

  #[inline]
  pub fn read_u16(&mut self) -> PngResult<u16> {
    self.read_array().map(u16::from_be_bytes)
  }

  #[inline]
  pub fn read_u32(&mut self) -> PngResult<u32> {
    self.read_array().map(u32::from_be_bytes)
  }

  #[inline]
  pub fn read_i32(&mut self) -> PngResult<i32> {
    self.read_array().map(i32::from_be_bytes)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_reads_big_endian() {
    let mut c = ByteCursor::new(&[0x12, 0x34, 0xDE, 0xAD, 0xBE, 0xEF, 0xFF, 0xFF, 0xFF, 0xFE]);
    assert_eq!(c.read_u16().unwrap(), 0x1234);
    assert_eq!(c.read_u32().unwrap(), 0xDEAD_BEEF);
    assert_eq!(c.read_i32().unwrap(), -2);
    assert!(c.is_empty());
  }

  #[test]
  fn test_short_read_does_not_advance() {
    let mut c = ByteCursor::new(&[1, 2, 3]);
    assert_eq!(c.read_u8().unwrap(), 1);
    assert!(matches!(c.read_u32(), Err(PngError::Truncated { .. })));
    assert_eq!(c.position(), 1);
    assert_eq!(c.read_u16().unwrap(), 0x0203);
    assert!(matches!(c.read_u8(), Err(PngError::Truncated { .. })));
  }

  #[test]
  fn test_rest_consumes_everything() {
    let mut c = ByteCursor::new(b"abcdef");
    c.skip(2).unwrap();
    assert_eq!(c.peek_rest(), b"cdef");
    assert_eq!(c.rest(), b"cdef");
    assert_eq!(c.rest(), b"");
    assert_eq!(c.remaining(), 0);
  }
}
