use super::*;

/// Compressed textual data
///
/// * keyword (should be 1-79 bytes)
/// * null byte
/// * compression method (only defined for zlib compression)
/// * zlib compressed data stream, which is left compressed
///
/// Spec: [zTXt](https://www.w3.org/TR/png/#11zTXt)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct zTXt {
  pub keyword: String,
  pub compression_method: u8,
  pub compressed_len: usize,
}
impl TryFrom<&[u8]> for zTXt {
  type Error = PngError;
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    check_length(ChunkTy::zTXt, LengthRule::AtLeast(2), data)?;
    let mut c = ByteCursor::new(data);
    let keyword = c.keyword(ChunkTy::zTXt)?;
    let compression_method = c.read_u8()?;
    check_range(ChunkTy::zTXt, "compression method", compression_method, 0..=0)?;
    Ok(Self { keyword, compression_method, compressed_len: c.remaining() })
  }
}
impl core::fmt::Display for zTXt {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    writeln!(f)?;
    writeln!(f, "\tKeyword = {}", self.keyword)?;
    writeln!(f, "\tCompression method = {} (zlib deflate/inflate)", self.compression_method)?;
    write!(f, "\tText (compressed) = {} bytes", self.compressed_len)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ztxt() {
    let z = zTXt::try_from(&b"Comment\0\0\x78\x9c"[..]).unwrap();
    assert_eq!(z.keyword, "Comment");
    assert_eq!(z.compressed_len, 2);
    assert!(matches!(
      zTXt::try_from(&b"Comment\0\x08"[..]),
      Err(PngError::ValueOutOfRange { value: 8, .. })
    ));
  }
}
