use super::*;

/// Embedded ICC profile. The profile itself stays compressed.
///
/// Spec: [iCCP](https://www.w3.org/TR/png/#11iCCP)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct iCCP {
  pub profile_name: String,
  pub compression_method: u8,
  pub compressed_len: usize,
}
impl TryFrom<&[u8]> for iCCP {
  type Error = PngError;
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    check_length(ChunkTy::iCCP, LengthRule::AtLeast(2), data)?;
    let mut c = ByteCursor::new(data);
    let profile_name = c.keyword(ChunkTy::iCCP)?;
    let compression_method = c.read_u8()?;
    check_range(ChunkTy::iCCP, "compression method", compression_method, 0..=0)?;
    Ok(Self { profile_name, compression_method, compressed_len: c.remaining() })
  }
}
impl core::fmt::Display for iCCP {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    writeln!(f)?;
    writeln!(f, "\tProfile name = {}", self.profile_name)?;
    writeln!(f, "\tCompression method = {} (zlib deflate/inflate)", self.compression_method)?;
    write!(f, "\tProfile (compressed) = {} bytes", self.compressed_len)
  }
}
