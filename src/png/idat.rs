use super::*;

/// Image Data.
///
/// * Image data is stored with Zlib compression applied.
/// * Images can have more than one IDAT chunk. They should all be stored in a
///   row. Multiple chunks are treated as a single Zlib datastream.
///
/// The data isn't decompressed here, only its size is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IDAT {
  compressed_len: usize,
}
impl From<&[u8]> for IDAT {
  #[inline]
  fn from(data: &[u8]) -> Self {
    Self { compressed_len: data.len() }
  }
}
impl IDAT {
  #[inline]
  #[must_use]
  pub const fn compressed_len(&self) -> usize {
    self.compressed_len
  }
}
impl core::fmt::Display for IDAT {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{} bytes of compressed image data", self.compressed_len)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_size_only() {
    let idat = IDAT::from(&[0x78, 0x9C, 0x63, 0x00][..]);
    assert_eq!(idat.compressed_len(), 4);
    assert_eq!(idat.to_string(), "4 bytes of compressed image data");
    assert_eq!(IDAT::from(&[0_u8; 0][..]).compressed_len(), 0);
  }
}
