use super::*;

/// Widths and heights are limited to what fits in an `i32`, and can't be 0.
pub const MAX_DIMENSION: u32 = (1 << 31) - 1;

/// Image header.
///
/// Always the first chunk. Sets the pixel format that every later chunk is
/// checked against.
///
/// Spec: [IHDR](https://www.w3.org/TR/png/#11IHDR)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IHDR {
  pub width: u32,
  pub height: u32,
  pub bit_depth: u8,
  pub color_type: PngColorType,
  pub compression_method: u8,
  pub filter_method: u8,
  pub interlace_method: u8,
}
impl IHDR {
  /// Parses the header and records the pixel format in `state`.
  pub fn decode(data: &[u8], state: &mut ImageState) -> PngResult<Self> {
    check_length(ChunkTy::IHDR, LengthRule::Exactly(13), data)?;
    let mut c = ByteCursor::new(data);
    let width = c.read_u32()?;
    let height = c.read_u32()?;
    let [bit_depth, color_type, compression_method, filter_method, interlace_method] =
      c.read_array()?;
    check_range(ChunkTy::IHDR, "width", width, 1..=MAX_DIMENSION)?;
    check_range(ChunkTy::IHDR, "height", height, 1..=MAX_DIMENSION)?;
    check_range(ChunkTy::IHDR, "compression method", compression_method, 0..=0)?;
    check_range(ChunkTy::IHDR, "filter method", filter_method, 0..=0)?;
    check_range(ChunkTy::IHDR, "interlace method", interlace_method, 0..=1)?;
    state.set_header(width, height, bit_depth, color_type)?;
    Ok(Self {
      width,
      height,
      bit_depth,
      color_type: state.color_type()?,
      compression_method,
      filter_method,
      interlace_method,
    })
  }

  #[inline]
  #[must_use]
  pub const fn is_interlaced(&self) -> bool {
    self.interlace_method == 1
  }

  /// Bits used by one full pixel.
  #[inline]
  #[must_use]
  pub const fn bits_per_pixel(&self) -> u32 {
    self.bit_depth as u32 * self.color_type.channel_count() as u32
  }
}
impl core::fmt::Display for IHDR {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    writeln!(f)?;
    writeln!(f, "\tWidth       = {}", self.width)?;
    writeln!(f, "\tHeight      = {}", self.height)?;
    writeln!(f, "\tBit depth   = {} per channel", self.bit_depth)?;
    writeln!(f, "\tColor type  = {}", self.color_type.name())?;
    writeln!(
      f,
      "\tChannels    = {} per pixel ({} bits)",
      self.color_type.channel_count(),
      self.bits_per_pixel()
    )?;
    writeln!(f, "\tCompression = {} (zlib deflate/inflate)", self.compression_method)?;
    writeln!(f, "\tFilter      = {} (adaptive filtering)", self.filter_method)?;
    let interlace = if self.is_interlaced() { "Adam7" } else { "no" };
    write!(f, "\tInterlace   = {} ({interlace} interlace)", self.interlace_method)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn header(width: u32, height: u32, tail: [u8; 5]) -> Vec<u8> {
    let mut v = width.to_be_bytes().to_vec();
    v.extend_from_slice(&height.to_be_bytes());
    v.extend_from_slice(&tail);
    v
  }

  #[test]
  fn test_decode_rgb8() {
    let mut state = ImageState::new();
    let ihdr = IHDR::decode(&header(1, 1, [8, 2, 0, 0, 0]), &mut state).unwrap();
    assert_eq!(ihdr.color_type, PngColorType::RGB);
    assert_eq!(ihdr.bits_per_pixel(), 24);
    assert_eq!(state.width().unwrap(), 1);
    let text = ihdr.to_string();
    assert!(text.contains("\tWidth       = 1\n"));
    assert!(text.contains("\tBit depth   = 8 per channel\n"));
    assert!(text.contains("\tColor type  = RGB\n"));
    assert!(text.ends_with("\tInterlace   = 0 (no interlace)"));
  }

  #[test]
  fn test_rejects_bad_fields() {
    for (data, field) in [
      (header(0, 1, [8, 2, 0, 0, 0]), "width"),
      (header(1, 1 << 31, [8, 2, 0, 0, 0]), "height"),
      (header(1, 1, [8, 2, 1, 0, 0]), "compression method"),
      (header(1, 1, [8, 2, 0, 4, 0]), "filter method"),
      (header(1, 1, [8, 2, 0, 0, 2]), "interlace method"),
    ] {
      let mut state = ImageState::new();
      match IHDR::decode(&data, &mut state) {
        Err(PngError::ValueOutOfRange { field: f, .. }) => assert_eq!(f, field),
        other => panic!("{field}: {other:?}"),
      }
      assert!(!state.has_header());
    }
  }

  #[test]
  fn test_wrong_lengths() {
    let good = header(1, 1, [8, 2, 0, 0, 0]);
    for len in [12, 14] {
      let mut data = good.clone();
      data.resize(len, 0);
      assert!(matches!(
        IHDR::decode(&data, &mut ImageState::new()),
        Err(PngError::WrongChunkLength { expected: LengthRule::Exactly(13), .. })
      ));
    }
  }

  #[test]
  fn test_indexed_16_bit() {
    assert!(matches!(
      IHDR::decode(&header(1, 1, [16, 3, 0, 0, 0]), &mut ImageState::new()),
      Err(PngError::InvalidBitDepth { color_type: 3, bit_depth: 16 })
    ));
  }
}
