use super::*;

/// Significant bits
///
/// There's one byte per channel (according to the PNG's pixel format),
/// giving the number of significant bits for each channel. Indexed images
/// give one for each of the palette's red, green, and blue.
///
/// Spec: [sBIT](https://www.w3.org/TR/png/#11sBIT)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct sBIT {
  significant_bits: Vec<u8>,
}
impl sBIT {
  pub fn decode(data: &[u8], state: &ImageState) -> PngResult<Self> {
    let color_type = state.color_type()?;
    let (expected, max_bits) = match color_type {
      PngColorType::Index => (3, 8),
      other => (u32::from(other.channel_count()), state.bit_depth()?),
    };
    check_length(ChunkTy::sBIT, LengthRule::Exactly(expected), data)?;
    for &bits in data {
      check_range(ChunkTy::sBIT, "significant bits", bits, 1..=u32::from(max_bits))?;
    }
    Ok(Self { significant_bits: data.to_vec() })
  }

  #[inline]
  #[must_use]
  pub fn significant_bits(&self) -> &[u8] {
    &self.significant_bits
  }
}
impl core::fmt::Display for sBIT {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for (i, bits) in self.significant_bits.iter().enumerate() {
      if i > 0 {
        f.write_str(" ")?;
      }
      write!(f, "{bits}")?;
    }
    Ok(())
  }
}
