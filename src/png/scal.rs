use super::*;

/// Physical scale of the image subject.
///
/// Width and height are decimal numbers kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct sCAL {
  pub unit: u8,
  pub width: String,
  pub height: String,
}
impl TryFrom<&[u8]> for sCAL {
  type Error = PngError;
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    const TY: ChunkTy = ChunkTy::sCAL;
    check_length(TY, LengthRule::AtLeast(4), data)?;
    let mut c = ByteCursor::new(data);
    let unit = c.read_u8()?;
    check_range(TY, "unit specifier", unit, 1..=2)?;
    let width = c.latin1_field(TY)?;
    let height = c.rest();
    if !is_numeric_text(width.as_bytes()) {
      return Err(PngError::MalformedText { ty: TY, reason: "width is not a number" });
    }
    if !is_numeric_text(height) {
      return Err(PngError::MalformedText { ty: TY, reason: "height is not a number" });
    }
    Ok(Self { unit, width, height: latin1_to_string(height) })
  }
}
impl core::fmt::Display for sCAL {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let unit = if self.unit == 1 { "meters" } else { "radians" };
    write!(f, "{} x {} ({unit})", self.width, self.height)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_scale() {
    let s = sCAL::try_from(&b"\x011.5\x002e-3"[..]).unwrap();
    assert_eq!(s.to_string(), "1.5 x 2e-3 (meters)");
  }

  #[test]
  fn test_bad_scale() {
    assert!(matches!(
      sCAL::try_from(&b"\x031\x001"[..]),
      Err(PngError::ValueOutOfRange { field: "unit specifier", value: 3, .. })
    ));
    assert!(matches!(sCAL::try_from(&b"\x01ab\x001"[..]), Err(PngError::MalformedText { .. })));
    assert!(matches!(sCAL::try_from(&b"\x0112"[..]), Err(PngError::WrongChunkLength { .. })));
    assert!(matches!(sCAL::try_from(&b"\x01123"[..]), Err(PngError::MalformedText { .. })));
  }
}
