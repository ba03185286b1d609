use super::*;

/// Image gamma, times 100 000.
///
/// Spec: [gAMA](https://www.w3.org/TR/png/#11gAMA)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct gAMA(pub u32);
impl TryFrom<&[u8]> for gAMA {
  type Error = PngError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    check_length(ChunkTy::gAMA, LengthRule::Exactly(4), data)?;
    let gamma = ByteCursor::new(data).read_u32()?;
    if gamma == 0 {
      return Err(PngError::ValueOutOfRange { ty: ChunkTy::gAMA, field: "gamma", value: 0 });
    }
    Ok(Self(gamma))
  }
}
impl core::fmt::Display for gAMA {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    core::fmt::Display::fmt(&Fixed5(self.0), f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_gamma_display() {
    let g = gAMA::try_from(&45455_u32.to_be_bytes()[..]).unwrap();
    assert_eq!(g.to_string(), "0.45455");
    assert!(gAMA::try_from(&[0; 4][..]).is_err());
    assert!(gAMA::try_from(&[0; 3][..]).is_err());
  }
}
