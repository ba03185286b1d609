use super::*;

/// Animation control, from the APNG extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct acTL {
  pub num_frames: u32,
  /// 0 means loop forever.
  pub num_plays: u32,
}
impl TryFrom<&[u8]> for acTL {
  type Error = PngError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    check_length(ChunkTy::acTL, LengthRule::Exactly(8), data)?;
    let mut c = ByteCursor::new(data);
    Ok(Self { num_frames: c.read_u32()?, num_plays: c.read_u32()? })
  }
}
impl core::fmt::Display for acTL {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    writeln!(f)?;
    writeln!(f, "\tNumber of frames = {}", self.num_frames)?;
    write!(f, "\tNumber of plays  = {}", self.num_plays)?;
    if self.num_plays == 0 {
      f.write_str(" (infinite)")?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_actl() {
    let a = acTL::try_from(&[0, 0, 0, 3, 0, 0, 0, 0][..]).unwrap();
    assert_eq!(a.to_string(), "\n\tNumber of frames = 3\n\tNumber of plays  = 0 (infinite)");
    assert!(acTL::try_from(&[0; 9][..]).is_err());
  }
}
