use super::*;

/// Image histogram
///
/// One `u16` usage frequency per palette entry.
///
/// Spec: [hIST](https://www.w3.org/TR/png/#11hIST)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct hIST {
  frequencies: Vec<u16>,
}
impl hIST {
  pub fn decode(data: &[u8], state: &ImageState) -> PngResult<Self> {
    const TY: ChunkTy = ChunkTy::hIST;
    let palette_len = state.palette().ok_or(PngError::PaletteMissing { ty: TY })?.len();
    let pairs: &[[u8; 2]] = bytemuck::try_cast_slice(data).map_err(|_| {
      PngError::WrongChunkLength {
        ty: TY,
        expected: LengthRule::MultipleOf(2),
        actual: data.len() as u32,
      }
    })?;
    check_length(TY, LengthRule::Exactly(2 * palette_len as u32), data)?;
    Ok(Self { frequencies: pairs.iter().map(|&p| u16::from_be_bytes(p)).collect() })
  }

  #[inline]
  #[must_use]
  pub fn frequencies(&self) -> &[u16] {
    &self.frequencies
  }
}
impl core::fmt::Display for hIST {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    writeln!(f, "Entries = {}", self.frequencies.len())?;
    write_rows(f, &self.frequencies, 6, |f, i, n| write!(f, "[{i:03}] {n}"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn with_palette(entries: usize) -> ImageState {
    let mut s = ImageState::new();
    s.set_header(1, 1, 8, 3).unwrap();
    s.set_palette(&vec![[0; 3]; entries]).unwrap();
    s
  }

  #[test]
  fn test_histogram() {
    let h = hIST::decode(&[0x01, 0x00, 0x00, 0x07], &with_palette(2)).unwrap();
    assert_eq!(h.frequencies(), &[256, 7]);
    assert_eq!(h.to_string(), "Entries = 2\n\t[000] 256\t[001] 7");
  }

  #[test]
  fn test_palette_checked_first() {
    let mut s = ImageState::new();
    s.set_header(1, 1, 8, 3).unwrap();
    // odd length, but the missing palette wins
    assert!(matches!(hIST::decode(&[0; 3], &s), Err(PngError::PaletteMissing { .. })));
    assert!(matches!(hIST::decode(&[0; 4], &s), Err(PngError::PaletteMissing { .. })));
  }

  #[test]
  fn test_entry_count_must_match() {
    assert!(matches!(
      hIST::decode(&[0; 3], &with_palette(2)),
      Err(PngError::WrongChunkLength { expected: LengthRule::MultipleOf(2), .. })
    ));
    assert!(matches!(
      hIST::decode(&[0; 2], &with_palette(2)),
      Err(PngError::WrongChunkLength { expected: LengthRule::Exactly(4), actual: 2, .. })
    ));
  }
}
