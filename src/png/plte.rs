use super::*;

/// Palette data
///
/// Palette entries are always RGB.
///
/// If you want to have a paletted image with transparency then the transparency
/// info goes in a separate transparency chunk.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PLTE {
  entries: Vec<[u8; 3]>,
}
impl PLTE {
  /// Parses the palette and records it in `state`.
  pub fn decode(data: &[u8], state: &mut ImageState) -> PngResult<Self> {
    let entries: &[[u8; 3]] = bytemuck::try_cast_slice(data).map_err(|_| {
      PngError::WrongChunkLength {
        ty: ChunkTy::PLTE,
        expected: LengthRule::MultipleOf(3),
        actual: data.len() as u32,
      }
    })?;
    if matches!(state.color_type()?, PngColorType::Y | PngColorType::YA) {
      return Err(PngError::UnexpectedChunk { ty: ChunkTy::PLTE, reason: "in a grayscale image" });
    }
    check_range(ChunkTy::PLTE, "entry count", entries.len() as u32, 1..=256)?;
    state.set_palette(entries)?;
    Ok(Self { entries: entries.to_vec() })
  }

  /// Gets the entries as a slice.
  #[inline]
  #[must_use]
  pub fn entries(&self) -> &[[u8; 3]] {
    &self.entries
  }
}
impl core::fmt::Debug for PLTE {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    // currently prints no more than 4 palette entries
    f.debug_tuple("PLTE")
      .field(&&self.entries[..self.entries.len().min(4)])
      .field(&self.entries.len())
      .finish()
  }
}
impl core::fmt::Display for PLTE {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    writeln!(f, "Entries = {}", self.entries.len())?;
    write_rows(f, &self.entries, 6, |f, i, [r, g, b]| write!(f, "[{i:03}] #{r:02x}{g:02x}{b:02x}"))
  }
}
