use super::*;

/// The types of color that PNG supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PngColorType {
  /// Greyscale
  Y = 0,
  /// Red, Green, Blue
  RGB = 2,
  /// Index into a palette.
  Index = 3,
  /// Greyscale + Alpha
  YA = 4,
  /// Red, Green, Blue, Alpha
  RGBA = 6,
}
impl PngColorType {
  /// The number of channels in this type of color.
  #[inline]
  #[must_use]
  pub const fn channel_count(self) -> u8 {
    match self {
      Self::Y => 1,
      Self::RGB => 3,
      Self::Index => 1,
      Self::YA => 2,
      Self::RGBA => 4,
    }
  }

  /// Bit depths this color type may be combined with.
  #[inline]
  #[must_use]
  pub const fn allowed_bit_depths(self) -> &'static [u8] {
    match self {
      Self::Y => &[1, 2, 4, 8, 16],
      Self::Index => &[1, 2, 4, 8],
      Self::RGB | Self::YA | Self::RGBA => &[8, 16],
    }
  }

  /// The name used in reports.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Y => "Grayscale",
      Self::RGB => "RGB",
      Self::Index => "Indexed color",
      Self::YA => "Grayscale with Alpha channel",
      Self::RGBA => "RGB with Alpha channel",
    }
  }
}
impl TryFrom<u8> for PngColorType {
  type Error = PngError;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => PngColorType::Y,
      2 => PngColorType::RGB,
      3 => PngColorType::Index,
      4 => PngColorType::YA,
      6 => PngColorType::RGBA,
      _ => return Err(PngError::InvalidColorType(value)),
    })
  }
}

/// Things learned from earlier chunks that later chunks are checked against.
///
/// One of these lives for the length of a single decode. The header sets the
/// pixel format exactly once, and a palette can be recorded exactly once
/// after that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageState {
  header: Option<HeaderInfo>,
  palette: Option<Vec<[u8; 3]>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeaderInfo {
  width: u32,
  height: u32,
  bit_depth: u8,
  color_type: PngColorType,
}

impl ImageState {
  #[inline]
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Records the image's pixel format.
  ///
  /// Nothing is stored unless every value is legal.
  pub fn set_header(
    &mut self, width: u32, height: u32, bit_depth: u8, color_type: u8,
  ) -> PngResult<()> {
    if self.header.is_some() {
      return Err(PngError::DuplicateChunk { ty: ChunkTy::IHDR });
    }
    let color_type = PngColorType::try_from(color_type)?;
    if !color_type.allowed_bit_depths().contains(&bit_depth) {
      return Err(PngError::InvalidBitDepth { color_type: color_type as u8, bit_depth });
    }
    self.header = Some(HeaderInfo { width, height, bit_depth, color_type });
    Ok(())
  }

  /// Records the palette.
  pub fn set_palette(&mut self, entries: &[[u8; 3]]) -> PngResult<()> {
    let header = self.header.ok_or(PngError::HeaderNotYetSeen)?;
    if self.palette.is_some() {
      return Err(PngError::DuplicateChunk { ty: ChunkTy::PLTE });
    }
    let max = match header.color_type {
      PngColorType::Index => 1_usize << header.bit_depth,
      _ => 256,
    };
    if entries.len() > max {
      return Err(PngError::PaletteTooLarge { entries: entries.len(), max });
    }
    self.palette = Some(entries.to_vec());
    Ok(())
  }

  #[inline]
  pub fn has_header(&self) -> bool {
    self.header.is_some()
  }

  #[inline]
  pub fn width(&self) -> PngResult<u32> {
    self.header.map(|h| h.width).ok_or(PngError::HeaderNotYetSeen)
  }

  #[inline]
  pub fn height(&self) -> PngResult<u32> {
    self.header.map(|h| h.height).ok_or(PngError::HeaderNotYetSeen)
  }

  #[inline]
  pub fn bit_depth(&self) -> PngResult<u8> {
    self.header.map(|h| h.bit_depth).ok_or(PngError::HeaderNotYetSeen)
  }

  #[inline]
  pub fn color_type(&self) -> PngResult<PngColorType> {
    self.header.map(|h| h.color_type).ok_or(PngError::HeaderNotYetSeen)
  }

  #[inline]
  pub fn channel_count(&self) -> PngResult<u8> {
    self.color_type().map(PngColorType::channel_count)
  }

  /// The largest value a single sample can have, `2^bit_depth - 1`.
  #[inline]
  pub fn max_sample_value(&self) -> PngResult<u16> {
    self.bit_depth().map(|depth| u16::MAX >> (16 - u32::from(depth)))
  }

  /// The palette, if a `PLTE` chunk has been seen.
  #[inline]
  #[must_use]
  pub fn palette(&self) -> Option<&[[u8; 3]]> {
    self.palette.as_deref()
  }

  /// Number of palette entries, zero if there's no palette.
  #[inline]
  #[must_use]
  pub fn palette_entry_count(&self) -> usize {
    self.palette.as_ref().map_or(0, Vec::len)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_allowed_depths() {
    for (color_type, depth, ok) in [
      (0, 1, true),
      (0, 16, true),
      (2, 8, true),
      (2, 4, false),
      (3, 8, true),
      (3, 16, false),
      (4, 16, true),
      (4, 2, false),
      (6, 8, true),
      (0, 3, false),
    ] {
      let mut state = ImageState::new();
      assert_eq!(state.set_header(1, 1, depth, color_type).is_ok(), ok, "{color_type}/{depth}");
    }
  }

  #[test]
  fn test_failed_header_leaves_state_untouched() {
    let mut state = ImageState::new();
    assert!(matches!(state.set_header(1, 1, 16, 3), Err(PngError::InvalidBitDepth { .. })));
    assert!(matches!(state.set_header(1, 1, 8, 5), Err(PngError::InvalidColorType(5))));
    assert!(!state.has_header());
    assert!(matches!(state.max_sample_value(), Err(PngError::HeaderNotYetSeen)));
  }

  #[test]
  fn test_max_sample_value() {
    for (depth, max) in [(1, 1), (2, 3), (4, 15), (8, 255), (16, 65535)] {
      let mut state = ImageState::new();
      state.set_header(1, 1, depth, 0).unwrap();
      assert_eq!(state.max_sample_value().unwrap(), max);
    }
  }

  #[test]
  fn test_palette_limits() {
    let mut state = ImageState::new();
    state.set_header(4, 4, 2, 3).unwrap();
    assert!(matches!(
      state.set_palette(&[[0; 3]; 5]),
      Err(PngError::PaletteTooLarge { entries: 5, max: 4 })
    ));
    assert_eq!(state.palette_entry_count(), 0);
    state.set_palette(&[[1, 2, 3]; 4]).unwrap();
    assert_eq!(state.palette_entry_count(), 4);
    assert!(matches!(state.set_palette(&[[0; 3]]), Err(PngError::DuplicateChunk { .. })));

    let mut rgb = ImageState::new();
    rgb.set_header(1, 1, 16, 2).unwrap();
    assert!(rgb.set_palette(&[[0; 3]; 257]).is_err());
    assert!(rgb.set_palette(&[[0; 3]; 256]).is_ok());
  }

  #[test]
  fn test_header_only_once() {
    let mut state = ImageState::new();
    state.set_header(1, 1, 8, 2).unwrap();
    assert!(matches!(state.set_header(1, 1, 8, 2), Err(PngError::DuplicateChunk { .. })));
    assert_eq!(state.color_type().unwrap(), PngColorType::RGB);
    assert_eq!(state.channel_count().unwrap(), 3);
  }
}
