use super::*;

/// Background color.
///
/// RGB and Greyscale colors are always given as `u16` values. The actual color
/// selected should stay within the bit depth range of the rest of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
#[allow(missing_docs)]
pub enum bKGD {
  Greyscale { y: u16 },
  RGB { r: u16, g: u16, b: u16, bit_depth: u8 },
  Index { i: u8, color: [u8; 3] },
}
impl bKGD {
  /// Parses the background in the layout the image's color type calls for.
  pub fn decode(data: &[u8], state: &ImageState) -> PngResult<Self> {
    const TY: ChunkTy = ChunkTy::bKGD;
    let max = u32::from(state.max_sample_value()?);
    let mut c = ByteCursor::new(data);
    Ok(match state.color_type()? {
      PngColorType::Y | PngColorType::YA => {
        check_length(TY, LengthRule::Exactly(2), data)?;
        let y = c.read_u16()?;
        check_range(TY, "gray level", y, 0..=max)?;
        bKGD::Greyscale { y }
      }
      PngColorType::RGB | PngColorType::RGBA => {
        check_length(TY, LengthRule::Exactly(6), data)?;
        let [r, g, b] = [c.read_u16()?, c.read_u16()?, c.read_u16()?];
        check_range(TY, "red sample", r, 0..=max)?;
        check_range(TY, "green sample", g, 0..=max)?;
        check_range(TY, "blue sample", b, 0..=max)?;
        bKGD::RGB { r, g, b, bit_depth: state.bit_depth()? }
      }
      PngColorType::Index => {
        check_length(TY, LengthRule::Exactly(1), data)?;
        let palette = state.palette().ok_or(PngError::PaletteMissing { ty: TY })?;
        let i = c.read_u8()?;
        let color = *palette.get(usize::from(i)).ok_or(PngError::ValueOutOfRange {
          ty: TY,
          field: "palette index",
          value: u32::from(i),
        })?;
        bKGD::Index { i, color }
      }
    })
  }
}
impl core::fmt::Display for bKGD {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match *self {
      bKGD::Greyscale { y } => write!(f, "{y}"),
      bKGD::RGB { r, g, b, bit_depth } => write_rgb_samples(f, [r, g, b], bit_depth),
      bKGD::Index { i, color: [r, g, b] } => write!(f, "{i} (#{r:02x}{g:02x}{b:02x})"),
    }
  }
}
