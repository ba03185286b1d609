use super::*;

/// Transparency
///
/// Format depends on the PNG color type:
/// * greyscale: the one gray level that is fully transparent
/// * RGB: the one color that is fully transparent
/// * indexed: alpha values paired with the palette entries. There can be less
///   alpha entries than palette entries (missing entries default to full
///   opacity, `0xFF`)
///
/// Color types that already have an alpha channel can't use this chunk.
///
/// Spec: [tRNS](https://www.w3.org/TR/png/#11tRNS)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum tRNS {
  Greyscale { y: u16 },
  RGB { r: u16, g: u16, b: u16, bit_depth: u8 },
  Index { alphas: Vec<u8> },
}
impl tRNS {
  pub fn decode(data: &[u8], state: &ImageState) -> PngResult<Self> {
    const TY: ChunkTy = ChunkTy::tRNS;
    let mut c = ByteCursor::new(data);
    Ok(match state.color_type()? {
      PngColorType::Y => {
        check_length(TY, LengthRule::Exactly(2), data)?;
        let y = c.read_u16()?;
        check_range(TY, "gray level", y, 0..=u32::from(state.max_sample_value()?))?;
        tRNS::Greyscale { y }
      }
      PngColorType::RGB => {
        check_length(TY, LengthRule::Exactly(6), data)?;
        let max = u32::from(state.max_sample_value()?);
        let [r, g, b] = [c.read_u16()?, c.read_u16()?, c.read_u16()?];
        check_range(TY, "red sample", r, 0..=max)?;
        check_range(TY, "green sample", g, 0..=max)?;
        check_range(TY, "blue sample", b, 0..=max)?;
        tRNS::RGB { r, g, b, bit_depth: state.bit_depth()? }
      }
      PngColorType::Index => {
        let entries = state.palette().ok_or(PngError::PaletteMissing { ty: TY })?.len();
        check_length(TY, LengthRule::AtMost(entries as u32), data)?;
        tRNS::Index { alphas: data.to_vec() }
      }
      PngColorType::YA | PngColorType::RGBA => {
        return Err(PngError::UnexpectedChunk {
          ty: TY,
          reason: "for a color type with an alpha channel",
        })
      }
    })
  }
}
impl core::fmt::Display for tRNS {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      tRNS::Greyscale { y } => write!(f, "{y}"),
      tRNS::RGB { r, g, b, bit_depth } => write_rgb_samples(f, [*r, *g, *b], *bit_depth),
      tRNS::Index { alphas } => {
        writeln!(f, "Entries = {}", alphas.len())?;
        write_rows(f, alphas, 6, |f, i, alpha| write!(f, "[{i:03}] {alpha:02x}"))
      }
    }
  }
}
