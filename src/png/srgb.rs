use super::*;

/// Standard RGB colour space, given as the rendering intent.
///
/// Spec: [sRGB](https://www.w3.org/TR/png/#11sRGB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum sRGB {
  Perceptual = 0,
  RelativeColorimetric = 1,
  Saturation = 2,
  AbsoluteColorimetric = 3,
}
impl TryFrom<&[u8]> for sRGB {
  type Error = PngError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    check_length(ChunkTy::sRGB, LengthRule::Exactly(1), data)?;
    Ok(match data {
      [0] => Self::Perceptual,
      [1] => Self::RelativeColorimetric,
      [2] => Self::Saturation,
      [3] => Self::AbsoluteColorimetric,
      [other, ..] => {
        return Err(PngError::ValueOutOfRange {
          ty: ChunkTy::sRGB,
          field: "rendering intent",
          value: u32::from(*other),
        })
      }
      [] => return Err(PngError::Truncated { what: "rendering intent" }),
    })
  }
}
impl core::fmt::Display for sRGB {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let name = match self {
      Self::Perceptual => "Perceptual",
      Self::RelativeColorimetric => "Relative colorimetric",
      Self::Saturation => "Saturation",
      Self::AbsoluteColorimetric => "Absolute colorimetric",
    };
    write!(f, "{name} intent ({})", *self as u8)
  }
}
