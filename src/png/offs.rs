use super::*;

/// Image offset, the position of the image on a larger page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct oFFs {
  pub x: i32,
  pub y: i32,
  pub unit: u8,
}
impl TryFrom<&[u8]> for oFFs {
  type Error = PngError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    check_length(ChunkTy::oFFs, LengthRule::Exactly(9), data)?;
    let mut c = ByteCursor::new(data);
    let x = c.read_i32()?;
    let y = c.read_i32()?;
    let unit = c.read_u8()?;
    check_range(ChunkTy::oFFs, "unit specifier", unit, 0..=1)?;
    Ok(Self { x, y, unit })
  }
}
impl core::fmt::Display for oFFs {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let unit = if self.unit == 1 { "micrometres" } else { "pixels" };
    write!(f, "{} x {} {unit}", self.x, self.y)
  }
}
