use super::*;

/// Physical pixel dimensions
///
/// With the unit set to meters these are pixels per meter. Otherwise they
/// only give the aspect ratio.
///
/// Spec: [pHYs](https://www.w3.org/TR/png/#11pHYs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct pHYs {
  pub pixels_per_x: u32,
  pub pixels_per_y: u32,
  pub unit: u8,
}
impl TryFrom<&[u8]> for pHYs {
  type Error = PngError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    check_length(ChunkTy::pHYs, LengthRule::Exactly(9), data)?;
    let mut c = ByteCursor::new(data);
    let pixels_per_x = c.read_u32()?;
    let pixels_per_y = c.read_u32()?;
    let unit = c.read_u8()?;
    check_range(ChunkTy::pHYs, "unit specifier", unit, 0..=1)?;
    Ok(Self { pixels_per_x, pixels_per_y, unit })
  }
}
impl pHYs {
  #[inline]
  #[must_use]
  pub const fn is_meters(&self) -> bool {
    self.unit == 1
  }

  /// Approximate dots per inch on each axis, when the unit is meters.
  #[inline]
  #[must_use]
  pub fn dpi(&self) -> Option<(u32, u32)> {
    fn per_inch(per_meter: u32) -> u32 {
      (f64::from(per_meter) * 0.0254) as u32
    }
    self.is_meters().then(|| (per_inch(self.pixels_per_x), per_inch(self.pixels_per_y)))
  }
}
impl core::fmt::Display for pHYs {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self.dpi() {
      Some((x_dpi, y_dpi)) => write!(
        f,
        "{} (approx. {x_dpi} DPI) x {} (approx. {y_dpi} DPI) pixels per meter",
        self.pixels_per_x, self.pixels_per_y
      ),
      None => write!(f, "{} x {} (aspect ratio only)", self.pixels_per_x, self.pixels_per_y),
    }
  }
}
