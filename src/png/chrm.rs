use super::*;

/// Primary chromaticities and white point, each times 100 000.
///
/// Spec: [cHRM](https://www.w3.org/TR/png/#11cHRM)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct cHRM {
  pub white_point_x: u32,
  pub white_point_y: u32,
  pub red_x: u32,
  pub red_y: u32,
  pub green_x: u32,
  pub green_y: u32,
  pub blue_x: u32,
  pub blue_y: u32,
}

const MAX_COORDINATE: u32 = 80_000;
const MAX_SUM: u32 = 100_000;

impl TryFrom<&[u8]> for cHRM {
  type Error = PngError;
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    check_length(ChunkTy::cHRM, LengthRule::Exactly(32), data)?;
    let mut c = ByteCursor::new(data);
    let mut v = [0_u32; 8];
    for x in v.iter_mut() {
      *x = c.read_u32()?;
    }
    let [white_point_x, white_point_y, red_x, red_y, green_x, green_y, blue_x, blue_y] = v;
    for (name, x, y) in [
      ("white point", white_point_x, white_point_y),
      ("red", red_x, red_y),
      ("green", green_x, green_y),
      ("blue", blue_x, blue_y),
    ] {
      if x > MAX_COORDINATE || y > MAX_COORDINATE || x + y > MAX_SUM {
        return Err(PngError::InvalidChromaticity { field: name });
      }
    }
    Ok(Self { white_point_x, white_point_y, red_x, red_y, green_x, green_y, blue_x, blue_y })
  }
}
impl core::fmt::Display for cHRM {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    writeln!(f)?;
    writeln!(f, "\tWhite point x  = {}", Fixed5(self.white_point_x))?;
    writeln!(f, "\tWhite point y  = {}", Fixed5(self.white_point_y))?;
    writeln!(f, "\tRed x          = {}", Fixed5(self.red_x))?;
    writeln!(f, "\tRed y          = {}", Fixed5(self.red_y))?;
    writeln!(f, "\tGreen x        = {}", Fixed5(self.green_x))?;
    writeln!(f, "\tGreen y        = {}", Fixed5(self.green_y))?;
    writeln!(f, "\tBlue x         = {}", Fixed5(self.blue_x))?;
    write!(f, "\tBlue y         = {}", Fixed5(self.blue_y))
  }
}
