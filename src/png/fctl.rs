use super::*;

/// Frame control, from the APNG extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct fcTL {
  pub sequence_number: u32,
  pub width: u32,
  pub height: u32,
  pub x_offset: u32,
  pub y_offset: u32,
  pub delay_num: u16,
  pub delay_den: u16,
  pub dispose_op: u8,
  pub blend_op: u8,
}
impl TryFrom<&[u8]> for fcTL {
  type Error = PngError;
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    const TY: ChunkTy = ChunkTy::fcTL;
    check_length(TY, LengthRule::Exactly(26), data)?;
    let mut c = ByteCursor::new(data);
    let out = Self {
      sequence_number: c.read_u32()?,
      width: c.read_u32()?,
      height: c.read_u32()?,
      x_offset: c.read_u32()?,
      y_offset: c.read_u32()?,
      delay_num: c.read_u16()?,
      delay_den: c.read_u16()?,
      dispose_op: c.read_u8()?,
      blend_op: c.read_u8()?,
    };
    check_range(TY, "dispose op", out.dispose_op, 0..=3)?;
    check_range(TY, "blend op", out.blend_op, 0..=1)?;
    Ok(out)
  }
}
impl core::fmt::Display for fcTL {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let dispose = match self.dispose_op {
      0 => "None",
      1 => "Background",
      2 => "Previous",
      _ => "Reserved",
    };
    let blend = if self.blend_op == 0 { "Source" } else { "Over" };
    writeln!(f)?;
    writeln!(f, "\tWidth    = {}", self.width)?;
    writeln!(f, "\tHeight   = {}", self.height)?;
    writeln!(f, "\tX offset = {}", self.x_offset)?;
    writeln!(f, "\tY offset = {}", self.y_offset)?;
    writeln!(f, "\tDelays   = {} (denominator {})", self.delay_num, self.delay_den)?;
    writeln!(f, "\tDisposal = {} ({dispose})", self.dispose_op)?;
    write!(f, "\tBlend    = {} ({blend})", self.blend_op)
  }
}
