use super::*;

/// Suggested palette
///
/// A name and sample depth, then a series of entries. Each entry is either six
/// or ten bytes, depending on the bit depth of the RGBA channels (1 byte each
/// or 2 bytes each), and ends with a `u16` frequency.
///
/// Spec: [sPLT](https://www.w3.org/TR/png/#11sPLT)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct sPLT {
  pub name: String,
  pub sample_depth: u8,
  pub entries: Vec<SuggestedColor>,
}

/// One entry of an [`sPLT`] chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuggestedColor {
  pub rgba: [u16; 4],
  pub frequency: u16,
}

impl TryFrom<&[u8]> for sPLT {
  type Error = PngError;
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    const TY: ChunkTy = ChunkTy::sPLT;
    check_length(TY, LengthRule::AtLeast(3), data)?;
    let mut c = ByteCursor::new(data);
    let name = c.keyword(TY)?;
    let sample_depth = c.read_u8()?;
    let rest = c.rest();
    let bad_len = |entry: u32| PngError::WrongChunkLength {
      ty: TY,
      expected: LengthRule::MultipleOf(entry),
      actual: rest.len() as u32,
    };
    let entries = match sample_depth {
      8 => bytemuck::try_cast_slice::<u8, [u8; 6]>(rest)
        .map_err(|_| bad_len(6))?
        .iter()
        .map(|&[r, g, b, a, f0, f1]| SuggestedColor {
          rgba: [r, g, b, a].map(u16::from),
          frequency: u16::from_be_bytes([f0, f1]),
        })
        .collect(),
      16 => bytemuck::try_cast_slice::<u8, [[u8; 2]; 5]>(rest)
        .map_err(|_| bad_len(10))?
        .iter()
        .map(|&[r, g, b, a, f]| SuggestedColor {
          rgba: [r, g, b, a].map(u16::from_be_bytes),
          frequency: u16::from_be_bytes(f),
        })
        .collect(),
      other => {
        return Err(PngError::ValueOutOfRange {
          ty: TY,
          field: "sample depth",
          value: u32::from(other),
        })
      }
    };
    Ok(Self { name, sample_depth, entries })
  }
}
impl core::fmt::Display for sPLT {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    writeln!(f)?;
    writeln!(f, "\tPalette name   = {}", self.name)?;
    writeln!(f, "\tSample depth   = {}", self.sample_depth)?;
    write!(f, "\tEntries        = {}", self.entries.len())?;
    if self.entries.is_empty() {
      return Ok(());
    }
    writeln!(f)?;
    let wide = self.sample_depth == 16;
    write_rows(f, &self.entries, 4, |f, i, e| {
      let [r, g, b, a] = e.rgba;
      if wide {
        write!(f, "[{i:03}] #{r:04x}{g:04x}{b:04x}{a:04x} ({})", e.frequency)
      } else {
        write!(f, "[{i:03}] #{r:02x}{g:02x}{b:02x}{a:02x} ({})", e.frequency)
      }
    })
  }
}
