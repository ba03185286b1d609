use super::*;

/// Textual data
///
/// A keyword, then Latin-1 text running to the end of the chunk.
///
/// Spec: [tEXt](https://www.w3.org/TR/png/#11tEXt)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct tEXt {
  pub keyword: String,
  pub text: String,
}
impl TryFrom<&[u8]> for tEXt {
  type Error = PngError;
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    check_length(ChunkTy::tEXt, LengthRule::AtLeast(2), data)?;
    let mut c = ByteCursor::new(data);
    let keyword = c.keyword(ChunkTy::tEXt)?;
    let text = latin1_to_string(c.rest());
    Ok(Self { keyword, text })
  }
}
impl core::fmt::Display for tEXt {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    writeln!(f)?;
    writeln!(f, "\tKeyword = {}", self.keyword)?;
    write!(f, "\tText    = {}", OneLine(&self.text))
  }
}
