use super::*;

/// International textual data
///
/// When the text is compressed only its size is kept.
///
/// Spec: [iTXt](https://www.w3.org/TR/png/#11iTXt)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct iTXt {
  pub keyword: String,
  pub compression_flag: u8,
  pub compression_method: u8,
  pub language_tag: String,
  pub translated_keyword: String,
  pub text: ITxtText,
}

/// The text part of an [`iTXt`] chunk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ITxtText {
  Plain(String),
  Compressed { len: usize },
}

impl TryFrom<&[u8]> for iTXt {
  type Error = PngError;
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    const TY: ChunkTy = ChunkTy::iTXt;
    check_length(TY, LengthRule::AtLeast(2), data)?;
    let mut c = ByteCursor::new(data);
    let keyword = c.keyword(TY)?;
    let [compression_flag, compression_method] = c.read_array()?;
    check_range(TY, "compression flag", compression_flag, 0..=1)?;
    check_range(TY, "compression method", compression_method, 0..=0)?;
    let language_tag = c.latin1_field(TY)?;
    let translated_keyword = c.utf8_field(TY)?;
    let rest = c.rest();
    let text = if compression_flag == 1 {
      ITxtText::Compressed { len: rest.len() }
    } else {
      let s = core::str::from_utf8(rest)
        .map_err(|_| PngError::MalformedText { ty: TY, reason: "text is not UTF-8" })?;
      ITxtText::Plain(s.to_owned())
    };
    Ok(Self {
      keyword,
      compression_flag,
      compression_method,
      language_tag,
      translated_keyword,
      text,
    })
  }
}
impl core::fmt::Display for iTXt {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    writeln!(f)?;
    writeln!(f, "\tKeyword = {}", self.keyword)?;
    let flag = if self.compression_flag == 0 { "Uncompressed" } else { "Compressed" };
    writeln!(f, "\tCompression flag = {} ({flag})", self.compression_flag)?;
    writeln!(f, "\tCompression method = {} (zlib deflate/inflate)", self.compression_method)?;
    writeln!(f, "\tLanguage tag = {}", OneLine(&self.language_tag))?;
    writeln!(f, "\tTranslated keyword (UTF-8) = {}", OneLine(&self.translated_keyword))?;
    match &self.text {
      ITxtText::Plain(text) => write!(f, "\tText (UTF-8) = {}", OneLine(text)),
      ITxtText::Compressed { len } => write!(f, "\tText (compressed) = {len} bytes"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_plain() {
    let t = iTXt::try_from("Title\0\0\0fr\0Titre\0Été".as_bytes()).unwrap();
    assert_eq!(t.language_tag, "fr");
    assert_eq!(t.translated_keyword, "Titre");
    assert_eq!(t.text, ITxtText::Plain("Été".into()));
    assert!(t.to_string().ends_with("\tText (UTF-8) = Été"));
  }

  #[test]
  fn test_compressed() {
    let t = iTXt::try_from(&b"Title\0\x01\0\0\0\x78\x9c\x03\0"[..]).unwrap();
    assert_eq!(t.language_tag, "");
    assert_eq!(t.text, ITxtText::Compressed { len: 4 });
  }

  #[test]
  fn test_bad_fields() {
    assert!(matches!(
      iTXt::try_from(&b"Title\0\x02\0\0\0"[..]),
      Err(PngError::ValueOutOfRange { field: "compression flag", .. })
    ));
    assert!(matches!(
      iTXt::try_from(&b"Title\0\0\0en"[..]),
      Err(PngError::MalformedText { .. })
    ));
    assert!(matches!(
      iTXt::try_from(&b"Title\0\0\0\0\0\xFF"[..]),
      Err(PngError::MalformedText { .. })
    ));
  }
}
