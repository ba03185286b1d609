//! NUL-terminated text fields.
//!
//! Keywords (text keys, profile names, palette names, calibration names) are
//! 1 to 79 bytes of printable ASCII followed by a NUL. Other text fields are
//! Latin-1 or UTF-8 and may be empty, but still end in a NUL.

use super::*;

/// The longest keyword allowed, not counting the NUL.
pub const MAX_KEYWORD_LEN: usize = 79;

/// Reads a keyword starting at `offset`.
///
/// Gives back the keyword text and the number of bytes consumed, which
/// includes the NUL terminator.
pub fn read_keyword(payload: &[u8], offset: usize) -> Result<(String, usize), &'static str> {
  let field = payload.get(offset..).unwrap_or(&[]);
  let mut text = String::new();
  for &b in field.iter().take(MAX_KEYWORD_LEN + 1) {
    match b {
      0 if text.is_empty() => return Err("empty keyword"),
      0 => {
        let used = text.len() + 1;
        return Ok((text, used));
      }
      0x20..=0x7E if text.len() < MAX_KEYWORD_LEN => text.push(b as char),
      0x20..=0x7E => return Err("keyword longer than 79 bytes"),
      _ => return Err("keyword contains a non-printable byte"),
    }
  }
  Err("keyword is not terminated")
}

fn nul_terminated(bytes: &[u8]) -> Option<&[u8]> {
  bytes.iter().position(|&b| b == 0).map(|end| &bytes[..end])
}

impl ByteCursor<'_> {
  /// Reads a keyword field and moves past its terminator.
  pub fn keyword(&mut self, ty: ChunkTy) -> PngResult<String> {
    let (text, used) =
      read_keyword(self.peek_rest(), 0).map_err(|reason| PngError::MalformedText { ty, reason })?;
    self.skip(used)?;
    Ok(text)
  }

  /// Reads a NUL-terminated Latin-1 field, which may be empty.
  pub fn latin1_field(&mut self, ty: ChunkTy) -> PngResult<String> {
    let field = nul_terminated(self.peek_rest())
      .ok_or(PngError::MalformedText { ty, reason: "text field is not terminated" })?;
    self.skip(field.len() + 1)?;
    Ok(latin1_to_string(field))
  }

  /// Reads a NUL-terminated UTF-8 field, which may be empty.
  pub fn utf8_field(&mut self, ty: ChunkTy) -> PngResult<String> {
    let field = nul_terminated(self.peek_rest())
      .ok_or(PngError::MalformedText { ty, reason: "text field is not terminated" })?;
    let text = core::str::from_utf8(field)
      .map_err(|_| PngError::MalformedText { ty, reason: "text field is not UTF-8" })?;
    self.skip(field.len() + 1)?;
    Ok(text.to_owned())
  }
}

/// Latin-1 maps byte for byte onto the first 256 code points.
#[must_use]
pub fn latin1_to_string(bytes: &[u8]) -> String {
  bytes.iter().map(|&b| b as char).collect()
}

/// Checks a text field holding a decimal floating point number, such as the
/// fields of `sCAL` and `pCAL`.
#[must_use]
pub fn is_numeric_text(bytes: &[u8]) -> bool {
  let digits = bytes.iter().filter(|b| b.is_ascii_digit()).count();
  digits > 0 && bytes.iter().all(|b| matches!(b, b'0'..=b'9' | b'.' | b'+' | b'-' | b'e' | b'E'))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_read_keyword_counts_terminator() {
    assert_eq!(read_keyword(b"Title\0Hello", 0), Ok((String::from("Title"), 6)));
    assert_eq!(read_keyword(b"\x08Software\0", 1), Ok((String::from("Software"), 9)));
  }

  #[test]
  fn test_read_keyword_failures() {
    assert!(read_keyword(b"\0rest", 0).is_err());
    assert!(read_keyword(b"no terminator", 0).is_err());
    assert!(read_keyword(b"tab\there\0", 0).is_err());
    assert!(read_keyword(b"", 0).is_err());
    assert!(read_keyword(b"abc\0", 10).is_err());
  }

  #[test]
  fn test_read_keyword_length_cap() {
    let mut max = vec![b'k'; MAX_KEYWORD_LEN];
    max.push(0);
    assert_eq!(read_keyword(&max, 0).map(|(_, used)| used), Ok(80));

    let mut over = vec![b'k'; MAX_KEYWORD_LEN + 1];
    over.push(0);
    assert!(read_keyword(&over, 0).is_err());
  }

  #[test]
  fn test_cursor_fields() {
    let mut c = ByteCursor::new(b"Comment\0en\0\xC3\xA9t\xC3\xA9\0caf\xE9");
    assert_eq!(c.keyword(ChunkTy::iTXt).unwrap(), "Comment");
    assert_eq!(c.latin1_field(ChunkTy::iTXt).unwrap(), "en");
    assert_eq!(c.utf8_field(ChunkTy::iTXt).unwrap(), "été");
    assert!(matches!(c.latin1_field(ChunkTy::iTXt), Err(PngError::MalformedText { .. })));
    assert_eq!(latin1_to_string(c.rest()), "café");
  }

  #[test]
  fn test_numeric_text() {
    assert!(is_numeric_text(b"1.5"));
    assert!(is_numeric_text(b"-2e10"));
    assert!(!is_numeric_text(b""));
    assert!(!is_numeric_text(b"."));
    assert!(!is_numeric_text(b"12 m"));
  }
}
